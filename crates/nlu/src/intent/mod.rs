//! Intent classification
//!
//! A fixed, ordered rule cascade evaluated top to bottom: the first rule
//! whose keyword set matches wins, and earlier rules are more specific
//! than later ones. Precedence is data, not control flow: the cascade is
//! an explicit list so the rule order itself can be unit-tested.
//!
//! A rule matches when any of its keywords appears as a substring of the
//! normalized text. Matching is not tokenized ("itax" matches inside
//! "mynameitax123"); this is a known, accepted imprecision.

use serde::{Deserialize, Serialize};

/// Classified user goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Filing a nil (zero-income) tax return
    KraNilReturns,
    /// Recovering a lost/forgotten KRA PIN
    KraPinRecovery,
    /// Applying for a new KRA PIN
    KraPinGeneration,
    /// Help with the iTax portal (login, password, navigation)
    ItaxHelp,
    /// Salutation
    Greeting,
    /// General request for assistance
    Help,
    /// Affirmative answer to a prompt
    Confirm,
    /// Negative answer or cancellation
    Negate,
    /// Question about a government service (passport, ID, permits, ...)
    ServiceInquiry,
    /// Booking a service appointment
    BookAppointment,
    /// No rule fired
    Unknown,
}

impl Intent {
    /// Wire name of the intent
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::KraNilReturns => "kra_nil_returns",
            Intent::KraPinRecovery => "kra_pin_recovery",
            Intent::KraPinGeneration => "kra_pin_generation",
            Intent::ItaxHelp => "itax_help",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::Confirm => "confirm",
            Intent::Negate => "negate",
            Intent::ServiceInquiry => "service_inquiry",
            Intent::BookAppointment => "book_appointment",
            Intent::Unknown => "unknown",
        }
    }

    /// Whether a confirmation message should be offered before the
    /// workflow for this intent runs
    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            Intent::KraNilReturns
                | Intent::KraPinRecovery
                | Intent::KraPinGeneration
                | Intent::BookAppointment
        )
    }

    /// Conversational intents get a chat response rather than a workflow
    pub fn is_conversational(&self) -> bool {
        matches!(
            self,
            Intent::Greeting | Intent::Help | Intent::ServiceInquiry | Intent::Unknown
        )
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const NIL_RETURNS_KEYWORDS: &[&str] = &[
    "nil returns",
    "nil return",
    "zero returns",
    "no income",
    "file returns",
    "file nil",
    "submit returns",
    "annual returns",
    "kra returns",
    "income returns",
    "tax returns",
];

const PIN_RECOVERY_KEYWORDS: &[&str] = &[
    "recover pin",
    "reset pin",
    "forgotten pin",
    "lost pin",
    "pin recovery",
    "forgot pin",
    "pin reset",
    "new pin",
    "pin help",
    "pin issue",
    "pin problem",
];

const PIN_GENERATION_KEYWORDS: &[&str] = &[
    "get pin",
    "generate pin",
    "create pin",
    "new pin",
    "pin application",
    "apply for pin",
    "register for pin",
    "kra pin",
    "pin number",
];

const ITAX_KEYWORDS: &[&str] = &[
    "itax",
    "i-tax",
    "login",
    "password",
    "username",
    "dashboard",
    "portal",
    "account",
    "access itax",
];

const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "habari",
    "jambo",
    "asante",
    "karibu",
    "how are you",
    "how are you doing",
];

const HELP_KEYWORDS: &[&str] = &[
    "help",
    "assist",
    "support",
    "guide",
    "explain",
    "clarify",
    "confused",
    "stuck",
    "unclear",
    "msaada",
];

const CONFIRMATION_KEYWORDS: &[&str] = &[
    "yes", "yeah", "yep", "okay", "ok", "sure", "confirmed", "proceed", "go ahead", "continue",
    "ndiyo", "sawa", "kweli",
];

const NEGATION_KEYWORDS: &[&str] = &[
    "no", "nope", "cancel", "stop", "don't", "dont", "back", "previous", "hapana", "simu",
    "usisoma",
];

const SERVICE_KEYWORDS: &[&str] = &["passport", "id", "license", "permit", "conduct", "birth"];

const BOOKING_KEYWORDS: &[&str] = &["book", "appointment", "schedule", "reserve"];

/// One entry of the rule cascade
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Intent returned when this rule fires
    pub intent: Intent,
    /// Fixed confidence weight of the rule
    pub confidence: f32,
    keywords: &'static [&'static str],
}

impl IntentRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Rule-based intent classifier
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Create a classifier with the fixed rule cascade
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::KraNilReturns,
                confidence: 0.95,
                keywords: NIL_RETURNS_KEYWORDS,
            },
            IntentRule {
                intent: Intent::KraPinRecovery,
                confidence: 0.95,
                keywords: PIN_RECOVERY_KEYWORDS,
            },
            IntentRule {
                intent: Intent::KraPinGeneration,
                confidence: 0.90,
                keywords: PIN_GENERATION_KEYWORDS,
            },
            IntentRule {
                intent: Intent::ItaxHelp,
                confidence: 0.85,
                keywords: ITAX_KEYWORDS,
            },
            IntentRule {
                intent: Intent::Greeting,
                confidence: 0.90,
                keywords: GREETING_KEYWORDS,
            },
            IntentRule {
                intent: Intent::Help,
                confidence: 0.85,
                keywords: HELP_KEYWORDS,
            },
            IntentRule {
                intent: Intent::Confirm,
                confidence: 0.80,
                keywords: CONFIRMATION_KEYWORDS,
            },
            IntentRule {
                intent: Intent::Negate,
                confidence: 0.80,
                keywords: NEGATION_KEYWORDS,
            },
            IntentRule {
                intent: Intent::ServiceInquiry,
                confidence: 0.85,
                keywords: SERVICE_KEYWORDS,
            },
            IntentRule {
                intent: Intent::BookAppointment,
                confidence: 0.80,
                keywords: BOOKING_KEYWORDS,
            },
        ];

        Self { rules }
    }

    /// Classify normalized (lowercased, trimmed) text
    ///
    /// Returns the first matching rule's intent and confidence, or
    /// [`Intent::Unknown`] at 0.5 when no rule fires.
    pub fn classify(&self, normalized: &str) -> (Intent, f32) {
        for rule in &self.rules {
            if rule.matches(normalized) {
                tracing::debug!(intent = %rule.intent, confidence = rule.confidence, "rule fired");
                return (rule.intent, rule.confidence);
            }
        }
        (Intent::Unknown, 0.5)
    }

    /// The ordered rule cascade
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_returns_intent() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.classify("i want to file nil returns");
        assert_eq!(intent, Intent::KraNilReturns);
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn test_pin_recovery_intent() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.classify("help me with pin recovery");
        assert_eq!(intent, Intent::KraPinRecovery);
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn test_pin_generation_intent() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.classify("i want to apply for pin");
        assert_eq!(intent, Intent::KraPinGeneration);
        assert_eq!(confidence, 0.90);
    }

    #[test]
    fn test_greeting_intent() {
        let classifier = IntentClassifier::new();
        let (intent, _) = classifier.classify("jambo");
        assert_eq!(intent, Intent::Greeting);
    }

    #[test]
    fn test_nil_returns_beats_greeting() {
        // Rule 1 precedes rule 5 even though both match.
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.classify("hi, i need to file nil returns");
        assert_eq!(intent, Intent::KraNilReturns);
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn test_recovery_beats_generation_on_new_pin() {
        // "new pin" appears in both keyword lists; the earlier rule wins.
        let classifier = IntentClassifier::new();
        let (intent, _) = classifier.classify("i need a new pin");
        assert_eq!(intent, Intent::KraPinRecovery);
    }

    #[test]
    fn test_service_inquiry() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.classify("where do i renew my passport");
        assert_eq!(intent, Intent::ServiceInquiry);
        assert_eq!(confidence, 0.85);
    }

    #[test]
    fn test_booking_intent() {
        let classifier = IntentClassifier::new();
        let (intent, _) = classifier.classify("i want an appointment tomorrow");
        assert_eq!(intent, Intent::BookAppointment);
    }

    #[test]
    fn test_confirmation_and_negation() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("ndiyo, proceed").0, Intent::Confirm);
        assert_eq!(classifier.classify("hapana, cancel that").0, Intent::Negate);
    }

    #[test]
    fn test_unknown_fallback() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.classify("what's the weather today?");
        assert_eq!(intent, Intent::Unknown);
        assert_eq!(confidence, 0.5);
    }

    #[test]
    fn test_substring_matching_is_untokenized() {
        // Accepted imprecision: keyword hits inside longer tokens count.
        let classifier = IntentClassifier::new();
        let (intent, _) = classifier.classify("mynameitax123");
        assert_eq!(intent, Intent::ItaxHelp);
    }

    #[test]
    fn test_rule_order_is_stable() {
        let classifier = IntentClassifier::new();
        let order: Vec<Intent> = classifier.rules().iter().map(|r| r.intent).collect();
        assert_eq!(order[0], Intent::KraNilReturns);
        assert_eq!(order[1], Intent::KraPinRecovery);
        assert_eq!(order[4], Intent::Greeting);
        assert_eq!(order[9], Intent::BookAppointment);
    }

    #[test]
    fn test_intent_predicates() {
        assert!(Intent::KraNilReturns.requires_confirmation());
        assert!(Intent::BookAppointment.requires_confirmation());
        assert!(!Intent::Greeting.requires_confirmation());
        assert!(Intent::Unknown.is_conversational());
        assert!(Intent::ServiceInquiry.is_conversational());
        assert!(!Intent::KraPinRecovery.is_conversational());
    }
}
