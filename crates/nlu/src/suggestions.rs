//! Follow-up suggestion lists
//!
//! Short ranked next-action prompts conditioned on the classified intent.
//! Order is significant: callers render these as ranked quick-reply
//! buttons.

use crate::intent::Intent;
use crate::workflow::WorkflowDescriptor;

const NIL_RETURNS_SUGGESTIONS: &[&str] = &[
    "Guide me through filing nil returns",
    "Open iTax portal",
    "Do I qualify for nil returns?",
];

const PIN_RECOVERY_SUGGESTIONS: &[&str] = &[
    "Help me recover my PIN",
    "Send recovery link to my email",
    "Explain the recovery process",
];

const PIN_GENERATION_SUGGESTIONS: &[&str] = &[
    "Apply for a new KRA PIN",
    "What do I need to get a PIN?",
    "Start the registration process",
];

const ITAX_SUGGESTIONS: &[&str] = &[
    "Help me log in to iTax",
    "Reset my iTax password",
    "Open the iTax portal",
];

const BOOKING_SUGGESTIONS: &[&str] = &[
    "Book a morning slot",
    "Book an afternoon slot",
    "Which services can I book?",
];

const GREETING_SUGGESTIONS: &[&str] = &[
    "File nil returns",
    "Recover my KRA PIN",
    "Book an appointment",
];

const HELP_SUGGESTIONS: &[&str] = &[
    "Can you help me navigate?",
    "What services are available?",
    "Go back to main menu",
];

const FALLBACK_SUGGESTIONS: &[&str] = &["Can you clarify that?", "Tell me more", "Try again"];

/// Per-intent suggestion generator
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }

    /// Suggested next actions for the intent, most relevant first
    ///
    /// `workflow` is accepted for forward extensibility; the current lists
    /// key off the intent alone.
    pub fn suggest(&self, intent: Intent, _workflow: Option<&WorkflowDescriptor>) -> Vec<String> {
        let items = match intent {
            Intent::KraNilReturns => NIL_RETURNS_SUGGESTIONS,
            Intent::KraPinRecovery => PIN_RECOVERY_SUGGESTIONS,
            Intent::KraPinGeneration => PIN_GENERATION_SUGGESTIONS,
            Intent::ItaxHelp => ITAX_SUGGESTIONS,
            Intent::BookAppointment => BOOKING_SUGGESTIONS,
            Intent::Greeting => GREETING_SUGGESTIONS,
            Intent::Help => HELP_SUGGESTIONS,
            _ => FALLBACK_SUGGESTIONS,
        };
        items.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_gets_three_suggestions() {
        let generator = SuggestionGenerator::new();
        for intent in [
            Intent::KraNilReturns,
            Intent::KraPinRecovery,
            Intent::KraPinGeneration,
            Intent::ItaxHelp,
            Intent::BookAppointment,
            Intent::Greeting,
            Intent::Help,
            Intent::Confirm,
            Intent::Negate,
            Intent::ServiceInquiry,
            Intent::Unknown,
        ] {
            assert_eq!(generator.suggest(intent, None).len(), 3, "intent: {intent}");
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let generator = SuggestionGenerator::new();
        let suggestions = generator.suggest(Intent::KraNilReturns, None);
        assert_eq!(suggestions[0], "Guide me through filing nil returns");
        assert_eq!(suggestions[2], "Do I qualify for nil returns?");
    }

    #[test]
    fn test_unknown_gets_fallback() {
        let generator = SuggestionGenerator::new();
        let suggestions = generator.suggest(Intent::Unknown, None);
        assert_eq!(suggestions[0], "Can you clarify that?");
    }
}
