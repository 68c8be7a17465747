//! Entity extraction
//!
//! Pattern-based extraction of structured values from raw utterance text.
//! Fields are independent; several may be populated from one utterance.
//! Extraction is a pure function of the text and the already-classified
//! intent: the intent gates booking-only fields and the derived service
//! flags, nothing else.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Appointment time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
}

impl TimeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// KRA service backing a workflow-bearing intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    NilReturns,
    PinRecovery,
    PinGeneration,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::NilReturns => "nil_returns",
            ServiceType::PinRecovery => "pin_recovery",
            ServiceType::PinGeneration => "pin_generation",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entities pulled out of one utterance
///
/// Every field is optional: `None` means "not stated", never "empty".
/// This keeps "false" and "not found" distinguishable for the boolean
/// flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    /// Kenyan mobile number (07.. / 01.. / +254..)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// KRA PIN, 10 digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kra_pin: Option<String>,
    /// National ID, 8 digits (whitespace stripped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Person name, two title-case words
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Requested date, as written (booking only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Requested time slot (booking only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
    /// Stated yes/no answer (confirm/negate intents only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<bool>,
    /// Which KRA service the intent maps to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    /// Whether the nil-returns flow still needs a KRA PIN from the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_pin: Option<bool>,
    /// Whether the PIN flows still need a national ID from the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_identification: Option<bool>,
}

impl Entities {
    /// Check whether anything was extracted
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_none()
            && self.kra_pin.is_none()
            && self.national_id.is_none()
            && self.email.is_none()
            && self.user_name.is_none()
            && self.date.is_none()
            && self.time_slot.is_none()
            && self.confirmation.is_none()
            && self.service_type.is_none()
            && self.requires_pin.is_none()
            && self.requires_identification.is_none()
    }
}

// Compiled extraction patterns

// Kenyan mobile: 07../01.. local form or +254-prefixed international form.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+254[17]\d{8}|\b0[17]\d{8})\b").unwrap());

// KRA PIN: exactly 10 consecutive digits as a whole word.
static KRA_PIN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").unwrap());

// National ID: 8 digits, or 4 digit pairs optionally separated by spaces.
// Word-bounded on both sides so a 10-digit PIN never matches.
static NATIONAL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{8}\b|\b\d{2}\s+\d{2}\s*\d{2}\s*\d{2}\b").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").unwrap());

// Two consecutive title-case words. Capitalized mid-sentence words produce
// false positives; accepted limitation.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+\s+[A-Z][a-z]+)\b").unwrap());

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b").unwrap());

/// Pattern-based entity extractor
pub struct EntityExtractor;

impl EntityExtractor {
    /// Create an extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract all entities from raw (non-normalized) text
    pub fn extract(&self, text: &str, intent: Intent) -> Entities {
        let mut entities = Entities::default();

        if let Some(m) = PHONE_PATTERN.find(text) {
            entities.phone_number = Some(m.as_str().to_string());
        }

        if let Some(m) = KRA_PIN_PATTERN.find(text) {
            entities.kra_pin = Some(m.as_str().to_string());
        }

        if let Some(m) = NATIONAL_ID_PATTERN.find(text) {
            let id: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            entities.national_id = Some(id);
        }

        if let Some(m) = EMAIL_PATTERN.find(text) {
            entities.email = Some(m.as_str().to_string());
        }

        if let Some(captures) = NAME_PATTERN.captures(text) {
            if let Some(m) = captures.get(1) {
                entities.user_name = Some(m.as_str().to_string());
            }
        }

        self.apply_intent_fields(text, intent, &mut entities);

        tracing::debug!(intent = %intent, empty = entities.is_empty(), "entities extracted");
        entities
    }

    /// Intent-conditioned fields and derived flags
    fn apply_intent_fields(&self, text: &str, intent: Intent, entities: &mut Entities) {
        match intent {
            Intent::BookAppointment => {
                if let Some(captures) = DATE_PATTERN.captures(text) {
                    if let Some(m) = captures.get(1) {
                        entities.date = Some(m.as_str().to_string());
                    }
                }

                // "morning" wins over "afternoon" when both are present.
                let lower = text.to_lowercase();
                if lower.contains("morning") || lower.contains("am") {
                    entities.time_slot = Some(TimeSlot::Morning);
                } else if lower.contains("afternoon") || lower.contains("pm") {
                    entities.time_slot = Some(TimeSlot::Afternoon);
                }
            }
            Intent::KraNilReturns => {
                entities.service_type = Some(ServiceType::NilReturns);
                entities.requires_pin = Some(entities.kra_pin.is_none());
            }
            Intent::KraPinRecovery => {
                entities.service_type = Some(ServiceType::PinRecovery);
                entities.requires_identification = Some(entities.national_id.is_none());
            }
            Intent::KraPinGeneration => {
                entities.service_type = Some(ServiceType::PinGeneration);
                entities.requires_identification = Some(entities.national_id.is_none());
            }
            Intent::Confirm => {
                entities.confirmation = Some(true);
            }
            Intent::Negate => {
                entities.confirmation = Some(false);
            }
            _ => {}
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
