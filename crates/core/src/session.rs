//! Caller-owned session context
//!
//! The understanding pipeline reads the context but never mutates it.
//! Pinning a session language produces an updated copy for the caller to
//! store; the pipeline retains no reference past a call.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Per-session state owned by the conversation orchestration layer
///
/// All fields are optional. When `preferred_language` is set, language
/// detection for the session is skipped and the pinned value is returned
/// with maximum confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Pinned session language, set when the caller explicitly chose one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<Language>,
    /// Opaque booking progress marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_state: Option<String>,
    /// Wire name of the last classified intent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_intent: Option<String>,
    /// Opaque workflow progress marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_progress: Option<String>,
}

impl SessionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred language
    pub fn with_preferred_language(mut self, language: Language) -> Self {
        self.preferred_language = Some(language);
        self
    }

    /// Set the last classified intent
    pub fn with_last_intent(mut self, intent: impl Into<String>) -> Self {
        self.last_intent = Some(intent.into());
        self
    }

    /// Whether the session language is pinned
    pub fn has_pinned_language(&self) -> bool {
        self.preferred_language.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let ctx = SessionContext::new();
        assert!(!ctx.has_pinned_language());
        assert_eq!(ctx.last_intent, None);
    }

    #[test]
    fn test_pinned_language() {
        let ctx = SessionContext::new().with_preferred_language(Language::Kiswahili);
        assert!(ctx.has_pinned_language());
        assert_eq!(ctx.preferred_language, Some(Language::Kiswahili));
    }

    #[test]
    fn test_deserialize_partial() {
        let ctx: SessionContext =
            serde_json::from_str(r#"{"preferred_language":"kiswahili"}"#).unwrap();
        assert_eq!(ctx.preferred_language, Some(Language::Kiswahili));
        assert_eq!(ctx.booking_state, None);
    }
}
