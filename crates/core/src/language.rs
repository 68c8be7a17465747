//! Language definitions for the Rafiki assistant
//!
//! Rafiki serves a bilingual audience: English and Kiswahili. No other
//! language is modeled; text that matches neither is treated as English,
//! the safer default for a mixed-fluency audience.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Kiswahili,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Kiswahili => "sw",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Kiswahili => "Kiswahili",
        }
    }

    /// Sentence terminators for this language
    ///
    /// Both supported languages use Latin script punctuation.
    pub fn sentence_terminators(&self) -> &'static [char] {
        &['.', '?', '!']
    }

    /// Parse from string (case-insensitive), accepting codes and names
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "sw" | "swa" | "kiswahili" | "swahili" => Some(Self::Kiswahili),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Kiswahili]
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Kiswahili.code(), "sw");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str_loose("sw"), Some(Language::Kiswahili));
        assert_eq!(Language::from_str_loose("Swahili"), Some(Language::Kiswahili));
        assert_eq!(Language::from_str_loose("ENGLISH"), Some(Language::English));
        assert_eq!(Language::from_str_loose("french"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Language::Kiswahili).unwrap();
        assert_eq!(json, "\"kiswahili\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Kiswahili);
    }
}
