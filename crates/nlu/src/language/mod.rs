//! Language detection and code-switch segmentation
//!
//! Scores an utterance against English and Kiswahili lexical evidence and
//! returns the dominant language with a confidence score. Kiswahili must
//! beat English by a margin before it wins; ambiguous or short text falls
//! back to English.
//!
//! The same scalar detector runs per sentence to segment a multi-sentence
//! utterance into code-switch runs.

mod vocabulary;

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use rafiki_core::{Language, SessionContext};

use crate::error::Result;

/// Language detection result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected language
    pub language: Language,
    /// Confidence in [0, 1]
    pub confidence: f32,
}

/// One single-language run inside a longer utterance
///
/// Consecutive segments never share a language tag; adjacent same-language
/// sentences are merged into one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSwitchSegment {
    /// Sentence content of the run, sentences joined with ". "
    pub text: String,
    /// Language of the run
    pub language: Language,
    /// Best-effort character offset of the run start in the original text
    pub start: usize,
    /// Best-effort character offset of the run end in the original text
    pub end: usize,
}

/// Scoring weights for the detector
///
/// These are hand-tuned calibration constants carried over from production
/// transcripts, not derived values. Keep the defaults unless retuning
/// against a labeled utterance set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionWeights {
    /// Weight of the Kiswahili vocabulary word fraction
    pub kiswahili_vocabulary: f32,
    /// Weight of the Kiswahili morphology pattern fraction
    pub kiswahili_patterns: f32,
    /// Weight of the English vocabulary word fraction
    pub english_vocabulary: f32,
    /// Score added when an English contraction is present
    pub english_contraction: f32,
    /// Score added when English function words are present
    pub english_function_words: f32,
    /// Score added per matched common phrase
    pub phrase_hit: f32,
    /// Cap on the total phrase contribution
    pub phrase_cap: f32,
    /// Margin Kiswahili must exceed English by to win
    pub kiswahili_margin: f32,
    /// Confidence reported when neither language has any evidence
    pub zero_evidence_confidence: f32,
}

impl Default for DetectionWeights {
    fn default() -> Self {
        Self {
            kiswahili_vocabulary: 0.5,
            kiswahili_patterns: 0.3,
            english_vocabulary: 0.4,
            english_contraction: 0.2,
            english_function_words: 0.3,
            phrase_hit: 0.1,
            phrase_cap: 0.2,
            kiswahili_margin: 0.2,
            zero_evidence_confidence: 0.6,
        }
    }
}

/// Bilingual language detector
pub struct LanguageDetector {
    weights: DetectionWeights,
    kiswahili_vocabulary: HashSet<&'static str>,
    english_vocabulary: HashSet<&'static str>,
    kiswahili_patterns: Vec<Regex>,
    contraction: Regex,
    function_words: Regex,
}

impl LanguageDetector {
    /// Create a detector with the default calibration
    pub fn new() -> Result<Self> {
        Self::with_weights(DetectionWeights::default())
    }

    /// Create a detector with custom weights
    pub fn with_weights(weights: DetectionWeights) -> Result<Self> {
        let kiswahili_patterns = vocabulary::KISWAHILI_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            weights,
            kiswahili_vocabulary: vocabulary::KISWAHILI_VOCABULARY.iter().copied().collect(),
            english_vocabulary: vocabulary::ENGLISH_VOCABULARY.iter().copied().collect(),
            kiswahili_patterns,
            contraction: Regex::new(vocabulary::ENGLISH_CONTRACTION_PATTERN)?,
            function_words: Regex::new(vocabulary::ENGLISH_FUNCTION_WORD_PATTERN)?,
        })
    }

    /// Detect the language of `text`
    ///
    /// A pinned session language short-circuits detection and is returned
    /// with maximum confidence. Empty or whitespace-only text yields
    /// English at 0.5.
    pub fn detect(&self, text: &str, session: Option<&SessionContext>) -> Detection {
        if let Some(language) = session.and_then(|s| s.preferred_language) {
            return Detection {
                language,
                confidence: 1.0,
            };
        }

        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return Detection {
                language: Language::English,
                confidence: 0.5,
            };
        }

        let sw_score = self.score_kiswahili(&normalized);
        let en_score = self.score_english(&normalized);
        let total = sw_score + en_score;

        // Kiswahili only wins with a clear margin; English is the safer
        // default for short or mixed text.
        if sw_score > en_score + self.weights.kiswahili_margin {
            Detection {
                language: Language::Kiswahili,
                confidence: self.confidence(sw_score, total),
            }
        } else {
            Detection {
                language: Language::English,
                confidence: self.confidence(en_score, total),
            }
        }
    }

    fn confidence(&self, winning: f32, total: f32) -> f32 {
        if total > 0.0 {
            (winning / total).min(1.0)
        } else {
            self.weights.zero_evidence_confidence
        }
    }

    fn score_kiswahili(&self, text: &str) -> f32 {
        let mut score = 0.0;

        let words: Vec<&str> = text.unicode_words().collect();
        if !words.is_empty() {
            let hits = words
                .iter()
                .filter(|w| self.kiswahili_vocabulary.contains(*w))
                .count();
            score += hits as f32 / words.len() as f32 * self.weights.kiswahili_vocabulary;
        }

        let pattern_hits = self
            .kiswahili_patterns
            .iter()
            .filter(|p| p.is_match(text))
            .count();
        score += pattern_hits as f32 / self.kiswahili_patterns.len() as f32
            * self.weights.kiswahili_patterns;

        let phrase_hits = vocabulary::KISWAHILI_PHRASES
            .iter()
            .filter(|p| text.contains(*p))
            .count();
        score += (phrase_hits as f32 * self.weights.phrase_hit).min(self.weights.phrase_cap);

        score.min(1.0)
    }

    fn score_english(&self, text: &str) -> f32 {
        let mut score = 0.0;

        let words: Vec<&str> = text.unicode_words().collect();
        if !words.is_empty() {
            let hits = words
                .iter()
                .filter(|w| self.english_vocabulary.contains(*w))
                .count();
            score += hits as f32 / words.len() as f32 * self.weights.english_vocabulary;
        }

        if self.contraction.is_match(text) {
            score += self.weights.english_contraction;
        }

        if self.function_words.is_match(text) {
            score += self.weights.english_function_words;
        }

        let phrase_hits = vocabulary::ENGLISH_PHRASES
            .iter()
            .filter(|p| text.contains(*p))
            .count();
        score += (phrase_hits as f32 * self.weights.phrase_hit).min(self.weights.phrase_cap);

        score.min(1.0)
    }

    /// Segment `text` into single-language runs
    ///
    /// Splits on sentence-terminating punctuation, scores each sentence,
    /// and merges consecutive same-language sentences. Offsets are
    /// best-effort character positions: sentence splitting discards the
    /// delimiter characters, so they are estimates rather than exact spans.
    pub fn detect_switches(&self, text: &str) -> Vec<CodeSwitchSegment> {
        let terminators = Language::English.sentence_terminators();

        let mut segments = Vec::new();
        let mut current: Option<SegmentRun<'_>> = None;
        let mut offset = 0usize;

        for piece in text.split(terminators) {
            let piece_len = piece.chars().count();
            let trimmed = piece.trim();

            if trimmed.is_empty() {
                offset += piece_len + 1;
                continue;
            }

            let leading = piece.chars().take_while(|c| c.is_whitespace()).count();
            let start = offset + leading;
            let end = start + trimmed.chars().count();

            let language = self.detect(trimmed, None).language;

            match current.as_mut() {
                Some(run) if run.language == language => {
                    run.sentences.push(trimmed);
                    run.end = end;
                }
                _ => {
                    if let Some(run) = current.take() {
                        segments.push(run.finish());
                    }
                    current = Some(SegmentRun {
                        sentences: vec![trimmed],
                        language,
                        start,
                        end,
                    });
                }
            }

            offset += piece_len + 1;
        }

        if let Some(run) = current.take() {
            segments.push(run.finish());
        }

        segments
    }

    /// Pin a session language, returning the updated context
    ///
    /// The caller-supplied context is not mutated; the caller stores the
    /// returned copy.
    pub fn pin_session_language(
        &self,
        language: Language,
        context: &SessionContext,
    ) -> SessionContext {
        tracing::info!(language = %language, "session language pinned");
        context.clone().with_preferred_language(language)
    }
}

/// Accumulator for one in-progress code-switch run
struct SegmentRun<'a> {
    sentences: Vec<&'a str>,
    language: Language,
    start: usize,
    end: usize,
}

impl SegmentRun<'_> {
    fn finish(self) -> CodeSwitchSegment {
        CodeSwitchSegment {
            text: self.sentences.join(". "),
            language: self.language,
            start: self.start,
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> LanguageDetector {
        LanguageDetector::new().unwrap()
    }

    #[test]
    fn test_detect_kiswahili() {
        let d = detector();
        let result = d.detect("habari yako rafiki", None);
        assert_eq!(result.language, Language::Kiswahili);
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_detect_english() {
        let d = detector();
        let result = d.detect("hello, how are you doing", None);
        assert_eq!(result.language, Language::English);
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_kiswahili_needs_margin() {
        // Faint Kiswahili evidence alone is not enough to beat the
        // English default.
        let d = detector();
        let result = d.detect("ok", None);
        assert_eq!(result.language, Language::English);
    }

    #[test]
    fn test_empty_text_defaults_to_english() {
        let d = detector();
        for text in ["", "   ", "\t\n"] {
            let result = d.detect(text, None);
            assert_eq!(result.language, Language::English);
            assert_eq!(result.confidence, 0.5);
        }
    }

    #[test]
    fn test_pinned_language_short_circuits() {
        let d = detector();
        let ctx = SessionContext::new().with_preferred_language(Language::Kiswahili);
        let result = d.detect("this is clearly english text", Some(&ctx));
        assert_eq!(result.language, Language::Kiswahili);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_confidence_in_range() {
        let d = detector();
        let samples = [
            "habari",
            "hello there",
            "nataka kusaidia",
            "file nil returns please",
            "asdkjh qwerty",
            "123 456",
            "",
        ];
        for text in samples {
            let result = d.detect(text, None);
            assert!((0.0..=1.0).contains(&result.confidence), "text: {text:?}");
        }
    }

    #[test]
    fn test_detect_switches_two_languages() {
        let d = detector();
        let segments = d.detect_switches("Hello my friend. Nataka kusaidia leo.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].language, Language::English);
        assert_eq!(segments[1].language, Language::Kiswahili);
        assert_eq!(segments[1].text, "Nataka kusaidia leo");
    }

    #[test]
    fn test_detect_switches_merges_same_language() {
        let d = detector();
        let segments = d.detect_switches("Hello there. Thank you friend! Habari yako.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].language, Language::English);
        assert_eq!(segments[0].text, "Hello there. Thank you friend");
    }

    #[test]
    fn test_detect_switches_no_adjacent_same_language() {
        let d = detector();
        let segments =
            d.detect_switches("Habari yako. Nataka msaada. I need help. Where is the office?");
        for pair in segments.windows(2) {
            assert_ne!(pair[0].language, pair[1].language);
        }
    }

    #[test]
    fn test_detect_switches_reconstructs_sentences() {
        let d = detector();
        let text = "Hello my friend. Nataka kusaidia leo.";
        let segments = d.detect_switches(text);

        let reconstructed: Vec<String> = segments
            .iter()
            .flat_map(|s| s.text.split(". ").map(str::to_string))
            .collect();
        let original: Vec<String> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        assert_eq!(reconstructed, original);
    }

    #[test]
    fn test_detect_switches_offsets_cover_input() {
        let d = detector();
        let text = "Hello there. Habari yako.";
        let segments = d.detect_switches(text);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, 0);
        assert!(segments[0].end <= segments[1].start);
        assert!(segments[1].end <= text.chars().count());
    }

    #[test]
    fn test_detect_switches_empty() {
        let d = detector();
        assert!(d.detect_switches("").is_empty());
        assert!(d.detect_switches("...").is_empty());
    }

    #[test]
    fn test_pin_session_language_returns_updated_copy() {
        let d = detector();
        let original = SessionContext::new();
        let updated = d.pin_session_language(Language::Kiswahili, &original);

        assert_eq!(original.preferred_language, None);
        assert_eq!(updated.preferred_language, Some(Language::Kiswahili));
    }

    #[test]
    fn test_custom_weights() {
        // Zero margin makes faint Kiswahili evidence win immediately.
        let weights = DetectionWeights {
            kiswahili_margin: 0.0,
            ..Default::default()
        };
        let d = LanguageDetector::with_weights(weights).unwrap();
        let result = d.detect("nataka", None);
        assert_eq!(result.language, Language::Kiswahili);
    }
}
