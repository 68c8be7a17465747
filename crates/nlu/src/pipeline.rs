//! Pipeline orchestration
//!
//! Single-pass aggregation of the five understanding stages:
//! language detection, intent classification, entity extraction, workflow
//! resolution and suggestion generation. One utterance in, one
//! [`IntentResult`] out; the only caller-visible state is the optional
//! session context, which is read but never mutated.

use serde::{Deserialize, Serialize};

use rafiki_core::{Language, SessionContext, Turn};

use crate::entities::{Entities, EntityExtractor};
use crate::error::Result;
use crate::intent::{Intent, IntentClassifier};
use crate::language::{DetectionWeights, LanguageDetector};
use crate::suggestions::SuggestionGenerator;
use crate::workflow::{WorkflowDescriptor, WorkflowResolver};

/// Progress marker for one pipeline invocation
///
/// Transitions are unconditional; any internal failure short-circuits to
/// the terminal `Error` state and the fixed fallback result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Start,
    LanguageResolved,
    IntentClassified,
    EntitiesExtracted,
    WorkflowResolved,
    Done,
    Error,
}

impl AnalysisStage {
    /// The stage that follows this one
    pub fn next(&self) -> AnalysisStage {
        match self {
            AnalysisStage::Start => AnalysisStage::LanguageResolved,
            AnalysisStage::LanguageResolved => AnalysisStage::IntentClassified,
            AnalysisStage::IntentClassified => AnalysisStage::EntitiesExtracted,
            AnalysisStage::EntitiesExtracted => AnalysisStage::WorkflowResolved,
            AnalysisStage::WorkflowResolved => AnalysisStage::Done,
            AnalysisStage::Done => AnalysisStage::Done,
            AnalysisStage::Error => AnalysisStage::Error,
        }
    }

    /// Whether this is a terminal stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStage::Done | AnalysisStage::Error)
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Language detector calibration weights
    #[serde(default)]
    pub weights: DetectionWeights,
}

/// Aggregated result of one pipeline invocation
///
/// Every field is well-formed for every input; there is no failure shape
/// beyond the low-confidence `unknown` fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    /// Classified intent
    pub intent: Intent,
    /// Confidence of the classification
    pub confidence: f32,
    /// Detected (or pinned) utterance language
    pub language: Language,
    /// Confidence of the language detection
    pub language_confidence: f32,
    /// Lowercased, trimmed form of the utterance
    pub normalized_text: String,
    /// Extracted entities
    pub entities: Entities,
    /// Workflow for procedural intents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowDescriptor>,
    /// Ranked next-action prompts
    pub suggested_actions: Vec<String>,
    /// Whether a confirmation message should be offered
    pub requires_confirmation: bool,
    /// Whether the intent takes a conversational response
    pub is_conversational: bool,
}

impl IntentResult {
    /// Fixed result returned when a stage fails mid-pipeline
    fn error_fallback() -> Self {
        Self {
            intent: Intent::Unknown,
            confidence: 0.0,
            language: Language::English,
            language_confidence: 0.0,
            normalized_text: String::new(),
            entities: Entities::default(),
            workflow: None,
            suggested_actions: vec!["Could you clarify what you need?".to_string()],
            requires_confirmation: false,
            is_conversational: true,
        }
    }
}

/// The Language & Intent Understanding Pipeline
///
/// Owns one instance of each stage. All methods take `&self`; the
/// analyzer is safe to share across threads as long as concurrent calls
/// for the same session do not share a context write path.
pub struct Analyzer {
    detector: LanguageDetector,
    classifier: IntentClassifier,
    extractor: EntityExtractor,
    resolver: WorkflowResolver,
    suggestions: SuggestionGenerator,
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            detector: LanguageDetector::with_weights(config.weights)?,
            classifier: IntentClassifier::new(),
            extractor: EntityExtractor::new(),
            resolver: WorkflowResolver::new(),
            suggestions: SuggestionGenerator::new(),
        })
    }

    /// Analyze one utterance
    ///
    /// Never fails: any internal error is caught at this boundary and
    /// converted to the fixed `unknown` fallback result.
    pub fn analyze(
        &self,
        utterance: &str,
        history: &[Turn],
        session: Option<&SessionContext>,
    ) -> IntentResult {
        match self.run(utterance, history, session) {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(%error, stage = ?AnalysisStage::Error, "analysis failed");
                IntentResult::error_fallback()
            }
        }
    }

    /// The language detector, for session-language pinning and
    /// code-switch segmentation
    pub fn language_detector(&self) -> &LanguageDetector {
        &self.detector
    }

    fn run(
        &self,
        utterance: &str,
        history: &[Turn],
        session: Option<&SessionContext>,
    ) -> Result<IntentResult> {
        let mut stage = AnalysisStage::Start;
        tracing::debug!(turns = history.len(), "analysis started");

        let detection = self.detector.detect(utterance, session);
        stage = stage.next();
        tracing::trace!(?stage, language = %detection.language);

        let normalized = utterance.trim().to_lowercase();
        let (intent, confidence) = self.classifier.classify(&normalized);
        stage = stage.next();
        tracing::trace!(?stage, intent = %intent);

        let entities = self.extractor.extract(utterance, intent);
        stage = stage.next();
        tracing::trace!(?stage);

        let workflow = self.resolver.resolve(intent, &entities, session);
        stage = stage.next();
        tracing::trace!(?stage, workflow = workflow.as_ref().map(|w| w.name.as_str()));

        let suggested_actions = self.suggestions.suggest(intent, workflow.as_ref());
        stage = stage.next();
        tracing::debug!(?stage, intent = %intent, confidence, "analysis complete");

        Ok(IntentResult {
            intent,
            confidence,
            language: detection.language,
            language_confidence: detection.confidence,
            normalized_text: normalized,
            entities,
            workflow,
            suggested_actions,
            requires_confirmation: intent.requires_confirmation(),
            is_conversational: intent.is_conversational(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_progression() {
        let mut stage = AnalysisStage::Start;
        let expected = [
            AnalysisStage::LanguageResolved,
            AnalysisStage::IntentClassified,
            AnalysisStage::EntitiesExtracted,
            AnalysisStage::WorkflowResolved,
            AnalysisStage::Done,
        ];
        for want in expected {
            stage = stage.next();
            assert_eq!(stage, want);
        }
        assert!(stage.is_terminal());
        // Terminal stages are absorbing
        assert_eq!(AnalysisStage::Done.next(), AnalysisStage::Done);
        assert_eq!(AnalysisStage::Error.next(), AnalysisStage::Error);
    }

    #[test]
    fn test_analyze_basic() {
        let analyzer = Analyzer::new().unwrap();
        let result = analyzer.analyze("Hello", &[], None);
        assert_eq!(result.intent, Intent::Greeting);
        assert!(result.is_conversational);
        assert!(result.workflow.is_none());
    }

    #[test]
    fn test_analyze_normalizes_text() {
        let analyzer = Analyzer::new().unwrap();
        let result = analyzer.analyze("  FILE NIL Returns  ", &[], None);
        assert_eq!(result.normalized_text, "file nil returns");
        assert_eq!(result.intent, Intent::KraNilReturns);
    }

    #[test]
    fn test_error_fallback_shape() {
        let fallback = IntentResult::error_fallback();
        assert_eq!(fallback.intent, Intent::Unknown);
        assert_eq!(fallback.confidence, 0.0);
        assert!(fallback.entities.is_empty());
        assert!(fallback.workflow.is_none());
        assert_eq!(fallback.suggested_actions.len(), 1);
        assert!(fallback.is_conversational);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.weights.kiswahili_margin, 0.2);
        assert_eq!(config.weights.zero_evidence_confidence, 0.6);
    }
}
