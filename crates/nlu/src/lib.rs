//! Language & Intent Understanding Pipeline for the Rafiki assistant
//!
//! Routes free-form bilingual (English/Kiswahili) utterances to
//! government-service workflows:
//!
//! - **Language detection** with code-switch segmentation
//! - **Intent classification** over an ordered keyword-rule cascade
//! - **Entity extraction** (phone numbers, national IDs, KRA PINs, emails,
//!   names, dates, time slots)
//! - **Workflow resolution** to step-by-step service plans
//! - **Suggestion generation** for ranked quick replies
//!
//! The pipeline is pure, synchronous computation: no I/O, no shared mutable
//! state, safe to call concurrently as long as each in-flight call gets its
//! own [`SessionContext`](rafiki_core::SessionContext) reference.
//!
//! # Example
//!
//! ```
//! use rafiki_nlu::{Analyzer, Intent};
//!
//! let analyzer = Analyzer::new().unwrap();
//! let result = analyzer.analyze("I want to file nil returns", &[], None);
//!
//! assert_eq!(result.intent, Intent::KraNilReturns);
//! assert!(result.workflow.is_some());
//! ```

pub mod entities;
pub mod intent;
pub mod language;
pub mod suggestions;
pub mod workflow;

mod error;
mod pipeline;

pub use error::{NluError, Result};
pub use pipeline::{AnalysisStage, Analyzer, AnalyzerConfig, IntentResult};

// Component re-exports
pub use entities::{Entities, EntityExtractor, ServiceType, TimeSlot};
pub use intent::{Intent, IntentClassifier, IntentRule};
pub use language::{CodeSwitchSegment, Detection, DetectionWeights, LanguageDetector};
pub use suggestions::SuggestionGenerator;
pub use workflow::{WorkflowDescriptor, WorkflowResolver};
