//! Core types for the Rafiki assistant backend
//!
//! This crate provides foundational types used across the workspace:
//! - Language definitions (English and Kiswahili)
//! - Conversation types (turns, roles)
//! - Caller-owned session context
//! - Error types

pub mod conversation;
pub mod error;
pub mod language;
pub mod session;

pub use conversation::{Turn, TurnMetadata, TurnRole};
pub use error::{Error, Result};
pub use language::Language;
pub use session::SessionContext;
