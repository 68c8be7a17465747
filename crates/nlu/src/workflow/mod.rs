//! Workflow resolution
//!
//! Maps procedural intents to named, multi-step workflow descriptors.
//! Conversational intents (greeting, help, unknown, service inquiry)
//! resolve to no workflow. Descriptors are built fresh per call from a
//! fixed template table and never shared or mutated.

use serde::{Deserialize, Serialize};

use rafiki_core::SessionContext;

use crate::entities::Entities;
use crate::intent::Intent;

/// A named, ordered plan for fulfilling an intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDescriptor {
    /// Workflow display name
    pub name: String,
    /// Ordered guidance steps
    pub steps: Vec<String>,
    /// External URLs involved in the workflow
    pub urls: Vec<String>,
    /// Whether the workflow implies authenticated navigation
    pub requires_authentication: bool,
    /// Whether an SMS confirmation offer applies
    pub sms_confirmation: bool,
}

/// Intent-to-workflow resolver
///
/// Stateless and idempotent: identical inputs always yield structurally
/// identical descriptors.
pub struct WorkflowResolver;

impl WorkflowResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve the workflow for a classified intent
    ///
    /// `entities` and `session` are accepted for forward extensibility;
    /// the current table does not branch on them.
    pub fn resolve(
        &self,
        intent: Intent,
        _entities: &Entities,
        _session: Option<&SessionContext>,
    ) -> Option<WorkflowDescriptor> {
        match intent {
            Intent::KraNilReturns => Some(WorkflowDescriptor {
                name: "KRA Nil Returns Filing".to_string(),
                steps: steps(&[
                    "Confirm user has KRA PIN",
                    "Explain nil returns eligibility",
                    "Navigate to iTax portal",
                    "Guide through login",
                    "Guide through nil returns form",
                    "Confirm submission",
                    "Offer SMS confirmation",
                ]),
                urls: urls(&["https://accounts.ecitizen.go.ke/en/services/itax"]),
                requires_authentication: true,
                sms_confirmation: true,
            }),
            Intent::KraPinRecovery => Some(WorkflowDescriptor {
                name: "KRA PIN Recovery".to_string(),
                steps: steps(&[
                    "Verify user identity (national ID)",
                    "Explain recovery process",
                    "Ask for registered email/phone",
                    "Guide through recovery link",
                    "Confirm new PIN delivery",
                    "Offer SMS confirmation",
                ]),
                urls: urls(&["https://accounts.ecitizen.go.ke/en/services/pin-recovery"]),
                requires_authentication: false,
                sms_confirmation: true,
            }),
            Intent::KraPinGeneration => Some(WorkflowDescriptor {
                name: "KRA PIN Generation".to_string(),
                steps: steps(&[
                    "Verify user identity (national ID)",
                    "Explain PIN requirements",
                    "Navigate to iTax registration",
                    "Guide through registration form",
                    "Confirm PIN assignment",
                    "Offer SMS PIN confirmation",
                ]),
                urls: urls(&["https://accounts.ecitizen.go.ke/en/services/pin-registration"]),
                requires_authentication: false,
                sms_confirmation: true,
            }),
            Intent::ItaxHelp => Some(WorkflowDescriptor {
                name: "iTax Portal Assistance".to_string(),
                steps: steps(&[
                    "Determine specific issue",
                    "Provide login guidance",
                    "Offer step-by-step help",
                    "Confirm issue resolved",
                ]),
                urls: urls(&["https://itax.kra.go.ke"]),
                requires_authentication: true,
                sms_confirmation: false,
            }),
            Intent::BookAppointment => Some(WorkflowDescriptor {
                name: "Appointment Booking".to_string(),
                steps: steps(&[
                    "Confirm service type",
                    "Verify user identity",
                    "Confirm preferred date/time",
                    "Take contact details",
                    "Send SMS confirmation",
                ]),
                urls: Vec::new(),
                requires_authentication: false,
                sms_confirmation: true,
            }),
            _ => None,
        }
    }
}

impl Default for WorkflowResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn urls(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
