use crate::utils::error::{Fault, FaultKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry on the failure log side channel.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub label: String,
    pub kind: FaultKind,
    pub declared: bool,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl FailureRecord {
    pub fn new<F: Fault + ?Sized>(label: &str, fault: &F) -> Self {
        let kind = fault.kind();
        Self {
            label: label.to_string(),
            kind,
            declared: kind.is_declared(),
            description: fault.describe(),
            recorded_at: Utc::now(),
        }
    }
}

/// The four guarded demonstrations, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demonstration {
    Division,
    ArrayAccess,
    StringLength,
    MarksValidation,
}

impl Demonstration {
    pub const ALL: [Demonstration; 4] = [
        Demonstration::Division,
        Demonstration::ArrayAccess,
        Demonstration::StringLength,
        Demonstration::MarksValidation,
    ];

    pub fn log_label(&self) -> &'static str {
        match self {
            Demonstration::Division => "Invalid division operation",
            Demonstration::ArrayAccess => "Array access failure",
            Demonstration::StringLength => "Null string processing attempt",
            Demonstration::MarksValidation => "Invalid student marks detected",
        }
    }

    pub fn user_prefix(&self) -> &'static str {
        match self {
            Demonstration::Division => "Invalid division operation.",
            Demonstration::ArrayAccess => "Array access failure.",
            Demonstration::StringLength => "Attempted to process a null string.",
            Demonstration::MarksValidation => "Invalid student marks detected.",
        }
    }

    pub fn cleanup_line(&self) -> &'static str {
        match self {
            Demonstration::Division => "Cleanup done after division operation.",
            Demonstration::ArrayAccess => "Cleanup done after array access attempt.",
            Demonstration::StringLength => "Cleanup done after string length check.",
            Demonstration::MarksValidation => "Cleanup done after validating student marks.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub demonstrations: usize,
    pub failures_contained: usize,
    pub cleanups_run: usize,
}
