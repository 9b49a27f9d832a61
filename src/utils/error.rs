use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Every failure kind a demonstration can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaultKind {
    DivisionByZero,
    InvalidArgument,
    IndexOutOfRange,
    NullReference,
    DomainValidationFailure,
}

impl FaultKind {
    pub fn name(&self) -> &'static str {
        match self {
            FaultKind::DivisionByZero => "DivisionByZero",
            FaultKind::InvalidArgument => "InvalidArgument",
            FaultKind::IndexOutOfRange => "IndexOutOfRange",
            FaultKind::NullReference => "NullReference",
            FaultKind::DomainValidationFailure => "DomainValidationFailure",
        }
    }

    /// Only the domain validation failure is part of a function's signature.
    pub fn is_declared(&self) -> bool {
        matches!(self, FaultKind::DomainValidationFailure)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common surface of the failures raised by the validators.
pub trait Fault: std::error::Error {
    fn kind(&self) -> FaultKind;

    /// `"<Kind>: <message>"`, the form written to the failure log.
    fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}

/// Undeclared failures. Any validator may return these without its
/// signature naming the particular variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeFault {
    #[error("{message}")]
    DivisionByZero { message: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Index {index} is outside valid range (0 to {}).", last_index(.len))]
    IndexOutOfRange { index: i64, len: usize },

    #[error("{message}")]
    NullReference { message: String },
}

fn last_index(len: &usize) -> i64 {
    *len as i64 - 1
}

impl Fault for RuntimeFault {
    fn kind(&self) -> FaultKind {
        match self {
            RuntimeFault::DivisionByZero { .. } => FaultKind::DivisionByZero,
            RuntimeFault::InvalidArgument { .. } => FaultKind::InvalidArgument,
            RuntimeFault::IndexOutOfRange { .. } => FaultKind::IndexOutOfRange,
            RuntimeFault::NullReference { .. } => FaultKind::NullReference,
        }
    }
}

/// Declared failure of [`check_marks`](crate::core::validators::check_marks).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Received marks ({marks}) are invalid. Marks must be between {min} and {max} inclusive.")]
pub struct InvalidStudentMarks {
    pub marks: i32,
    pub min: i32,
    pub max: i32,
}

impl Fault for InvalidStudentMarks {
    fn kind(&self) -> FaultKind {
        FaultKind::DomainValidationFailure
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Runtime fault: {0}")]
    Runtime(#[from] RuntimeFault),

    #[error("Validation error: {0}")]
    InvalidMarks(#[from] InvalidStudentMarks),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Runtime,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::ParseError(_) | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::Runtime(_) => ErrorCategory::Runtime,
            DemoError::InvalidMarks(_) => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Runtime => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// The fault kind, when the error came out of a validator.
    pub fn fault_kind(&self) -> Option<FaultKind> {
        match self {
            DemoError::Runtime(fault) => Some(fault.kind()),
            DemoError::InvalidMarks(fault) => Some(fault.kind()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read the scenario file: {}", e),
            DemoError::ParseError(e) => format!("The scenario file is not valid TOML: {}", e),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DemoError::Runtime(fault) => fault.to_string(),
            DemoError::InvalidMarks(fault) => fault.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the scenario path exists and is readable",
            ErrorCategory::Configuration => {
                "Fix the scenario file or run without --scenario to use the built-in inputs"
            }
            ErrorCategory::Runtime => "Adjust the inputs passed to the operation",
            ErrorCategory::Validation => "Use marks between 0 and 100 inclusive",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_message_reports_valid_range() {
        let fault = RuntimeFault::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(fault.to_string(), "Index 5 is outside valid range (0 to 2).");
        assert_eq!(
            fault.describe(),
            "IndexOutOfRange: Index 5 is outside valid range (0 to 2)."
        );
    }

    #[test]
    fn test_empty_sequence_range() {
        let fault = RuntimeFault::IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(fault.to_string(), "Index 0 is outside valid range (0 to -1).");
    }

    #[test]
    fn test_only_marks_failure_is_declared() {
        let marks = InvalidStudentMarks { marks: 105, min: 0, max: 100 };
        assert!(marks.kind().is_declared());
        assert!(!FaultKind::InvalidArgument.is_declared());
        assert!(!FaultKind::NullReference.is_declared());
    }

    #[test]
    fn test_demo_error_classification() {
        let err: DemoError = InvalidStudentMarks { marks: -1, min: 0, max: 100 }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.fault_kind(), Some(FaultKind::DomainValidationFailure));

        let err: DemoError = RuntimeFault::NullReference {
            message: "null".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Runtime);
        assert_eq!(err.fault_kind(), Some(FaultKind::NullReference));

        let err = DemoError::InvalidConfigValueError {
            field: "log_format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.fault_kind(), None);

        let err: DemoError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
