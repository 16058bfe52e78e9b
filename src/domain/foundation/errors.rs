//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::ValidationSink;

/// Errors that occur during primitive construction (IDs, year-months).
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    ResumeNotFound,
    EntryNotFound,

    // Conflict errors
    NameAlreadyRegistered,
    LimitExceeded,

    // Authorization errors
    Forbidden,

    // Trust boundary errors
    CorruptedBackup,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ResumeNotFound => "RESUME_NOT_FOUND",
            ErrorCode::EntryNotFound => "ENTRY_NOT_FOUND",
            ErrorCode::NameAlreadyRegistered => "NAME_ALREADY_REGISTERED",
            ErrorCode::LimitExceeded => "LIMIT_EXCEEDED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::CorruptedBackup => "CORRUPTED_BACKUP",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// A single field-attributed validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Standard domain error with code, message, and optional details.
///
/// Aggregate operations return this when the validation sink they merged
/// contains at least one entry. `violations` keeps the per-field entries so
/// presentation layers can render field-level feedback.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
    pub violations: Vec<FieldError>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
            violations: Vec::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.clone(),
            details: HashMap::new(),
            violations: vec![FieldError {
                field: field.clone(),
                message,
            }],
        }
        .with_detail("field", field)
    }

    /// Builds a `ValidationFailed` error summarizing every entry of a sink.
    ///
    /// The message joins all recorded messages with newlines, ordered by
    /// field key and then by insertion order within a field.
    pub fn from_sink(sink: &dyn ValidationSink) -> Self {
        let violations: Vec<FieldError> = sink
            .errors_by_field()
            .into_iter()
            .flat_map(|(field, messages)| {
                messages.into_iter().map(move |message| FieldError {
                    field: field.clone(),
                    message,
                })
            })
            .collect();

        let message = violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            code: ErrorCode::ValidationFailed,
            message,
            details: HashMap::new(),
            violations,
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the messages recorded for one field.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Notification, ValidationSink};

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("user_id");
        assert_eq!(format!("{}", err), "Field 'user_id' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("month", 1, 12, 13);
        assert_eq!(
            format!("{}", err),
            "Field 'month' must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ResumeNotFound, "Resume not found");
        assert_eq!(format!("{}", err), "[RESUME_NOT_FOUND] Resume not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "companyName");

        assert_eq!(err.details.get("field"), Some(&"companyName".to_string()));
    }

    #[test]
    fn domain_error_validation_records_single_violation() {
        let err = DomainError::validation("link", "kind mismatch");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.messages_for("link"), vec!["kind mismatch"]);
    }

    #[test]
    fn from_sink_collects_every_entry() {
        let mut sink = Notification::new();
        sink.add_error("career", "overlap");
        sink.add_error("companyName", "required");
        sink.add_error("companyName", "too long");

        let err = DomainError::from_sink(&sink);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.violations.len(), 3);
        assert_eq!(err.messages_for("companyName"), vec!["required", "too long"]);
        assert_eq!(err.message, "overlap\nrequired\ntoo long");
    }

    #[test]
    fn validation_error_converts_with_matching_code() {
        let err: DomainError = ValidationError::out_of_range("month", 1, 12, 0).into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::CorruptedBackup), "CORRUPTED_BACKUP");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
