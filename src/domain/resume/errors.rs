//! Resume-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, FieldError, ResumeId};

pub const CORRUPTED_BACKUP_MESSAGE: &str = "ファイルが破損しています。";

/// Resume-specific errors surfaced by the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeError {
    /// Resume or child entry was not found.
    NotFound(String),
    /// User is not the owner.
    Forbidden,
    /// Another resume of the user already uses this name.
    NameConflict(String),
    /// A per-user or per-resume cap was reached.
    LimitExceeded(String),
    /// Validation failed; carries every field-attributed entry.
    ValidationFailed { violations: Vec<FieldError> },
    /// A backup document could not be restored. Carries no detail from the
    /// document itself.
    CorruptedBackup,
    /// Infrastructure error.
    Infrastructure(String),
}

impl ResumeError {
    pub fn not_found(id: ResumeId) -> Self {
        ResumeError::NotFound(format!("Resume not found: {}", id))
    }
    pub fn entry_not_found(message: impl Into<String>) -> Self {
        ResumeError::NotFound(message.into())
    }
    pub fn forbidden() -> Self {
        ResumeError::Forbidden
    }
    pub fn name_conflict(name: impl Into<String>) -> Self {
        ResumeError::NameConflict(name.into())
    }
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        ResumeError::LimitExceeded(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ResumeError::ValidationFailed {
            violations: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
    pub fn corrupted_backup() -> Self {
        ResumeError::CorruptedBackup
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ResumeError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ResumeError::NotFound(_) => ErrorCode::ResumeNotFound,
            ResumeError::Forbidden => ErrorCode::Forbidden,
            ResumeError::NameConflict(_) => ErrorCode::NameAlreadyRegistered,
            ResumeError::LimitExceeded(_) => ErrorCode::LimitExceeded,
            ResumeError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ResumeError::CorruptedBackup => ErrorCode::CorruptedBackup,
            ResumeError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ResumeError::NotFound(msg) => msg.clone(),
            ResumeError::Forbidden => "Permission denied".to_string(),
            ResumeError::NameConflict(name) => {
                format!("Resume name already registered: {}", name)
            }
            ResumeError::LimitExceeded(msg) => format!("Limit exceeded: {}", msg),
            ResumeError::ValidationFailed { violations } => violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            ResumeError::CorruptedBackup => CORRUPTED_BACKUP_MESSAGE.to_string(),
            ResumeError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ResumeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ResumeError {}

impl From<DomainError> for ResumeError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ResumeNotFound | ErrorCode::EntryNotFound => {
                ResumeError::NotFound(err.message)
            }
            ErrorCode::Forbidden => ResumeError::Forbidden,
            ErrorCode::NameAlreadyRegistered => ResumeError::NameConflict(err.message),
            ErrorCode::LimitExceeded => ResumeError::LimitExceeded(err.message),
            ErrorCode::CorruptedBackup => ResumeError::CorruptedBackup,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => {
                let violations = if err.violations.is_empty() {
                    vec![FieldError {
                        field: err
                            .details
                            .get("field")
                            .cloned()
                            .unwrap_or_else(|| "unknown".to_string()),
                        message: err.message,
                    }]
                } else {
                    err.violations
                };
                ResumeError::ValidationFailed { violations }
            }
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                ResumeError::Infrastructure(err.message)
            }
        }
    }
}
