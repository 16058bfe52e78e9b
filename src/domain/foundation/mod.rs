//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, calendar values, the validation sink and error
//! types that form the vocabulary of the resume domain.

mod errors;
mod ids;
mod ownership;
mod timestamp;
mod validation;
mod year_month;

pub use errors::{DomainError, ErrorCode, FieldError, ValidationError};
pub use ids::{
    CareerId, CertificationId, PortfolioId, ProfileLinkId, ProjectId, ResumeId, SelfPromotionId,
    UserId,
};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
pub use validation::{
    check_max_length, is_blank, require_text, required_message, too_long_message, Notification,
    ValidationSink,
};
pub use year_month::YearMonth;
