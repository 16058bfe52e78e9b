//! Resume domain module.
//!
//! Self-validating value objects, the child entities built from them, and
//! the [`Resume`] aggregate root that enforces the rules spanning entities.
//!
//! Every factory records problems into a caller-supplied
//! [`ValidationSink`](crate::domain::foundation::ValidationSink) and still
//! returns an instance; only the aggregate turns a non-empty sink into a
//! [`DomainError`](crate::domain::foundation::DomainError).

mod aggregate;
mod career;
mod certification;
mod company_name;
mod errors;
mod full_name;
mod link;
mod period;
mod portfolio;
mod profile_link;
mod project;
mod resume_name;
mod self_promotion;
mod tech_stack;

pub use aggregate::{NewResume, Resume, ResumeSnapshot, KIND_MISMATCH_MESSAGE};
pub use career::Career;
pub use certification::{Certification, MAX_CERTIFICATION_NAME_LENGTH};
pub use company_name::{CompanyName, MAX_COMPANY_NAME_LENGTH};
pub use errors::{ResumeError, CORRUPTED_BACKUP_MESSAGE};
pub use full_name::{FullName, MAX_NAME_PART_LENGTH};
pub use link::{Link, INVALID_URL_MESSAGE};
pub use period::{Period, ACTIVE_WITH_END_DATE_MESSAGE, END_BEFORE_START_MESSAGE};
pub use portfolio::{Portfolio, MAX_PORTFOLIO_NAME_LENGTH, MAX_PORTFOLIO_TEXT_LENGTH};
pub use profile_link::{ProfileLink, ProfileLinkKind, MAX_PROFILE_LINK_NAME_LENGTH};
pub use project::{
    Process, Project, ProjectFields, MAX_PROJECT_NAME_LENGTH, MAX_PROJECT_TEXT_LENGTH,
};
pub use resume_name::{
    ResumeName, DOT_RULE_MESSAGE, FORBIDDEN_CHARACTERS, FORBIDDEN_CHARACTERS_MESSAGE,
};
pub use self_promotion::{
    SelfPromotion, MAX_SELF_PROMOTION_CONTENT_LENGTH, MAX_SELF_PROMOTION_TITLE_LENGTH,
};
pub use tech_stack::{Backend, Frontend, Infrastructure, TechStack, Tools};
