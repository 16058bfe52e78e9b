//! Limit checker port.
//!
//! Caps how many resumes a user may hold and how many entries each resume
//! collection may hold. The caps themselves live in configuration.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::resume::Resume;
use async_trait::async_trait;

/// Port for checking per-user and per-resume caps before a mutation.
///
/// Every method returns `Ok(())` when one more entry is allowed.
///
/// # Errors
///
/// All methods return `LimitExceeded` when the cap is already reached, and
/// `DatabaseError` if counting fails.
#[async_trait]
pub trait LimitChecker: Send + Sync {
    /// Checks whether the user may create another resume.
    async fn check_resume_create_allowed(&self, user_id: &UserId) -> Result<(), DomainError>;

    async fn check_career_add_allowed(&self, resume: &Resume) -> Result<(), DomainError>;

    async fn check_project_add_allowed(&self, resume: &Resume) -> Result<(), DomainError>;

    async fn check_certification_add_allowed(&self, resume: &Resume) -> Result<(), DomainError>;

    async fn check_portfolio_add_allowed(&self, resume: &Resume) -> Result<(), DomainError>;

    async fn check_social_link_add_allowed(&self, resume: &Resume) -> Result<(), DomainError>;

    async fn check_sns_platform_add_allowed(&self, resume: &Resume) -> Result<(), DomainError>;

    async fn check_self_promotion_add_allowed(&self, resume: &Resume)
        -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_checker_is_object_safe() {
        fn _accepts_dyn(_checker: &dyn LimitChecker) {}
    }
}
