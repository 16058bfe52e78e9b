//! LimitChecker backed by [`LimitsConfig`].
//!
//! Per-resume caps are checked against the aggregate's collections; the
//! per-user resume cap counts through the repository port.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LimitsConfig;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::resume::Resume;
use crate::ports::{LimitChecker, ResumeRepository};

/// Limit checker enforcing the caps from configuration.
#[derive(Clone)]
pub struct ConfiguredLimitChecker {
    limits: LimitsConfig,
    repository: Arc<dyn ResumeRepository>,
}

impl ConfiguredLimitChecker {
    pub fn new(limits: LimitsConfig, repository: Arc<dyn ResumeRepository>) -> Self {
        Self { limits, repository }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }
}

fn ensure_below(collection: &str, current: usize, max: usize) -> Result<(), DomainError> {
    if current < max {
        return Ok(());
    }
    Err(DomainError::new(
        ErrorCode::LimitExceeded,
        format!("{} limit of {} reached", collection, max),
    )
    .with_detail("collection", collection)
    .with_detail("max", max.to_string()))
}

#[async_trait]
impl LimitChecker for ConfiguredLimitChecker {
    async fn check_resume_create_allowed(&self, user_id: &UserId) -> Result<(), DomainError> {
        let owned = self.repository.find_all_by_user(user_id).await?;
        ensure_below("resumes", owned.len(), self.limits.max_resumes_per_user)
    }

    async fn check_career_add_allowed(&self, resume: &Resume) -> Result<(), DomainError> {
        ensure_below("careers", resume.careers().len(), self.limits.max_careers)
    }

    async fn check_project_add_allowed(&self, resume: &Resume) -> Result<(), DomainError> {
        ensure_below("projects", resume.projects().len(), self.limits.max_projects)
    }

    async fn check_certification_add_allowed(&self, resume: &Resume) -> Result<(), DomainError> {
        ensure_below(
            "certifications",
            resume.certifications().len(),
            self.limits.max_certifications,
        )
    }

    async fn check_portfolio_add_allowed(&self, resume: &Resume) -> Result<(), DomainError> {
        ensure_below(
            "portfolios",
            resume.portfolios().len(),
            self.limits.max_portfolios,
        )
    }

    async fn check_social_link_add_allowed(&self, resume: &Resume) -> Result<(), DomainError> {
        ensure_below(
            "social links",
            resume.social_links().len(),
            self.limits.max_social_links,
        )
    }

    async fn check_sns_platform_add_allowed(&self, resume: &Resume) -> Result<(), DomainError> {
        ensure_below(
            "SNS platforms",
            resume.sns_platforms().len(),
            self.limits.max_sns_platforms,
        )
    }

    async fn check_self_promotion_add_allowed(
        &self,
        resume: &Resume,
    ) -> Result<(), DomainError> {
        ensure_below(
            "self promotions",
            resume.self_promotions().len(),
            self.limits.max_self_promotions,
        )
    }
}
