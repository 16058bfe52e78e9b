//! CreateResumeHandler - Command handler for creating new resumes.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::ResumeNameDuplicationCheck;
use crate::domain::foundation::{Notification, UserId};
use crate::domain::resume::{NewResume, Resume, ResumeError, ResumeName};
use crate::ports::{LimitChecker, ResumeRepository};

/// Command to create a new, empty resume.
#[derive(Debug, Clone)]
pub struct CreateResumeCommand {
    pub user_id: UserId,
    pub name: String,
    pub date: NaiveDate,
    pub auto_save_enabled: bool,
}

/// Handler for creating resumes.
pub struct CreateResumeHandler {
    repository: Arc<dyn ResumeRepository>,
    limit_checker: Arc<dyn LimitChecker>,
    name_check: ResumeNameDuplicationCheck,
}

impl CreateResumeHandler {
    pub fn new(
        repository: Arc<dyn ResumeRepository>,
        limit_checker: Arc<dyn LimitChecker>,
    ) -> Self {
        Self {
            name_check: ResumeNameDuplicationCheck::new(repository.clone()),
            repository,
            limit_checker,
        }
    }

    pub async fn handle(&self, cmd: CreateResumeCommand) -> Result<Resume, ResumeError> {
        let user_id = cmd.user_id.clone();
        match self.create(cmd).await {
            Ok(resume) => {
                info!(resume_id = %resume.id(), user_id = %user_id, "Resume created");
                Ok(resume)
            }
            Err(err) => {
                warn!(code = %err.code(), user_id = %user_id, "Resume creation rejected");
                Err(err)
            }
        }
    }

    async fn create(&self, cmd: CreateResumeCommand) -> Result<Resume, ResumeError> {
        // 1. Check the per-user cap
        self.limit_checker
            .check_resume_create_allowed(&cmd.user_id)
            .await?;

        // 2. Build and validate the aggregate
        let mut sink = Notification::new();
        let name = ResumeName::create(&mut sink, &cmd.name);
        let mut new = NewResume::new(cmd.user_id.clone(), name, cmd.date);
        new.auto_save_enabled = cmd.auto_save_enabled;
        let resume = Resume::create(&mut sink, new)?;

        // 3. Names are unique per user
        self.name_check
            .execute(&cmd.user_id, resume.name())
            .await?;

        // 4. Persist
        self.repository.save(&resume).await?;

        Ok(resume)
    }
}
