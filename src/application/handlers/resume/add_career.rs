//! AddCareerHandler - Command handler for appending a career.

use std::sync::Arc;

use tracing::{info, warn};

use super::load_owned;
use crate::domain::foundation::{Notification, ResumeId, Timestamp, UserId, YearMonth};
use crate::domain::resume::{Career, Resume, ResumeError};
use crate::ports::{LimitChecker, ResumeRepository};

/// Command to add a career to a resume.
#[derive(Debug, Clone)]
pub struct AddCareerCommand {
    pub resume_id: ResumeId,
    pub user_id: UserId,
    pub company_name: String,
    pub start_date: Option<YearMonth>,
    pub end_date: Option<YearMonth>,
    pub is_active: bool,
}

/// Handler for adding careers.
pub struct AddCareerHandler {
    repository: Arc<dyn ResumeRepository>,
    limit_checker: Arc<dyn LimitChecker>,
}

impl AddCareerHandler {
    pub fn new(
        repository: Arc<dyn ResumeRepository>,
        limit_checker: Arc<dyn LimitChecker>,
    ) -> Self {
        Self {
            repository,
            limit_checker,
        }
    }

    pub async fn handle(&self, cmd: AddCareerCommand) -> Result<Resume, ResumeError> {
        let resume_id = cmd.resume_id;
        self.add(cmd)
            .await
            .inspect(|resume| {
                info!(
                    resume_id = %resume_id,
                    careers = resume.careers().len(),
                    "Career added"
                )
            })
            .inspect_err(|err| warn!(code = %err.code(), resume_id = %resume_id, "Career rejected"))
    }

    async fn add(&self, cmd: AddCareerCommand) -> Result<Resume, ResumeError> {
        // 1. Load and authorize
        let resume = load_owned(self.repository.as_ref(), &cmd.resume_id, &cmd.user_id).await?;

        // 2. Check the per-resume cap
        self.limit_checker.check_career_add_allowed(&resume).await?;

        // 3. Build the career and apply it
        let mut sink = Notification::new();
        let career = Career::create(
            &mut sink,
            &cmd.company_name,
            cmd.start_date,
            cmd.end_date,
            cmd.is_active,
        );
        let updated = resume
            .add_career(&mut sink, career)?
            .touch(Timestamp::now());

        // 4. Persist
        self.repository.save(&updated).await?;

        Ok(updated)
    }
}
