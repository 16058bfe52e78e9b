//! DeleteResumeHandler - Command handler for deleting resumes.

use std::sync::Arc;

use tracing::{info, warn};

use super::load_owned;
use crate::domain::foundation::{ResumeId, UserId};
use crate::domain::resume::ResumeError;
use crate::ports::ResumeRepository;

/// Command to delete a resume.
#[derive(Debug, Clone)]
pub struct DeleteResumeCommand {
    pub resume_id: ResumeId,
    pub user_id: UserId,
}

/// Handler for deleting resumes.
pub struct DeleteResumeHandler {
    repository: Arc<dyn ResumeRepository>,
}

impl DeleteResumeHandler {
    pub fn new(repository: Arc<dyn ResumeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteResumeCommand) -> Result<(), ResumeError> {
        let resume_id = cmd.resume_id;
        self.delete(cmd)
            .await
            .inspect(|_| info!(resume_id = %resume_id, "Resume deleted"))
            .inspect_err(|err| {
                warn!(code = %err.code(), resume_id = %resume_id, "Deletion rejected")
            })
    }

    async fn delete(&self, cmd: DeleteResumeCommand) -> Result<(), ResumeError> {
        // 1. Load and authorize
        let resume = load_owned(self.repository.as_ref(), &cmd.resume_id, &cmd.user_id).await?;

        // 2. Delete
        self.repository.delete(resume.id()).await?;

        Ok(())
    }
}
