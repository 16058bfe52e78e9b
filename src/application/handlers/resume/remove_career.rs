//! RemoveCareerHandler - Command handler for removing a career.

use std::sync::Arc;

use tracing::{info, warn};

use super::load_owned;
use crate::domain::foundation::{CareerId, ResumeId, Timestamp, UserId};
use crate::domain::resume::{Resume, ResumeError};
use crate::ports::ResumeRepository;

/// Command to remove a career from a resume.
#[derive(Debug, Clone)]
pub struct RemoveCareerCommand {
    pub resume_id: ResumeId,
    pub user_id: UserId,
    pub career_id: CareerId,
}

/// Handler for removing careers.
pub struct RemoveCareerHandler {
    repository: Arc<dyn ResumeRepository>,
}

impl RemoveCareerHandler {
    pub fn new(repository: Arc<dyn ResumeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveCareerCommand) -> Result<Resume, ResumeError> {
        let (resume_id, career_id) = (cmd.resume_id, cmd.career_id);
        self.remove(cmd)
            .await
            .inspect(|_| info!(resume_id = %resume_id, career_id = %career_id, "Career removed"))
            .inspect_err(|err| {
                warn!(code = %err.code(), resume_id = %resume_id, "Career removal rejected")
            })
    }

    async fn remove(&self, cmd: RemoveCareerCommand) -> Result<Resume, ResumeError> {
        // 1. Load and authorize
        let resume = load_owned(self.repository.as_ref(), &cmd.resume_id, &cmd.user_id).await?;

        // 2. The career must exist
        if resume.find_career(&cmd.career_id).is_none() {
            return Err(ResumeError::entry_not_found(format!(
                "career not found: {}",
                cmd.career_id
            )));
        }

        // 3. Apply and persist
        let updated = resume.remove_career(&cmd.career_id).touch(Timestamp::now());
        self.repository.save(&updated).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::resume::test_support::{owner, ports, seeded, stranger};
    use crate::config::LimitsConfig;

    #[tokio::test]
    async fn test_removes_existing_career() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RemoveCareerHandler::new(repo.clone());

        let updated = handler
            .handle(RemoveCareerCommand {
                resume_id: *resume.id(),
                user_id: owner(),
                career_id: *resume.careers()[0].id(),
            })
            .await
            .unwrap();

        assert!(updated.careers().is_empty());
        let stored = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert!(stored.careers().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_career_is_not_found() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RemoveCareerHandler::new(repo);

        let err = handler
            .handle(RemoveCareerCommand {
                resume_id: *resume.id(),
                user_id: owner(),
                career_id: CareerId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ResumeError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RemoveCareerHandler::new(repo);

        let err = handler
            .handle(RemoveCareerCommand {
                resume_id: *resume.id(),
                user_id: stranger(),
                career_id: *resume.careers()[0].id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ResumeError::Forbidden);
    }
}
