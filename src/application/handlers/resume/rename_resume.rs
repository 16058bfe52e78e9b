//! RenameResumeHandler - Command handler for renaming resumes.

use std::sync::Arc;

use tracing::{info, warn};

use super::{load_owned, ResumeNameDuplicationCheck};
use crate::domain::foundation::{Notification, ResumeId, Timestamp, UserId};
use crate::domain::resume::{Resume, ResumeError, ResumeName};
use crate::ports::ResumeRepository;

/// Command to rename a resume.
#[derive(Debug, Clone)]
pub struct RenameResumeCommand {
    pub resume_id: ResumeId,
    pub user_id: UserId,
    pub new_name: String,
}

/// Handler for renaming resumes.
pub struct RenameResumeHandler {
    repository: Arc<dyn ResumeRepository>,
    name_check: ResumeNameDuplicationCheck,
}

impl RenameResumeHandler {
    pub fn new(repository: Arc<dyn ResumeRepository>) -> Self {
        Self {
            name_check: ResumeNameDuplicationCheck::new(repository.clone()),
            repository,
        }
    }

    pub async fn handle(&self, cmd: RenameResumeCommand) -> Result<Resume, ResumeError> {
        let resume_id = cmd.resume_id;
        self.rename(cmd)
            .await
            .inspect(|_| info!(resume_id = %resume_id, "Resume renamed"))
            .inspect_err(|err| warn!(code = %err.code(), resume_id = %resume_id, "Rename rejected"))
    }

    async fn rename(&self, cmd: RenameResumeCommand) -> Result<Resume, ResumeError> {
        // 1. Load and authorize
        let resume = load_owned(self.repository.as_ref(), &cmd.resume_id, &cmd.user_id).await?;

        // 2. Apply rename
        let mut sink = Notification::new();
        let name = ResumeName::create(&mut sink, &cmd.new_name);
        let renamed = resume.change_name(&sink, name)?;

        // 3. Names are unique per user, ignoring this resume
        self.name_check
            .execute_excluding(&cmd.user_id, renamed.name(), renamed.id())
            .await?;

        // 4. Persist
        let renamed = renamed.touch(Timestamp::now());
        self.repository.save(&renamed).await?;

        Ok(renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::resume::test_support::{owner, ports, seeded, stranger};
    use crate::config::LimitsConfig;
    use crate::domain::foundation::ErrorCode;

    fn command(resume: &Resume, user_id: UserId, new_name: &str) -> RenameResumeCommand {
        RenameResumeCommand {
            resume_id: *resume.id(),
            user_id,
            new_name: new_name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_renames_and_stamps_update_time() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RenameResumeHandler::new(repo.clone());

        let renamed = handler
            .handle(command(&resume, owner(), "新しい名前"))
            .await
            .unwrap();

        assert_eq!(renamed.name().as_str(), "新しい名前");
        assert!(renamed.updated_at() >= resume.updated_at());
        let stored = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().as_str(), "新しい名前");
    }

    #[tokio::test]
    async fn test_keeping_the_same_name_is_allowed() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RenameResumeHandler::new(repo);

        assert!(handler
            .handle(command(&resume, owner(), "職務経歴書"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_name_of_another_resume_is_rejected() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "一つ目").await;
        seeded(&repo, "二つ目").await;
        let handler = RenameResumeHandler::new(repo);

        let err = handler
            .handle(command(&resume, owner(), "二つ目"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NameAlreadyRegistered);
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RenameResumeHandler::new(repo);

        let err = handler
            .handle(command(&resume, stranger(), "乗っ取り"))
            .await
            .unwrap_err();

        assert_eq!(err, ResumeError::Forbidden);
    }

    #[tokio::test]
    async fn test_missing_resume_is_not_found() {
        let (repo, _) = ports(LimitsConfig::default());
        let handler = RenameResumeHandler::new(repo);

        let err = handler
            .handle(RenameResumeCommand {
                resume_id: ResumeId::new(),
                user_id: owner(),
                new_name: "名前".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ResumeError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_name_is_not_saved() {
        let (repo, _) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = RenameResumeHandler::new(repo.clone());

        let err = handler
            .handle(command(&resume, owner(), "a:b"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        let stored = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().as_str(), "職務経歴書");
    }
}
