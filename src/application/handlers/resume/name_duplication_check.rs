//! Per-user uniqueness of resume names.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ResumeId, UserId};
use crate::domain::resume::ResumeName;
use crate::ports::ResumeRepository;

fn duplicated_message(name: &ResumeName) -> String {
    format!("{}は既に登録されています。", name)
}

/// Rejects a resume name another resume of the same user already uses.
pub struct ResumeNameDuplicationCheck {
    repository: Arc<dyn ResumeRepository>,
}

impl ResumeNameDuplicationCheck {
    pub fn new(repository: Arc<dyn ResumeRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `NameAlreadyRegistered` if any resume of `user_id` is named `name`
    pub async fn execute(&self, user_id: &UserId, name: &ResumeName) -> Result<(), DomainError> {
        self.check(user_id, name, None).await
    }

    /// Like [`execute`](Self::execute) but ignores the resume being renamed.
    pub async fn execute_excluding(
        &self,
        user_id: &UserId,
        name: &ResumeName,
        excluded: &ResumeId,
    ) -> Result<(), DomainError> {
        self.check(user_id, name, Some(excluded)).await
    }

    async fn check(
        &self,
        user_id: &UserId,
        name: &ResumeName,
        excluded: Option<&ResumeId>,
    ) -> Result<(), DomainError> {
        let taken = self
            .repository
            .find_all_by_user(user_id)
            .await?
            .iter()
            .filter(|resume| Some(resume.id()) != excluded)
            .any(|resume| resume.name() == name);

        if taken {
            return Err(
                DomainError::new(ErrorCode::NameAlreadyRegistered, duplicated_message(name))
                    .with_detail("field", "resumeName"),
            );
        }
        Ok(())
    }
}
