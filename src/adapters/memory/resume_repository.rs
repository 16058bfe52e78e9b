//! In-Memory Resume Repository Adapter
//!
//! Stores resume snapshots in a map keyed by resume id.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ResumeId, UserId};
use crate::domain::resume::{Resume, ResumeSnapshot};
use crate::ports::ResumeRepository;

/// In-memory storage for resumes
#[derive(Debug, Clone, Default)]
pub struct InMemoryResumeRepository {
    resumes: Arc<RwLock<HashMap<ResumeId, ResumeSnapshot>>>,
}

impl InMemoryResumeRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored resumes
    pub async fn count(&self) -> usize {
        self.resumes.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.resumes.write().await.clear();
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeRepository {
    async fn find_by_id(&self, id: &ResumeId) -> Result<Option<Resume>, DomainError> {
        let resumes = self.resumes.read().await;
        Ok(resumes.get(id).cloned().map(Resume::reconstruct))
    }

    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<Resume>, DomainError> {
        let resumes = self.resumes.read().await;
        let mut owned: Vec<Resume> = resumes
            .values()
            .filter(|snapshot| &snapshot.user_id == user_id)
            .cloned()
            .map(Resume::reconstruct)
            .collect();
        owned.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(owned)
    }

    async fn save(&self, resume: &Resume) -> Result<(), DomainError> {
        let mut resumes = self.resumes.write().await;
        resumes.insert(*resume.id(), resume.to_snapshot());
        Ok(())
    }

    async fn delete(&self, id: &ResumeId) -> Result<(), DomainError> {
        let mut resumes = self.resumes.write().await;
        resumes.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::new(ErrorCode::ResumeNotFound, format!("Resume not found: {}", id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Notification, Timestamp};
    use crate::domain::resume::{NewResume, ResumeName};
    use chrono::{Duration, NaiveDate};

    fn resume_for(user: &str, name: &str) -> Resume {
        let mut sink = Notification::new();
        let name = ResumeName::create(&mut sink, name);
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        Resume::create(&mut sink, NewResume::new(UserId::new(user).unwrap(), name, date)).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let repo = InMemoryResumeRepository::new();
        let resume = resume_for("user-1", "職務経歴書");

        repo.save(&resume).await.unwrap();

        let found = repo.find_by_id(resume.id()).await.unwrap();
        assert_eq!(found, Some(resume));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryResumeRepository::new();
        assert!(repo.find_by_id(&ResumeId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryResumeRepository::new();
        let resume = resume_for("user-1", "職務経歴書");
        repo.save(&resume).await.unwrap();

        let changed = resume.change_auto_save_enabled(true);
        repo.save(&changed).await.unwrap();

        assert_eq!(repo.count().await, 1);
        let found = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert!(found.auto_save_enabled());
    }

    #[tokio::test]
    async fn test_find_all_by_user_filters_and_orders() {
        let repo = InMemoryResumeRepository::new();
        let older = resume_for("user-1", "古い");
        let newer = resume_for("user-1", "新しい")
            .touch(Timestamp::from_datetime(chrono::Utc::now() + Duration::hours(1)));
        let other = resume_for("user-2", "他人");
        for resume in [&older, &newer, &other] {
            repo.save(resume).await.unwrap();
        }

        let owned = repo
            .find_all_by_user(&UserId::new("user-1").unwrap())
            .await
            .unwrap();

        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].id(), newer.id());
        assert_eq!(owned[1].id(), older.id());
    }

    #[tokio::test]
    async fn test_delete_missing_fails() {
        let repo = InMemoryResumeRepository::new();
        let err = repo.delete(&ResumeId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResumeNotFound);
    }

    #[tokio::test]
    async fn test_delete_removes_resume() {
        let repo = InMemoryResumeRepository::new();
        let resume = resume_for("user-1", "職務経歴書");
        repo.save(&resume).await.unwrap();

        repo.delete(resume.id()).await.unwrap();

        assert_eq!(repo.count().await, 0);
    }
}
