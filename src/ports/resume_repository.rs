//! Resume repository port.
//!
//! Defines the contract for persisting and retrieving Resume aggregates.
//! Implementations store the aggregate as a whole; child entities have no
//! repository of their own.

use crate::domain::foundation::{DomainError, ResumeId, UserId};
use crate::domain::resume::Resume;
use async_trait::async_trait;

/// Repository port for Resume aggregate persistence.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Find a resume by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ResumeId) -> Result<Option<Resume>, DomainError>;

    /// Find all resumes owned by a user.
    ///
    /// Returns resumes ordered by updated_at descending.
    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<Resume>, DomainError>;

    /// Insert or replace a resume.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, resume: &Resume) -> Result<(), DomainError>;

    /// Delete a resume.
    ///
    /// # Errors
    ///
    /// - `ResumeNotFound` if resume doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ResumeId) -> Result<(), DomainError>;
}
