//! Resume command handlers.
//!
//! Every handler follows the same sequence: load the aggregate, authorize
//! the caller as owner, confirm targeted child entries exist, check caps,
//! apply one aggregate operation, stamp `updated_at`, and save.

mod add_career;
mod add_project;
mod backup;
mod create_resume;
mod delete_resume;
mod name_duplication_check;
mod remove_career;
mod rename_resume;
mod restore_resume;

pub use add_career::{AddCareerCommand, AddCareerHandler};
pub use add_project::{AddProjectCommand, AddProjectHandler};
pub use backup::{
    CareerBackup, CertificationBackup, FullNameBackup, PortfolioBackup, ProfileLinkBackup,
    ProjectBackup, ResumeBackup, SelfPromotionBackup,
};
pub use create_resume::{CreateResumeCommand, CreateResumeHandler};
pub use delete_resume::{DeleteResumeCommand, DeleteResumeHandler};
pub use name_duplication_check::ResumeNameDuplicationCheck;
pub use remove_career::{RemoveCareerCommand, RemoveCareerHandler};
pub use rename_resume::{RenameResumeCommand, RenameResumeHandler};
pub use restore_resume::{RestoreResumeCommand, RestoreResumeHandler};

use crate::domain::foundation::{OwnedByUser, ResumeId, UserId};
use crate::domain::resume::{Resume, ResumeError};
use crate::ports::ResumeRepository;

/// Loads a resume and verifies that `user_id` owns it.
async fn load_owned(
    repository: &dyn ResumeRepository,
    resume_id: &ResumeId,
    user_id: &UserId,
) -> Result<Resume, ResumeError> {
    let resume = repository
        .find_by_id(resume_id)
        .await?
        .ok_or_else(|| ResumeError::not_found(*resume_id))?;

    resume.check_ownership(user_id)?;

    Ok(resume)
}
