//! RestoreResumeHandler - Command handler for restoring a resume from backup.
//!
//! A backup crosses a trust boundary: any parse or validation failure is
//! reported as `CorruptedBackup` rather than as a field-level error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{ResumeBackup, ResumeNameDuplicationCheck};
use crate::domain::foundation::{DomainError, Notification, UserId};
use crate::domain::resume::{NewResume, ProfileLinkKind, Resume, ResumeError, ResumeName};
use crate::ports::{LimitChecker, ResumeRepository};

/// Command to restore a resume from a JSON backup document.
#[derive(Debug, Clone)]
pub struct RestoreResumeCommand {
    pub user_id: UserId,
    pub document: String,
}

/// Handler for restoring resumes.
pub struct RestoreResumeHandler {
    repository: Arc<dyn ResumeRepository>,
    limit_checker: Arc<dyn LimitChecker>,
    name_check: ResumeNameDuplicationCheck,
}

fn corrupted(err: DomainError) -> ResumeError {
    debug!(violations = ?err.violations, "Backup failed domain validation");
    ResumeError::corrupted_backup()
}

impl RestoreResumeHandler {
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

    pub async fn handle(&self, cmd: RestoreResumeCommand) -> Result<Resume, ResumeError> {
        let user_id = cmd.user_id.clone();
        self.restore(cmd)
            .await
            .inspect(|resume| {
                info!(resume_id = %resume.id(), user_id = %user_id, "Resume restored")
            })
            .inspect_err(|err| {
                warn!(code = %err.code(), user_id = %user_id, "Restore rejected")
            })
    }

    async fn restore(&self, cmd: RestoreResumeCommand) -> Result<Resume, ResumeError> {
        // 1. Check the per-user cap
        self.limit_checker
            .check_resume_create_allowed(&cmd.user_id)
            .await?;

        // 2. Parse the document
        let backup: ResumeBackup = serde_json::from_str(&cmd.document).map_err(|e| {
            debug!(error = %e, "Backup is not a valid document");
            ResumeError::corrupted_backup()
        })?;

        // 3. Rebuild through the validating factories
        let resume = Self::rebuild(&cmd.user_id, &backup).map_err(corrupted)?;

        // 4. Names are unique per user
        self.name_check
            .execute(&cmd.user_id, resume.name())
            .await?;

        // 5. Persist
        self.repository.save(&resume).await?;

        Ok(resume)
    }

    fn rebuild(user_id: &UserId, backup: &ResumeBackup) -> Result<Resume, DomainError> {
        let mut sink = Notification::new();

        let name = ResumeName::create(&mut sink, &backup.name);
        let mut new = NewResume::new(user_id.clone(), name, backup.date);
        new.auto_save_enabled = backup.auto_save_enabled;
        new.full_name = backup.full_name.as_ref().map(|f| f.build(&mut sink));
        new.careers = backup.careers.iter().map(|c| c.build(&mut sink)).collect();
        new.projects = backup.projects.iter().map(|p| p.build(&mut sink)).collect();
        new.certifications = backup
            .certifications
            .iter()
            .map(|c| c.build(&mut sink))
            .collect();
        new.portfolios = backup.portfolios.iter().map(|p| p.build(&mut sink)).collect();
        new.social_links = backup
            .social_links
            .iter()
            .map(|l| l.build(&mut sink, ProfileLinkKind::SocialLink))
            .collect();
        new.sns_platforms = backup
            .sns_platforms
            .iter()
            .map(|l| l.build(&mut sink, ProfileLinkKind::SnsPlatform))
            .collect();
        new.self_promotions = backup
            .self_promotions
            .iter()
            .map(|s| s.build(&mut sink))
            .collect();

        debug!(field_errors = sink.error_count(), "Backup entries rebuilt");

        Resume::create(&mut sink, new)
    }
}
