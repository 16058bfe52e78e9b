//! AddProjectHandler - Command handler for appending a project.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::load_owned;
use crate::domain::foundation::{Notification, ResumeId, Timestamp, UserId};
use crate::domain::resume::{Project, ProjectFields, Resume, ResumeError};
use crate::ports::{LimitChecker, ResumeRepository};

/// Command to add a project to a resume.
#[derive(Debug, Clone)]
pub struct AddProjectCommand {
    pub resume_id: ResumeId,
    pub user_id: UserId,
    pub fields: ProjectFields,
}

/// Handler for adding projects.
pub struct AddProjectHandler {
    repository: Arc<dyn ResumeRepository>,
    limit_checker: Arc<dyn LimitChecker>,
}

impl AddProjectHandler {
    pub fn new(
        repository: Arc<dyn ResumeRepository>,
        limit_checker: Arc<dyn LimitChecker>,
    ) -> Self {
        Self {
            repository,
            limit_checker,
        }
    }

    pub async fn handle(&self, cmd: AddProjectCommand) -> Result<Resume, ResumeError> {
        let resume_id = cmd.resume_id;
        self.add(cmd)
            .await
            .inspect(|_| info!(resume_id = %resume_id, "Project added"))
            .inspect_err(|err| {
                warn!(code = %err.code(), resume_id = %resume_id, "Project rejected")
            })
    }

    async fn add(&self, cmd: AddProjectCommand) -> Result<Resume, ResumeError> {
        // 1. Load and authorize
        let resume = load_owned(self.repository.as_ref(), &cmd.resume_id, &cmd.user_id).await?;

        // 2. Check the per-resume cap
        self.limit_checker.check_project_add_allowed(&resume).await?;

        // 3. Build the project and apply it
        let mut sink = Notification::new();
        let project = Project::create(&mut sink, cmd.fields);
        debug!(
            resume_id = %cmd.resume_id,
            field_errors = sink.error_count(),
            "Project fields validated"
        );
        let updated = resume
            .add_project(&mut sink, project)?
            .touch(Timestamp::now());

        // 4. Persist
        self.repository.save(&updated).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::resume::test_support::{owner, ports, seeded, ym};
    use crate::config::LimitsConfig;

    fn fields(company: &str) -> ProjectFields {
        ProjectFields {
            company_name: company.to_string(),
            start_date: ym(2021, 4),
            end_date: ym(2022, 3),
            is_active: false,
            name: "在庫管理システム刷新".to_string(),
            overview: "オンプレからクラウドへの移行".to_string(),
            team_comp: "8名".to_string(),
            role: "リードエンジニア".to_string(),
            achievement: "運用コストを30%削減".to_string(),
            ..ProjectFields::default()
        }
    }

    fn command(resume: &Resume, company: &str) -> AddProjectCommand {
        AddProjectCommand {
            resume_id: *resume.id(),
            user_id: owner(),
            fields: fields(company),
        }
    }

    #[tokio::test]
    async fn test_adds_project_for_known_company() {
        let (repo, checker) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = AddProjectHandler::new(repo.clone(), checker);

        let updated = handler.handle(command(&resume, "ABC")).await.unwrap();

        assert_eq!(updated.projects().len(), 1);
        let stored = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert_eq!(stored.projects()[0].company_name().as_str(), "ABC");
    }

    #[tokio::test]
    async fn test_unknown_company_is_rejected() {
        let (repo, checker) = ports(LimitsConfig::default());
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = AddProjectHandler::new(repo.clone(), checker);

        let err = handler.handle(command(&resume, "GHI")).await.unwrap_err();

        assert_eq!(
            err,
            ResumeError::validation(
                "companyName",
                "GHIは職歴に存在しません。職歴に存在する会社名を選択してください。"
            )
        );
        let stored = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert!(stored.projects().is_empty());
    }

    #[tokio::test]
    async fn test_cap_is_enforced() {
        let (repo, checker) = ports(LimitsConfig {
            max_projects: 1,
            ..LimitsConfig::default()
        });
        let resume = seeded(&repo, "職務経歴書").await;
        let handler = AddProjectHandler::new(repo, checker);

        handler.handle(command(&resume, "ABC")).await.unwrap();
        let err = handler.handle(command(&resume, "ABC")).await.unwrap_err();

        assert!(matches!(err, ResumeError::LimitExceeded(_)));
    }
}
