//! Backup document schema.
//!
//! A backup is untrusted JSON exported by the client. Every field is raw
//! input that goes back through the validating factories on restore.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationSink, YearMonth};
use crate::domain::resume::{
    Career, Certification, FullName, Portfolio, Process, ProfileLink, ProfileLinkKind, Project,
    ProjectFields, Resume, SelfPromotion, TechStack,
};

/// Top-level backup document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeBackup {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub full_name: Option<FullNameBackup>,
    #[serde(default)]
    pub auto_save_enabled: bool,
    #[serde(default)]
    pub careers: Vec<CareerBackup>,
    #[serde(default)]
    pub projects: Vec<ProjectBackup>,
    #[serde(default)]
    pub certifications: Vec<CertificationBackup>,
    #[serde(default)]
    pub portfolios: Vec<PortfolioBackup>,
    #[serde(default)]
    pub social_links: Vec<ProfileLinkBackup>,
    #[serde(default)]
    pub sns_platforms: Vec<ProfileLinkBackup>,
    #[serde(default)]
    pub self_promotions: Vec<SelfPromotionBackup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNameBackup {
    pub last_name: String,
    pub first_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerBackup {
    pub company_name: String,
    pub start_date: Option<YearMonth>,
    pub end_date: Option<YearMonth>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBackup {
    pub company_name: String,
    pub start_date: Option<YearMonth>,
    pub end_date: Option<YearMonth>,
    pub is_active: bool,
    pub name: String,
    pub overview: String,
    pub team_comp: String,
    pub role: String,
    pub achievement: String,
    #[serde(default)]
    pub process: Process,
    #[serde(default)]
    pub tech_stack: TechStack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationBackup {
    pub name: String,
    pub date: Option<YearMonth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBackup {
    pub name: String,
    pub overview: String,
    #[serde(default)]
    pub tech_stack: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLinkBackup {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfPromotionBackup {
    pub title: String,
    pub content: String,
}

impl FullNameBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink) -> FullName {
        FullName::create(sink, &self.last_name, &self.first_name)
    }
}

impl CareerBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink) -> Career {
        Career::create(
            sink,
            &self.company_name,
            self.start_date,
            self.end_date,
            self.is_active,
        )
    }
}

impl ProjectBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink) -> Project {
        Project::create(
            sink,
            ProjectFields {
                company_name: self.company_name.clone(),
                start_date: self.start_date,
                end_date: self.end_date,
                is_active: self.is_active,
                name: self.name.clone(),
                overview: self.overview.clone(),
                team_comp: self.team_comp.clone(),
                role: self.role.clone(),
                achievement: self.achievement.clone(),
                process: self.process,
                tech_stack: self.tech_stack.clone(),
            },
        )
    }
}

impl CertificationBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink) -> Certification {
        Certification::create(sink, &self.name, self.date)
    }
}

impl PortfolioBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink) -> Portfolio {
        Portfolio::create(sink, &self.name, &self.overview, &self.tech_stack, &self.link)
    }
}

impl ProfileLinkBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink, kind: ProfileLinkKind) -> ProfileLink {
        ProfileLink::create(sink, kind, &self.name, &self.link)
    }
}

impl SelfPromotionBackup {
    pub fn build(&self, sink: &mut dyn ValidationSink) -> SelfPromotion {
        SelfPromotion::create(sink, &self.title, &self.content)
    }
}

impl From<&Resume> for ResumeBackup {
    fn from(resume: &Resume) -> Self {
        Self {
            name: resume.name().as_str().to_string(),
            date: resume.date(),
            full_name: resume.full_name().map(|full_name| FullNameBackup {
                last_name: full_name.last_name().to_string(),
                first_name: full_name.first_name().to_string(),
            }),
            auto_save_enabled: resume.auto_save_enabled(),
            careers: resume
                .careers()
                .iter()
                .map(|career| CareerBackup {
                    company_name: career.company_name().as_str().to_string(),
                    start_date: career.period().start_date(),
                    end_date: career.period().end_date(),
                    is_active: career.period().is_active(),
                })
                .collect(),
            projects: resume
                .projects()
                .iter()
                .map(|project| ProjectBackup {
                    company_name: project.company_name().as_str().to_string(),
                    start_date: project.period().start_date(),
                    end_date: project.period().end_date(),
                    is_active: project.period().is_active(),
                    name: project.name().to_string(),
                    overview: project.overview().to_string(),
                    team_comp: project.team_comp().to_string(),
                    role: project.role().to_string(),
                    achievement: project.achievement().to_string(),
                    process: *project.process(),
                    tech_stack: project.tech_stack().clone(),
                })
                .collect(),
            certifications: resume
                .certifications()
                .iter()
                .map(|cert| CertificationBackup {
                    name: cert.name().to_string(),
                    date: cert.date(),
                })
                .collect(),
            portfolios: resume
                .portfolios()
                .iter()
                .map(|portfolio| PortfolioBackup {
                    name: portfolio.name().to_string(),
                    overview: portfolio.overview().to_string(),
                    tech_stack: portfolio.tech_stack().to_string(),
                    link: portfolio.link().as_str().to_string(),
                })
                .collect(),
            social_links: resume.social_links().iter().map(link_backup).collect(),
            sns_platforms: resume.sns_platforms().iter().map(link_backup).collect(),
            self_promotions: resume
                .self_promotions()
                .iter()
                .map(|promo| SelfPromotionBackup {
                    title: promo.title().to_string(),
                    content: promo.content().to_string(),
                })
                .collect(),
        }
    }
}

fn link_backup(link: &ProfileLink) -> ProfileLinkBackup {
    ProfileLinkBackup {
        name: link.name().to_string(),
        link: link.link().as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_fills_collections_with_defaults() {
        let json = r#"{ "name": "職務経歴書", "date": "2024-04-01" }"#;

        let backup: ResumeBackup = serde_json::from_str(json).unwrap();

        assert!(backup.full_name.is_none());
        assert!(!backup.auto_save_enabled);
        assert!(backup.careers.is_empty());
        assert!(backup.sns_platforms.is_empty());
    }

    #[test]
    fn year_months_parse_from_strings() {
        let json = r#"{
            "companyName": "ABC",
            "startDate": "2020-01",
            "endDate": null,
            "isActive": true
        }"#;

        let career: CareerBackup = serde_json::from_str(json).unwrap();

        assert_eq!(career.start_date, YearMonth::new(2020, 1).ok());
        assert!(career.end_date.is_none());
    }

    #[test]
    fn malformed_year_month_fails_to_parse() {
        let json = r#"{
            "companyName": "ABC",
            "startDate": "2020-13",
            "endDate": null,
            "isActive": true
        }"#;

        assert!(serde_json::from_str::<CareerBackup>(json).is_err());
    }
}
