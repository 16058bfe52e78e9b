//! Resume aggregate root.
//!
//! The resume owns every child collection and enforces the rules that span
//! more than one entity:
//!
//! - no two careers share a month (a continuing career runs forever)
//! - every project names the company of an existing career
//! - social links and SNS platforms live in the collection matching their kind
//!
//! Every operation takes `&self` and returns a new `Resume`; a failed
//! operation leaves the original untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    Career, Certification, FullName, Portfolio, ProfileLink, ProfileLinkKind, Project,
    ResumeName, SelfPromotion,
};
use crate::domain::foundation::{
    CareerId, CertificationId, DomainError, ErrorCode, OwnedByUser, PortfolioId, ProfileLinkId,
    ProjectId, ResumeId, SelfPromotionId, Timestamp, UserId, ValidationSink,
};

pub const KIND_MISMATCH_MESSAGE: &str = "リンクの種類が一致しません。";

fn overlap_message(candidate: &Career, existing: &Career) -> String {
    format!(
        "{}と{}の期間が重複しています。",
        candidate.company_name(),
        existing.company_name()
    )
}

fn unknown_company_message(project: &Project) -> String {
    format!(
        "{}は職歴に存在しません。職歴に存在する会社名を選択してください。",
        project.company_name()
    )
}

/// Child entities addressable by identity inside the aggregate.
pub(crate) trait ChildEntity: Clone {
    type Id: PartialEq + std::fmt::Display;

    const LABEL: &'static str;

    fn entity_id(&self) -> &Self::Id;
}

macro_rules! child_entity {
    ($ty:ty, $id:ty, $label:literal) => {
        impl ChildEntity for $ty {
            type Id = $id;

            const LABEL: &'static str = $label;

            fn entity_id(&self) -> &Self::Id {
                self.id()
            }
        }
    };
}

child_entity!(Career, CareerId, "career");
child_entity!(Project, ProjectId, "project");
child_entity!(Certification, CertificationId, "certification");
child_entity!(Portfolio, PortfolioId, "portfolio");
child_entity!(ProfileLink, ProfileLinkId, "profile link");
child_entity!(SelfPromotion, SelfPromotionId, "self promotion");

/// Returns a copy of `items` with the entry sharing `entry`'s identity
/// replaced in place.
fn replaced<T: ChildEntity>(items: &[T], entry: T) -> Result<Vec<T>, DomainError> {
    let position = items
        .iter()
        .position(|item| item.entity_id() == entry.entity_id())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::EntryNotFound,
                format!("{} not found: {}", T::LABEL, entry.entity_id()),
            )
        })?;

    let mut items = items.to_vec();
    items[position] = entry;
    Ok(items)
}

/// Returns a copy of `items` without the entry whose identity is `id`.
///
/// Unknown identities leave the collection unchanged.
fn removed<T: ChildEntity>(items: &[T], id: &T::Id) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.entity_id() != id)
        .cloned()
        .collect()
}

fn appended<T: Clone>(items: &[T], entry: T) -> Vec<T> {
    let mut items = items.to_vec();
    items.push(entry);
    items
}

fn fail_if_invalid(sink: &dyn ValidationSink) -> Result<(), DomainError> {
    if sink.has_errors() {
        Err(DomainError::from_sink(sink))
    } else {
        Ok(())
    }
}

/// Records the first career in `existing` that overlaps `candidate`.
fn check_career_overlap(
    sink: &mut dyn ValidationSink,
    candidate: &Career,
    existing: &[Career],
) -> bool {
    match existing.iter().find(|career| career.overlaps(candidate)) {
        Some(conflict) => {
            sink.add_error("career", &overlap_message(candidate, conflict));
            true
        }
        None => false,
    }
}

/// Records an error if no career carries the project's company name.
fn check_project_company(sink: &mut dyn ValidationSink, project: &Project, careers: &[Career]) {
    let known = careers
        .iter()
        .any(|career| career.company_name() == project.company_name());
    if !known {
        sink.add_error("companyName", &unknown_company_message(project));
    }
}

fn check_link_kind(sink: &mut dyn ValidationSink, link: &ProfileLink, expected: ProfileLinkKind) {
    if link.kind() != expected {
        sink.add_error("link", KIND_MISMATCH_MESSAGE);
    }
}

/// Validated input for [`Resume::create`].
///
/// Value objects and child entities are expected to have been built through
/// their `create` functions with the same sink that is passed to
/// `Resume::create`.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: UserId,
    pub name: ResumeName,
    pub date: NaiveDate,
    pub full_name: Option<FullName>,
    pub auto_save_enabled: bool,
    pub careers: Vec<Career>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub portfolios: Vec<Portfolio>,
    pub social_links: Vec<ProfileLink>,
    pub sns_platforms: Vec<ProfileLink>,
    pub self_promotions: Vec<SelfPromotion>,
}

impl NewResume {
    /// Starts an empty resume for `user_id`.
    pub fn new(user_id: UserId, name: ResumeName, date: NaiveDate) -> Self {
        Self {
            user_id,
            name,
            date,
            full_name: None,
            auto_save_enabled: false,
            careers: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            portfolios: Vec::new(),
            social_links: Vec::new(),
            sns_platforms: Vec::new(),
            self_promotions: Vec::new(),
        }
    }
}

/// Every field of a resume, as stored by persistence adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSnapshot {
    pub id: ResumeId,
    pub user_id: UserId,
    pub name: ResumeName,
    pub date: NaiveDate,
    pub full_name: Option<FullName>,
    pub auto_save_enabled: bool,
    pub careers: Vec<Career>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub portfolios: Vec<Portfolio>,
    pub social_links: Vec<ProfileLink>,
    pub sns_platforms: Vec<ProfileLink>,
    pub self_promotions: Vec<SelfPromotion>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Resume aggregate - a user's resume with all of its sections.
///
/// # Invariants
///
/// - no two careers have overlapping periods
/// - every project's company name matches a career's company name
/// - `social_links` only holds `SocialLink` entries, `sns_platforms` only
///   `SnsPlatform` entries
#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    id: ResumeId,
    user_id: UserId,
    name: ResumeName,
    date: NaiveDate,
    full_name: Option<FullName>,
    auto_save_enabled: bool,
    careers: Vec<Career>,
    projects: Vec<Project>,
    certifications: Vec<Certification>,
    portfolios: Vec<Portfolio>,
    social_links: Vec<ProfileLink>,
    sns_platforms: Vec<ProfileLink>,
    self_promotions: Vec<SelfPromotion>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Resume {
    /// Creates a new resume with a fresh identity.
    ///
    /// Errors already in `sink` (from building the inputs) are merged with
    /// the cross-entity checks: careers are checked pairwise for overlap,
    /// projects against the career company names, and profile links against
    /// their collection's kind.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the sink holds any entry after the checks
    pub fn create(sink: &mut dyn ValidationSink, new: NewResume) -> Result<Self, DomainError> {
        for (index, career) in new.careers.iter().enumerate() {
            if check_career_overlap(sink, career, &new.careers[..index]) {
                break;
            }
        }
        for project in &new.projects {
            check_project_company(sink, project, &new.careers);
        }
        for link in &new.social_links {
            check_link_kind(sink, link, ProfileLinkKind::SocialLink);
        }
        for link in &new.sns_platforms {
            check_link_kind(sink, link, ProfileLinkKind::SnsPlatform);
        }
        fail_if_invalid(sink)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ResumeId::new(),
            user_id: new.user_id,
            name: new.name,
            date: new.date,
            full_name: new.full_name,
            auto_save_enabled: new.auto_save_enabled,
            careers: new.careers,
            projects: new.projects,
            certifications: new.certifications,
            portfolios: new.portfolios,
            social_links: new.social_links,
            sns_platforms: new.sns_platforms,
            self_promotions: new.self_promotions,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrates a resume from persistence (no validation).
    pub fn reconstruct(snapshot: ResumeSnapshot) -> Self {
        Self {
            id: snapshot.id,
            user_id: snapshot.user_id,
            name: snapshot.name,
            date: snapshot.date,
            full_name: snapshot.full_name,
            auto_save_enabled: snapshot.auto_save_enabled,
            careers: snapshot.careers,
            projects: snapshot.projects,
            certifications: snapshot.certifications,
            portfolios: snapshot.portfolios,
            social_links: snapshot.social_links,
            sns_platforms: snapshot.sns_platforms,
            self_promotions: snapshot.self_promotions,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    /// Copies every field out for persistence.
    pub fn to_snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot {
            id: self.id,
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            date: self.date,
            full_name: self.full_name.clone(),
            auto_save_enabled: self.auto_save_enabled,
            careers: self.careers.clone(),
            projects: self.projects.clone(),
            certifications: self.certifications.clone(),
            portfolios: self.portfolios.clone(),
            social_links: self.social_links.clone(),
            sns_platforms: self.sns_platforms.clone(),
            self_promotions: self.self_promotions.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ResumeId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &ResumeName {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn full_name(&self) -> Option<&FullName> {
        self.full_name.as_ref()
    }

    pub fn auto_save_enabled(&self) -> bool {
        self.auto_save_enabled
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub fn portfolios(&self) -> &[Portfolio] {
        &self.portfolios
    }

    pub fn social_links(&self) -> &[ProfileLink] {
        &self.social_links
    }

    pub fn sns_platforms(&self) -> &[ProfileLink] {
        &self.sns_platforms
    }

    pub fn self_promotions(&self) -> &[SelfPromotion] {
        &self.self_promotions
    }

    pub fn find_career(&self, id: &CareerId) -> Option<&Career> {
        self.careers.iter().find(|c| c.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scalar changes
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the name built with `sink`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` holds any entry
    pub fn change_name(
        &self,
        sink: &dyn ValidationSink,
        name: ResumeName,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            name,
            ..self.clone()
        })
    }

    pub fn change_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    pub fn change_auto_save_enabled(&self, enabled: bool) -> Self {
        Self {
            auto_save_enabled: enabled,
            ..self.clone()
        }
    }

    /// Replaces (or clears) the full name built with `sink`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` holds any entry
    pub fn change_full_name(
        &self,
        sink: &dyn ValidationSink,
        full_name: Option<FullName>,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            full_name,
            ..self.clone()
        })
    }

    /// Stamps the last-modified time; called by orchestration before saving.
    pub fn touch(&self, at: Timestamp) -> Self {
        Self {
            updated_at: at,
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Careers
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a career after checking it against every existing career.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` already holds entries or the career
    ///   overlaps an existing one (recorded under `career`)
    pub fn add_career(
        &self,
        sink: &mut dyn ValidationSink,
        career: Career,
    ) -> Result<Self, DomainError> {
        check_career_overlap(sink, &career, &self.careers);
        fail_if_invalid(sink)?;
        Ok(Self {
            careers: appended(&self.careers, career),
            ..self.clone()
        })
    }

    /// Replaces the career with the same identity, keeping its position.
    ///
    /// The overlap rule is not re-run on update.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` holds any entry
    /// - `EntryNotFound` if no career has this identity
    pub fn update_career(
        &self,
        sink: &dyn ValidationSink,
        career: Career,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            careers: replaced(&self.careers, career)?,
            ..self.clone()
        })
    }

    /// Removes a career; unknown identities are ignored.
    pub fn remove_career(&self, id: &CareerId) -> Self {
        Self {
            careers: removed(&self.careers, id),
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a project whose company must already appear in the careers.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` already holds entries or no career has
    ///   the project's company name (recorded under `companyName`)
    pub fn add_project(
        &self,
        sink: &mut dyn ValidationSink,
        project: Project,
    ) -> Result<Self, DomainError> {
        check_project_company(sink, &project, &self.careers);
        fail_if_invalid(sink)?;
        Ok(Self {
            projects: appended(&self.projects, project),
            ..self.clone()
        })
    }

    /// Replaces the project with the same identity, keeping its position.
    ///
    /// The company-name check against careers is not re-run on update.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` holds any entry
    /// - `EntryNotFound` if no project has this identity
    pub fn update_project(
        &self,
        sink: &dyn ValidationSink,
        project: Project,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            projects: replaced(&self.projects, project)?,
            ..self.clone()
        })
    }

    pub fn remove_project(&self, id: &ProjectId) -> Self {
        Self {
            projects: removed(&self.projects, id),
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Certifications
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_certification(
        &self,
        sink: &dyn ValidationSink,
        certification: Certification,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            certifications: appended(&self.certifications, certification),
            ..self.clone()
        })
    }

    pub fn update_certification(
        &self,
        sink: &dyn ValidationSink,
        certification: Certification,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            certifications: replaced(&self.certifications, certification)?,
            ..self.clone()
        })
    }

    pub fn remove_certification(&self, id: &CertificationId) -> Self {
        Self {
            certifications: removed(&self.certifications, id),
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Portfolios
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_portfolio(
        &self,
        sink: &dyn ValidationSink,
        portfolio: Portfolio,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            portfolios: appended(&self.portfolios, portfolio),
            ..self.clone()
        })
    }

    pub fn update_portfolio(
        &self,
        sink: &dyn ValidationSink,
        portfolio: Portfolio,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            portfolios: replaced(&self.portfolios, portfolio)?,
            ..self.clone()
        })
    }

    pub fn remove_portfolio(&self, id: &PortfolioId) -> Self {
        Self {
            portfolios: removed(&self.portfolios, id),
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Social links and SNS platforms
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` holds entries or `link` is not a
    ///   `SocialLink`
    pub fn add_social_link(
        &self,
        sink: &mut dyn ValidationSink,
        link: ProfileLink,
    ) -> Result<Self, DomainError> {
        check_link_kind(sink, &link, ProfileLinkKind::SocialLink);
        fail_if_invalid(sink)?;
        Ok(Self {
            social_links: appended(&self.social_links, link),
            ..self.clone()
        })
    }

    pub fn update_social_link(
        &self,
        sink: &mut dyn ValidationSink,
        link: ProfileLink,
    ) -> Result<Self, DomainError> {
        check_link_kind(sink, &link, ProfileLinkKind::SocialLink);
        fail_if_invalid(sink)?;
        Ok(Self {
            social_links: replaced(&self.social_links, link)?,
            ..self.clone()
        })
    }

    pub fn remove_social_link(&self, id: &ProfileLinkId) -> Self {
        Self {
            social_links: removed(&self.social_links, id),
            ..self.clone()
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if `sink` holds entries or `link` is not an
    ///   `SnsPlatform`
    pub fn add_sns_platform(
        &self,
        sink: &mut dyn ValidationSink,
        link: ProfileLink,
    ) -> Result<Self, DomainError> {
        check_link_kind(sink, &link, ProfileLinkKind::SnsPlatform);
        fail_if_invalid(sink)?;
        Ok(Self {
            sns_platforms: appended(&self.sns_platforms, link),
            ..self.clone()
        })
    }

    pub fn update_sns_platform(
        &self,
        sink: &mut dyn ValidationSink,
        link: ProfileLink,
    ) -> Result<Self, DomainError> {
        check_link_kind(sink, &link, ProfileLinkKind::SnsPlatform);
        fail_if_invalid(sink)?;
        Ok(Self {
            sns_platforms: replaced(&self.sns_platforms, link)?,
            ..self.clone()
        })
    }

    pub fn remove_sns_platform(&self, id: &ProfileLinkId) -> Self {
        Self {
            sns_platforms: removed(&self.sns_platforms, id),
            ..self.clone()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Self promotions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_self_promotion(
        &self,
        sink: &dyn ValidationSink,
        self_promotion: SelfPromotion,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            self_promotions: appended(&self.self_promotions, self_promotion),
            ..self.clone()
        })
    }

    pub fn update_self_promotion(
        &self,
        sink: &dyn ValidationSink,
        self_promotion: SelfPromotion,
    ) -> Result<Self, DomainError> {
        fail_if_invalid(sink)?;
        Ok(Self {
            self_promotions: replaced(&self.self_promotions, self_promotion)?,
            ..self.clone()
        })
    }

    pub fn remove_self_promotion(&self, id: &SelfPromotionId) -> Self {
        Self {
            self_promotions: removed(&self.self_promotions, id),
            ..self.clone()
        }
    }
}

impl OwnedByUser for Resume {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}
