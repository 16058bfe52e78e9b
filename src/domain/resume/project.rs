//! Project entity.
//!
//! A project belongs to one of the careers on the same resume. The link is by
//! company name and is enforced by the aggregate root, not here.

use serde::{Deserialize, Serialize};

use super::{CompanyName, Period, TechStack};
use crate::domain::foundation::{require_text, ProjectId, ValidationSink, YearMonth};

pub const MAX_PROJECT_NAME_LENGTH: usize = 50;
pub const MAX_PROJECT_TEXT_LENGTH: usize = 1000;

/// Development phases a project member took part in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Process {
    pub requirements: bool,
    pub basic_design: bool,
    pub detailed_design: bool,
    pub implementation: bool,
    pub integration_test: bool,
    pub system_test: bool,
    pub maintenance: bool,
}

/// Raw input for [`Project::create`].
#[derive(Debug, Clone, Default)]
pub struct ProjectFields {
    pub company_name: String,
    pub start_date: Option<YearMonth>,
    pub end_date: Option<YearMonth>,
    pub is_active: bool,
    pub name: String,
    pub overview: String,
    pub team_comp: String,
    pub role: String,
    pub achievement: String,
    pub process: Process,
    pub tech_stack: TechStack,
}

/// One project carried out during a career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    company_name: CompanyName,
    period: Period,
    name: String,
    overview: String,
    team_comp: String,
    role: String,
    achievement: String,
    process: Process,
    tech_stack: TechStack,
}

fn validate_name(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "name", "プロジェクト名", value, MAX_PROJECT_NAME_LENGTH);
}

fn validate_overview(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "overview", "概要", value, MAX_PROJECT_TEXT_LENGTH);
}

fn validate_team_comp(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "teamComp", "チーム構成", value, MAX_PROJECT_TEXT_LENGTH);
}

fn validate_role(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "role", "役割", value, MAX_PROJECT_TEXT_LENGTH);
}

fn validate_achievement(sink: &mut dyn ValidationSink, value: &str) {
    require_text(sink, "achievement", "成果", value, MAX_PROJECT_TEXT_LENGTH);
}

impl Project {
    /// Creates a project with a fresh identity.
    ///
    /// Fields are validated in declaration order into `sink`.
    pub fn create(sink: &mut dyn ValidationSink, fields: ProjectFields) -> Self {
        let company_name = CompanyName::create(sink, &fields.company_name);
        let period = Period::create(sink, fields.start_date, fields.end_date, fields.is_active);
        validate_name(sink, &fields.name);
        validate_overview(sink, &fields.overview);
        validate_team_comp(sink, &fields.team_comp);
        validate_role(sink, &fields.role);
        validate_achievement(sink, &fields.achievement);

        Self {
            id: ProjectId::new(),
            company_name,
            period,
            name: fields.name,
            overview: fields.overview,
            team_comp: fields.team_comp,
            role: fields.role,
            achievement: fields.achievement,
            process: fields.process,
            tech_stack: fields.tech_stack,
        }
    }

    /// Rehydrates a project from trusted storage (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: ProjectId,
        company_name: CompanyName,
        period: Period,
        name: String,
        overview: String,
        team_comp: String,
        role: String,
        achievement: String,
        process: Process,
        tech_stack: TechStack,
    ) -> Self {
        Self {
            id,
            company_name,
            period,
            name,
            overview,
            team_comp,
            role,
            achievement,
            process,
            tech_stack,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn team_comp(&self) -> &str {
        &self.team_comp
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn achievement(&self) -> &str {
        &self.achievement
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn tech_stack(&self) -> &TechStack {
        &self.tech_stack
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Changes
    // ─────────────────────────────────────────────────────────────────────────

    pub fn change_company_name(&self, sink: &mut dyn ValidationSink, company_name: &str) -> Self {
        Self {
            company_name: CompanyName::create(sink, company_name),
            ..self.clone()
        }
    }

    pub fn change_period(
        &self,
        sink: &mut dyn ValidationSink,
        start_date: Option<YearMonth>,
        end_date: Option<YearMonth>,
        is_active: bool,
    ) -> Self {
        Self {
            period: Period::create(sink, start_date, end_date, is_active),
            ..self.clone()
        }
    }

    pub fn change_name(&self, sink: &mut dyn ValidationSink, name: &str) -> Self {
        validate_name(sink, name);
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn change_overview(&self, sink: &mut dyn ValidationSink, overview: &str) -> Self {
        validate_overview(sink, overview);
        Self {
            overview: overview.to_string(),
            ..self.clone()
        }
    }

    pub fn change_team_comp(&self, sink: &mut dyn ValidationSink, team_comp: &str) -> Self {
        validate_team_comp(sink, team_comp);
        Self {
            team_comp: team_comp.to_string(),
            ..self.clone()
        }
    }

    pub fn change_role(&self, sink: &mut dyn ValidationSink, role: &str) -> Self {
        validate_role(sink, role);
        Self {
            role: role.to_string(),
            ..self.clone()
        }
    }

    pub fn change_achievement(&self, sink: &mut dyn ValidationSink, achievement: &str) -> Self {
        validate_achievement(sink, achievement);
        Self {
            achievement: achievement.to_string(),
            ..self.clone()
        }
    }

    /// Process flags carry no rules.
    pub fn change_process(&self, process: Process) -> Self {
        Self {
            process,
            ..self.clone()
        }
    }

    /// Tech stack lists carry no rules.
    pub fn change_tech_stack(&self, tech_stack: TechStack) -> Self {
        Self {
            tech_stack,
            ..self.clone()
        }
    }
}
