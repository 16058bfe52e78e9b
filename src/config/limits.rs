//! Per-user and per-resume caps

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Caps enforced by the limit checker before each creation or addition.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Resumes a single user may hold
    #[serde(default = "default_max_resumes_per_user")]
    pub max_resumes_per_user: usize,

    #[serde(default = "default_max_careers")]
    pub max_careers: usize,

    #[serde(default = "default_max_projects")]
    pub max_projects: usize,

    #[serde(default = "default_max_certifications")]
    pub max_certifications: usize,

    #[serde(default = "default_max_portfolios")]
    pub max_portfolios: usize,

    #[serde(default = "default_max_social_links")]
    pub max_social_links: usize,

    #[serde(default = "default_max_sns_platforms")]
    pub max_sns_platforms: usize,

    #[serde(default = "default_max_self_promotions")]
    pub max_self_promotions: usize,
}

impl LimitsConfig {
    /// Validate that every cap allows at least one entry
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let caps = [
            ("max_resumes_per_user", self.max_resumes_per_user),
            ("max_careers", self.max_careers),
            ("max_projects", self.max_projects),
            ("max_certifications", self.max_certifications),
            ("max_portfolios", self.max_portfolios),
            ("max_social_links", self.max_social_links),
            ("max_sns_platforms", self.max_sns_platforms),
            ("max_self_promotions", self.max_self_promotions),
        ];
        match caps.iter().find(|(_, cap)| *cap == 0) {
            Some((name, _)) => Err(ConfigValidationError::ZeroLimit(name)),
            None => Ok(()),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_resumes_per_user: default_max_resumes_per_user(),
            max_careers: default_max_careers(),
            max_projects: default_max_projects(),
            max_certifications: default_max_certifications(),
            max_portfolios: default_max_portfolios(),
            max_social_links: default_max_social_links(),
            max_sns_platforms: default_max_sns_platforms(),
            max_self_promotions: default_max_self_promotions(),
        }
    }
}

fn default_max_resumes_per_user() -> usize {
    10
}

fn default_max_careers() -> usize {
    20
}

fn default_max_projects() -> usize {
    50
}

fn default_max_certifications() -> usize {
    30
}

fn default_max_portfolios() -> usize {
    20
}

fn default_max_social_links() -> usize {
    10
}

fn default_max_sns_platforms() -> usize {
    10
}

fn default_max_self_promotions() -> usize {
    10
}
