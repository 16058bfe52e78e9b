//! Technology stack metadata attached to projects.
//!
//! Pure data: every list holds free-text technology names and nothing here
//! is validated.

use serde::{Deserialize, Serialize};

/// Technologies used in a project, grouped by layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechStack {
    pub frontend: Frontend,
    pub backend: Backend,
    pub infrastructure: Infrastructure,
    pub tools: Tools,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frontend {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub libraries: Vec<String>,
    pub build_tools: Vec<String>,
    pub package_managers: Vec<String>,
    pub linters: Vec<String>,
    pub formatters: Vec<String>,
    pub testing_tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Backend {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub libraries: Vec<String>,
    pub build_tools: Vec<String>,
    pub package_managers: Vec<String>,
    pub linters: Vec<String>,
    pub formatters: Vec<String>,
    pub testing_tools: Vec<String>,
    pub orm_tools: Vec<String>,
    pub auth: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Infrastructure {
    pub clouds: Vec<String>,
    pub operating_systems: Vec<String>,
    pub containers: Vec<String>,
    pub databases: Vec<String>,
    pub web_servers: Vec<String>,
    pub ci_cd_tools: Vec<String>,
    pub iac_tools: Vec<String>,
    pub monitoring_tools: Vec<String>,
    pub logging_tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tools {
    pub source_controls: Vec<String>,
    pub project_managements: Vec<String>,
    pub communication_tools: Vec<String>,
    pub documentation_tools: Vec<String>,
    pub api_development_tools: Vec<String>,
    pub design_tools: Vec<String>,
    pub editors: Vec<String>,
    pub development_methodologies: Vec<String>,
}
