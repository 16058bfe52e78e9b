//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod resume;

pub use resume::{
    AddCareerCommand, AddCareerHandler, AddProjectCommand, AddProjectHandler,
    CreateResumeCommand, CreateResumeHandler, DeleteResumeCommand, DeleteResumeHandler,
    RemoveCareerCommand, RemoveCareerHandler, RenameResumeCommand, RenameResumeHandler,
    RestoreResumeCommand, RestoreResumeHandler, ResumeBackup, ResumeNameDuplicationCheck,
};
