//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It is the only layer that logs.

pub mod handlers;

pub use handlers::{
    AddCareerCommand, AddCareerHandler, AddProjectCommand, AddProjectHandler,
    CreateResumeCommand, CreateResumeHandler, DeleteResumeCommand, DeleteResumeHandler,
    RemoveCareerCommand, RemoveCareerHandler, RenameResumeCommand, RenameResumeHandler,
    RestoreResumeCommand, RestoreResumeHandler, ResumeBackup, ResumeNameDuplicationCheck,
};
