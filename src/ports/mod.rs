//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResumeRepository` - Resume aggregate persistence
//! - `LimitChecker` - Per-user and per-resume caps

mod limit_checker;
mod resume_repository;

pub use limit_checker::LimitChecker;
pub use resume_repository::ResumeRepository;
