//! In-memory adapters for tests and development.

mod resume_repository;

pub use resume_repository::InMemoryResumeRepository;
