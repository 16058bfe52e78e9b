//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory resume repository
//! - `limits` - Limit checker driven by configuration

pub mod limits;
pub mod memory;

pub use limits::ConfiguredLimitChecker;
pub use memory::InMemoryResumeRepository;
