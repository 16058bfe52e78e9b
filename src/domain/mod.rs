//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, year-month, validation sink, errors)
//! - `resume` - Resume aggregate, its child entities and value objects
//!
//! Nothing in this layer performs I/O or logging.

pub mod foundation;
pub mod resume;
