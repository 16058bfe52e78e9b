//! Configuration-driven limit checking.

mod configured_limit_checker;

pub use configured_limit_checker::ConfiguredLimitChecker;
