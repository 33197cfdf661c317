#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod shell;

// Re-exports for public API
pub use config::{LogFormat, ShellConfig};
pub use domain::{Frame, Game, Scorecard};
pub use error::AppError;
pub use errors::{DomainError, ValidationKind};
pub use shell::{Shell, SessionSummary};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    bowling_test_support::logging::init();
}
