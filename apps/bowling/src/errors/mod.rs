//! Error handling for the bowling scorer.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
