//! Domain-level error type for the scoring core.
//!
//! Shell and binary code wrap this in `crate::error::AppError`; the core
//! itself never performs I/O.

use thiserror::Error;

use crate::domain::rules::FrameNumber;

/// Why a throw was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Pin count outside 0..=10.
    OutOfRange,
    /// Pin count larger than the pins still standing in a frame 1-9.
    ExceedsPinsStanding,
    /// The frame (or the whole game) takes no more throws.
    FrameClosed,
}

impl ValidationKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ValidationKind::OutOfRange => "pin count must be between 0 and 10",
            ValidationKind::ExceedsPinsStanding => "more pins than are left standing",
            ValidationKind::FrameClosed => "frame takes no more throws",
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Rejected throw; recoverable, nothing was recorded.
    #[error("invalid score {pins} in frame {frame}: {}", .kind.describe())]
    InvalidScore {
        frame: FrameNumber,
        pins: i32,
        kind: ValidationKind,
    },
    /// Frame numbers run 1..=10; anything else is a construction bug.
    #[error("invalid frame number {0}")]
    InvalidFrameNumber(FrameNumber),
}

impl DomainError {
    pub fn invalid_score(frame: FrameNumber, pins: i32, kind: ValidationKind) -> Self {
        Self::InvalidScore { frame, pins, kind }
    }

    /// Validation kind of a rejected throw, if this is one.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::InvalidScore { kind, .. } => Some(*kind),
            DomainError::InvalidFrameNumber(_) => None,
        }
    }
}
