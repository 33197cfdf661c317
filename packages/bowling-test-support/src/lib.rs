//! Bowling test support utilities
//!
//! Shared logging initialization for unit and integration tests.

pub mod logging;
