//! Domain layer: pure scoring logic, no I/O.

pub mod frame;
pub mod game;
pub mod rules;
pub mod scorecard;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_frame;

// Re-exports for ergonomics
pub use frame::Frame;
pub use game::Game;
pub use rules::{FrameNumber, Pins, FRAMES, LAST_FRAME, PINS};
pub use scorecard::{FrameRow, Scorecard};
