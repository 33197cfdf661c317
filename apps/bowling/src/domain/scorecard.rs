//! Public snapshot API for observing a game without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::game::Game;
use crate::domain::rules::{FrameNumber, Pins};

/// Per-frame row of the scorecard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRow {
    pub number: FrameNumber,
    pub throws: Vec<Pins>,
    pub bonus: Vec<Pins>,
    pub strike: bool,
    pub spare: bool,
    pub resolved: bool,
    /// Frame score, once resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u16>,
    /// Cumulative score through this frame, once it and every earlier frame resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_total: Option<u16>,
}

/// Top-level snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub active_frame: FrameNumber,
    pub pending_frames: Vec<FrameNumber>,
    pub current_score: u16,
    pub finished: bool,
    pub frames: Vec<FrameRow>,
}

impl Scorecard {
    pub fn from_game(game: &Game) -> Self {
        let mut total: Option<u16> = Some(0);
        let frames = game
            .frames()
            .iter()
            .map(|frame| {
                let resolved = frame.is_resolved();
                let score = resolved.then(|| frame.score());
                total = match (total, score) {
                    (Some(t), Some(s)) => Some(t + s),
                    _ => None,
                };
                FrameRow {
                    number: frame.number(),
                    throws: frame.throws().to_vec(),
                    bonus: frame.bonus_scores().to_vec(),
                    strike: frame.is_strike(),
                    spare: frame.is_spare(),
                    resolved,
                    score,
                    running_total: total,
                }
            })
            .collect();

        Self {
            active_frame: game.active_frame_number(),
            pending_frames: game.pending_frame_numbers(),
            current_score: game.current_score(),
            finished: !game.can_continue(),
            frames,
        }
    }
}

impl Game {
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_game(self)
    }
}
