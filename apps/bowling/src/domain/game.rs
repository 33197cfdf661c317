use tracing::debug;

use crate::domain::frame::Frame;
use crate::domain::rules::{frame_numbers, FrameNumber, FRAMES};
use crate::errors::domain::DomainError;

/// A single player's game of ten frames, scored throw by throw.
///
/// Frames whose score waits on later throws (strikes and spares) sit in
/// `pending` and receive every subsequent throw as bonus until they resolve.
#[derive(Debug, Clone)]
pub struct Game {
    frames: Vec<Frame>,
    /// 0-based index of the frame taking throws.
    active: usize,
    /// Indices of closed frames still waiting on bonus throws.
    pending: Vec<usize>,
}

impl Game {
    pub fn new() -> Result<Self, DomainError> {
        let frames = frame_numbers()
            .map(Frame::new)
            .collect::<Result<Vec<_>, _>>()?;
        debug_assert_eq!(frames.len(), FRAMES);

        Ok(Self {
            frames,
            active: 0,
            pending: Vec::with_capacity(2),
        })
    }

    /// False once the tenth frame takes no more throws.
    pub fn can_continue(&self) -> bool {
        self.active < FRAMES && self.last_frame().can_accept_throw()
    }

    /// Feed one throw into the game.
    ///
    /// A rejected throw surfaces the frame's `InvalidScore` and changes nothing.
    pub fn record_throw(&mut self, pins: i32) -> Result<(), DomainError> {
        let active = self.active;
        self.frames[active].record_throw(pins)?;

        // The frame accepted it, so `pins` is a valid pin count.
        let bonus = self.frames[active].throws().last().copied().unwrap_or(0);
        for &idx in &self.pending {
            self.frames[idx].add_bonus_score(bonus);
        }

        let frames = &self.frames;
        self.pending.retain(|&idx| {
            let resolved = frames[idx].is_resolved();
            if resolved {
                debug!(
                    frame = frames[idx].number(),
                    score = frames[idx].score(),
                    "frame resolved"
                );
            }
            !resolved
        });

        if !self.frames[active].can_accept_throw() && self.can_continue() {
            if !self.frames[active].is_resolved() {
                self.pending.push(active);
            }
            self.active += 1;
            debug!(
                closed = self.frames[active].number(),
                next = self.active_frame_number(),
                pending = self.pending.len(),
                "frame closed"
            );
        }

        Ok(())
    }

    /// Sum of resolved frames in order, stopping at the first unresolved one.
    pub fn current_score(&self) -> u16 {
        self.frames
            .iter()
            .take_while(|f| f.is_resolved())
            .map(Frame::score)
            .sum()
    }

    /// Like `current_score`, but only over frames that are also closed, so the
    /// value never goes down as throws arrive.
    pub fn settled_score(&self) -> u16 {
        self.frames
            .iter()
            .take_while(|f| !f.can_accept_throw() && f.is_resolved())
            .map(Frame::score)
            .sum()
    }

    pub fn active_frame_number(&self) -> FrameNumber {
        self.frames[self.active.min(FRAMES - 1)].number()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, number: FrameNumber) -> Option<&Frame> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| self.frames.get(i))
    }

    /// Frame numbers still waiting on bonus throws, oldest first.
    pub fn pending_frame_numbers(&self) -> Vec<FrameNumber> {
        self.pending
            .iter()
            .map(|&idx| self.frames[idx].number())
            .collect()
    }

    fn last_frame(&self) -> &Frame {
        &self.frames[FRAMES - 1]
    }
}
