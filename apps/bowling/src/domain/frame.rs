use tracing::debug;

use crate::domain::rules::{
    frame_numbers, pins_from_raw, FrameNumber, Pins, DEFAULT_MAX_THROWS, LAST_FRAME,
    LAST_FRAME_MAX_THROWS, PINS,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// One of the ten scoring units of a game.
///
/// A frame only ever receives values: its own throws while it is active, and
/// bonus throws pushed by the game while its score is still deferred. It never
/// looks at other frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: FrameNumber,
    throws: Vec<Pins>,
    bonus_scores: Vec<Pins>,
}

impl Frame {
    pub fn new(number: FrameNumber) -> Result<Self, DomainError> {
        if !frame_numbers().contains(&number) {
            return Err(DomainError::InvalidFrameNumber(number));
        }
        Ok(Self {
            number,
            throws: Vec::with_capacity(LAST_FRAME_MAX_THROWS),
            bonus_scores: Vec::with_capacity(2),
        })
    }

    pub fn number(&self) -> FrameNumber {
        self.number
    }

    pub fn throws(&self) -> &[Pins] {
        &self.throws
    }

    pub fn bonus_scores(&self) -> &[Pins] {
        &self.bonus_scores
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.number == LAST_FRAME
    }

    pub fn is_strike(&self) -> bool {
        self.nth_throw(1) == PINS
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.nth_throw(1) + self.nth_throw(2) == PINS
    }

    /// Whether another ball may be rolled in this frame.
    pub fn can_accept_throw(&self) -> bool {
        let next_count = self.throws.len() + 1;
        let marked = self.is_strike() || self.is_spare();

        if self.is_last() {
            next_count <= LAST_FRAME_MAX_THROWS && (marked || next_count <= DEFAULT_MAX_THROWS)
        } else {
            next_count <= DEFAULT_MAX_THROWS && !marked
        }
    }

    /// Record a throw; rejected throws leave the frame untouched.
    pub fn record_throw(&mut self, raw: i32) -> Result<(), DomainError> {
        let pins = self.validate(raw)?;
        self.throws.push(pins);
        debug!(frame = self.number, pins, throws = ?self.throws, "throw recorded");
        Ok(())
    }

    /// Whether the score can be computed from what has been recorded so far.
    pub fn is_resolved(&self) -> bool {
        if self.is_last() {
            return true;
        }
        if self.is_strike() {
            return self.bonus_scores.len() >= 2;
        }
        if self.is_spare() {
            return !self.bonus_scores.is_empty();
        }
        true
    }

    pub fn add_bonus_score(&mut self, pins: Pins) {
        self.bonus_scores.push(pins);
    }

    /// Frame score including bonus. Partial until `is_resolved()`.
    pub fn score(&self) -> u16 {
        let base: u16 = self.throws.iter().map(|&p| u16::from(p)).sum();
        if self.is_last() {
            return base;
        }

        let bonus_balls = if self.is_strike() {
            2
        } else if self.is_spare() {
            1
        } else {
            0
        };
        let bonus: u16 = self
            .bonus_scores
            .iter()
            .take(bonus_balls)
            .map(|&p| u16::from(p))
            .sum();
        base + bonus
    }

    fn validate(&self, raw: i32) -> Result<Pins, DomainError> {
        let Some(pins) = pins_from_raw(raw) else {
            return Err(DomainError::invalid_score(
                self.number,
                raw,
                ValidationKind::OutOfRange,
            ));
        };

        if !self.can_accept_throw() {
            return Err(DomainError::invalid_score(
                self.number,
                raw,
                ValidationKind::FrameClosed,
            ));
        }

        // Frame 10 resets the pins after a strike or spare, so only 1-9 are capped.
        let knocked = self.throws.iter().map(|&p| u16::from(p)).sum::<u16>() + u16::from(pins);
        if !self.is_last() && knocked > u16::from(PINS) {
            return Err(DomainError::invalid_score(
                self.number,
                raw,
                ValidationKind::ExceedsPinsStanding,
            ));
        }

        Ok(pins)
    }

    /// 1-based throw lookup; missing throws count as zero.
    fn nth_throw(&self, n: usize) -> Pins {
        n.checked_sub(1)
            .and_then(|i| self.throws.get(i))
            .copied()
            .unwrap_or(0)
    }
}
