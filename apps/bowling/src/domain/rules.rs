use std::ops::RangeInclusive;

pub type FrameNumber = u8; // 1..=10
pub type Pins = u8; // 0..=10

pub const FRAMES: usize = 10;
pub const LAST_FRAME: FrameNumber = 10;
pub const PINS: Pins = 10;

/// Throws a frame holds before it closes (frames 1-9, and frame 10 without a bonus ball).
pub const DEFAULT_MAX_THROWS: usize = 2;
/// Frame 10 earns a third ball after a strike or spare.
pub const LAST_FRAME_MAX_THROWS: usize = 3;

pub fn frame_numbers() -> RangeInclusive<FrameNumber> {
    1..=LAST_FRAME
}

pub fn valid_pin_range() -> RangeInclusive<i32> {
    0..=PINS as i32
}

/// Narrow a raw throw to a pin count, if it is one.
pub fn pins_from_raw(raw: i32) -> Option<Pins> {
    if valid_pin_range().contains(&raw) {
        Pins::try_from(raw).ok()
    } else {
        None
    }
}
