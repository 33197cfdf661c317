// Proptest generators for domain types.
// Throw sequences are valid by construction: every generated throw fits the
// pins left standing in its frame, so no prop_assume! filtering is needed.

use proptest::prelude::*;

use crate::domain::rules::{FrameNumber, PINS};

/// Frame number 1..=9 (the frames with the two-ball cap)
pub fn open_frame_number() -> impl Strategy<Value = FrameNumber> {
    1u8..=9u8
}

/// Raw throw value anywhere outside 0..=10
pub fn out_of_range_pins() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..0, (PINS as i32 + 1)..=i32::MAX]
}

/// Two throws that together exceed the pins in a frame 1-9
/// (a first ball of 0 leaves all ten standing, so it cannot overflow)
pub fn overflowing_pair() -> impl Strategy<Value = (i32, i32)> {
    (1i32..=9).prop_flat_map(|first| (Just(first), (PINS as i32 - first + 1)..=PINS as i32))
}

/// Throws for one frame 1-9: a strike, or two balls summing to at most 10
pub fn frame_throws() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        1 => Just(vec![PINS as i32]),
        4 => (0i32..PINS as i32).prop_flat_map(|first| {
            (Just(first), 0..=(PINS as i32 - first)).prop_map(|(a, b)| vec![a, b])
        }),
    ]
}

/// Throws for frame 10: two balls, plus a third after a strike or spare
pub fn last_frame_throws() -> impl Strategy<Value = Vec<i32>> {
    let pins = 0..=PINS as i32;
    (pins.clone(), pins.clone(), pins).prop_map(|(a, b, c)| {
        let b = if a == PINS as i32 { b } else { b.min(PINS as i32 - a) };
        if a == PINS as i32 || a + b == PINS as i32 {
            vec![a, b, c]
        } else {
            vec![a, b]
        }
    })
}

/// A complete, legal game as a flat throw sequence
pub fn full_game() -> impl Strategy<Value = Vec<i32>> {
    (prop::collection::vec(frame_throws(), 9), last_frame_throws()).prop_map(
        |(frames, last)| {
            let mut throws: Vec<i32> = frames.into_iter().flatten().collect();
            throws.extend(last);
            throws
        },
    )
}

/// Prefix of a legal game (possibly empty, possibly the whole game)
pub fn partial_game() -> impl Strategy<Value = Vec<i32>> {
    full_game().prop_flat_map(|throws| {
        let len = throws.len();
        (Just(throws), 0..=len).prop_map(|(throws, cut)| throws[..cut].to_vec())
    })
}
