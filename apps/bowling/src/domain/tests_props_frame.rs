//! Property tests for per-frame capacity and validation (pure domain).
//!
//! Properties tested:
//! - A strike closes frames 1-9 after one throw
//! - A spare closes frames 1-9 after two throws
//! - Frame 10 takes a third ball only after a strike or spare
//! - Out-of-range pins are rejected in every frame
//! - Frames 1-9 reject a second ball that overflows ten pins

use proptest::prelude::*;

use crate::domain::frame::Frame;
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: strike closes frames 1-9 immediately
    #[test]
    fn prop_strike_closes_open_frame(number in test_gens::open_frame_number()) {
        let mut frame = Frame::new(number).expect("valid frame number");
        frame.record_throw(10).expect("strike");
        prop_assert!(!frame.can_accept_throw());
        prop_assert!(!frame.is_resolved());
    }

    /// Property: spare closes frames 1-9 after the second ball
    #[test]
    fn prop_spare_closes_open_frame(
        number in test_gens::open_frame_number(),
        first in 0i32..=9,
    ) {
        let mut frame = Frame::new(number).expect("valid frame number");
        frame.record_throw(first).expect("first ball");
        prop_assert!(frame.can_accept_throw());
        frame.record_throw(10 - first).expect("spare ball");
        prop_assert!(frame.is_spare());
        prop_assert!(!frame.can_accept_throw());
    }

    /// Property: frame 10 capacity is 3 after a mark, 2 otherwise
    #[test]
    fn prop_last_frame_capacity(first in 0i32..=10, second in 0i32..=10) {
        let mut frame = Frame::new(10).expect("frame 10");
        frame.record_throw(first).expect("first ball");
        prop_assert!(frame.can_accept_throw());
        frame.record_throw(second).expect("second ball");

        let marked = first == 10 || first + second == 10;
        prop_assert_eq!(frame.can_accept_throw(), marked);
        if marked {
            frame.record_throw(10).expect("fill ball");
            prop_assert!(!frame.can_accept_throw());
        }
    }

    /// Property: out-of-range pins fail in every frame and record nothing
    #[test]
    fn prop_out_of_range_rejected(
        number in 1u8..=10,
        pins in test_gens::out_of_range_pins(),
    ) {
        let mut frame = Frame::new(number).expect("valid frame number");
        let err = frame.record_throw(pins).expect_err("out of range");
        prop_assert_eq!(err.validation_kind(), Some(ValidationKind::OutOfRange));
        prop_assert!(frame.throws().is_empty());
    }

    /// Property: frames 1-9 reject a ball that knocks more pins than remain
    #[test]
    fn prop_overflowing_second_ball_rejected(
        number in test_gens::open_frame_number(),
        (first, second) in test_gens::overflowing_pair(),
    ) {
        let mut frame = Frame::new(number).expect("valid frame number");
        frame.record_throw(first).expect("first ball");
        let err = frame.record_throw(second).expect_err("overflow");
        prop_assert_eq!(err.validation_kind(), Some(ValidationKind::ExceedsPinsStanding));
        prop_assert_eq!(frame.throws(), &[first as u8][..]);
    }
}
