//! MINI2451 board revisions.
//!
//! The revision is resolved at runtime from the board's revision id instead of
//! being baked into the build, so one image serves every board.

use crate::constants::{IIS_PIN_COUNT, LED_COUNT};
use crate::gpio::{gpa, gpb, gpe, Pin, PinRange};

/// Hardware revision of the MINI2451 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardRevision {
    #[default]
    A,
    /// Moves LEDs 2 and 3 from port A to port B.
    B,
}

impl BoardRevision {
    /// Resolve the revision from the id reported by the board.
    ///
    /// Unknown ids fall back to revision A, the original layout.
    pub fn from_id(id: u8) -> Self {
        match id {
            b'B' | b'b' | 1 => BoardRevision::B,
            _ => BoardRevision::A,
        }
    }

    /// GPIO driving each LED, by LED index.
    pub const fn led_pins(self) -> [Pin; LED_COUNT] {
        match self {
            BoardRevision::A => [gpb(5), gpb(6), gpa(25), gpa(26)],
            BoardRevision::B => [gpb(5), gpb(6), gpb(7), gpb(8)],
        }
    }

    /// Pins carrying the IIS signals (identical on every revision).
    pub const fn iis_pins(self) -> PinRange {
        PinRange::new(gpe(0), IIS_PIN_COUNT)
    }
}
