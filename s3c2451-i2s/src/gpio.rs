//! Pin descriptors and the pin-control interface.

use core::fmt::{self, Debug};

/// GPIO port letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bank {
    A,
    B,
    E,
}

/// One physical pin, identified by port and index within the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin {
    pub bank: Bank,
    pub index: u8,
}

impl Pin {
    pub const fn new(bank: Bank, index: u8) -> Self {
        Pin { bank, index }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GP{:?}{}", self.bank, self.index)
    }
}

/// Port A pin `n`.
pub const fn gpa(n: u8) -> Pin {
    Pin::new(Bank::A, n)
}

/// Port B pin `n`.
pub const fn gpb(n: u8) -> Pin {
    Pin::new(Bank::B, n)
}

/// Port E pin `n`.
pub const fn gpe(n: u8) -> Pin {
    Pin::new(Bank::E, n)
}

/// A run of consecutive pins on one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinRange {
    pub start: Pin,
    pub count: u8,
}

impl PinRange {
    pub const fn new(start: Pin, count: u8) -> Self {
        PinRange { start, count }
    }
}

/// Electrical function of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFunction {
    Input,
    Output,
    /// Peripheral function `n` (the SoC's "special function" selector).
    Special(u8),
}

/// Pull resistor setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullMode {
    None,
    Down,
    Up,
}

/// Pin multiplexing service.
pub trait PinControl {
    /// Error reported when a range can't be configured.
    type Error: Debug;

    /// Apply `function` and `pull` to every pin in `range`.
    fn configure_range(
        &mut self,
        range: PinRange,
        function: PinFunction,
        pull: PullMode,
    ) -> Result<(), Self::Error>;

    /// Return every pin in `range` to its reset configuration.
    fn release_range(&mut self, range: PinRange);
}
