//! Clock provider interface.
//!
//! Clocks are named, reference-counted sources. A handle obtained with
//! [`ClockProvider::get`] holds one reference until it is passed back to
//! [`ClockProvider::put`]; `enable` and `disable` calls must balance.

use core::fmt::{self, Debug};

/// A frequency in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Hertz(pub u32);

impl fmt::Display for Hertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Source of named, reference-counted clocks.
pub trait ClockProvider {
    /// Handle to one reference on a clock.
    type Clock;

    /// Error reported by fallible clock operations.
    type Error: Debug;

    /// Take a reference on the clock called `name`.
    fn get(&mut self, name: &str) -> Result<Self::Clock, Self::Error>;

    /// Route `clock` from `parent`.
    fn set_parent(&mut self, clock: &Self::Clock, parent: &Self::Clock) -> Result<(), Self::Error>;

    /// Ungate `clock`.
    fn enable(&mut self, clock: &Self::Clock) -> Result<(), Self::Error>;

    /// Gate `clock`. Balances one successful [`enable`](Self::enable).
    fn disable(&mut self, clock: &Self::Clock);

    /// Drop the reference held by `clock`.
    fn put(&mut self, clock: Self::Clock);

    /// Current output rate of `clock`.
    fn rate(&self, clock: &Self::Clock) -> Hertz;
}
