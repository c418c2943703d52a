//! Error kinds reported by the lifecycle and the LED driver.

use thiserror::Error;

use crate::lifecycle::DeviceState;

/// Why probe failed. Every resource taken before the failure has already
/// been released when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("failed to map IIS registers")]
    MapFailed,
    #[error("IIS interface clock unavailable")]
    ClockUnavailable,
    #[error("failed to route or enable the IIS interface clock")]
    ClockRoutingFailed,
    #[error("failed to configure IIS pins")]
    PinConfigFailed,
    #[error("audio registry rejected the interface")]
    RegistrationFailed,
    #[error("probe called on an instance in state {0:?}")]
    InvalidState(DeviceState),
}

/// Remove was called on an instance that isn't ready. This is a caller
/// contract violation; nothing was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    #[error("remove called on an instance in state {0:?}")]
    NotReady(DeviceState),
}

/// LED control errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedError<E> {
    #[error("no LED at index {0}")]
    InvalidIndex(usize),
    #[error("unknown LED command {0}")]
    InvalidCommand(u32),
    #[error("GPIO error: {0:?}")]
    Pin(E),
}
