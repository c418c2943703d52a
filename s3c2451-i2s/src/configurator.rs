//! Register and pin configuration steps applied during probe.
//!
//! These operate on collaborators they borrow and never own anything.

use crate::config::MuxSource;
use crate::gpio::{PinControl, PinFunction, PinRange, PullMode};
use crate::regs::iis;
use crate::regs::RegisterWindow;

/// Read-modify-write: `new = (current & !mask) | (value & mask)`.
///
/// Returns the value written.
pub fn modify32<W>(window: &mut W, offset: usize, value: u32, mask: u32) -> u32
where
    W: RegisterWindow + ?Sized,
{
    let current = window.read32(offset);
    let new_val = (current & !mask) | (value & mask);
    window.write32(offset, new_val);
    new_val
}

/// Select the clock feeding the IIS controller.
///
/// Only the IMS field of IISMOD changes; every other bit is written back as
/// it was read.
pub fn select_clock_mux<W>(window: &mut W, source: MuxSource) -> u32
where
    W: RegisterWindow + ?Sized,
{
    let encoding = match source {
        MuxSource::Pclk => iis::IISMOD_IMS_PCLK,
        MuxSource::SysMux => iis::IISMOD_IMS_SYSMUX,
    };
    modify32(window, iis::IISMOD, encoding, iis::IISMOD_IMS_MASK)
}

/// Hand `range` over to the IIS controller: peripheral `function`, no pull.
pub fn set_pin_function<P>(
    pins: &mut P,
    range: PinRange,
    function: PinFunction,
) -> Result<(), P::Error>
where
    P: PinControl + ?Sized,
{
    pins.configure_range(range, function, PullMode::None)
}
