//! Probe parameters.

use crate::board::BoardRevision;
use crate::constants::{
    IIS_CLOCK, IIS_PARENT_CLOCK, IIS_PHYS_BASE, IIS_PIN_FUNCTION, IIS_WINDOW_SIZE,
};
use crate::gpio::{PinFunction, PinRange};
use crate::regs::PhysAddr;

/// Clock feeding the IIS controller's internal divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MuxSource {
    /// Peripheral bus clock.
    Pclk,
    /// Audio clock from the system mux (EPLL).
    #[default]
    SysMux,
}

/// Everything probe needs to know about where the interface lives.
///
/// The default describes the IIS block on the MINI2451.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub base: PhysAddr,
    pub window_size: usize,
    pub clock: &'static str,
    pub parent_clock: &'static str,
    pub mux: MuxSource,
    pub pins: PinRange,
    pub pin_function: PinFunction,
}

impl ProbeConfig {
    /// Configuration for a given board revision.
    pub fn for_board(rev: BoardRevision) -> Self {
        ProbeConfig {
            base: PhysAddr(IIS_PHYS_BASE),
            window_size: IIS_WINDOW_SIZE,
            clock: IIS_CLOCK,
            parent_clock: IIS_PARENT_CLOCK,
            mux: MuxSource::SysMux,
            pins: rev.iis_pins(),
            pin_function: PinFunction::Special(IIS_PIN_FUNCTION),
        }
    }

    pub fn with_base(mut self, base: PhysAddr) -> Self {
        self.base = base;
        self
    }

    pub fn with_clock(mut self, name: &'static str) -> Self {
        self.clock = name;
        self
    }

    pub fn with_parent_clock(mut self, name: &'static str) -> Self {
        self.parent_clock = name;
        self
    }

    pub fn with_mux(mut self, mux: MuxSource) -> Self {
        self.mux = mux;
        self
    }

    pub fn with_pins(mut self, pins: PinRange) -> Self {
        self.pins = pins;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::for_board(BoardRevision::default())
    }
}
