//! IIS controller register offsets and bitfield definitions.
//!
//! Offsets are relative to the start of the IIS window
//! ([`IIS_PHYS_BASE`](crate::constants::IIS_PHYS_BASE)). All registers are
//! 32 bits wide.

// The control, FIFO and prescaler registers are listed for completeness;
// the bring-up sequence only touches IISMOD.
#![allow(dead_code)]

// ── Control ────────────────────────────────────────────────────────────────

/// IIS control.
/// - Bit 2 — TXDMACTIVE
/// - Bit 1 — RXDMACTIVE
/// - Bit 0 — I2SACTIVE
pub const IISCON: usize = 0x00;

/// IIS mode.
/// - Bit  12   — IMS (0=PCLK, 1=audio clock from the system mux)
/// - Bits 11:10 — master/slave select
/// - Bits  9:8 — TXR (0=TX only, 1=RX only, 2=TX/RX)
/// - Bit   7   — LRP (left/right channel polarity)
/// - Bits  6:5 — SDF (serial data format)
/// - Bits  4:3 — RFS (root frequency)
/// - Bits  2:1 — BFS (bit clock frequency)
/// - Bit   0   — BLC (bit length)
pub const IISMOD: usize = 0x04;

/// FIFO control.
pub const IISFIC: usize = 0x08;

/// Prescaler.
pub const IISPSR: usize = 0x0C;

// ── FIFO data ──────────────────────────────────────────────────────────────

/// Transmit FIFO (playback DMA destination).
pub const IISTXD: usize = 0x10;

/// Receive FIFO (capture DMA source).
pub const IISRXD: usize = 0x14;

/// Smallest window covering every register the bring-up sequence touches.
pub const MIN_WINDOW: usize = IISMOD + 4;

// ── IISMOD fields ──────────────────────────────────────────────────────────

/// IMS field mask within IISMOD.
pub const IISMOD_IMS_MASK: u32 = 1 << 12;

/// IMS encoding: controller clocked from PCLK.
pub const IISMOD_IMS_PCLK: u32 = 0;

/// IMS encoding: controller clocked from the audio system mux.
pub const IISMOD_IMS_SYSMUX: u32 = 1 << 12;
