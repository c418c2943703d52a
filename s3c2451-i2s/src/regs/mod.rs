//! Memory-mapped register access.
//!
//! The driver never touches raw pointers itself. A [`RegisterMapper`] turns a
//! physical address range into a [`RegisterWindow`], and the window is handed
//! back to the mapper on teardown. Because [`RegisterMapper::unmap`] consumes
//! the window, a window can't be read or written once it has been unmapped.

pub mod iis;

#[cfg(feature = "mmio")]
mod mmio;

#[cfg(feature = "mmio")]
pub use mmio::MmioWindow;

use core::fmt::Debug;

/// A physical bus address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u32);

impl PhysAddr {
    /// Raw address value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// A mapped range of 32-bit device registers.
///
/// Offsets are in bytes from the start of the window and must be 4-byte
/// aligned.
pub trait RegisterWindow {
    /// Read the 32-bit register at `offset`.
    fn read32(&self, offset: usize) -> u32;

    /// Write `value` to the 32-bit register at `offset`.
    fn write32(&mut self, offset: usize, value: u32);
}

/// Maps physical register ranges into the caller's address space.
pub trait RegisterMapper {
    /// Window type produced by a successful mapping.
    type Window: RegisterWindow;

    /// Error reported when a range can't be mapped.
    type Error: Debug;

    /// Map `size` bytes starting at `phys`.
    fn map(&mut self, phys: PhysAddr, size: usize) -> Result<Self::Window, Self::Error>;

    /// Unmap a window previously returned by [`map`](Self::map).
    fn unmap(&mut self, window: Self::Window);
}
