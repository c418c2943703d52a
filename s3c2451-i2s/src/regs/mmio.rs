//! Volatile register window over an already-mapped base pointer.

use core::ptr::NonNull;

use volatile::VolatilePtr;

use super::RegisterWindow;

/// [`RegisterWindow`] backed by a virtual mapping of device memory.
///
/// Every access is a single volatile 32-bit load or store, so the compiler
/// can neither elide nor merge register accesses.
pub struct MmioWindow {
    base: NonNull<u32>,
    len: usize,
}

impl MmioWindow {
    /// Wrap a mapped region of `len` bytes starting at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to `len` bytes of mapped, 4-byte-aligned device (or
    /// ordinary) memory that stays valid and is not accessed through any other
    /// path for as long as the window exists.
    pub unsafe fn new(base: NonNull<u32>, len: usize) -> Self {
        MmioWindow { base, len }
    }

    /// Window length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Give back the base pointer so the mapper can tear the mapping down.
    pub fn into_raw(self) -> NonNull<u32> {
        self.base
    }

    fn register(&self, offset: usize) -> VolatilePtr<'_, u32> {
        assert!(
            offset % 4 == 0 && offset.checked_add(4).is_some_and(|end| end <= self.len),
            "register offset {offset:#x} outside window of {:#x} bytes",
            self.len
        );
        // SAFETY: `offset` is aligned and inside the window (checked above),
        // and the constructor contract guarantees the window is mapped and
        // exclusively ours.
        unsafe { VolatilePtr::new(NonNull::new_unchecked(self.base.as_ptr().add(offset / 4))) }
    }
}

impl RegisterWindow for MmioWindow {
    fn read32(&self, offset: usize) -> u32 {
        self.register(offset).read()
    }

    fn write32(&mut self, offset: usize, value: u32) {
        self.register(offset).write(value)
    }
}
