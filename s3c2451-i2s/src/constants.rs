/// Physical base address of the IIS controller.
pub const IIS_PHYS_BASE: u32 = 0x5500_0000;

/// Size in bytes of the IIS register window mapped at probe.
pub const IIS_WINDOW_SIZE: usize = 0x100;

/// Interface clock feeding the IIS controller.
pub const IIS_CLOCK: &str = "i2s-if";

/// Reference clock the interface clock is reparented to (EPLL reference).
pub const IIS_PARENT_CLOCK: &str = "epllref";

/// Number of pins the IIS controller drives (GPE0..GPE4).
pub const IIS_PIN_COUNT: u8 = 5;

/// Special-function number selecting the IIS signals on port E.
pub const IIS_PIN_FUNCTION: u8 = 2;

/// Bytes moved per DMA transfer: one packed 32-bit stereo sample.
pub const DMA_TRANSFER_SIZE: u8 = 4;

/// Fixed channel count for both directions.
pub const IIS_CHANNELS: u8 = 2;

/// Number of board LEDs.
pub const LED_COUNT: usize = 4;
