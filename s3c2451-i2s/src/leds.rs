//! Board LED driver.
//!
//! The four user LEDs hang off GPIOs that sink current, so a low pin lights
//! the LED. The driver is generic over any [`embedded_hal::digital::OutputPin`];
//! [`BoardRevision::led_pins`](crate::board::BoardRevision::led_pins) says
//! which GPIO each LED index uses on a given board.
//!
//! # Example
//!
//! ```ignore
//! let mut leds = Leds::new([led0, led1, led2, led3])?; // all off
//! leds.set_led(2, true)?;
//! leds.ioctl(0, 2)?;                                   // LED 2 off again
//! ```

use embedded_hal::digital::OutputPin;
use log::info;

use crate::constants::LED_COUNT;
use crate::error::LedError;

/// ioctl command: switch an LED off.
pub const LED_OFF: u32 = 0;

/// ioctl command: switch an LED on.
pub const LED_ON: u32 = 1;

/// Device node name.
pub const DEVICE_NAME: &str = "leds";

/// The board's LEDs.
pub struct Leds<P> {
    pins: [P; LED_COUNT],
}

impl<P: OutputPin> Leds<P> {
    /// Take the LED GPIOs and switch every LED off.
    pub fn new(mut pins: [P; LED_COUNT]) -> Result<Self, LedError<P::Error>> {
        for pin in pins.iter_mut() {
            pin.set_high().map_err(LedError::Pin)?;
        }
        info!("{}\tinitialized", DEVICE_NAME);
        Ok(Leds { pins })
    }

    /// Switch LED `index` (0..=3) on or off.
    pub fn set_led(&mut self, index: usize, on: bool) -> Result<(), LedError<P::Error>> {
        let pin = self.pins.get_mut(index).ok_or(LedError::InvalidIndex(index))?;
        if on {
            pin.set_low().map_err(LedError::Pin)
        } else {
            pin.set_high().map_err(LedError::Pin)
        }
    }

    /// Character-device control entry point: `cmd` is [`LED_OFF`] or
    /// [`LED_ON`], `arg` the LED index.
    pub fn ioctl(&mut self, cmd: u32, arg: usize) -> Result<(), LedError<P::Error>> {
        match cmd {
            LED_OFF => self.set_led(arg, false),
            LED_ON => self.set_led(arg, true),
            _ => Err(LedError::InvalidCommand(cmd)),
        }
    }

    /// Give the GPIOs back.
    pub fn release(self) -> [P; LED_COUNT] {
        self.pins
    }
}
