//! # s3c2451-i2s
//!
//! A `no_std` bring-up and tear-down core for the IIS (I²S) audio interface
//! of the Samsung S3C2451 as found on the FriendlyARM MINI2451 board. It
//! sequences clock acquisition, clock-tree routing, register setup, pin
//! multiplexing and DMA descriptor publication, and unwinds all of it in
//! reverse when anything fails.
//!
//! The SoC services (register mapping, clock tree, pin controller, audio
//! registry) are traits, so the same lifecycle runs against kernel bindings
//! on the board and against recording mocks on the host.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Lifecycle | [`lifecycle`] | Probe / remove state machine with reverse unwind |
//! | Config | [`configurator`] | Clock-mux read-modify-write, pin function selection |
//! | Tables | [`descriptors`] | DMA bindings, rate and format sets |
//! | Services | [`regs`] / [`clock`] / [`gpio`] / [`platform`] | Collaborator traits |
//! | Board | [`board`] / [`config`] | Revision lookup and probe parameters |
//! | LEDs | [`leds`] | Board LED driver (feature-gated) |
//!
//! ## Quick start
//!
//! ```ignore
//! use s3c2451_i2s::{IisPlatformDriver, ProbeConfig, Soc};
//!
//! let mut soc = Soc::new(ioremap, clk_tree, pinctrl);
//! let mut dev = IisPlatformDriver::dev_probe(&mut soc, &mut asoc, &ProbeConfig::default())?;
//!
//! // ... audio runs ...
//!
//! IisPlatformDriver::dev_remove(&mut dev, &mut soc, &mut asoc)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `mmio` | yes | [`regs::MmioWindow`] volatile register window (requires `volatile`) |
//! | `leds` | yes | Board LED driver (requires `embedded-hal`) |

#![cfg_attr(not(test), no_std)]

pub mod constants;
pub mod error;
pub mod regs;
pub mod clock;
pub mod gpio;
pub mod board;
pub mod config;
pub mod configurator;
pub mod descriptors;
pub mod lifecycle;
pub mod platform;

#[cfg(feature = "leds")]
pub mod leds;

#[cfg(test)]
mod mock;


pub use config::{MuxSource, ProbeConfig};
pub use error::{ProbeError, RemoveError};
pub use lifecycle::{DeviceInstance, DeviceState, Soc};
pub use platform::{DaiRegistry, IisPlatformDriver};
