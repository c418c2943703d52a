//! Platform-driver glue.
//!
//! The platform bus matches [`IisPlatformDriver::NAME`], calls
//! [`dev_probe`](IisPlatformDriver::dev_probe) once per discovered device and
//! [`dev_remove`](IisPlatformDriver::dev_remove) at most once on a device that
//! probed successfully. The bus never runs two of these calls for the same
//! device at once.

use core::fmt::Debug;

use log::debug;

use crate::clock::ClockProvider;
use crate::config::ProbeConfig;
use crate::descriptors::{DaiDriver, DmaBinding};
use crate::error::{ProbeError, RemoveError};
use crate::gpio::PinControl;
use crate::lifecycle::{DeviceInstance, DeviceState, Soc};
use crate::regs::RegisterMapper;

/// The sound subsystem's table of digital audio interfaces.
pub trait DaiRegistry {
    /// Error reported when an interface can't be added.
    type Error: Debug;

    /// Make `dai` visible to the audio negotiation path.
    fn register(
        &mut self,
        dai: &'static DaiDriver,
        dma: &'static DmaBinding,
    ) -> Result<(), Self::Error>;

    /// Withdraw the interface called `name`.
    fn unregister(&mut self, name: &str);
}

/// Driver identity and entry points for the IIS block.
pub struct IisPlatformDriver;

impl IisPlatformDriver {
    /// Platform device name matched by the bus.
    pub const NAME: &'static str = "s3c24xx-iis";

    /// Module alias.
    pub const ALIAS: &'static str = "platform:s3c2451-iis";

    pub const DESCRIPTION: &'static str = "S3C2451 I2S SoC Interface";

    /// Probe a newly discovered device. On success the returned instance is
    /// `Ready` and registered.
    pub fn dev_probe<M, C, P, R>(
        soc: &mut Soc<M, C, P>,
        registry: &mut R,
        config: &ProbeConfig,
    ) -> Result<DeviceInstance<M, C>, ProbeError>
    where
        M: RegisterMapper,
        C: ClockProvider,
        P: PinControl,
        R: DaiRegistry,
    {
        let mut instance = DeviceInstance::new();
        instance.probe(soc, registry, config)?;
        Ok(instance)
    }

    /// Withdraw the interface from the registry, then tear it down.
    pub fn dev_remove<M, C, P, R>(
        instance: &mut DeviceInstance<M, C>,
        soc: &mut Soc<M, C, P>,
        registry: &mut R,
    ) -> Result<(), RemoveError>
    where
        M: RegisterMapper,
        C: ClockProvider,
        R: DaiRegistry,
    {
        if instance.state() != DeviceState::Ready {
            return Err(RemoveError::NotReady(instance.state()));
        }
        debug!("unregistering {}", instance.dai().name);
        registry.unregister(instance.dai().name);
        instance.remove(soc)
    }
}
