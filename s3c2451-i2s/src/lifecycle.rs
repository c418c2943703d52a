//! Device bring-up and tear-down.
//!
//! [`DeviceInstance::probe`] walks the IIS block from `Unconfigured` to
//! `Ready`, taking one resource per step:
//!
//! | Step | Action | State reached |
//! |------|--------|---------------|
//! | 1 | map the register window | `RegistersMapped` |
//! | 2 | take the interface clock | `ClockAcquired` |
//! | 3 | reparent to the reference clock, enable | `ClockRouted` |
//! | 4 | select the clock mux in IISMOD | `ClockRouted` |
//! | 5 | hand the pins to the controller | `PinsConfigured` |
//! | 6 | publish the DMA descriptors | `PinsConfigured` |
//! | 7 | register with the audio registry | `Ready` |
//!
//! When a step fails, everything taken by the earlier steps is given back in
//! reverse order before the error is returned, and the instance ends up
//! `Failed` holding nothing. [`DeviceInstance::remove`] undoes a ready
//! instance: disable clock, put clock, unmap registers.

use log::{debug, error, info, warn};

use crate::clock::ClockProvider;
use crate::config::ProbeConfig;
use crate::configurator::{select_clock_mux, set_pin_function};
use crate::descriptors::{DaiDriver, Direction, DmaBinding, StreamCaps, IIS_DAI, IIS_DMA};
use crate::error::{ProbeError, RemoveError};
use crate::gpio::{PinControl, PinRange};
use crate::platform::DaiRegistry;
use crate::regs::{iis, RegisterMapper};

/// Where an instance is in its lifecycle.
///
/// Probe only moves forward through the list; remove jumps from `Ready` to
/// `Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DeviceState {
    #[default]
    Unconfigured,
    RegistersMapped,
    ClockAcquired,
    ClockRouted,
    PinsConfigured,
    Ready,
    Removed,
    Failed,
}

/// The SoC services an instance borrows its resources from.
pub struct Soc<M, C, P> {
    pub mapper: M,
    pub clocks: C,
    pub pins: P,
}

impl<M, C, P> Soc<M, C, P> {
    pub fn new(mapper: M, clocks: C, pins: P) -> Self {
        Soc { mapper, clocks, pins }
    }
}

/// One IIS interface and the hardware resources it holds.
pub struct DeviceInstance<M: RegisterMapper, C: ClockProvider> {
    state: DeviceState,
    registers: Option<M::Window>,
    clock: Option<C::Clock>,
    clock_enabled: bool,
    pins: Option<PinRange>,
    dma: Option<&'static DmaBinding>,
}

impl<M: RegisterMapper, C: ClockProvider> DeviceInstance<M, C> {
    /// A fresh, unconfigured instance.
    pub fn new() -> Self {
        DeviceInstance {
            state: DeviceState::Unconfigured,
            registers: None,
            clock: None,
            clock_enabled: false,
            pins: None,
            dma: None,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Mapped register window, while one is held.
    pub fn registers(&self) -> Option<&M::Window> {
        self.registers.as_ref()
    }

    /// Interface clock handle, while one is held.
    pub fn clock(&self) -> Option<&C::Clock> {
        self.clock.as_ref()
    }

    pub fn is_clock_enabled(&self) -> bool {
        self.clock_enabled
    }

    /// DMA descriptors, once published.
    pub fn dma_binding(&self) -> Option<&'static DmaBinding> {
        self.dma
    }

    pub fn dai(&self) -> &'static DaiDriver {
        &IIS_DAI
    }

    /// Capabilities and DMA descriptor for one direction. `None` unless the
    /// instance is ready.
    pub fn stream(&self, dir: Direction) -> Option<StreamCaps> {
        if self.state != DeviceState::Ready {
            return None;
        }
        let dma = self.dma?;
        Some(StreamCaps {
            stream: IIS_DAI.stream(dir),
            dma: dma.for_direction(dir),
        })
    }

    /// Bring the interface up and register it.
    ///
    /// Must be called once, on an `Unconfigured` instance.
    pub fn probe<P, R>(
        &mut self,
        soc: &mut Soc<M, C, P>,
        registry: &mut R,
        config: &ProbeConfig,
    ) -> Result<(), ProbeError>
    where
        P: PinControl,
        R: DaiRegistry,
    {
        if self.state != DeviceState::Unconfigured {
            return Err(ProbeError::InvalidState(self.state));
        }
        debug!("probing IIS at {:#010x}", config.base.as_u32());

        match self.bring_up(soc, registry, config) {
            Ok(()) => {
                self.state = DeviceState::Ready;
                Ok(())
            }
            Err(err) => {
                debug!("probe failed in state {:?}, unwinding", self.state);
                self.unwind(soc);
                self.state = DeviceState::Failed;
                Err(err)
            }
        }
    }

    fn bring_up<P, R>(
        &mut self,
        soc: &mut Soc<M, C, P>,
        registry: &mut R,
        config: &ProbeConfig,
    ) -> Result<(), ProbeError>
    where
        P: PinControl,
        R: DaiRegistry,
    {
        if config.window_size < iis::MIN_WINDOW {
            error!(
                "IIS window of {:#x} bytes doesn't reach IISMOD (need {:#x})",
                config.window_size,
                iis::MIN_WINDOW
            );
            return Err(ProbeError::MapFailed);
        }
        let window = soc
            .mapper
            .map(config.base, config.window_size)
            .map_err(|e| {
                error!("failed to map IIS registers at {:#010x}: {:?}", config.base.as_u32(), e);
                ProbeError::MapFailed
            })?;
        let window = self.registers.insert(window);
        self.state = DeviceState::RegistersMapped;

        let clock = soc.clocks.get(config.clock).map_err(|e| {
            error!("failed to get {} clock: {:?}", config.clock, e);
            ProbeError::ClockUnavailable
        })?;
        let clock = &*self.clock.insert(clock);
        self.state = DeviceState::ClockAcquired;

        route_clock(&mut soc.clocks, clock, config)?;
        self.clock_enabled = true;
        self.state = DeviceState::ClockRouted;
        info!("iis cclk rate {}", soc.clocks.rate(clock));

        let iismod = select_clock_mux(window, config.mux);
        debug!("IISMOD = {:#010x}", iismod);

        set_pin_function(&mut soc.pins, config.pins, config.pin_function).map_err(|e| {
            error!(
                "failed to configure IIS pins {}+{}: {:?}",
                config.pins.start, config.pins.count, e
            );
            ProbeError::PinConfigFailed
        })?;
        self.pins = Some(config.pins);
        self.state = DeviceState::PinsConfigured;

        self.dma = Some(&IIS_DMA);

        registry.register(&IIS_DAI, &IIS_DMA).map_err(|e| {
            error!("failed to register {}: {:?}", IIS_DAI.name, e);
            ProbeError::RegistrationFailed
        })
    }

    /// Give back everything a partial probe took, newest first.
    fn unwind<P: PinControl>(&mut self, soc: &mut Soc<M, C, P>) {
        self.dma = None;
        if let Some(range) = self.pins.take() {
            debug!("releasing pins {}+{}", range.start, range.count);
            soc.pins.release_range(range);
        }
        self.release_clock_and_registers(soc);
    }

    /// Tear down a ready instance.
    ///
    /// The audio registry must already have dropped the interface. Pins keep
    /// their IIS function. Teardown calls can't fail; the instance always ends
    /// up `Removed`.
    pub fn remove<P>(&mut self, soc: &mut Soc<M, C, P>) -> Result<(), RemoveError> {
        if self.state != DeviceState::Ready {
            return Err(RemoveError::NotReady(self.state));
        }
        debug!("removing IIS interface");
        self.dma = None;
        self.pins = None;
        self.release_clock_and_registers(soc);
        self.state = DeviceState::Removed;
        Ok(())
    }

    fn release_clock_and_registers<P>(&mut self, soc: &mut Soc<M, C, P>) {
        if let Some(clock) = self.clock.take() {
            if self.clock_enabled {
                debug!("disabling interface clock");
                soc.clocks.disable(&clock);
                self.clock_enabled = false;
            }
            debug!("putting interface clock");
            soc.clocks.put(clock);
        }
        if let Some(window) = self.registers.take() {
            debug!("unmapping IIS registers");
            soc.mapper.unmap(window);
        }
    }
}

impl<M: RegisterMapper, C: ClockProvider> Default for DeviceInstance<M, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RegisterMapper, C: ClockProvider> Drop for DeviceInstance<M, C> {
    fn drop(&mut self) {
        if self.registers.is_some() || self.clock.is_some() {
            warn!("IIS instance dropped in state {:?} while holding hardware", self.state);
        }
    }
}

/// Reparent `clock` to the reference clock, then enable it.
///
/// The reference handle is only needed for the reparent and is put straight
/// back.
fn route_clock<C: ClockProvider>(
    clocks: &mut C,
    clock: &C::Clock,
    config: &ProbeConfig,
) -> Result<(), ProbeError> {
    let parent = clocks.get(config.parent_clock).map_err(|e| {
        error!("failed to get {} clock: {:?}", config.parent_clock, e);
        ProbeError::ClockRoutingFailed
    })?;
    let routed = clocks.set_parent(clock, &parent);
    clocks.put(parent);
    routed.map_err(|e| {
        error!("failed to reparent {} to {}: {:?}", config.clock, config.parent_clock, e);
        ProbeError::ClockRoutingFailed
    })?;
    clocks.enable(clock).map_err(|e| {
        error!("failed to enable {} clock: {:?}", config.clock, e);
        ProbeError::ClockRoutingFailed
    })
}
