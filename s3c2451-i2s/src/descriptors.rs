//! Static resource tables: DMA bindings and stream capabilities.
//!
//! Everything here is immutable and lives for the whole program. The
//! lifecycle publishes references to these tables; the audio data path reads
//! them to request DMA channels and to negotiate stream parameters.

use bitflags::bitflags;

use crate::constants::{DMA_TRANSFER_SIZE, IIS_CHANNELS, IIS_PHYS_BASE};
use crate::regs::{iis, PhysAddr};

// ── DMA ────────────────────────────────────────────────────────────────────

/// Identifies the owner of a DMA channel request.
#[derive(Debug, PartialEq, Eq)]
pub struct DmaClient {
    pub name: &'static str,
}

/// DMA request lines wired to the IIS controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DmaChannel {
    I2sIn,
    I2sOut,
}

/// How a DMA engine should move samples to or from one IIS FIFO.
#[derive(Debug, PartialEq, Eq)]
pub struct DmaParams {
    pub client: &'static DmaClient,
    pub channel: DmaChannel,
    /// Physical address of the FIFO register.
    pub dma_addr: PhysAddr,
    /// Bytes per transfer.
    pub dma_size: u8,
}

/// The capture and playback DMA descriptors published by a ready device.
#[derive(Debug, PartialEq, Eq)]
pub struct DmaBinding {
    pub capture: &'static DmaParams,
    pub playback: &'static DmaParams,
}

impl DmaBinding {
    pub fn for_direction(&self, dir: Direction) -> &'static DmaParams {
        match dir {
            Direction::Capture => self.capture,
            Direction::Playback => self.playback,
        }
    }
}

pub static DMA_CLIENT_OUT: DmaClient = DmaClient {
    name: "I2S PCM Stereo out",
};

pub static DMA_CLIENT_IN: DmaClient = DmaClient {
    name: "I2S PCM Stereo in",
};

pub static PCM_STEREO_OUT: DmaParams = DmaParams {
    client: &DMA_CLIENT_OUT,
    channel: DmaChannel::I2sOut,
    dma_addr: PhysAddr(IIS_PHYS_BASE + iis::IISTXD as u32),
    dma_size: DMA_TRANSFER_SIZE,
};

pub static PCM_STEREO_IN: DmaParams = DmaParams {
    client: &DMA_CLIENT_IN,
    channel: DmaChannel::I2sIn,
    dma_addr: PhysAddr(IIS_PHYS_BASE + iis::IISRXD as u32),
    dma_size: DMA_TRANSFER_SIZE,
};

pub static IIS_DMA: DmaBinding = DmaBinding {
    capture: &PCM_STEREO_IN,
    playback: &PCM_STEREO_OUT,
};

// ── PCM capabilities ───────────────────────────────────────────────────────

bitflags! {
    /// Sample-rate set, one bit per discrete rate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PcmRates: u32 {
        const RATE_5512   = 1 << 0;
        const RATE_8000   = 1 << 1;
        const RATE_11025  = 1 << 2;
        const RATE_16000  = 1 << 3;
        const RATE_22050  = 1 << 4;
        const RATE_32000  = 1 << 5;
        const RATE_44100  = 1 << 6;
        const RATE_48000  = 1 << 7;
        const RATE_64000  = 1 << 8;
        const RATE_88200  = 1 << 9;
        const RATE_96000  = 1 << 10;
        const RATE_176400 = 1 << 11;
        const RATE_192000 = 1 << 12;
    }
}

const RATE_TABLE: [(PcmRates, u32); 13] = [
    (PcmRates::RATE_5512, 5512),
    (PcmRates::RATE_8000, 8000),
    (PcmRates::RATE_11025, 11025),
    (PcmRates::RATE_16000, 16000),
    (PcmRates::RATE_22050, 22050),
    (PcmRates::RATE_32000, 32000),
    (PcmRates::RATE_44100, 44100),
    (PcmRates::RATE_48000, 48000),
    (PcmRates::RATE_64000, 64000),
    (PcmRates::RATE_88200, 88200),
    (PcmRates::RATE_96000, 96000),
    (PcmRates::RATE_176400, 176400),
    (PcmRates::RATE_192000, 192000),
];

impl PcmRates {
    /// Flag for an exact rate, if it is one of the discrete rates.
    pub fn from_hz(hz: u32) -> Option<Self> {
        RATE_TABLE
            .iter()
            .find(|(_, rate)| *rate == hz)
            .map(|(flag, _)| *flag)
    }

    /// Rates in the set, ascending, in hertz.
    pub fn iter_hz(self) -> impl Iterator<Item = u32> {
        RATE_TABLE
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, hz)| hz)
    }
}

bitflags! {
    /// Sample-format set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PcmFormats: u64 {
        const S8     = 1 << 0;
        const U8     = 1 << 1;
        const S16_LE = 1 << 2;
        const S16_BE = 1 << 3;
        const U16_LE = 1 << 4;
        const U16_BE = 1 << 5;
        const S24_LE = 1 << 6;
        const S24_BE = 1 << 7;
    }
}

/// Stream direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Capture,
    Playback,
}

/// What one direction of the interface accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmStream {
    pub channels_min: u8,
    pub channels_max: u8,
    pub rates: PcmRates,
    pub formats: PcmFormats,
}

impl PcmStream {
    /// Check a hardware-parameter request against this stream.
    ///
    /// `format` must name exactly one format.
    pub fn supports(&self, rate_hz: u32, format: PcmFormats, channels: u8) -> bool {
        let rate_ok = PcmRates::from_hz(rate_hz).is_some_and(|r| self.rates.contains(r));
        let format_ok = format.bits().count_ones() == 1 && self.formats.contains(format);
        let channels_ok = (self.channels_min..=self.channels_max).contains(&channels);
        rate_ok && format_ok && channels_ok
    }
}

/// Digital audio interface description handed to the audio registry.
#[derive(Debug, PartialEq, Eq)]
pub struct DaiDriver {
    pub name: &'static str,
    pub playback: PcmStream,
    pub capture: PcmStream,
}

impl DaiDriver {
    pub fn stream(&self, dir: Direction) -> &PcmStream {
        match dir {
            Direction::Capture => &self.capture,
            Direction::Playback => &self.playback,
        }
    }
}

/// Rates supported in both directions: 8 kHz to 96 kHz.
pub const IIS_RATES: PcmRates = PcmRates::RATE_8000
    .union(PcmRates::RATE_11025)
    .union(PcmRates::RATE_16000)
    .union(PcmRates::RATE_22050)
    .union(PcmRates::RATE_32000)
    .union(PcmRates::RATE_44100)
    .union(PcmRates::RATE_48000)
    .union(PcmRates::RATE_88200)
    .union(PcmRates::RATE_96000);

/// Formats supported in both directions.
pub const IIS_FORMATS: PcmFormats = PcmFormats::S8
    .union(PcmFormats::S16_LE)
    .union(PcmFormats::S24_LE);

const IIS_STREAM: PcmStream = PcmStream {
    channels_min: IIS_CHANNELS,
    channels_max: IIS_CHANNELS,
    rates: IIS_RATES,
    formats: IIS_FORMATS,
};

pub static IIS_DAI: DaiDriver = DaiDriver {
    name: "s3c2451-i2s",
    playback: IIS_STREAM,
    capture: IIS_STREAM,
};

/// Negotiation view of one direction of a ready device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamCaps {
    pub stream: &'static PcmStream,
    pub dma: &'static DmaParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_addresses_sit_in_the_iis_window() {
        assert_eq!(PCM_STEREO_OUT.dma_addr, PhysAddr(0x5500_0010));
        assert_eq!(PCM_STEREO_IN.dma_addr, PhysAddr(0x5500_0014));
        assert_eq!(PCM_STEREO_OUT.dma_size, 4);
        assert_eq!(PCM_STEREO_IN.dma_size, 4);
    }

    #[test]
    fn binding_pairs_clients_with_channels() {
        let out = IIS_DMA.for_direction(Direction::Playback);
        let inp = IIS_DMA.for_direction(Direction::Capture);
        assert_eq!(out.channel, DmaChannel::I2sOut);
        assert_eq!(out.client.name, "I2S PCM Stereo out");
        assert_eq!(inp.channel, DmaChannel::I2sIn);
        assert_eq!(inp.client.name, "I2S PCM Stereo in");
    }

    #[test]
    fn rate_set_is_nine_rates_8k_to_96k() {
        let rates: Vec<u32> = IIS_RATES.iter_hz().collect();
        assert_eq!(
            rates,
            [8000, 11025, 16000, 22050, 32000, 44100, 48000, 88200, 96000]
        );
    }

    #[test]
    fn format_set() {
        assert_eq!(IIS_FORMATS, PcmFormats::S8 | PcmFormats::S16_LE | PcmFormats::S24_LE);
        assert!(!IIS_FORMATS.contains(PcmFormats::U8));
    }

    #[test]
    fn directions_are_symmetric() {
        assert_eq!(IIS_DAI.stream(Direction::Capture), IIS_DAI.stream(Direction::Playback));
        assert_eq!(IIS_DAI.capture.channels_min, 2);
        assert_eq!(IIS_DAI.capture.channels_max, 2);
    }

    #[test]
    fn supports_checks_all_three_parameters() {
        let s = &IIS_DAI.playback;
        assert!(s.supports(44100, PcmFormats::S16_LE, 2));
        assert!(s.supports(96000, PcmFormats::S24_LE, 2));
        assert!(!s.supports(192000, PcmFormats::S16_LE, 2));
        assert!(!s.supports(44000, PcmFormats::S16_LE, 2));
        assert!(!s.supports(48000, PcmFormats::U16_LE, 2));
        assert!(!s.supports(48000, PcmFormats::S16_LE, 1));
        // a format set is not a single format
        assert!(!s.supports(48000, PcmFormats::S8 | PcmFormats::S16_LE, 2));
    }

    #[test]
    fn from_hz_round_trips_table() {
        assert_eq!(PcmRates::from_hz(11025), Some(PcmRates::RATE_11025));
        assert_eq!(PcmRates::from_hz(12345), None);
    }
}
