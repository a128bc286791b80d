use embedded_hal::spi::{Mode, Phase, Polarity, MODE_0};

use crate::BitOrder;

/// An object to describe the SPI bus timing used to talk to the potentiometer.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`SpiSettings::default`] constructor, then mutate the object accordingly.
/// ```
/// use mcp425x::{pot::SpiSettings, BitOrder};
/// use embedded_hal::spi::MODE_3;
///
/// let settings = SpiSettings::default()
///     .with_frequency(4_000_000)
///     .with_mode(MODE_3);
/// assert_eq!(settings.bit_order(), BitOrder::MsbFirst);
/// ```
///
/// `embedded-hal` does not define a way to reconfigure a bus at runtime.
/// The HAL is expected to build the bus with [`SpiSettings::frequency()`] and
/// [`SpiSettings::mode()`]. The driver itself uses [`SpiSettings::bit_order()`] to
/// decide which byte of a 16 bit command frame goes out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiSettings {
    frequency: u32,
    bit_order: BitOrder,
    mode: Mode,
}

impl Default for SpiSettings {
    /// Instantiate a [`SpiSettings`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`SpiSettings::frequency()`] | `10_000_000` (10 MHz) |
    /// | [`SpiSettings::bit_order()`] | [`BitOrder::MsbFirst`] |
    /// | [`SpiSettings::mode()`] | [`MODE_0`] |
    fn default() -> Self {
        Self {
            frequency: 10_000_000,
            bit_order: BitOrder::MsbFirst,
            mode: MODE_0,
        }
    }
}

impl SpiSettings {
    /// The fastest SCK frequency (in Hz) supported by the MCP4251/MCP4252.
    pub const MAX_FREQUENCY: u32 = 10_000_000;

    /// Returns the value set by [`SpiSettings::with_frequency()`].
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The SCK frequency (in Hz).
    ///
    /// This value is clamped to range [1, [`SpiSettings::MAX_FREQUENCY`]].
    pub fn with_frequency(self, frequency: u32) -> Self {
        Self {
            frequency: frequency.clamp(1, Self::MAX_FREQUENCY),
            ..self
        }
    }

    /// Returns the value set by [`SpiSettings::with_bit_order()`].
    pub const fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// The order in which bits (and bytes of 16 bit frames) are shifted out.
    pub fn with_bit_order(self, bit_order: BitOrder) -> Self {
        Self { bit_order, ..self }
    }

    /// Returns the value set by [`SpiSettings::with_mode()`].
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The clock polarity and phase.
    ///
    /// The device supports [`MODE_0`] and [`MODE_3`](embedded_hal::spi::MODE_3).
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// The SPI mode number (0 - 3) for HALs that configure the bus with it.
    pub const fn mode_number(&self) -> u8 {
        let cpol = match self.mode.polarity {
            Polarity::IdleLow => 0,
            Polarity::IdleHigh => 2,
        };
        let cpha = match self.mode.phase {
            Phase::CaptureOnFirstTransition => 0,
            Phase::CaptureOnSecondTransition => 1,
        };
        cpol | cpha
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for SpiSettings {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SpiSettings {=u32} Hz, {}, mode {=u8}",
            self.frequency,
            self.bit_order,
            self.mode_number()
        )
    }
}
