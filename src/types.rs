//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// One of the two independent resistor networks inside the IC package.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// represents potentiometer 0 (terminals P0A, P0W, P0B)
    A,
    /// represents potentiometer 1 (terminals P1A, P1W, P1B)
    B,
}

impl Channel {
    /// The memory address of the channel's volatile wiper register.
    pub(crate) const fn address(self) -> u8 {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Channel::A => defmt::write!(fmt, "A"),
            Channel::B => defmt::write!(fmt, "B"),
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Channel::A => write!(f, "A"),
            Channel::B => write!(f, "B"),
        }
    }
}

/// The order in which bits are shifted out on the SPI bus.
///
/// For 16 bit command frames, this also decides which byte of the
/// frame is transferred first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// represents most significant bit first
    MsbFirst,
    /// represents least significant bit first
    LsbFirst,
}

impl BitOrder {
    pub(crate) const fn word_to_bytes(self, word: u16) -> [u8; 2] {
        match self {
            BitOrder::MsbFirst => word.to_be_bytes(),
            BitOrder::LsbFirst => word.to_le_bytes(),
        }
    }

    pub(crate) const fn word_from_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            BitOrder::MsbFirst => u16::from_be_bytes(bytes),
            BitOrder::LsbFirst => u16::from_le_bytes(bytes),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for BitOrder {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BitOrder::MsbFirst => defmt::write!(fmt, "MSB first"),
            BitOrder::LsbFirst => defmt::write!(fmt, "LSB first"),
        }
    }
}

impl Display for BitOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BitOrder::MsbFirst => write!(f, "MSB first"),
            BitOrder::LsbFirst => write!(f, "LSB first"),
        }
    }
}

/// A struct used to describe the device's STATUS register.
///
/// The MCP4251/MCP4252 only use the `shutdown` flag. The remaining flags
/// describe non-volatile features of the wider MCP42xx family and
/// will read as `false` on volatile parts.
#[bitfield(u16)]
#[derive(PartialEq, Eq)]
pub struct StatusRegister {
    /// A flag to describe if the WP pin is holding EEPROM write protection.
    #[bits(1, access = RO)]
    pub write_protect: bool,

    /// A flag to describe if the SHDN pin is forcing a hardware shutdown.
    #[bits(1, access = RO)]
    pub shutdown: bool,

    /// A flag to describe if the wiper of [`Channel::A`] is locked.
    #[bits(1, access = RO)]
    pub wiper_lock0: bool,

    /// A flag to describe if the wiper of [`Channel::B`] is locked.
    #[bits(1, access = RO)]
    pub wiper_lock1: bool,

    /// A flag to describe if an EEPROM write cycle is in progress.
    #[bits(1, access = RO)]
    pub eeprom_write_active: bool,

    #[bits(11)]
    _reserved: u16,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusRegister {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusRegister shutdown: {}, write_protect: {}",
            self.shutdown(),
            self.write_protect()
        )
    }
}

impl Display for StatusRegister {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusRegister shutdown: {}, write_protect: {}",
            self.shutdown(),
            self.write_protect()
        )
    }
}

/// A struct used to describe the device's terminal control (TCON) register.
///
/// Each channel has 4 bits: the A, W and B bits connect (`true`) or disconnect
/// (`false`) the corresponding terminal from the resistor network, and the HW bit
/// forces the channel into its shutdown configuration when `false`.
///
/// All bits are set at power-on, which is what [`TerminalControl::default`] returns:
/// ```
/// use mcp425x::{Channel, TerminalControl};
///
/// let tcon = TerminalControl::default().with_enabled(Channel::B, false);
/// assert!(tcon.is_enabled(Channel::A));
/// assert!(!tcon.is_enabled(Channel::B));
/// ```
#[bitfield(u16)]
#[derive(PartialEq, Eq)]
pub struct TerminalControl {
    /// Connect terminal B of [`Channel::A`].
    #[bits(1, default = true)]
    pub r0b: bool,

    /// Connect the wiper of [`Channel::A`].
    #[bits(1, default = true)]
    pub r0w: bool,

    /// Connect terminal A of [`Channel::A`].
    #[bits(1, default = true)]
    pub r0a: bool,

    /// Run [`Channel::A`] normally; `false` forces it into shutdown.
    #[bits(1, default = true)]
    pub r0hw: bool,

    /// Connect terminal B of [`Channel::B`].
    #[bits(1, default = true)]
    pub r1b: bool,

    /// Connect the wiper of [`Channel::B`].
    #[bits(1, default = true)]
    pub r1w: bool,

    /// Connect terminal A of [`Channel::B`].
    #[bits(1, default = true)]
    pub r1a: bool,

    /// Run [`Channel::B`] normally; `false` forces it into shutdown.
    #[bits(1, default = true)]
    pub r1hw: bool,

    #[bits(8)]
    _reserved: u16,
}

impl TerminalControl {
    /// A mask to isolate the bits that are written to the TCON register.
    pub(crate) const MASK: u16 = 0x1FF;

    /// Is the given `channel` out of its (software) shutdown configuration?
    pub const fn is_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::A => self.r0hw(),
            Channel::B => self.r1hw(),
        }
    }

    /// Take the given `channel` out of (`true`) or into (`false`) its shutdown configuration.
    pub fn with_enabled(self, channel: Channel, enable: bool) -> Self {
        match channel {
            Channel::A => self.with_r0hw(enable),
            Channel::B => self.with_r1hw(enable),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TerminalControl {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TerminalControl A: {=u16:#b}, B: {=u16:#b}",
            self.into_bits() & 0xF,
            (self.into_bits() >> 4) & 0xF
        )
    }
}

impl Display for TerminalControl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "TerminalControl A: {:#06b}, B: {:#06b}",
            self.into_bits() & 0xF,
            (self.into_bits() >> 4) & 0xF
        )
    }
}
