use super::{mnemonics::MAX_WIPER, Mcp425x, Mcp425xError};
use crate::{
    pot::prelude::{PotResistance, PotWiper},
    Channel,
};
use embedded_hal::{digital::OutputPin, spi::SpiBus};

/// Convert a wiper `position` into the resistance (in ohms) between the wiper and
/// terminal B of a part rated for `nominal` ohms.
///
/// The `position` is clamped to full scale (256).
pub const fn wiper_to_ohms(position: u16, nominal: u32) -> u32 {
    let position = if position > MAX_WIPER {
        MAX_WIPER
    } else {
        position
    };
    (position as u64 * nominal as u64 / MAX_WIPER as u64) as u32
}

/// Convert a `resistance` (in ohms) into the nearest wiper position that does not
/// exceed it, for a part rated for `nominal` ohms.
///
/// The `resistance` is clamped to `nominal`.
pub const fn ohms_to_wiper(resistance: u32, nominal: u32) -> u16 {
    if nominal == 0 {
        return 0;
    }
    let resistance = if resistance > nominal {
        nominal
    } else {
        resistance
    };
    (resistance as u64 * MAX_WIPER as u64 / nominal as u64) as u16
}

impl<SPI, DO> PotResistance for Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    type ResistanceErrorType = Mcp425xError<SPI::Error, DO::Error>;

    fn nominal_resistance(&self) -> u32 {
        self._resistance
    }

    fn get_resistance(&mut self, channel: Channel) -> Result<u32, Self::ResistanceErrorType> {
        let position = self.get_wiper(channel)?;
        Ok(wiper_to_ohms(position, self._resistance))
    }

    fn set_resistance(
        &mut self,
        channel: Channel,
        resistance: u32,
    ) -> Result<(), Self::ResistanceErrorType> {
        self.set_wiper(channel, ohms_to_wiper(resistance, self._resistance))
    }
}
