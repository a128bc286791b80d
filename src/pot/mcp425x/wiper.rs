use super::{commands, constants::command_byte, mnemonics, Mcp425x, Mcp425xError};
use crate::{pot::prelude::PotWiper, Channel};
use embedded_hal::{digital::OutputPin, spi::SpiBus};

impl<SPI, DO> PotWiper for Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    type WiperErrorType = Mcp425xError<SPI::Error, DO::Error>;

    fn increment_wiper(&mut self, channel: Channel) -> Result<(), Self::WiperErrorType> {
        self.increment_wiper_by(channel, 1)
    }

    fn increment_wiper_by(
        &mut self,
        channel: Channel,
        steps: u16,
    ) -> Result<(), Self::WiperErrorType> {
        self.spi_repeat(command_byte(channel.address(), commands::INCREMENT), steps)
    }

    fn decrement_wiper(&mut self, channel: Channel) -> Result<(), Self::WiperErrorType> {
        self.decrement_wiper_by(channel, 1)
    }

    fn decrement_wiper_by(
        &mut self,
        channel: Channel,
        steps: u16,
    ) -> Result<(), Self::WiperErrorType> {
        self.spi_repeat(command_byte(channel.address(), commands::DECREMENT), steps)
    }

    fn get_wiper(&mut self, channel: Channel) -> Result<u16, Self::WiperErrorType> {
        self.spi_read(channel.address())
    }

    fn set_wiper(&mut self, channel: Channel, position: u16) -> Result<(), Self::WiperErrorType> {
        self.spi_write(channel.address(), position.min(mnemonics::MAX_WIPER))
    }
}
