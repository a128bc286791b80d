use embedded_hal::{digital::OutputPin, spi::SpiBus};

use crate::{
    pot::{prelude::PotStatus, Mcp425x, Mcp425xError},
    types::StatusRegister,
};

use super::registers;

impl<SPI, DO> PotStatus for Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    type StatusErrorType = Mcp425xError<SPI::Error, DO::Error>;

    fn get_status(&mut self) -> Result<bool, Self::StatusErrorType> {
        Ok(self.get_status_register()?.shutdown())
    }

    fn get_status_register(&mut self) -> Result<StatusRegister, Self::StatusErrorType> {
        let status = self.spi_read(registers::STATUS)?;
        Ok(StatusRegister::from_bits(status))
    }
}
