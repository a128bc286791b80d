use super::{Mcp425x, Mcp425xError};
use crate::pot::prelude::PotInit;
use embedded_hal::{digital::OutputPin, spi::SpiBus};

impl<SPI, DO> PotInit for Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    type InitErrorType = Mcp425xError<SPI::Error, DO::Error>;

    /// The `cs_pin` given to [`Mcp425x::new()`] must already be configured as an output.
    /// This only de-asserts it (drives it HIGH).
    fn begin(&mut self) -> Result<(), Self::InitErrorType> {
        self._cs_pin.set_high().map_err(Mcp425xError::Gpo)
    }
}
