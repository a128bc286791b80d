use embedded_hal::{digital::OutputPin, spi::SpiBus};
mod constants;
mod details;
mod init;
mod resistance;
mod status;
mod terminals;
mod wiper;
pub use constants::{commands, mnemonics, registers};
use constants::{command_word, mnemonics::ACK_BYTE};
pub use resistance::{ohms_to_wiper, wiper_to_ohms};

use super::SpiSettings;

/// A collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mcp425xError<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (from the chip-select pin).
    Gpo(DO),
    /// Represents a command that the device did not acknowledge.
    ///
    /// The echo shifted back over the SPI bus' MISO did not match the expected
    /// pattern. A missing device, bus noise, and an invalid command are
    /// indistinguishable from each other.
    CommandError,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<SPI, DO> defmt::Format for Mcp425xError<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mcp425xError::Spi(_) => defmt::write!(fmt, "SPI error"),
            Mcp425xError::Gpo(_) => defmt::write!(fmt, "chip-select error"),
            Mcp425xError::CommandError => defmt::write!(fmt, "command not acknowledged"),
        }
    }
}

/// This struct implements the [`Pot*` traits](mod@crate::pot::prelude)
/// for the MCP4251/MCP4252 dual digital potentiometer.
///
/// Unlike drivers built on a [`SpiDevice`](embedded_hal::spi::SpiDevice),
/// this driver owns the chip-select pin and asserts it around every command.
/// Since the `spi` bus is owned (or exclusively borrowed) by this object,
/// commands to different devices on the same bus can never interleave.
pub struct Mcp425x<SPI, DO> {
    _spi: SPI,
    _cs_pin: DO,
    _settings: SpiSettings,
    _resistance: u32,
    _buf: [u8; 2],
}

impl<SPI, DO> Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    /// Instantiate an [`Mcp425x`] object for use on the specified
    /// `spi` bus with the given `cs_pin`.
    ///
    /// The `resistance` is the nominal end-to-end resistance (in ohms)
    /// of the part, for example `10_000` for a MCP4251-103.
    ///
    /// The bus is assumed to use [`SpiSettings::default()`].
    pub fn new(cs_pin: DO, spi: SPI, resistance: u32) -> Mcp425x<SPI, DO> {
        Self::with_settings(cs_pin, spi, resistance, SpiSettings::default())
    }

    /// Same as [`Mcp425x::new()`], but the bus uses custom `settings`.
    pub fn with_settings(
        cs_pin: DO,
        spi: SPI,
        resistance: u32,
        settings: SpiSettings,
    ) -> Mcp425x<SPI, DO> {
        Mcp425x {
            _spi: spi,
            _cs_pin: cs_pin,
            _settings: settings,
            _resistance: resistance,
            _buf: [0u8; 2],
        }
    }

    /// The bus timing this object was created with.
    pub const fn settings(&self) -> &SpiSettings {
        &self._settings
    }

    /// Destroy this object and give back the chip-select pin and the bus.
    pub fn free(self) -> (DO, SPI) {
        (self._cs_pin, self._spi)
    }

    /// Run `transfer` with the chip-select pin asserted.
    ///
    /// The bus is flushed and the chip-select pin is de-asserted even if `transfer`
    /// fails. A bus error takes precedence over a pin error.
    fn spi_frame<T, F>(&mut self, transfer: F) -> Result<T, Mcp425xError<SPI::Error, DO::Error>>
    where
        F: FnOnce(&mut SPI, &mut [u8; 2]) -> Result<T, SPI::Error>,
    {
        self._cs_pin.set_low().map_err(Mcp425xError::Gpo)?;
        let result = transfer(&mut self._spi, &mut self._buf);
        let flushed = self._spi.flush();
        let released = self._cs_pin.set_high();
        let value = result.map_err(Mcp425xError::Spi)?;
        flushed.map_err(Mcp425xError::Spi)?;
        released.map_err(Mcp425xError::Gpo)?;
        Ok(value)
    }

    /// Clock out the same 8 bit `command` `count` times in a single chip-select window.
    ///
    /// Every echo is checked, but only after all repetitions were sent.
    fn spi_repeat(
        &mut self,
        command: u8,
        count: u16,
    ) -> Result<(), Mcp425xError<SPI::Error, DO::Error>> {
        if count == 0 {
            return Ok(());
        }
        let acknowledged = self.spi_frame(|spi, buf| {
            let mut acknowledged = true;
            for _ in 0..count {
                buf[0] = command;
                spi.transfer_in_place(&mut buf[..1])?;
                acknowledged &= buf[0] == ACK_BYTE;
            }
            Ok(acknowledged)
        })?;
        if acknowledged {
            Ok(())
        } else {
            Err(Mcp425xError::CommandError)
        }
    }

    /// Exchange a 16 bit `word` and return the echo.
    fn spi_transfer16(&mut self, word: u16) -> Result<u16, Mcp425xError<SPI::Error, DO::Error>> {
        let bit_order = self._settings.bit_order();
        self.spi_frame(|spi, buf| {
            *buf = bit_order.word_to_bytes(word);
            spi.transfer_in_place(buf)?;
            Ok(bit_order.word_from_bytes(*buf))
        })
    }

    /// Read the 9 bit value stored at `address`.
    fn spi_read(&mut self, address: u8) -> Result<u16, Mcp425xError<SPI::Error, DO::Error>> {
        let echo = self.spi_transfer16(command_word(address, commands::READ, 0))?;
        if echo < mnemonics::ACK_READ {
            return Err(Mcp425xError::CommandError);
        }
        Ok(echo - mnemonics::ACK_READ)
    }

    /// Write `data` to `address`. Bits of `data` beyond the 10 bit data field are ignored.
    fn spi_write(
        &mut self,
        address: u8,
        data: u16,
    ) -> Result<(), Mcp425xError<SPI::Error, DO::Error>> {
        let echo = self.spi_transfer16(command_word(address, commands::WRITE, data))?;
        if echo < mnemonics::ACK_WORD {
            return Err(Mcp425xError::CommandError);
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Mcp425x, Mcp425xError};
    use crate::{
        pot::{prelude::PotWiper, SpiSettings},
        spi_test_expects,
        test::{cs_frames, mk_pot, NOMINAL_RESISTANCE},
        BitOrder, Channel,
    };
    use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};
    use embedded_hal_mock::eh1::{
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
        MockError,
    };
    use std::{io::ErrorKind as IoErrorKind, vec};

    /// A bus that fails every transfer.
    struct FaultyBus;

    impl ErrorType for FaultyBus {
        type Error = ErrorKind;
    }

    impl SpiBus for FaultyBus {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn cs_released_on_bus_error() {
        let cs_expectations = cs_frames(1);
        let mut cs_pin = PinMock::new(&cs_expectations);
        let mut pot = Mcp425x::new(cs_pin.clone(), FaultyBus, NOMINAL_RESISTANCE);
        assert_eq!(
            pot.set_wiper(Channel::A, 0x80),
            Err(Mcp425xError::Spi(ErrorKind::Other))
        );
        cs_pin.done();
    }

    #[test]
    fn cs_error_is_reported() {
        let cs_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High)
                .with_error(MockError::Io(IoErrorKind::NotConnected)),
        ];
        let spi_expectations = spi_test_expects![
            (vec![0u8, 0x80], vec![0xFFu8, 0xFF]),
        ];
        let mocks = mk_pot(&cs_expectations, &spi_expectations);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            pot.set_wiper(Channel::A, 0x80),
            Err(Mcp425xError::Gpo(MockError::Io(IoErrorKind::NotConnected)))
        );
        spi.done();
        cs_pin.done();
    }

    #[test]
    fn lsb_first_frames() {
        let cs_expectations = cs_frames(2);
        let spi_expectations = spi_test_expects![
            // write word 0x1080, low byte first
            (vec![0x80u8, 0x10], vec![0xFFu8, 0xFF]),
            // read word 0x1C00, low byte first; echo is 0xFE80
            (vec![0u8, 0x1C], vec![0x80u8, 0xFE]),
        ];
        let spi = SpiMock::new(&spi_expectations);
        let cs_pin = PinMock::new(&cs_expectations);
        let settings = SpiSettings::default().with_bit_order(BitOrder::LsbFirst);
        let mut pot = Mcp425x::with_settings(
            cs_pin.clone(),
            spi.clone(),
            NOMINAL_RESISTANCE,
            settings,
        );
        assert_eq!(pot.settings().bit_order(), BitOrder::LsbFirst);
        pot.set_wiper(Channel::B, 0x80).unwrap();
        assert_eq!(pot.get_wiper(Channel::B).unwrap(), 0x80);
        let (mut cs_pin, mut spi) = pot.free();
        spi.done();
        cs_pin.done();
    }
}
