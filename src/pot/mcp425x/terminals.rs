use super::{registers, Mcp425x, Mcp425xError};
use crate::{pot::prelude::PotTerminals, Channel, TerminalControl};
use embedded_hal::{digital::OutputPin, spi::SpiBus};

impl<SPI, DO> PotTerminals for Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    type TerminalsErrorType = Mcp425xError<SPI::Error, DO::Error>;

    fn get_terminal_control(&mut self) -> Result<TerminalControl, Self::TerminalsErrorType> {
        let tcon = self.spi_read(registers::TCON)?;
        Ok(TerminalControl::from_bits(tcon))
    }

    /// The reserved bit (D8) is always written as 1.
    fn set_terminal_control(
        &mut self,
        tcon: TerminalControl,
    ) -> Result<(), Self::TerminalsErrorType> {
        let value = (tcon.into_bits() | 0x100) & TerminalControl::MASK;
        self.spi_write(registers::TCON, value)
    }

    fn set_shutdown(
        &mut self,
        channel: Channel,
        enable: bool,
    ) -> Result<(), Self::TerminalsErrorType> {
        let tcon = self.get_terminal_control()?;
        self.set_terminal_control(tcon.with_enabled(channel, !enable))
    }

    fn is_shutdown(&mut self, channel: Channel) -> Result<bool, Self::TerminalsErrorType> {
        Ok(!self.get_terminal_control()?.is_enabled(channel))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::PotTerminals;
    use crate::{
        pot::Mcp425xError,
        spi_test_expects,
        test::{cs_frames, mk_pot},
        Channel, TerminalControl,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn get_terminal_control() {
        let spi_expectations = spi_test_expects![
            (vec![0b01001100u8, 0], vec![0xFFu8, 0xF7]),
        ];
        let mocks = mk_pot(&cs_frames(1), &spi_expectations);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        let tcon = pot.get_terminal_control().unwrap();
        assert!(!tcon.is_enabled(Channel::A));
        assert!(tcon.is_enabled(Channel::B));
        assert!(tcon.r0a());
        spi.done();
        cs_pin.done();
    }

    #[test]
    fn set_terminal_control() {
        let spi_expectations = spi_test_expects![
            (vec![0b01000001u8, 0xFF], vec![0xFFu8, 0xFF]),
            (vec![0b01000001u8, 0xEF], vec![0xFFu8, 0xFF]),
            (vec![0b01000001u8, 0xFF], vec![0u8, 0]),
        ];
        let mocks = mk_pot(&cs_frames(3), &spi_expectations);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        pot.set_terminal_control(TerminalControl::default()).unwrap();
        pot.set_terminal_control(TerminalControl::default().with_r1b(false))
            .unwrap();
        assert_eq!(
            pot.set_terminal_control(TerminalControl::default()),
            Err(Mcp425xError::CommandError)
        );
        spi.done();
        cs_pin.done();
    }

    #[test]
    fn shutdown() {
        let spi_expectations = spi_test_expects![
            // set_shutdown(B, true): read, then clear R1HW
            (vec![0b01001100u8, 0], vec![0xFFu8, 0xFF]),
            (vec![0b01000001u8, 0x7F], vec![0xFFu8, 0xFF]),
            // is_shutdown(B)
            (vec![0b01001100u8, 0], vec![0xFFu8, 0x7F]),
            // set_shutdown(B, false): read, then set R1HW
            (vec![0b01001100u8, 0], vec![0xFFu8, 0x7F]),
            (vec![0b01000001u8, 0xFF], vec![0xFFu8, 0xFF]),
            // is_shutdown(A)
            (vec![0b01001100u8, 0], vec![0xFFu8, 0xFF]),
        ];
        let mocks = mk_pot(&cs_frames(6), &spi_expectations);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        pot.set_shutdown(Channel::B, true).unwrap();
        assert!(pot.is_shutdown(Channel::B).unwrap());
        pot.set_shutdown(Channel::B, false).unwrap();
        assert!(!pot.is_shutdown(Channel::A).unwrap());
        spi.done();
        cs_pin.done();
    }

    #[test]
    fn shutdown_aborts_on_failed_read() {
        let spi_expectations = spi_test_expects![
            (vec![0b01001100u8, 0], vec![0u8, 0]),
        ];
        let mocks = mk_pot(&cs_frames(1), &spi_expectations);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            pot.set_shutdown(Channel::A, true),
            Err(Mcp425xError::CommandError)
        );
        spi.done();
        cs_pin.done();
    }
}
