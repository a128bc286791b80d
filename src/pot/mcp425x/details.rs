use super::{Mcp425x, Mcp425xError};
use crate::pot::prelude::PotDetails;
use embedded_hal::{digital::OutputPin, spi::SpiBus};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::{
    pot::prelude::{PotResistance, PotStatus, PotTerminals, PotWiper},
    Channel,
};

#[cfg(all(feature = "std", not(target_os = "none")))]
extern crate std;

impl<SPI, DO> PotDetails for Mcp425x<SPI, DO>
where
    SPI: SpiBus,
    DO: OutputPin,
{
    type DetailsErrorType = Mcp425xError<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        defmt::println!("SPI settings______________{}", self._settings);
        defmt::println!(
            "Nominal resistance________{=u32} ohms",
            self.nominal_resistance()
        );
        for channel in [Channel::A, Channel::B] {
            let position = self.get_wiper(channel)?;
            defmt::println!(
                "Channel {} wiper__________{=u16} ~ {=u32} ohms",
                channel,
                position,
                super::wiper_to_ohms(position, self._resistance)
            );
        }
        let tcon = self.get_terminal_control()?;
        defmt::println!(
            "Channel A shutdown________{=bool}",
            !tcon.is_enabled(Channel::A)
        );
        defmt::println!(
            "Channel B shutdown________{=bool}",
            !tcon.is_enabled(Channel::B)
        );
        defmt::println!("Terminals_________________{}", tcon);
        defmt::println!("SHDN pin asserted_________{=bool}", self.get_status()?);
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let settings = self._settings;
        std::println!(
            "SPI settings______________{} Hz, {}, mode {}",
            settings.frequency(),
            settings.bit_order(),
            settings.mode_number()
        );
        std::println!(
            "Nominal resistance________{} ohms",
            self.nominal_resistance()
        );
        for channel in [Channel::A, Channel::B] {
            let position = self.get_wiper(channel)?;
            std::println!(
                "Channel {channel} wiper__________{position} ~ {} ohms",
                super::wiper_to_ohms(position, self._resistance)
            );
        }
        let tcon = self.get_terminal_control()?;
        std::println!(
            "Channel A shutdown________{}",
            !tcon.is_enabled(Channel::A)
        );
        std::println!(
            "Channel B shutdown________{}",
            !tcon.is_enabled(Channel::B)
        );
        std::println!("Terminals_________________{tcon}");
        std::println!("SHDN pin asserted_________{}", self.get_status()?);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::PotDetails;
    use crate::test::mk_pot;

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    #[test]
    fn print_nothing() {
        let mocks = mk_pot(&[], &[]);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(pot.print_details().is_ok());
        spi.done();
        cs_pin.done();
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    #[test]
    fn print_everything() {
        extern crate std;
        use crate::{spi_test_expects, test::cs_frames};
        use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
        use std::vec;

        let spi_expectations = spi_test_expects![
            (vec![0x0Cu8, 0], vec![0xFEu8, 0x80]),
            (vec![0x1Cu8, 0], vec![0xFFu8, 0x00]),
            (vec![0x4Cu8, 0], vec![0xFFu8, 0xF7]),
            (vec![0x5Cu8, 0], vec![0xFFu8, 0xE0]),
        ];
        let mocks = mk_pot(&cs_frames(4), &spi_expectations);
        let (mut pot, mut spi, mut cs_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(pot.print_details().is_ok());
        spi.done();
        cs_pin.done();
    }
}
