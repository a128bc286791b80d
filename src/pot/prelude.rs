//! This module defines the generic traits that may
//! need to imported to use potentiometer implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use mcp425x::pot::prelude::*;
//! ```

use crate::types::{Channel, StatusRegister, TerminalControl};

/// A trait to represent activation of a digital potentiometer.
pub trait PotInit {
    type InitErrorType;

    /// De-assert the chip-select pin so the device is idle.
    ///
    /// This must be called once before using any other function.
    fn begin(&mut self) -> Result<(), Self::InitErrorType>;
}

/// A trait to represent manipulation of a potentiometer's wiper position.
///
/// Wiper positions range from 0 (wiper at terminal B)
/// to 256 (`0x100`, wiper at terminal A).
pub trait PotWiper {
    type WiperErrorType;

    /// Move the wiper of the given `channel` one step toward terminal A.
    ///
    /// The device ignores increments beyond full scale.
    fn increment_wiper(&mut self, channel: Channel) -> Result<(), Self::WiperErrorType>;

    /// Move the wiper of the given `channel` `steps` times toward terminal A.
    ///
    /// All steps are sent back-to-back in a single bus transaction.
    /// If any one of the steps is not acknowledged, the whole call fails without
    /// indicating which step(s) failed. A `steps` value of 0 does nothing.
    fn increment_wiper_by(
        &mut self,
        channel: Channel,
        steps: u16,
    ) -> Result<(), Self::WiperErrorType>;

    /// Move the wiper of the given `channel` one step toward terminal B.
    ///
    /// The device ignores decrements below zero scale.
    fn decrement_wiper(&mut self, channel: Channel) -> Result<(), Self::WiperErrorType>;

    /// Move the wiper of the given `channel` `steps` times toward terminal B.
    ///
    /// See [`PotWiper::increment_wiper_by()`] about how failures are reported.
    fn decrement_wiper_by(
        &mut self,
        channel: Channel,
        steps: u16,
    ) -> Result<(), Self::WiperErrorType>;

    /// Get the wiper position of the given `channel`.
    fn get_wiper(&mut self, channel: Channel) -> Result<u16, Self::WiperErrorType>;

    /// Set the wiper position of the given `channel`.
    ///
    /// The specified `position` is clamped to the range [0, 256].
    fn set_wiper(&mut self, channel: Channel, position: u16) -> Result<(), Self::WiperErrorType>;
}

/// A trait to represent the wiper position as a resistance (in ohms).
///
/// The resistance is measured between the wiper and terminal B and excludes the
/// wiper's own resistance.
pub trait PotResistance: PotWiper {
    type ResistanceErrorType;

    /// The nominal end-to-end resistance (in ohms) of the part.
    fn nominal_resistance(&self) -> u32;

    /// Get the resistance of the given `channel`.
    fn get_resistance(&mut self, channel: Channel) -> Result<u32, Self::ResistanceErrorType>;

    /// Set the resistance of the given `channel`.
    ///
    /// The specified `resistance` is clamped to the range
    /// [0, [`PotResistance::nominal_resistance()`]] and rounded down to the
    /// nearest wiper position.
    fn set_resistance(
        &mut self,
        channel: Channel,
        resistance: u32,
    ) -> Result<(), Self::ResistanceErrorType>;
}

/// A trait to represent reading the device's [`StatusRegister`].
pub trait PotStatus {
    type StatusErrorType;

    /// Is the device forced into shutdown by its SHDN pin?
    fn get_status(&mut self) -> Result<bool, Self::StatusErrorType>;

    /// Get all flags of the device's [`StatusRegister`].
    fn get_status_register(&mut self) -> Result<StatusRegister, Self::StatusErrorType>;
}

/// A trait to represent manipulation of the terminal connections.
pub trait PotTerminals {
    type TerminalsErrorType;

    /// Get the [`TerminalControl`] register.
    fn get_terminal_control(&mut self) -> Result<TerminalControl, Self::TerminalsErrorType>;

    /// Set the [`TerminalControl`] register.
    fn set_terminal_control(&mut self, tcon: TerminalControl)
        -> Result<(), Self::TerminalsErrorType>;

    /// Put the given `channel` in (`true`) or out of (`false`) its shutdown configuration.
    ///
    /// In shutdown, terminal A is disconnected and the wiper is connected to terminal B.
    /// The wiper position is retained.
    fn set_shutdown(&mut self, channel: Channel, enable: bool)
        -> Result<(), Self::TerminalsErrorType>;

    /// Is the given `channel` in its (software) shutdown configuration?
    fn is_shutdown(&mut self, channel: Channel) -> Result<bool, Self::TerminalsErrorType>;
}

/// A trait to represent debug output
pub trait PotDetails {
    type DetailsErrorType;

    /// Print details about the device's current state.
    ///
    /// This requires the `defmt` feature (on bare-metal targets) or the `std` feature.
    /// Otherwise, this function does nothing.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
