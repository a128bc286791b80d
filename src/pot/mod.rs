//! A module to encapsulate all things related to potentiometer operation.
pub mod prelude;

mod mcp425x;
pub use mcp425x::{commands, mnemonics, ohms_to_wiper, registers, wiper_to_ohms};
pub use mcp425x::{Mcp425x, Mcp425xError};

mod config;
pub use config::SpiSettings;
