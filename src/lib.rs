#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Mcp425x::new()`](fn@crate::pot::Mcp425x::new)
//! - [`Mcp425x::begin()`](pot/struct.Mcp425x.html#method.begin)
//! - [`Mcp425x::set_wiper()`](pot/struct.Mcp425x.html#method.set_wiper)
//! - [`Mcp425x::get_wiper()`](pot/struct.Mcp425x.html#method.get_wiper)
//! - [`Mcp425x::increment_wiper()`](pot/struct.Mcp425x.html#method.increment_wiper)
//! - [`Mcp425x::decrement_wiper()`](pot/struct.Mcp425x.html#method.decrement_wiper)
//! - [`Mcp425x::set_resistance()`](pot/struct.Mcp425x.html#method.set_resistance)
//! - [`Mcp425x::get_resistance()`](pot/struct.Mcp425x.html#method.get_resistance)
//! - [`Mcp425x::get_status()`](pot/struct.Mcp425x.html#method.get_status)
//!
//! ## Advanced API
//!
//! - [`Mcp425x::with_settings()`](fn@crate::pot::Mcp425x::with_settings)
//! - [`Mcp425x::increment_wiper_by()`](pot/struct.Mcp425x.html#method.increment_wiper_by)
//! - [`Mcp425x::decrement_wiper_by()`](pot/struct.Mcp425x.html#method.decrement_wiper_by)
//! - [`Mcp425x::get_status_register()`](pot/struct.Mcp425x.html#method.get_status_register)
//! - [`Mcp425x::get_terminal_control()`](pot/struct.Mcp425x.html#method.get_terminal_control)
//! - [`Mcp425x::set_terminal_control()`](pot/struct.Mcp425x.html#method.set_terminal_control)
//! - [`Mcp425x::set_shutdown()`](pot/struct.Mcp425x.html#method.set_shutdown)
//! - [`Mcp425x::is_shutdown()`](pot/struct.Mcp425x.html#method.is_shutdown)
//! - [`Mcp425x::print_details()`](pot/struct.Mcp425x.html#method.print_details)
//!
#![no_std]

mod types;
pub use types::{BitOrder, Channel, StatusRegister, TerminalControl};
pub mod pot;
