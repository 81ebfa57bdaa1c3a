//! Driver for the TLC59711 12-channel, 16-bit PWM LED driver.
//!
//! Any number of devices can be daisy chained; all of them are updated by a
//! single `write()`. The data can be clocked out either by bit-banging two
//! GPIOs or through a hardware SPI bus.
//!
//! ```rust,ignore
//! let mut leds = Tlc59711::<_, _, 2>::new_spi(spi, delay, 2);
//! leds.begin()?;
//! leds.set_led(0, 0xffff, 0x0000, 0x8000);
//! leds.set_uniform_brightness(64);
//! leds.write();
//! ```
#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod bitbang;
pub mod config;
pub mod frame;
pub mod spi;
pub mod state;
pub mod tlc59711;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use bitbang::{BitBangTransport, PinError};
pub use spi::SpiTransport;
pub use state::Brightness;
pub use tlc59711::Tlc59711;
pub use transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tlc59711Error {
    AllocationFailure,
    TransportInitFailure,
    IndexOutOfRange,
}

impl core::fmt::Display for Tlc59711Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Tlc59711Error::AllocationFailure => {
                f.write_str("channel buffer could not be allocated")
            }
            Tlc59711Error::TransportInitFailure => {
                f.write_str("transport failed to initialize")
            }
            Tlc59711Error::IndexOutOfRange => {
                f.write_str("channel index out of range")
            }
        }
    }
}
