use crate::config::*;
use crate::tlc59711::Tlc59711;
use crate::transport::Transport;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

impl<CLK, DATA, D, const N: usize> Tlc59711<BitBangTransport<CLK, DATA>, D, N>
where
    CLK: OutputPin,
    DATA: OutputPin,
    D: DelayNs,
{
    /// Create a new TLC59711 driver clocking the data out on two GPIOs
    /// # Arguments
    /// * `clock` - The pin wired to SCKI
    /// * `data` - The pin wired to SDTI
    /// * `delay` - Delay provider for the post frame settle time
    /// * `chain_length` - The number of daisy chained devices
    ///
    /// # Returns
    /// A new TLC59711 driver
    pub fn new_bitbang(
        clock: CLK,
        data: DATA,
        delay: D,
        chain_length: usize,
    ) -> Self {
        Self::new(BitBangTransport::new(clock, data), delay, chain_length)
    }
}

/// Pin that failed to initialize
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError<CE, DE> {
    Clock(CE),
    Data(DE),
}

/// Software SPI on two output pins. Data is sampled by the device on the
/// rising clock edge.
pub struct BitBangTransport<CLK: OutputPin, DATA: OutputPin> {
    clock: CLK,
    data: DATA,
}

impl<CLK: OutputPin, DATA: OutputPin> BitBangTransport<CLK, DATA> {
    pub fn new(clock: CLK, data: DATA) -> Self {
        Self { clock, data }
    }

    pub fn into_inner(self) -> (CLK, DATA) {
        (self.clock, self.data)
    }
}

impl<CLK: OutputPin, DATA: OutputPin> Transport
    for BitBangTransport<CLK, DATA>
{
    type Error = PinError<CLK::Error, DATA::Error>;

    const SETTLE_DELAY_US: u32 = BITBANG_SETTLE_DELAY_US;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.clock.set_low().map_err(PinError::Clock)?;
        self.data.set_low().map_err(PinError::Data)?;

        Ok(())
    }

    fn transfer(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            let _ = self.clock.set_low();
            let _ = self
                .data
                .set_state(PinState::from(byte & (1 << bit) != 0));
            let _ = self.clock.set_high();
        }
    }
}
