use crate::config::*;
use crate::tlc59711::Tlc59711;
use crate::transport::Transport;

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiBus;

impl<BUS, D, const N: usize> Tlc59711<SpiTransport<BUS>, D, N>
where
    BUS: SpiBus,
    D: DelayNs,
{
    /// Create a new TLC59711 driver on a hardware SPI bus
    /// # Arguments
    /// * `spi` - The SPI bus to use, configured for `SPI_MODE`, MSB first
    /// * `delay` - Delay provider for the post frame settle time
    /// * `chain_length` - The number of daisy chained devices
    ///
    /// # Returns
    /// A new TLC59711 driver
    pub fn new_spi(spi: BUS, delay: D, chain_length: usize) -> Self {
        Self::new(SpiTransport::new(spi), delay, chain_length)
    }
}

/// Hardware SPI transport. The TLC59711 has no chip select, so the bus is
/// used directly rather than through a `SpiDevice`.
pub struct SpiTransport<BUS: SpiBus> {
    bus: BUS,
}

impl<BUS: SpiBus> SpiTransport<BUS> {
    pub fn new(bus: BUS) -> Self {
        Self { bus }
    }

    pub fn into_inner(self) -> BUS {
        self.bus
    }
}

impl<BUS: SpiBus> Transport for SpiTransport<BUS> {
    type Error = BUS::Error;

    const SETTLE_DELAY_US: u32 = SPI_SETTLE_DELAY_US;

    fn init(&mut self) -> Result<(), BUS::Error> {
        self.bus.flush()
    }

    fn transfer(&mut self, byte: u8) {
        let _ = self.bus.write(&[byte]);
    }

    fn transfer_all(&mut self, bytes: &[u8]) {
        let _ = self.bus.write(bytes);
    }

    fn flush(&mut self) {
        let _ = self.bus.flush();
    }
}
