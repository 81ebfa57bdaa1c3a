/// Byte sink the frames are shifted out through.
///
/// The protocol is write only, so once `init` succeeded nothing a transport
/// does can be reported back: errors inside a transaction are dropped by the
/// implementation.
pub trait Transport {
    type Error;

    /// Time to hold the lines idle after the last byte, before the
    /// transaction is released.
    const SETTLE_DELAY_US: u32;

    fn init(&mut self) -> Result<(), Self::Error>;

    fn begin_transaction(&mut self) {}

    fn transfer(&mut self, byte: u8);

    /// Block until every transferred byte has left the bus.
    fn flush(&mut self) {}

    fn end_transaction(&mut self) {}

    fn transfer_all(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.transfer(*byte);
        }
    }
}

impl<T> Transport for &mut T
where
    T: Transport,
{
    type Error = T::Error;

    const SETTLE_DELAY_US: u32 = T::SETTLE_DELAY_US;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn begin_transaction(&mut self) {
        T::begin_transaction(self)
    }

    fn transfer(&mut self, byte: u8) {
        T::transfer(self, byte)
    }

    fn flush(&mut self) {
        T::flush(self)
    }

    fn end_transaction(&mut self) {
        T::end_transaction(self)
    }

    fn transfer_all(&mut self, bytes: &[u8]) {
        T::transfer_all(self, bytes)
    }
}
