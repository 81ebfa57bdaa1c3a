use crate::config::*;
use crate::frame;
use crate::state::{Brightness, State};
use crate::transport::Transport;
use crate::Tlc59711Error;

use embedded_hal::delay::DelayNs;

/// Driver for a chain of TLC59711 devices.
///
/// `N` is the largest chain the driver can hold; the actual chain length is
/// given at construction.
pub struct Tlc59711<T, D, const N: usize = 1> {
    transport: T,
    delay: D,
    state: State<N>,
}

impl<T: Transport, D: DelayNs, const N: usize> Tlc59711<T, D, N> {
    /// Create a new TLC59711 driver
    /// # Arguments
    /// * `transport` - The transport the frames are shifted out through
    /// * `delay` - Delay provider for the post frame settle time
    /// * `chain_length` - The number of daisy chained devices, `1..=N`
    ///
    /// # Returns
    /// A new TLC59711 driver. An invalid `chain_length` is reported by
    /// `begin()`.
    pub fn new(transport: T, delay: D, chain_length: usize) -> Self {
        Self {
            transport,
            delay,
            state: State::new(chain_length),
        }
    }

    /// Initialize the transport
    ///
    /// # Returns
    /// * Ok(()) if the driver is ready to write
    /// * Err(Tlc59711Error::AllocationFailure) if the chain length was 0 or
    ///   larger than `N`
    /// * Err(Tlc59711Error::TransportInitFailure) if the transport could not
    ///   be initialized
    pub fn begin(&mut self) -> Result<(), Tlc59711Error> {
        if !self.state.is_allocated() {
            error!("channel buffer not allocated, chain capacity is {}", N);
            return Err(Tlc59711Error::AllocationFailure);
        }

        self.transport.init().map_err(|_| {
            error!("transport initialization failed");
            Tlc59711Error::TransportInitFailure
        })?;

        debug!("initialized chain of {} devices", self.state.chain_length());
        Ok(())
    }

    /// Send the channel values and brightness to every device in the chain.
    ///
    /// Runs with interrupts disabled: a pause in the clock would latch a
    /// partial frame.
    pub fn write(&mut self) {
        let command = frame::command_word(self.state.brightness);

        let Self {
            transport,
            delay,
            state,
        } = self;

        critical_section::with(|_| {
            transport.begin_transaction();

            for channels in state.channels.iter() {
                transport.transfer_all(&frame::encode(command, channels));
            }

            transport.flush();
            delay.delay_us(T::SETTLE_DELAY_US);
            transport.end_transaction();
        });

        trace!("wrote {} frames", self.state.chain_length());
    }

    /// Encode the frame `write()` sends to a device
    ///
    /// # Arguments
    /// * `device` - The position of the device in the chain
    pub fn encode_frame(
        &self,
        device: usize,
    ) -> Result<[u8; FRAME_SIZE], Tlc59711Error> {
        let channels = self
            .state
            .channels
            .get(device)
            .ok_or(Tlc59711Error::IndexOutOfRange)?;

        Ok(frame::encode(
            frame::command_word(self.state.brightness),
            channels,
        ))
    }

    /// Set the PWM value of a channel. Channel `c` of device `d` is
    /// `d * 12 + c`. Indices outside the chain are ignored.
    pub fn set_channel(&mut self, channel: usize, value: u16) {
        if !self.state.set_channel(channel, value) {
            warn!("ignoring write to channel {}", channel);
        }
    }

    pub fn get_channel(&self, channel: usize) -> Result<u16, Tlc59711Error> {
        self.state.get_channel(channel)
    }

    /// Set the RGB value of a LED, wired to channels `3 * led` to
    /// `3 * led + 2`. Channels outside the chain are ignored.
    pub fn set_led(&mut self, led: usize, r: u16, g: u16, b: u16) {
        if !self.state.set_led(led, r, g, b) {
            warn!("ignoring write to led {}", led);
        }
    }

    pub fn get_led(
        &self,
        led: usize,
    ) -> Result<(u16, u16, u16), Tlc59711Error> {
        self.state.get_led(led)
    }

    /// Set the brightness control of each color. Values above 127 are
    /// clamped to 127.
    pub fn set_brightness(&mut self, bcr: u8, bcg: u8, bcb: u8) {
        self.state.brightness = Brightness::new(bcr, bcg, bcb);
    }

    /// Set the same brightness control for all colors, clamped to 127.
    pub fn set_uniform_brightness(&mut self, bc: u8) {
        self.state.brightness = Brightness::uniform(bc);
    }

    pub fn brightness(&self) -> Brightness {
        self.state.brightness
    }

    /// Zero every channel. Brightness is kept.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn chain_length(&self) -> usize {
        self.state.chain_length()
    }

    pub fn channel_count(&self) -> usize {
        self.state.channel_count()
    }

    pub fn led_count(&self) -> usize {
        self.state.led_count()
    }

    /// Channel values, one block of 12 per device
    pub fn channels(&self) -> &[[u16; CHANNELS_PER_DEVICE]] {
        &self.state.channels
    }

    pub fn inner(&self) -> &T {
        &self.transport
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }
}
