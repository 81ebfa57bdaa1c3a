use crate::config::*;
use crate::Tlc59711Error;

/// Brightness control values shared by every device in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Brightness {
    /// Build brightness values, saturating each one at `MAX_BRIGHTNESS`
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: clamp_brightness(red),
            green: clamp_brightness(green),
            blue: clamp_brightness(blue),
        }
    }

    pub const fn uniform(value: u8) -> Self {
        let value = clamp_brightness(value);
        Self {
            red: value,
            green: value,
            blue: value,
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::uniform(MAX_BRIGHTNESS)
    }
}

const fn clamp_brightness(value: u8) -> u8 {
    if value > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        value
    }
}

/// In-memory mirror of the chain: one block of channel values per device,
/// plus the brightness applied to all of them.
pub struct State<const N: usize> {
    pub channels: heapless::Vec<[u16; CHANNELS_PER_DEVICE], N>,
    pub brightness: Brightness,
}

impl<const N: usize> State<N> {
    /// Allocate `chain_length` zeroed blocks. The buffer is left empty when
    /// `chain_length` is 0 or larger than `N`.
    pub fn new(chain_length: usize) -> Self {
        let mut channels = heapless::Vec::new();

        // Fails, leaving the buffer empty, when chain_length exceeds N
        let _ = channels.resize(chain_length, [0; CHANNELS_PER_DEVICE]);

        Self {
            channels,
            brightness: Brightness::default(),
        }
    }

    pub fn is_allocated(&self) -> bool {
        !self.channels.is_empty()
    }

    pub fn chain_length(&self) -> usize {
        self.channels.len()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len() * CHANNELS_PER_DEVICE
    }

    pub fn led_count(&self) -> usize {
        self.channels.len() * LEDS_PER_DEVICE
    }

    /// Store a channel value. Returns `false` when `index` is outside the
    /// chain and nothing was written.
    pub fn set_channel(&mut self, index: usize, value: u16) -> bool {
        match self.slot_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get_channel(&self, index: usize) -> Result<u16, Tlc59711Error> {
        self.channels
            .get(index / CHANNELS_PER_DEVICE)
            .map(|block| block[index % CHANNELS_PER_DEVICE])
            .ok_or(Tlc59711Error::IndexOutOfRange)
    }

    pub fn set_led(&mut self, led: usize, r: u16, g: u16, b: u16) -> bool {
        let base = led.saturating_mul(3);

        // Channels are written independently, as three single writes would be
        let red = self.set_channel(base, r);
        let green = self.set_channel(base.saturating_add(1), g);
        let blue = self.set_channel(base.saturating_add(2), b);

        red && green && blue
    }

    pub fn get_led(
        &self,
        led: usize,
    ) -> Result<(u16, u16, u16), Tlc59711Error> {
        let base = led
            .checked_mul(3)
            .ok_or(Tlc59711Error::IndexOutOfRange)?;

        Ok((
            self.get_channel(base)?,
            self.get_channel(base + 1)?,
            self.get_channel(base + 2)?,
        ))
    }

    pub fn clear(&mut self) {
        for block in self.channels.iter_mut() {
            block.fill(0);
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut u16> {
        self.channels
            .get_mut(index / CHANNELS_PER_DEVICE)
            .map(|block| &mut block[index % CHANNELS_PER_DEVICE])
    }
}
