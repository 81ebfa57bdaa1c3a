use embedded_hal::spi::{Mode, MODE_0};

/// Write command, the top 6 bits of every command word
pub const COMMAND_WRITE: u32 = 0x25;
pub const COMMAND_WRITE_BITS: u32 = 5;

pub const FUNCTION_OUTTMG: u32 = 0b1_0000;
pub const FUNCTION_EXTGCK: u32 = 0b0_1000;
pub const FUNCTION_TMGRST: u32 = 0b0_0100;
pub const FUNCTION_DSPRPT: u32 = 0b0_0010;
pub const FUNCTION_BLANK: u32 = 0b0_0001;

/// Rising edge output timing, internal clock, timing reset, auto repeat,
/// outputs enabled.
pub const FUNCTION_CONTROL: u32 =
    FUNCTION_OUTTMG | FUNCTION_TMGRST | FUNCTION_DSPRPT;

pub const BRIGHTNESS_BITS: u32 = 7;
pub const MAX_BRIGHTNESS: u8 = 0x7f;

pub const CHANNELS_PER_DEVICE: usize = 12;
pub const LEDS_PER_DEVICE: usize = CHANNELS_PER_DEVICE / 3;

/// 4 command bytes followed by 12 big endian channel values
pub const COMMAND_SIZE: usize = 4;
pub const FRAME_SIZE: usize = COMMAND_SIZE + CHANNELS_PER_DEVICE * 2;

pub const BITBANG_SETTLE_DELAY_US: u32 = 200;
pub const SPI_SETTLE_DELAY_US: u32 = 2;

/// Bus mode the hardware SPI peripheral must be configured with, MSB first.
pub const SPI_MODE: Mode = MODE_0;
pub const SPI_FREQUENCY_HZ: u32 = 1_000_000;
