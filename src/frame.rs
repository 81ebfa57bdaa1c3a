//! Bit layout of the TLC59711 data stream.
//!
//! Every device in the chain receives a 224 bit frame: a 32 bit command word
//! followed by the 16 bit grayscale value of each channel, highest channel
//! first. All values are shifted out MSB first.

use crate::config::*;
use crate::state::Brightness;

/// Build the command word for a write with the given brightness.
///
/// Layout, MSB first: 6 bit write command, 5 function control bits, then the
/// 7 bit red, green and blue brightness values.
pub const fn command_word(brightness: Brightness) -> u32 {
    let mut command = COMMAND_WRITE;

    command <<= COMMAND_WRITE_BITS;
    command |= FUNCTION_CONTROL;

    command <<= BRIGHTNESS_BITS;
    command |= brightness.red as u32;

    command <<= BRIGHTNESS_BITS;
    command |= brightness.green as u32;

    command <<= BRIGHTNESS_BITS;
    command |= brightness.blue as u32;

    command
}

/// Encode the frame of a single device.
///
/// Channels are emitted in reverse storage order: the shift register is
/// loaded from OUT11 down to OUT0.
pub fn encode(
    command: u32,
    channels: &[u16; CHANNELS_PER_DEVICE],
) -> [u8; FRAME_SIZE] {
    let mut frame = [0; FRAME_SIZE];

    frame[..COMMAND_SIZE].copy_from_slice(&command.to_be_bytes());

    for (chunk, value) in frame[COMMAND_SIZE..]
        .chunks_exact_mut(2)
        .zip(channels.iter().rev())
    {
        chunk.copy_from_slice(&value.to_be_bytes());
    }

    frame
}
