//! Packing of a [`Canvas`] into the display controller's frame format.
//!
//! A frame is `OUT_HEIGHT` rows of `BYTES_PER_ROW` bytes, top to bottom.
//! Bit `b` (LSB first) of byte `k` in a row holds output column `k * 8 + b`.
//! The controller takes a fixed 1024 byte frame, which covers only the left
//! `OUT_WIDTH` (128) columns of the 256 wide canvas. Everything drawn right
//! of that is not transmitted: the team names at x = 150, the scores at
//! x = 236 and the parts of the logos past column 127 only show up on the
//! canvas, not on the device.

use crate::{canvas::Canvas, error::EncodeError};

pub const BYTES_PER_ROW: usize = 16;
pub const OUT_WIDTH: usize = BYTES_PER_ROW * 8;
pub const OUT_HEIGHT: usize = 64;
pub const FRAME_SIZE: usize = BYTES_PER_ROW * OUT_HEIGHT;

pub type Frame = [u8; FRAME_SIZE];

/// Canvas coordinate shown at output position `(x, y)`.
///
/// The panel is wired as a single surface, so the mapping is direct.
fn source_coord(x: usize, y: usize) -> (i32, i32) {
    (x as i32, y as i32)
}

pub fn encode(canvas: &Canvas) -> Frame {
    let mut frame = [0u8; FRAME_SIZE];
    for y in 0..OUT_HEIGHT {
        for byte_index in 0..BYTES_PER_ROW {
            let mut byte = 0u8;
            for bit in 0..8 {
                let (x_in, y_in) = source_coord(byte_index * 8 + bit, y);
                if canvas.get_pixel(x_in, y_in) {
                    byte |= 1 << bit;
                }
            }
            frame[y * BYTES_PER_ROW + byte_index] = byte;
        }
    }
    frame
}

/// Rebuilds the canvas a frame was encoded from.
pub fn decode(data: &[u8]) -> Result<Canvas, EncodeError> {
    if data.len() != FRAME_SIZE {
        return Err(EncodeError::InvalidLength(data.len()));
    }
    let mut canvas = Canvas::new();
    for (index, &byte) in data.iter().enumerate() {
        let y = index / BYTES_PER_ROW;
        let byte_index = index % BYTES_PER_ROW;
        for bit in 0..8 {
            if (byte >> bit) & 1 == 1 {
                let (x_in, y_in) = source_coord(byte_index * 8 + bit, y);
                canvas.set_pixel(x_in, y_in, true);
            }
        }
    }
    Ok(canvas)
}
