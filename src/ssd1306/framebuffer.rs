//! Packed 1-bit framebuffer in the controller's page layout
//!
//! Byte `x + (y / 8) * width` holds the 8 vertical pixels of column `x` in
//! page `y / 8`; bit `y & 7` is the pixel, LSB on top. Flushing the buffer
//! in order with horizontal addressing fills the GDDRAM exactly.

use crate::ssd1306::config::Geometry;
use crate::ssd1306::error::ConfigError;

/// How [`FrameBuffer::set_pixel`] combines with the current bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelMode {
    /// Light the pixel (OR)
    #[default]
    Assert,
    /// Flip the pixel (XOR)
    Toggle,
}

/// Monochrome bitmap sized for one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    geometry: Geometry,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    /// All-dark buffer for `geometry`
    pub fn new(geometry: Geometry) -> Self {
        FrameBuffer {
            geometry,
            buffer: vec![0; geometry.buffer_len()],
        }
    }

    /// Panel size this buffer was built for
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Set or flip one pixel.
    ///
    /// Out-of-range coordinates are rejected and the buffer is left
    /// untouched.
    pub fn set_pixel(&mut self, x: u32, y: u32, mode: PixelMode) -> Result<(), ConfigError> {
        let (index, mask) = self.locate(x, y)?;
        match mode {
            PixelMode::Assert => self.buffer[index] |= mask,
            PixelMode::Toggle => self.buffer[index] ^= mask,
        }
        Ok(())
    }

    /// Read one pixel back
    pub fn pixel(&self, x: u32, y: u32) -> Result<bool, ConfigError> {
        let (index, mask) = self.locate(x, y)?;
        Ok(self.buffer[index] & mask != 0)
    }

    /// Replace the storage with a zeroed buffer of the same length.
    ///
    /// The device is not touched; call `display()` to push the blank frame.
    pub fn clear(&mut self) {
        self.buffer = vec![0; self.geometry.buffer_len()];
    }

    /// Packed storage in GDDRAM order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), ConfigError> {
        if !self.geometry.contains(x, y) {
            return Err(ConfigError::OutOfRange {
                x,
                y,
                width: self.geometry.width(),
                height: self.geometry.height(),
            });
        }
        let index = (x + (y / 8) * self.geometry.width()) as usize;
        Ok((index, 1 << (y & 7)))
    }
}
