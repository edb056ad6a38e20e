//! Orientation and the embedded-graphics bridge
//!
//! The framebuffer follows the additive draw model: `BinaryColor::On`
//! lights a pixel, `BinaryColor::Off` leaves it as it is. Use
//! [`FrameBuffer::clear`] to blank. Points off the panel are clipped.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::ssd1306::framebuffer::{FrameBuffer, PixelMode};

/// Panel orientation, applied by the controller's scan direction registers.
///
/// Buffer content does not change when rotating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRotation {
    /// Column 127 on SEG0, COM scan remapped. The init default.
    #[default]
    Rotate0,
    /// Column 0 on SEG0, COM scan normal. Upside down relative to `Rotate0`.
    Rotate180,
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        let geometry = self.geometry();
        Size::new(geometry.width(), geometry.height())
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_off() {
                continue;
            }
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                // clipped
                let _ = self.set_pixel(x, y, PixelMode::Assert);
            }
        }
        Ok(())
    }
}
