//! Image ingestion into the framebuffer
//!
//! The panel is 1-bit, so every source pixel goes through a
//! [`ThresholdPolicy`] that decides whether it lights the OLED pixel. Lit
//! pixels are asserted; unlit ones leave the buffer as it was, matching the
//! additive draw model. Call [`FrameBuffer::clear`] first for a fresh frame.
//!
//! Source pixels that fall outside the panel are clipped by
//! [`FrameBuffer::set_image`] and counted in the report.
//! [`FrameBuffer::set_image_strict`] rejects oversized sources up front.

use image::{GenericImageView, Pixel, Rgba};

use crate::ssd1306::error::ConfigError;
use crate::ssd1306::framebuffer::{FrameBuffer, PixelMode};

/// Maps a colour pixel to on/off
pub trait ThresholdPolicy {
    /// `true` lights the pixel
    fn is_lit(&self, pixel: Rgba<u8>) -> bool;
}

/// Any non-black pixel is lit: `r + g + b > 0`. Alpha is ignored.
///
/// Deliberately crude; swap in [`Luminance`] for photos or anti-aliased art.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChannel;

impl ThresholdPolicy for AnyChannel {
    fn is_lit(&self, pixel: Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        u16::from(r) + u16::from(g) + u16::from(b) > 0
    }
}

/// Lit when the Rec. 709 luma is at least `threshold`. Alpha is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Luminance {
    /// 0-255, 128 is mid grey
    pub threshold: u8,
}

impl Default for Luminance {
    fn default() -> Self {
        Luminance { threshold: 128 }
    }
}

impl ThresholdPolicy for Luminance {
    fn is_lit(&self, pixel: Rgba<u8>) -> bool {
        pixel.to_rgb().to_luma().0[0] >= self.threshold
    }
}

/// What happened during one ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Pixels asserted in the buffer
    pub lit: usize,
    /// Lit source pixels dropped for lying outside the panel
    pub clipped: usize,
}

impl FrameBuffer {
    /// Threshold `image` into the buffer, anchored at the top-left corner.
    ///
    /// Parts of the image beyond the panel are skipped.
    pub fn set_image<I, P>(&mut self, image: &I, policy: &impl ThresholdPolicy) -> IngestReport
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let mut report = IngestReport::default();
        for (x, y, pixel) in image.pixels() {
            if !policy.is_lit(pixel.to_rgba()) {
                continue;
            }
            match self.set_pixel(x, y, PixelMode::Assert) {
                Ok(()) => report.lit += 1,
                Err(_) => report.clipped += 1,
            }
        }
        log::debug!(
            "Image {}x{} ingested: {} lit, {} clipped",
            image.width(),
            image.height(),
            report.lit,
            report.clipped
        );
        report
    }

    /// Like [`set_image`](Self::set_image) but refuses images larger than the
    /// panel. The buffer is untouched on rejection.
    pub fn set_image_strict<I, P>(
        &mut self,
        image: &I,
        policy: &impl ThresholdPolicy,
    ) -> Result<IngestReport, ConfigError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        let geometry = self.geometry();
        if width > geometry.width() || height > geometry.height() {
            return Err(ConfigError::ImageTooLarge { width, height });
        }
        Ok(self.set_image(image, policy))
    }
}
