//! Construction options for the display
//!
//! Geometry drives both the framebuffer size and the parameters of the
//! init sequence, so it is validated once here and carried as a value.

use crate::ssd1306::error::ConfigError;
use crate::ssd1306::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH};

/// 7-bit I2C addresses the SSD1306 answers on, selected by the SA0 pin
pub struct Address;

impl Address {
    /// SA0 tied low
    pub const PRIMARY: u8 = 0x3C;
    /// SA0 tied high
    pub const SECONDARY: u8 = 0x3D;
}

/// Validated display size in pixels.
///
/// The height is always a whole number of 8-pixel pages, and both sides fit
/// the controller's 8-bit address registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u32,
    height: u32,
}

impl Geometry {
    /// Validate and build a geometry
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let valid = (1..=MAX_WIDTH).contains(&width)
            && (1..=MAX_HEIGHT).contains(&height)
            && height % 8 == 0;
        if !valid {
            return Err(ConfigError::InvalidGeometry { width, height });
        }
        Ok(Geometry { width, height })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-pixel pages
    pub fn pages(&self) -> u32 {
        self.height / 8
    }

    /// Framebuffer length in bytes
    pub fn buffer_len(&self) -> usize {
        (self.width * self.height / 8) as usize
    }

    /// Whether `(x, y)` lies on the panel
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    // The casts below cannot truncate: `new` caps both sides at 256.

    pub(crate) fn last_column(&self) -> u8 {
        (self.width - 1) as u8
    }

    pub(crate) fn last_row(&self) -> u8 {
        (self.height - 1) as u8
    }

    pub(crate) fn last_page(&self) -> u8 {
        (self.pages() - 1) as u8
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Everything needed to bring up one panel.
///
/// `address` is only consumed by the I2C transport; the core treats it as
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels, a multiple of 8
    pub height: u32,
    /// 7-bit I2C address
    pub address: u8,
}

impl DisplayConfig {
    /// Validated geometry for this configuration
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.width, self.height)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            address: Address::PRIMARY,
        }
    }
}
