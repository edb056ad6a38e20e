//! Blocking driver for SSD1306 monochrome OLED controllers.
//!
//! Pixels are drawn into a page-addressed framebuffer and pushed to the
//! panel in one data write; power, inversion, contrast and rotation are
//! sent as single commands. Any `embedded-hal` 1.0 I2C bus or SPI device
//! works as transport. Diagnostics go through the [`log`] facade.
#![deny(missing_docs)]

pub mod ssd1306;

pub use crate::ssd1306::config::{Address, DisplayConfig, Geometry};
pub use crate::ssd1306::driver::{DriverState, Ssd1306};
pub use crate::ssd1306::error::{ConfigError, DisplayError, InitStage, OledError};
pub use crate::ssd1306::framebuffer::{FrameBuffer, PixelMode};
pub use crate::ssd1306::graphics::DisplayRotation;
pub use crate::ssd1306::ingest::{AnyChannel, IngestReport, Luminance, ThresholdPolicy};
pub use crate::ssd1306::interface::{
    DisplayInterface, I2cInterface, NoResetPin, SpiInterface, Transport,
};
pub use crate::ssd1306::sequence::Contrast;
