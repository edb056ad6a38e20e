//! SSD1306 OLED Display Driver
//!
//! Used with the common 0.96" and 0.91" monochrome OLED breakouts
//! (128x64 and 128x32), over I2C or 4-wire SPI.
//!
//! ### Usage
//! This driver does not hide that you're working with one buffer. To
//! display something you:
//!
//! 1. build the driver with [`driver::Ssd1306::new_i2c`] (or
//!    [`driver::Ssd1306::new`] around an [`interface::SpiInterface`])
//! 1. bring the panel up with [`driver::Ssd1306::init`]
//! 1. draw into the buffer with [`driver::Ssd1306::set_pixel`],
//!    [`driver::Ssd1306::set_image`] or, through
//!    [`driver::Ssd1306::framebuffer_mut`], with
//!    [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics)
//! 1. send the frame with [`driver::Ssd1306::display`]
//! 1. blank and release the panel with [`driver::Ssd1306::close`]
//!
//!
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod graphics;
pub mod ingest;
pub mod interface;
pub mod sequence;

mod cmd;
mod flag;

/// Display width, pixels horizontally, when none is configured
pub const DEFAULT_WIDTH: u32 = 128;

/// Display height, pixels vertically, when none is configured
pub const DEFAULT_HEIGHT: u32 = 64;

/// Maximum display width this driver supports (column address is one byte)
pub const MAX_WIDTH: u32 = 256;

/// Maximum display height this driver supports (multiplex ratio is one byte)
pub const MAX_HEIGHT: u32 = 256;
