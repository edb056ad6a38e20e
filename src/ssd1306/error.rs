//! Error types for the SSD1306 driver.

use core::fmt;

pub use display_interface::DisplayError;

/// Rejected arguments. Nothing is sent to the device and the framebuffer is
/// left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Height is not a whole number of pages, or a side is zero or wider
    /// than the address registers allow.
    InvalidGeometry {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Contrast outside `2..=255`.
    InvalidContrast(u16),
    /// Pixel coordinate outside the panel.
    OutOfRange {
        /// Column
        x: u32,
        /// Row
        y: u32,
        /// Panel width
        width: u32,
        /// Panel height
        height: u32,
    },
    /// Image larger than the panel, only raised by strict ingestion.
    ImageTooLarge {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidGeometry { width, height } => write!(
                f,
                "invalid geometry {}x{} (height must be a multiple of 8, sides 1-256)",
                width, height
            ),
            ConfigError::InvalidContrast(value) => {
                write!(f, "contrast {} outside 2-255", value)
            }
            ConfigError::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(f, "pixel ({}, {}) outside {}x{} panel", x, y, width, height),
            ConfigError::ImageTooLarge { width, height } => {
                write!(f, "image {}x{} does not fit the panel", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where in bring-up an initialization failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStage {
    /// Driving the reset line
    Reset,
    /// Sending the init command block
    CommandSequence,
}

/// Errors that can occur during driver operations.
///
/// Not comparable with `==` since [`DisplayError`] is not; match on the
/// variant instead.
#[derive(Debug, Clone)]
pub enum OledError {
    /// Invalid argument, see [`ConfigError`].
    Config(ConfigError),
    /// A bus write failed. Never retried by the driver.
    Transport {
        /// Driver operation that issued the write
        operation: &'static str,
        /// Payload length of the failed write, framing excluded
        len: usize,
        /// Underlying bus error
        source: DisplayError,
    },
    /// Reset or init sequence failed. The driver is unusable from now on
    /// and has to be rebuilt.
    Initialization {
        /// Step that failed
        stage: InitStage,
        /// Underlying bus or pin error
        source: DisplayError,
    },
    /// A device operation was attempted before [`init()`](crate::Ssd1306::init).
    NotInitialized,
    /// A device operation was attempted after a failed `init()`.
    Unusable,
}

impl From<ConfigError> for OledError {
    fn from(e: ConfigError) -> Self {
        OledError::Config(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Config(e) => write!(f, "configuration error: {}", e),
            OledError::Transport {
                operation,
                len,
                source,
            } => write!(
                f,
                "bus write failed during {} ({} bytes): {:?}",
                operation, len, source
            ),
            OledError::Initialization { stage, source } => {
                write!(f, "initialization failed at {:?}: {:?}", stage, source)
            }
            OledError::NotInitialized => write!(f, "display not initialized"),
            OledError::Unusable => write!(f, "display unusable after failed initialization"),
        }
    }
}

impl std::error::Error for OledError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OledError::Config(e) => Some(e),
            _ => None,
        }
    }
}
