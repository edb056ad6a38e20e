//! SSD1306 Driver Implementation
//!
//! [`Ssd1306`] owns the framebuffer and the transport handle and walks the
//! controller through its lifecycle:
//!
//! ```text
//! Uninitialized --init()--> Ready <--display_off()/display_on()--> PoweredOff
//!        |                    |                                      |
//!        +----init() fails----+--> Failed                            |
//!                             +-----------------close()--------------+--> released
//! ```
//!
//! Drawing never touches the bus. Nothing reaches the panel until
//! [`Ssd1306::display`] sends the whole buffer as one data write. Power,
//! invert, contrast and rotation are single commands that bypass the buffer.
//!
//! ## Timing
//!
//! Every call blocks until the bus write (and any delay) is done. There is no
//! timeout: a transport that never returns stalls the driver with it.
//!
//! ## Sharing
//!
//! The driver is single-owner. If several threads drive one panel, wrap the
//! driver in a mutex; interleaving e.g. `set_contrast` with `display` on the
//! same bus corrupts the byte stream.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use image::{GenericImageView, Pixel};

use crate::ssd1306::config::{DisplayConfig, Geometry};
use crate::ssd1306::error::{ConfigError, DisplayError, InitStage, OledError};
use crate::ssd1306::framebuffer::{FrameBuffer, PixelMode};
use crate::ssd1306::graphics::DisplayRotation;
use crate::ssd1306::ingest::{IngestReport, ThresholdPolicy};
use crate::ssd1306::interface::{DisplayInterface, I2cInterface, Transport};
use crate::ssd1306::sequence::{self, Contrast};

/// Lifecycle position of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Built, no traffic sent yet
    Uninitialized,
    /// Initialized and showing GDDRAM
    Ready,
    /// Initialized, panel switched off (GDDRAM kept)
    PoweredOff,
    /// `init()` failed; the panel is in an unknown state
    Failed,
}

/// SSD1306 OLED Display Driver
///
/// ## Type Parameters
///
/// - `T` - bus transport, see [`Transport`]
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for reset timing and blinking
pub struct Ssd1306<T, RST, DELAY> {
    interface: DisplayInterface<T, RST, DELAY>,
    framebuffer: FrameBuffer,
    state: DriverState,
    inverted: bool,
    contrast: Contrast,
    rotation: DisplayRotation,
}

impl<T, RST, DELAY> Ssd1306<T, RST, DELAY> {
    /// Build the driver around an acquired handle.
    ///
    /// Allocates a blank framebuffer for `geometry`; no bus traffic.
    pub fn new(interface: DisplayInterface<T, RST, DELAY>, geometry: Geometry) -> Self {
        Ssd1306 {
            interface,
            framebuffer: FrameBuffer::new(geometry),
            state: DriverState::Uninitialized,
            inverted: false,
            contrast: Contrast::DEFAULT,
            rotation: DisplayRotation::Rotate0,
        }
    }

    /// Panel size
    pub fn geometry(&self) -> Geometry {
        self.framebuffer.geometry()
    }

    /// Current lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Whether the panel is switched on
    pub fn is_powered(&self) -> bool {
        self.state == DriverState::Ready
    }

    /// Whether the panel shows inverse video
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Contrast last sent to the controller
    pub fn contrast(&self) -> Contrast {
        self.contrast
    }

    /// Orientation last sent to the controller
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Set or flip one pixel in the buffer
    pub fn set_pixel(&mut self, x: u32, y: u32, mode: PixelMode) -> Result<(), OledError> {
        self.framebuffer.set_pixel(x, y, mode)?;
        Ok(())
    }

    /// Blank the buffer. The panel keeps its content until `display()`.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Threshold an image into the buffer, clipping what does not fit
    pub fn set_image<I, P>(&mut self, image: &I, policy: &impl ThresholdPolicy) -> IngestReport
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        self.framebuffer.set_image(image, policy)
    }

    /// Raw buffer in GDDRAM order
    pub fn buffer(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    /// The framebuffer
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// The framebuffer, e.g. as an embedded-graphics `DrawTarget`
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }

    /// Give the bus, reset pin and delay back without touching the panel.
    ///
    /// Use [`close`](Self::close) to blank the panel first.
    pub fn release(self) -> (T, RST, DELAY) {
        self.interface.release()
    }

    fn ensure_initialized(&self) -> Result<(), OledError> {
        match self.state {
            DriverState::Ready | DriverState::PoweredOff => Ok(()),
            DriverState::Uninitialized => Err(OledError::NotInitialized),
            DriverState::Failed => Err(OledError::Unusable),
        }
    }
}

impl<I2C, RST, DELAY> Ssd1306<I2cInterface<I2C>, RST, DELAY> {
    /// Build an I2C driver from a [`DisplayConfig`]
    pub fn new_i2c(
        i2c: I2C,
        rst: RST,
        delay: DELAY,
        config: DisplayConfig,
    ) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;
        let interface = DisplayInterface::new(I2cInterface::new(i2c, config.address), rst, delay);
        Ok(Ssd1306::new(interface, geometry))
    }
}

impl<T, RST, DELAY> Ssd1306<T, RST, DELAY>
where
    T: Transport,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Reset the controller and send the init block.
    ///
    /// Afterwards the panel is on, not inverted, at default contrast and
    /// `Rotate0`. Calling it again on a working driver repeats the whole
    /// sequence. A failure marks the driver unusable; build a new one.
    pub fn init(&mut self) -> Result<(), OledError> {
        if self.state == DriverState::Failed {
            return Err(OledError::Unusable);
        }
        let geometry = self.geometry();
        log::info!(
            "Initializing {}x{} display",
            geometry.width(),
            geometry.height()
        );

        if let Err(source) = self.interface.reset() {
            return Err(self.init_failed(InitStage::Reset, source));
        }
        let commands = sequence::init_sequence(&geometry);
        if let Err(source) = self.interface.cmds(&commands) {
            return Err(self.init_failed(InitStage::CommandSequence, source));
        }

        self.state = DriverState::Ready;
        self.inverted = false;
        self.contrast = Contrast::DEFAULT;
        self.rotation = DisplayRotation::Rotate0;
        log::info!("Display ready");
        Ok(())
    }

    /// Send the whole buffer as one data write.
    ///
    /// Power state is unchanged; while powered off the write lands in
    /// GDDRAM and shows on the next `display_on()`.
    pub fn display(&mut self) -> Result<(), OledError> {
        self.ensure_initialized()?;
        let bytes = self.framebuffer.as_bytes();
        log::debug!("Flushing {} bytes of frame data", bytes.len());
        self.interface
            .data(bytes)
            .map_err(|source| transport_error("display", bytes.len(), source))
    }

    /// Switch the panel on
    pub fn display_on(&mut self) -> Result<(), OledError> {
        self.set_power(true)
    }

    /// Switch the panel off; GDDRAM is kept
    pub fn display_off(&mut self) -> Result<(), OledError> {
        self.set_power(false)
    }

    /// Inverse or normal video. Buffer content is not changed.
    pub fn display_invert(&mut self, inverted: bool) -> Result<(), OledError> {
        self.ensure_initialized()?;
        self.send_command("display_invert", sequence::invert(inverted))?;
        self.inverted = inverted;
        log::info!("Display inversion {}", if inverted { "on" } else { "off" });
        Ok(())
    }

    /// Set the contrast register, `2..=255`.
    ///
    /// Out-of-range values are rejected before anything is sent.
    pub fn set_contrast(&mut self, value: u16) -> Result<(), OledError> {
        let contrast = Contrast::new(value)?;
        self.ensure_initialized()?;
        for byte in sequence::contrast(contrast) {
            self.send_command("set_contrast", byte)?;
        }
        self.contrast = contrast;
        log::info!("Contrast set to {}", contrast.value());
        Ok(())
    }

    /// Flip the scan direction of rows and columns
    pub fn set_rotation(&mut self, rotation: DisplayRotation) -> Result<(), OledError> {
        self.ensure_initialized()?;
        for byte in sequence::rotation(rotation) {
            self.send_command("set_rotation", byte)?;
        }
        self.rotation = rotation;
        log::info!("Rotation set to {:?}", rotation);
        Ok(())
    }

    /// Switch off for `off`, then back on; `times` repetitions with an equal
    /// on-interval in between.
    pub fn blink(&mut self, off: Duration, times: u32) -> Result<(), OledError> {
        self.ensure_initialized()?;
        for i in 0..times {
            if i > 0 {
                self.interface.pause(off);
            }
            self.display_off()?;
            self.interface.pause(off);
            self.display_on()?;
        }
        Ok(())
    }

    /// Blank the panel and hand the parts back.
    ///
    /// An initialized driver always clears the buffer and flushes the blank
    /// frame before releasing, so no stale pixels stay lit. An uninitialized
    /// or failed driver is released without bus traffic.
    ///
    /// If the blank flush fails the driver comes back with the error, still
    /// owning its parts: call `close()` again to retry or
    /// [`release`](Self::release) to give up on blanking.
    pub fn close(mut self) -> Result<(T, RST, DELAY), (OledError, Self)> {
        match self.state {
            DriverState::Ready | DriverState::PoweredOff => {
                self.framebuffer.clear();
                if let Err(e) = self.display() {
                    return Err((e, self));
                }
                log::info!("Display blanked, releasing transport");
            }
            DriverState::Uninitialized => {
                log::info!("Display never initialized, releasing transport");
            }
            DriverState::Failed => {
                log::warn!("Display unusable, releasing transport without blanking");
            }
        }
        Ok(self.interface.release())
    }

    fn set_power(&mut self, on: bool) -> Result<(), OledError> {
        self.ensure_initialized()?;
        let operation = if on { "display_on" } else { "display_off" };
        self.send_command(operation, sequence::power(on))?;
        self.state = if on {
            DriverState::Ready
        } else {
            DriverState::PoweredOff
        };
        log::info!("Display powered {}", if on { "on" } else { "off" });
        Ok(())
    }

    fn send_command(&mut self, operation: &'static str, command: u8) -> Result<(), OledError> {
        self.interface
            .cmd(command)
            .map_err(|source| transport_error(operation, 1, source))
    }

    fn init_failed(&mut self, stage: InitStage, source: DisplayError) -> OledError {
        self.state = DriverState::Failed;
        log::error!("Display initialization failed at {:?}: {:?}", stage, source);
        OledError::Initialization { stage, source }
    }
}

fn transport_error(operation: &'static str, len: usize, source: DisplayError) -> OledError {
    log::error!(
        "Bus write failed during {} ({} bytes): {:?}",
        operation,
        len,
        source
    );
    OledError::Transport {
        operation,
        len,
        source,
    }
}
