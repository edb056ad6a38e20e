//! Protocol byte sequences for the SSD1306
//!
//! Everything here is pure: sequences are built from the geometry and
//! returned as raw command streams without any control byte. Framing is the
//! transport's job.

use crate::ssd1306::config::Geometry;
use crate::ssd1306::error::ConfigError;
use crate::ssd1306::graphics::DisplayRotation;
use crate::ssd1306::{cmd::Cmd, flag::Flag};

/// Validated value for the contrast register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contrast(u8);

impl Contrast {
    /// Register value after init
    pub const DEFAULT: Contrast = Contrast(Flag::CONTRAST_DEFAULT);

    /// Accepts `2..=255`. Values 0 and 1 and anything above a byte are
    /// rejected rather than clamped.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        match u8::try_from(value) {
            Ok(v) if v >= Flag::CONTRAST_MIN => Ok(Contrast(v)),
            _ => Err(ConfigError::InvalidContrast(value)),
        }
    }

    /// Raw register value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Contrast {
    fn default() -> Self {
        Contrast::DEFAULT
    }
}

impl TryFrom<u16> for Contrast {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Contrast::new(value)
    }
}

/// Full init block: display off, horizontal addressing, timing, charge
/// pump, scan direction, default contrast, full address window, display on.
pub fn init_sequence(geometry: &Geometry) -> Vec<u8> {
    let mut seq = vec![
        Cmd::DISPLAY_OFF,
        Cmd::MEMORY_MODE,
        Flag::ADDRESSING_HORIZONTAL,
        Cmd::CLOCK_DIVIDE,
        Flag::CLOCK_DIVIDE_DEFAULT,
        Cmd::MULTIPLEX_RATIO,
        geometry.last_row(),
        Cmd::DISPLAY_OFFSET,
        Flag::DISPLAY_OFFSET_NONE,
        Cmd::SET_START_LINE | Flag::START_LINE_ZERO,
        Cmd::CHARGE_PUMP,
        Flag::CHARGE_PUMP_ENABLE,
    ];
    seq.extend_from_slice(&rotation(DisplayRotation::Rotate0));
    seq.extend_from_slice(&[
        Cmd::COM_PINS,
        Flag::COM_PINS_SEQUENTIAL,
        Cmd::SET_CONTRAST,
        Contrast::DEFAULT.value(),
        Cmd::PRECHARGE_PERIOD,
        Flag::PRECHARGE_DEFAULT,
        Cmd::VCOMH_DESELECT,
        Flag::VCOMH_DESELECT_DEFAULT,
    ]);
    seq.extend_from_slice(&address_window(geometry));
    seq.extend_from_slice(&[
        Cmd::RESUME_TO_RAM,
        invert(false),
        power(true),
    ]);
    seq
}

/// Column range `0..width` and page range `0..height/8`
pub fn address_window(geometry: &Geometry) -> [u8; 6] {
    [
        Cmd::COLUMN_ADDRESS,
        Flag::ADDRESS_START,
        geometry.last_column(),
        Cmd::PAGE_ADDRESS,
        Flag::ADDRESS_START,
        geometry.last_page(),
    ]
}

/// Contrast opcode followed by its value
pub fn contrast(contrast: Contrast) -> [u8; 2] {
    [Cmd::SET_CONTRAST, contrast.value()]
}

/// Inverse (`0xA7`) or normal (`0xA6`) display
pub fn invert(inverted: bool) -> u8 {
    if inverted {
        Cmd::INVERT_DISPLAY
    } else {
        Cmd::NORMAL_DISPLAY
    }
}

/// Display on (`0xAF`) or off (`0xAE`)
pub fn power(on: bool) -> u8 {
    if on {
        Cmd::DISPLAY_ON
    } else {
        Cmd::DISPLAY_OFF
    }
}

/// Segment remap and COM scan direction for an orientation
pub fn rotation(rotation: DisplayRotation) -> [u8; 2] {
    match rotation {
        DisplayRotation::Rotate0 => [
            Cmd::SEGMENT_REMAP | Flag::SEGMENT_COLUMN_127,
            Cmd::COM_SCAN_DEC,
        ],
        DisplayRotation::Rotate180 => [
            Cmd::SEGMENT_REMAP | Flag::SEGMENT_COLUMN_0,
            Cmd::COM_SCAN_INC,
        ],
    }
}
