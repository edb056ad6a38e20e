/// Parameter bytes and control prefixes used with the SSD1306 command set.
///
/// Parameters follow the opcode they belong to in the command stream. Control
/// bytes are only used on I2C, where every write starts with one of them.
pub struct Flag;
#[allow(missing_docs, dead_code)]
impl Flag {
    // I2C control bytes (Co and D/C# bits)
    pub const CONTROL_COMMAND_STREAM: u8 = 0x00; // Co=0, D/C#=0
    pub const CONTROL_COMMAND_SINGLE: u8 = 0x80; // Co=1, D/C#=0
    pub const CONTROL_DATA_STREAM: u8 = 0x40; // Co=0, D/C#=1

    // Memory Addressing Mode (0x20)
    pub const ADDRESSING_HORIZONTAL: u8 = 0x00;
    pub const ADDRESSING_VERTICAL: u8 = 0x01;
    pub const ADDRESSING_PAGE: u8 = 0x02;

    // Display Clock Divide (0xD5): divide ratio 1, oscillator frequency 8
    pub const CLOCK_DIVIDE_DEFAULT: u8 = 0x80;

    // Display Offset (0xD3)
    pub const DISPLAY_OFFSET_NONE: u8 = 0x00;

    // Display Start Line (0x40 | line)
    pub const START_LINE_ZERO: u8 = 0x00;

    // Charge Pump (0x8D)
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
    pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

    // Segment Re-map (0xA0 | flag)
    pub const SEGMENT_COLUMN_0: u8 = 0x00; // column 0 mapped to SEG0
    pub const SEGMENT_COLUMN_127: u8 = 0x01; // column 127 mapped to SEG0

    // COM Pins Hardware Configuration (0xDA)
    pub const COM_PINS_SEQUENTIAL: u8 = 0x02;
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

    // Contrast Control (0x81)
    pub const CONTRAST_DEFAULT: u8 = 0x7F;
    pub const CONTRAST_MIN: u8 = 0x02;
    pub const CONTRAST_MAX: u8 = 0xFF;

    // Pre-charge Period (0xD9): phase 1 = 1 DCLK, phase 2 = 15 DCLK
    pub const PRECHARGE_DEFAULT: u8 = 0xF1;

    // VCOMH Deselect Level (0xDB)
    pub const VCOMH_DESELECT_DEFAULT: u8 = 0x40;

    // Column / Page Address (0x21 / 0x22) start
    pub const ADDRESS_START: u8 = 0x00;
}
