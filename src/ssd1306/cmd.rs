/// Command opcodes understood by the SSD1306 controller.
pub struct Cmd;
#[allow(missing_docs, dead_code)]
impl Cmd {
    // Fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_TO_RAM: u8 = 0xA4;
    pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // Addressing
    pub const MEMORY_MODE: u8 = 0x20;
    pub const COLUMN_ADDRESS: u8 = 0x21;
    pub const PAGE_ADDRESS: u8 = 0x22;

    // Hardware configuration
    pub const SET_START_LINE: u8 = 0x40;
    pub const SEGMENT_REMAP: u8 = 0xA0;
    pub const MULTIPLEX_RATIO: u8 = 0xA8;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const COM_PINS: u8 = 0xDA;

    // Timing and driving scheme
    pub const CLOCK_DIVIDE: u8 = 0xD5;
    pub const PRECHARGE_PERIOD: u8 = 0xD9;
    pub const VCOMH_DESELECT: u8 = 0xDB;

    // Charge pump
    pub const CHARGE_PUMP: u8 = 0x8D;
}

/*
Datasheet command table, section 9 (only the ones this driver sends):
0x20 - Set Memory Addressing Mode
0x21 - Set Column Address (horizontal/vertical mode only)
0x22 - Set Page Address (horizontal/vertical mode only)
0x40 - Set Display Start Line (0x40..=0x7F)
0x81 - Set Contrast Control
0x8D - Charge Pump Setting
0xA0/0xA1 - Set Segment Re-map
0xA4/0xA5 - Entire Display ON (resume / ignore RAM)
0xA6/0xA7 - Set Normal/Inverse Display
0xA8 - Set Multiplex Ratio
0xAE/0xAF - Set Display OFF/ON
0xC0/0xC8 - Set COM Output Scan Direction
0xD3 - Set Display Offset
0xD5 - Set Display Clock Divide Ratio/Oscillator Frequency
0xD9 - Set Pre-charge Period
0xDA - Set COM Pins Hardware Configuration
0xDB - Set VCOMH Deselect Level
*/
