pub const RECORD_LEN: usize = 16;
pub const HEX_LEN: usize = 32;

pub const HEADER_OFFSET: usize = 0;
pub const VOLTAGE_OFFSET: usize = 1;
pub const ORIENTATION_OFFSET: usize = 2;
pub const TEMPERATURE_RANGE: std::ops::Range<usize> = 3..5;
pub const HUMIDITY_OFFSET: usize = 5;
pub const ILLUMINANCE_RANGE: std::ops::Range<usize> = 6..8;
pub const PRESSURE_RANGE: std::ops::Range<usize> = 8..10;
pub const PIR_MOTION_COUNT_RANGE: std::ops::Range<usize> = 10..14;
pub const CO2_RANGE: std::ops::Range<usize> = 14..16;

pub const HEADER_BOOT: u8 = 0x00;
pub const HEADER_UPDATE: u8 = 0x01;
pub const HEADER_BUTTON_CLICK: u8 = 0x02;
pub const HEADER_BUTTON_HOLD: u8 = 0x03;

pub const SENTINEL_U8: u8 = 0xFF;
pub const SENTINEL_U16: u16 = 0xFFFF;
pub const SENTINEL_U32: u32 = 0xFFFF_FFFF;

pub const VOLTAGE_DIVISOR: f64 = 10.0;
pub const TEMPERATURE_DIVISOR: f64 = 10.0;
pub const HUMIDITY_DIVISOR: f64 = 2.0;
pub const PRESSURE_MULTIPLIER: u32 = 2;
