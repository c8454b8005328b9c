//! BeaconLens core library for decoding sensor beacon telemetry.
//!
//! This crate implements the decode pipeline used by the CLI: a fixed
//! 16-byte beacon record (usually carried as a 32-character hex string) is
//! validated, sliced along the wire layout, and interpreted into a typed
//! [`SensorReading`]. Decoding is byte-oriented and side-effect free; every
//! optional field uses an all-bits-set sentinel on the wire to signal "no
//! reading", surfaced here as `None` rather than an error.
//!
//! Invariants:
//! - Decoding is deterministic: identical input yields identical output.
//! - Field presence is decided on raw sentinel bytes, never on the scaled
//!   value, so a measurement of exactly zero is still present.
//! - A failed decode never yields a partially populated reading.
//!
//! # Examples
//! ```
//! use beaconlens_core::{EventHeader, decode_hex};
//!
//! let reading = decode_hex("001E0100F5540070C1BE00000001FFFF")?;
//! assert_eq!(reading.header, EventHeader::Boot);
//! assert_eq!(reading.temperature, Some(24.5));
//! assert_eq!(reading.co2, None);
//! # Ok::<(), beaconlens_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod payload;

pub use payload::{DecodeError, LengthUnit, layout};

/// Beacon event type carried in byte 0 of the record.
///
/// # Examples
/// ```
/// use beaconlens_core::EventHeader;
///
/// assert_eq!(EventHeader::from_byte(0x02), Some(EventHeader::ButtonClick));
/// assert_eq!(EventHeader::from_byte(0x04), None);
/// assert_eq!(EventHeader::ButtonClick.as_str(), "BUTTON_CLICK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventHeader {
    /// Device power-on or reset (0x00).
    Boot,
    /// Periodic telemetry update (0x01).
    Update,
    /// Short button press (0x02).
    ButtonClick,
    /// Long button press (0x03).
    ButtonHold,
}

impl EventHeader {
    /// Map a raw header byte to its tag, or `None` if unrecognized.
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            layout::HEADER_BOOT => Some(Self::Boot),
            layout::HEADER_UPDATE => Some(Self::Update),
            layout::HEADER_BUTTON_CLICK => Some(Self::ButtonClick),
            layout::HEADER_BUTTON_HOLD => Some(Self::ButtonHold),
            _ => None,
        }
    }

    /// Wire vocabulary name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boot => "BOOT",
            Self::Update => "UPDATE",
            Self::ButtonClick => "BUTTON_CLICK",
            Self::ButtonHold => "BUTTON_HOLD",
        }
    }
}

impl std::fmt::Display for EventHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded telemetry record.
///
/// Absent readings (sentinel on the wire) are `None` and serialize as JSON
/// `null`; fields are never skipped, so consumers always see the full
/// record shape.
///
/// # Examples
/// ```
/// use beaconlens_core::decode_hex;
///
/// let reading = decode_hex("01FF7F0000FFFFFF0000FFFFFFFF0190")?;
/// assert_eq!(reading.voltage, None);
/// assert_eq!(reading.orientation, 127);
/// assert_eq!(reading.co2, Some(400));
/// # Ok::<(), beaconlens_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Event type from byte 0.
    pub header: EventHeader,
    /// Battery voltage in volts (raw ÷ 10).
    pub voltage: Option<f64>,
    /// Orientation code 0-255. No sentinel: 255 is a real value.
    pub orientation: u8,
    /// Temperature in °C (16-bit two's-complement raw ÷ 10).
    pub temperature: Option<f64>,
    /// Relative humidity in percent (raw ÷ 2).
    pub humidity: Option<f64>,
    /// Illuminance in lux.
    pub illuminance: Option<u16>,
    /// Relative pressure in Pa (raw × 2).
    pub pressure: Option<u32>,
    /// Cumulative PIR motion event count.
    pub pir_motion_count: Option<u32>,
    /// CO2 concentration in ppm.
    pub co2: Option<u16>,
}

/// Decode a 32-character case-insensitive hex string.
///
/// # Examples
/// ```
/// use beaconlens_core::{DecodeError, LengthUnit, decode_hex};
///
/// let err = decode_hex("001E").unwrap_err();
/// assert_eq!(
///     err,
///     DecodeError::InvalidLength {
///         actual: 4,
///         unit: LengthUnit::HexChars,
///     }
/// );
/// ```
pub fn decode_hex(text: &str) -> Result<SensorReading, DecodeError> {
    let record = payload::decode_hex_record(text)?;
    payload::parse_reading(&record)
}

/// Decode a raw 16-byte record.
///
/// # Examples
/// ```
/// use beaconlens_core::{EventHeader, decode_bytes};
///
/// let mut record = [0xFFu8; 16];
/// record[0] = 0x03;
/// record[2] = 0x10;
/// let reading = decode_bytes(&record)?;
/// assert_eq!(reading.header, EventHeader::ButtonHold);
/// assert_eq!(reading.voltage, None);
/// # Ok::<(), beaconlens_core::DecodeError>(())
/// ```
pub fn decode_bytes(payload: &[u8]) -> Result<SensorReading, DecodeError> {
    payload::parse_reading(payload)
}
