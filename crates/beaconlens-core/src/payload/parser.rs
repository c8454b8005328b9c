use super::error::{DecodeError, LengthUnit};
use super::layout;
use super::reader::PayloadReader;
use crate::{EventHeader, SensorReading};

/// Decode a raw 16-byte record into a [`SensorReading`].
///
/// Presence of every optional field is decided on the raw sentinel bytes
/// before any scaling, so a reading of exactly zero stays present.
pub fn parse_reading(payload: &[u8]) -> Result<SensorReading, DecodeError> {
    let record: &[u8; layout::RECORD_LEN] = payload
        .try_into()
        .map_err(|_| DecodeError::InvalidLength {
            actual: payload.len(),
            unit: LengthUnit::Bytes,
        })?;
    let reader = PayloadReader::new(record);

    let raw_header = reader.read_u8(layout::HEADER_OFFSET);
    let header = EventHeader::from_byte(raw_header)
        .ok_or(DecodeError::UnknownHeader { value: raw_header })?;

    let voltage = reader
        .read_optional_u8(layout::VOLTAGE_OFFSET)
        .map(|raw| f64::from(raw) / layout::VOLTAGE_DIVISOR);
    let orientation = reader.read_u8(layout::ORIENTATION_OFFSET);
    let temperature = reader
        .read_optional_u16_be(layout::TEMPERATURE_RANGE)
        .map(|raw| f64::from(raw as i16) / layout::TEMPERATURE_DIVISOR);
    let humidity = reader
        .read_optional_u8(layout::HUMIDITY_OFFSET)
        .map(|raw| f64::from(raw) / layout::HUMIDITY_DIVISOR);
    let illuminance = reader.read_optional_u16_be(layout::ILLUMINANCE_RANGE);
    let pressure = reader
        .read_optional_u16_be(layout::PRESSURE_RANGE)
        .map(|raw| u32::from(raw) * layout::PRESSURE_MULTIPLIER);
    let pir_motion_count = reader.read_optional_u32_be(layout::PIR_MOTION_COUNT_RANGE);
    let co2 = reader.read_optional_u16_be(layout::CO2_RANGE);

    Ok(SensorReading {
        header,
        voltage,
        orientation,
        temperature,
        humidity,
        illuminance,
        pressure,
        pir_motion_count,
        co2,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_reading;
    use crate::EventHeader;
    use crate::payload::error::{DecodeError, LengthUnit};
    use crate::payload::layout;

    fn record_with(fill: impl FnOnce(&mut [u8; layout::RECORD_LEN])) -> [u8; layout::RECORD_LEN] {
        let mut record = [0u8; layout::RECORD_LEN];
        fill(&mut record);
        record
    }

    #[test]
    fn parse_update_record() {
        let record = record_with(|r| {
            r[layout::HEADER_OFFSET] = layout::HEADER_UPDATE;
            r[layout::VOLTAGE_OFFSET] = 0x1E;
            r[layout::ORIENTATION_OFFSET] = 0x42;
            r[layout::TEMPERATURE_RANGE].copy_from_slice(&0x00F5u16.to_be_bytes());
            r[layout::HUMIDITY_OFFSET] = 0x64;
            r[layout::PRESSURE_RANGE].copy_from_slice(&0xC1BEu16.to_be_bytes());
        });

        let reading = parse_reading(&record).unwrap();
        assert_eq!(reading.header, EventHeader::Update);
        assert_eq!(reading.voltage, Some(3.0));
        assert_eq!(reading.orientation, 0x42);
        assert_eq!(reading.temperature, Some(24.5));
        assert_eq!(reading.humidity, Some(50.0));
        assert_eq!(reading.illuminance, Some(0));
        assert_eq!(reading.pressure, Some(99196));
        assert_eq!(reading.pir_motion_count, Some(0));
        assert_eq!(reading.co2, Some(0));
    }

    #[test]
    fn negative_temperature() {
        let record = record_with(|r| {
            r[layout::TEMPERATURE_RANGE].copy_from_slice(&0x8000u16.to_be_bytes());
        });
        let reading = parse_reading(&record).unwrap();
        assert_eq!(reading.temperature, Some(-3276.8));
    }

    #[test]
    fn max_positive_temperature() {
        let record = record_with(|r| {
            r[layout::TEMPERATURE_RANGE].copy_from_slice(&0x7FFFu16.to_be_bytes());
        });
        let reading = parse_reading(&record).unwrap();
        assert_eq!(reading.temperature, Some(3276.7));
    }

    #[test]
    fn zero_temperature_is_present() {
        let record = record_with(|_| {});
        let reading = parse_reading(&record).unwrap();
        assert_eq!(reading.temperature, Some(0.0));
    }

    #[test]
    fn orientation_has_no_sentinel() {
        let record = record_with(|r| r[layout::ORIENTATION_OFFSET] = 0xFF);
        let reading = parse_reading(&record).unwrap();
        assert_eq!(reading.orientation, 255);
    }

    #[test]
    fn unknown_header_tag() {
        let record = record_with(|r| r[layout::HEADER_OFFSET] = 0x04);
        let err = parse_reading(&record).unwrap_err();
        assert_eq!(err, DecodeError::UnknownHeader { value: 4 });
    }

    #[test]
    fn wrong_byte_length_reports_bytes() {
        let err = parse_reading(&[0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLength {
                actual: 15,
                unit: LengthUnit::Bytes
            }
        );
        assert!(err.to_string().contains("expected 16 bytes, got 15"));
    }
}
