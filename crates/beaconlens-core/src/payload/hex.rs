use super::error::{DecodeError, LengthUnit};
use super::layout;

/// Decode a 32-character case-insensitive hex string into the raw record.
///
/// Length is checked before content: a wrong character count is always
/// `InvalidLength`, even if the string also contains non-hex characters.
pub fn decode_hex_record(text: &str) -> Result<[u8; layout::RECORD_LEN], DecodeError> {
    let count = text.chars().count();
    if count != layout::HEX_LEN {
        return Err(DecodeError::InvalidLength {
            actual: count,
            unit: LengthUnit::HexChars,
        });
    }

    let mut record = [0u8; layout::RECORD_LEN];
    for (index, character) in text.chars().enumerate() {
        let nibble = character
            .to_digit(16)
            .ok_or(DecodeError::InvalidEncoding { index, character })? as u8;
        if index % 2 == 0 {
            record[index / 2] = nibble << 4;
        } else {
            record[index / 2] |= nibble;
        }
    }
    Ok(record)
}
