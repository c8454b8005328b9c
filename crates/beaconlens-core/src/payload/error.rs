use thiserror::Error;

/// Unit of a rejected input, so length errors read in the caller's terms:
/// hex characters for textual input, bytes for raw record input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    HexChars,
    Bytes,
}

impl LengthUnit {
    pub fn expected(self) -> usize {
        match self {
            Self::HexChars => 32,
            Self::Bytes => 16,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HexChars => "hex characters",
            Self::Bytes => "bytes",
        }
    }
}

/// Errors returned while decoding a telemetry record.
///
/// All variants are immediate input-validation failures; the decoder never
/// returns a partially populated reading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error(
        "invalid payload length: expected {expected} {label}, got {actual}",
        expected = .unit.expected(),
        label = .unit.label(),
    )]
    InvalidLength { actual: usize, unit: LengthUnit },
    #[error("invalid hex character '{character}' at position {index}")]
    InvalidEncoding { index: usize, character: char },
    #[error("unknown header tag: 0x{value:02X}")]
    UnknownHeader { value: u8 },
}
