//! Telemetry record decoding.
//!
//! The decoder follows a layered structure:
//! - `layout`: byte offsets, sentinels, and header tags (source of truth)
//! - `hex`: textual form to raw record normalization
//! - `reader`: safe byte access and the sentinel convention
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Decoding is pure and contains no I/O; rendering and process concerns
//! live in the CLI crate.

pub mod error;
pub mod hex;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::{DecodeError, LengthUnit};
pub use hex::decode_hex_record;
pub use parser::parse_reading;
