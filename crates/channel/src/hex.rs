//! Conversions between `0x`-prefixed hex text and bytes.

use crate::errors::HexError;
use alloc::{string::String, vec::Vec};
use alloy_primitives::hex;

/// Decodes hex text into bytes.
///
/// The `0x` prefix is optional and digits are case-insensitive. The remaining text must be an
/// even number of hex digits; an empty remainder decodes to no bytes.
pub fn bytes_from_hex(text: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(text).map_err(HexError::from)
}

/// Encodes bytes as `0x`-prefixed lowercase hex text, two digits per byte.
pub fn hex_from_bytes(bytes: &[u8]) -> String {
    hex::encode_prefixed(bytes)
}
