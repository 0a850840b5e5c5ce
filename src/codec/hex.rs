use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::error::{DecodeError, Result};

pub fn encode(input: &[u8]) -> String {
    HEXLOWER.encode(input)
}

/// Case-insensitive hex decode. Length must be even; the first non-hex
/// character is reported with its 0-based index.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() % 2 != 0 {
        return Err(DecodeError::OddLengthHex);
    }
    HEXLOWER_PERMISSIVE.decode(input).map_err(|e| {
        // The crate reports block-granular positions; the offending
        // character is the first non-hex byte at or after it.
        let pos = input[e.position..]
            .iter()
            .position(|b| !b.is_ascii_hexdigit())
            .map_or(e.position, |off| e.position + off);
        let ch = input.get(pos).map_or('\u{fffd}', |&b| b as char);
        DecodeError::invalid_hex_digit(ch, pos)
    })
}
