use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::{DecodeError as B64Error, Engine};

use crate::error::{DecodeError, Result};

pub fn encode_standard(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// RFC 4648 standard alphabet, `=` padding required.
pub fn decode_standard(input: &[u8]) -> Result<Vec<u8>> {
    STANDARD.decode(input).map_err(|e| map_error(input, e))
}

pub fn encode_url(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// URL-safe alphabet (`-`, `_`), no padding accepted or emitted.
pub fn decode_url(input: &[u8]) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(input).map_err(|e| map_error(input, e))
}

fn map_error(input: &[u8], err: B64Error) -> DecodeError {
    let position = match err {
        B64Error::InvalidByte(offset, _) | B64Error::InvalidLastSymbol(offset, _) => offset,
        // A truncated final quantum has no single offending byte; report one
        // past the end.
        B64Error::InvalidLength(_) => input.len(),
        // The engine drops the offset for padding errors; the first `=` (or
        // its absence at the end) is the culprit.
        B64Error::InvalidPadding => input
            .iter()
            .position(|&b| b == b'=')
            .unwrap_or(input.len()),
    };
    DecodeError::illegal_base64_byte(position)
}
