use crate::error::{DecodeError, Result};

/// Renders bytes the way Go prints a byte slice: decimal values joined by
/// single spaces inside brackets, e.g. `[104 101 108 108 111]`.
pub fn encode(input: &[u8]) -> String {
    let values: Vec<String> = input.iter().map(|b| b.to_string()).collect();
    format!("[{}]", values.join(" "))
}

/// Inverse of [`encode`]. Only the first `[` and the first `]` are stripped,
/// wherever they occur, and no pairing is enforced — input that already lost
/// a bracket still parses.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let text = String::from_utf8_lossy(input);
    let stripped = strip_once(&strip_once(&text, '['), ']');
    if stripped.is_empty() {
        return Ok(Vec::new());
    }

    let mut bytes = Vec::new();
    for (index, token) in stripped.split(' ').enumerate() {
        let value: i64 = token
            .parse()
            .map_err(|_| DecodeError::not_a_number(token))?;
        if !(0..=255).contains(&value) {
            return Err(DecodeError::invalid_byte_value(value, index));
        }
        bytes.push(value as u8);
    }
    Ok(bytes)
}

fn strip_once(text: &str, ch: char) -> String {
    text.replacen(ch, "", 1)
}
