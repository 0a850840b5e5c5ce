use crate::error::Result;

pub fn encode(input: &[u8]) -> String {
    // Bytes that are not valid UTF-8 cannot alias into a String; they are
    // replaced. as_bytes() on the buffer stays the lossless view.
    String::from_utf8_lossy(input).into_owned()
}

pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    Ok(input.to_vec())
}
