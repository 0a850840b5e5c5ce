use thiserror::Error;

/// Errors produced while decoding text into bytes. Encoding is total and
/// never fails; decoding is the only fallible operation family.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("hex input has odd length")]
    OddLengthHex,

    #[error("invalid hex digit '{char}' at position {position}")]
    InvalidHexDigit { char: char, position: usize },

    #[error("illegal base64 byte at position {position}")]
    IllegalBase64Byte { position: usize },

    #[error("invalid number: '{token}'")]
    NotANumber { token: String },

    #[error("invalid byte value {value} at index {index}")]
    InvalidByteValue { value: i64, index: usize },

    #[error("unknown encoding: {name}")]
    UnknownEncoding { name: String },
}

impl DecodeError {
    // Helper constructors for common error patterns
    pub fn invalid_hex_digit(ch: char, pos: usize) -> Self {
        Self::InvalidHexDigit {
            char: ch,
            position: pos,
        }
    }

    pub fn illegal_base64_byte(pos: usize) -> Self {
        Self::IllegalBase64Byte { position: pos }
    }

    pub fn not_a_number(token: impl Into<String>) -> Self {
        Self::NotANumber {
            token: token.into(),
        }
    }

    pub fn invalid_byte_value(value: i64, index: usize) -> Self {
        Self::InvalidByteValue { value, index }
    }

    pub fn unknown_encoding(name: impl Into<String>) -> Self {
        Self::UnknownEncoding { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
