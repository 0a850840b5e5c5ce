//! Byte/text transcoding: convert a byte sequence to and from plain text,
//! hex, base64 (standard and URL-safe), and a Go-style debug list, with an
//! ordered decode [`Pipeline`] for layered reconstruction.
//!
//! ```
//! use bytepipe::{ByteBuffer, Encoding};
//!
//! let buf = ByteBuffer::from_text("68656c6c6f", Encoding::Hex)?;
//! assert_eq!(buf.to_base64(), "aGVsbG8=");
//! assert_eq!(buf.to_debug_list(), "[104 101 108 108 111]");
//! # Ok::<(), bytepipe::DecodeError>(())
//! ```

pub mod buffer;
pub mod codec;
pub mod error;
pub mod pipeline;

pub use buffer::ByteBuffer;
pub use codec::{Encoding, EncodingMeta, PaddingRule};
pub use error::{DecodeError, Result};
pub use pipeline::Pipeline;
