use std::fmt;

use crate::codec::Encoding;
use crate::error::Result;
use crate::pipeline::Pipeline;

/// Immutable owned byte sequence; the value type every transcoding
/// operation produces or consumes. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Wraps bytes verbatim; always succeeds.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { data: bytes.into() }
    }

    /// Decodes `text` with a single encoding.
    pub fn from_text(text: &str, encoding: Encoding) -> Result<Self> {
        Ok(Self {
            data: encoding.decode(text)?,
        })
    }

    /// Runs the pipeline's decode steps over `text` in order; the first
    /// failing step's error is returned and no buffer is produced.
    pub fn from_text_pipeline(text: &str, pipeline: &Pipeline) -> Result<Self> {
        pipeline.run(text)
    }

    /// Borrowed read-only view of the owned sequence; no copy.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Renders the buffer in the given encoding's textual form.
    pub fn to_text(&self, encoding: Encoding) -> String {
        encoding.encode(&self.data)
    }

    pub fn to_ascii(&self) -> String {
        self.to_text(Encoding::Ascii)
    }

    pub fn to_hex(&self) -> String {
        self.to_text(Encoding::Hex)
    }

    pub fn to_base64(&self) -> String {
        self.to_text(Encoding::Base64Standard)
    }

    pub fn to_base64_url(&self) -> String {
        self.to_text(Encoding::Base64Url)
    }

    pub fn to_debug_list(&self) -> String {
        self.to_text(Encoding::DebugList)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
