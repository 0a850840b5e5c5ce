use crate::buffer::ByteBuffer;
use crate::codec::Encoding;
use crate::error::Result;

/// An ordered list of bound decode steps applied when reconstructing bytes
/// from text. Each step decodes the previous step's output; the first
/// failure aborts the run and surfaces that step's error unchanged.
///
/// The empty pipeline is the identity: the text's bytes are taken verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Encoding>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn with_steps(steps: impl IntoIterator<Item = Encoding>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Appends a decode step. Steps run in the order they were added.
    #[must_use]
    pub fn then(mut self, encoding: Encoding) -> Self {
        self.steps.push(encoding);
        self
    }

    pub fn steps(&self) -> &[Encoding] {
        &self.steps
    }

    /// Runs every step in order over the text's bytes. Intermediate output
    /// feeds the next step as raw bytes; partial results never escape.
    pub fn run(&self, text: &str) -> Result<ByteBuffer> {
        let mut current = text.as_bytes().to_vec();
        for step in &self.steps {
            current = step.decode_bytes(&current)?;
        }
        Ok(ByteBuffer::from_bytes(current))
    }
}

impl From<Encoding> for Pipeline {
    fn from(encoding: Encoding) -> Self {
        Self {
            steps: vec![encoding],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let buf = Pipeline::new().run("hello").unwrap();
        assert_eq!(buf.as_bytes(), b"hello");
    }

    #[test]
    fn test_single_step() {
        let buf = Pipeline::new()
            .then(Encoding::Hex)
            .run("68656c6c6f")
            .unwrap();
        assert_eq!(buf.as_bytes(), b"hello");
    }

    #[test]
    fn test_layered_decode() {
        // hex text wrapped in base64: undo the outer transform first.
        let hex = Encoding::Hex.encode(b"hello");
        let wrapped = Encoding::Base64Standard.encode(hex.as_bytes());
        let buf = Pipeline::new()
            .then(Encoding::Base64Standard)
            .then(Encoding::Hex)
            .run(&wrapped)
            .unwrap();
        assert_eq!(buf.as_bytes(), b"hello");
    }

    #[test]
    fn test_first_failure_wins() {
        // The base64 step fails before the hex step ever runs; the surfaced
        // error belongs to the failing step.
        let result = Pipeline::new()
            .then(Encoding::Base64Standard)
            .then(Encoding::Hex)
            .run("not base64!");
        assert!(matches!(
            result,
            Err(DecodeError::IllegalBase64Byte { .. })
        ));
    }

    #[test]
    fn test_later_step_error_surfaces() {
        // Valid base64 whose payload is not valid hex.
        let wrapped = Encoding::Base64Standard.encode(b"xyz");
        let result = Pipeline::new()
            .then(Encoding::Base64Standard)
            .then(Encoding::Hex)
            .run(&wrapped);
        assert_eq!(result, Err(DecodeError::OddLengthHex));
    }

    #[test]
    fn test_with_steps_order() {
        let pipeline =
            Pipeline::with_steps([Encoding::Base64Standard, Encoding::Hex]);
        assert_eq!(
            pipeline.steps(),
            &[Encoding::Base64Standard, Encoding::Hex]
        );
    }

    #[test]
    fn test_from_single_encoding() {
        let pipeline = Pipeline::from(Encoding::DebugList);
        let buf = pipeline.run("[104 105]").unwrap();
        assert_eq!(buf.as_bytes(), b"hi");
    }
}
