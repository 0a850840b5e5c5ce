mod ascii;
mod base64;
mod debug_list;
mod hex;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DecodeError, Result};

/// A stateless codec strategy converting between bytes and one textual form.
///
/// The set is closed; dispatch goes through a fixed table of function
/// pointers indexed by the discriminant rather than trait objects. Every
/// variant's `encode` is total; `decode` is the only fallible direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Encoding {
    /// Identity reinterpretation of text bytes; no charset validation.
    Ascii,
    /// Lowercase hex out, case-insensitive hex in.
    Hex,
    /// RFC 4648 standard alphabet with `=` padding.
    Base64Standard,
    /// RFC 4648 URL-safe alphabet, unpadded.
    Base64Url,
    /// Go-style byte slice printing, e.g. `[104 101 108 108 111]`.
    DebugList,
}

struct Vtable {
    decode: fn(&[u8]) -> Result<Vec<u8>>,
    encode: fn(&[u8]) -> String,
}

// Indexed by discriminant; order must match the enum declaration.
const VTABLES: [Vtable; 5] = [
    Vtable {
        decode: ascii::decode,
        encode: ascii::encode,
    },
    Vtable {
        decode: hex::decode,
        encode: hex::encode,
    },
    Vtable {
        decode: base64::decode_standard,
        encode: base64::encode_standard,
    },
    Vtable {
        decode: base64::decode_url,
        encode: base64::encode_url,
    },
    Vtable {
        decode: debug_list::decode,
        encode: debug_list::encode,
    },
];

impl Encoding {
    /// Every variant, in declaration order.
    pub const ALL: [Encoding; 5] = [
        Encoding::Ascii,
        Encoding::Hex,
        Encoding::Base64Standard,
        Encoding::Base64Url,
        Encoding::DebugList,
    ];

    fn vtable(self) -> &'static Vtable {
        &VTABLES[self as usize]
    }

    /// Decodes `text` into bytes. Fails with the variant's structured error
    /// on the first offending character.
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        self.decode_bytes(text.as_bytes())
    }

    /// Decodes from raw bytes. Pipeline steps use this form since
    /// intermediate step output is not guaranteed to be valid UTF-8.
    pub fn decode_bytes(self, input: &[u8]) -> Result<Vec<u8>> {
        (self.vtable().decode)(input)
    }

    /// Encodes bytes into this variant's textual form. Never fails.
    pub fn encode(self, input: &[u8]) -> String {
        (self.vtable().encode)(input)
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn meta(self) -> EncodingMeta {
        match self {
            Encoding::Ascii => EncodingMeta {
                name: "ascii",
                aliases: &["text", "raw"],
                alphabet: None,
                padding: PaddingRule::None,
                description: "Plain text, bytes taken verbatim",
            },
            Encoding::Hex => EncodingMeta {
                name: "hex",
                aliases: &["base16"],
                alphabet: Some("0123456789abcdef"),
                padding: PaddingRule::None,
                description: "RFC 4648 Base16 lowercase, case-insensitive decode",
            },
            Encoding::Base64Standard => EncodingMeta {
                name: "base64",
                aliases: &["b64", "base64std"],
                alphabet: Some(
                    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
                ),
                padding: PaddingRule::Required,
                description: "RFC 4648 Base64 with required padding",
            },
            Encoding::Base64Url => EncodingMeta {
                name: "base64url",
                aliases: &["b64url", "url64"],
                alphabet: Some(
                    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
                ),
                padding: PaddingRule::None,
                description: "RFC 4648 Base64url without padding",
            },
            Encoding::DebugList => EncodingMeta {
                name: "debuglist",
                aliases: &["bytelist"],
                alphabet: None,
                padding: PaddingRule::None,
                description: "Decimal byte list in brackets, Go slice style",
            },
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = DecodeError;

    /// Case-insensitive lookup by name or alias.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase();
        Encoding::ALL
            .into_iter()
            .find(|e| {
                let meta = e.meta();
                meta.name == wanted || meta.aliases.contains(&wanted.as_str())
            })
            .ok_or_else(|| DecodeError::unknown_encoding(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaddingRule {
    None,
    Required,
}

#[derive(Debug, Clone, Serialize)]
pub struct EncodingMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: Option<&'static str>,
    pub padding: PaddingRule,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_variant() {
        let data = &[0x68, 0x65, 0x6c, 0x6c, 0x6f];
        assert_eq!(Encoding::Hex.encode(data), "68656c6c6f");
        assert_eq!(Encoding::Base64Standard.encode(data), "aGVsbG8=");
        assert_eq!(Encoding::Base64Url.encode(data), "aGVsbG8");
        assert_eq!(Encoding::DebugList.encode(data), "[104 101 108 108 111]");
        assert_eq!(Encoding::Ascii.encode(data), "hello");
    }

    #[test]
    fn test_roundtrip_all_variants() {
        let data = b"hello";
        for encoding in Encoding::ALL {
            let text = encoding.encode(data);
            assert_eq!(
                encoding.decode(&text).unwrap(),
                data.to_vec(),
                "round trip failed for {}",
                encoding
            );
        }
    }

    #[test]
    fn test_roundtrip_empty() {
        for encoding in Encoding::ALL {
            let text = encoding.encode(&[]);
            assert_eq!(encoding.decode(&text).unwrap(), Vec::<u8>::new());
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("hex".parse::<Encoding>().unwrap(), Encoding::Hex);
        assert_eq!("base64".parse::<Encoding>().unwrap(), Encoding::Base64Standard);
        assert_eq!("base64url".parse::<Encoding>().unwrap(), Encoding::Base64Url);
        assert_eq!("debuglist".parse::<Encoding>().unwrap(), Encoding::DebugList);
        assert_eq!("ascii".parse::<Encoding>().unwrap(), Encoding::Ascii);
    }

    #[test]
    fn test_lookup_by_alias_case_insensitive() {
        assert_eq!("Base16".parse::<Encoding>().unwrap(), Encoding::Hex);
        assert_eq!("B64URL".parse::<Encoding>().unwrap(), Encoding::Base64Url);
    }

    #[test]
    fn test_lookup_unknown() {
        let result = "base58".parse::<Encoding>();
        assert!(matches!(result, Err(DecodeError::UnknownEncoding { .. })));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Encoding::ALL
            .iter()
            .flat_map(|e| {
                let meta = e.meta();
                std::iter::once(meta.name).chain(meta.aliases.iter().copied())
            })
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_meta_serializes() {
        let json = serde_json::to_value(Encoding::Hex.meta()).unwrap();
        assert_eq!(json["name"], "hex");
        assert_eq!(json["padding"], "None");
        assert_eq!(json["alphabet"], "0123456789abcdef");
    }
}
