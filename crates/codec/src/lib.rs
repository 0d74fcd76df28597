//! Length-prefixed encoding of string lists.
//!
//! Serializes an ordered list of strings into one byte buffer and back,
//! using either a one-byte length prefix ([`BytePrefixed`]) or a two-byte
//! big-endian character count ([`WordPrefixed`]). Malformed buffers and
//! over-long strings are reported as [`CodecError`], never panics.
//!
//! ```
//! use drillbook_codec::{Codec, CodecStrategy};
//!
//! let encoded = CodecStrategy::BytePrefixed.encode(&["ab", "c"]).unwrap();
//! assert_eq!(encoded, [2, b'a', b'b', 1, b'c']);
//! assert_eq!(CodecStrategy::BytePrefixed.decode(&encoded).unwrap(), ["ab", "c"]);
//! ```

mod error;
mod frames;
mod strategies;
mod traits;
mod utils;

pub use error::CodecError as Error;
pub use error::{CodecError, ErrorKind, Malformed};
pub use frames::Frames;
pub use strategies::{BytePrefixed, WordPrefixed, BYTE_PREFIX_MAX_LEN, WORD_PREFIX_MAX_LEN};
pub use traits::Codec;

use serde::{Deserialize, Serialize};

/// Length-prefix schemes for encoding string lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecStrategy {
    /// One byte of byte length per string (max 255 bytes).
    #[serde(rename = "byte-prefix")]
    BytePrefixed,
    /// Two big-endian bytes of character count per string (max 65535 characters).
    #[serde(rename = "word-prefix")]
    WordPrefixed,
}

impl CodecStrategy {
    /// Encode using the selected scheme.
    pub fn encode(&self, strs: &[&str]) -> Result<Vec<u8>, CodecError> {
        match self {
            CodecStrategy::BytePrefixed => BytePrefixed.encode(strs),
            CodecStrategy::WordPrefixed => WordPrefixed.encode(strs),
        }
    }

    /// Decode using the selected scheme.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<String>, CodecError> {
        match self {
            CodecStrategy::BytePrefixed => BytePrefixed.decode(data),
            CodecStrategy::WordPrefixed => WordPrefixed.decode(data),
        }
    }

    /// Decode lazily, borrowing each string from `data`.
    pub fn frames<'a>(&self, data: &'a [u8]) -> Frames<'a> {
        Frames::new(*self, data)
    }

    /// Largest string the scheme accepts, in its own unit (bytes for
    /// `BytePrefixed`, characters for `WordPrefixed`).
    pub const fn max_len(&self) -> usize {
        match self {
            CodecStrategy::BytePrefixed => BYTE_PREFIX_MAX_LEN,
            CodecStrategy::WordPrefixed => WORD_PREFIX_MAX_LEN,
        }
    }

    /// Bytes of length prefix in front of every string.
    pub const fn prefix_width(&self) -> usize {
        match self {
            CodecStrategy::BytePrefixed => 1,
            CodecStrategy::WordPrefixed => 2,
        }
    }

    pub(crate) fn split_frame<'a>(
        &self,
        rest: &'a [u8],
        offset: usize,
    ) -> Result<(&'a str, usize), Malformed> {
        match self {
            CodecStrategy::BytePrefixed => BytePrefixed::split_frame(rest, offset),
            CodecStrategy::WordPrefixed => WordPrefixed::split_frame(rest, offset),
        }
    }
}

impl Default for CodecStrategy {
    fn default() -> Self {
        Self::WordPrefixed
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BytePrefixed => write!(f, "byte-prefix"),
            Self::WordPrefixed => write!(f, "word-prefix"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "byte-prefix" | "a" | "v1" => Ok(Self::BytePrefixed),
            "word-prefix" | "b" | "v2" => Ok(Self::WordPrefixed),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: byte-prefix, word-prefix"
            )),
        }
    }
}

impl Codec for CodecStrategy {
    fn encode_into(&self, strs: &[&str], out: &mut Vec<u8>) -> Result<(), CodecError> {
        match self {
            CodecStrategy::BytePrefixed => BytePrefixed.encode_into(strs, out),
            CodecStrategy::WordPrefixed => WordPrefixed.encode_into(strs, out),
        }
    }

    fn encoded_len(&self, strs: &[&str]) -> Result<usize, CodecError> {
        match self {
            CodecStrategy::BytePrefixed => BytePrefixed.encoded_len(strs),
            CodecStrategy::WordPrefixed => WordPrefixed.encoded_len(strs),
        }
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<String>, CodecError> {
        CodecStrategy::decode(self, data)
    }
}
