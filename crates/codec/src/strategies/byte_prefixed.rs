use tracing::trace;

use crate::error::{CodecError, Malformed};
use crate::frames::decode_owned;
use crate::traits::Codec;
use crate::utils::{check_len, str_at};
use crate::CodecStrategy;

/// Largest string (in bytes) `BytePrefixed` can carry.
pub const BYTE_PREFIX_MAX_LEN: usize = u8::MAX as usize;

/// Scheme A: one length byte, then the string's raw UTF-8 bytes.
///
/// `["ab", "c"]` encodes to `[2, b'a', b'b', 1, b'c']`. Strings longer than
/// 255 bytes are rejected rather than truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytePrefixed;

impl BytePrefixed {
    /// Split the next string off `rest`, which starts at buffer position
    /// `offset`. Returns the string and the bytes consumed.
    pub(crate) fn split_frame(rest: &[u8], offset: usize) -> Result<(&str, usize), Malformed> {
        let Some((&len, body)) = rest.split_first() else {
            return Err(Malformed::TruncatedPrefix {
                offset,
                width: 1,
                available: 0,
            });
        };
        let len = len as usize;
        let bytes = body.get(..len).ok_or(Malformed::TruncatedBody {
            offset,
            declared: len,
            available: body.len(),
        })?;
        let s = str_at(bytes, offset + 1)?;
        Ok((s, 1 + len))
    }
}

impl Codec for BytePrefixed {
    fn encode_into(&self, strs: &[&str], out: &mut Vec<u8>) -> Result<(), CodecError> {
        for (index, s) in strs.iter().enumerate() {
            check_len(index, s.len(), BYTE_PREFIX_MAX_LEN)?;
            out.push(s.len() as u8);
            out.extend_from_slice(s.as_bytes());
        }
        trace!(target: "drillbook::codec", scheme = "byte-prefix", strings = strs.len(), "encoded string list");
        Ok(())
    }

    fn encoded_len(&self, strs: &[&str]) -> Result<usize, CodecError> {
        let mut total = 0;
        for (index, s) in strs.iter().enumerate() {
            check_len(index, s.len(), BYTE_PREFIX_MAX_LEN)?;
            total += 1 + s.len();
        }
        Ok(total)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<String>, CodecError> {
        decode_owned(CodecStrategy::BytePrefixed, data)
    }
}
