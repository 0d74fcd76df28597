use tracing::trace;

use crate::error::{CodecError, Malformed};
use crate::frames::decode_owned;
use crate::traits::Codec;
use crate::utils::{char_span, check_len, str_at};
use crate::CodecStrategy;

/// Largest string (in characters) `WordPrefixed` can carry.
pub const WORD_PREFIX_MAX_LEN: usize = u16::MAX as usize;

const PREFIX_WIDTH: usize = 2;

/// Scheme B: big-endian `u16` character count, then the UTF-8 bytes.
///
/// The prefix counts Unicode scalar values, not bytes, so the decoder walks
/// the body one UTF-8 sequence at a time to find where the string ends.
/// This lifts the 255-byte ceiling of `BytePrefixed` to 65535 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordPrefixed;

impl WordPrefixed {
    pub(crate) fn split_frame(rest: &[u8], offset: usize) -> Result<(&str, usize), Malformed> {
        let (prefix, body) = match rest {
            [hi, lo, body @ ..] => ([*hi, *lo], body),
            _ => {
                return Err(Malformed::TruncatedPrefix {
                    offset,
                    width: PREFIX_WIDTH,
                    available: rest.len(),
                })
            }
        };
        let count = u16::from_be_bytes(prefix) as usize;
        let body_offset = offset + PREFIX_WIDTH;

        let span = char_span(body, count, body_offset, offset)?;
        let s = str_at(&body[..span], body_offset)?;
        Ok((s, PREFIX_WIDTH + span))
    }
}

impl Codec for WordPrefixed {
    fn encode_into(&self, strs: &[&str], out: &mut Vec<u8>) -> Result<(), CodecError> {
        for (index, s) in strs.iter().enumerate() {
            let count = s.chars().count();
            check_len(index, count, WORD_PREFIX_MAX_LEN)?;
            out.extend_from_slice(&(count as u16).to_be_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        trace!(target: "drillbook::codec", scheme = "word-prefix", strings = strs.len(), "encoded string list");
        Ok(())
    }

    fn encoded_len(&self, strs: &[&str]) -> Result<usize, CodecError> {
        let mut total = 0;
        for (index, s) in strs.iter().enumerate() {
            check_len(index, s.chars().count(), WORD_PREFIX_MAX_LEN)?;
            total += PREFIX_WIDTH + s.len();
        }
        Ok(total)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<String>, CodecError> {
        decode_owned(CodecStrategy::WordPrefixed, data)
    }
}
