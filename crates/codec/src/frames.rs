use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::CodecError;
use crate::CodecStrategy;

/// Lazy, zero-copy decoder over an encoded buffer.
///
/// Yields each string as a slice borrowed from the buffer. The first
/// malformed frame is yielded as an error and ends the iteration.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    strategy: CodecStrategy,
    data: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Frames<'a> {
    pub fn new(strategy: CodecStrategy, data: &'a [u8]) -> Self {
        Self {
            strategy,
            data,
            offset: 0,
            done: false,
        }
    }

    /// Bytes consumed by the frames yielded so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The not yet decoded tail of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.offset..).unwrap_or_default()
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Result<&'a str, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let rest = self.remaining();
        if rest.is_empty() {
            self.done = true;
            return None;
        }
        match self.strategy.split_frame(rest, self.offset) {
            Ok((s, consumed)) => {
                self.offset += consumed;
                Some(Ok(s))
            }
            Err(malformed) => {
                self.done = true;
                debug!(target: "drillbook::codec", scheme = %self.strategy, %malformed, "rejected malformed buffer");
                Some(Err(malformed.into()))
            }
        }
    }
}

impl FusedIterator for Frames<'_> {}

/// Decode every frame of `data` into owned strings.
pub(crate) fn decode_owned(strategy: CodecStrategy, data: &[u8]) -> Result<Vec<String>, CodecError> {
    let strs = Frames::new(strategy, data)
        .map(|frame| frame.map(str::to_owned))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(target: "drillbook::codec", scheme = %strategy, strings = strs.len(), bytes = data.len(), "decoded string list");
    Ok(strs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Codec, ErrorKind};

    #[test]
    fn test_frames_borrow_from_buffer() {
        let encoded = CodecStrategy::BytePrefixed
            .encode(&["alpha", "beta"])
            .expect("Encoding failed");
        let frames: Vec<&str> = Frames::new(CodecStrategy::BytePrefixed, &encoded)
            .collect::<Result<_, _>>()
            .expect("Decoding failed");
        assert_eq!(frames, ["alpha", "beta"]);

        let first = frames[0].as_ptr() as usize;
        let base = encoded.as_ptr() as usize;
        assert_eq!(first - base, 1);
    }

    #[test]
    fn test_frames_stop_after_error() {
        let data = [0, 1, b'a', 0, 9, b'b'];
        let mut frames = Frames::new(CodecStrategy::WordPrefixed, &data);

        assert_eq!(frames.next(), Some(Ok("a")));
        assert_eq!(frames.offset(), 3);
        let err = frames.next().expect("error frame").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(frames.next(), None);
        assert_eq!(frames.next(), None);
        assert_eq!(frames.remaining(), &[0, 9, b'b']);
    }

    #[test]
    fn test_frames_empty_buffer() {
        let mut frames = Frames::new(CodecStrategy::WordPrefixed, &[]);
        assert_eq!(frames.next(), None);
        assert_eq!(frames.offset(), 0);
    }

    #[test]
    fn test_partial_consumption() {
        let encoded = crate::WordPrefixed
            .encode(&["one", "two", "three"])
            .expect("Encoding failed");
        let mut frames = Frames::new(CodecStrategy::WordPrefixed, &encoded);
        assert_eq!(frames.next(), Some(Ok("one")));
        assert_eq!(frames.remaining().len(), encoded.len() - 5);
    }
}
