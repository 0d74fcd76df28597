use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] Malformed),
}

/// Broad classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input violates the scheme's length limits or framing rules.
    MalformedInput,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::MalformedInput(_) => ErrorKind::MalformedInput,
        }
    }

    /// The underlying detail of a malformed-input failure.
    pub fn detail(&self) -> &Malformed {
        match self {
            CodecError::MalformedInput(m) => m,
        }
    }
}

/// What exactly was wrong with the input.
///
/// Offsets are byte positions into the encoded buffer; `index` is the
/// position of the offending string in the list being encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("string {index} has length {len}, scheme allows at most {max}")]
    TooLong { index: usize, len: usize, max: usize },

    #[error("length prefix at offset {offset} needs {width} bytes, only {available} left")]
    TruncatedPrefix {
        offset: usize,
        width: usize,
        available: usize,
    },

    #[error("string at offset {offset} declares length {declared}, only {available} available")]
    TruncatedBody {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
}
