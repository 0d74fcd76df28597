use crate::error::Malformed;

/// Width in bytes of the UTF-8 sequence introduced by `lead`, or `None` if
/// `lead` cannot start a sequence.
#[inline]
pub fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Reject a string whose length (in the scheme's unit) exceeds `max`.
#[inline]
pub fn check_len(index: usize, len: usize, max: usize) -> Result<(), Malformed> {
    if len > max {
        return Err(Malformed::TooLong { index, len, max });
    }
    Ok(())
}

/// Validate `bytes` as UTF-8, reporting the first bad byte relative to
/// `offset` (the buffer position of `bytes[0]`).
pub fn str_at(bytes: &[u8], offset: usize) -> Result<&str, Malformed> {
    std::str::from_utf8(bytes).map_err(|e| Malformed::InvalidUtf8 {
        offset: offset + e.valid_up_to(),
    })
}

/// Number of bytes spanned by the first `count` characters of `body`.
///
/// `offset` is the buffer position of `body[0]` and `prefix_offset` the
/// position of the length prefix, used for error reporting.
pub fn char_span(
    body: &[u8],
    count: usize,
    offset: usize,
    prefix_offset: usize,
) -> Result<usize, Malformed> {
    let mut pos = 0;
    for walked in 0..count {
        let Some(&lead) = body.get(pos) else {
            return Err(Malformed::TruncatedBody {
                offset: prefix_offset,
                declared: count,
                available: walked,
            });
        };
        let width = utf8_width(lead).ok_or(Malformed::InvalidUtf8 {
            offset: offset + pos,
        })?;
        if pos + width > body.len() {
            return Err(Malformed::TruncatedBody {
                offset: prefix_offset,
                declared: count,
                available: walked,
            });
        }
        pos += width;
    }
    Ok(pos)
}
