use crate::error::CodecError;

/// Core trait for string list codecs.
///
/// Every scheme (like `BytePrefixed` or `WordPrefixed`) must be able to:
/// 1.  `encode`: turn an ordered list of strings into a single byte buffer.
/// 2.  `decode`: turn such a buffer back into the original list.
///
/// For any list whose strings fit the scheme's length limit,
/// `decode(encode(list)) == list`.
pub trait Codec {
    /// Append the encoding of `strs` to `out`.
    ///
    /// On error `out` may hold a partial encoding of the strings before the
    /// offending one.
    fn encode_into(&self, strs: &[&str], out: &mut Vec<u8>) -> Result<(), CodecError>;

    /// Exact number of bytes `encode` will produce for `strs`.
    fn encoded_len(&self, strs: &[&str]) -> Result<usize, CodecError>;

    fn decode(&self, data: &[u8]) -> Result<Vec<String>, CodecError>;

    fn encode(&self, strs: &[&str]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(self.encoded_len(strs)?);
        self.encode_into(strs, &mut out)?;
        Ok(out)
    }

    /// Convenience for owned lists.
    fn encode_owned(&self, strs: &[String]) -> Result<Vec<u8>, CodecError> {
        let refs: Vec<&str> = strs.iter().map(String::as_str).collect();
        self.encode(&refs)
    }
}
