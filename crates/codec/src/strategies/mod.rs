mod byte_prefixed;
mod word_prefixed;

pub use byte_prefixed::{BytePrefixed, BYTE_PREFIX_MAX_LEN};
pub use word_prefixed::{WordPrefixed, WORD_PREFIX_MAX_LEN};
