/// True if `abbr` abbreviates `word`.
///
/// Letters in `abbr` must match `word` one for one; a decimal number skips
/// that many characters. Numbers may not have leading zeros (so `0` alone
/// is also invalid), and a skip past the end of `word` fails.
pub fn valid_word_abbreviation(word: &str, abbr: &str) -> bool {
    let word: Vec<char> = word.chars().collect();
    let mut i = 0usize;
    let mut abbr = abbr.chars().peekable();

    while let Some(c) = abbr.next() {
        match c.to_digit(10) {
            Some(0) => return false,
            Some(first) => {
                let mut skip = first as usize;
                while let Some(d) = abbr.peek().and_then(|c| c.to_digit(10)) {
                    skip = match skip.checked_mul(10).and_then(|s| s.checked_add(d as usize)) {
                        Some(s) => s,
                        None => return false,
                    };
                    abbr.next();
                }
                i = i.saturating_add(skip);
                if i > word.len() {
                    return false;
                }
            }
            None => {
                if word.get(i) != Some(&c) {
                    return false;
                }
                i += 1;
            }
        }
    }
    i == word.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_abbreviations() {
        assert!(valid_word_abbreviation("internationalization", "i12iz4n"));
        assert!(valid_word_abbreviation("apple", "a3e"));
        assert!(valid_word_abbreviation("substitution", "12"));
        assert!(valid_word_abbreviation("substitution", "substitution"));
        assert!(valid_word_abbreviation("", ""));
    }

    #[test]
    fn test_invalid_abbreviations() {
        assert!(!valid_word_abbreviation("apple", "a2e"));
        assert!(!valid_word_abbreviation("substitution", "s010n"));
        assert!(!valid_word_abbreviation("substitution", "s0ubstitution"));
        assert!(!valid_word_abbreviation("a", "2"));
        assert!(!valid_word_abbreviation("", "0"));
        assert!(!valid_word_abbreviation("word", "wor"));
    }

    #[test]
    fn test_huge_skip_does_not_overflow() {
        assert!(!valid_word_abbreviation("abc", "99999999999999999999999999"));
    }

    #[test]
    fn test_counts_characters() {
        assert!(valid_word_abbreviation("naïve", "n3e"));
    }
}
