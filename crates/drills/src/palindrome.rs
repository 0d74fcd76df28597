/// True if `s` reads the same both ways, ignoring case and anything that
/// is not an ASCII letter or digit.
pub fn is_palindrome(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return true;
    }
    let (mut i, mut j) = (0, bytes.len() - 1);
    while i < j {
        if !bytes[i].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }
        if !bytes[j].is_ascii_alphanumeric() {
            j -= 1;
            continue;
        }
        if !bytes[i].eq_ignore_ascii_case(&bytes[j]) {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("race a car"));
        assert!(is_palindrome(" "));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("0P"));
    }

    #[test]
    fn test_non_ascii_is_skipped() {
        assert!(is_palindrome("ab—ba"));
        assert!(is_palindrome("é"));
    }
}
