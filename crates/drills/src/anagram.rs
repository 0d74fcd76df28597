//! Anagram checks and grouping.
//!
//! Both functions compare full Unicode scalar values, not just `a`..=`z`.

use std::collections::HashMap;

/// True if `t` is a rearrangement of the characters of `s`.
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }

    let mut counts: HashMap<char, isize> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in t.chars() {
        match counts.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    counts.values().all(|&count| count == 0)
}

/// Group words that are anagrams of each other.
///
/// Groups appear in the order their first member appears in `words`, and
/// each group keeps its members in input order.
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut slots: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for &word in words {
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_string());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_anagram() {
        assert!(is_anagram("anagram", "nagaram"));
        assert!(!is_anagram("rat", "car"));
        assert!(!is_anagram("ab", "a"));
        assert!(!is_anagram("aab", "abb"));
        assert!(is_anagram("", ""));
    }

    #[test]
    fn test_is_anagram_unicode() {
        assert!(is_anagram("größe", "ßeörg"));
        assert!(!is_anagram("é", "e\u{301}"));
    }

    #[test]
    fn test_group_anagrams_order() {
        let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
        assert_eq!(
            groups,
            vec![
                vec!["eat", "tea", "ate"],
                vec!["tan", "nat"],
                vec!["bat"],
            ]
        );
    }

    #[test]
    fn test_group_anagrams_edges() {
        assert!(group_anagrams(&[]).is_empty());
        assert_eq!(group_anagrams(&[""]), vec![vec![""]]);
        assert_eq!(group_anagrams(&["a", "a"]), vec![vec!["a", "a"]]);
    }
}
