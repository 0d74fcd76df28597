use std::collections::HashSet;
use std::hash::Hash;

/// True if any value occurs more than once.
pub fn contains_duplicate<T: Hash + Eq>(items: &[T]) -> bool {
    if items.len() <= 1 {
        return false;
    }
    let mut seen = HashSet::with_capacity(items.len());
    // insert returns false on the second sighting
    !items.iter().all(|item| seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_duplicate() {
        let cases: [(&[i32], bool); 5] = [
            (&[1, 2, 3, 1], true),
            (&[1, 2, 3, 4], false),
            (&[1, 1, 1, 3, 3, 4, 3, 2, 4, 2], true),
            (&[], false),
            (&[1], false),
        ];
        for (nums, expected) in cases {
            assert_eq!(contains_duplicate(nums), expected, "input {nums:?}");
        }
    }

    #[test]
    fn test_non_numeric_items() {
        assert!(contains_duplicate(&["a", "b", "a"]));
        assert!(!contains_duplicate(&['x', 'y', 'z']));
    }
}
