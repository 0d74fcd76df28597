use std::collections::HashMap;

/// Indices `(i, j)`, `i < j`, of two values summing to `target`.
///
/// Scans once, remembering where each value was last seen, so the pair
/// returned is the one whose second element comes first. `None` if no pair
/// exists or the sum would overflow.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &value) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&i) = seen.get(&complement) {
                return Some((i, j));
            }
        }
        seen.insert(value, j);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_cases() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
    }

    #[test]
    fn test_no_pair() {
        assert_eq!(two_sum(&[1, 2, 3], 7), None);
        assert_eq!(two_sum(&[], 0), None);
        assert_eq!(two_sum(&[5], 10), None);
    }

    #[test]
    fn test_negative_and_extreme_values() {
        assert_eq!(two_sum(&[-4, 10, 8], 4), Some((0, 2)));
        assert_eq!(two_sum(&[i64::MIN, 1], i64::MAX), None);
        assert_eq!(two_sum(&[i64::MAX, -1], i64::MAX - 1), Some((0, 1)));
    }
}
