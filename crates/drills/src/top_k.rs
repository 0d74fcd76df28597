use std::collections::HashMap;

/// The `k` most frequent values, most frequent first.
///
/// Counts with a map, then buckets values by count so selection is linear
/// in the input. Values sharing a count come out in ascending order. Returns
/// fewer than `k` values when there are fewer distinct values.
pub fn top_k_frequent(nums: &[i64], k: usize) -> Vec<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &n in nums {
        *counts.entry(n).or_insert(0) += 1;
    }

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); nums.len() + 1];
    for (value, count) in counts {
        buckets[count].push(value);
    }

    let mut result = Vec::with_capacity(k.min(nums.len()));
    for bucket in buckets.iter_mut().rev() {
        bucket.sort_unstable();
        for &value in bucket.iter() {
            if result.len() == k {
                return result;
            }
            result.push(value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_frequent() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[1], 1), vec![1]);
    }

    #[test]
    fn test_ties_are_ascending() {
        assert_eq!(top_k_frequent(&[4, 4, 9, 9, -1, -1, 7], 3), vec![-1, 4, 9]);
        assert_eq!(top_k_frequent(&[4, 4, 9, 9, -1, -1, 7], 2), vec![-1, 4]);
    }

    #[test]
    fn test_k_out_of_range() {
        assert!(top_k_frequent(&[1, 2, 3], 0).is_empty());
        assert_eq!(top_k_frequent(&[2, 1, 2], 10), vec![2, 1]);
        assert!(top_k_frequent(&[], 3).is_empty());
    }
}
