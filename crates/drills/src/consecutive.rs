use std::collections::HashSet;

/// Length of the longest run of consecutive integers in `nums`, in any order.
///
/// Only values that start a run (no predecessor in the set) are walked, so
/// the whole scan stays linear.
pub fn longest_consecutive(nums: &[i64]) -> usize {
    let set: HashSet<i64> = nums.iter().copied().collect();

    let mut longest = 0;
    for &n in &set {
        if n.checked_sub(1).is_some_and(|prev| set.contains(&prev)) {
            continue;
        }
        let mut streak = 1;
        let mut current = n;
        while let Some(next) = current.checked_add(1).filter(|next| set.contains(next)) {
            current = next;
            streak += 1;
        }
        longest = longest.max(streak);
    }
    longest
}
