/// Sort `items` ascending in place by repeated selection of the minimum.
///
/// Quadratic comparisons, at most `n - 1` swaps. Not stable.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if items[j] < items[min] {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}
