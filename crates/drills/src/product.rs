use crate::errors::DrillError;

/// For each index, the product of every other element, without division.
///
/// Zeros are handled up front: two or more make every product zero, and a
/// single zero leaves only its own position non-zero. Otherwise prefix
/// products are filled left to right and suffix products folded in right to
/// left, widened to `i128`. Without zeros the magnitudes only grow, so an
/// intermediate that does not fit means the result it feeds does not fit.
///
/// An error is returned only when some result is outside the `i64` range.
pub fn product_except_self(nums: &[i64]) -> Result<Vec<i64>, DrillError> {
    let mut zeros = nums
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n == 0)
        .map(|(i, _)| i);

    match (zeros.next(), zeros.next()) {
        (Some(_), Some(_)) => Ok(vec![0; nums.len()]),
        (Some(zero), None) => {
            let mut result = vec![0; nums.len()];
            let others = nums
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != zero)
                .map(|(_, &n)| n);
            result[zero] = checked_product(others).ok_or(DrillError::Overflow { index: zero })?;
            Ok(result)
        }
        _ => prefix_suffix(nums),
    }
}

fn checked_product(mut values: impl Iterator<Item = i64>) -> Option<i64> {
    let wide = values.try_fold(1i128, |acc, n| acc.checked_mul(n as i128))?;
    i64::try_from(wide).ok()
}

/// Prefix/suffix pass for input without zeros.
fn prefix_suffix(nums: &[i64]) -> Result<Vec<i64>, DrillError> {
    let len = nums.len();
    let mut prefix = vec![1i128; len];
    for i in 1..len {
        prefix[i] = prefix[i - 1]
            .checked_mul(nums[i - 1] as i128)
            .ok_or(DrillError::Overflow { index: i })?;
    }

    let mut result = vec![0i64; len];
    let mut suffix: i128 = 1;
    for i in (0..len).rev() {
        let product = prefix[i]
            .checked_mul(suffix)
            .and_then(|p| i64::try_from(p).ok())
            .ok_or(DrillError::Overflow { index: i })?;
        result[i] = product;
        if i > 0 {
            // suffix now covers everything right of i - 1
            suffix = suffix
                .checked_mul(nums[i] as i128)
                .ok_or(DrillError::Overflow { index: i - 1 })?;
        }
    }

    Ok(result)
}
