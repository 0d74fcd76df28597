/// Remove the fewest parentheses so the result is balanced.
///
/// A `)` with no open `(` before it is dropped immediately; any `(` still
/// open at the end is dropped too. All other characters are kept in order.
pub fn min_remove_to_make_valid(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut keep = vec![true; chars.len()];
    let mut open: Vec<usize> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => open.push(i),
            ')' => {
                if open.pop().is_none() {
                    keep[i] = false;
                }
            }
            _ => {}
        }
    }
    for i in open {
        keep[i] = false;
    }

    chars
        .into_iter()
        .zip(keep)
        .filter_map(|(c, keep)| keep.then_some(c))
        .collect()
}
