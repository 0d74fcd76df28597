use crate::errors::DrillError;

/// A 9x9 board of ASCII cells: `b'1'..=b'9'` or `b'.'` for empty.
pub type Board = [[u8; 9]; 9];

/// True if no digit repeats within any row, column or 3x3 box.
///
/// Only filled cells are checked; the board need not be solvable.
pub fn is_valid_sudoku(board: &Board) -> Result<bool, DrillError> {
    let mut rows = [[false; 9]; 9];
    let mut cols = [[false; 9]; 9];
    let mut boxes = [[false; 9]; 9];

    for (r, row) in board.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            let digit = match cell {
                b'.' => continue,
                b'1'..=b'9' => (cell - b'1') as usize,
                _ => {
                    return Err(DrillError::InvalidCell {
                        row: r,
                        col: c,
                        cell: cell as char,
                    })
                }
            };
            let b = (r / 3) * 3 + c / 3;
            if rows[r][digit] || cols[c][digit] || boxes[b][digit] {
                return Ok(false);
            }
            rows[r][digit] = true;
            cols[c][digit] = true;
            boxes[b][digit] = true;
        }
    }
    Ok(true)
}
