use thiserror::Error;

/// Errors reported by exercises whose input can be out of domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// The product for position `index` of the output is outside the
    /// `i64` range. Other positions may overflow too; the first one found
    /// is reported.
    #[error("Product for index {index} overflows i64")]
    Overflow { index: usize },

    /// A board cell held something other than `.` or `1`..=`9`.
    #[error("Invalid sudoku cell {cell:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: char },
}
