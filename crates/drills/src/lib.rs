//! # Drills
//!
//! Self-contained interview exercises over arrays and strings: hashing,
//! two pointers, bucket counting and stack-based parsing. Every function is
//! total over its input and deterministic in its output order.

pub mod abbreviation;
pub mod anagram;
pub mod consecutive;
pub mod duplicates;
pub mod errors;
pub mod palindrome;
pub mod parens;
pub mod product;
pub mod sorting;
pub mod sudoku;
pub mod top_k;
pub mod two_sum;

pub use abbreviation::valid_word_abbreviation;
pub use anagram::{group_anagrams, is_anagram};
pub use consecutive::longest_consecutive;
pub use duplicates::contains_duplicate;
pub use errors::DrillError;
pub use palindrome::is_palindrome;
pub use parens::min_remove_to_make_valid;
pub use product::product_except_self;
pub use sorting::selection_sort;
pub use sudoku::{is_valid_sudoku, Board};
pub use top_k::top_k_frequent;
pub use two_sum::two_sum;
