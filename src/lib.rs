//! # strgrid
//!
//! Small, self-contained string and grid checks:
//!
//! - [`edit`]: are two strings at most one insertion, deletion or
//!   replacement apart?
//! - [`permutation`]: do two (different) strings hold the same characters?
//! - [`rotation`]: is one string a cyclic shift of another?
//! - [`unique`]: are all characters of a string distinct?
//! - [`matrix`]: zero every row and column of a grid that contains a zero.
//!
//! Every check is a pure free function. Absent strings are passed as
//! `None` and are a defined input, never an error.
//!
//! ## Example
//!
//! ```rust
//! use strgrid::prelude::*;
//!
//! assert!(is_one_away(Some("pale"), Some("pales")));
//! assert!(is_permutation(Some("dog"), Some("god"), PermutationStrategy::Sorted));
//! assert!(is_rotation(Some("teacup"), Some("cuptea")));
//! assert!(all_unique(Some("abc"), UniquenessStrategy::Naive));
//!
//! let mut grid = Matrix::from_rows(vec![vec![1, 0], vec![1, 1]]).unwrap();
//! transform(&mut grid);
//! assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![1, 0]]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edit;
pub mod matrix;
pub mod permutation;
pub mod rotation;
pub mod unique;

/// CLI interface and persistent settings
#[cfg(feature = "cli")]
#[allow(missing_docs)]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::edit::{classify, is_one_away, Edit};
    pub use crate::matrix::{
        equals, find_zeros, transform, zero_column, zero_row, Matrix, MatrixError, ZeroScan,
    };
    pub use crate::permutation::{
        is_permutation, is_permutation_by_frequency, is_permutation_sorted, PermutationStrategy,
    };
    pub use crate::rotation::{is_rotation, rotation_offset};
    pub use crate::unique::{all_unique, all_unique_naive, all_unique_sorted, UniquenessStrategy};
}
