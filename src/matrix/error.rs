//! Error types for matrix construction and mutation.

use thiserror::Error;

/// Errors that can occur while building or mutating a [`Matrix`](super::Matrix).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The rows handed to the constructor do not share one length.
    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the first offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// The requested shape has more cells than fit in memory addressing.
    #[error("A {rows}x{cols} matrix is too large")]
    Overflow {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A row index past the last row.
    #[error("Row {row} is out of bounds for a matrix with {rows} rows")]
    RowOutOfBounds {
        /// Requested row.
        row: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },

    /// A column index past the last column.
    #[error("Column {col} is out of bounds for a matrix with {cols} columns")]
    ColumnOutOfBounds {
        /// Requested column.
        col: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },

    /// A cell in textual input is not an integer.
    #[error("Invalid cell {value:?} in row {row}")]
    Parse {
        /// Row the cell was found in.
        row: usize,
        /// The offending text.
        value: String,
    },
}
