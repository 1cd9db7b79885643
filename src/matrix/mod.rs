//! Zero-matrix transformation.
//!
//! Every row and column of a matrix that contains a zero is filled with
//! zeros. The transform scans first and mutates afterwards, so zeros
//! written by the transform never spread further.
//!
//! # Example
//!
//! ```rust
//! use strgrid::matrix::{transform, Matrix};
//!
//! let mut matrix: Matrix = "1 2 0; 3 0 4; 5 6 7".parse().unwrap();
//! transform(&mut matrix);
//! assert_eq!(matrix.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0], vec![5, 0, 0]]);
//! ```

mod error;

pub use error::MatrixError;

use std::fmt;
use std::str::FromStr;

/// A rectangular grid of `i32` cells stored in row-major order.
///
/// The shape is fixed at construction; the functions in this module mutate
/// cells in place and never resize.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Matrix {
    /// Create a `rows` x `cols` matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Overflow`] when `rows * cols` does not fit in
    /// a `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::Overflow { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![0; len],
        })
    }

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] when the rows differ in length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strgrid::matrix::{Matrix, MatrixError};
    ///
    /// let matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(matrix.dimensions(), (2, 2));
    ///
    /// let ragged = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
    /// assert!(matches!(ragged, Err(MatrixError::Ragged { row: 1, .. })));
    /// ```
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the matrix has no rows or no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Cell at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Cells of one row, if in bounds.
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.iter_rows().map(<[i32]>::to_vec).collect()
    }

    fn fill_row(&mut self, row: usize) {
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(0);
    }

    fn fill_column(&mut self, col: usize) {
        for row in 0..self.rows {
            self.cells[row * self.cols + col] = 0;
        }
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        equals(Some(self), Some(other))
    }
}

impl TryFrom<Vec<Vec<i32>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<i32>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    /// Parse rows separated by `;` or newlines, cells by whitespace or `,`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split([';', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| {
                        cell.parse::<i32>().map_err(|_| MatrixError::Parse {
                            row,
                            value: cell.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

/// Rows and columns that contain at least one zero, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZeroScan {
    /// Row indices holding a zero.
    pub rows: Vec<usize>,
    /// Column indices holding a zero.
    pub cols: Vec<usize>,
}

impl ZeroScan {
    /// True when the matrix held no zeros.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Record every row and column that contains a zero.
///
/// A row or column appears once no matter how many zeros it holds.
pub fn find_zeros(matrix: &Matrix) -> ZeroScan {
    let mut zero_rows = vec![false; matrix.rows];
    let mut zero_cols = vec![false; matrix.cols];

    for (row, cells) in matrix.iter_rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == 0 {
                zero_rows[row] = true;
                zero_cols[col] = true;
            }
        }
    }

    let marked = |flags: Vec<bool>| -> Vec<usize> {
        flags
            .into_iter()
            .enumerate()
            .filter_map(|(index, flag)| flag.then_some(index))
            .collect()
    };

    ZeroScan {
        rows: marked(zero_rows),
        cols: marked(zero_cols),
    }
}

/// Zero every row and column that contains a zero, in place.
///
/// Does nothing for a matrix with no rows or no columns.
pub fn transform(matrix: &mut Matrix) {
    if matrix.is_empty() {
        return;
    }

    let scan = find_zeros(matrix);
    tracing::debug!(
        rows = matrix.rows,
        cols = matrix.cols,
        zero_rows = ?scan.rows,
        zero_cols = ?scan.cols,
        "zero-matrix scan complete"
    );

    for &row in &scan.rows {
        matrix.fill_row(row);
    }
    for &col in &scan.cols {
        matrix.fill_column(col);
    }
}

/// Fill one row with zeros.
///
/// # Errors
///
/// Returns [`MatrixError::RowOutOfBounds`] when `row` is not a valid index.
pub fn zero_row(matrix: &mut Matrix, row: usize) -> Result<(), MatrixError> {
    if row >= matrix.rows {
        return Err(MatrixError::RowOutOfBounds {
            row,
            rows: matrix.rows,
        });
    }
    matrix.fill_row(row);
    Ok(())
}

/// Fill one column with zeros.
///
/// # Errors
///
/// Returns [`MatrixError::ColumnOutOfBounds`] when `col` is not a valid index.
pub fn zero_column(matrix: &mut Matrix, col: usize) -> Result<(), MatrixError> {
    if col >= matrix.cols {
        return Err(MatrixError::ColumnOutOfBounds {
            col,
            cols: matrix.cols,
        });
    }
    matrix.fill_column(col);
    Ok(())
}

/// Compare two possibly-absent matrices cell by cell.
///
/// Both absent is equal, one absent is not. Two matrices without rows are
/// equal regardless of their column count.
///
/// # Example
///
/// ```rust
/// use strgrid::matrix::{equals, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
/// assert!(equals(Some(&a), Some(&a.clone())));
/// assert!(!equals(Some(&a), Some(&b)));
/// assert!(equals(None, None));
/// assert!(!equals(Some(&a), None));
/// ```
pub fn equals(first: Option<&Matrix>, second: Option<&Matrix>) -> bool {
    match (first, second) {
        (None, None) => true,
        (Some(first), Some(second)) => {
            if first.rows == 0 && second.rows == 0 {
                return true;
            }
            first.dimensions() == second.dimensions() && first.cells == second.cells
        }
        _ => false,
    }
}
