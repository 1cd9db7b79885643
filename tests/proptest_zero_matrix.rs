//! Property-based tests for the zero-matrix transform.

use proptest::prelude::*;
use strgrid::matrix::{equals, find_zeros, transform, Matrix};

/// Rectangular matrices with roughly one zero in five cells.
fn arb_matrix() -> impl Strategy<Value = Matrix> {
    (0usize..6, 0usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop::collection::vec(prop_oneof![1 => Just(0i32), 4 => 1i32..100], cols),
            rows,
        )
        .prop_map(|rows| Matrix::from_rows(rows).unwrap())
    })
}

fn arb_matrix_without_zeros() -> impl Strategy<Value = Matrix> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(1i32..1000, cols), rows)
            .prop_map(|rows| Matrix::from_rows(rows).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn transform_without_zeros_is_identity(original in arb_matrix_without_zeros()) {
        let mut matrix = original.clone();
        transform(&mut matrix);
        prop_assert!(equals(Some(&matrix), Some(&original)));
    }

    #[test]
    fn transform_keeps_dimensions(original in arb_matrix()) {
        let mut matrix = original.clone();
        transform(&mut matrix);
        prop_assert_eq!(matrix.dimensions(), original.dimensions());
    }

    #[test]
    fn transform_matches_original_zero_positions(original in arb_matrix()) {
        let scan = find_zeros(&original);
        let mut matrix = original.clone();
        transform(&mut matrix);

        for row in 0..original.rows() {
            for col in 0..original.cols() {
                let cleared = scan.rows.contains(&row) || scan.cols.contains(&col);
                let expected = if cleared { 0 } else { original.get(row, col).unwrap() };
                prop_assert_eq!(matrix.get(row, col), Some(expected), "cell ({}, {})", row, col);
            }
        }
    }

    // A cleared row and a cleared column put a zero in every line, so a
    // second pass wipes the whole matrix. The first pass must not.
    #[test]
    fn second_pass_clears_everything(original in arb_matrix()) {
        let mut matrix = original.clone();
        transform(&mut matrix);
        if find_zeros(&original).is_empty() {
            prop_assert!(find_zeros(&matrix).is_empty());
        } else {
            let scan = find_zeros(&matrix);
            prop_assert_eq!(scan.rows, (0..matrix.rows()).collect::<Vec<_>>());
            prop_assert_eq!(scan.cols, (0..matrix.cols()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn equals_is_reflexive(matrix in arb_matrix()) {
        prop_assert!(equals(Some(&matrix), Some(&matrix.clone())));
    }
}
