//! Scenario tests for every check, driven through the public prelude.

use strgrid::prelude::*;

// ============================================================================
// One-away
// ============================================================================

#[test]
fn test_one_away_scenarios() {
    assert!(is_one_away(Some("abc"), Some("abc9")));
    assert!(is_one_away(Some("abc"), Some("ab")));
    assert!(is_one_away(Some("abcr"), Some("abc9")));
    assert!(is_one_away(Some(""), Some("a")));
    assert!(is_one_away(Some("a"), Some("")));
    assert!(is_one_away(Some(""), Some("")));
}

#[test]
fn test_one_away_rejections() {
    assert!(!is_one_away(Some("abc3r"), Some("abc9h")));
    assert!(!is_one_away(Some("ab12c"), Some("abc")));
    assert!(!is_one_away(Some("abcd"), Some("ab")));
    assert!(!is_one_away(Some("taco"), Some("ocat")));
    assert!(!is_one_away(Some("notnull"), None));
}

#[test]
fn test_one_away_classification() {
    assert_eq!(classify(Some("pale"), Some("ple")), None);
    assert_eq!(classify(Some("pale"), Some("ale")), Some(Edit::Deletion));
    assert_eq!(classify(Some("pale"), Some("bale")), Some(Edit::Replacement));
    assert_eq!(classify(Some("pale"), Some("pales")), Some(Edit::Insertion));
}

// ============================================================================
// Permutation
// ============================================================================

#[test]
fn test_permutation_scenarios() {
    assert!(is_permutation_sorted(Some("dog"), Some("god")));
    assert!(!is_permutation_sorted(Some("dog"), Some("cat")));
    assert!(is_permutation_by_frequency(Some("dog"), Some("god")));
    assert!(!is_permutation_by_frequency(Some("dog"), Some("cat")));
}

#[test]
fn test_permutation_policy_for_identical_strings() {
    for strategy in [PermutationStrategy::Sorted, PermutationStrategy::Frequency] {
        assert!(!is_permutation(Some("dog"), Some("dog"), strategy));
        assert!(!is_permutation(Some(""), Some(""), strategy));
    }
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_rotation_scenarios() {
    assert!(is_rotation(Some("teacup"), Some("cuptea")));
    assert!(!is_rotation(Some("teacup"), Some("eatcup")));
    assert!(!is_rotation(Some("abcd"), Some("abdc")));
    assert!(is_rotation(Some("teacup"), Some("teacup")));
}

#[test]
fn test_rotation_offsets() {
    assert_eq!(rotation_offset(Some("teacup"), Some("eacupt")), Some(1));
    assert_eq!(rotation_offset(Some("teacup"), Some("pteacu")), Some(5));
    assert_eq!(rotation_offset(Some("teacup"), None), None);
}

// ============================================================================
// Unique characters
// ============================================================================

#[test]
fn test_unique_scenarios() {
    assert!(!all_unique_naive(Some("abc123abc")));
    assert!(all_unique_naive(Some("abc123def456.!p")));
    assert!(!all_unique_sorted(Some("abc123abc")));
    assert!(all_unique_sorted(Some("abc123def456.!p")));
    assert!(all_unique(None, UniquenessStrategy::Naive));
    assert!(all_unique(Some(""), UniquenessStrategy::Sorted));
}

// ============================================================================
// Zero matrix
// ============================================================================

#[test]
fn test_zero_matrix_scenario() {
    let mut matrix = Matrix::from_rows(vec![vec![1, 2, 0], vec![3, 0, 4], vec![5, 6, 7]]).unwrap();
    transform(&mut matrix);

    let expected = Matrix::from_rows(vec![vec![0, 0, 0], vec![0, 0, 0], vec![5, 0, 0]]).unwrap();
    assert!(equals(Some(&matrix), Some(&expected)));
}

#[test]
fn test_zero_matrix_without_zeros_is_unchanged() {
    let original = Matrix::from_rows(vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7]]).unwrap();
    let mut matrix = original.clone();
    transform(&mut matrix);
    assert!(equals(Some(&matrix), Some(&original)));
}

#[test]
fn test_zero_matrix_helpers() {
    let mut matrix: Matrix = "1 2 3; 4 5 6".parse().unwrap();
    zero_column(&mut matrix, 2).unwrap();
    zero_row(&mut matrix, 0).unwrap();
    assert_eq!(matrix.to_rows(), vec![vec![0, 0, 0], vec![4, 5, 0]]);
    assert!(zero_row(&mut matrix, 9).is_err());
}

#[test]
fn test_zero_matrix_scan() {
    let matrix: Matrix = "0 1 1; 1 1 0; 1 1 1".parse().unwrap();
    let scan = find_zeros(&matrix);
    assert_eq!(
        scan,
        ZeroScan {
            rows: vec![0, 1],
            cols: vec![0, 2],
        }
    );
}

#[test]
fn test_zero_matrix_equals_edge_cases() {
    let empty = Matrix::from_rows(vec![]).unwrap();
    assert!(equals(None, None));
    assert!(equals(Some(&empty), Some(&empty.clone())));
    assert!(!equals(Some(&empty), None));
    assert!(matches!(
        Matrix::from_rows(vec![vec![1], vec![1, 2]]),
        Err(MatrixError::Ragged { .. })
    ));
}
