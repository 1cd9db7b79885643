//! String rotation detection.
//!
//! `second` is a rotation of `first` when moving some prefix of `first` to
//! its end yields `second`. Comparison is ASCII case-insensitive, and the
//! identity rotation (offset 0) counts.

/// Check whether `second` is a cyclic rotation of `first`.
///
/// Absent or empty strings, and strings of different lengths, are never
/// rotations.
///
/// # Example
///
/// ```rust
/// use strgrid::rotation::is_rotation;
///
/// assert!(is_rotation(Some("teacup"), Some("cuptea")));
/// assert!(is_rotation(Some("teacup"), Some("UPTEAC")));
/// assert!(!is_rotation(Some("teacup"), Some("eatcup")));
/// ```
pub fn is_rotation(first: Option<&str>, second: Option<&str>) -> bool {
    rotation_offset(first, second).is_some()
}

/// Find the smallest offset `k` such that `first[k..] + first[..k]`
/// equals `second`, ignoring ASCII case.
///
/// # Example
///
/// ```rust
/// use strgrid::rotation::rotation_offset;
///
/// assert_eq!(rotation_offset(Some("teacup"), Some("cuptea")), Some(3));
/// assert_eq!(rotation_offset(Some("teacup"), Some("teacup")), Some(0));
/// assert_eq!(rotation_offset(Some("abcd"), Some("abdc")), None);
/// ```
pub fn rotation_offset(first: Option<&str>, second: Option<&str>) -> Option<usize> {
    let first = first?.as_bytes();
    let second = second?.as_bytes();

    if first.is_empty() || second.is_empty() || first.len() != second.len() {
        return None;
    }

    let offset = (0..first.len()).find(|&k| rotated_eq(first, k, second));
    tracing::trace!(len = first.len(), ?offset, "rotation scan");
    offset
}

/// Compare `first` rotated left by `k` against `second` without allocating.
#[inline]
fn rotated_eq(first: &[u8], k: usize, second: &[u8]) -> bool {
    let (head, tail) = first.split_at(k);
    let (second_tail, second_head) = second.split_at(tail.len());
    tail.eq_ignore_ascii_case(second_tail) && head.eq_ignore_ascii_case(second_head)
}
