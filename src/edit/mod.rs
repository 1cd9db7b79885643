//! One-away edit detection.
//!
//! Two strings are *one away* when a single insertion, deletion or
//! replacement of one character (or no edit at all) turns the first into
//! the second. Inputs are treated as ASCII byte strings and compared
//! case-sensitively.
//!
//! Insertions and deletions are detected by contiguous containment: the
//! shorter string must appear as an unbroken run inside the longer one.
//! Replacements are detected with an explicit mismatch tally.

/// The single edit that relates two one-away strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum Edit {
    /// No edit: both strings are absent or equal.
    Identical,
    /// The second string has one extra character.
    Insertion,
    /// The second string is missing one character.
    Deletion,
    /// Exactly one position holds a different character.
    Replacement,
}

impl std::fmt::Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Edit::Identical => "identical",
            Edit::Insertion => "insertion",
            Edit::Deletion => "deletion",
            Edit::Replacement => "replacement",
        };
        f.write_str(name)
    }
}

/// Check whether `second` is at most one edit away from `first`.
///
/// Both absent is one-away; exactly one absent is not.
///
/// # Example
///
/// ```rust
/// use strgrid::edit::is_one_away;
///
/// assert!(is_one_away(Some("abc"), Some("abc9")));
/// assert!(is_one_away(Some("abcr"), Some("abc9")));
/// assert!(!is_one_away(Some("abc3r"), Some("abc9h")));
/// assert!(is_one_away(None, None));
/// assert!(!is_one_away(Some(""), None));
/// ```
pub fn is_one_away(first: Option<&str>, second: Option<&str>) -> bool {
    classify(first, second).is_some()
}

/// Classify the edit that makes `second` one away from `first`.
///
/// Returns `None` when the strings are not one-away.
///
/// # Example
///
/// ```rust
/// use strgrid::edit::{classify, Edit};
///
/// assert_eq!(classify(Some("abc"), Some("ab")), Some(Edit::Deletion));
/// assert_eq!(classify(Some(""), Some("a")), Some(Edit::Insertion));
/// assert_eq!(classify(Some("taco"), Some("ocat")), None);
/// ```
pub fn classify(first: Option<&str>, second: Option<&str>) -> Option<Edit> {
    let (first, second) = match (first, second) {
        (None, None) => return Some(Edit::Identical),
        (Some(first), Some(second)) => (first, second),
        _ => return None,
    };

    if first == second {
        return Some(Edit::Identical);
    }

    // A lone character against an empty string is covered by the
    // containment checks below as well, but is resolved here directly.
    if first.is_empty() && second.len() == 1 {
        return Some(Edit::Insertion);
    }
    if second.is_empty() && first.len() == 1 {
        return Some(Edit::Deletion);
    }

    if is_insertion(first, second) {
        Some(Edit::Insertion)
    } else if is_deletion(first, second) {
        Some(Edit::Deletion)
    } else if is_replacement(first, second) {
        Some(Edit::Replacement)
    } else {
        None
    }
}

/// `second` is one character longer than `first` and contains it contiguously.
#[inline]
pub fn is_insertion(first: &str, second: &str) -> bool {
    second.len() == first.len() + 1 && second.contains(first)
}

/// `first` is one character longer than `second` and contains it contiguously.
#[inline]
pub fn is_deletion(first: &str, second: &str) -> bool {
    is_insertion(second, first)
}

/// Equal lengths with exactly one differing position.
pub fn is_replacement(first: &str, second: &str) -> bool {
    if first.len() != second.len() {
        return false;
    }

    let mismatches = first
        .bytes()
        .zip(second.bytes())
        .filter(|(a, b)| a != b)
        .take(2)
        .count();

    mismatches == 1
}
