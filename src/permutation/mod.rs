//! Permutation checks.
//!
//! Two strings are permutations of each other when they hold the same
//! multiset of characters in a different arrangement. Identical strings are
//! deliberately *not* permutations under this contract.
//!
//! Two interchangeable strategies are provided:
//! - **Sorted**: sort both byte sequences and compare, O(n log n)
//! - **Frequency**: count bytes of the first string and consume them with
//!   the second, O(n) over a fixed 256-entry table

use smallvec::SmallVec;

/// Size of the byte frequency table.
///
/// ASCII only needs 128 entries; covering every byte value keeps the
/// frequency check total for arbitrary input.
const ALPHABET_SIZE: usize = 256;

/// Algorithm used to decide whether two strings are permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum PermutationStrategy {
    /// Sort both strings and compare them.
    Sorted,
    /// Compare byte frequency counts.
    #[default]
    Frequency,
}

impl PermutationStrategy {
    /// Get a human-readable name for this strategy
    pub fn name(&self) -> &'static str {
        match self {
            PermutationStrategy::Sorted => "sorted",
            PermutationStrategy::Frequency => "frequency",
        }
    }

    /// Run this strategy on a pair of strings.
    pub fn check(&self, first: Option<&str>, second: Option<&str>) -> bool {
        match self {
            PermutationStrategy::Sorted => is_permutation_sorted(first, second),
            PermutationStrategy::Frequency => is_permutation_by_frequency(first, second),
        }
    }
}

impl std::fmt::Display for PermutationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PermutationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sorted" | "sort" => Ok(PermutationStrategy::Sorted),
            "frequency" | "freq" | "count" => Ok(PermutationStrategy::Frequency),
            _ => Err(format!(
                "Unknown permutation strategy: {}. Valid options: sorted, frequency",
                s
            )),
        }
    }
}

/// Check whether two strings can be permutations at all.
///
/// Fails when either string is absent, the lengths differ, or the strings
/// are identical.
pub fn eligible(first: Option<&str>, second: Option<&str>) -> bool {
    match (first, second) {
        (Some(first), Some(second)) => first.len() == second.len() && first != second,
        _ => false,
    }
}

/// Check whether `second` is a permutation of `first` using `strategy`.
///
/// # Example
///
/// ```rust
/// use strgrid::permutation::{is_permutation, PermutationStrategy};
///
/// assert!(is_permutation(Some("dog"), Some("god"), PermutationStrategy::Sorted));
/// assert!(!is_permutation(Some("dog"), Some("dog"), PermutationStrategy::Frequency));
/// ```
pub fn is_permutation(
    first: Option<&str>,
    second: Option<&str>,
    strategy: PermutationStrategy,
) -> bool {
    strategy.check(first, second)
}

/// Permutation check by sorting both strings.
///
/// # Example
///
/// ```rust
/// use strgrid::permutation::is_permutation_sorted;
///
/// assert!(is_permutation_sorted(Some("dog12"), Some("g1o2d")));
/// assert!(!is_permutation_sorted(Some("dog"), Some("cat")));
/// ```
pub fn is_permutation_sorted(first: Option<&str>, second: Option<&str>) -> bool {
    if !eligible(first, second) {
        return false;
    }
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };

    let mut first_bytes: SmallVec<[u8; 32]> = first.bytes().collect();
    let mut second_bytes: SmallVec<[u8; 32]> = second.bytes().collect();
    first_bytes.sort_unstable();
    second_bytes.sort_unstable();

    first_bytes == second_bytes
}

/// Permutation check by counting byte frequencies.
///
/// # Example
///
/// ```rust
/// use strgrid::permutation::is_permutation_by_frequency;
///
/// assert!(is_permutation_by_frequency(Some("dog"), Some("god")));
/// assert!(!is_permutation_by_frequency(Some("dog"), Some("d og")));
/// ```
pub fn is_permutation_by_frequency(first: Option<&str>, second: Option<&str>) -> bool {
    if !eligible(first, second) {
        return false;
    }
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };

    let mut counts = [0i32; ALPHABET_SIZE];
    for byte in first.bytes() {
        counts[byte as usize] += 1;
    }

    // Equal lengths mean a deficit shows up as a negative count before the
    // loop ends, so no second pass over the table is needed.
    for byte in second.bytes() {
        let count = &mut counts[byte as usize];
        *count -= 1;
        if *count < 0 {
            return false;
        }
    }

    true
}
