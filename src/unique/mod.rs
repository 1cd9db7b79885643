//! Unique-character checks.
//!
//! Absent and empty strings are vacuously unique. Two equivalent
//! strategies: sort-then-scan-neighbours (O(n log n)) and a naive pairwise
//! scan (O(n²)).
//!
//! Both strategies compare bytes, not `char`s: input is expected to be
//! ASCII, and multi-byte characters sharing a UTF-8 byte count as repeats.

use smallvec::SmallVec;

/// Algorithm used to decide whether a string's characters are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum UniquenessStrategy {
    /// Sort the characters and compare neighbours.
    #[default]
    Sorted,
    /// Search the remainder of the string for each character.
    Naive,
}

impl UniquenessStrategy {
    /// Get a human-readable name for this strategy
    pub fn name(&self) -> &'static str {
        match self {
            UniquenessStrategy::Sorted => "sorted",
            UniquenessStrategy::Naive => "naive",
        }
    }

    /// Run this strategy on a string.
    pub fn check(&self, input: Option<&str>) -> bool {
        match self {
            UniquenessStrategy::Sorted => all_unique_sorted(input),
            UniquenessStrategy::Naive => all_unique_naive(input),
        }
    }
}

impl std::fmt::Display for UniquenessStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for UniquenessStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sorted" | "sort" => Ok(UniquenessStrategy::Sorted),
            "naive" | "pairwise" => Ok(UniquenessStrategy::Naive),
            _ => Err(format!(
                "Unknown uniqueness strategy: {}. Valid options: sorted, naive",
                s
            )),
        }
    }
}

/// Check whether every character of `input` is distinct using `strategy`.
pub fn all_unique(input: Option<&str>, strategy: UniquenessStrategy) -> bool {
    strategy.check(input)
}

/// Uniqueness check by sorting and comparing adjacent characters.
///
/// # Example
///
/// ```rust
/// use strgrid::unique::all_unique_sorted;
///
/// assert!(all_unique_sorted(Some("abc123def456.!p")));
/// assert!(!all_unique_sorted(Some("abc123abc")));
/// assert!(all_unique_sorted(None));
/// ```
pub fn all_unique_sorted(input: Option<&str>) -> bool {
    let Some(input) = input else {
        return true;
    };

    let mut bytes: SmallVec<[u8; 32]> = input.bytes().collect();
    bytes.sort_unstable();
    bytes.windows(2).all(|pair| pair[0] != pair[1])
}

/// Uniqueness check by scanning the rest of the string for each character.
///
/// # Example
///
/// ```rust
/// use strgrid::unique::all_unique_naive;
///
/// assert!(all_unique_naive(Some("abc123def456.!p")));
/// assert!(!all_unique_naive(Some("abc123dd")));
/// assert!(all_unique_naive(Some("")));
/// ```
pub fn all_unique_naive(input: Option<&str>) -> bool {
    let Some(input) = input else {
        return true;
    };

    let bytes = input.as_bytes();
    (0..bytes.len()).all(|i| !bytes[i + 1..].contains(&bytes[i]))
}
