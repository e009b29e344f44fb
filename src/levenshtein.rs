//! Levenshtein edit distance.
//!
//! Minimum number of single-unit insertions, deletions and substitutions that
//! turn one sequence into another, computed with the Wagner-Fischer dynamic
//! program:
//!
//! ```text
//! cost[i][0] = i
//! cost[0][j] = j
//! cost[i][j] = cost[i-1][j-1]                                   if s1[i-1] == s2[j-1]
//!            = 1 + min(cost[i-1][j], cost[i][j-1], cost[i-1][j-1])   otherwise
//! ```
//!
//! # Memory
//!
//! Only one row of the table is kept, indexed by the shorter input, so memory
//! is `O(min(|s1|, |s2|))` and time is `O(|s1| * |s2|)`. A shared prefix and
//! suffix are stripped first since they never contribute edits.
//!
//! There is no length cap by default. [`Levenshtein::with_max_len`] sets one,
//! enforced by [`Levenshtein::checked_distance`], which rejects oversized
//! inputs instead of truncating them: a truncated edit distance is not an
//! approximation of the real one.

use crate::error::{Error, Result};
use crate::metric::SymmetricMetric;

/// Levenshtein distance calculator.
///
/// Holds no scratch state between calls, so one instance can be shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use simetra::Levenshtein;
///
/// let lev = Levenshtein::new();
/// assert_eq!(lev.distance("kitten", "sitting"), 3);
/// assert_eq!(lev.distance("", "foo"), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    max_len: Option<usize>,
}

impl Levenshtein {
    /// Create an uncapped calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_len: None }
    }

    /// Create a calculator whose [`checked_distance`](Self::checked_distance)
    /// rejects inputs longer than `max_len` units.
    pub fn with_max_len(max_len: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(Error::InvalidMaxLen);
        }
        Ok(Self {
            max_len: Some(max_len),
        })
    }

    /// Configured input cap, if any.
    #[must_use]
    pub const fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Edit distance between two strings, compared byte by byte.
    ///
    /// Ignores the configured cap.
    #[inline]
    #[must_use]
    pub fn distance(&self, s1: &str, s2: &str) -> usize {
        levenshtein_units(s1.as_bytes(), s2.as_bytes())
    }

    /// Edit distance between two unit sequences. Ignores the configured cap.
    #[inline]
    #[must_use]
    pub fn distance_units<U: PartialEq>(&self, s1: &[U], s2: &[U]) -> usize {
        levenshtein_units(s1, s2)
    }

    /// Edit distance, failing if either input exceeds the configured cap.
    ///
    /// # Errors
    ///
    /// [`Error::InputTooLong`] if a cap is set and either input is longer.
    pub fn checked_distance(&self, s1: &str, s2: &str) -> Result<usize> {
        self.checked_distance_units(s1.as_bytes(), s2.as_bytes())
    }

    /// Unit-sequence form of [`checked_distance`](Self::checked_distance).
    pub fn checked_distance_units<U: PartialEq>(&self, s1: &[U], s2: &[U]) -> Result<usize> {
        if let Some(max) = self.max_len {
            let len = s1.len().max(s2.len());
            if len > max {
                tracing::debug!(len, max, "rejecting oversized levenshtein input");
                return Err(Error::InputTooLong { len, max });
            }
        }
        Ok(levenshtein_units(s1, s2))
    }

    /// Similarity in `[0, 1]`: `1 - distance / max(|s1|, |s2|)`.
    ///
    /// Two empty strings are identical and score 1.0.
    #[must_use]
    pub fn normalized_similarity(&self, s1: &str, s2: &str) -> f64 {
        self.normalized_similarity_units(s1.as_bytes(), s2.as_bytes())
    }

    /// Unit-sequence form of
    /// [`normalized_similarity`](Self::normalized_similarity).
    #[must_use]
    pub fn normalized_similarity_units<U: PartialEq>(&self, s1: &[U], s2: &[U]) -> f64 {
        let longest = s1.len().max(s2.len());
        if longest == 0 {
            return 1.0;
        }
        1.0 - levenshtein_units(s1, s2) as f64 / longest as f64
    }
}

impl<U: PartialEq> SymmetricMetric<U> for Levenshtein {
    type Output = usize;

    fn distance(&self, a: &[U], b: &[U]) -> usize {
        levenshtein_units(a, b)
    }
}

/// Levenshtein distance between two strings, compared byte by byte.
///
/// ```rust
/// assert_eq!(simetra::levenshtein("saturday", "sunday"), 3);
/// ```
#[must_use]
pub fn levenshtein(s1: &str, s2: &str) -> usize {
    levenshtein_units(s1.as_bytes(), s2.as_bytes())
}

/// Levenshtein distance between two unit sequences.
#[must_use]
pub fn levenshtein_units<U: PartialEq>(s1: &[U], s2: &[U]) -> usize {
    let (s1, s2) = strip_common_affixes(s1, s2);

    // Row over the shorter side.
    let (long, short) = if s1.len() >= s2.len() { (s1, s2) } else { (s2, s1) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lu) in long.iter().enumerate() {
        // `diag` holds cost[i][j], `row[j]` still holds it until overwritten.
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, su) in short.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if lu == su {
                diag
            } else {
                1 + diag.min(up).min(row[j])
            };
            diag = up;
        }
    }
    row[short.len()]
}

fn strip_common_affixes<'a, U: PartialEq>(s1: &'a [U], s2: &'a [U]) -> (&'a [U], &'a [U]) {
    let prefix = s1.iter().zip(s2).take_while(|(a, b)| a == b).count();
    let (s1, s2) = (&s1[prefix..], &s2[prefix..]);
    let suffix = s1
        .iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    (&s1[..s1.len() - suffix], &s2[..s2.len() - suffix])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_basic() {
        let lev = Levenshtein::new();
        assert_eq!(lev.distance("", ""), 0);
        assert_eq!(lev.distance("foo", "foo"), 0);
        assert_eq!(lev.distance("foo", ""), 3);
        assert_eq!(lev.distance("", "foo"), 3);
        assert_eq!(lev.distance("foo", "bar"), 3);
        assert_eq!(lev.distance("kitten", "sitting"), 3);
        assert_eq!(lev.distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_affix_stripping() {
        assert_eq!(strip_common_affixes(b"abcXdef", b"abcYYdef"), (&b"X"[..], &b"YY"[..]));
        assert_eq!(strip_common_affixes(b"aaa", b"aa"), (&b"a"[..], &b""[..]));
        assert_eq!(levenshtein("aaa", "aa"), 1);
    }

    #[test]
    fn test_checked_distance_cap() {
        let lev = Levenshtein::with_max_len(4).unwrap();
        assert_eq!(lev.checked_distance("abcd", "abce"), Ok(1));
        assert_eq!(
            lev.checked_distance("abcde", "a"),
            Err(Error::InputTooLong { len: 5, max: 4 })
        );
        // Unchecked path ignores the cap.
        assert_eq!(lev.distance("abcde", "a"), 4);
    }

    #[test]
    fn test_with_max_len_rejects_zero() {
        assert_eq!(Levenshtein::with_max_len(0), Err(Error::InvalidMaxLen));
    }

    #[test]
    fn test_normalized_similarity() {
        let lev = Levenshtein::new();
        assert_eq!(lev.normalized_similarity("", ""), 1.0);
        assert_eq!(lev.normalized_similarity("abc", "abc"), 1.0);
        assert_eq!(lev.normalized_similarity("abc", "xyz"), 0.0);
        assert_eq!(lev.normalized_similarity("abcd", "abce"), 0.75);
    }

    #[test]
    fn test_normalized_similarity_units() {
        let lev = Levenshtein::new();
        let a: Vec<char> = "café".chars().collect();
        let b: Vec<char> = "cafe".chars().collect();
        assert_eq!(lev.normalized_similarity_units(&a, &b), 0.75);
        // Bytes: two edits over five units.
        assert_eq!(lev.normalized_similarity("café", "cafe"), 0.6);
        assert_eq!(lev.normalized_similarity_units::<u32>(&[], &[]), 1.0);
        assert_eq!(lev.normalized_similarity_units(&[1, 2, 3], &[1, 2, 3]), 1.0);
    }

    #[test]
    fn test_trait_dispatch() {
        fn dist<M: SymmetricMetric<char, Output = usize>>(m: &M, a: &str, b: &str) -> usize {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            m.distance(&a, &b)
        }
        // One substitution per char, even though 'é' is two bytes.
        assert_eq!(dist(&Levenshtein::new(), "café", "cafe"), 1);
        assert_eq!(levenshtein("café", "cafe"), 2);
    }
}
