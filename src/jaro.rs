//! Jaro similarity with reusable match buffers.
//!
//! # Definition
//!
//! For sequences `s1` and `s2` with `m` matching units and `t` transpositions:
//!
//! ```text
//! jaro(s1, s2) = (m/|s1| + m/|s2| + (m - t)/m) / 3      (0 when m == 0)
//! ```
//!
//! Two units match when they are equal and no further apart than the match
//! window `floor(max(|s1|, |s2|) / 2) - 1`. When the longer input has at most
//! one unit the window is negative and nothing can match, so `jaro("a", "a")`
//! is 0.0, like `jaro("", "")`. Matching is greedy: each unit of
//! `s1` takes the leftmost unmatched equal unit of `s2` inside its window.
//! `t` is half the number of aligned matched pairs that differ, rounded down.
//!
//! # Buffer Reuse
//!
//! [`Jaro`] owns two flag buffers sized to its maximum sequence length and
//! clears only the prefix it needs on each call, so repeated scoring in a hot
//! loop does not touch the allocator. The price is that [`Jaro::distance`]
//! takes `&mut self`: give each thread its own calculator, or use the
//! allocating [`jaro`] function.
//!
//! # Truncation
//!
//! Inputs longer than the calculator's maximum length are truncated to that
//! many leading units. Scores for such inputs are approximate;
//! [`Jaro::distance_scored`] reports when this happened.
//!
//! # References
//!
//! - Jaro, M. A. (1989). "Advances in record-linkage methodology as applied to
//!   matching the 1985 census of Tampa, Florida"
//! - [Jaro-Winkler distance](https://en.wikipedia.org/wiki/Jaro%E2%80%93Winkler_distance)

use crate::error::{Error, Result};
use crate::metric::ScratchMetric;
use crate::MAX_SEQUENCE_LEN;

/// A similarity score together with whether the inputs were truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Similarity in `[0, 1]`.
    pub value: f64,
    /// `true` if either input exceeded the calculator's maximum length and
    /// only its leading units were compared.
    pub truncated: bool,
}

/// Jaro similarity calculator.
///
/// Not shareable between threads while scoring: the match buffers are
/// rewritten on every call.
///
/// # Example
///
/// ```rust
/// use simetra::Jaro;
///
/// let mut jaro = Jaro::new();
/// let s = jaro.distance("martha", "marhta");
/// assert!((s - 0.9444444444444445).abs() < 1e-12);
///
/// // Documented quirks: empty and single-unit inputs have no match
/// // window, so they score 0, not 1.
/// assert_eq!(jaro.distance("", ""), 0.0);
/// assert_eq!(jaro.distance("a", "a"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Jaro {
    s1_matches: Vec<bool>,
    s2_matches: Vec<bool>,
}

impl Jaro {
    /// Create a calculator with buffers for [`MAX_SEQUENCE_LEN`] units.
    #[must_use]
    pub fn new() -> Self {
        Self::allocate(MAX_SEQUENCE_LEN)
    }

    /// Create a calculator that compares at most `max_len` units per input.
    ///
    /// Returns [`Error::InvalidMaxLen`] if `max_len` is zero.
    pub fn with_max_len(max_len: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(Error::InvalidMaxLen);
        }
        if max_len != MAX_SEQUENCE_LEN {
            tracing::debug!(max_len, "allocating jaro match buffers");
        }
        Ok(Self::allocate(max_len))
    }

    fn allocate(max_len: usize) -> Self {
        Self {
            s1_matches: vec![false; max_len],
            s2_matches: vec![false; max_len],
        }
    }

    /// Maximum number of units compared per input.
    #[inline]
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.s1_matches.len()
    }

    /// Jaro similarity of two strings, compared byte by byte.
    #[inline]
    pub fn distance(&mut self, s1: &str, s2: &str) -> f64 {
        self.distance_units(s1.as_bytes(), s2.as_bytes())
    }

    /// Jaro similarity of two unit sequences.
    #[inline]
    pub fn distance_units<U: PartialEq>(&mut self, s1: &[U], s2: &[U]) -> f64 {
        self.distance_units_scored(s1, s2).value
    }

    /// Like [`Jaro::distance`], also reporting whether truncation occurred.
    #[inline]
    pub fn distance_scored(&mut self, s1: &str, s2: &str) -> Score {
        self.distance_units_scored(s1.as_bytes(), s2.as_bytes())
    }

    /// Like [`Jaro::distance_units`], also reporting whether truncation
    /// occurred.
    pub fn distance_units_scored<U: PartialEq>(&mut self, s1: &[U], s2: &[U]) -> Score {
        let (s1, s2, truncated) = truncate_pair(s1, s2, self.max_len());
        let value = jaro_with_buffers(s1, s2, &mut self.s1_matches, &mut self.s2_matches);
        Score { value, truncated }
    }
}

impl Default for Jaro {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: PartialEq> ScratchMetric<U> for Jaro {
    fn similarity(&mut self, a: &[U], b: &[U]) -> f64 {
        self.distance_units(a, b)
    }
}

/// Stateless Jaro similarity of two strings.
///
/// Allocates match buffers per call. Applies the same [`MAX_SEQUENCE_LEN`]
/// truncation as [`Jaro::new`], so results are identical; prefer a reused
/// [`Jaro`] in hot loops.
///
/// ```rust
/// assert_eq!(simetra::jaro("abc", "abc"), 1.0);
/// assert_eq!(simetra::jaro("abc", "xyz"), 0.0);
/// ```
#[must_use]
pub fn jaro(s1: &str, s2: &str) -> f64 {
    jaro_units(s1.as_bytes(), s2.as_bytes())
}

/// Stateless Jaro similarity of two unit sequences. See [`jaro`].
#[must_use]
pub fn jaro_units<U: PartialEq>(s1: &[U], s2: &[U]) -> f64 {
    let (s1, s2, _) = truncate_pair(s1, s2, MAX_SEQUENCE_LEN);
    let longest = s1.len().max(s2.len());
    let mut s1_matches = vec![false; longest];
    let mut s2_matches = vec![false; longest];
    jaro_with_buffers(s1, s2, &mut s1_matches, &mut s2_matches)
}

/// Cut both inputs to `max_len` units.
fn truncate_pair<'a, U>(
    s1: &'a [U],
    s2: &'a [U],
    max_len: usize,
) -> (&'a [U], &'a [U], bool) {
    let truncated = s1.len() > max_len || s2.len() > max_len;
    if truncated {
        tracing::trace!(
            len1 = s1.len(),
            len2 = s2.len(),
            max_len,
            "truncating input to maximum sequence length"
        );
    }
    (
        &s1[..s1.len().min(max_len)],
        &s2[..s2.len().min(max_len)],
        truncated,
    )
}

/// Core Jaro computation over pre-truncated inputs.
///
/// Both buffers must hold at least `max(s1.len(), s2.len())` flags. Only that
/// prefix is cleared and used.
fn jaro_with_buffers<U: PartialEq>(
    s1: &[U],
    s2: &[U],
    s1_matches: &mut [bool],
    s2_matches: &mut [bool],
) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();
    let longest = len1.max(len2);
    debug_assert!(
        s1_matches.len() >= longest && s2_matches.len() >= longest,
        "jaro: match buffers too small ({} / {} for {})",
        s1_matches.len(),
        s2_matches.len(),
        longest
    );

    // floor(longest / 2) - 1; negative for longest <= 1, where no pair of
    // units can match.
    let Some(window) = (longest / 2).checked_sub(1) else {
        return 0.0;
    };

    let s1_matches = &mut s1_matches[..longest];
    let s2_matches = &mut s2_matches[..longest];
    s1_matches.fill(false);
    s2_matches.fill(false);

    let mut m = 0usize;
    for (i, u1) in s1.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(len2);
        for j in lo..hi {
            if !s2_matches[j] && s2[j] == *u1 {
                s1_matches[i] = true;
                s2_matches[j] = true;
                m += 1;
                break;
            }
        }
    }

    if m == 0 {
        return 0.0;
    }

    // Walk matched units of both sides in order.
    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for (i, u1) in s1.iter().enumerate() {
        if !s1_matches[i] {
            continue;
        }
        while !s2_matches[k] {
            k += 1;
        }
        if *u1 != s2[k] {
            half_transpositions += 1;
        }
        k += 1;
    }
    let t = half_transpositions / 2;

    let m_f = m as f64;
    (m_f / len1 as f64 + m_f / len2 as f64 + (m - t) as f64 / m_f) / 3.0
}
