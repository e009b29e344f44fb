//! String and point similarity metrics.
//!
//! `simetra` provides small, allocation-aware building blocks for fuzzy
//! matching:
//!
//! - **Jaro**: [`Jaro`], [`jaro`]
//! - **Jaro-Winkler**: [`JaroWinkler`], [`jaro_winkler`]
//! - **Levenshtein**: [`Levenshtein`], [`levenshtein`]
//! - **Geo**: [`geo::approx_distance_km`], [`geo::approx_distance_km_radians`]
//!   (feature `geo`, on by default)
//!
//! # Units
//!
//! `&str` inputs are compared byte by byte. A multi-byte UTF-8 character
//! counts as several units, so `"café"` has length 5. The `*_units` entry
//! points accept any `&[U]` with `U: PartialEq`; pass `&[char]` for
//! per-character comparison or token ids for word-level comparison.
//!
//! # Scratch Buffers
//!
//! [`Jaro`] and [`JaroWinkler`] own two flag buffers of [`MAX_SEQUENCE_LEN`]
//! entries and reuse them on every call. Scoring takes `&mut self`, which
//! keeps one instance from being used by two threads at once; create one
//! calculator per worker. Inputs longer than the buffers are truncated.
//! The free functions ([`jaro`], [`jaro_winkler`]) allocate per call instead.
//!
//! [`Levenshtein`] keeps no state between calls and is `Sync`.
//!
//! # Example
//!
//! ```rust
//! use simetra::{JaroWinkler, Levenshtein};
//!
//! let mut jw = JaroWinkler::new();
//! assert_eq!(jw.distance("dixon", "dicksonx"), 0.8133333333333332);
//!
//! let lev = Levenshtein::new();
//! assert_eq!(lev.distance("kitten", "sitting"), 3);
//! ```
//!
//! # Score Ranges
//!
//! | Metric | Range | Identical inputs |
//! |--------|-------|------------------|
//! | Jaro | [0, 1] | 1.0 (0.0 if both empty or one unit long) |
//! | Jaro-Winkler | [0, 1] | 1.0 (0.0 if both empty, 0.1 if one unit long) |
//! | Levenshtein | [0, max(len)] | 0 |
//!
//! # References
//!
//! - Jaro, M. A. (1989). "Advances in record-linkage methodology"
//! - Winkler, W. E. (1990). "String Comparator Metrics and Enhanced Decision
//!   Rules in the Fellegi-Sunter Model of Record Linkage"
//! - Levenshtein, V. I. (1966). "Binary codes capable of correcting deletions,
//!   insertions, and reversals"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod jaro;
mod jaro_winkler;
mod levenshtein;
pub mod metric;

#[cfg(feature = "geo")]
pub mod geo;

pub use error::{Error, Result};
pub use jaro::{jaro, jaro_units, Jaro, Score};
pub use jaro_winkler::{
    jaro_winkler, jaro_winkler_units, JaroWinkler, JaroWinklerConfig, DEFAULT_PREFIX_SCALE,
    MAX_PREFIX_LEN,
};
pub use levenshtein::{levenshtein, levenshtein_units, Levenshtein};
pub use metric::{ScratchMetric, SymmetricMetric};

#[cfg(feature = "geo")]
pub use geo::{approx_distance_km, approx_distance_km_radians, Coord};

/// Maximum number of units the Jaro family compares per input.
///
/// Longer inputs are truncated to their first `MAX_SEQUENCE_LEN` units.
/// Sizes the match buffers of [`Jaro::new`] and [`JaroWinkler::new`].
pub const MAX_SEQUENCE_LEN: usize = 4096;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaro_winkler_basic() {
        let mut jw = JaroWinkler::new();
        assert_eq!(jw.distance("andrew", "andrew"), 1.0);
        assert_eq!(jw.distance("foo", "bar"), 0.0);
    }

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "xxxxx"), 5);
    }

    #[test]
    fn test_scratch_metric_object() {
        let mut metrics: Vec<Box<dyn ScratchMetric<u8>>> =
            vec![Box::new(Jaro::new()), Box::new(JaroWinkler::new())];
        for m in &mut metrics {
            assert_eq!(m.similarity(b"abc", b"abc"), 1.0);
            assert_eq!(m.similarity(b"", b""), 0.0);
        }
    }

    #[test]
    fn test_calculators_are_send_sync() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Levenshtein>();
        assert_sync::<Jaro>();
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(Jaro::new().max_len(), MAX_SEQUENCE_LEN);
        assert_eq!(JaroWinkler::new().prefix_scale(), DEFAULT_PREFIX_SCALE);
        assert_eq!(JaroWinklerConfig::default().max_len, MAX_SEQUENCE_LEN);
    }
}
