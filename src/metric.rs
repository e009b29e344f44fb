//! Metric trait surfaces.
//!
//! Two shapes of calculator exist in this crate:
//! - [`ScratchMetric`]: owns reusable scratch buffers, so each call needs
//!   exclusive access (`&mut self`). Jaro and Jaro-Winkler.
//! - [`SymmetricMetric`]: keeps no mutable state between calls and can be
//!   shared across threads (`&self`). Levenshtein.
//!
//! Both are generic over the unit type `U` so callers can compare bytes,
//! `char`s, or token ids with the same calculator.

/// A symmetric similarity score computed with reusable scratch space.
///
/// `similarity(a, b) == similarity(b, a)` for every implementation here.
pub trait ScratchMetric<U> {
    /// Compute the similarity between `a` and `b`, in `[0, 1]`.
    fn similarity(&mut self, a: &[U], b: &[U]) -> f64;
}

/// A symmetric distance metric with no per-instance mutable state.
pub trait SymmetricMetric<U> {
    /// Numeric type of the distance.
    type Output;

    /// Compute the (symmetric) distance between `a` and `b`.
    fn distance(&self, a: &[U], b: &[U]) -> Self::Output;
}
