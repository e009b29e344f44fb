//! Jaro-Winkler similarity: Jaro plus a bonus for a shared prefix.
//!
//! ```text
//! jw(s1, s2) = jaro + p * scale * (1 - jaro)
//! ```
//!
//! where `p` is the length of the common prefix, capped at [`MAX_PREFIX_LEN`],
//! and `scale` defaults to [`DEFAULT_PREFIX_SCALE`]. The bonus is applied
//! unconditionally; there is no minimum Jaro score below which it is skipped.
//!
//! Winkler's observation (1990) was that typing errors cluster towards the
//! end of names, so agreement at the start is stronger evidence of a match.

use crate::error::{Error, Result};
use crate::jaro::{jaro_units, Jaro, Score};
use crate::metric::ScratchMetric;
use crate::MAX_SEQUENCE_LEN;

/// Default weight of each common-prefix unit.
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;

/// Number of leading units that can earn the prefix bonus.
pub const MAX_PREFIX_LEN: usize = 4;

/// Largest prefix scale that keeps scores within `[0, 1]`.
const MAX_PREFIX_SCALE: f64 = 1.0 / MAX_PREFIX_LEN as f64;

/// Configuration for [`JaroWinkler`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JaroWinklerConfig {
    /// Maximum units compared per input; longer inputs are truncated.
    pub max_len: usize,
    /// Weight of each common-prefix unit, in `[0, 0.25]`.
    pub prefix_scale: f64,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            max_len: MAX_SEQUENCE_LEN,
            prefix_scale: DEFAULT_PREFIX_SCALE,
        }
    }
}

/// Jaro-Winkler similarity calculator.
///
/// Wraps a [`Jaro`] calculator and shares its buffer reuse and truncation
/// behavior.
///
/// # Example
///
/// ```rust
/// use simetra::JaroWinkler;
///
/// let mut jw = JaroWinkler::new();
/// assert_eq!(jw.distance("martha", "marhta"), 0.9611111111111111);
/// assert_eq!(jw.distance("andrew", "andrew"), 1.0);
/// assert_eq!(jw.distance("foo", "bar"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct JaroWinkler {
    jaro: Jaro,
    prefix_scale: f64,
}

impl JaroWinkler {
    /// Create a calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            jaro: Jaro::new(),
            prefix_scale: DEFAULT_PREFIX_SCALE,
        }
    }

    /// Create a calculator from an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMaxLen`] if `max_len` is zero.
    /// - [`Error::InvalidPrefixScale`] if `prefix_scale` is not finite or lies
    ///   outside `[0, 0.25]`.
    pub fn from_config(config: JaroWinklerConfig) -> Result<Self> {
        validate_prefix_scale(config.prefix_scale)?;
        let jaro = Jaro::with_max_len(config.max_len)?;
        tracing::debug!(
            max_len = config.max_len,
            prefix_scale = config.prefix_scale,
            "configured jaro-winkler calculator"
        );
        Ok(Self {
            jaro,
            prefix_scale: config.prefix_scale,
        })
    }

    /// Create a calculator with a custom prefix scale and default length cap.
    pub fn with_prefix_scale(prefix_scale: f64) -> Result<Self> {
        Self::from_config(JaroWinklerConfig {
            prefix_scale,
            ..JaroWinklerConfig::default()
        })
    }

    /// Weight applied per common-prefix unit.
    #[must_use]
    pub fn prefix_scale(&self) -> f64 {
        self.prefix_scale
    }

    /// Maximum number of units compared per input.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.jaro.max_len()
    }

    /// Jaro-Winkler similarity of two strings, compared byte by byte.
    #[inline]
    pub fn distance(&mut self, s1: &str, s2: &str) -> f64 {
        self.distance_units(s1.as_bytes(), s2.as_bytes())
    }

    /// Jaro-Winkler similarity of two unit sequences.
    #[inline]
    pub fn distance_units<U: PartialEq>(&mut self, s1: &[U], s2: &[U]) -> f64 {
        self.distance_units_scored(s1, s2).value
    }

    /// Like [`JaroWinkler::distance`], also reporting truncation.
    #[inline]
    pub fn distance_scored(&mut self, s1: &str, s2: &str) -> Score {
        self.distance_units_scored(s1.as_bytes(), s2.as_bytes())
    }

    /// Like [`JaroWinkler::distance_units`], also reporting truncation.
    pub fn distance_units_scored<U: PartialEq>(&mut self, s1: &[U], s2: &[U]) -> Score {
        let Score { value, truncated } = self.jaro.distance_units_scored(s1, s2);
        Score {
            value: apply_prefix_bonus(value, common_prefix_len(s1, s2), self.prefix_scale),
            truncated,
        }
    }
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: PartialEq> ScratchMetric<U> for JaroWinkler {
    fn similarity(&mut self, a: &[U], b: &[U]) -> f64 {
        self.distance_units(a, b)
    }
}

/// Stateless Jaro-Winkler similarity with the default prefix scale.
///
/// Allocates per call; see [`jaro`](fn@crate::jaro).
///
/// ```rust
/// assert_eq!(simetra::jaro_winkler("jones", "johnson"), 0.8323809523809523);
/// ```
#[must_use]
pub fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    jaro_winkler_units(s1.as_bytes(), s2.as_bytes())
}

/// Stateless Jaro-Winkler similarity of two unit sequences.
#[must_use]
pub fn jaro_winkler_units<U: PartialEq>(s1: &[U], s2: &[U]) -> f64 {
    apply_prefix_bonus(
        jaro_units(s1, s2),
        common_prefix_len(s1, s2),
        DEFAULT_PREFIX_SCALE,
    )
}

#[inline]
fn apply_prefix_bonus(jaro: f64, prefix_len: usize, prefix_scale: f64) -> f64 {
    jaro + prefix_len as f64 * prefix_scale * (1.0 - jaro)
}

/// Length of the shared prefix, at most [`MAX_PREFIX_LEN`].
#[inline]
fn common_prefix_len<U: PartialEq>(s1: &[U], s2: &[U]) -> usize {
    s1.iter()
        .zip(s2)
        .take(MAX_PREFIX_LEN)
        .take_while(|(a, b)| a == b)
        .count()
}

fn validate_prefix_scale(prefix_scale: f64) -> Result<()> {
    if prefix_scale.is_finite() && (0.0..=MAX_PREFIX_SCALE).contains(&prefix_scale) {
        Ok(())
    } else {
        Err(Error::InvalidPrefixScale(prefix_scale))
    }
}
