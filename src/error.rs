//! Error type for calculator configuration and capped inputs.
//!
//! Metric computations themselves never fail; every input, including empty
//! sequences, produces a defined score. Errors only arise when a calculator
//! is built with an unusable configuration, or when an input exceeds a cap the
//! caller explicitly asked to be enforced.

/// Errors returned by `simetra`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A maximum sequence length of zero was requested.
    #[error("maximum sequence length must be at least 1")]
    InvalidMaxLen,

    /// The Jaro-Winkler prefix scale is outside `[0, 0.25]` or not finite.
    ///
    /// Above 0.25 the bonus for a 4-unit prefix can push the score past 1.0.
    #[error("prefix scale must be a finite value in [0, 0.25], got {0}")]
    InvalidPrefixScale(f64),

    /// An input is longer than the calculator's configured cap.
    #[error("input of length {len} exceeds the configured maximum of {max}")]
    InputTooLong {
        /// Length of the offending input, in units.
        len: usize,
        /// Configured maximum, in units.
        max: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
