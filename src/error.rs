//! Configuration errors.
//!
//! Every runner validates its configuration and inputs before searching and
//! reports problems through [`ConfigError`] instead of panicking.

use thiserror::Error;

/// Result alias used by the runners.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid search configuration or inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The target string has no characters.
    #[error("target must not be empty")]
    EmptyTarget,

    /// The alphabet has no symbols to draw from.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// The target uses a symbol the alphabet cannot produce.
    #[error("target symbol {symbol:?} is not in the alphabet")]
    SymbolOutsideAlphabet {
        /// The first offending symbol, lowercased.
        symbol: char,
    },

    /// A candidate does not have the target's length.
    #[error("candidate has length {actual}, target has length {expected}")]
    LengthMismatch {
        /// Length of the target in characters.
        expected: usize,
        /// Length of the offending candidate in characters.
        actual: usize,
    },

    /// A numeric parameter is out of range.
    #[error("invalid {parameter}: {reason}")]
    InvalidParameter {
        /// Name of the configuration field.
        parameter: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Checks that `target` is non-empty and `candidate` has the same length.
pub(crate) fn check_lengths(target: &str, candidate: &str) -> Result<usize> {
    let expected = target.chars().count();
    if expected == 0 {
        return Err(ConfigError::EmptyTarget);
    }
    let actual = candidate.chars().count();
    if actual != expected {
        return Err(ConfigError::LengthMismatch { expected, actual });
    }
    Ok(expected)
}
