use std::error::Error;
use std::fmt;

/// An error type indicating a substrate was constructed from an
/// unresolved configuration value.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The pruning threshold was outside `[0, 1)` or not finite.
    ThresholdOutOfRange(f32),
    /// The weight range was zero, negative, or not finite.
    NonPositiveWeightRange(f32),
}

/// An error type indicating a failure during substrate encoding.
#[derive(Debug, PartialEq)]
pub enum SubstrateError {
    /// A queried node index lies outside every declared layer
    /// range. Unreachable through the built-in iteration; a custom
    /// layout addressing nodes it was never given can trigger it.
    InvalidNode(usize),
    /// The substrate's configuration did not validate.
    Config(ConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdOutOfRange(threshold) => write!(
                f,
                "substrate construction with unresolved pruning threshold {}",
                threshold
            ),
            Self::NonPositiveWeightRange(range) => write!(
                f,
                "substrate construction with unresolved weight range {}",
                range
            ),
        }
    }
}

impl fmt::Display for SubstrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNode(node) => {
                write!(f, "queried node index {} outside all substrate layers", node)
            }
            Self::Config(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ConfigError {}
impl Error for SubstrateError {}
