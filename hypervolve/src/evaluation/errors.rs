use std::error::Error;
use std::fmt;

/// An error type indicating an evaluator was constructed
/// from an unresolved configuration value.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The fitness floor was zero, negative, or not finite.
    NonPositiveFitnessFloor(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveFitnessFloor(floor) => write!(
                f,
                "evaluator construction with unresolved fitness floor {}",
                floor
            ),
        }
    }
}

impl Error for ConfigError {}
