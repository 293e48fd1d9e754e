use super::ConfigError;
use crate::ActivationType;

use std::num::NonZeroUsize;

/// Default minimum fitness assigned to genomes that cannot be
/// meaningfully scored. Kept above zero so selection schemes
/// dividing by fitness sums stay well-defined.
pub const DEFAULT_FITNESS_FLOOR: f32 = 1e-7;

/// Configuration data for population evaluation.
///
/// An `EvaluationConfig` is built once by the caller and passed
/// by reference into every evaluator constructor; evaluators keep
/// their own copy for the duration of their lifetime.
#[derive(Clone, Debug)]
pub struct EvaluationConfig {
    /// Minimum fitness assigned to any genome, and the fallback
    /// value for genomes that fail to decode or play no matches.
    /// Must be finite and greater than zero.
    pub fitness_floor: f32,
    /// Activation function passed to [`Genome::decode`].
    ///
    /// [`Genome::decode`]: crate::Genome::decode
    pub activation: ActivationType,
    /// Thread-count hint for an external parallel evaluation layer.
    /// The evaluators themselves are single-pass and sequential.
    pub threads: NonZeroUsize,
}

impl EvaluationConfig {
    /// Returns a "zero-valued" default configuration.
    ///
    /// # Note
    /// This value is not suitable for use as-is: evaluator
    /// constructors reject a zero fitness floor. It is meant as
    /// a way to fill in unused values during configuration
    /// instantiation.
    ///
    /// # Examples
    /// ```
    /// use hypervolve::{EvaluationConfig, DEFAULT_FITNESS_FLOOR};
    ///
    /// let config = EvaluationConfig {
    ///     fitness_floor: DEFAULT_FITNESS_FLOOR,
    ///     ..EvaluationConfig::zero()
    /// };
    /// ```
    pub const fn zero() -> EvaluationConfig {
        EvaluationConfig {
            fitness_floor: 0.0,
            activation: ActivationType::Identity,
            // SAFETY: 1 is a valid NonZeroUsize. Replace this with
            // NonZeroUsize::new(1).unwrap() once const Option::unwrap
            // becomes stable.
            threads: unsafe { NonZeroUsize::new_unchecked(1) },
        }
    }

    /// Checks that every required value has been resolved to
    /// something usable. A zero floor means the value was never
    /// set, and is rejected rather than silently accepted.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.fitness_floor.is_finite() || self.fitness_floor <= 0.0 {
            return Err(ConfigError::NonPositiveFitnessFloor(self.fitness_floor));
        }
        Ok(())
    }
}
