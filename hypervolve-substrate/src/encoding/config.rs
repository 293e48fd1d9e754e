use super::ConfigError;

use hypervolve::ActivationType;

use serde::{Deserialize, Serialize};

/// Configuration data for substrate construction.
///
/// A `SubstrateConfig` is built once by the caller and passed by
/// reference into [`Substrate::new`]; the substrate keeps its own
/// copy of each value.
///
/// [`Substrate::new`]: super::Substrate::new
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubstrateConfig {
    /// Pruning threshold: query signals whose magnitude does not
    /// exceed it produce no connection. Must be finite and within
    /// `[0, 1)`.
    pub threshold: f32,
    /// Magnitude a maximal query signal rescales to. Must be finite
    /// and greater than zero.
    pub weight_range: f32,
    /// Activation function assigned to every substrate neuron.
    pub activation: ActivationType,
}

impl SubstrateConfig {
    /// Returns a "zero-valued" default configuration.
    ///
    /// # Note
    /// This value is not suitable for use as-is:
    /// [`Substrate::new`] rejects a zero weight range. It is meant
    /// as a way to fill in unused values during configuration
    /// instantiation.
    ///
    /// [`Substrate::new`]: super::Substrate::new
    ///
    /// # Examples
    /// ```
    /// use hypervolve_substrate::encoding::SubstrateConfig;
    ///
    /// let config = SubstrateConfig {
    ///     threshold: 0.2,
    ///     weight_range: 3.0,
    ///     ..SubstrateConfig::zero()
    /// };
    /// ```
    pub const fn zero() -> SubstrateConfig {
        SubstrateConfig {
            threshold: 0.0,
            weight_range: 0.0,
            activation: ActivationType::Identity,
        }
    }

    /// Checks that every required value has been resolved to
    /// something usable. A zero weight range means the value was
    /// never set, and is rejected rather than silently accepted.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || !(0.0..1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        if !self.weight_range.is_finite() || self.weight_range <= 0.0 {
            return Err(ConfigError::NonPositiveWeightRange(self.weight_range));
        }
        Ok(())
    }
}
