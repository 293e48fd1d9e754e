//! # Hypervolve-Substrate
//! A substrate encoder for the [`hypervolve`](https://crates.io/crates/hypervolve)
//! crate: expands a compact genotype [`Network`] into a much larger
//! phenotype genome by querying it at the geometric coordinates of
//! candidate connections.
//!
//! The substrate holds a fixed arrangement of input, output and
//! hidden neuron slots. Each candidate connection between slots is
//! mapped to a four-value coordinate vector, the genotype network
//! is relaxed on it, and sufficiently strong output signals become
//! weighted phenotype connections. Genotype size is thereby
//! decoupled from phenotype size.
//!
//! [`Network`]: hypervolve::Network
//!
//! # Example usage: encoding against a constant genotype
//! ```
//! use hypervolve::Network;
//! use hypervolve_substrate::encoding::{Substrate, SubstrateConfig};
//!
//! // A genotype stub that answers 0.5 to every query.
//! struct HalfSignal {
//!     inputs: [f32; 4],
//! }
//!
//! impl Network for HalfSignal {
//!     fn clear_state(&mut self) {
//!         self.inputs = [0.0; 4];
//!     }
//!
//!     fn set_inputs(&mut self, inputs: &[f32]) {
//!         self.inputs[..inputs.len()].copy_from_slice(inputs);
//!     }
//!
//!     fn activate(&mut self) {}
//!
//!     fn output(&self, _index: usize) -> f32 {
//!         0.5
//!     }
//!
//!     fn neuron_count(&self) -> usize {
//!         6
//!     }
//!
//!     fn input_count(&self) -> usize {
//!         4
//!     }
//!
//!     fn output_count(&self) -> usize {
//!         1
//!     }
//! }
//!
//! let config = SubstrateConfig {
//!     threshold: 0.1,
//!     weight_range: 3.0,
//!     ..SubstrateConfig::zero()
//! };
//! let substrate = Substrate::new(2, 1, 0, &config).unwrap();
//!
//! let mut genotype = HalfSignal { inputs: [0.0; 4] };
//! let genome = substrate.generate_genome(&mut genotype).unwrap();
//!
//! // Two candidate connections, both passing the threshold.
//! assert_eq!(genome.neurons().len(), 3);
//! assert_eq!(genome.connections().len(), 2);
//! for connection in genome.connections() {
//!     assert!((connection.weight() - 4.0 / 3.0).abs() < 1e-5);
//! }
//! ```

pub mod encoding;

/// Identifier type for substrate neurons and connections.
pub type Innovation = usize;
