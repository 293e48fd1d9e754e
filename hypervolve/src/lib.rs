//! Population fitness-assignment strategies for neuroevolution
//! engines built around compact, decodable genomes.
//!
//! The crate defines the capability seams a search loop plugs into:
//! a [`Genome`] that decodes into a relaxation [`Network`], scalar
//! and pairwise scoring interfaces, and three population evaluation
//! strategies (batch staging, cached single-file scoring, and
//! single-elimination tournament coevolution) that write fitness
//! statistics back onto each genome. A geometric substrate encoder
//! producing decodable phenotype genomes is supplied by the
//! [`hypervolve-substrate`](https://crates.io/crates/hypervolve-substrate)
//! crate.
//!
//! This crate was implemented as both a learning exercise in using
//! Rust and as a tool for my own experimentation. Critiques and
//! contributions are welcome.
//!
//! # Example usage: scoring a population in single file
//! ```
//! use hypervolve::{
//!     ActivationType, EvaluationConfig, Genome, Network, NetworkEvaluator,
//!     SingleFileEvaluator, DEFAULT_FITNESS_FLOOR,
//! };
//!
//! // A one-gain network: relaxes its input through a single weight.
//! struct GainNetwork {
//!     gain: f32,
//!     input: f32,
//!     signal: f32,
//! }
//!
//! impl Network for GainNetwork {
//!     fn clear_state(&mut self) {
//!         self.input = 0.0;
//!         self.signal = 0.0;
//!     }
//!
//!     fn set_inputs(&mut self, inputs: &[f32]) {
//!         self.input = inputs.first().copied().unwrap_or(0.0);
//!     }
//!
//!     fn activate(&mut self) {
//!         self.signal = self.gain * self.input;
//!     }
//!
//!     fn output(&self, _index: usize) -> f32 {
//!         self.signal
//!     }
//!
//!     fn neuron_count(&self) -> usize {
//!         2
//!     }
//!
//!     fn input_count(&self) -> usize {
//!         1
//!     }
//!
//!     fn output_count(&self) -> usize {
//!         1
//!     }
//! }
//!
//! // A genome carrying the gain directly, plus its fitness statistics.
//! struct GainGenome {
//!     gain: f32,
//!     fitness: f32,
//!     total_fitness: f32,
//!     evaluations: usize,
//! }
//!
//! impl GainGenome {
//!     fn new(gain: f32) -> GainGenome {
//!         GainGenome {
//!             gain,
//!             fitness: 0.0,
//!             total_fitness: 0.0,
//!             evaluations: 0,
//!         }
//!     }
//! }
//!
//! impl Genome for GainGenome {
//!     type Network = GainNetwork;
//!
//!     fn decode(&self, _activation: ActivationType) -> Option<GainNetwork> {
//!         Some(GainNetwork {
//!             gain: self.gain,
//!             input: 0.0,
//!             signal: 0.0,
//!         })
//!     }
//!
//!     fn fitness(&self) -> f32 {
//!         self.fitness
//!     }
//!
//!     fn set_fitness(&mut self, fitness: f32) {
//!         self.fitness = fitness;
//!     }
//!
//!     fn total_fitness(&self) -> f32 {
//!         self.total_fitness
//!     }
//!
//!     fn set_total_fitness(&mut self, fitness: f32) {
//!         self.total_fitness = fitness;
//!     }
//!
//!     fn evaluation_count(&self) -> usize {
//!         self.evaluations
//!     }
//!
//!     fn set_evaluation_count(&mut self, count: usize) {
//!         self.evaluations = count;
//!     }
//! }
//!
//! // Networks doubling their input score highest.
//! struct DoublingScore;
//!
//! impl NetworkEvaluator for DoublingScore {
//!     type Network = GainNetwork;
//!
//!     fn evaluate(&mut self, network: &mut GainNetwork) -> f32 {
//!         network.clear_state();
//!         network.set_inputs(&[1.0]);
//!         network.activate();
//!         2.0 - (network.output(0) - 2.0).abs()
//!     }
//! }
//!
//! let config = EvaluationConfig {
//!     fitness_floor: DEFAULT_FITNESS_FLOOR,
//!     ..EvaluationConfig::zero()
//! };
//! let mut evaluator = SingleFileEvaluator::new(DoublingScore, &config).unwrap();
//!
//! let mut population = vec![
//!     GainGenome::new(0.5),
//!     GainGenome::new(2.0),
//!     GainGenome::new(3.0),
//! ];
//! evaluator.evaluate_population(&mut population);
//!
//! assert_eq!(evaluator.evaluation_count(), 3);
//! assert_eq!(population[1].fitness(), 2.0);
//! assert!(population[1].fitness() > population[0].fitness());
//! ```

mod evaluation;
mod genome;

pub use evaluation::*;
pub use genome::*;
