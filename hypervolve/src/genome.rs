use serde::{Deserialize, Serialize};

/// An ActivationType names the activation function
/// a decoded neuron will use.
///
/// The numeric implementation belongs to the network
/// execution layer; evaluators and encoders only pass
/// the reference along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ActivationType {
    // 1 / (1 + exp(-4.9x))
    Sigmoid,
    // x
    Identity,
    // 0   if x < 0
    // x   if x ≥ 0
    ReLU,
    // exp(-x²)
    Gaussian,
    // sin(πx)
    Sinusoidal,
}

/// An interface for relaxation networks that can be queried
/// by the evaluators and the substrate encoder.
///
/// A network holds per-neuron signal state between calls:
/// inputs are injected, the network is stepped some number
/// of times, and output signals are read back.
pub trait Network {
    /// Resets all internal signal state.
    fn clear_state(&mut self);

    /// Injects an input vector. Slices shorter than the
    /// network's input layer leave the remaining inputs cleared.
    fn set_inputs(&mut self, inputs: &[f32]);

    /// Advances the network by one relaxation step.
    fn activate(&mut self);

    /// Reads the signal of the output neuron at `index`.
    fn output(&self, index: usize) -> f32;

    /// Total number of neurons in the network.
    fn neuron_count(&self) -> usize;

    /// Number of input neurons.
    fn input_count(&self) -> usize;

    /// Number of output neurons.
    fn output_count(&self) -> usize;
}

/// An interface for genomes whose fitness can be assigned
/// by a population evaluator.
///
/// The genome's own genetic operators are of no concern here;
/// evaluators only decode genomes into networks and write the
/// resulting fitness statistics back.
pub trait Genome {
    type Network: Network;

    /// Decodes the genome into an executable network, using the
    /// given activation function for neurons that don't specify
    /// their own. Returns `None` if the genome doesn't decode.
    fn decode(&self, activation: ActivationType) -> Option<Self::Network>;

    /// Returns the genome's fitness value.
    fn fitness(&self) -> f32;

    /// Sets the genome's fitness value.
    fn set_fitness(&mut self, fitness: f32);

    /// Returns the genome's accumulated fitness value.
    fn total_fitness(&self) -> f32;

    /// Sets the genome's accumulated fitness value.
    fn set_total_fitness(&mut self, fitness: f32);

    /// Returns the number of evaluations the genome has undergone.
    fn evaluation_count(&self) -> usize;

    /// Sets the number of evaluations the genome has undergone.
    fn set_evaluation_count(&mut self, count: usize);
}
