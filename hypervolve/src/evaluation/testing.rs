//! Stub genomes and networks shared by the evaluator tests.

use crate::{ActivationType, Genome, Network};

/// A relaxation network that emits a fixed signal on every output,
/// regardless of inputs or stepping.
pub(crate) struct ConstantNetwork {
    signal: f32,
    inputs: Vec<f32>,
}

impl ConstantNetwork {
    pub(crate) fn new(signal: f32) -> ConstantNetwork {
        ConstantNetwork {
            signal,
            inputs: vec![],
        }
    }
}

impl Network for ConstantNetwork {
    fn clear_state(&mut self) {
        self.inputs.clear();
    }

    fn set_inputs(&mut self, inputs: &[f32]) {
        self.inputs = inputs.to_vec();
    }

    fn activate(&mut self) {}

    fn output(&self, _index: usize) -> f32 {
        self.signal
    }

    fn neuron_count(&self) -> usize {
        4
    }

    fn input_count(&self) -> usize {
        2
    }

    fn output_count(&self) -> usize {
        1
    }
}

/// A genome that decodes to a [`ConstantNetwork`] carrying its
/// stored signal, or refuses to decode at all.
pub(crate) struct StubGenome {
    signal: f32,
    decodable: bool,
    fitness: f32,
    total_fitness: f32,
    evaluations: usize,
}

impl StubGenome {
    pub(crate) fn new(signal: f32) -> StubGenome {
        StubGenome {
            signal,
            decodable: true,
            fitness: 0.0,
            total_fitness: 0.0,
            evaluations: 0,
        }
    }

    pub(crate) fn undecodable() -> StubGenome {
        StubGenome {
            decodable: false,
            ..StubGenome::new(0.0)
        }
    }
}

impl Genome for StubGenome {
    type Network = ConstantNetwork;

    fn decode(&self, _activation: ActivationType) -> Option<ConstantNetwork> {
        self.decodable.then(|| ConstantNetwork::new(self.signal))
    }

    fn fitness(&self) -> f32 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f32) {
        self.fitness = fitness;
    }

    fn total_fitness(&self) -> f32 {
        self.total_fitness
    }

    fn set_total_fitness(&mut self, fitness: f32) {
        self.total_fitness = fitness;
    }

    fn evaluation_count(&self) -> usize {
        self.evaluations
    }

    fn set_evaluation_count(&mut self, count: usize) {
        self.evaluations = count;
    }
}
