use hypervolve::logging::{EvaluationLogger, Stats};
use hypervolve::{
    ActivationType, EvaluationConfig, FitnessPair, Genome, Network, NetworkPairEvaluator,
    TournamentEvaluator, DEFAULT_FITNESS_FLOOR,
};
use hypervolve_substrate::encoding::{Substrate, SubstrateConfig};

use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const POPULATION_SIZE: usize = 64;
const GENERATIONS: usize = 60;
const RUNS: usize = 16;

const INPUTS: usize = 4;
const HIDDEN: usize = 3;
const WEIGHTS: usize = INPUTS * HIDDEN + HIDDEN;

/// A fixed-topology genotype: the weights of a 4-3-1 relaxation
/// network laid out flat, hidden weights first.
#[derive(Clone)]
struct DuelGenome {
    weights: [f32; WEIGHTS],
    fitness: f32,
    total_fitness: f32,
    evaluations: usize,
}

impl DuelGenome {
    fn random(rng: &mut impl Rng) -> DuelGenome {
        let mut weights = [0.0; WEIGHTS];
        for weight in weights.iter_mut() {
            *weight = rng.gen_range(-1.0..=1.0);
        }
        DuelGenome {
            weights,
            fitness: 0.0,
            total_fitness: 0.0,
            evaluations: 0,
        }
    }

    /// Jittered copy with cleared statistics, for the truncation
    /// step between generations.
    fn offspring(&self, rng: &mut impl Rng) -> DuelGenome {
        let mut weights = self.weights;
        for weight in weights.iter_mut() {
            *weight = (*weight + rng.gen_range(-0.2..=0.2)).clamp(-1.0, 1.0);
        }
        DuelGenome {
            weights,
            fitness: 0.0,
            total_fitness: 0.0,
            evaluations: 0,
        }
    }
}

impl Genome for DuelGenome {
    type Network = DuelNetwork;

    fn decode(&self, _activation: ActivationType) -> Option<DuelNetwork> {
        Some(DuelNetwork {
            weights: self.weights,
            inputs: [0.0; INPUTS],
            hidden: [0.0; HIDDEN],
            signal: 0.0,
        })
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

struct DuelNetwork {
    weights: [f32; WEIGHTS],
    inputs: [f32; INPUTS],
    hidden: [f32; HIDDEN],
    signal: f32,
}

impl Network for DuelNetwork {
    fn clear_state(&mut self) {
        self.inputs = [0.0; INPUTS];
        self.hidden = [0.0; HIDDEN];
        self.signal = 0.0;
    }

    fn set_inputs(&mut self, inputs: &[f32]) {
        let count = inputs.len().min(INPUTS);
        self.inputs[..count].copy_from_slice(&inputs[..count]);
    }

    fn activate(&mut self) {
        for (slot, weights) in self.weights.chunks_exact(INPUTS).take(HIDDEN).enumerate() {
            self.hidden[slot] = weights
                .iter()
                .zip(&self.inputs)
                .map(|(weight, input)| weight * input)
                .sum::<f32>()
                .tanh();
        }
        self.signal = self.weights[INPUTS * HIDDEN..]
            .iter()
            .zip(&self.hidden)
            .map(|(weight, hidden)| weight * hidden)
            .sum::<f32>()
            .tanh();
    }

    fn output(&self, _index: usize) -> f32 {
        self.signal
    }

    fn neuron_count(&self) -> usize {
        INPUTS + HIDDEN + 1
    }

    fn input_count(&self) -> usize {
        INPUTS
    }

    fn output_count(&self) -> usize {
        1
    }
}

const PROBES: [[f32; 4]; 4] = [
    [-1.0, -1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0, -1.0],
    [0.5, -0.5, -0.5, 0.5],
    [1.0, 1.0, -1.0, -1.0],
];

/// The matching game: at each probe point the first player tries to
/// land on the second's move, the second tries to slip away. Scores
/// are complementary, so fitness only means anything relative to
/// the opponent pool.
struct MatchingDuel;

impl NetworkPairEvaluator for MatchingDuel {
    type Network = DuelNetwork;

    fn evaluate_pair(&mut self, first: &mut DuelNetwork, second: &mut DuelNetwork) -> FitnessPair {
        let mut escape = 0.0;
        for probe in PROBES.iter() {
            let chase = move_at(first, probe);
            let flee = move_at(second, probe);
            // Moves live in [-1, 1]; half the gap normalizes to [0, 1].
            escape += (chase - flee).abs() / 2.0;
        }
        escape /= PROBES.len() as f32;
        FitnessPair {
            first: 1.0 - escape,
            second: escape,
        }
    }
}

fn move_at(network: &mut DuelNetwork, probe: &[f32; 4]) -> f32 {
    network.clear_state();
    network.set_inputs(probe);
    network.activate();
    network.activate();
    network.output(0)
}

fn evolve(seed: u64, config: &EvaluationConfig) -> (f32, DuelGenome, EvaluationLogger) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut population: Vec<DuelGenome> = (0..POPULATION_SIZE)
        .map(|_| DuelGenome::random(&mut rng))
        .collect();
    let mut evaluator =
        TournamentEvaluator::with_rng(MatchingDuel, config, StdRng::seed_from_u64(!seed)).unwrap();
    let mut logger = EvaluationLogger::new();

    for _ in 0..GENERATIONS {
        evaluator.evaluate_population(&mut population);
        logger.log(&population, evaluator.evaluation_count());

        // Truncation step: the top half breeds jittered copies over
        // the bottom half.
        population
            .sort_unstable_by(|a, b| b.fitness().partial_cmp(&a.fitness()).unwrap());
        let (parents, rest) = population.split_at_mut(POPULATION_SIZE / 2);
        for (parent, slot) in parents.iter().zip(rest.iter_mut()) {
            *slot = parent.offspring(&mut rng);
        }
    }

    evaluator.evaluate_population(&mut population);
    let champion = population
        .iter()
        .max_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap())
        .unwrap()
        .clone();
    (champion.fitness(), champion, logger)
}

fn main() {
    let config = EvaluationConfig {
        fitness_floor: DEFAULT_FITNESS_FLOOR,
        activation: ActivationType::Sigmoid,
        threads: NonZeroUsize::new(4).unwrap(),
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.get())
        .build()
        .unwrap();

    let runs: Vec<(f32, DuelGenome, EvaluationLogger)> = pool.install(|| {
        (0..RUNS)
            .into_par_iter()
            .map(|run| evolve(run as u64, &config))
            .collect()
    });

    println!(
        "Champion fitness over {} runs: {}",
        RUNS,
        Stats::from(runs.iter().map(|(fitness, ..)| *fitness))
    );

    let (_, champion, logger) = runs
        .iter()
        .max_by(|(a, ..), (b, ..)| a.partial_cmp(b).unwrap())
        .unwrap();
    if let Some(log) = logger.iter().last() {
        println!("{}", log);
    }

    // Materialize the best genotype against a substrate and print
    // the resulting phenotype genome.
    let substrate_config = SubstrateConfig {
        threshold: 0.2,
        weight_range: 3.0,
        activation: ActivationType::Sigmoid,
    };
    let substrate = Substrate::new(5, 2, 4, &substrate_config).unwrap();
    let mut genotype = champion.decode(config.activation).unwrap();
    let phenotype = substrate.generate_genome(&mut genotype).unwrap();

    println!("{}", phenotype);
    println!("{}", ron::to_string(&phenotype).unwrap());
}
