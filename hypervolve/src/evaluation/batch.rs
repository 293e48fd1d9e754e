use super::{ConfigError, EvaluationConfig, NetworkEvaluator};
use crate::{Genome, Network};

/// A population evaluator that decodes every genome unconditionally,
/// retaining the decoded networks for a separate inspection step.
///
/// This variant performs no scoring of its own: every genome is
/// pinned to the configured fitness floor and marked as evaluated
/// once, while the decoded networks are kept by population slot and
/// exposed through [`networks`]. A downstream layer that scores the
/// staged networks can then overwrite the placeholder fitnesses.
/// The scalar evaluator given at construction is held only for its
/// status message.
///
/// [`networks`]: BatchEvaluator::networks
pub struct BatchEvaluator<E, N> {
    evaluator: E,
    config: EvaluationConfig,
    evaluations: u64,
    networks: Vec<Option<N>>,
}

impl<E, N: Network> BatchEvaluator<E, N> {
    /// Creates a new batch evaluator.
    ///
    /// # Errors
    /// Returns an error if the configuration holds an unresolved
    /// fitness floor.
    pub fn new(evaluator: E, config: &EvaluationConfig) -> Result<BatchEvaluator<E, N>, ConfigError> {
        config.validate()?;
        Ok(BatchEvaluator {
            evaluator,
            config: config.clone(),
            evaluations: 0,
            networks: vec![],
        })
    }

    /// Decodes each genome in the population in single file,
    /// regardless of its prior evaluation state.
    ///
    /// Any networks staged by a previous call are discarded.
    pub fn evaluate_population<G>(&mut self, population: &mut [G])
    where
        G: Genome<Network = N>,
    {
        self.networks.clear();
        self.networks.reserve(population.len());
        for genome in population.iter_mut() {
            let network = genome.decode(self.config.activation);
            self.networks.push(network);

            // Placeholder statistics; scoring happens elsewhere.
            genome.set_fitness(self.config.fitness_floor);
            genome.set_total_fitness(self.config.fitness_floor);
            genome.set_evaluation_count(1);

            self.evaluations += 1;
        }
    }

    /// Networks decoded during the most recent call, by population
    /// slot. A `None` entry marks a genome that failed to decode.
    pub fn networks(&self) -> &[Option<N>] {
        &self.networks
    }

    /// Mutable access to the staged networks, for scoring layers
    /// that need to drive them.
    pub fn networks_mut(&mut self) -> &mut [Option<N>] {
        &mut self.networks
    }

    /// Number of genomes decoded across all calls.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    /// Passes on the scalar evaluator's status message.
    pub fn state_message(&self) -> String
    where
        E: NetworkEvaluator,
    {
        self.evaluator.state_message()
    }

    /// Only relevant to incremental evolution experiments.
    pub fn best_is_intermediate_champion(&self) -> bool {
        false
    }

    /// Not supported by the search loop; always `false`.
    pub fn search_complete(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{ConstantNetwork, StubGenome};
    use super::*;
    use crate::evaluation::DEFAULT_FITNESS_FLOOR;

    fn config() -> EvaluationConfig {
        EvaluationConfig {
            fitness_floor: DEFAULT_FITNESS_FLOOR,
            ..EvaluationConfig::zero()
        }
    }

    struct NeverScores;

    impl NetworkEvaluator for NeverScores {
        type Network = ConstantNetwork;

        fn evaluate(&mut self, _network: &mut ConstantNetwork) -> f32 {
            panic!("the batch variant must not score networks");
        }

        fn state_message(&self) -> String {
            String::from("staging")
        }
    }

    #[test]
    fn rejects_zero_config() {
        assert!(BatchEvaluator::<NeverScores, ConstantNetwork>::new(
            NeverScores,
            &EvaluationConfig::zero()
        )
        .is_err());
    }

    #[test]
    fn floors_all_genomes_regardless_of_decode_outcome() {
        let mut population = vec![
            StubGenome::new(0.5),
            StubGenome::new(1.5),
            StubGenome::undecodable(),
            StubGenome::new(-0.25),
            StubGenome::undecodable(),
        ];
        let mut evaluator = BatchEvaluator::new(NeverScores, &config()).unwrap();

        evaluator.evaluate_population(&mut population);

        for genome in &population {
            assert_eq!(genome.fitness(), DEFAULT_FITNESS_FLOOR);
            assert_eq!(genome.total_fitness(), DEFAULT_FITNESS_FLOOR);
            assert_eq!(genome.evaluation_count(), 1);
        }
        assert_eq!(evaluator.evaluation_count(), 5);
    }

    #[test]
    fn retains_networks_by_population_slot() {
        let mut population = vec![
            StubGenome::new(0.5),
            StubGenome::undecodable(),
            StubGenome::new(2.0),
        ];
        let mut evaluator = BatchEvaluator::new(NeverScores, &config()).unwrap();

        evaluator.evaluate_population(&mut population);

        let networks = evaluator.networks();
        assert_eq!(networks.len(), 3);
        assert_eq!(networks[0].as_ref().map(|n| n.output(0)), Some(0.5));
        assert!(networks[1].is_none());
        assert_eq!(networks[2].as_ref().map(|n| n.output(0)), Some(2.0));
    }

    #[test]
    fn replaces_staged_networks_on_each_call() {
        let mut population = vec![StubGenome::new(1.0), StubGenome::new(2.0)];
        let mut evaluator = BatchEvaluator::new(NeverScores, &config()).unwrap();

        evaluator.evaluate_population(&mut population);
        evaluator.evaluate_population(&mut population[..1]);

        assert_eq!(evaluator.networks().len(), 1);
        assert_eq!(evaluator.evaluation_count(), 3);
    }

    #[test]
    fn passes_on_state_message() {
        let evaluator = BatchEvaluator::<_, ConstantNetwork>::new(NeverScores, &config()).unwrap();
        assert_eq!(evaluator.state_message(), "staging");
    }
}
