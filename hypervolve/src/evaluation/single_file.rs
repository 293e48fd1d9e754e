use super::{ConfigError, EvaluationConfig, NetworkEvaluator};
use crate::{Genome, Network};

/// A population evaluator that scores new genomes in single file,
/// using a scalar network evaluator provided at construction.
///
/// Only genomes with an evaluation count of zero are touched: once
/// scored, a genome is never rescored unless its count is reset
/// externally. This suits experiments where genomes are evaluated
/// independently of each other against a fixed objective.
pub struct SingleFileEvaluator<E> {
    evaluator: E,
    config: EvaluationConfig,
    evaluations: u64,
}

impl<E> SingleFileEvaluator<E> {
    /// Creates a new single-file evaluator.
    ///
    /// # Errors
    /// Returns an error if the configuration holds an unresolved
    /// fitness floor.
    pub fn new(evaluator: E, config: &EvaluationConfig) -> Result<SingleFileEvaluator<E>, ConfigError> {
        config.validate()?;
        Ok(SingleFileEvaluator {
            evaluator,
            config: config.clone(),
            evaluations: 0,
        })
    }

    /// Scores each new genome in the population, decoding through
    /// the standard [`Genome::decode`] path.
    ///
    /// [`Genome::decode`]: crate::Genome::decode
    pub fn evaluate_population<G, N>(&mut self, population: &mut [G])
    where
        G: Genome<Network = N>,
        N: Network,
        E: NetworkEvaluator<Network = N>,
    {
        let activation = self.config.activation;
        self.evaluate_population_with(population, |genome| genome.decode(activation));
    }

    /// Scores each new genome in the population, decoding through
    /// the supplied function instead of [`Genome::decode`].
    ///
    /// Genomes that yield no network take the fitness floor; all
    /// others take the evaluator's score, floored. Either way the
    /// genome counts as evaluated once.
    ///
    /// [`Genome::decode`]: crate::Genome::decode
    pub fn evaluate_population_with<G, N, D>(&mut self, population: &mut [G], mut decode: D)
    where
        G: Genome<Network = N>,
        N: Network,
        E: NetworkEvaluator<Network = N>,
        D: FnMut(&G) -> Option<N>,
    {
        for genome in population.iter_mut() {
            if genome.evaluation_count() != 0 {
                continue;
            }

            match decode(genome) {
                Some(mut network) => {
                    let score = self.evaluator.evaluate(&mut network);
                    genome.set_fitness(score.max(self.config.fitness_floor));
                }
                // Future genomes may not decode - handle the possibility.
                None => genome.set_fitness(self.config.fitness_floor),
            }

            genome.set_total_fitness(genome.fitness());
            genome.set_evaluation_count(1);

            self.evaluations += 1;
        }
    }

    /// Number of genomes scored across all calls.
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
