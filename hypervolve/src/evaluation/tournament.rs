use super::{ConfigError, EvaluationConfig, FitnessPair, NetworkPairEvaluator};
use crate::Genome;

use rand::prelude::SliceRandom;
use rand::rngs::ThreadRng;
use rand::Rng;

/// A match played between two population slots during a bracket.
#[derive(Clone, Copy, Debug)]
struct MatchRecord {
    first: usize,
    second: usize,
    scores: FitnessPair,
}

/// A population evaluator assigning fitness through a randomized
/// single-elimination tournament, for tasks where a genome's worth
/// is only meaningful relative to an opponent.
///
/// Each call shuffles the population into a fresh bracket and plays
/// a budget of `floor(log2(n))` passes, halving the active set as
/// winners advance. A genome's fitness is the mean of its own scores
/// over the matches it played, floored at the configured minimum;
/// entrants that never play take the floor outright.
///
/// Losers keep the scores from the matches they did play, so the
/// whole population is ranked, not just the finalists.
pub struct TournamentEvaluator<P, R = ThreadRng> {
    evaluator: P,
    config: EvaluationConfig,
    rng: R,
    evaluations: u64,
}

impl<P> TournamentEvaluator<P, ThreadRng> {
    /// Creates a new tournament evaluator drawing brackets from the
    /// thread-local generator.
    ///
    /// # Errors
    /// Returns an error if the configuration holds an unresolved
    /// fitness floor.
    pub fn new(evaluator: P, config: &EvaluationConfig) -> Result<TournamentEvaluator<P, ThreadRng>, ConfigError> {
        Self::with_rng(evaluator, config, rand::thread_rng())
    }
}

impl<P, R: Rng> TournamentEvaluator<P, R> {
    /// Creates a new tournament evaluator drawing brackets from the
    /// given generator. Inject a seeded generator for reproducible
    /// brackets.
    ///
    /// # Errors
    /// Returns an error if the configuration holds an unresolved
    /// fitness floor.
    pub fn with_rng(evaluator: P, config: &EvaluationConfig, rng: R) -> Result<TournamentEvaluator<P, R>, ConfigError> {
        config.validate()?;
        Ok(TournamentEvaluator {
            evaluator,
            config: config.clone(),
            rng,
            evaluations: 0,
        })
    }

    /// Runs one tournament over the population and writes the
    /// resulting fitness statistics back onto every genome.
    ///
    /// Each genome's evaluation count grows by the number of matches
    /// it actually played this call.
    pub fn evaluate_population<G>(&mut self, population: &mut [G])
    where
        G: Genome,
        P: NetworkPairEvaluator<Network = G::Network>,
    {
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.shuffle(&mut self.rng);

        let matches = self.run_bracket(population, &order);
        self.assign_fitness(population, &matches);
    }

    /// Plays out the bracket seeded by `order`, returning the match
    /// records accumulated across all passes.
    fn run_bracket<G>(&mut self, population: &[G], order: &[usize]) -> Vec<MatchRecord>
    where
        G: Genome,
        P: NetworkPairEvaluator<Network = G::Network>,
    {
        let mut matches = vec![];
        if population.len() < 2 {
            return matches;
        }

        // The budget is floor(log2(n)) passes counted in steps of
        // two, so roughly half the halvings of a played-out bracket.
        let round_budget = population.len().ilog2() as usize;
        let mut active = order.to_vec();

        let mut pass = 0;
        while pass < round_budget {
            let working = std::mem::take(&mut active);
            // Disjoint consecutive pairs; an unpaired trailing entry
            // sits this pass out and does not advance.
            for pair in working.chunks_exact(2) {
                let (first, second) = (pair[0], pair[1]);
                let first_network = population[first].decode(self.config.activation);
                let second_network = population[second].decode(self.config.activation);
                match (first_network, second_network) {
                    (Some(mut a), Some(mut b)) => {
                        let scores = self.evaluator.evaluate_pair(&mut a, &mut b);
                        matches.push(MatchRecord { first, second, scores });
                        self.evaluations += 1;
                        // Strictly higher advances; a tie goes to the
                        // second of the pair.
                        if scores.first > scores.second {
                            active.push(first);
                        } else {
                            active.push(second);
                        }
                    }
                    // An unopposed genome advances without a match
                    // on record; scoring failures never abort the pass.
                    (Some(_), None) => active.push(first),
                    _ => active.push(second),
                }
            }
            pass += 2;
        }

        matches
    }

    /// Folds the match records into per-slot score totals and match
    /// counts, then assigns each genome the mean of its own scores.
    fn assign_fitness<G: Genome>(&self, population: &mut [G], matches: &[MatchRecord]) {
        let mut totals = vec![0.0f32; population.len()];
        let mut played = vec![0usize; population.len()];
        for record in matches {
            totals[record.first] += record.scores.first;
            totals[record.second] += record.scores.second;
            played[record.first] += 1;
            played[record.second] += 1;
        }

        for (slot, genome) in population.iter_mut().enumerate() {
            // A genome with no matches on record has no meaningful
            // relative score; it takes the floor, never a division.
            let fitness = if played[slot] == 0 {
                self.config.fitness_floor
            } else {
                (totals[slot] / played[slot] as f32).max(self.config.fitness_floor)
            };
            genome.set_fitness(fitness);
            genome.set_total_fitness(fitness);
            genome.set_evaluation_count(genome.evaluation_count() + played[slot]);
        }
    }

    /// Number of matches scored across all calls.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    /// The pairwise evaluator carries no status message.
    pub fn state_message(&self) -> String {
        String::new()
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
