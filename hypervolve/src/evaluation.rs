//! Population evaluation converts a population's decoded networks
//! into fitness values written back onto each genome, once per
//! generation of the outer search loop.
//!
//! Three strategies cover the common experiment shapes:
//! - [`BatchEvaluator`] decodes everything unconditionally and
//!   stages the networks for an external inspection step;
//! - [`SingleFileEvaluator`] scores new genomes one at a time
//!   against a fixed objective;
//! - [`TournamentEvaluator`] assigns relative fitness through
//!   randomized head-to-head matches.
//!
//! The [`PopulationEvaluator`] enum closes the set for callers that
//! pick a strategy at construction time.
mod batch;
mod config;
mod errors;
pub mod logging;
mod single_file;
#[cfg(test)]
mod testing;
mod tournament;

use crate::{Genome, Network};
pub use batch::BatchEvaluator;
pub use config::{EvaluationConfig, DEFAULT_FITNESS_FLOOR};
pub use errors::ConfigError;
pub use single_file::SingleFileEvaluator;
pub use tournament::TournamentEvaluator;

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An interface for scoring a single network against a fixed
/// objective.
pub trait NetworkEvaluator {
    type Network: Network;

    /// Returns the network's raw score. Evaluators may drive the
    /// network through any number of activations.
    fn evaluate(&mut self, network: &mut Self::Network) -> f32;

    /// A human-readable account of the evaluator's state.
    fn state_message(&self) -> String {
        String::new()
    }
}

/// The two scores produced by one head-to-head match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitnessPair {
    pub first: f32,
    pub second: f32,
}

/// An interface for scoring two networks against each other.
pub trait NetworkPairEvaluator {
    type Network: Network;

    /// Plays one match and returns each side's own score.
    fn evaluate_pair(
        &mut self,
        first: &mut Self::Network,
        second: &mut Self::Network,
    ) -> FitnessPair;
}

/// The closed set of population evaluation strategies, for callers
/// that select one at construction and drive it through a single
/// capability.
pub enum PopulationEvaluator<E, P, N, R = ThreadRng> {
    Batch(BatchEvaluator<E, N>),
    SingleFile(SingleFileEvaluator<E>),
    Tournament(TournamentEvaluator<P, R>),
}

impl<E, P, N, R> PopulationEvaluator<E, P, N, R>
where
    N: Network,
    R: Rng,
{
    /// Runs the selected strategy over the population, mutating
    /// every relevant genome's fitness, total fitness, and
    /// evaluation count.
    pub fn evaluate_population<G>(&mut self, population: &mut [G])
    where
        G: Genome<Network = N>,
        E: NetworkEvaluator<Network = N>,
        P: NetworkPairEvaluator<Network = N>,
    {
        match self {
            Self::Batch(evaluator) => evaluator.evaluate_population(population),
            Self::SingleFile(evaluator) => evaluator.evaluate_population(population),
            Self::Tournament(evaluator) => evaluator.evaluate_population(population),
        }
    }

    /// The strategy's running evaluation counter.
    pub fn evaluation_count(&self) -> u64 {
        match self {
            Self::Batch(evaluator) => evaluator.evaluation_count(),
            Self::SingleFile(evaluator) => evaluator.evaluation_count(),
            Self::Tournament(evaluator) => evaluator.evaluation_count(),
        }
    }

    /// A human-readable account of the strategy's state.
    pub fn state_message(&self) -> String
    where
        E: NetworkEvaluator<Network = N>,
    {
        match self {
            Self::Batch(evaluator) => evaluator.state_message(),
            Self::SingleFile(evaluator) => evaluator.state_message(),
            Self::Tournament(evaluator) => evaluator.state_message(),
        }
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
    use super::testing::{ConstantNetwork, StubGenome};
    use super::*;

    struct SignalScore;

    impl NetworkEvaluator for SignalScore {
        type Network = ConstantNetwork;

        fn evaluate(&mut self, network: &mut ConstantNetwork) -> f32 {
            network.output(0)
        }

        fn state_message(&self) -> String {
            String::from("scoring by first output signal")
        }
    }

    struct SignalDuel;

    impl NetworkPairEvaluator for SignalDuel {
        type Network = ConstantNetwork;

        fn evaluate_pair(
            &mut self,
            first: &mut ConstantNetwork,
            second: &mut ConstantNetwork,
        ) -> FitnessPair {
            FitnessPair {
                first: first.output(0),
                second: second.output(0),
            }
        }
    }

    fn config() -> EvaluationConfig {
        EvaluationConfig {
            fitness_floor: DEFAULT_FITNESS_FLOOR,
            ..EvaluationConfig::zero()
        }
    }

    #[test]
    fn strategies_share_one_capability() {
        let mut population = vec![StubGenome::new(1.0), StubGenome::new(2.0)];

        let mut strategy: PopulationEvaluator<SignalScore, SignalDuel, ConstantNetwork> =
            PopulationEvaluator::SingleFile(
                SingleFileEvaluator::new(SignalScore, &config()).unwrap(),
            );
        strategy.evaluate_population(&mut population);

        assert_eq!(strategy.evaluation_count(), 2);
        assert_eq!(strategy.state_message(), "scoring by first output signal");
        assert!(!strategy.best_is_intermediate_champion());
        assert!(!strategy.search_complete());
    }

    #[test]
    fn tournament_variant_dispatches() {
        let mut population: Vec<StubGenome> = (0..4)
            .map(|i| StubGenome::new((4 - i) as f32))
            .collect();

        let mut strategy: PopulationEvaluator<SignalScore, SignalDuel, ConstantNetwork> =
            PopulationEvaluator::Tournament(
                TournamentEvaluator::new(SignalDuel, &config()).unwrap(),
            );
        strategy.evaluate_population(&mut population);

        assert_eq!(strategy.evaluation_count(), 2);
        assert_eq!(strategy.state_message(), "");
    }
}
