//! Per-call statistics logging for population evaluation.

use crate::Genome;

use std::fmt;

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f32,
    pub minimum: f32,
    pub mean: f32,
    pub median: f32,
}

impl Stats {
    /// Returns statistics about numbers in a sequence.
    ///
    /// # Panics
    /// Panics if the sequence is empty or contains a NaN.
    ///
    /// # Examples
    /// ```
    /// use hypervolve::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, 1.5, 0.5, 1.0, -1.0].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f32>) -> Stats {
        let mut data: Vec<f32> = data.collect();
        assert!(!data.is_empty(), "statistics over an empty sequence");
        data.sort_unstable_by(|a, b| {
            a.partial_cmp(b)
                .unwrap_or_else(|| panic!("invalid value in statistics sequence (NaN)"))
        });
        let mid = data.len() / 2;
        Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f32>() / data.len() as f32,
            median: if data.len() % 2 == 0 {
                (data[mid - 1] + data[mid]) / 2.0
            } else {
                data[mid]
            },
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {:.3}, min {:.3}, mean {:.3}, median {:.3}",
            self.maximum, self.minimum, self.mean, self.median
        )
    }
}

/// A snapshot of a population's fitness statistics after one
/// evaluation pass.
#[derive(Clone, Debug)]
pub struct EvaluationLog {
    /// Index of the pass, in order of logging.
    pub generation: usize,
    /// The evaluator's running evaluation counter at log time.
    pub evaluation_count: u64,
    /// Fitness distribution across the population.
    pub fitness: Stats,
    /// Per-genome evaluation counts across the population.
    pub evaluations_per_genome: Stats,
}

impl fmt::Display for EvaluationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EvaluationLog {{\n\
            \tgeneration: {}\n\
            \tevaluation_count: {}\n\
            \tfitness: {}\n\
            \tevaluations_per_genome: {}\n\
            }}",
            self.generation, self.evaluation_count, self.fitness, self.evaluations_per_genome
        )
    }
}

/// A log of fitness assignment over successive evaluation passes.
#[derive(Clone, Debug, Default)]
pub struct EvaluationLogger {
    logs: Vec<EvaluationLog>,
}

impl EvaluationLogger {
    pub fn new() -> EvaluationLogger {
        EvaluationLogger { logs: vec![] }
    }

    /// Stores a snapshot of the population's post-assignment state.
    /// `evaluation_count` is the evaluator's running counter at the
    /// time of the call.
    pub fn log<G: Genome>(&mut self, population: &[G], evaluation_count: u64) {
        self.logs.push(EvaluationLog {
            generation: self.logs.len(),
            evaluation_count,
            fitness: Stats::from(population.iter().map(|g| g.fitness())),
            evaluations_per_genome: Stats::from(
                population.iter().map(|g| g.evaluation_count() as f32),
            ),
        });
    }

    /// Iterates over all logged snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EvaluationLog> {
        self.logs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::StubGenome;
    use super::*;
    use crate::Genome as _;

    #[test]
    fn stats_of_single_value() {
        let stats = Stats::from(std::iter::once(3.0));
        assert_eq!(
            stats,
            Stats {
                maximum: 3.0,
                minimum: 3.0,
                mean: 3.0,
                median: 3.0,
            }
        );
    }

    #[test]
    fn stats_median_of_even_length_sequence() {
        let stats = Stats::from([4.0, 1.0, 3.0, 2.0].iter().copied());
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn logger_snapshots_population_state() {
        let mut population = vec![StubGenome::new(0.0), StubGenome::new(0.0)];
        population[0].set_fitness(1.0);
        population[0].set_evaluation_count(1);
        population[1].set_fitness(3.0);
        population[1].set_evaluation_count(3);

        let mut logger = EvaluationLogger::new();
        logger.log(&population, 4);
        population[1].set_fitness(5.0);
        logger.log(&population, 6);

        let logs: Vec<_> = logger.iter().collect();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].generation, 0);
        assert_eq!(logs[0].evaluation_count, 4);
        assert_eq!(logs[0].fitness.maximum, 3.0);
        assert_eq!(logs[1].generation, 1);
        assert_eq!(logs[1].fitness.maximum, 5.0);
        assert_eq!(logs[1].evaluations_per_genome.mean, 2.0);
    }
}
