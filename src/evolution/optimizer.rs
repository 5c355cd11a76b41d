//! Genetic optimizer: population, selection, and breeding

use std::cmp::Reverse;

use rand::{Rng, prelude::IndexedRandom, rngs::StdRng};

use super::fitness::FitnessEvaluator;
use crate::{strategy::TableStrategy, tictactoe::Position};

/// Parameters of the genetic algorithm.
///
/// The generation size is derived, not configured: each generation holds the
/// surviving parents plus one child per ordered parent pair.
#[derive(Debug, Clone, Copy)]
pub struct EvolutionConfig {
    /// How many of each generation survive to reproduce
    pub survivors: usize,
    /// How many games score one fitness evaluation
    pub num_games: usize,
    /// Per-gene probability of a fresh random move during breeding
    pub mutation_rate: f64,
    /// How many generations to run
    pub num_generations: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            survivors: 5,
            num_games: 100,
            mutation_rate: 0.02,
            num_generations: 500,
        }
    }
}

impl EvolutionConfig {
    /// Population size: survivors² children plus the survivors themselves
    pub fn generation_size(&self) -> usize {
        self.survivors * self.survivors + self.survivors
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for zero survivors or
    /// games, or a mutation rate outside [0, 1].
    pub fn validate(&self) -> crate::Result<()> {
        if self.survivors == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "survivors must be at least 1".to_string(),
            });
        }
        if self.num_games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "num_games must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "mutation_rate {} must be within [0, 1]",
                    self.mutation_rate
                ),
            });
        }
        Ok(())
    }
}

/// Ranked survivor scores of one completed optimizer step
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// 1-based index of the completed generation
    pub generation: usize,
    /// Fitness of the selected survivors, best first
    pub survivor_scores: Vec<usize>,
}

impl GenerationReport {
    /// Fitness of the best-ranked individual
    pub fn best_score(&self) -> usize {
        self.survivor_scores.first().copied().unwrap_or(0)
    }
}

/// Produce one child from two parents by uniform per-gene crossover.
///
/// For each gene-space position, independently: with `mutation_rate`
/// probability the child gets a fresh uniformly chosen legal move (ignoring
/// both parents); otherwise it copies the move from `parent1` or `parent2`
/// with equal probability. A new table is always allocated; parents are
/// never mutated.
///
/// # Errors
///
/// Returns [`crate::Error::UndefinedPosition`] when a parent lacks an entry
/// for a gene-space position, and [`crate::Error::BoardFull`] when a
/// mutation target has no blank square. Both indicate a malformed gene space
/// or parent table.
pub fn breed(
    parent1: &TableStrategy,
    parent2: &TableStrategy,
    gene_space: &[Position],
    mutation_rate: f64,
    rng: &mut StdRng,
) -> crate::Result<TableStrategy> {
    let mut entries = Vec::with_capacity(gene_space.len());
    for pos in gene_space {
        let index = if rng.random_bool(mutation_rate) {
            pos.blanks()
                .choose(rng)
                .copied()
                .ok_or_else(|| crate::Error::BoardFull {
                    position: pos.encode(),
                })?
        } else {
            let parent = if rng.random_bool(0.5) { parent1 } else { parent2 };
            parent
                .get(pos)
                .ok_or_else(|| crate::Error::UndefinedPosition {
                    position: pos.encode(),
                })?
        };
        entries.push((*pos, index));
    }
    TableStrategy::from_entries(entries)
}

/// Owns the population of table strategies across generations.
///
/// The gene space is borrowed read-only from the position enumerator; every
/// strategy in the population defines a move for each of its positions.
pub struct GeneticOptimizer<'a> {
    gene_space: &'a [Position],
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    generation: Vec<TableStrategy>,
    generations_run: usize,
}

impl<'a> GeneticOptimizer<'a> {
    /// Create an optimizer with a fresh random initial generation.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or when random strategy
    /// construction fails (gene space containing a full board).
    pub fn new(
        gene_space: &'a [Position],
        config: EvolutionConfig,
        rng: &mut StdRng,
    ) -> crate::Result<Self> {
        Self::seeded(gene_space, config, Vec::new(), rng)
    }

    /// Create an optimizer whose initial generation starts with the given
    /// strategies, topped up to the full generation size with fresh random
    /// ones. This is the entry point for externally loaded strategies.
    ///
    /// # Errors
    ///
    /// Fails when more seeds are supplied than the generation can hold, or
    /// on an invalid configuration.
    pub fn seeded(
        gene_space: &'a [Position],
        config: EvolutionConfig,
        seeds: Vec<TableStrategy>,
        rng: &mut StdRng,
    ) -> crate::Result<Self> {
        config.validate()?;
        let size = config.generation_size();
        if seeds.len() > size {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "{} seed strategies exceed the generation size {size}",
                    seeds.len()
                ),
            });
        }

        let mut generation = seeds;
        while generation.len() < size {
            generation.push(TableStrategy::random(gene_space, rng)?);
        }

        Ok(GeneticOptimizer {
            gene_space,
            config,
            evaluator: FitnessEvaluator::new(config.num_games),
            generation,
            generations_run: 0,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The current generation, in rank order after at least one step
    pub fn generation(&self) -> &[TableStrategy] {
        &self.generation
    }

    pub fn generations_run(&self) -> usize {
        self.generations_run
    }

    /// The best-ranked individual of the last completed ranking.
    ///
    /// Survivors lead the generation in rank order, so this is the first
    /// individual. Before any step it is simply the first seeded strategy.
    pub fn best(&self) -> &TableStrategy {
        &self.generation[0]
    }

    /// Run one generation step: evaluate, rank, select, breed.
    ///
    /// Individuals are sorted by descending fitness with a stable sort, so
    /// ties keep their original generation order. The top `survivors` are
    /// copied unchanged into the next generation and every ordered survivor
    /// pair contributes one child.
    ///
    /// # Errors
    ///
    /// Propagates evaluation and breeding failures; the generation either
    /// fully completes or the whole step aborts.
    pub fn step(&mut self, rng: &mut StdRng) -> crate::Result<GenerationReport> {
        let mut scores = Vec::with_capacity(self.generation.len());
        for strategy in &self.generation {
            scores.push(self.evaluator.evaluate(strategy, rng)?);
        }

        let mut ranked: Vec<usize> = (0..self.generation.len()).collect();
        ranked.sort_by_key(|&i| Reverse(scores[i]));

        let survivors: Vec<TableStrategy> = ranked
            .iter()
            .take(self.config.survivors)
            .map(|&i| self.generation[i].clone())
            .collect();
        let survivor_scores: Vec<usize> = ranked
            .iter()
            .take(self.config.survivors)
            .map(|&i| scores[i])
            .collect();

        let mut next = Vec::with_capacity(self.config.generation_size());
        next.extend(survivors.iter().cloned());
        for parent1 in &survivors {
            for parent2 in &survivors {
                next.push(breed(
                    parent1,
                    parent2,
                    self.gene_space,
                    self.config.mutation_rate,
                    rng,
                )?);
            }
        }

        self.generation = next;
        self.generations_run += 1;

        Ok(GenerationReport {
            generation: self.generations_run,
            survivor_scores,
        })
    }

    /// Run `num_generations` steps, reporting each completed generation.
    ///
    /// There is no early stopping or convergence check; the loop always runs
    /// the configured number of iterations.
    ///
    /// # Errors
    ///
    /// Aborts on the first failed step.
    pub fn run(
        &mut self,
        rng: &mut StdRng,
        mut on_generation: impl FnMut(&GenerationReport),
    ) -> crate::Result<()> {
        for _ in 0..self.config.num_generations {
            let report = self.step(rng)?;
            on_generation(&report);
        }
        Ok(())
    }
}
