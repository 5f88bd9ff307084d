//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → scoring → selection → crossover → mutation → repeat,
//! until an exact match is found.

use super::config::GaConfig;
use super::operators::{pick_parents, sampling_crossover};
use super::selection::select_pool;
use crate::alphabet::random_candidate;
use crate::error::{ConfigError, Result};
use crate::neighbor::{NeighborGenerator, SubstitutionNeighbor};
use crate::random::rng_from;
use crate::score::ScoreFunction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: String,

    /// Cost of `best`. Zero means an exact match.
    pub best_cost: usize,

    /// Number of generations scored.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost so far at the end of each scored generation.
    pub cost_history: Vec<usize>,
}

/// Executes the GA evolutionary loop with an injected score function.
///
/// # Usage
///
/// ```
/// use u_stringsearch::ga::{GaConfig, GaRunner};
/// use u_stringsearch::Levenshtein;
///
/// let runner = GaRunner::new(Levenshtein);
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
/// let result = runner.run("hi", &config).unwrap();
/// assert_eq!(result.best, "hi");
/// ```
#[derive(Debug, Clone)]
pub struct GaRunner<S> {
    scorer: S,
}

impl<S: ScoreFunction> GaRunner<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Evolves a random population toward `target`.
    ///
    /// Runs until the best cost reaches zero or the optional generation
    /// budget is spent.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration is invalid, the
    /// target is empty, or the target uses a symbol outside the alphabet
    /// (an exact match would then be unreachable).
    pub fn run(&self, target: &str, config: &GaConfig) -> Result<GaResult> {
        self.run_with_cancel(target, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked once per generation, after the generation has
    /// been scored. When it is set the GA stops and returns the best
    /// individual found so far with `cancelled = true`.
    pub fn run_with_cancel(
        &self,
        target: &str,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        let target_len = target.chars().count();
        if target_len == 0 {
            return Err(ConfigError::EmptyTarget);
        }
        config.alphabet.check_covers(target)?;

        let mut rng = rng_from(config.seed);
        let mut mutation = SubstitutionNeighbor::new(config.alphabet.clone())
            .with_memo_capacity(config.memo_capacity)
            .with_max_retries(config.mutation_retries);

        // 1. Initialize population
        let mut population: Vec<String> = (0..config.population_size)
            .map(|_| random_candidate(&config.alphabet, target_len, &mut rng))
            .collect();

        let mut best = String::new();
        let mut best_cost = usize::MAX;
        let mut generations = 0usize;
        let mut cancelled = false;
        let mut cost_history = Vec::new();

        // 2. Evolutionary loop
        while best_cost > 0 {
            if config.max_generations.is_some_and(|max| generations >= max) {
                break;
            }

            // Score and select
            let costs: Vec<usize> = population
                .iter()
                .map(|ind| self.scorer.score(target, ind))
                .collect();
            let pool = select_pool(&population, &costs, config.selection_size(), &mut rng);

            // Update best
            if let Some((gen_best, &gen_best_cost)) = population
                .iter()
                .zip(costs.iter())
                .min_by_key(|&(ind, &cost)| (cost, ind))
            {
                if gen_best_cost < best_cost {
                    best = gen_best.clone();
                    best_cost = gen_best_cost;
                }
            }

            generations += 1;
            cost_history.push(best_cost);
            debug!(generation = generations, best_cost, "generation scored");

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    info!(generation = generations, best = %best, best_cost, "genetic algorithm cancelled");
                    break;
                }
            }

            if best_cost == 0 {
                break;
            }

            // Breed the next generation
            population = (0..config.offspring_size())
                .map(|_| {
                    let (parent1, parent2) = pick_parents(&pool, &mut rng);
                    let child = sampling_crossover(parent1, parent2, target_len, &mut rng);
                    mutation.neighbor(&child, &mut rng)
                })
                .collect();
        }

        info!(steps = generations, best = %best, best_cost, "genetic algorithm finished");

        Ok(GaResult {
            best,
            best_cost,
            generations,
            cancelled,
            cost_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
