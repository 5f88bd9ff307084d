//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the caller's candidate
//! 2. At each iteration:
//!    a. Generate `number_neighbors` neighbors of the current candidate
//!    b. Walk through them in order, skipping tabu ones; every admissible
//!       neighbor becomes the current candidate and is made tabu
//!    c. Update the global best on strict improvement
//! 3. Terminate after `max_iterations`, or early once an iteration finds
//!    no admissible neighbor
//!
//! Acceptance into "current" is not gated by cost, so the walk favors
//! exploration over hill-climbing; only the best-so-far is cost-driven.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::list::TabuList;
use crate::error::{check_lengths, Result};
use crate::neighbor::NeighborGenerator;
use crate::random::rng_from;
use crate::score::ScoreFunction;
use tracing::{debug, info};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best candidate found.
    pub best: String,
    /// Cost of the best candidate.
    pub best_cost: usize,
    /// Total iterations executed.
    pub iterations: usize,
    /// Whether the run stopped because an iteration had no admissible neighbor.
    pub stalled: bool,
    /// Best cost at the end of each iteration.
    pub cost_history: Vec<usize>,
    /// Final tabu list, oldest first.
    pub tabu_list: Vec<String>,
}

/// Tabu Search runner with an injected score function and neighbor
/// generator.
#[derive(Debug, Clone)]
pub struct TabuRunner<S, N> {
    scorer: S,
    neighbors: N,
}

impl<S: ScoreFunction, N: NeighborGenerator> TabuRunner<S, N> {
    pub fn new(scorer: S, neighbors: N) -> Self {
        Self { scorer, neighbors }
    }

    /// Executes Tabu Search from `initial` toward `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_stringsearch::tabu::{TabuConfig, TabuRunner};
    /// use u_stringsearch::{Levenshtein, SubstitutionNeighbor};
    ///
    /// let mut runner = TabuRunner::new(Levenshtein, SubstitutionNeighbor::default());
    /// let config = TabuConfig::default()
    ///     .with_tabu_list_max_size(5)
    ///     .with_max_iterations(100)
    ///     .with_number_neighbors(10)
    ///     .with_seed(42);
    /// let result = runner.run("ab", "zz", &config).unwrap();
    /// assert!(result.best_cost <= 2);
    /// ```
    ///
    /// # Errors
    /// Returns a [`ConfigError`](crate::ConfigError) if the configuration is
    /// invalid, the target is empty, or `initial` has a different length.
    pub fn run(&mut self, target: &str, initial: &str, config: &TabuConfig) -> Result<TabuResult> {
        config.validate()?;
        check_lengths(target, initial)?;

        let mut rng = rng_from(config.seed);

        let mut current = initial.to_owned();
        let mut best = current.clone();
        let mut best_cost = self.scorer.score(target, &current);

        let mut tabu = TabuList::new(config.tabu_list_max_size);
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut iterations = 0usize;
        let mut stalled = false;

        while iterations < config.max_iterations {
            // Generate neighborhood
            let candidates: Vec<String> = (0..config.number_neighbors)
                .map(|_| self.neighbors.neighbor(&current, &mut rng))
                .collect();

            let mut moved = false;
            for candidate in candidates {
                if tabu.is_tabu(&candidate) {
                    continue;
                }

                let cost = self.scorer.score(target, &candidate);
                if cost < best_cost {
                    best = candidate.clone();
                    best_cost = cost;
                }

                tabu.record(candidate.clone());
                current = candidate;
                moved = true;
            }

            iterations += 1;
            cost_history.push(best_cost);

            if !moved {
                stalled = true;
                debug!(iteration = iterations, "every neighbor is tabu");
                break;
            }
        }

        info!(steps = iterations, best = %best, best_cost, stalled, "tabu search finished");

        Ok(TabuResult {
            best,
            best_cost,
            iterations,
            stalled,
            cost_history,
            tabu_list: tabu.to_vec(),
        })
    }
}
