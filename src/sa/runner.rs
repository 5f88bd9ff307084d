//! SA execution loop.

use super::config::SaConfig;
use crate::error::{check_lengths, Result};
use crate::neighbor::NeighborGenerator;
use crate::random::rng_from;
use crate::score::ScoreFunction;
use rand::Rng;
use tracing::info;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best candidate found (not necessarily the final current one).
    pub best: String,

    /// Cost of the best candidate.
    pub best_cost: usize,

    /// Number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Cost of the current candidate when the loop stopped.
    pub final_cost: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost at the start and after every improvement.
    pub cost_history: Vec<usize>,
}

/// Executes Simulated Annealing with an injected score function and
/// neighbor generator.
///
/// The runner owns its strategies, so a stateful neighbor generator keeps
/// its memo across runs of the same runner.
///
/// # Examples
///
/// ```
/// use u_stringsearch::sa::{SaConfig, SaRunner};
/// use u_stringsearch::{Levenshtein, SubstitutionNeighbor};
///
/// let mut runner = SaRunner::new(Levenshtein, SubstitutionNeighbor::default());
/// let config = SaConfig::default().with_alpha(0.05).with_seed(42);
/// let result = runner.run("dog", "xyz", &config).unwrap();
/// assert!(result.best_cost <= 3);
/// ```
#[derive(Debug, Clone)]
pub struct SaRunner<S, N> {
    scorer: S,
    neighbors: N,
}

impl<S: ScoreFunction, N: NeighborGenerator> SaRunner<S, N> {
    pub fn new(scorer: S, neighbors: N) -> Self {
        Self { scorer, neighbors }
    }

    /// Anneals `initial` toward `target`.
    ///
    /// Stops when the temperature is no longer above
    /// `minimum_temperature`, when the current cost is no longer above
    /// `minimum_energy`, or when `max_iterations` is reached.
    ///
    /// # Errors
    /// Returns a [`ConfigError`](crate::ConfigError) if the configuration is
    /// invalid, the target is empty, or `initial` has a different length.
    pub fn run(&mut self, target: &str, initial: &str, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;
        check_lengths(target, initial)?;

        let mut rng = rng_from(config.seed);

        let mut current = initial.to_owned();
        let mut current_cost = self.scorer.score(target, &current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.maximum_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_cost];

        while temperature > config.minimum_temperature && current_cost > config.minimum_energy {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let neighbor = self.neighbors.neighbor(&current, &mut rng);
            let neighbor_cost = self.scorer.score(target, &neighbor);
            let delta = neighbor_cost as f64 - current_cost as f64;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    cost_history.push(best_cost);
                }
            }

            temperature = cool(temperature, config);
            iterations += 1;
        }

        info!(
            steps = iterations,
            best_cost,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            final_cost: current_cost,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

/// Geometric cooling step.
///
/// Deep in the subnormal range `T / (1 + alpha)` rounds back to `T`; the
/// temperature then snaps to the floor so the loop still terminates.
fn cool(temperature: f64, config: &SaConfig) -> f64 {
    let cooled = temperature / (1.0 + config.alpha);
    if cooled < temperature {
        cooled
    } else {
        config.minimum_temperature
    }
}
