//! Tabu Search configuration.

use crate::error::{ConfigError, Result};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_stringsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_list_max_size(5)
///     .with_number_neighbors(10);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_list_max_size, 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// How many recently visited candidates stay forbidden.
    pub tabu_list_max_size: usize,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Neighbors generated per iteration.
    pub number_neighbors: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_list_max_size: 300,
            max_iterations: 10_000,
            number_neighbors: 500,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_list_max_size(mut self, size: usize) -> Self {
        self.tabu_list_max_size = size;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of neighbors generated per iteration.
    pub fn with_number_neighbors(mut self, n: usize) -> Self {
        self.number_neighbors = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tabu_list_max_size == 0 {
            return Err(ConfigError::invalid("tabu_list_max_size", "must be positive"));
        }
        if self.number_neighbors == 0 {
            return Err(ConfigError::invalid("number_neighbors", "must be positive"));
        }
        Ok(())
    }
}
