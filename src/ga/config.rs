//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::alphabet::Alphabet;
use crate::error::{ConfigError, Result};
use crate::neighbor::{DEFAULT_MAX_RETRIES, DEFAULT_MEMO_CAPACITY};

/// Smallest population whose selection pool still holds two parents.
pub const MIN_POPULATION_SIZE: usize = 20;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_stringsearch::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.selection_size(), 10);
/// assert_eq!(config.offspring_size(), 90);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_stringsearch::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(1_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Size of the initial random population.
    ///
    /// A tenth of it is drawn as the breeding pool every generation and
    /// each new generation has `floor(0.9 * population_size)` members.
    pub population_size: usize,

    /// Generation budget. `None` runs until an exact match is found.
    pub max_generations: Option<usize>,

    /// Symbols used for the initial population and for mutation.
    pub alphabet: Alphabet,

    /// Number of mutated children remembered per run. 0 disables the memo.
    pub memo_capacity: usize,

    /// Redraws allowed when a mutated child was already produced.
    pub mutation_retries: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: None,
            alphabet: Alphabet::default(),
            memo_capacity: DEFAULT_MEMO_CAPACITY,
            mutation_retries: DEFAULT_MAX_RETRIES,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the mutation memo capacity.
    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }

    /// Sets the number of mutation redraws on a memo hit.
    pub fn with_mutation_retries(mut self, retries: usize) -> Self {
        self.mutation_retries = retries;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals drawn into the breeding pool each generation.
    pub fn selection_size(&self) -> usize {
        self.population_size / 10
    }

    /// Number of children bred each generation.
    pub fn offspring_size(&self) -> usize {
        self.population_size * 9 / 10
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(ConfigError::invalid(
                "population_size",
                format!(
                    "must be at least {MIN_POPULATION_SIZE}, got {}",
                    self.population_size
                ),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::invalid(
                "max_generations",
                "must be positive when set",
            ));
        }
        self.alphabet.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert!(config.max_generations.is_none());
        assert_eq!(config.alphabet, Alphabet::lowercase());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(10)
            .with_memo_capacity(5)
            .with_mutation_retries(2)
            .with_seed(123);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, Some(10));
        assert_eq!(config.memo_capacity, 5);
        assert_eq!(config.mutation_retries, 2);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_derived_sizes() {
        let config = GaConfig::default().with_population_size(25);
        assert_eq!(config.selection_size(), 2);
        assert_eq!(config.offspring_size(), 22);

        let config = GaConfig::default().with_population_size(30);
        assert_eq!(config.offspring_size(), 27);
    }

    #[test]
    fn test_validate_small_population() {
        assert!(GaConfig::default()
            .with_population_size(19)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_population_size(20)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default()
            .with_max_generations(0)
            .validate()
            .is_err());
    }
}
