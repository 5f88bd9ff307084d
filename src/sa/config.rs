//! SA configuration.

use crate::error::{ConfigError, Result};

/// Configuration for the Simulated Annealing engine.
///
/// The temperature starts at `maximum_temperature` and is cooled
/// geometrically after every iteration: `T_{k+1} = T_k / (1 + alpha)`.
///
/// # Examples
///
/// ```
/// use u_stringsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_maximum_temperature(50.0)
///     .with_minimum_temperature(0.0)
///     .with_alpha(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more uphill moves early on.
    pub maximum_temperature: f64,

    /// The search stops once the temperature is no longer above this.
    pub minimum_temperature: f64,

    /// The search stops once the current cost is no longer above this.
    pub minimum_energy: usize,

    /// Cooling rate. Must be positive.
    pub alpha: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            maximum_temperature: 100.0,
            minimum_temperature: 0.0,
            minimum_energy: 0,
            alpha: 0.01,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_maximum_temperature(mut self, t: f64) -> Self {
        self.maximum_temperature = t;
        self
    }

    pub fn with_minimum_temperature(mut self, t: f64) -> Self {
        self.minimum_temperature = t;
        self
    }

    pub fn with_minimum_energy(mut self, energy: usize) -> Self {
        self.minimum_energy = energy;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.maximum_temperature.is_finite() && self.maximum_temperature > 0.0) {
            return Err(ConfigError::invalid(
                "maximum_temperature",
                format!("must be positive and finite, got {}", self.maximum_temperature),
            ));
        }
        if self.minimum_temperature.is_nan() || self.minimum_temperature < 0.0 {
            return Err(ConfigError::invalid(
                "minimum_temperature",
                format!("must be non-negative, got {}", self.minimum_temperature),
            ));
        }
        if self.minimum_temperature >= self.maximum_temperature {
            return Err(ConfigError::invalid(
                "minimum_temperature",
                "must be less than maximum_temperature",
            ));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(ConfigError::invalid(
                "alpha",
                format!("must be positive and finite, got {}", self.alpha),
            ));
        }
        Ok(())
    }
}
