//! String-evolution metaheuristics.
//!
//! Three classical local-search strategies that evolve a candidate string
//! toward a fixed target under a case-insensitive edit-distance objective:
//!
//! - **Simulated Annealing (SA)**: Single-candidate walk with Metropolis
//!   acceptance and geometric cooling.
//! - **Genetic Algorithm (GA)**: Population-based search with
//!   fitness-proportionate selection, sampling crossover and
//!   single-substitution mutation.
//! - **Tabu Search (TS)**: Single-candidate walk constrained by a bounded
//!   memory of recently visited candidates.
//!
//! # Architecture
//!
//! The engines share two pluggable strategies: a [`ScoreFunction`]
//! (cost of a candidate, lower is better) and a [`NeighborGenerator`]
//! (single-position perturbation). Both are traits injected when a runner
//! is built, so tests can substitute deterministic fakes. Every engine
//! takes an optional seed and is fully reproducible with one.
//!
//! ```
//! use u_stringsearch::sa::{SaConfig, SaRunner};
//! use u_stringsearch::{create_rng, random_candidate, Alphabet, Levenshtein, SubstitutionNeighbor};
//!
//! let start = random_candidate(&Alphabet::lowercase(), 3, &mut create_rng(1));
//! let mut runner = SaRunner::new(Levenshtein, SubstitutionNeighbor::default());
//! let config = SaConfig::default()
//!     .with_maximum_temperature(50.0)
//!     .with_alpha(0.05)
//!     .with_seed(42);
//! let result = runner.run("cat", &start, &config).unwrap();
//! println!("best: {} (cost {})", result.best, result.best_cost);
//! ```

pub mod alphabet;
pub mod error;
pub mod ga;
pub mod memo;
pub mod neighbor;
pub mod random;
pub mod sa;
pub mod score;
pub mod tabu;

pub use alphabet::{random_candidate, Alphabet};
pub use error::ConfigError;
pub use neighbor::{NeighborGenerator, SubstitutionNeighbor};
pub use random::create_rng;
pub use score::{Levenshtein, ScoreFunction};
