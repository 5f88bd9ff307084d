//! Genetic Algorithm (GA).
//!
//! Evolves a population of random strings toward the target. Each
//! generation is scored, a small breeding pool is drawn by
//! fitness-proportionate selection, and the next generation is bred from
//! it by sampling crossover followed by a single-substitution mutation.
//! The best individual ever seen is tracked separately from the population
//! (implicit elitism).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, budget, alphabet)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Sampling crossover and parent picking
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::{GaConfig, MIN_POPULATION_SIZE};
pub use runner::{GaResult, GaRunner};
pub use selection::{select_pool, selection_weights};
