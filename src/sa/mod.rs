//! Simulated Annealing (SA).
//!
//! A single-candidate trajectory search inspired by the physical annealing
//! process. Worsening moves are accepted with a probability that shrinks as
//! the temperature falls (the Metropolis criterion), letting the walk climb
//! out of local optima early and settle later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
