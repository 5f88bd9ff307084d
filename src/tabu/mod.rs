//! Tabu Search (TS).
//!
//! A single-candidate trajectory search that keeps a bounded memory of
//! recently visited candidates (the tabu list) and refuses to revisit them,
//! discouraging cycles and pushing the walk into new regions.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{TabuResult, TabuRunner};
