//! Maximum-Density Still-Life SAT Solver
//!
//! This library encodes the densest still-life problem on a finite grid as
//! Boolean CNF and binary-searches for the largest number of alive cells a
//! stable configuration can hold, using SAT solving techniques.

pub mod config;
pub mod game_of_life;
pub mod sat;
pub mod search;
pub mod utils;

pub use config::Settings;
pub use search::{MaxDensityProblem, Solution};

use anyhow::Result;

/// Main entry point for maximizing still-life density
pub fn solve_max_density(settings: Settings) -> Result<Solution> {
    let problem = MaxDensityProblem::new(settings)?;
    problem.solve()
}
