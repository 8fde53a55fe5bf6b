//! Maximum-density still-life problem definition

use super::driver::{BinarySearchDriver, SearchRange};
use super::solution::Solution;
use super::validator::StillLifeValidator;
use crate::config::Settings;
use crate::game_of_life::Grid;
use crate::sat::{CardinalityBound, EncodingStatistics, SatEncoder};
use anyhow::{Context, Result};
use std::time::Duration;

/// Represents a maximum-density still-life problem on an n×n grid
pub struct MaxDensityProblem {
    settings: Settings,
    size: usize,
}

impl MaxDensityProblem {
    /// Create a new problem from settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid settings")?;
        let size = settings.search.grid_size;

        Ok(Self { settings, size })
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the binary search to the proven optimum
    pub fn solve(&self) -> Result<Solution> {
        println!(
            "Searching for maximum density still life in {}x{} grid...",
            self.size, self.size
        );

        let timeout = Duration::from_secs(self.settings.solver.timeout_seconds);
        let encoder = SatEncoder::with_timeout(self.size, timeout);
        let mut iteration = 0usize;

        let driver = BinarySearchDriver::new(SearchRange::full(self.size));
        let outcome = driver
            .run(|k| {
                iteration += 1;
                println!("Iteration {}: testing at least {} alive cells", iteration, k);
                encoder.solve_with_bound(CardinalityBound::AtLeast(k as i64))
            })
            .context("Binary search failed")?;

        let grid = outcome.best_grid.unwrap_or_else(|| Grid::square(self.size));

        // Independent re-check of the witness before reporting it
        let validation = StillLifeValidator::new().validate(&grid);
        if !validation.is_valid {
            anyhow::bail!(
                "Solver model failed still-life verification: {}",
                validation
                    .error_message
                    .unwrap_or_else(|| "unknown violation".to_string())
            );
        }

        println!(
            "Optimum found: {} alive cells in {} iterations ({:.3}s)",
            outcome.best_count,
            outcome.iterations,
            outcome.search_time.as_secs_f64()
        );

        Ok(Solution::new(
            grid,
            outcome.iterations,
            outcome.search_time,
            validation.is_valid,
        ))
    }

    /// Get encoding statistics for the full-grid bound
    pub fn encoding_statistics(&self) -> Result<EncodingStatistics> {
        let encoder = SatEncoder::new(self.size);
        encoder.statistics(CardinalityBound::AtLeast(self.size as i64 * self.size as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::GameOfLifeRules;

    fn settings_for(size: usize) -> Settings {
        let mut settings = Settings::default();
        settings.search.grid_size = size;
        settings.solver.timeout_seconds = 60;
        settings
    }

    #[test]
    fn test_2x2_optimum_is_block() {
        let problem = MaxDensityProblem::new(settings_for(2)).unwrap();
        let solution = problem.solve().unwrap();

        assert_eq!(solution.alive_count, 4);
        assert!(GameOfLifeRules::is_still_life(&solution.grid));
    }

    #[test]
    fn test_3x3_optimum_is_six() {
        // The densest 3x3 still life holds 6 cells (66.67% density)
        let problem = MaxDensityProblem::new(settings_for(3)).unwrap();
        let solution = problem.solve().unwrap();

        assert_eq!(solution.alive_count, 6);
        assert!(GameOfLifeRules::is_still_life(&solution.grid));
        assert!((solution.density_percent() - 66.67).abs() < 0.01);

        // Range [0, 9]: at most ⌈log₂ 10⌉ = 4 probes
        assert!(solution.iterations <= 4);
    }

    #[test]
    fn test_1x1_optimum_is_zero() {
        // A lone cell always dies; the empty grid is the 1x1 optimum
        let problem = MaxDensityProblem::new(settings_for(1)).unwrap();
        let solution = problem.solve().unwrap();

        assert_eq!(solution.alive_count, 0);
        assert!(solution.grid.is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.search.grid_size = 0;
        assert!(MaxDensityProblem::new(settings).is_err());
    }
}
