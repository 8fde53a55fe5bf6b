//! Solution representation for the density search

use crate::game_of_life::Grid;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An optimal still life found by the search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The witness configuration
    pub grid: Grid,
    /// The proven maximum alive-cell count
    pub alive_count: usize,
    /// Number of solver probes the search needed
    pub iterations: usize,
    /// Total search time
    #[serde(skip)]
    pub search_time: Duration,
    pub metadata: SolutionMetadata,
}

/// Metadata about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    pub grid_size: usize,
    /// Fraction of cells alive, in [0, 1]
    pub density: f64,
    /// Re-verified against the stability rule
    pub verified: bool,
}

impl Solution {
    /// Create a new solution
    pub fn new(grid: Grid, iterations: usize, search_time: Duration, verified: bool) -> Self {
        let alive_count = grid.living_count();
        let metadata = SolutionMetadata {
            grid_size: grid.width,
            density: grid.density(),
            verified,
        };

        Self {
            grid,
            alive_count,
            iterations,
            search_time,
            metadata,
        }
    }

    /// Density as a percentage
    pub fn density_percent(&self) -> f64 {
        self.metadata.density * 100.0
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_solution() -> Solution {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        Solution::new(grid, 3, Duration::from_millis(12), true)
    }

    #[test]
    fn test_solution_metadata() {
        let solution = block_solution();
        assert_eq!(solution.alive_count, 4);
        assert_eq!(solution.metadata.grid_size, 4);
        assert!((solution.density_percent() - 25.0).abs() < 1e-9);
        assert!(solution.metadata.verified);
    }

    #[test]
    fn test_json_round_trip() {
        let solution = block_solution();
        let json = solution.to_json().unwrap();

        let parsed: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.alive_count, 4);
        assert_eq!(parsed.grid, solution.grid);
    }
}
