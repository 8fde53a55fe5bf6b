//! Game of Life rules, specialized to stability analysis

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply Game of Life rules to evolve the grid one generation forward
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = Grid::new(current.width, current.height);

        // Use parallel processing for better performance on large grids
        let next_cells: Vec<bool> = (0..current.height)
            .into_par_iter()
            .flat_map(|row| {
                (0..current.width).into_par_iter().map(move |col| {
                    let neighbors = current.count_neighbors(row, col);
                    let current_cell = current.get(row, col);
                    Self::should_be_alive(current_cell, neighbors)
                })
            })
            .collect();

        next.cells = next_cells;
        next
    }

    /// Check if a cell is alive in the next generation given its current state
    /// and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        match (current_state, neighbor_count) {
            (true, 2) | (true, 3) | (false, 3) => true,
            _ => false,
        }
    }

    /// The state a stable cell must hold given its live-neighbor count.
    ///
    /// Returns `Some(true)` when the cell must be alive (3 neighbors),
    /// `Some(false)` when it must be dead, and `None` when either state is
    /// stable (2 neighbors: a live cell survives and a dead cell stays dead).
    pub fn stable_state(neighbor_count: u8) -> Option<bool> {
        match neighbor_count {
            3 => Some(true),
            2 => None,
            _ => Some(false),
        }
    }

    /// Check whether a grid is a still life (invariant under evolution)
    pub fn is_still_life(grid: &Grid) -> bool {
        Self::evolve(grid) == *grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_still_life() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert!(GameOfLifeRules::is_still_life(&grid));
    }

    #[test]
    fn test_blinker_is_not_still_life() {
        let cells = vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert!(!GameOfLifeRules::is_still_life(&grid));

        // The blinker oscillates with period 2
        let evolved = GameOfLifeRules::evolve(&grid);
        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(grid, evolved_twice);
    }

    #[test]
    fn test_empty_grid_is_still_life() {
        let grid = Grid::square(4);
        assert!(GameOfLifeRules::is_still_life(&grid));
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
    }

    #[test]
    fn test_stable_state() {
        assert_eq!(GameOfLifeRules::stable_state(3), Some(true));
        assert_eq!(GameOfLifeRules::stable_state(2), None);
        for count in [0u8, 1, 4, 5, 6, 7, 8] {
            assert_eq!(GameOfLifeRules::stable_state(count), Some(false));
        }
    }
}
