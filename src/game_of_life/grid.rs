//! Grid representation and utilities for Game of Life

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a finite Game of Life grid. Cells outside the grid are dead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create an empty square grid of the given side length
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        // Verify all rows have the same length
        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are dead
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.height,
                self.width
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors of a cell; neighbors outside the grid are dead
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1].iter() {
            for dc in [-1, 0, 1].iter() {
                if *dr == 0 && *dc == 0 {
                    continue; // Skip the cell itself
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 0
                    && r < self.height as isize
                    && c >= 0
                    && c < self.width as isize
                    && self.cells[self.index(r as usize, c as usize)]
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col) {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of cells alive, in [0, 1]
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / (self.width * self.height) as f64
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { '#' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::square(3);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.cells.len(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells).is_err());
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        // Center cell sees the full ring
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corner cell has only three in-grid neighbors, one of them dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
    }

    #[test]
    fn test_boundary_is_dead() {
        let cells = vec![vec![true, false], vec![false, true]];
        let grid = Grid::from_cells(cells).unwrap();

        // Only (1,1) is an alive neighbor of (0,0); nothing wraps around
        assert_eq!(grid.count_neighbors(0, 0), 1);
    }

    #[test]
    fn test_display() {
        let cells = vec![vec![true, false], vec![false, true]];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.to_string(), "#.\n.#\n");
    }
}
