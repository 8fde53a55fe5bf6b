//! File I/O for Game of Life grids and problem instances

use super::Grid;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A problem instance: the side length of the square grid to fill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub n: usize,
}

/// Load a problem instance from a JSON file, e.g. `{"n": 6}`
pub fn load_instance_from_file<P: AsRef<Path>>(path: P) -> Result<Instance> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read instance file: {}", path.as_ref().display()))?;

    let instance: Instance = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse instance file: {}", path.as_ref().display()))?;

    if instance.n == 0 {
        anyhow::bail!("Instance grid size must be positive");
    }

    Ok(instance)
}

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let height = lines.len();
    let width = lines[0].len();

    if width == 0 {
        anyhow::bail!("Grid rows cannot be empty");
    }

    let mut cells = Vec::with_capacity(height);

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        cells.push(row);
    }

    Grid::from_cells(cells)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height * (grid.width + 1));

    for row in 0..grid.height {
        for col in 0..grid.width {
            let cell = grid.get(row, col);
            result.push(if cell { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}
