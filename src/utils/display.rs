//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use crate::search::Solution;
use anyhow::{Context, Result};
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a solution for console output
    pub fn format_solution(solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "=== Maximum density still life ({}x{}) ===\n",
            solution.metadata.grid_size, solution.metadata.grid_size
        ));
        output.push_str(&format!("Alive cells: {}\n", solution.alive_count));
        output.push_str(&format!("Density: {:.2}%\n", solution.density_percent()));
        output.push_str(&format!("Search iterations: {}\n", solution.iterations));
        output.push_str(&format!(
            "Search time: {:.3}s\n",
            solution.search_time.as_secs_f64()
        ));
        output.push_str(&format!(
            "Verified: {}\n",
            if solution.metadata.verified { "yes" } else { "no" }
        ));
        output.push('\n');
        output.push_str(&Self::format_grid_compact(&solution.grid));

        output
    }

    /// Format a grid using block characters
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();

        for row in 0..grid.height {
            output.push_str("  ");
            for col in 0..grid.width {
                output.push(if grid.get(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }

        output
    }

    /// Save a solution to the output directory in the configured format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                let path = output_dir.join(format!(
                    "still_life_{}x{}.txt",
                    solution.metadata.grid_size, solution.metadata.grid_size
                ));
                let mut content = Self::format_solution(solution);
                content.push('\n');
                content.push_str(&solution.grid.to_string());
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            OutputFormat::Json => {
                let path = output_dir.join(format!(
                    "still_life_{}x{}.json",
                    solution.metadata.grid_size, solution.metadata.grid_size
                ));
                let json = solution.to_json().context("Failed to serialize solution")?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
