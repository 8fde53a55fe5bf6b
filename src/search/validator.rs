//! Independent verification that a grid is a still life

use crate::game_of_life::{GameOfLifeRules, Grid};

/// Re-checks a solved grid against the stability rule, cell by cell.
///
/// This is deliberately independent of the CNF encoding: it exercises the
/// forward rule, so an encoder bug cannot vouch for itself.
pub struct StillLifeValidator;

/// Result of still-life validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<RuleViolation>,
    pub error_message: Option<String>,
}

/// A cell whose state contradicts the stability rule
#[derive(Debug, Clone)]
pub struct RuleViolation {
    pub cell_position: (usize, usize),
    pub is_alive: bool,
    pub neighbor_count: u8,
    pub description: String,
}

impl StillLifeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate that the grid is invariant under the Game of Life rule
    pub fn validate(&self, grid: &Grid) -> ValidationResult {
        let mut violations = Vec::new();

        for row in 0..grid.height {
            for col in 0..grid.width {
                let is_alive = grid.get(row, col);
                let neighbor_count = grid.count_neighbors(row, col);

                let violated = match GameOfLifeRules::stable_state(neighbor_count) {
                    Some(required) => is_alive != required,
                    None => false, // 2 neighbors: either state is stable
                };

                if violated {
                    violations.push(RuleViolation {
                        cell_position: (row, col),
                        is_alive,
                        neighbor_count,
                        description: format!(
                            "Cell ({}, {}) is {} with {} alive neighbors",
                            row,
                            col,
                            if is_alive { "alive" } else { "dead" },
                            neighbor_count
                        ),
                    });
                }
            }
        }

        // Cross-check with a full evolution step
        let evolves_to_self = GameOfLifeRules::is_still_life(grid);
        let is_valid = violations.is_empty() && evolves_to_self;

        let error_message = if !is_valid {
            Some(Self::generate_error_message(&violations, evolves_to_self))
        } else {
            None
        };

        ValidationResult {
            is_valid,
            violations,
            error_message,
        }
    }

    fn generate_error_message(violations: &[RuleViolation], evolves_to_self: bool) -> String {
        let mut message = String::new();

        if !evolves_to_self {
            message.push_str("Grid is not invariant under evolution. ");
        }

        if !violations.is_empty() {
            message.push_str(&format!("Found {} rule violations. ", violations.len()));

            for (i, violation) in violations.iter().take(3).enumerate() {
                if i == 0 {
                    message.push_str("Examples: ");
                }
                message.push_str(&format!("{}; ", violation.description));
            }

            if violations.len() > 3 {
                message.push_str(&format!("... and {} more", violations.len() - 3));
            }
        }

        message
    }
}

impl Default for StillLifeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            writeln!(f, "Valid still life")?;
        } else {
            writeln!(f, "Not a still life")?;
            if let Some(ref message) = self.error_message {
                writeln!(f, "  {}", message)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_valid() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let result = StillLifeValidator::new().validate(&grid);
        assert!(result.is_valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let grid = Grid::square(3);
        assert!(StillLifeValidator::new().validate(&grid).is_valid);
    }

    #[test]
    fn test_blinker_is_invalid() {
        let cells = vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let result = StillLifeValidator::new().validate(&grid);
        assert!(!result.is_valid);
        assert!(!result.violations.is_empty());
        assert!(result.error_message.is_some());
    }

    #[test]
    fn test_lone_cell_is_invalid() {
        let mut grid = Grid::square(3);
        grid.set(1, 1, true).unwrap();

        let result = StillLifeValidator::new().validate(&grid);
        assert!(!result.is_valid);

        // The lone live cell has zero alive neighbors: it must die
        let violation = &result.violations[0];
        assert_eq!(violation.cell_position, (1, 1));
        assert_eq!(violation.neighbor_count, 0);
        assert!(violation.is_alive);
    }
}
