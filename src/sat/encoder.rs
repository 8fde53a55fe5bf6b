//! SAT encoder for the still-life density problem

use super::cardinality::CardinalityBound;
use super::constraints::ConstraintGenerator;
use super::solver::{SatSolver, SolverSolution};
use super::variables::CellVariables;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use std::time::Duration;

/// Verdict for one encoded bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundVerdict {
    /// A still life meeting the bound exists; here is one
    Satisfiable(Grid),
    Unsatisfiable,
}

/// Builds and solves one formula per cardinality bound.
///
/// Each call constructs a fresh constraint generator: grid-cell variable ids
/// are identical across calls (deterministic allocation), while cardinality
/// auxiliaries are always new, so networks for different bounds can never be
/// conflated.
pub struct SatEncoder {
    size: usize,
    timeout: Option<Duration>,
}

impl SatEncoder {
    /// Create an encoder for an n×n grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            timeout: None,
        }
    }

    /// Create an encoder with a per-solve timeout budget
    pub fn with_timeout(size: usize, timeout: Duration) -> Self {
        Self {
            size,
            timeout: Some(timeout),
        }
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Build the formula for the given bound without solving it
    pub fn build_formula(&self, bound: CardinalityBound) -> Result<super::Formula> {
        ConstraintGenerator::new(self.size)
            .generate_formula(bound)
            .context("Failed to generate SAT constraints")
    }

    /// Encode the bound, solve, and decode the model into a grid.
    ///
    /// A formula containing the empty clause is unsatisfiable by
    /// construction and is reported without invoking the backend.
    pub fn solve_with_bound(&self, bound: CardinalityBound) -> Result<BoundVerdict> {
        let formula = self.build_formula(bound)?;

        if formula.has_empty_clause() {
            return Ok(BoundVerdict::Unsatisfiable);
        }

        let mut solver = SatSolver::new();
        if let Some(timeout) = self.timeout {
            solver.set_timeout(timeout);
        }
        solver
            .load_formula(&formula)
            .context("Failed to add clauses to SAT solver")?;

        match solver.solve().context("SAT solving failed")? {
            Some(solution) => {
                let grid = self.extract_grid(&solution)?;
                Ok(BoundVerdict::Satisfiable(grid))
            }
            None => Ok(BoundVerdict::Unsatisfiable),
        }
    }

    /// Decode the grid-cell variables of a model. Cardinality auxiliaries
    /// are internal to the formula and never surface here.
    fn extract_grid(&self, solution: &SolverSolution) -> Result<Grid> {
        // Cell ids are deterministic, so a fresh bijection decodes any
        // model produced for this grid size
        let mut allocator = super::VariableAllocator::new();
        let cells = CellVariables::new(self.size, &mut allocator);

        let mut grid = Grid::square(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                let var = cells.get(row, col)?;
                let alive = solution.assignment.get(&var).copied().unwrap_or(false);
                grid.set(row, col, alive)?;
            }
        }

        Ok(grid)
    }

    /// Get encoding statistics for a bound
    pub fn statistics(&self, bound: CardinalityBound) -> Result<EncodingStatistics> {
        let formula = self.build_formula(bound)?;
        Ok(EncodingStatistics {
            grid_size: self.size,
            bound,
            total_variables: formula.variable_count,
            total_clauses: formula.clause_count(),
        })
    }
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub grid_size: usize,
    pub bound: CardinalityBound,
    pub total_variables: usize,
    pub total_clauses: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Grid: {}x{}", self.grid_size, self.grid_size)?;
        writeln!(f, "  Bound: {} alive cells", self.bound)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        Ok(())
    }
}
