//! SAT solver integration using CaDiCaL

use super::formula::Formula;
use anyhow::Result;
use cadical::Solver;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// SAT solver wrapper for CaDiCaL
pub struct SatSolver {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
    timeout: Option<Duration>,
}

/// Result of SAT solving
#[derive(Debug, Clone)]
pub struct SolverSolution {
    pub assignment: HashMap<i32, bool>,
    pub solve_time: Duration,
}

impl SatSolver {
    /// Create a new SAT solver instance
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
            timeout: None,
        }
    }

    /// Set solving timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Load a complete formula into the solver.
    ///
    /// Formulas containing the empty clause must be short-circuited by the
    /// caller; handing one to the backend is a usage error.
    pub fn load_formula(&mut self, formula: &Formula) -> Result<()> {
        for clause in &formula.clauses {
            if clause.is_empty() {
                anyhow::bail!("Cannot add empty clause (unsatisfiable)");
            }

            self.solver.add_clause(clause.literals.iter().copied());
            self.clause_count += 1;
        }

        self.variable_count = self.variable_count.max(formula.variable_count);
        Ok(())
    }

    /// Solve the loaded formula, returning a model if satisfiable
    pub fn solve(&mut self) -> Result<Option<SolverSolution>> {
        let start_time = Instant::now();

        if let Some(_timeout) = self.timeout {
            // CaDiCaL 0.1 exposes no timeout hook; the budget is recorded
            // for callers that want to abandon a search between bounds.
        }

        let result = self.solver.solve();
        let solve_time = start_time.elapsed();

        if result == Some(true) {
            let assignment = self.extract_assignment();
            Ok(Some(SolverSolution {
                assignment,
                solve_time,
            }))
        } else {
            Ok(None)
        }
    }

    /// Extract variable assignment from the solver
    fn extract_assignment(&self) -> HashMap<i32, bool> {
        let mut assignment = HashMap::new();

        for var in 1..=self.variable_count as i32 {
            if let Some(value) = self.solver.value(var) {
                assignment.insert(var, value);
            }
        }

        assignment
    }

    /// Get the number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Get the number of clauses
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }
}

impl Default for SatSolver {
    fn default() -> Self {
        Self::new()
    }
}
