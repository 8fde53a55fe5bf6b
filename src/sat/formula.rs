//! Clause and formula types, with DIMACS CNF rendering

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    /// The empty clause: unsatisfiable by definition. Appending it is how an
    /// encoder signals a bound it has proven infeasible.
    pub fn empty() -> Self {
        Self {
            literals: Vec::new(),
        }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// A complete CNF formula: variable count plus clauses in insertion order.
///
/// A formula is built by exactly one encoding pass and never mutated after
/// being handed to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    pub variable_count: usize,
    pub clauses: Vec<Clause>,
}

impl Formula {
    /// Create a formula from an allocator's final count and accumulated clauses
    pub fn new(variable_count: usize, clauses: Vec<Clause>) -> Self {
        Self {
            variable_count,
            clauses,
        }
    }

    /// Number of clauses
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A formula containing the empty clause is unsatisfiable without solving
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// Render the formula in DIMACS CNF format
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "c still-life density problem");
        let _ = writeln!(out, "p cnf {} {}", self.variable_count, self.clause_count());
        for clause in &self.clauses {
            for literal in &clause.literals {
                let _ = write!(out, "{} ", literal);
            }
            let _ = writeln!(out, "0");
        }
        out
    }

    /// Write the formula to a DIMACS CNF file
    pub fn write_dimacs<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, self.to_dimacs()).with_context(|| {
            format!("Failed to write DIMACS file: {}", path.as_ref().display())
        })?;

        Ok(())
    }
}
