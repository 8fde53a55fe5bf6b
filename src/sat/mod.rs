//! SAT encoding and solving components for the still-life density problem

pub mod cardinality;
pub mod constraints;
pub mod encoder;
pub mod formula;
pub mod solver;
pub mod variables;

pub use cardinality::CardinalityBound;
pub use constraints::ConstraintGenerator;
pub use encoder::{BoundVerdict, EncodingStatistics, SatEncoder};
pub use formula::{Clause, Formula};
pub use solver::{SatSolver, SolverSolution};
pub use variables::{CellVariables, VariableAllocator};

use thiserror::Error;

/// Violations of encoder invariants. These indicate incorrect component
/// usage, not recoverable runtime conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("cell ({row}, {col}) out of bounds for {size}x{size} grid")]
    CellOutOfBounds { row: usize, col: usize, size: usize },
}
