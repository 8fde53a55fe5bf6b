//! Density maximization: binary search over still-life cardinality bounds

pub mod driver;
pub mod problem;
pub mod solution;
pub mod validator;

pub use driver::{BinarySearchDriver, SearchOutcome, SearchRange};
pub use problem::MaxDensityProblem;
pub use solution::Solution;
pub use validator::StillLifeValidator;
