//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod rules;

pub use grid::Grid;
pub use io::{load_grid_from_file, load_instance_from_file, save_grid_to_file, Instance};
pub use rules::GameOfLifeRules;
