//! Configuration management for the still-life density solver

pub mod settings;

pub use settings::{
    Settings, SearchConfig, SolverConfig, OutputConfig, OutputFormat, CliOverrides,
};
