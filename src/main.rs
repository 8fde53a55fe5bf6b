//! Main CLI application for the maximum-density still-life solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use still_life_sat::{
    config::{CliOverrides, Settings},
    game_of_life::{load_grid_from_file, load_instance_from_file},
    sat::{CardinalityBound, SatEncoder},
    search::{MaxDensityProblem, StillLifeValidator},
    utils::{ColorOutput, SolutionFormatter},
};

#[derive(Parser)]
#[command(name = "still_life_sat")]
#[command(about = "Maximum-Density Still-Life SAT Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the densest still life on an n×n grid
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid side length (overrides config)
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Problem instance file, JSON of the form {"n": 6} (overrides --size)
        #[arg(short, long)]
        instance: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Solver timeout in seconds (overrides config)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Encode a single bound to DIMACS CNF without solving
    Encode {
        /// Grid side length
        #[arg(short = 'n', long)]
        size: usize,

        /// Minimum number of alive cells to require
        #[arg(short, long)]
        bound: i64,

        /// Output file for the DIMACS formula
        #[arg(short, long, default_value = "output/formula.cnf")]
        output: PathBuf,
    },

    /// Check whether a pattern file is a still life
    Validate {
        /// Pattern file ('1' for alive cells, '0' for dead cells)
        #[arg(short, long)]
        pattern: PathBuf,
    },

    /// Report encoding statistics for a grid size
    Analyze {
        /// Grid side length
        #[arg(short = 'n', long)]
        size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            size,
            instance,
            output,
            timeout,
            verbose,
        } => solve_command(config, size, instance, output, timeout, verbose),
        Commands::Encode {
            size,
            bound,
            output,
        } => encode_command(size, bound, output),
        Commands::Validate { pattern } => validate_command(pattern),
        Commands::Analyze { size } => analyze_command(size),
    }
}

fn solve_command(
    config_path: PathBuf,
    size: Option<usize>,
    instance_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    timeout: Option<u64>,
    verbose: bool,
) -> Result<()> {
    println!(
        "{}",
        ColorOutput::info("Starting maximum-density still-life search")
    );

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Instance file wins over --size, which wins over the config
    let grid_size = match instance_path {
        Some(ref path) => {
            let instance = load_instance_from_file(path)
                .with_context(|| format!("Failed to load instance from {}", path.display()))?;
            Some(instance.n)
        }
        None => size,
    };

    let cli_overrides = CliOverrides {
        grid_size,
        timeout_seconds: timeout,
        output_dir: output_dir.clone(),
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid size: {}", settings.search.grid_size);
        println!("  Solver timeout: {}s", settings.solver.timeout_seconds);
        println!(
            "  Output dir: {}",
            settings.output.output_directory.display()
        );
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let problem =
        MaxDensityProblem::new(settings.clone()).context("Failed to create density problem")?;

    if verbose {
        println!("{}", problem.encoding_statistics()?);
        println!();
    }

    let solution = problem.solve().context("Failed to solve density problem")?;
    let total_time = start_time.elapsed();

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Proved optimum of {} alive cells in {:.3}s",
            solution.alive_count,
            total_time.as_secs_f64()
        ))
    );
    println!("\n{}", SolutionFormatter::format_solution(&solution));

    // Save solution
    SolutionFormatter::save_solution(
        &solution,
        &settings.output.output_directory,
        &settings.output.format,
    )
    .context("Failed to save solution")?;

    if settings.output.save_dimacs {
        let encoder = SatEncoder::new(settings.search.grid_size);
        let formula = encoder.build_formula(CardinalityBound::AtLeast(solution.alive_count as i64))?;
        let dimacs_path = settings.output.output_directory.join(format!(
            "still_life_{0}x{0}.cnf",
            settings.search.grid_size
        ));
        formula
            .write_dimacs(&dimacs_path)
            .context("Failed to write DIMACS formula")?;
        println!("DIMACS formula saved to {}", dimacs_path.display());
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Solution saved to {}",
            settings.output.output_directory.display()
        ))
    );

    Ok(())
}

fn encode_command(size: usize, bound: i64, output: PathBuf) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Grid size must be positive");
    }

    let encoder = SatEncoder::new(size);
    let formula = encoder
        .build_formula(CardinalityBound::AtLeast(bound))
        .context("Failed to build formula")?;

    if formula.has_empty_clause() {
        println!(
            "{}",
            ColorOutput::warning("Bound is infeasible; formula contains the empty clause")
        );
    }

    formula
        .write_dimacs(&output)
        .with_context(|| format!("Failed to write DIMACS to {}", output.display()))?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Wrote {} variables, {} clauses to {}",
            formula.variable_count,
            formula.clause_count(),
            output.display()
        ))
    );

    Ok(())
}

fn validate_command(pattern_path: PathBuf) -> Result<()> {
    let grid = load_grid_from_file(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Pattern ({}x{}):", grid.width, grid.height);
    println!("{}", SolutionFormatter::format_grid_compact(&grid));

    let result = StillLifeValidator::new().validate(&grid);
    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("Pattern is a still life"));
    } else {
        println!("{}", ColorOutput::error("Pattern is not a still life"));
        for violation in result.violations.iter().take(5) {
            println!("  {}", violation.description);
        }
    }

    Ok(())
}

fn analyze_command(size: usize) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Grid size must be positive");
    }

    println!(
        "{}",
        ColorOutput::info(&format!("Analyzing {}x{} encoding", size, size))
    );

    let encoder = SatEncoder::new(size);
    let cell_count = size * size;

    // Stability constraints alone, then with the tightest cardinality network
    let plain = encoder.statistics(CardinalityBound::AtLeast(0))?;
    let bounded = encoder.statistics(CardinalityBound::AtLeast(cell_count as i64))?;

    println!("Stability constraints only:");
    println!("{}", plain);
    println!("With the full-grid cardinality bound:");
    println!("{}", bounded);

    println!(
        "Cardinality overhead: {} auxiliary variables, {} clauses",
        bounded.total_variables - plain.total_variables,
        bounded.total_clauses - plain.total_clauses
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "still_life_sat",
            "solve",
            "--config",
            "test.yaml",
            "--size",
            "4",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_encode_command() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("formula.cnf");

        encode_command(3, 4, output.clone()).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("p cnf "));
    }

    #[test]
    fn test_validate_command() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("block.txt");
        std::fs::write(&pattern, "0000\n0110\n0110\n0000\n").unwrap();

        assert!(validate_command(pattern).is_ok());
    }
}
