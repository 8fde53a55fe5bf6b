//! Binary search over the feasible alive-cell count.
//!
//! The probed predicate is "a still life with at least k alive cells
//! exists", which is monotone in k: any witness for k + 1 is a witness for
//! k. That monotonicity is what makes the SAT/UNSAT narrowing sound.

use crate::game_of_life::Grid;
use crate::sat::BoundVerdict;
use anyhow::Result;
use std::time::{Duration, Instant};

/// Inclusive bounds on the optimum alive-cell count.
///
/// Invariant: `low` is a count known feasible and no still life exceeds
/// `high`. The range narrows monotonically until `low == high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    pub low: usize,
    pub high: usize,
}

impl SearchRange {
    /// Full range for an n×n grid: the empty configuration is always a
    /// still life, so 0 is feasible; n² cells is the ceiling.
    pub fn full(size: usize) -> Self {
        Self {
            low: 0,
            high: size * size,
        }
    }

    pub fn new(low: usize, high: usize) -> Result<Self> {
        if low > high {
            anyhow::bail!("Invalid search range [{}, {}]", low, high);
        }
        Ok(Self { low, high })
    }

    /// The search is done once the bounds meet
    pub fn is_converged(&self) -> bool {
        self.low == self.high
    }

    /// Midpoint rounded toward `high`, so with `low < high` the probe value
    /// strictly exceeds `low` and both verdict branches shrink the range.
    pub fn midpoint(&self) -> usize {
        self.low + (self.high - self.low + 1) / 2
    }
}

/// Result of a completed search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The proven optimum alive-cell count
    pub best_count: usize,
    /// A witness grid, absent only when the optimum is zero
    pub best_grid: Option<Grid>,
    /// Number of probes issued
    pub iterations: usize,
    pub search_time: Duration,
}

/// The [low, high] state machine. Each probe reports whether a still life
/// with at least `k` alive cells exists, and if so hands back a witness.
pub struct BinarySearchDriver {
    range: SearchRange,
}

impl BinarySearchDriver {
    pub fn new(range: SearchRange) -> Self {
        Self { range }
    }

    /// Run the search to convergence. `probe(k)` must answer the monotone
    /// at-least-k feasibility question; the driver never mutates a probed
    /// formula and issues each bound at most once per narrowing step.
    pub fn run<F>(mut self, mut probe: F) -> Result<SearchOutcome>
    where
        F: FnMut(usize) -> Result<BoundVerdict>,
    {
        let start_time = Instant::now();
        let mut iterations = 0;
        let mut best_grid: Option<Grid> = None;

        while !self.range.is_converged() {
            let mid = self.range.midpoint();
            iterations += 1;

            match probe(mid)? {
                BoundVerdict::Satisfiable(grid) => {
                    // The witness may overshoot the bound; its live count is
                    // itself feasible and never exceeds the true optimum
                    let alive = grid.living_count();
                    self.range.low = mid.max(alive);
                    best_grid = Some(grid);
                }
                BoundVerdict::Unsatisfiable => {
                    self.range.high = mid - 1;
                }
            }
        }

        Ok(SearchOutcome {
            best_count: self.range.low,
            best_grid,
            iterations,
            search_time: start_time.elapsed(),
        })
    }
}
