//! Constraint generation for the still-life SAT encoding

use super::cardinality::{self, CardinalityBound};
use super::formula::{Clause, Formula};
use super::variables::{CellVariables, VariableAllocator};
use crate::game_of_life::GameOfLifeRules;
use anyhow::Result;
use itertools::iproduct;

/// Generates the CNF constraints for one still-life formula.
///
/// Cell variables are allocated eagerly in row-major order, so the same grid
/// size always produces the same cell ids. Cardinality auxiliaries follow,
/// which is why one generator builds exactly one formula: a different bound
/// needs a fresh generator, never a reused network.
pub struct ConstraintGenerator {
    size: usize,
    allocator: VariableAllocator,
    cells: CellVariables,
}

impl ConstraintGenerator {
    /// Create a generator for an n×n grid, allocating all cell variables
    pub fn new(size: usize) -> Self {
        let mut allocator = VariableAllocator::new();
        let cells = CellVariables::new(size, &mut allocator);

        Self {
            size,
            allocator,
            cells,
        }
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell-variable bijection (for decoding solver models)
    pub fn cells(&self) -> &CellVariables {
        &self.cells
    }

    /// Variable id for the cell at (row, col)
    pub fn cell_variable(&self, row: usize, col: usize) -> Result<i32> {
        Ok(self.cells.get(row, col)?)
    }

    /// Variable ids of a cell's in-grid neighbors. Edge and corner cells
    /// have fewer than eight.
    pub fn neighbor_variables(&self, row: usize, col: usize) -> Result<Vec<i32>> {
        let mut neighbors = Vec::with_capacity(8);

        for (dr, dc) in iproduct!(-1isize..=1, -1isize..=1) {
            if dr == 0 && dc == 0 {
                continue; // Skip the cell itself
            }

            let nr = row as isize + dr;
            let nc = col as isize + dc;

            if nr >= 0 && nr < self.size as isize && nc >= 0 && nc < self.size as isize {
                neighbors.push(self.cells.get(nr as usize, nc as usize)?);
            }
        }

        Ok(neighbors)
    }

    /// Generate the stability constraints for every cell
    pub fn generate_stability_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        for (row, col) in iproduct!(0..self.size, 0..self.size) {
            let cell_var = self.cells.get(row, col)?;
            let neighbor_vars = self.neighbor_variables(row, col)?;
            clauses.extend(Self::cell_stability_clauses(cell_var, &neighbor_vars));
        }

        Ok(clauses)
    }

    /// Stability clauses for one cell: enumerate every truth assignment to
    /// its neighbor set and force the state the rule dictates.
    ///
    /// For each assignment the emitted clause is the implication "this exact
    /// neighbor pattern implies the cell's required state": each neighbor
    /// contributes the literal falsified by the pattern, plus the cell's
    /// forced literal. Exactly 3 alive neighbors force the cell alive; 2
    /// leave it unconstrained (both states are stable); every other count
    /// forces it dead. At most 2^8 clauses per cell, no auxiliaries.
    fn cell_stability_clauses(cell_var: i32, neighbor_vars: &[i32]) -> Vec<Clause> {
        let num_neighbors = neighbor_vars.len();
        let mut clauses = Vec::new();

        for pattern in 0u32..(1 << num_neighbors) {
            let alive_count = pattern.count_ones() as u8;

            let forced = match GameOfLifeRules::stable_state(alive_count) {
                Some(state) => state,
                None => continue, // 2 alive neighbors: either state is stable
            };

            let mut literals: Vec<i32> = neighbor_vars
                .iter()
                .enumerate()
                .map(|(i, &var)| if (pattern >> i) & 1 == 1 { -var } else { var })
                .collect();
            literals.push(if forced { cell_var } else { -cell_var });

            clauses.push(Clause::new(literals));
        }

        clauses
    }

    /// Assemble the complete formula: stability constraints plus a
    /// cardinality bound over all cell variables. Consumes the generator so
    /// its auxiliary variables can never leak into another formula.
    pub fn generate_formula(mut self, bound: CardinalityBound) -> Result<Formula> {
        let mut clauses = self.generate_stability_constraints()?;

        let cell_vars = self.cells.all().to_vec();
        clauses.extend(cardinality::encode_bound(
            bound,
            &cell_vars,
            &mut self.allocator,
        ));

        Ok(Formula::new(self.allocator.count(), clauses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::SatSolver;

    #[test]
    fn test_generator_creation() {
        let generator = ConstraintGenerator::new(3);
        assert_eq!(generator.size(), 3);
        assert_eq!(generator.cells().all().len(), 9);
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let generator = ConstraintGenerator::new(3);

        assert_eq!(generator.neighbor_variables(0, 0).unwrap().len(), 3); // corner
        assert_eq!(generator.neighbor_variables(0, 1).unwrap().len(), 5); // edge
        assert_eq!(generator.neighbor_variables(1, 1).unwrap().len(), 8); // center
    }

    #[test]
    fn test_all_dead_neighbors_force_cell_dead() {
        // The zero-alive-neighbor pattern must constrain the cell, not
        // leave it free: with every neighbor dead, assuming the cell alive
        // must be contradictory.
        let generator = ConstraintGenerator::new(3);
        let cell_var = generator.cell_variable(1, 1).unwrap();
        let neighbor_vars = generator.neighbor_variables(1, 1).unwrap();
        let clauses = ConstraintGenerator::cell_stability_clauses(cell_var, &neighbor_vars);

        let mut solver: cadical::Solver = cadical::Solver::new();
        for clause in &clauses {
            solver.add_clause(clause.literals.iter().copied());
        }

        let mut assumptions: Vec<i32> = neighbor_vars.iter().map(|&v| -v).collect();
        assumptions.push(cell_var);
        assert_eq!(solver.solve_with(assumptions.iter().copied()), Some(false));

        // The dead state is consistent
        let mut assumptions: Vec<i32> = neighbor_vars.iter().map(|&v| -v).collect();
        assumptions.push(-cell_var);
        assert_eq!(solver.solve_with(assumptions.iter().copied()), Some(true));
    }

    #[test]
    fn test_two_alive_neighbors_leave_cell_free() {
        let generator = ConstraintGenerator::new(3);
        let cell_var = generator.cell_variable(0, 0).unwrap();
        let neighbor_vars = generator.neighbor_variables(0, 0).unwrap();
        let clauses = ConstraintGenerator::cell_stability_clauses(cell_var, &neighbor_vars);

        let mut solver: cadical::Solver = cadical::Solver::new();
        for clause in &clauses {
            solver.add_clause(clause.literals.iter().copied());
        }

        // Fix exactly two of the corner's three neighbors alive; both cell
        // states must remain satisfiable for these clauses alone
        let fixed = vec![neighbor_vars[0], neighbor_vars[1], -neighbor_vars[2]];
        for cell_literal in [cell_var, -cell_var] {
            let mut assumptions = fixed.clone();
            assumptions.push(cell_literal);
            assert_eq!(solver.solve_with(assumptions.iter().copied()), Some(true));
        }
    }

    #[test]
    fn test_full_block_satisfies_exactly_four() {
        // 2x2 grid: the block (all four alive) is a still life
        let generator = ConstraintGenerator::new(2);
        let formula = generator
            .generate_formula(CardinalityBound::Exactly(4))
            .unwrap();

        let mut solver = SatSolver::new();
        solver.load_formula(&formula).unwrap();
        let solution = solver.solve().unwrap().expect("block should satisfy");

        let cells = ConstraintGenerator::new(2);
        for (row, col) in iproduct!(0..2, 0..2) {
            let var = cells.cell_variable(row, col).unwrap();
            assert_eq!(solution.assignment.get(&var), Some(&true));
        }
    }

    #[test]
    fn test_no_three_cell_still_life_in_2x2() {
        let generator = ConstraintGenerator::new(2);
        let formula = generator
            .generate_formula(CardinalityBound::Exactly(3))
            .unwrap();

        let mut solver = SatSolver::new();
        solver.load_formula(&formula).unwrap();
        assert!(solver.solve().unwrap().is_none());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        // Re-encoding the same (n, bound) must reproduce the formula
        // exactly: allocation order is fixed, so even auxiliary ids match
        let first = ConstraintGenerator::new(3)
            .generate_formula(CardinalityBound::AtLeast(4))
            .unwrap();
        let second = ConstraintGenerator::new(3)
            .generate_formula(CardinalityBound::AtLeast(4))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_infeasible_bound_yields_empty_clause() {
        let generator = ConstraintGenerator::new(2);
        let formula = generator
            .generate_formula(CardinalityBound::AtLeast(5))
            .unwrap();
        assert!(formula.has_empty_clause());
    }
}
