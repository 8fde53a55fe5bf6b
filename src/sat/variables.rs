//! Variable management for the SAT encoding

use super::EncodingError;

/// Issues SAT variable ids: positive integers, strictly increasing from 1,
/// never reused or recycled. One allocator is scoped to one formula build.
#[derive(Debug)]
pub struct VariableAllocator {
    next_id: i32,
}

impl VariableAllocator {
    /// Create a new allocator; SAT variables start from 1
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocate a fresh variable id
    pub fn fresh(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Total number of variables allocated so far
    pub fn count(&self) -> usize {
        (self.next_id - 1) as usize
    }
}

impl Default for VariableAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Bijection between grid cells and SAT variable ids.
///
/// Cells are allocated eagerly in row-major order, so the same grid size
/// always yields the same cell ids regardless of what is allocated later.
#[derive(Debug)]
pub struct CellVariables {
    size: usize,
    ids: Vec<i32>,
}

impl CellVariables {
    /// Allocate one variable per cell of an n×n grid
    pub fn new(size: usize, allocator: &mut VariableAllocator) -> Self {
        let ids = (0..size * size).map(|_| allocator.fresh()).collect();
        Self { size, ids }
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Variable id for the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<i32, EncodingError> {
        if row >= self.size || col >= self.size {
            return Err(EncodingError::CellOutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.ids[row * self.size + col])
    }

    /// Inverse lookup: the cell a variable id stands for, if any.
    /// Auxiliary variables map to `None`.
    pub fn coordinates(&self, var: i32) -> Option<(usize, usize)> {
        let idx = self.ids.iter().position(|&id| id == var)?;
        Some((idx / self.size, idx % self.size))
    }

    /// All cell variable ids in row-major order
    pub fn all(&self) -> &[i32] {
        &self.ids
    }
}
