//! Grid module - one generation of cells on a torus
//!
//! The grid is a dense `width x height` matrix of booleans stored as a flat,
//! row-major `Vec` (`y * width + x`). Reads go through [`Grid::is_active`],
//! which wraps both coordinates, so the left edge neighbours the right edge
//! and the top edge neighbours the bottom edge.

use crate::error::LifeError;
use crate::patterns::Pattern;

/// Neighbour offsets, excluding the cell itself.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size toroidal field of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid (every cell dead).
    ///
    /// Both sides must be positive and the cell count must be addressable
    /// with signed coordinates.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// An empty grid with the same dimensions as `self`.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Flat index of the cell at `(x, y)` after toroidal wrapping.
    #[inline(always)]
    fn wrapped_index(&self, x: isize, y: isize) -> usize {
        // rem_euclid is ((n % m) + m) % m: never negative.
        let wx = x.rem_euclid(self.width as isize) as usize;
        let wy = y.rem_euclid(self.height as isize) as usize;
        wy * self.width + wx
    }

    /// Set the cell at `(x, y)`.
    ///
    /// Unlike reads, writes do not wrap: coordinates outside
    /// `[0, width) x [0, height)` fail with [`LifeError::IndexOutOfRange`].
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        let idx = self.index(x, y).ok_or(LifeError::IndexOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Write a cell known to be in range. Used by the stepping loop.
    #[inline(always)]
    pub(crate) fn put(&mut self, x: usize, y: usize, alive: bool) {
        let idx = y * self.width + x;
        self.cells[idx] = alive;
    }

    /// Get the cell at `(x, y)` without wrapping.
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether the cell at `(x, y)` is alive.
    ///
    /// Any integer coordinate is accepted; `-1` maps to the last column/row,
    /// `width` maps back to column 0, and so on.
    pub fn is_active(&self, x: isize, y: isize) -> bool {
        self.cells[self.wrapped_index(x, y)]
    }

    /// Number of live cells among the eight toroidal neighbours of `(x, y)`.
    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_active(x + dx, y + dy))
            .count() as u8
    }

    /// State of the cell at `(x, y)` in the next generation (B3/S23).
    pub fn next_state(&self, x: isize, y: isize) -> bool {
        match self.live_neighbors(x, y) {
            3 => true,
            2 => self.is_active(x, y),
            _ => false,
        }
    }

    /// Count of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cell coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Place `pattern` with its top-left corner at `(x, y)`.
    ///
    /// Pattern cells that fall off an edge wrap around. Cells outside the
    /// pattern are left untouched.
    pub fn stamp(&mut self, pattern: &Pattern, x: isize, y: isize) {
        for &(dx, dy) in pattern.cells {
            let idx = self.wrapped_index(x + dx, y + dy);
            self.cells[idx] = true;
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
