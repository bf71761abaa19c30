//! Simulation - double-buffered generation stepping
//!
//! The simulation owns two grids of identical size. During [`Simulation::step`]
//! every cell of `next` is computed from `current` only, then the two grids
//! trade places. No grid is allocated after construction.

use std::fmt::{self, Write as _};

use tracing::debug;

use crate::error::LifeError;
use crate::grid::Grid;
use crate::patterns::pattern;
use crate::rng::SimpleRng;
use crate::types::{PatternKind, ALIVE_GLYPH, DEAD_GLYPH, ROW_TERMINATOR, SEED_DENSITY_DIVISOR};

/// Game of Life state: the visible generation plus a scratch buffer.
#[derive(Debug, Clone)]
pub struct Simulation {
    width: usize,
    height: usize,
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a randomly seeded simulation, drawing the seed from the OS.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let rng = SimpleRng::from_entropy()?;
        Self::with_rng(width, height, rng)
    }

    /// Create a randomly seeded simulation from a fixed seed.
    ///
    /// Same seed and dimensions always give the same starting generation.
    pub fn with_seed(width: usize, height: usize, seed: u32) -> Result<Self, LifeError> {
        Self::with_rng(width, height, SimpleRng::new(seed))
    }

    fn with_rng(width: usize, height: usize, mut rng: SimpleRng) -> Result<Self, LifeError> {
        let mut current = Grid::new(width, height)?;
        let seed = rng.seed();

        // Picks are independent, so a cell may be chosen twice and the live
        // count can come in under `picks`.
        let picks = width * height / SEED_DENSITY_DIVISOR;
        for _ in 0..picks {
            let x = rng.next_index(width);
            let y = rng.next_index(height);
            current.set_cell(x, y, true)?;
        }

        debug!(
            width,
            height,
            seed,
            picks,
            live = current.population(),
            "seeded random generation"
        );
        Ok(Self::from_grid(current))
    }

    /// Start from a centred named pattern on an otherwise empty grid.
    pub fn with_pattern(width: usize, height: usize, kind: PatternKind) -> Result<Self, LifeError> {
        let mut current = Grid::new(width, height)?;
        let p = pattern(kind);
        let x = width.saturating_sub(p.width) / 2;
        let y = height.saturating_sub(p.height) / 2;
        current.stamp(p, x as isize, y as isize);
        debug!(width, height, pattern = kind.name(), "seeded pattern");
        Ok(Self::from_grid(current))
    }

    /// Start from a hand-built grid. The scratch buffer is sized to match.
    pub fn from_grid(current: Grid) -> Self {
        let next = current.blank_like();
        Self {
            width: current.width(),
            height: current.height(),
            current,
            next,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// The current (visible) generation.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.current.next_state(x as isize, y as isize);
                self.next.put(x, y, alive);
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Render the current generation as text.
    ///
    /// One glyph per cell (`*` alive, space dead) and a newline after every
    /// row, including the last.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        self.render_into(&mut out);
        out
    }

    /// Render into an existing buffer, replacing its contents.
    ///
    /// Reusing one buffer across frames avoids an allocation per frame.
    pub fn render_into(&self, out: &mut String) {
        out.clear();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.glyph(x, y));
            }
            out.push(ROW_TERMINATOR);
        }
    }

    #[inline(always)]
    fn glyph(&self, x: usize, y: usize) -> char {
        if self.current.is_active(x as isize, y as isize) {
            ALIVE_GLYPH
        } else {
            DEAD_GLYPH
        }
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.glyph(x, y))?;
            }
            f.write_char(ROW_TERMINATOR)?;
        }
        Ok(())
    }
}
