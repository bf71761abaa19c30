//! Core Game of Life engine - pure, deterministic, and testable
//!
//! This crate holds the cellular automaton and nothing else. It has no
//! dependencies on terminals or I/O, so it can be driven by any front end.
//!
//! # Module Structure
//!
//! - [`grid`]: one generation of cells with toroidal wrap and the B3/S23 rule
//! - [`simulation`]: double-buffered stepping, seeding, and text snapshots
//! - [`patterns`]: well-known starting shapes
//! - [`rng`]: small LCG for reproducible random seeding
//! - [`error`]: caller-contract errors
//!
//! # Rules
//!
//! A dead cell with exactly three live neighbours is born; a live cell with
//! two or three live neighbours survives; every other cell is dead in the next
//! generation. Neighbours wrap around all four edges.
//!
//! # Example
//!
//! ```
//! use term_life_core::Simulation;
//!
//! let mut sim = Simulation::with_seed(40, 15, 12345).unwrap();
//! sim.step();
//!
//! let frame = sim.render();
//! assert_eq!(frame.lines().count(), 15);
//! assert!(frame.lines().all(|row| row.chars().count() == 40));
//! ```

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rng;
pub mod simulation;

pub use term_life_types as types;

// Re-export commonly used types for convenience
pub use error::LifeError;
pub use grid::Grid;
pub use patterns::{pattern, Pattern, PATTERNS};
pub use rng::{entropy_seed, SimpleRng};
pub use simulation::Simulation;
