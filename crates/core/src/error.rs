//! Error type for caller-contract violations in the core engine.

use thiserror::Error;

/// Errors returned by [`Grid`](crate::Grid) and [`Simulation`](crate::Simulation)
/// constructors and setters.
///
/// These are programming errors rather than runtime conditions; callers are
/// expected to propagate them with `?` and stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("failed to read OS entropy for seeding: {0}")]
    Entropy(getrandom::Error),
}
