//! Command-line configuration.
//!
//! `Cli` is the raw clap surface; `Cli::into_config` validates it into a
//! `RunConfig` that the driving loop can use without further checks.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::types::{
    PatternKind, DEFAULT_FPS, DEFAULT_GENERATIONS, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "term-life",
    version,
    about = "Conway's Game of Life on a wrapping grid, animated in the terminal",
    long_about = "Runs Conway's Game of Life on a toroidal grid and redraws each generation at a fixed frame rate.\n\nPress q, Esc, or Ctrl-C to stop early. Set RUST_LOG=debug for diagnostics on stderr."
)]
pub struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of generations to show before exiting.
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u32,

    /// Frames per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Seed for the random starting pattern (drawn from the OS when omitted).
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Start from a named pattern instead of random cells
    /// (glider, blinker, toad, beacon, r-pentomino).
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Write frames separated by form feeds instead of taking over the terminal.
    #[arg(long)]
    pub plain: bool,

    /// Show generation and population under the grid.
    #[arg(long)]
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },

    #[error("unknown pattern '{0}' (expected one of: glider, blinker, toad, beacon, r-pentomino)")]
    UnknownPattern(String),
}

/// How the starting generation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeding {
    /// Random cells from the OS entropy source.
    Entropy,
    /// Random cells from a fixed seed.
    Seed(u32),
    /// A single centred pattern.
    Pattern(PatternKind),
}

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub width: usize,
    pub height: usize,
    pub generations: u32,
    pub fps: u32,
    pub seeding: Seeding,
    pub plain: bool,
    pub status: bool,
}

impl RunConfig {
    /// Delay between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            generations: DEFAULT_GENERATIONS,
            fps: DEFAULT_FPS,
            seeding: Seeding::Entropy,
            plain: false,
            status: false,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Zero { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::Zero { name: "height" });
        }
        if self.fps == 0 {
            return Err(ConfigError::Zero { name: "fps" });
        }

        // A pattern takes precedence over a seed.
        let seeding = match (self.pattern, self.seed) {
            (Some(name), _) => Seeding::Pattern(
                PatternKind::from_str(&name).ok_or(ConfigError::UnknownPattern(name))?,
            ),
            (None, Some(seed)) => Seeding::Seed(seed),
            (None, None) => Seeding::Entropy,
        };

        Ok(RunConfig {
            width: self.width,
            height: self.height,
            generations: self.generations,
            fps: self.fps,
            seeding,
            plain: self.plain,
            status: self.status,
        })
    }
}
