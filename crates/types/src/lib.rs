//! Shared types and constants for the terminal Game of Life.
//!
//! Everything here is plain data with no dependencies, usable from the core
//! engine, the terminal layer, and the CLI alike.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 40 | Grid columns |
//! | `DEFAULT_HEIGHT` | 15 | Grid rows |
//! | `DEFAULT_GENERATIONS` | 300 | Frames shown before exiting |
//! | `DEFAULT_FPS` | 30 | Frames per second |
//! | `SEED_DENSITY_DIVISOR` | 4 | Random picks = `width * height / 4` |
//!
//! # Examples
//!
//! ```
//! use term_life_types::{PatternKind, ALIVE_GLYPH, DEAD_GLYPH};
//!
//! assert_eq!(PatternKind::from_str("Glider"), Some(PatternKind::Glider));
//! assert_eq!(PatternKind::from_str("r-pentomino"), Some(PatternKind::RPentomino));
//! assert_eq!(ALIVE_GLYPH, '*');
//! assert_eq!(DEAD_GLYPH, ' ');
//! ```

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = '*';

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Row terminator in rendered snapshots.
pub const ROW_TERMINATOR: char = '\n';

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 40;

/// Default grid height in cells.
pub const DEFAULT_HEIGHT: usize = 15;

/// Default number of generations to animate.
pub const DEFAULT_GENERATIONS: u32 = 300;

/// Default animation rate.
pub const DEFAULT_FPS: u32 = 30;

/// Random seeding picks `width * height / SEED_DENSITY_DIVISOR` cells.
pub const SEED_DENSITY_DIVISOR: usize = 4;

/// Form feed; the plain output mode writes this before every frame.
pub const FORM_FEED: char = '\x0c';

/// Named starting patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Glider,
    Blinker,
    Toad,
    Beacon,
    RPentomino,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Glider,
        PatternKind::Blinker,
        PatternKind::Toad,
        PatternKind::Beacon,
        PatternKind::RPentomino,
    ];

    /// Parse a pattern name (case-insensitive, `-`/`_` ignored).
    ///
    /// ```
    /// use term_life_types::PatternKind;
    ///
    /// assert_eq!(PatternKind::from_str("BLINKER"), Some(PatternKind::Blinker));
    /// assert_eq!(PatternKind::from_str("r_pentomino"), Some(PatternKind::RPentomino));
    /// assert_eq!(PatternKind::from_str("gun"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "glider" => Some(PatternKind::Glider),
            "blinker" => Some(PatternKind::Blinker),
            "toad" => Some(PatternKind::Toad),
            "beacon" => Some(PatternKind::Beacon),
            "rpentomino" => Some(PatternKind::RPentomino),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Glider => "glider",
            PatternKind::Blinker => "blinker",
            PatternKind::Toad => "toad",
            PatternKind::Beacon => "beacon",
            PatternKind::RPentomino => "r-pentomino",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        assert_eq!(DEFAULT_WIDTH, 40);
        assert_eq!(DEFAULT_HEIGHT, 15);
        assert_eq!(DEFAULT_GENERATIONS, 300);
        assert_eq!(DEFAULT_FPS, 30);
        assert_eq!(SEED_DENSITY_DIVISOR, 4);
    }

    #[test]
    fn pattern_names_roundtrip() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::from_str(kind.name()), Some(kind));
        }
    }
}
