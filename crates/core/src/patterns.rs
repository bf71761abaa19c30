//! Well-known starting patterns.
//!
//! Cells are `(x, y)` offsets from the pattern's top-left corner.

use crate::types::PatternKind;

#[derive(Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    /// Bounding box width.
    pub width: usize,
    /// Bounding box height.
    pub height: usize,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        kind: PatternKind::Glider,
        width: 3,
        height: 3,
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        kind: PatternKind::Blinker,
        width: 3,
        height: 1,
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        kind: PatternKind::Toad,
        width: 4,
        height: 2,
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        kind: PatternKind::Beacon,
        width: 4,
        height: 4,
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        kind: PatternKind::RPentomino,
        width: 3,
        height: 3,
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Look up the cells for a named pattern.
pub fn pattern(kind: PatternKind) -> &'static Pattern {
    // PATTERNS holds exactly one entry per kind, in PatternKind::ALL order.
    match kind {
        PatternKind::Glider => &PATTERNS[0],
        PatternKind::Blinker => &PATTERNS[1],
        PatternKind::Toad => &PATTERNS[2],
        PatternKind::Beacon => &PATTERNS[3],
        PatternKind::RPentomino => &PATTERNS[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_matching_kind() {
        for kind in PatternKind::ALL {
            assert_eq!(pattern(kind).kind, kind);
        }
    }

    #[test]
    fn cells_fit_bounding_box() {
        for p in PATTERNS {
            for &(x, y) in p.cells {
                assert!(x >= 0 && (x as usize) < p.width, "{:?} x={}", p.kind, x);
                assert!(y >= 0 && (y as usize) < p.height, "{:?} y={}", p.kind, y);
            }
        }
    }
}
