use crate::{GridError, GridResult};
use std::str::FromStr;

/// Named multi-cell shapes that can be stamped onto a grid.
///
/// Each pattern is a static table of `(row, col)` offsets of its live cells,
/// relative to the top-left corner of its bounding box. Dead offsets inside
/// the bounding box are not listed; stamping only sets the listed cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// 3x3 spaceship, shifts one row and one column every 4 generations.
    Glider,
    /// 13x13 period-3 oscillator, 48 live cells.
    Pulsar,
    /// 2x2 still life.
    Block,
    /// 1x3 period-2 oscillator.
    Blinker,
}

const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];

#[rustfmt::skip]
const PULSAR: &[(usize, usize)] = &[
    (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
    (2, 0), (2, 5), (2, 7), (2, 12),
    (3, 0), (3, 5), (3, 7), (3, 12),
    (4, 0), (4, 5), (4, 7), (4, 12),
    (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
    (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
    (8, 0), (8, 5), (8, 7), (8, 12),
    (9, 0), (9, 5), (9, 7), (9, 12),
    (10, 0), (10, 5), (10, 7), (10, 12),
    (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
];

impl Pattern {
    /// Every pattern the engine knows about, in a stable order.
    pub const ALL: &'static [Pattern] = &[
        Pattern::Glider,
        Pattern::Pulsar,
        Pattern::Block,
        Pattern::Blinker,
    ];

    /// Offsets of the pattern's live cells relative to its top-left corner.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Glider => GLIDER,
            Pattern::Pulsar => PULSAR,
            Pattern::Block => BLOCK,
            Pattern::Blinker => BLINKER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Pulsar => "pulsar",
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
        }
    }
}

/// Parses a pattern identifier as received from a UI or config string.
///
/// This is the only place an unknown pattern can surface: once parsed, the
/// enum is closed and [`crate::TorusGrid::stamp`] cannot fail.
impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        Pattern::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GridError::InvalidPattern(s.to_owned()))
    }
}
