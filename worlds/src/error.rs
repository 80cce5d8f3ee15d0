//! Typed world-construction failures.

use std::fmt;

use warren_grid::position::Position;

/// Typed failure raised while building a world from a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The layout carries no goal cell to navigate to.
    NoGoal,
    /// A per-cell cost grid's dimensions differ from the layout's.
    CostGridMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// The layout is too small to contain four inner corners.
    DegenerateCorners { width: usize, height: usize },
    /// An inner corner cell is a wall, so the objective is unsatisfiable.
    BlockedCorner { corner: Position },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGoal => write!(f, "layout has no goal cell"),
            Self::CostGridMismatch { expected, found } => write!(
                f,
                "cost grid is {}x{} but the layout is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::DegenerateCorners { width, height } => write!(
                f,
                "layout {width}x{height} is too small for four inner corners"
            ),
            Self::BlockedCorner { corner } => {
                write!(f, "inner corner {corner} is a wall")
            }
        }
    }
}

impl std::error::Error for WorldError {}
