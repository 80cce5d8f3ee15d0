//! `CornersProblem`: visit all four inner corners of a maze.
//!
//! Goal: have stood on every inner corner cell at least once, in any
//! order. The search state pairs the agent's position with a visit
//! mask, so two arrivals at the same cell with different masks are
//! distinct states.

use warren_grid::layout::Layout;
use warren_grid::position::{Direction, Position};
use warren_search::contract::{Cost, SearchProblem, Successor};
use warren_search::heuristic::Heuristic;

use crate::error::WorldError;

/// Identity prefix for corners problems, null-terminated.
const IDENTITY_CORNERS: &[u8] = b"WARREN::WORLD::CORNERS::V1\0";

/// Number of corners tracked by the visit mask.
pub const CORNER_COUNT: usize = 4;

/// Visit mask over the four inner corners.
///
/// Bit `i` corresponds to `CornersProblem::corners()[i]`; only indices
/// below [`CORNER_COUNT`] are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CornerMask(u8);

impl CornerMask {
    /// Mask with no corners visited.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Mask with the corner at `index` additionally visited.
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    /// Whether the corner at `index` has been visited.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Whether all four corners have been visited.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == (1 << CORNER_COUNT) - 1
    }

    /// Number of corners visited.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Search state for the corners world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerState {
    /// Where the agent stands.
    pub position: Position,
    /// Which corners it has stood on so far.
    pub visited: CornerMask,
}

/// Visit all four inner corners of the layout, starting from its start
/// cell. Every step costs one.
///
/// The inner corners sit one cell inside the outer wall ring, listed in
/// row-major order: top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone)]
pub struct CornersProblem {
    layout: Layout,
    corners: [Position; CORNER_COUNT],
    id: String,
}

impl CornersProblem {
    /// Builds a corners problem from a layout.
    ///
    /// # Errors
    /// Returns [`WorldError::DegenerateCorners`] if the layout is smaller
    /// than 3x3, or [`WorldError::BlockedCorner`] if any inner corner is
    /// a wall.
    pub fn new(layout: Layout) -> Result<Self, WorldError> {
        let width = layout.width();
        let height = layout.height();
        if width < 3 || height < 3 {
            return Err(WorldError::DegenerateCorners { width, height });
        }
        let corners = [
            Position::new(1, 1),
            Position::new(width - 2, 1),
            Position::new(1, height - 2),
            Position::new(width - 2, height - 2),
        ];
        for corner in corners {
            if layout.is_wall(corner) {
                return Err(WorldError::BlockedCorner { corner });
            }
        }
        let id = format!("{}.corners", layout.name());
        Ok(Self {
            layout,
            corners,
            id,
        })
    }

    /// The four corner cells, in mask-bit order.
    #[must_use]
    pub const fn corners(&self) -> &[Position; CORNER_COUNT] {
        &self.corners
    }

    /// The underlying layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// `mask` extended with any corner standing at `position`.
    fn mask_after_visit(&self, mask: CornerMask, position: Position) -> CornerMask {
        let mut updated = mask;
        for (index, corner) in self.corners.iter().enumerate() {
            if *corner == position {
                updated = updated.with(index);
            }
        }
        updated
    }
}

impl SearchProblem for CornersProblem {
    type State = CornerState;
    type Action = Direction;

    fn start_state(&self) -> CornerState {
        let position = self.layout.start();
        CornerState {
            position,
            visited: self.mask_after_visit(CornerMask::empty(), position),
        }
    }

    fn is_goal_state(&self, state: &CornerState) -> bool {
        state.visited.is_full()
    }

    fn successors(&self, state: &CornerState) -> Vec<Successor<CornerState, Direction>> {
        let mut out = Vec::new();
        for direction in Direction::ALL {
            let Some(next) = self.layout.walls().step(state.position, direction) else {
                continue;
            };
            if self.layout.is_wall(next) {
                continue;
            }
            out.push(Successor {
                state: CornerState {
                    position: next,
                    visited: self.mask_after_visit(state.visited, next),
                },
                action: direction,
                step_cost: 1,
            });
        }
        out
    }

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::from(IDENTITY_CORNERS);
        bytes.extend_from_slice(&self.layout.identity_bytes());
        for corner in self.corners {
            bytes.extend_from_slice(&(corner.x as u64).to_le_bytes());
            bytes.extend_from_slice(&(corner.y as u64).to_le_bytes());
        }
        bytes
    }
}

/// Largest Manhattan distance from the agent to any unvisited corner.
///
/// Admissible and consistent for unit step costs: the farthest
/// unvisited corner still has to be walked to, and one step changes
/// that distance by at most one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornersHeuristic;

impl Heuristic<CornersProblem> for CornersHeuristic {
    fn estimate(&self, state: &CornerState, problem: &CornersProblem) -> Cost {
        problem
            .corners()
            .iter()
            .enumerate()
            .filter(|(index, _)| !state.visited.contains(*index))
            .map(|(_, corner)| state.position.manhattan_distance(*corner))
            .max()
            .unwrap_or(0)
    }
}
