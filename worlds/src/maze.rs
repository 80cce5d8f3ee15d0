//! `MazeProblem`: single-goal navigation over a maze layout.
//!
//! Goal: stand on the layout's first goal cell. Actions are the four
//! cardinal directions; a step into a wall or off the grid is simply
//! absent from the successor set rather than rejected at apply time.

use warren_grid::grid::Grid;
use warren_grid::layout::Layout;
use warren_grid::position::{Direction, Position};
use warren_search::contract::{Cost, SearchProblem, Successor};
use warren_search::heuristic::Heuristic;

use crate::error::WorldError;

/// Identity prefix for maze problems, null-terminated.
const IDENTITY_MAZE: &[u8] = b"WARREN::WORLD::MAZE::V1\0";

/// Step pricing for maze movement.
///
/// The price of a move is attached to the cell being entered, so a
/// per-cell model can make individual cells expensive to cross.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostModel {
    /// Every step costs the same amount.
    Uniform(Cost),
    /// Entering a cell costs that cell's entry in the grid.
    PerCell(Grid<Cost>),
}

impl Default for CostModel {
    fn default() -> Self {
        Self::Uniform(1)
    }
}

/// Navigate from the layout's start cell to its first goal cell.
///
/// States are positions. Successors enumerate [`Direction::ALL`] in its
/// fixed order, so expansion is deterministic for a given layout.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    layout: Layout,
    goal: Position,
    cost_model: CostModel,
}

impl MazeProblem {
    /// Builds a maze problem with unit step costs.
    ///
    /// # Errors
    /// Returns [`WorldError::NoGoal`] if the layout has no goal cell.
    pub fn new(layout: Layout) -> Result<Self, WorldError> {
        Self::with_cost_model(layout, CostModel::default())
    }

    /// Builds a maze problem under an explicit cost model.
    ///
    /// # Errors
    /// Returns [`WorldError::NoGoal`] if the layout has no goal cell, or
    /// [`WorldError::CostGridMismatch`] if a per-cell grid does not match
    /// the layout's dimensions.
    pub fn with_cost_model(layout: Layout, cost_model: CostModel) -> Result<Self, WorldError> {
        let goal = layout.goals().first().copied().ok_or(WorldError::NoGoal)?;
        if let CostModel::PerCell(grid) = &cost_model {
            if grid.width() != layout.width() || grid.height() != layout.height() {
                return Err(WorldError::CostGridMismatch {
                    expected: (layout.width(), layout.height()),
                    found: (grid.width(), grid.height()),
                });
            }
        }
        Ok(Self {
            layout,
            goal,
            cost_model,
        })
    }

    /// The cell the search must reach.
    #[must_use]
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// The underlying layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Price of entering `position`, or `None` outside the cost grid.
    fn entry_cost(&self, position: Position) -> Option<Cost> {
        match &self.cost_model {
            CostModel::Uniform(cost) => Some(*cost),
            CostModel::PerCell(grid) => grid.get(position).copied(),
        }
    }
}

impl SearchProblem for MazeProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.layout.start()
    }

    fn is_goal_state(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        let mut out = Vec::new();
        for direction in Direction::ALL {
            let Some(next) = self.layout.walls().step(*state, direction) else {
                continue;
            };
            if self.layout.is_wall(next) {
                continue;
            }
            let Some(step_cost) = self.entry_cost(next) else {
                continue;
            };
            out.push(Successor {
                state: next,
                action: direction,
                step_cost,
            });
        }
        out
    }

    fn problem_id(&self) -> &str {
        self.layout.name()
    }

    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::from(IDENTITY_MAZE);
        bytes.extend_from_slice(&self.layout.identity_bytes());
        match &self.cost_model {
            CostModel::Uniform(cost) => {
                bytes.push(0);
                bytes.extend_from_slice(&cost.to_le_bytes());
            }
            CostModel::PerCell(grid) => {
                bytes.push(1);
                for position in grid.positions() {
                    if let Some(cost) = grid.get(position) {
                        bytes.extend_from_slice(&cost.to_le_bytes());
                    }
                }
            }
        }
        bytes
    }
}

/// Manhattan distance from a position to the goal cell.
///
/// Admissible and consistent whenever every step costs at least one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic<MazeProblem> for ManhattanHeuristic {
    fn estimate(&self, state: &Position, problem: &MazeProblem) -> Cost {
        state.manhattan_distance(problem.goal())
    }
}
