//! Canonical layouts and world constructors used across the suite.
//!
//! # Panics
//!
//! Every constructor panics on a malformed fixture. The layouts are
//! compile-time constants, so a panic here is a defect in the fixture
//! itself, never in the code under test.

use warren_grid::grid::Grid;
use warren_grid::layout::Layout;
use warren_grid::position::Position;
use warren_worlds::corners::CornersProblem;
use warren_worlds::maze::{CostModel, MazeProblem};

/// 3x3 open interior, start and goal on opposite corners.
///
/// The shortest plan is four actions; there are several of them.
pub const OPEN_ROOM: &str = "\
%%%%%
%P  %
%   %
%  .%
%%%%%";

/// Walled maze whose shortest plan is exactly five actions.
pub const TINY_MAZE: &str = "\
%%%%%%
%P % %
%  % %
%%   %
%  .%%
%%%%%%";

/// Two-step corridor to the goal next to a three-step open row.
///
/// With the per-cell grid from [`detour_maze`], the corridor cell costs
/// ten, so the cheapest route is the longer one.
pub const DETOUR: &str = "\
%%%%%
%P .%
%   %
%%%%%";

/// The start cell is sealed off from the goal.
pub const DISCONNECTED: &str = "\
%%%%%
%P% %
%%%.%
%%%%%";

/// Single open cell. All four inner corners coincide with the start,
/// so the initial state is already the goal.
pub const CELL: &str = "\
%%%
%P%
%%%";

/// 3x3 open interior with a centered start, for corner tours.
pub const CORNER_ROOM: &str = "\
%%%%%
%   %
% P %
%   %
%%%%%";

fn layout(name: &str, text: &str) -> Layout {
    Layout::parse(name, text).expect("fixture layout parses")
}

/// Unit-cost maze over [`OPEN_ROOM`].
#[must_use]
pub fn open_room() -> MazeProblem {
    MazeProblem::new(layout("open_room", OPEN_ROOM)).expect("fixture maze builds")
}

/// Unit-cost maze over [`TINY_MAZE`].
#[must_use]
pub fn tiny_maze() -> MazeProblem {
    MazeProblem::new(layout("tiny_maze", TINY_MAZE)).expect("fixture maze builds")
}

/// [`DETOUR`] with the direct corridor cell priced at ten.
#[must_use]
pub fn detour_maze() -> MazeProblem {
    let layout = layout("detour", DETOUR);
    let mut costs = Grid::new(layout.width(), layout.height(), 1);
    assert!(costs.set(Position::new(2, 1), 10), "corridor cell in bounds");
    MazeProblem::with_cost_model(layout, CostModel::PerCell(costs)).expect("fixture maze builds")
}

/// Unit-cost maze over [`DISCONNECTED`]; the goal is unreachable.
#[must_use]
pub fn disconnected_maze() -> MazeProblem {
    MazeProblem::new(layout("disconnected", DISCONNECTED)).expect("fixture maze builds")
}

/// Corners problem over [`CELL`]; the start state is the goal.
#[must_use]
pub fn solved_cell() -> CornersProblem {
    CornersProblem::new(layout("cell", CELL)).expect("fixture corners build")
}

/// Corners problem over [`CORNER_ROOM`]; the optimal tour is eight steps.
#[must_use]
pub fn corner_room() -> CornersProblem {
    CornersProblem::new(layout("corner_room", CORNER_ROOM)).expect("fixture corners build")
}
