//! Shared world generators for warren benchmark suites.
//!
//! Every generator builds layout text first, so benches can time the
//! parser on the same inputs the algorithm benches search.

#![forbid(unsafe_code)]

use warren_grid::grid::Grid;
use warren_grid::layout::Layout;
use warren_search::contract::Cost;
use warren_worlds::corners::CornersProblem;
use warren_worlds::maze::{CostModel, MazeProblem};

/// Tile text for an open square room with `interior` free cells per
/// side. Start in the top-left corner, goal in the bottom-right.
///
/// # Panics
///
/// Panics if `interior < 2`; the goal would collide with the start.
#[must_use]
pub fn open_room_text(interior: usize) -> String {
    assert!(interior >= 2, "interior must hold distinct start and goal");
    let width = interior + 2;
    let border = "%".repeat(width);
    let mut rows = Vec::with_capacity(width);
    rows.push(border.clone());
    for y in 1..=interior {
        let mut row = String::with_capacity(width);
        row.push('%');
        for x in 1..=interior {
            row.push(if (x, y) == (1, 1) {
                'P'
            } else if (x, y) == (interior, interior) {
                '.'
            } else {
                ' '
            });
        }
        row.push('%');
        rows.push(row);
    }
    rows.push(border);
    rows.join("\n")
}

/// Unit-cost maze over [`open_room_text`].
///
/// # Panics
///
/// Panics if the generated layout fails to parse or build. Generator
/// failures are fatal in benchmarks.
#[must_use]
pub fn open_room(interior: usize) -> MazeProblem {
    let text = open_room_text(interior);
    let layout = Layout::parse(&format!("open_room_{interior}"), &text).expect("layout parses");
    MazeProblem::new(layout).expect("maze builds")
}

/// Tile text for a serpentine maze: `columns` vertical corridors
/// separated by dividers whose single gap alternates between bottom
/// and top, forcing a snaking route.
///
/// # Panics
///
/// Panics if `columns < 2` or `height < 4`; smaller values leave no
/// room for dividers.
#[must_use]
pub fn serpentine_text(columns: usize, height: usize) -> String {
    assert!(columns >= 2, "need at least two corridors to snake");
    assert!(height >= 4, "need interior rows on both sides of a gap");
    let width = 2 * columns + 1;
    let goal = (width - 2, height / 2);
    let border = "%".repeat(width);
    let mut rows = Vec::with_capacity(height);
    rows.push(border.clone());
    for y in 1..height - 1 {
        let mut row = String::with_capacity(width);
        row.push('%');
        for x in 1..width - 1 {
            if x % 2 == 0 {
                // Divider k opens at the bottom for odd k, the top for even.
                let gap_y = if (x / 2) % 2 == 1 { height - 2 } else { 1 };
                row.push(if y == gap_y { ' ' } else { '%' });
            } else if (x, y) == (1, 1) {
                row.push('P');
            } else if (x, y) == goal {
                row.push('.');
            } else {
                row.push(' ');
            }
        }
        row.push('%');
        rows.push(row);
    }
    rows.push(border);
    rows.join("\n")
}

/// Unit-cost maze over [`serpentine_text`].
///
/// # Panics
///
/// Panics if the generated layout fails to parse or build.
#[must_use]
pub fn serpentine(columns: usize, height: usize) -> MazeProblem {
    let text = serpentine_text(columns, height);
    let name = format!("serpentine_{columns}x{height}");
    let layout = Layout::parse(&name, &text).expect("layout parses");
    MazeProblem::new(layout).expect("maze builds")
}

/// Open room with a repeating cost gradient, so cheapest and shortest
/// routes disagree across the whole floor.
///
/// # Panics
///
/// Panics if the generated layout fails to parse or build.
#[must_use]
pub fn priced_room(interior: usize) -> MazeProblem {
    let text = open_room_text(interior);
    let layout = Layout::parse(&format!("priced_room_{interior}"), &text).expect("layout parses");
    let mut costs = Grid::new(layout.width(), layout.height(), 1);
    for position in layout.walls().positions() {
        let price = 1 + ((2 * position.x + position.y) % 5) as Cost;
        costs.set(position, price);
    }
    MazeProblem::with_cost_model(layout, CostModel::PerCell(costs)).expect("maze builds")
}

/// Corners problem over an open room with a centered start.
///
/// # Panics
///
/// Panics if the generated layout fails to parse or build.
#[must_use]
pub fn corner_arena(interior: usize) -> CornersProblem {
    assert!(interior >= 3, "center start must be distinct from corners");
    let width = interior + 2;
    let center = width / 2;
    let border = "%".repeat(width);
    let mut rows = Vec::with_capacity(width);
    rows.push(border.clone());
    for y in 1..=interior {
        let mut row = String::with_capacity(width);
        row.push('%');
        for x in 1..=interior {
            row.push(if (x, y) == (center, center) { 'P' } else { ' ' });
        }
        row.push('%');
        rows.push(row);
    }
    rows.push(border);
    let text = rows.join("\n");
    let layout = Layout::parse(&format!("corner_arena_{interior}"), &text).expect("layout parses");
    CornersProblem::new(layout).expect("corners build")
}
