//! Dense row-major grid storage.

use crate::position::{Direction, Position};

/// A rectangular grid of cells stored in row-major order.
///
/// Out-of-range access returns `None` or reports failure instead of
/// panicking; callers decide how to treat positions outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid of `width * height` cells, all set to `fill`.
    #[must_use]
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `position` lies inside the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// The cell at `position`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&T> {
        if self.in_bounds(position) {
            self.cells.get(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// Overwrite the cell at `position`. Returns `false` when out of bounds.
    pub fn set(&mut self, position: Position, value: T) -> bool {
        if self.in_bounds(position) {
            self.cells[position.y * self.width + position.x] = value;
            true
        } else {
            false
        }
    }

    /// The neighbor of `position` one step in `direction`, or `None` when
    /// the step would leave the grid.
    #[must_use]
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        let next = Position::new(x, y);
        if self.in_bounds(next) {
            Some(next)
        } else {
            None
        }
    }

    /// Iterate every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
