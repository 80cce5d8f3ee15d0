//! Maze layouts parsed from text.
//!
//! A layout is a rectangular block of tile characters:
//!
//! | tile  | meaning      |
//! |-------|--------------|
//! | `%`   | wall         |
//! | `P`   | start cell   |
//! | `.`   | goal cell    |
//! | ` `   | open cell    |
//!
//! Every row must have the same width, and exactly one `P` must appear.
//! Goal cells are collected in row-major scan order. A layout with zero
//! goals parses successfully; whether that is acceptable is decided by
//! the problem built on top of it.

use std::fmt;
use std::path::Path;

use crate::grid::Grid;
use crate::position::Position;

const TILE_WALL: char = '%';
const TILE_START: char = 'P';
const TILE_GOAL: char = '.';
const TILE_OPEN: char = ' ';

/// Failures raised while reading or parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The text contained no rows.
    Empty,
    /// A row's width differs from the first row's width.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the tile alphabet.
    UnknownTile { row: usize, column: usize, tile: char },
    /// No `P` tile anywhere in the text.
    MissingStart,
    /// A second `P` tile.
    DuplicateStart { row: usize, column: usize },
    /// The backing file could not be read.
    Io { detail: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout text contains no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has width {found} but the first row has width {expected}"
            ),
            Self::UnknownTile { row, column, tile } => {
                write!(f, "unknown tile {tile:?} at row {row}, column {column}")
            }
            Self::MissingStart => write!(f, "layout has no start tile 'P'"),
            Self::DuplicateStart { row, column } => {
                write!(f, "second start tile 'P' at row {row}, column {column}")
            }
            Self::Io { detail } => write!(f, "layout file could not be read: {detail}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A parsed maze: wall grid, start cell, and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    walls: Grid<bool>,
    start: Position,
    goals: Vec<Position>,
}

impl Layout {
    /// Parse a layout from tile text.
    ///
    /// Trailing blank lines are ignored so files ending in a newline parse
    /// cleanly. Carriage returns at line ends are stripped.
    pub fn parse(name: &str, text: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = Grid::new(width, height, false);
        let mut start: Option<Position> = None;
        let mut goals = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, tile) in line.chars().enumerate() {
                let position = Position::new(column, row);
                match tile {
                    TILE_WALL => {
                        walls.set(position, true);
                    }
                    TILE_START => {
                        if start.is_some() {
                            return Err(LayoutError::DuplicateStart { row, column });
                        }
                        start = Some(position);
                    }
                    TILE_GOAL => goals.push(position),
                    TILE_OPEN => {}
                    other => {
                        return Err(LayoutError::UnknownTile {
                            row,
                            column,
                            tile: other,
                        });
                    }
                }
            }
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        Ok(Self {
            name: name.to_string(),
            walls,
            start,
            goals,
        })
    }

    /// Read and parse a layout file. The layout name is the file stem.
    pub fn from_file(path: &Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path).map_err(|error| LayoutError::Io {
            detail: error.to_string(),
        })?;
        let name = path
            .file_stem()
            .map_or_else(|| "layout".to_string(), |stem| stem.to_string_lossy().into_owned());
        Self::parse(&name, &text)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.walls.width()
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.walls.height()
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    #[must_use]
    pub const fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    /// Whether `position` is blocked. Positions outside the grid count as
    /// walls so callers never walk off the edge.
    #[must_use]
    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.get(position).copied().unwrap_or(true)
    }

    /// Render the layout back to tile text.
    ///
    /// The start tile wins over a goal at the same cell, matching parse
    /// behavior where a cell holds exactly one tile.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                let position = Position::new(x, y);
                let tile = if self.is_wall(position) {
                    TILE_WALL
                } else if position == self.start {
                    TILE_START
                } else if self.goals.contains(&position) {
                    TILE_GOAL
                } else {
                    TILE_OPEN
                };
                text.push(tile);
            }
            text.push('\n');
        }
        text
    }

    /// Deterministic byte encoding of the layout structure.
    ///
    /// Encodes dimensions, the wall bitmap in row-major order, the start
    /// cell, and the goal list. Two layouts produce the same bytes exactly
    /// when they are structurally identical, independent of name.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(self.width() as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.height() as u64).to_le_bytes());
        for position in self.walls.positions() {
            bytes.push(u8::from(self.is_wall(position)));
        }
        bytes.extend_from_slice(&(self.start.x as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.start.y as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.goals.len() as u64).to_le_bytes());
        for goal in &self.goals {
            bytes.extend_from_slice(&(goal.x as u64).to_le_bytes());
            bytes.extend_from_slice(&(goal.y as u64).to_le_bytes());
        }
        bytes
    }
}
