//! Warren Grid: the pure maze substrate.
//!
//! This crate provides the grid-world vocabulary the worlds layer builds on:
//! positions, the four cardinal directions, a rectangular `Grid<T>`, and the
//! text maze `Layout` format. It has no external dependencies and performs
//! no I/O beyond [`layout::Layout::from_file`].
//!
//! # Crate Dependency Direction
//!
//! `warren-grid` ← `warren-worlds` → `warren-search`
//!
//! The grid substrate knows nothing about searching; the search engine is
//! generic and knows nothing about grids. Only `warren-worlds` sees both.
//!
//! # Coordinates
//!
//! `x` is the column, `y` is the row counted from the top of the maze text.
//! `North` decreases `y`, `South` increases `y`, `East` increases `x`,
//! `West` decreases `x`.

#![forbid(unsafe_code)]

pub mod grid;
pub mod layout;
pub mod position;
