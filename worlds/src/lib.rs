//! Concrete grid worlds for the search engine.
//!
//! Each world binds a [`warren_grid::layout::Layout`] to the
//! `warren_search` problem contract:
//!
//! - [`maze::MazeProblem`]: reach a single goal cell, with uniform or
//!   per-cell step pricing, plus [`maze::ManhattanHeuristic`].
//! - [`corners::CornersProblem`]: visit all four inner corners, plus
//!   [`corners::CornersHeuristic`].
//!
//! Construction is fallible and returns [`error::WorldError`]; a built
//! world never fails at search time.

#![forbid(unsafe_code)]

pub mod corners;
pub mod error;
pub mod maze;
