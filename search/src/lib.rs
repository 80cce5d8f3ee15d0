//! Warren Search: deterministic graph search over pluggable problems.
//!
//! This crate is self-contained: it knows nothing about grids or mazes and
//! operates purely through the problem contract. Concrete worlds live in
//! `warren-worlds`, which bridges this crate to `warren-grid`.
//!
//! # Crate dependency graph
//!
//! ```text
//! warren-grid   ←   warren-worlds   →   warren-search
//! (substrate)       (maze problems)     (this crate)
//! ```
//!
//! # Key types
//!
//! - [`contract::SearchProblem`] — the pluggable state-space contract
//! - [`search::SearchOutcome`] — termination reason, plan, and run counters
//! - [`frontier::PriorityFrontier`] — min-priority frontier with
//!   deterministic insertion-order tie-breaking
//! - [`node::NodeArena`] — append-only parent-pointer arena for path
//!   reconstruction
//! - [`policy::SearchPolicy`] — expansion and depth budgets
//! - [`heuristic::Heuristic`] — cost-to-goal estimates for best-first search
//! - [`report::SearchReport`] — JSON run artifact with problem digest binding

#![forbid(unsafe_code)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod replay;
pub mod report;
pub mod search;
