//! Typed search errors.
//!
//! `SearchError` covers contract violations surfaced by replay and cost
//! queries. Exhausting the frontier or a budget is not an error: those are
//! defined outcomes expressed via [`crate::report::TerminationReason`] on the
//! returned outcome.

use crate::contract::Cost;

/// Typed failure for action-sequence replay and cost queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An action could not be applied from the state preceding it.
    IllegalAction { index: usize },
    /// A replayed plan ended in a non-goal state.
    GoalNotReached,
    /// A replayed plan's recomputed cost differs from its recorded cost.
    CostMismatch { expected: Cost, actual: Cost },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalAction { index } => {
                write!(f, "action at index {index} is not legal from its state")
            }
            Self::GoalNotReached => {
                write!(f, "replayed plan ends in a non-goal state")
            }
            Self::CostMismatch { expected, actual } => {
                write!(
                    f,
                    "replayed cost {actual} does not match recorded cost {expected}"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
