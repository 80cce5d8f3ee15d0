//! Heuristic estimates for best-first search.

use crate::contract::{Cost, SearchProblem};

/// A cost-to-goal estimate for states of a problem.
///
/// Estimates are non-negative by construction (`Cost` is unsigned).
/// Admissibility and consistency are the implementer's obligation: an
/// estimate that overstates the true remaining cost can make heuristic
/// search return a suboptimal plan without any error being raised.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    /// Estimated cost from `state` to the nearest goal.
    fn estimate(&self, state: &P::State, problem: &P) -> Cost;
}

/// The zero estimate. Degrades heuristic search to uniform-cost search
/// exactly: both rank the frontier by cumulative cost alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> Cost {
        0
    }
}
