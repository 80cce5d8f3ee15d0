//! Search problem contract trait.

use std::hash::Hash;

use crate::digest::{canonical_hash, ContentHash};
use crate::error::SearchError;
use crate::replay;

/// Domain prefix for problem identity hashing.
pub const DOMAIN_PROBLEM: &[u8] = b"WARREN::PROBLEM::V1\0";

/// Cumulative and per-step path cost.
///
/// Unsigned by design: negative step costs are unrepresentable, which is what
/// the cost-ordered strategies rely on for optimality. All cost arithmetic in
/// this crate saturates instead of wrapping.
pub type Cost = u64;

/// One successor of a state: the state reached, the action that reaches it,
/// and the cost of that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub step_cost: Cost,
}

/// A pluggable state space for the traversal algorithms.
///
/// The algorithms produce states only through [`SearchProblem::start_state`]
/// and [`SearchProblem::successors`]; they never construct states themselves.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state always yields the
///   same successors in the same order. Tie-breaking, replay, and repeated-run
///   reproducibility all build on this.
/// - `is_goal_state` is a pure predicate with no side effects.
/// - `successors` may return an empty list (a dead end); that is not an error.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone + PartialEq;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All states reachable in one step from `state`, in deterministic order.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a legal action sequence applied from the start state.
    ///
    /// The default implementation replays the sequence step by step. The
    /// algorithms accumulate cost incrementally and never call this; it
    /// serves auxiliary callers that hold a bare action list.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::IllegalAction`] when an action cannot be
    /// applied from the state preceding it.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Result<Cost, SearchError> {
        replay::run_actions(self, actions).map(|(_, cost)| cost)
    }

    /// Stable identifier naming this problem in reports.
    fn problem_id(&self) -> &str {
        "unnamed"
    }

    /// Deterministic byte encoding of the problem's identity.
    ///
    /// Feeds [`problem_digest`]. Worlds override this with their structural
    /// encoding; the default is empty, which still digests stably.
    fn identity_bytes(&self) -> Vec<u8> {
        Vec::new()
    }
}

/// Content digest binding a run to the problem it executed against.
#[must_use]
pub fn problem_digest<P: SearchProblem + ?Sized>(problem: &P) -> ContentHash {
    canonical_hash(DOMAIN_PROBLEM, &problem.identity_bytes())
}
