//! Plan replay and verification.
//!
//! A returned plan is only as trustworthy as its replay: `replay_verify`
//! re-executes the action sequence against the problem contract and checks
//! that it is legal throughout, ends in a goal state, and costs exactly what
//! the plan recorded.

use crate::contract::{Cost, SearchProblem};
use crate::error::SearchError;
use crate::search::Plan;

/// Apply `actions` in order from the start state.
///
/// Returns the final state and the accumulated cost. Each action must match
/// one of the successors of the state preceding it; the matched successor
/// supplies the next state and the step cost.
///
/// # Errors
///
/// Returns [`SearchError::IllegalAction`] with the index of the first action
/// that no successor offers.
pub fn run_actions<P: SearchProblem + ?Sized>(
    problem: &P,
    actions: &[P::Action],
) -> Result<(P::State, Cost), SearchError> {
    let mut state = problem.start_state();
    let mut total: Cost = 0;

    for (index, action) in actions.iter().enumerate() {
        let successors = problem.successors(&state);
        let Some(matched) = successors.into_iter().find(|s| s.action == *action) else {
            return Err(SearchError::IllegalAction { index });
        };
        total = total.saturating_add(matched.step_cost);
        state = matched.state;
    }

    Ok((state, total))
}

/// Verify a plan end to end: legal throughout, goal-terminated, cost-exact.
///
/// # Errors
///
/// Returns [`SearchError::IllegalAction`] when the sequence is illegal,
/// [`SearchError::GoalNotReached`] when the final state fails the goal test,
/// and [`SearchError::CostMismatch`] when the recomputed cost differs from
/// the plan's recorded cost.
pub fn replay_verify<P: SearchProblem + ?Sized>(
    problem: &P,
    plan: &Plan<P::Action>,
) -> Result<(), SearchError> {
    let (end_state, actual) = run_actions(problem, &plan.actions)?;

    if !problem.is_goal_state(&end_state) {
        return Err(SearchError::GoalNotReached);
    }
    if actual != plan.cost {
        return Err(SearchError::CostMismatch {
            expected: plan.cost,
            actual,
        });
    }
    Ok(())
}
