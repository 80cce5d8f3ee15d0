//! Search entry points and expansion loops.
//!
//! Four strategies over one contract: depth-first, breadth-first,
//! uniform-cost, and heuristic best-first search. Uniform-cost is the
//! weighted core run with the null heuristic, so the two rank frontiers
//! identically by construction.
//!
//! Every entry point has a `_bounded` variant taking a [`SearchPolicy`];
//! the plain variants run unbounded. All runs return a [`SearchOutcome`]
//! whose termination reason distinguishes a found plan from the defined
//! failure outcomes. Exhaustion is not an error.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::contract::{Cost, SearchProblem};
use crate::frontier::{PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{Heuristic, NullHeuristic};
use crate::node::{NodeArena, NodeId};
use crate::policy::SearchPolicy;
use crate::report::{SearchStats, TerminationReason};

/// An ordered action sequence with its accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    /// Actions in start-to-goal order.
    pub actions: Vec<A>,
    /// Total cost accumulated along the generation edges.
    pub cost: Cost,
}

/// Result of a search run.
///
/// Always carries run statistics regardless of how the search terminated.
/// Check [`SearchOutcome::is_goal_reached`] or inspect `termination` to
/// determine the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<A> {
    /// Why the run stopped.
    pub termination: TerminationReason,
    /// The plan, present exactly when `termination` is `GoalReached`.
    pub plan: Option<Plan<A>>,
    /// Run counters.
    pub stats: SearchStats,
}

impl<A> SearchOutcome<A> {
    /// Returns `true` if the run terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached)
    }

    /// Consume the outcome as a bare action sequence.
    ///
    /// Empty when no goal was reached.
    #[must_use]
    pub fn into_actions(self) -> Vec<A> {
        self.plan.map_or_else(Vec::new, |plan| plan.actions)
    }
}

/// Depth-first search with an explicit stack.
///
/// Backtracking is implicit in stack pops. Returns a legal plan with no
/// optimality guarantee by cost or length.
#[must_use]
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    depth_first_search_bounded(problem, &SearchPolicy::default())
}

/// Depth-first search under a budget policy.
#[must_use]
pub fn depth_first_search_bounded<P: SearchProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchOutcome<P::Action> {
    let mut arena = NodeArena::new();
    let mut frontier = StackFrontier::new();
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();

    let root = arena.push_root(problem.start_state());
    frontier.push(root);

    let (termination, plan) = loop {
        let Some(id) = frontier.pop() else {
            break (TerminationReason::FrontierExhausted, None);
        };
        let state = arena.get(id).state.clone();
        // A state can sit on the stack more than once; only its first pop
        // expands it.
        if visited.contains(&state) {
            continue;
        }
        if problem.is_goal_state(&state) {
            break (
                TerminationReason::GoalReached,
                Some(extract_plan(&arena, id)),
            );
        }
        if policy.expansion_budget_hit(stats.expanded) {
            break (TerminationReason::ExpansionBudgetExceeded, None);
        }
        visited.insert(state.clone());
        stats.expanded += 1;

        let depth = arena.get(id).depth;
        for successor in problem.successors(&state) {
            stats.generated += 1;
            if visited.contains(&successor.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child_depth = depth + 1;
            if !policy.depth_allowed(child_depth) {
                stats.depth_limited += 1;
                continue;
            }
            let child = arena.push_child(id, successor.state, successor.action, successor.step_cost);
            if child_depth > stats.max_depth_reached {
                stats.max_depth_reached = child_depth;
            }
            frontier.push(child);
        }
    };

    finish(termination, plan, stats, frontier.high_water())
}

/// Breadth-first search.
///
/// Guarantees a plan with the minimum number of actions. Dedup happens at
/// enqueue time: a state already discovered is never enqueued again, so the
/// queue holds no duplicates and the parent recorded at first enqueue is
/// final.
#[must_use]
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    breadth_first_search_bounded(problem, &SearchPolicy::default())
}

/// Breadth-first search under a budget policy.
#[must_use]
pub fn breadth_first_search_bounded<P: SearchProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchOutcome<P::Action> {
    let mut arena = NodeArena::new();
    let mut frontier = QueueFrontier::new();
    let mut discovered: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();

    let start = problem.start_state();
    discovered.insert(start.clone());
    let root = arena.push_root(start);
    frontier.push(root);

    let (termination, plan) = loop {
        let Some(id) = frontier.pop() else {
            break (TerminationReason::FrontierExhausted, None);
        };
        let state = arena.get(id).state.clone();
        if problem.is_goal_state(&state) {
            break (
                TerminationReason::GoalReached,
                Some(extract_plan(&arena, id)),
            );
        }
        if policy.expansion_budget_hit(stats.expanded) {
            break (TerminationReason::ExpansionBudgetExceeded, None);
        }
        stats.expanded += 1;

        let depth = arena.get(id).depth;
        for successor in problem.successors(&state) {
            stats.generated += 1;
            if discovered.contains(&successor.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child_depth = depth + 1;
            if !policy.depth_allowed(child_depth) {
                stats.depth_limited += 1;
                continue;
            }
            discovered.insert(successor.state.clone());
            let child = arena.push_child(id, successor.state, successor.action, successor.step_cost);
            if child_depth > stats.max_depth_reached {
                stats.max_depth_reached = child_depth;
            }
            frontier.push(child);
        }
    };

    finish(termination, plan, stats, frontier.high_water())
}

/// Uniform-cost search: Dijkstra-style expansion by cumulative cost.
///
/// Guarantees a minimum-cost plan. Optimality relies on non-negative step
/// costs, which [`Cost`] guarantees by construction.
#[must_use]
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    uniform_cost_search_bounded(problem, &SearchPolicy::default())
}

/// Uniform-cost search under a budget policy.
#[must_use]
pub fn uniform_cost_search_bounded<P: SearchProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchOutcome<P::Action> {
    weighted_search(problem, &NullHeuristic, policy)
}

/// Heuristic best-first search.
///
/// Ranks the frontier by `g(candidate) + heuristic(candidate)`. With an
/// admissible, consistent heuristic the plan cost is minimal; with the null
/// heuristic this is exactly uniform-cost search.
#[must_use]
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    a_star_search_bounded(problem, heuristic, &SearchPolicy::default())
}

/// Heuristic best-first search under a budget policy.
#[must_use]
pub fn a_star_search_bounded<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    weighted_search(problem, heuristic, policy)
}

/// Shared core of uniform-cost and heuristic search.
///
/// Priority is `g(candidate) + h(candidate)` with saturating addition.
/// Relaxation pushes a fresh node only when the candidate cost strictly
/// improves on the best known cost for that state; stale frontier entries
/// are superseded lazily. The first pop of a state is authoritative, and
/// later pops of the same state are skipped via the visited set.
fn weighted_search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let mut arena = NodeArena::new();
    let mut frontier = PriorityFrontier::new();
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut best_cost: HashMap<P::State, Cost> = HashMap::new();
    let mut stats = SearchStats::default();

    let start = problem.start_state();
    let root_priority = heuristic.estimate(&start, problem);
    best_cost.insert(start.clone(), 0);
    let root = arena.push_root(start);
    frontier.push(root, root_priority);

    let (termination, plan) = loop {
        let Some(id) = frontier.pop() else {
            break (TerminationReason::FrontierExhausted, None);
        };
        let state = arena.get(id).state.clone();
        // Superseded entries skip here; their state was already popped at a
        // better cost.
        if visited.contains(&state) {
            continue;
        }
        if problem.is_goal_state(&state) {
            break (
                TerminationReason::GoalReached,
                Some(extract_plan(&arena, id)),
            );
        }
        if policy.expansion_budget_hit(stats.expanded) {
            break (TerminationReason::ExpansionBudgetExceeded, None);
        }
        visited.insert(state.clone());
        stats.expanded += 1;

        let (g_cost, depth) = {
            let node = arena.get(id);
            (node.g_cost, node.depth)
        };
        for successor in problem.successors(&state) {
            stats.generated += 1;
            if visited.contains(&successor.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child_depth = depth + 1;
            if !policy.depth_allowed(child_depth) {
                stats.depth_limited += 1;
                continue;
            }
            let candidate_g = g_cost.saturating_add(successor.step_cost);
            if best_cost
                .get(&successor.state)
                .is_some_and(|&known| candidate_g >= known)
            {
                stats.duplicates_suppressed += 1;
                continue;
            }
            best_cost.insert(successor.state.clone(), candidate_g);
            let estimate = heuristic.estimate(&successor.state, problem);
            let child = arena.push_child(id, successor.state, successor.action, successor.step_cost);
            if child_depth > stats.max_depth_reached {
                stats.max_depth_reached = child_depth;
            }
            frontier.push(child, candidate_g.saturating_add(estimate));
        }
    };

    finish(termination, plan, stats, frontier.high_water())
}

fn extract_plan<S, A: Clone>(arena: &NodeArena<S, A>, goal: NodeId) -> Plan<A> {
    Plan {
        actions: arena.reconstruct_actions(goal),
        cost: arena.get(goal).g_cost,
    }
}

fn finish<A>(
    termination: TerminationReason,
    plan: Option<Plan<A>>,
    mut stats: SearchStats,
    frontier_high_water: u64,
) -> SearchOutcome<A> {
    stats.frontier_high_water = frontier_high_water;
    match termination {
        TerminationReason::GoalReached => {
            if let Some(found) = &plan {
                debug!(
                    "goal reached: {} actions, cost {}, {} expansions",
                    found.actions.len(),
                    found.cost,
                    stats.expanded
                );
            }
        }
        TerminationReason::FrontierExhausted => {
            debug!("frontier exhausted after {} expansions", stats.expanded);
        }
        TerminationReason::ExpansionBudgetExceeded => {
            debug!("expansion budget exceeded at {} expansions", stats.expanded);
        }
    }
    SearchOutcome {
        termination,
        plan,
        stats,
    }
}
