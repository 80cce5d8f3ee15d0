//! Contract locks shared by all four algorithms.
//!
//! - A start state that is already a goal yields an empty plan.
//! - Every returned plan replays to a goal at its stated cost.
//! - A disconnected world terminates with frontier exhaustion.
//! - Expansion budgets stop the run with the budget reason.

use conformance_tests::fixtures::{disconnected_maze, solved_cell, tiny_maze};
use warren_search::contract::SearchProblem;
use warren_search::error::SearchError;
use warren_search::policy::SearchPolicy;
use warren_search::replay::{replay_verify, run_actions};
use warren_search::report::TerminationReason;
use warren_search::search::{
    a_star_search, a_star_search_bounded, breadth_first_search, breadth_first_search_bounded,
    depth_first_search, depth_first_search_bounded, uniform_cost_search,
    uniform_cost_search_bounded, Plan, SearchOutcome,
};
use warren_worlds::corners::CornersHeuristic;
use warren_worlds::maze::ManhattanHeuristic;

// --- start-is-goal ---

#[test]
fn solved_start_yields_empty_plan_without_expansion() {
    let problem = solved_cell();
    let outcomes = [
        ("depth_first", depth_first_search(&problem)),
        ("breadth_first", breadth_first_search(&problem)),
        ("uniform_cost", uniform_cost_search(&problem)),
        ("a_star", a_star_search(&problem, &CornersHeuristic)),
    ];
    for (name, outcome) in outcomes {
        assert_eq!(
            outcome.termination,
            TerminationReason::GoalReached,
            "{name}: solved start must report goal reached"
        );
        let plan = outcome.plan.expect("solved start still yields a plan");
        assert!(plan.actions.is_empty(), "{name}: plan must be empty");
        assert_eq!(plan.cost, 0, "{name}: empty plan costs nothing");
        assert_eq!(outcome.stats.expanded, 0, "{name}: nothing may be expanded");
    }
}

#[test]
fn solved_start_survives_a_zero_expansion_budget() {
    let problem = solved_cell();
    let policy = SearchPolicy {
        max_expansions: Some(0),
        ..SearchPolicy::default()
    };
    let outcome = breadth_first_search_bounded(&problem, &policy);
    assert_eq!(outcome.termination, TerminationReason::GoalReached);
    assert_eq!(outcome.stats.expanded, 0);
}

// --- replay validity ---

#[test]
fn every_algorithms_plan_replays_to_the_goal() {
    let maze = tiny_maze();
    let outcomes: [(&str, SearchOutcome<_>); 4] = [
        ("depth_first", depth_first_search(&maze)),
        ("breadth_first", breadth_first_search(&maze)),
        ("uniform_cost", uniform_cost_search(&maze)),
        ("a_star", a_star_search(&maze, &ManhattanHeuristic)),
    ];
    for (name, outcome) in outcomes {
        let plan = outcome.plan.unwrap_or_else(|| panic!("{name}: goal is reachable"));
        replay_verify(&maze, &plan).unwrap_or_else(|e| panic!("{name}: replay failed: {e}"));
        let recomputed = maze
            .cost_of_actions(&plan.actions)
            .unwrap_or_else(|e| panic!("{name}: cost replay failed: {e}"));
        assert_eq!(
            recomputed, plan.cost,
            "{name}: cost_of_actions must equal the accumulated plan cost"
        );
    }
}

#[test]
fn replay_rejects_a_wall_step() {
    let maze = tiny_maze();
    let error = run_actions(&maze, &[warren_grid::position::Direction::North])
        .expect_err("north from the start is a wall");
    assert_eq!(error, SearchError::IllegalAction { index: 0 });
}

#[test]
fn replay_rejects_a_plan_that_stops_short() {
    let maze = tiny_maze();
    let plan = Plan {
        actions: vec![warren_grid::position::Direction::South],
        cost: 1,
    };
    let error = replay_verify(&maze, &plan).expect_err("one step does not reach the goal");
    assert_eq!(error, SearchError::GoalNotReached);
}

#[test]
fn replay_rejects_a_doctored_cost() {
    let maze = tiny_maze();
    let honest = breadth_first_search(&maze).plan.expect("goal is reachable");
    let doctored = Plan {
        actions: honest.actions,
        cost: honest.cost + 1,
    };
    let error = replay_verify(&maze, &doctored).expect_err("cost must match the replay");
    assert_eq!(
        error,
        SearchError::CostMismatch {
            expected: doctored.cost,
            actual: honest.cost,
        }
    );
}

// --- exhaustion ---

#[test]
fn disconnected_world_exhausts_every_frontier() {
    let maze = disconnected_maze();
    let outcomes = [
        ("depth_first", depth_first_search(&maze)),
        ("breadth_first", breadth_first_search(&maze)),
        ("uniform_cost", uniform_cost_search(&maze)),
        ("a_star", a_star_search(&maze, &ManhattanHeuristic)),
    ];
    for (name, outcome) in outcomes {
        assert_eq!(
            outcome.termination,
            TerminationReason::FrontierExhausted,
            "{name}: sealed start must exhaust"
        );
        assert!(outcome.plan.is_none(), "{name}: no plan may be reported");
        assert_eq!(
            outcome.stats.expanded, 1,
            "{name}: only the sealed start cell can be expanded"
        );
    }
}

// --- budgets ---

#[test]
fn budget_stops_each_algorithm_at_the_cap() {
    let maze = tiny_maze();
    let policy = SearchPolicy {
        max_expansions: Some(3),
        ..SearchPolicy::default()
    };
    let outcomes = [
        ("depth_first", depth_first_search_bounded(&maze, &policy)),
        ("breadth_first", breadth_first_search_bounded(&maze, &policy)),
        ("uniform_cost", uniform_cost_search_bounded(&maze, &policy)),
        (
            "a_star",
            a_star_search_bounded(&maze, &ManhattanHeuristic, &policy),
        ),
    ];
    for (name, outcome) in outcomes {
        assert_eq!(
            outcome.termination,
            TerminationReason::ExpansionBudgetExceeded,
            "{name}: shortest plan needs five steps, three expansions cannot reach it"
        );
        assert!(outcome.plan.is_none(), "{name}: no plan under a blown budget");
        assert_eq!(outcome.stats.expanded, 3, "{name}: the cap is exact");
    }
}
