//! Optimality locks for the four algorithms.
//!
//! - BFS returns a fewest-action plan under equal step costs.
//! - UCS and A* (admissible heuristic) return a cheapest plan under
//!   varying costs.
//! - UCS and A* with the null heuristic agree on everything.
//! - Cheap-long vs expensive-short routes split BFS from UCS/A*.

use conformance_tests::fixtures::{corner_room, detour_maze, open_room, tiny_maze};
use warren_search::heuristic::NullHeuristic;
use warren_search::replay::replay_verify;
use warren_search::search::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search,
};
use warren_worlds::corners::CornersHeuristic;
use warren_worlds::maze::ManhattanHeuristic;

// --- open room: 3x3 interior, diagonal goal ---

#[test]
fn diagonal_goal_takes_four_actions() {
    let room = open_room();
    let bfs = breadth_first_search(&room).plan.expect("goal is reachable");
    let ucs = uniform_cost_search(&room).plan.expect("goal is reachable");
    let a_star = a_star_search(&room, &ManhattanHeuristic)
        .plan
        .expect("goal is reachable");
    assert_eq!(bfs.actions.len(), 4, "bfs finds a fewest-action plan");
    assert_eq!(ucs.actions.len(), 4, "unit costs make cheapest equal shortest");
    assert_eq!(a_star.actions.len(), 4);
    assert_eq!(ucs.cost, 4);
    assert_eq!(a_star.cost, 4);
}

#[test]
fn depth_first_plan_is_valid_but_unranked() {
    let room = open_room();
    let plan = depth_first_search(&room).plan.expect("goal is reachable");
    assert!(plan.actions.len() >= 4, "no plan can beat the grid distance");
    replay_verify(&room, &plan).expect("the plan must replay to the goal");
}

// --- tiny maze: forced detour, optimum five ---

#[test]
fn walled_maze_optimum_is_five() {
    let maze = tiny_maze();
    let bfs = breadth_first_search(&maze).plan.expect("goal is reachable");
    let ucs = uniform_cost_search(&maze).plan.expect("goal is reachable");
    let a_star = a_star_search(&maze, &ManhattanHeuristic)
        .plan
        .expect("goal is reachable");
    assert_eq!(bfs.actions.len(), 5);
    assert_eq!(ucs.cost, 5);
    assert_eq!(a_star.cost, 5, "manhattan is admissible on unit-cost mazes");
}

// --- null-heuristic equivalence ---

#[test]
fn null_heuristic_a_star_is_uniform_cost() {
    let maze = tiny_maze();
    assert_eq!(
        a_star_search(&maze, &NullHeuristic),
        uniform_cost_search(&maze),
        "identical plans, stats, and termination"
    );

    let priced = detour_maze();
    assert_eq!(
        a_star_search(&priced, &NullHeuristic),
        uniform_cost_search(&priced)
    );
}

// --- cost split: cheap-long vs expensive-short ---

#[test]
fn pricing_splits_shortest_from_cheapest() {
    let maze = detour_maze();
    let shortest = breadth_first_search(&maze).plan.expect("goal is reachable");
    let cheapest = uniform_cost_search(&maze).plan.expect("goal is reachable");
    let informed = a_star_search(&maze, &ManhattanHeuristic)
        .plan
        .expect("goal is reachable");

    assert_eq!(shortest.actions.len(), 2, "bfs takes the priced corridor");
    assert_eq!(shortest.cost, 11);
    assert_eq!(cheapest.actions.len(), 4, "ucs walks around it");
    assert_eq!(cheapest.cost, 4);
    assert_eq!(informed.cost, 4, "a manhattan estimate keeps a* optimal here");
    assert_ne!(
        shortest.actions, cheapest.actions,
        "the two regimes must disagree on this fixture"
    );
}

// --- corner tours ---

#[test]
fn corner_tour_optimum_is_eight() {
    let tour = corner_room();
    let bfs = breadth_first_search(&tour).plan.expect("tour exists");
    let a_star = a_star_search(&tour, &CornersHeuristic)
        .plan
        .expect("tour exists");
    assert_eq!(bfs.actions.len(), 8, "two steps out, then around the ring");
    assert_eq!(a_star.cost, 8, "farthest-corner estimate is admissible");
    replay_verify(&tour, &a_star).expect("the tour must replay to the goal");
}
