//! Binary that runs every algorithm over the tiny maze and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `maze_fixture`
//!
//! Output: key=value lines, one block per algorithm, preceded by the
//! problem digest.

use conformance_tests::fixtures::tiny_maze;
use warren_grid::position::Direction;
use warren_search::contract::problem_digest;
use warren_search::report::SearchReport;
use warren_search::search::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchOutcome,
};
use warren_worlds::maze::{ManhattanHeuristic, MazeProblem};

fn print_block(name: &str, problem: &MazeProblem, outcome: &SearchOutcome<Direction>) {
    let report = SearchReport::new(name, problem, outcome);
    println!("{name}_actions={}", report.actions.join(","));
    println!("{name}_expanded={}", report.stats.expanded);
    println!("{name}_report_digest={}", report.digest().as_str());
}

fn main() {
    let maze = tiny_maze();
    println!("problem_digest={}", problem_digest(&maze).as_str());

    print_block("depth_first", &maze, &depth_first_search(&maze));
    print_block("breadth_first", &maze, &breadth_first_search(&maze));
    print_block("uniform_cost", &maze, &uniform_cost_search(&maze));
    print_block(
        "a_star_manhattan",
        &maze,
        &a_star_search(&maze, &ManhattanHeuristic),
    );
}
