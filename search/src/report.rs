//! Run reports: termination reasons, counters, and the JSON artifact.
//!
//! Every run produces a [`TerminationReason`] and [`SearchStats`]; a
//! [`SearchReport`] additionally binds the run to the problem it executed
//! against via a content digest, so two reports compare meaningfully only
//! when their inputs were identical.

use std::fmt;

use crate::contract::{problem_digest, Cost, SearchProblem};
use crate::digest::{canonical_hash, ContentHash};
use crate::search::SearchOutcome;

/// Domain prefix for report content hashing.
pub const DOMAIN_REPORT: &[u8] = b"WARREN::REPORT::V1\0";

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was reached.
    GoalReached,
    /// The frontier emptied without reaching a goal. A defined outcome
    /// callers must check, not an error.
    FrontierExhausted,
    /// The policy's expansion budget was hit.
    ExpansionBudgetExceeded,
}

/// Aggregate counters produced by every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded (successors enumerated).
    pub expanded: u64,
    /// Successor candidates enumerated across all expansions.
    pub generated: u64,
    /// Candidates dropped by dedup: already visited, already discovered, or
    /// no cost improvement over the best known path.
    pub duplicates_suppressed: u64,
    /// Candidates dropped by the depth cutoff.
    pub depth_limited: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Deepest node created.
    pub max_depth_reached: u32,
}

/// A run bound to its inputs, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Name of the algorithm that produced the run.
    pub algorithm: String,
    /// The problem's stable identifier.
    pub problem_id: String,
    /// Content digest of the problem's identity bytes.
    pub problem_digest: ContentHash,
    /// Why the run stopped.
    pub termination: TerminationReason,
    /// Plan length in actions; `None` when no goal was reached.
    pub plan_length: Option<u64>,
    /// Plan cost; `None` when no goal was reached.
    pub plan_cost: Option<Cost>,
    /// Rendered action names in plan order. Empty when no goal was reached.
    pub actions: Vec<String>,
    /// Run counters.
    pub stats: SearchStats,
}

impl SearchReport {
    /// Bind an outcome to the problem it ran against.
    pub fn new<P>(algorithm: &str, problem: &P, outcome: &SearchOutcome<P::Action>) -> Self
    where
        P: SearchProblem + ?Sized,
        P::Action: fmt::Display,
    {
        let (plan_length, plan_cost, actions) = match &outcome.plan {
            Some(plan) => (
                Some(plan.actions.len() as u64),
                Some(plan.cost),
                plan.actions.iter().map(ToString::to_string).collect(),
            ),
            None => (None, None, Vec::new()),
        };
        Self {
            algorithm: algorithm.to_string(),
            problem_id: problem.problem_id().to_string(),
            problem_digest: problem_digest(problem),
            termination: outcome.termination,
            plan_length,
            plan_cost,
            actions,
            stats: outcome.stats,
        }
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self.actions,
            "algorithm": self.algorithm,
            "plan_cost": self.plan_cost,
            "plan_length": self.plan_length,
            "problem_digest": self.problem_digest.as_str(),
            "problem_id": self.problem_id,
            "stats": stats_to_json(&self.stats),
            "termination": termination_reason_str(self.termination),
        })
    }

    /// Serialize to a compact JSON string.
    ///
    /// `serde_json` objects iterate in sorted key order, so equal reports
    /// serialize to byte-identical strings.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Content digest of the serialized report.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_REPORT, self.to_json_string().as_bytes())
    }
}

fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "depth_limited": stats.depth_limited,
        "duplicates_suppressed": stats.duplicates_suppressed,
        "expanded": stats.expanded,
        "frontier_high_water": stats.frontier_high_water,
        "generated": stats.generated,
        "max_depth_reached": stats.max_depth_reached,
    })
}

fn termination_reason_str(reason: TerminationReason) -> &'static str {
    match reason {
        TerminationReason::GoalReached => "goal_reached",
        TerminationReason::FrontierExhausted => "frontier_exhausted",
        TerminationReason::ExpansionBudgetExceeded => "expansion_budget_exceeded",
    }
}
