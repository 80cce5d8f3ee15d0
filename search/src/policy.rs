//! Search budget configuration.

/// Expansion and depth budgets for the bounded entry points.
///
/// The default is fully unbounded, which is what the plain entry points use:
/// runs continue until a goal is found or the frontier empties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` is unbounded.
    pub max_expansions: Option<u64>,
    /// Depth cutoff: nodes deeper than this are never created.
    /// `None` is unbounded.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    /// Whether a run that has already expanded `expanded` nodes must stop
    /// instead of expanding another.
    ///
    /// Checked after the goal test, so a goal sitting on the frontier is
    /// still recognized when the budget has run out.
    #[must_use]
    pub fn expansion_budget_hit(&self, expanded: u64) -> bool {
        self.max_expansions.is_some_and(|cap| expanded >= cap)
    }

    /// Whether a node at `depth` may be created.
    #[must_use]
    pub fn depth_allowed(&self, depth: u32) -> bool {
        self.max_depth.is_none_or(|cap| depth <= cap)
    }
}
