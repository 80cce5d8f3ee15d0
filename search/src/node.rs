//! Search nodes and the append-only node arena.

use crate::contract::Cost;

/// Index of a node in its arena.
pub type NodeId = usize;

/// An immutable node in the search tree.
///
/// `parent` is an arena index, so every recorded edge is a generation edge
/// that actually happened during traversal; path reconstruction cannot
/// fabricate a transition.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// This node's arena index.
    pub id: NodeId,
    /// Parent arena index (`None` for the root).
    pub parent: Option<NodeId>,
    /// The state at this node.
    pub state: S,
    /// The action that produced this node from its parent. `None` for the root.
    pub action: Option<A>,
    /// Cost of the producing step. Zero for the root.
    pub step_cost: Cost,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the root (saturating).
    pub g_cost: Cost,
}

/// Append-only arena owning every node created during one run.
///
/// Nodes are never mutated or removed; `NodeId`s handed out by the push
/// methods stay valid for the arena's lifetime.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a root node with zero depth and cost.
    pub fn push_root(&mut self, state: S) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SearchNode {
            id,
            parent: None,
            state,
            action: None,
            step_cost: 0,
            depth: 0,
            g_cost: 0,
        });
        id
    }

    /// Add a child of `parent` produced by `action` at `step_cost`.
    ///
    /// Depth and cumulative cost are derived from the parent; the cumulative
    /// cost saturates instead of wrapping.
    pub fn push_child(&mut self, parent: NodeId, state: S, action: A, step_cost: Cost) -> NodeId {
        let id = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        let g_cost = self.nodes[parent].g_cost.saturating_add(step_cost);
        self.nodes.push(SearchNode {
            id,
            parent: Some(parent),
            state,
            action: Some(action),
            step_cost,
            depth,
            g_cost,
        });
        id
    }

    /// The node at `id`. Ids come from this arena's push methods, so lookup
    /// never fails for ids the caller was handed.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id]
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent pointers from `goal` back to the root, collecting the
    /// producing actions, then reverse into start-to-goal order.
    #[must_use]
    pub fn reconstruct_actions(&self, goal: NodeId) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions = Vec::new();
        let mut current = Some(goal);

        while let Some(id) = current {
            let node = &self.nodes[id];
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }

        actions.reverse();
        actions
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
