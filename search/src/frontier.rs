//! Frontier containers for the traversal algorithms.
//!
//! Three shapes: a LIFO stack (depth-first), a FIFO queue (breadth-first),
//! and a min-priority heap (uniform-cost and heuristic search). Dedup policy
//! lives with the algorithms, not here; each container only orders entries
//! and tracks its high-water mark.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::contract::Cost;
use crate::node::NodeId;

/// LIFO frontier: the most recently pushed entry pops first.
#[derive(Debug)]
pub struct StackFrontier {
    entries: Vec<NodeId>,
    high_water: u64,
}

impl StackFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            high_water: 0,
        }
    }

    /// Push an entry.
    pub fn push(&mut self, node: NodeId) {
        self.entries.push(node);
        let size = self.entries.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the most recent entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for StackFrontier {
    fn default() -> Self {
        Self::new()
    }
}

/// FIFO frontier: the oldest pushed entry pops first.
#[derive(Debug)]
pub struct QueueFrontier {
    entries: VecDeque<NodeId>,
    high_water: u64,
}

impl QueueFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            high_water: 0,
        }
    }

    /// Push an entry at the back.
    pub fn push(&mut self, node: NodeId) {
        self.entries.push_back(node);
        let size = self.entries.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the oldest entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for QueueFrontier {
    fn default() -> Self {
        Self::new()
    }
}

/// The priority-frontier ordering key: `(priority, sequence)`.
///
/// Lower priority first; ties broken by older sequence, so equal-priority
/// entries leave in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PriorityKey {
    priority: Cost,
    sequence: u64,
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A priority-frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so entries carry `Reverse<PriorityKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct PriorityEntry {
    key: Reverse<PriorityKey>,
    node: NodeId,
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PriorityEntry {}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier with deterministic insertion-order tie-breaking.
///
/// The caller supplies the priority at push time; a monotone sequence number
/// assigned internally breaks ties, so two entries pushed with equal
/// priorities always pop in push order.
#[derive(Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<PriorityEntry>,
    next_sequence: u64,
    high_water: u64,
}

impl PriorityFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Push an entry with its priority.
    pub fn push(&mut self, node: NodeId, priority: Cost) {
        let key = Reverse(PriorityKey {
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.heap.push(PriorityEntry { key, node });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the entry with the lowest priority.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}
