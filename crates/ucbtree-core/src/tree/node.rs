use std::collections::BTreeMap;

use crate::tree::{ids::NodeId, stats::NodeStats};

#[derive(Debug, Clone)]
/// Statistics for one position in the search tree plus the children reached from it.
/// Children are keyed by choice and kept in key order so iteration is stable across runs.
pub struct Node<A> {
    stats: NodeStats,
    children: BTreeMap<A, NodeId>,
}

impl<A: Ord> Node<A> {
    /// Create a zero-initialized node without children
    pub fn new() -> Self {
        Node {
            stats: NodeStats::new(),
            children: BTreeMap::new(),
        }
    }

    /// Accumulated outcome sum
    pub fn value(&self) -> f64 {
        self.stats.value()
    }

    /// Completed episodes that passed through this node
    pub fn visits(&self) -> u64 {
        self.stats.visits()
    }

    /// Sample mean of outcomes, `None` while unvisited
    pub fn mean(&self) -> Option<f64> {
        self.stats.mean()
    }

    pub fn is_unvisited(&self) -> bool {
        self.stats.is_unvisited()
    }

    /// No child has been materialized below this node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up the child reached by `choice` without creating it
    pub fn child(&self, choice: &A) -> Option<NodeId> {
        self.children.get(choice).copied()
    }

    /// Iterate children in choice order
    pub fn children(&self) -> impl Iterator<Item = (&A, NodeId)> + '_ {
        self.children.iter().map(|(choice, id)| (choice, *id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn insert_child(&mut self, choice: A, child: NodeId) {
        self.children.insert(choice, child);
    }

    pub(crate) fn record(&mut self, outcome: f64) {
        self.stats.record(outcome);
    }
}

impl<A: Ord> Default for Node<A> {
    fn default() -> Self {
        Node::new()
    }
}
