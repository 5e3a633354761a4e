use crate::tree::{arena::Arena, error::TreeError, ids::NodeId, node::Node};

#[derive(Debug, Clone)]
/// Owns the arena of nodes (root is always at index 0).
/// The tree is a trie over choice sequences: every non-root node is
/// reachable through exactly one `(parent, choice)` entry.
pub struct Tree<A> {
    arena: Arena<Node<A>>,
}

impl<A: Ord + Clone> Tree<A> {
    /// Create a tree with a single zero-initialized root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let _ = arena.allocate(Node::new());
        Tree { arena }
    }

    /// Return the root node id.
    pub fn root(&self) -> NodeId {
        NodeId::from(0)
    }

    /// Return how many nodes have been materialized.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Borrow a node by id.
    pub fn node(&self, node_id: NodeId) -> Result<&Node<A>, TreeError> {
        self.arena
            .get(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Result<&mut Node<A>, TreeError> {
        self.arena
            .get_mut(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    /// Borrow the root node.
    pub fn root_node(&self) -> Result<&Node<A>, TreeError> {
        self.node(self.root())
    }

    /// Iterate every materialized node in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<A>)> + '_ {
        self.arena
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from(i), node))
    }

    /// Look up the child of `parent` reached by `choice` without creating it.
    pub fn child(&self, parent: NodeId, choice: &A) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(parent)?.child(choice))
    }

    /// Return the child of `parent` reached by `choice`, creating a
    /// zero-initialized node on first access.
    pub fn child_or_insert(&mut self, parent: NodeId, choice: &A) -> Result<NodeId, TreeError> {
        if let Some(existing) = self.node(parent)?.child(choice) {
            return Ok(existing);
        }

        let child = self.arena.allocate(Node::new());
        self.node_mut(parent)?.insert_child(choice.clone(), child);
        Ok(child)
    }

    /// Record one finished episode on every node of `path`.
    pub(crate) fn backpropagate(&mut self, path: &[NodeId], outcome: f64) -> Result<(), TreeError> {
        for node_id in path {
            self.node_mut(*node_id)?.record(outcome);
        }
        Ok(())
    }

    /// Pick the root choice with the highest visit count.
    pub fn best_root_choice_by_visits(&self) -> Result<Option<A>, TreeError> {
        Ok(self.best_child_by(self.root_node()?, |node| node.visits() as f64))
    }

    /// Pick the root choice with the highest mean outcome among visited children.
    pub fn best_root_choice_by_value(&self) -> Result<Option<A>, TreeError> {
        Ok(self.best_child_by(self.root_node()?, |node| {
            node.mean().unwrap_or(f64::NEG_INFINITY)
        }))
    }

    /// Follow the most visited child from the root until no child has
    /// been visited, returning the choices taken.
    pub fn principal_line(&self) -> Result<Vec<A>, TreeError> {
        let mut line = Vec::new();
        let mut current = self.root_node()?;

        while let Some(choice) = self.best_child_by(current, |node| node.visits() as f64) {
            let next = match current.child(&choice) {
                Some(child_id) => self.node(child_id)?,
                None => break,
            };
            if next.is_unvisited() {
                break;
            }
            line.push(choice);
            current = next;
        }

        Ok(line)
    }

    /// Highest-scoring child of `node`; ties go to the earlier choice in key order.
    fn best_child_by<F>(&self, node: &Node<A>, score: F) -> Option<A>
    where
        F: Fn(&Node<A>) -> f64,
    {
        let mut best: Option<(&A, f64)> = None;

        for (choice, child_id) in node.children() {
            let Some(child) = self.arena.get(child_id) else {
                continue;
            };
            let candidate = score(child);
            best = match best {
                Some((_, best_score)) if candidate > best_score => Some((choice, candidate)),
                Some(kept) => Some(kept),
                None => Some((choice, candidate)),
            };
        }

        best.map(|(choice, _)| choice.clone())
    }
}

impl<A: Ord + Clone> Default for Tree<A> {
    fn default() -> Self {
        Tree::new()
    }
}
