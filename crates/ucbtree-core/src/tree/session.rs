use log::trace;
use rand::Rng;

use crate::tree::{
    error::TreeError,
    ids::NodeId,
    mcts::EpisodeMetrics,
    search_tree::Tree,
    ucb::{argmax_first, ucb1},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the session currently stands relative to the tracked tree.
pub enum Position {
    /// Still descending through nodes with statistics.
    InTree(NodeId),
    /// Stepped past the frontier; choices are uniform random and the tree is left alone.
    Rollout,
}

/// Drives one episode against a tree, one decision at a time.
///
/// The host calls [`Session::choose`] with the choices legal in its own
/// state and applies the returned choice, repeating until its state is
/// terminal, then reports the outcome through [`Session::terminate`].
/// `terminate` consumes the session, so a finished session cannot be reused.
///
/// While in the tree, each `choose` scores every candidate with UCB1
/// (creating missing children on the way) and descends into the winner.
/// The first time the session stands on a node that has never completed an
/// episode, it switches to rollout for the rest of the episode. This grows
/// the tracked tree by at most one visited node per episode.
pub struct Session<'a, A, R: ?Sized> {
    tree: &'a mut Tree<A>,
    rng: &'a mut R,
    exploration: f64,
    position: Position,
    path: Vec<NodeId>,
    rollout_steps: usize,
}

impl<'a, A, R> Session<'a, A, R>
where
    A: Ord + Clone,
    R: Rng + ?Sized,
{
    /// Start an episode at the root of `tree`.
    pub fn new(tree: &'a mut Tree<A>, exploration: f64, rng: &'a mut R) -> Self {
        let root = tree.root();
        Session {
            tree,
            rng,
            exploration,
            position: Position::InTree(root),
            path: vec![root],
            rollout_steps: 0,
        }
    }

    /// Pick one of `choices` for the host's current decision point.
    ///
    /// `choices` must be non-empty and free of duplicates; an empty set means
    /// the host is in a terminal state and should call `terminate` instead.
    /// Candidates are scored in slice order and the first best one wins ties.
    pub fn choose(&mut self, choices: &[A]) -> Result<A, TreeError> {
        if let Position::InTree(current) = self.position {
            if self.tree.node(current)?.is_unvisited() {
                trace!(
                    "entering rollout at node {} after {} in-tree steps",
                    current.index(),
                    self.depth()
                );
                self.position = Position::Rollout;
            }
        }

        match self.position {
            Position::Rollout => self.choose_uniform(choices),
            Position::InTree(current) => self.choose_ucb1(current, choices),
        }
    }

    /// Finish the episode and record `outcome` on every node of the path.
    pub fn terminate(self, outcome: f64) -> Result<EpisodeMetrics, TreeError> {
        self.tree.backpropagate(&self.path, outcome)?;

        let leaf = self.path.last().copied().unwrap_or_else(|| self.tree.root());
        trace!(
            "backpropagated outcome {outcome} over {} nodes (leaf {})",
            self.path.len(),
            leaf.index()
        );

        Ok(EpisodeMetrics {
            leaf,
            path_len: self.path.len(),
            rollout_steps: self.rollout_steps,
            outcome,
        })
    }

    /// Current position of the session.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_rollout(&self) -> bool {
        self.position == Position::Rollout
    }

    /// In-tree steps taken so far, not counting the root.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// Choices made after leaving the tree.
    pub fn rollout_steps(&self) -> usize {
        self.rollout_steps
    }

    /// Nodes that will receive the outcome, root first.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Read-only view of the tree being searched.
    pub fn tree(&self) -> &Tree<A> {
        &*self.tree
    }

    pub fn exploration(&self) -> f64 {
        self.exploration
    }

    fn choose_uniform(&mut self, choices: &[A]) -> Result<A, TreeError> {
        if choices.is_empty() {
            return Err(TreeError::EmptyChoices { node_id: None });
        }

        self.rollout_steps += 1;
        let index = self.rng.gen_range(0..choices.len());
        Ok(choices[index].clone())
    }

    fn choose_ucb1(&mut self, current: NodeId, choices: &[A]) -> Result<A, TreeError> {
        if choices.is_empty() {
            return Err(TreeError::EmptyChoices {
                node_id: Some(current),
            });
        }

        let parent_visits = self.tree.node(current)?.visits();

        // Every candidate gets a node, not only the one selected.
        let mut children = Vec::with_capacity(choices.len());
        for choice in choices {
            children.push(self.tree.child_or_insert(current, choice)?);
        }

        let mut scores = Vec::with_capacity(children.len());
        for child_id in &children {
            let child = self.tree.node(*child_id)?;
            scores.push(ucb1(
                parent_visits,
                child.visits(),
                child.value(),
                self.exploration,
            ));
        }

        let best = argmax_first(scores).ok_or(TreeError::EmptyChoices {
            node_id: Some(current),
        })?;

        let selected = children[best];
        self.path.push(selected);
        self.position = Position::InTree(selected);
        Ok(choices[best].clone())
    }
}

impl<A: Ord + Clone> Tree<A> {
    /// Open a session for one episode starting at the root.
    pub fn session<'a, R>(&'a mut self, exploration: f64, rng: &'a mut R) -> Session<'a, A, R>
    where
        R: Rng + ?Sized,
    {
        Session::new(self, exploration, rng)
    }
}
