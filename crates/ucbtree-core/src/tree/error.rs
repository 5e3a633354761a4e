use thiserror::Error;

use crate::tree::ids::NodeId;

/// Error type for tree access and session misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Attempted to access a node id that does not exist in the arena.
    #[error("missing node with id {}", .node_id.index())]
    MissingNode { node_id: NodeId },

    /// `choose` was called with no legal choices. The host should have
    /// ended the episode with `terminate` instead.
    #[error("choose called with an empty choice set ({})", describe_position(.node_id))]
    EmptyChoices { node_id: Option<NodeId> },
}

fn describe_position(node_id: &Option<NodeId>) -> String {
    match node_id {
        Some(node_id) => format!("in tree at node {}", node_id.index()),
        None => "during rollout".to_string(),
    }
}
