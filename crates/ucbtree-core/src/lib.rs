mod tree;

pub use tree::error::TreeError;
pub use tree::ids::NodeId;
pub use tree::mcts::{EpisodeMetrics, RunMetrics, SearchConfig, SearchConfigError};
pub use tree::node::Node;
pub use tree::process::DecisionProcess;
pub use tree::search_tree::Tree;
pub use tree::session::{Position, Session};
pub use tree::ucb::ucb1;
