mod arena;
pub mod error;
pub mod ids;
pub mod mcts;
pub mod node;
pub mod process;
pub mod search_tree;
pub mod session;
mod stats;
pub mod ucb;

#[cfg(test)]
mod tests;
