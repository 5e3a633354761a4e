use thiserror::Error;
use ucbtree_core::TreeError;

#[derive(Debug, Error)]
/// Error type for track loading, validation, and search runs.
pub enum TrackError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("track must contain at least one position")]
    EmptyTrack,

    #[error("track must allow at least one move")]
    NoMoves,

    #[error("move lengths must be positive")]
    ZeroMove,

    #[error("duplicate move length {jump}")]
    DuplicateMove { jump: usize },

    #[error("coin at position {index} is not finite: {value}")]
    InvalidCoin { index: usize, value: f64 },

    #[error("invalid coin range [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("track spec needs either `coins` or `generate`")]
    MissingCoins,

    #[error("track spec declares both `coins` and `generate`")]
    ConflictingCoins,

    #[error("search failed: {0}")]
    Search(#[from] TreeError),
}
