mod error;
mod game;
mod io;
mod search;
mod spec;
mod track;

pub use error::TrackError;
pub use game::CoinGame;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use search::{TrackRun, search, search_with};
pub use spec::{GenerateSpec, TrackSpec};
pub use track::Track;
