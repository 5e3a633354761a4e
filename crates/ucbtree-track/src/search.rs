use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ucbtree_core::{RunMetrics, SearchConfig, Tree};

use crate::{CoinGame, Track, TrackError};

#[derive(Debug, Clone)]
/// Tree and metrics left behind by a search over one track.
pub struct TrackRun {
    pub tree: Tree<usize>,
    pub metrics: RunMetrics,
    pub exploration: f64,
}

impl TrackRun {
    /// Most visited line of jumps from the start.
    pub fn principal_line(&self) -> Result<Vec<usize>, TrackError> {
        Ok(self.tree.principal_line()?)
    }
}

/// Search `episodes` games on `track`, exploring with the track's own
/// exploration constant and a random source seeded from `seed`.
pub fn search(track: &Track, episodes: usize, seed: u64) -> Result<TrackRun, TrackError> {
    let config = SearchConfig {
        episodes,
        ..SearchConfig::default()
    }
    .with_exploration(track.exploration_constant());
    search_with(track, &config, seed)
}

/// Search with an explicit configuration.
pub fn search_with(
    track: &Track,
    config: &SearchConfig,
    seed: u64,
) -> Result<TrackRun, TrackError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tree = Tree::new();

    let metrics = tree.run(config, || CoinGame::new(track), &mut rng)?;
    debug!(
        "track search: {} positions, exploration {:.3}, last score {:?}",
        track.len(),
        config.exploration,
        metrics.last_outcome
    );

    Ok(TrackRun {
        tree,
        metrics,
        exploration: config.exploration,
    })
}
