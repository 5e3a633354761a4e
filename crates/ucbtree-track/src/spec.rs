use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{Track, TrackError};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable track description used for YAML IO.
pub struct TrackSpec {
    /// Legal jump lengths, in the order choices are offered to the search.
    pub moves: Vec<usize>,
    /// Explicit coin values, one per position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins: Option<Vec<f64>>,
    /// Seeded random coins instead of explicit values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate: Option<GenerateSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Parameters for drawing coins uniformly from `[min, max)`.
pub struct GenerateSpec {
    pub length: usize,
    pub min: f64,
    pub max: f64,
    pub seed: u64,
}

impl TrackSpec {
    /// Build the track, drawing coins when `generate` is used.
    pub fn compile(&self) -> Result<Track, TrackError> {
        match (&self.coins, &self.generate) {
            (Some(_), Some(_)) => Err(TrackError::ConflictingCoins),
            (None, None) => Err(TrackError::MissingCoins),
            (Some(coins), None) => Track::new(coins.clone(), self.moves.clone()),
            (None, Some(generate)) => {
                let mut rng = ChaCha8Rng::seed_from_u64(generate.seed);
                Track::generate(
                    generate.length,
                    generate.min,
                    generate.max,
                    self.moves.clone(),
                    &mut rng,
                )
            }
        }
    }
}

impl From<&Track> for TrackSpec {
    fn from(track: &Track) -> Self {
        TrackSpec {
            moves: track.moves().to_vec(),
            coins: Some(track.coins().to_vec()),
            generate: None,
        }
    }
}
