use std::collections::HashSet;

use rand::Rng;

use crate::TrackError;

#[derive(Debug, Clone, PartialEq)]
/// A line of positions holding coins and the jump lengths a player may take.
///
/// The player starts just before position 0. Jumping `k` advances `k`
/// positions; landing inside the track collects that coin, landing at or past
/// the end finishes the game.
pub struct Track {
    coins: Vec<f64>,
    moves: Vec<usize>,
}

impl Track {
    /// Validate and build a track from explicit coin values.
    pub fn new(coins: Vec<f64>, moves: Vec<usize>) -> Result<Self, TrackError> {
        if coins.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        if let Some((index, value)) = coins.iter().copied().enumerate().find(|(_, c)| !c.is_finite())
        {
            return Err(TrackError::InvalidCoin { index, value });
        }
        validate_moves(&moves)?;

        Ok(Track { coins, moves })
    }

    /// Build a track of `length` coins drawn uniformly from `[min, max)`.
    pub fn generate<R>(
        length: usize,
        min: f64,
        max: f64,
        moves: Vec<usize>,
        rng: &mut R,
    ) -> Result<Self, TrackError>
    where
        R: Rng + ?Sized,
    {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(TrackError::InvalidRange { min, max });
        }

        let coins = (0..length).map(|_| rng.gen_range(min..max)).collect();
        Track::new(coins, moves)
    }

    pub fn coins(&self) -> &[f64] {
        &self.coins
    }

    /// Legal jump lengths in declaration order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Sum of the positive coins, the largest swing a single game can see upward.
    pub fn exploration_constant(&self) -> f64 {
        self.coins.iter().filter(|coin| **coin > 0.0).sum()
    }

    /// Best achievable score.
    pub fn optimal_score(&self) -> f64 {
        self.backward_pass(|values| values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Expected score when every jump is picked uniformly at random.
    pub fn expected_random_score(&self) -> f64 {
        self.backward_pass(|values| values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Score of a complete line of jumps, or `None` if a jump is not a legal
    /// move or the line does not end exactly when the game does.
    pub fn play_line(&self, line: &[usize]) -> Option<f64> {
        let mut cursor = 0;
        let mut score = 0.0;

        for (i, jump) in line.iter().enumerate() {
            if !self.moves.contains(jump) {
                return None;
            }
            let landing = cursor + jump - 1;
            if landing >= self.coins.len() {
                return (i == line.len() - 1).then_some(score);
            }
            score += self.coins[landing];
            cursor = landing + 1;
        }

        None
    }

    /// Combine per-move continuation values from the end of the track back to
    /// the start. `values[c]` is the value of standing with `c` positions behind.
    fn backward_pass<F>(&self, combine: F) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        let len = self.coins.len();
        let mut values = vec![0.0; len + 1];
        let mut options = Vec::with_capacity(self.moves.len());

        for cursor in (0..=len).rev() {
            options.clear();
            for jump in &self.moves {
                let landing = cursor + jump - 1;
                options.push(if landing >= len {
                    0.0
                } else {
                    self.coins[landing] + values[landing + 1]
                });
            }
            values[cursor] = combine(&options);
        }

        values[0]
    }
}

fn validate_moves(moves: &[usize]) -> Result<(), TrackError> {
    if moves.is_empty() {
        return Err(TrackError::NoMoves);
    }

    let mut seen = HashSet::with_capacity(moves.len());
    for jump in moves {
        if *jump == 0 {
            return Err(TrackError::ZeroMove);
        }
        if !seen.insert(*jump) {
            return Err(TrackError::DuplicateMove { jump: *jump });
        }
    }
    Ok(())
}
