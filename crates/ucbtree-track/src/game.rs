use ucbtree_core::DecisionProcess;

use crate::Track;

#[derive(Debug, Clone)]
/// One playthrough of a [`Track`].
pub struct CoinGame<'t> {
    track: &'t Track,
    /// Number of positions already behind the player.
    cursor: usize,
    score: f64,
    finished: bool,
}

impl<'t> CoinGame<'t> {
    /// Start a game just before the first position.
    pub fn new(track: &'t Track) -> Self {
        CoinGame {
            track,
            cursor: 0,
            score: 0.0,
            finished: false,
        }
    }

    /// Coins collected so far.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Index of the last position landed on, `None` before the first jump
    /// or after jumping off the end.
    pub fn position(&self) -> Option<usize> {
        if self.finished {
            None
        } else {
            self.cursor.checked_sub(1)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Jump `length` positions ahead.
    pub fn jump(&mut self, length: usize) {
        if self.finished || length == 0 {
            return;
        }

        let landing = self.cursor + length - 1;
        match self.track.coins().get(landing) {
            Some(coin) => {
                self.score += coin;
                self.cursor = landing + 1;
            }
            None => self.finished = true,
        }
    }
}

impl DecisionProcess for CoinGame<'_> {
    type Choice = usize;

    fn legal_choices(&self) -> Vec<usize> {
        if self.finished {
            Vec::new()
        } else {
            self.track.moves().to_vec()
        }
    }

    fn apply(&mut self, choice: &usize) {
        self.jump(*choice);
    }

    fn outcome(&self) -> f64 {
        self.score
    }
}
