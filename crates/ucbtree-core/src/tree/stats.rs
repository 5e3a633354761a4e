/// Stores the numbers backpropagation updates after every episode
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeStats {
    visits: u64,
    value: f64,
}

impl NodeStats {
    pub fn new() -> Self {
        NodeStats {
            visits: 0,
            value: 0.0,
        }
    }

    /// Number of completed episodes that passed through the node.
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Accumulated sum of outcomes, not an average.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Record one completed episode with its outcome.
    /// This is the only place visit counts grow.
    pub fn record(&mut self, outcome: f64) {
        self.visits += 1;
        self.value += outcome;
    }

    pub fn is_unvisited(&self) -> bool {
        self.visits == 0
    }

    /// Sample mean of the recorded outcomes, `None` before the first visit.
    pub fn mean(&self) -> Option<f64> {
        if self.is_unvisited() {
            None
        } else {
            Some(self.value / self.visits as f64)
        }
    }
}
