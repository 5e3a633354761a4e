/// UCB1 score of a child given its parent's visit count.
///
/// Unvisited children score `+inf`, so every legal choice is tried once
/// before the rule starts discriminating. Otherwise the score is
/// `mean + c * sqrt(ln(N) / n)`. A non-positive `exploration` drops the
/// bonus term and the rule becomes greedy on the sample mean.
///
/// `parent_visits` must be at least 1 whenever `child_visits` is non-zero,
/// which holds because a child can only be visited through its parent.
pub fn ucb1(parent_visits: u64, child_visits: u64, child_value: f64, exploration: f64) -> f64 {
    if child_visits == 0 {
        return f64::INFINITY;
    }

    debug_assert!(parent_visits > 0, "ucb1 evaluated under an unvisited parent");

    let n = child_visits as f64;
    let exploitation = child_value / n;
    if exploration <= 0.0 {
        return exploitation;
    }

    let exploration_bonus = f64::sqrt(f64::ln(parent_visits as f64) / n);
    exploitation + exploration * exploration_bonus
}

/// Index of the highest score, keeping the earliest candidate on ties.
pub(crate) fn argmax_first(scores: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, score) in scores.into_iter().enumerate() {
        best = match best {
            Some((_, best_score)) if score > best_score => Some((i, score)),
            Some(kept) => Some(kept),
            None => Some((i, score)),
        };
    }

    best.map(|(i, _)| i)
}
