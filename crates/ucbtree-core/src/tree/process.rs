/// A host decision process that can be driven by [`Tree::play_episode`].
///
/// The process owns its own state. The engine only asks which choices are
/// legal, hands one back, and reads the outcome once no choices remain.
///
/// [`Tree::play_episode`]: crate::Tree::play_episode
pub trait DecisionProcess {
    type Choice: Ord + Clone;

    /// Choices legal in the current state, in a stable order.
    /// An empty list marks the state as terminal.
    fn legal_choices(&self) -> Vec<Self::Choice>;

    /// Advance the state by one choice taken from `legal_choices`.
    fn apply(&mut self, choice: &Self::Choice);

    /// Scalar value of the episode, read once the state is terminal.
    fn outcome(&self) -> f64;
}
