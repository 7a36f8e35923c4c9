//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// A position in a two-player zero-sum game, seen from the side about to act.
///
/// States are values: producing a successor never modifies `self`, so a
/// single state can be shared by sibling branches and across threads.
pub trait SearchState: Clone + Send + Sync {
    type Action: Clone + PartialEq + Debug + Send + Sync;
    type ActionList: AsRef<[Self::Action]>;
    type Error: Debug;

    /// All actions available to the side to act, in a stable order.
    fn legal_actions(&self) -> Self::ActionList;

    /// The state after the side to act plays `action`. The returned state is
    /// seen from the other side.
    fn successor(&self, action: &Self::Action) -> Result<Self, Self::Error>;

    /// The same position with the other side to act. Leaves reached on the
    /// opponent's turn are scored through this, so evaluators whose terms are
    /// not mirror images for both sides still score the root side's view.
    fn perspective_swapped(&self) -> Self;

    /// The final score from the side to act's perspective if the game is
    /// over, `None` otherwise. `ply` is the distance from the search root, so
    /// implementations can prefer quicker wins and slower losses.
    fn terminal_value(&self, ply: u8) -> Option<f64>;
}

/// Scores non-terminal positions. Higher scores favor the side to act.
pub trait Evaluator<S: SearchState>: Clone + Send + Sync {
    fn score(&self, state: &S) -> f64;
}
