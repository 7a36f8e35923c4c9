//! Generic alpha-beta search for two-player zero-sum games with immutable states.
//!
//! The searcher knows nothing about the game itself. A game plugs in by
//! implementing [`SearchState`] for its state type and [`Evaluator`] for its
//! heuristic.

mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use search::{alpha_beta_search, SearchContext, SearchError, DEFAULT_SEARCH_DEPTH};
pub use traits::{Evaluator, SearchState};
