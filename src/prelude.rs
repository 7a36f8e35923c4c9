//! Common types re-exported for convenience.

pub use crate::action::{Action, ActionList};
pub use crate::board::position::Position;
pub use crate::board::side::Side;
pub use crate::board::GameState;
pub use crate::evaluate::{EvaluationWeights, GameOutcome};
pub use crate::game::agent::{Agent, AgentConfig, AgentError};
pub use crate::game::player::Player;
