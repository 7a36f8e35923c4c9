//! Action input parsing for human players.

use std::io::BufRead;

use thiserror::Error;

use crate::action::Action;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("player left the game")]
    UserExit,
}

/// Reads one action from `reader`. An exhausted reader or one of `q`, `quit`
/// or `exit` ends the game.
pub fn parse_action_input<R: BufRead>(reader: &mut R) -> Result<Action, InputError> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    let raw = input.trim();
    if read == 0 {
        return Err(InputError::UserExit);
    }

    match raw.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Err(InputError::UserExit),
        _ => raw.parse(),
    }
}
