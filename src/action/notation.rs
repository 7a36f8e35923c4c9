//! Parsing of the text form of actions, e.g. `MOVE 2 (0, 1) (0, 3)` or `BOOM (3, 3)`.

use std::convert::TryFrom;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::board::position::Position;
use crate::input_handler::InputError;

use super::Action;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*MOVE\s+(\d+)\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)\s*$")
        .expect("MOVE_RE regex should be valid")
});
static BOOM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*BOOM\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)\s*$")
        .expect("BOOM_RE regex should be valid")
});

impl FromStr for Action {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };

        if let Some(caps) = MOVE_RE.captures(input) {
            let count = caps[1].parse::<u8>().map_err(|_| invalid())?;
            let from = position(&caps, 2).ok_or_else(invalid)?;
            let to = position(&caps, 4).ok_or_else(invalid)?;
            return Ok(Action::move_tokens(count, from, to));
        }

        if let Some(caps) = BOOM_RE.captures(input) {
            let at = position(&caps, 1).ok_or_else(invalid)?;
            return Ok(Action::boom(at));
        }

        Err(invalid())
    }
}

/// Reads the `(q, r)` pair starting at capture group `first`.
fn position(caps: &Captures, first: usize) -> Option<Position> {
    let q = caps[first].parse::<i32>().ok()?;
    let r = caps[first + 1].parse::<i32>().ok()?;
    Position::try_from((q, r)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(q: u8, r: u8) -> Position {
        Position::new(q, r).unwrap()
    }

    #[test]
    fn test_parse_move() {
        let action: Action = "MOVE 2 (0, 1) (0, 3)".parse().unwrap();
        assert_eq!(action, Action::move_tokens(2, pos(0, 1), pos(0, 3)));
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_spacing() {
        let action: Action = "  move 1 (4,4)(5,4) ".parse().unwrap();
        assert_eq!(action, Action::move_tokens(1, pos(4, 4), pos(5, 4)));

        let action: Action = "boom(3,3)".parse().unwrap();
        assert_eq!(action, Action::boom(pos(3, 3)));
    }

    #[test]
    fn test_display_parses_back() {
        let action = Action::move_tokens(3, pos(7, 0), pos(7, 3));
        assert_eq!(action.to_string(), "MOVE 3 (7, 0) (7, 3)");
        assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        assert_eq!(Action::boom(pos(6, 7)).to_string(), "BOOM (6, 7)");
    }

    #[test]
    fn test_rejects_off_board_and_garbage() {
        assert!("BOOM (8, 0)".parse::<Action>().is_err());
        assert!("MOVE 1 (0, 0)".parse::<Action>().is_err());
        assert!("e2e4".parse::<Action>().is_err());
    }
}
