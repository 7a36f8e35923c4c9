use std::fmt;

use super::position::Position;
use super::GameState;

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let white = self.white_stacks();
        let black = self.black_stacks();

        for r in (0..8).rev() {
            write!(f, "{} |", r)?;
            for q in 0..8 {
                let position = Position::from_index(r * 8 + q);
                match (white.get(position), black.get(position)) {
                    (Some(count), _) => write!(f, " W{:<2}", count)?,
                    (_, Some(count)) => write!(f, " B{:<2}", count)?,
                    _ => write!(f, " .  ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  +{}", "-".repeat(32))?;
        write!(f, "   ")?;
        for q in 0..8 {
            write!(f, " {:<3}", q)?;
        }
        writeln!(f)?;
        write!(f, "{} to act", self.active_side())
    }
}

/// Builds a `GameState` from an 8x8 diagram, top row first (row 7).
///
/// Each cell is `.` for an empty square, or `W<n>` / `B<n>` for a white or
/// black stack of `n` tokens (`W` / `B` alone mean a single token).
///
/// ```ignore
/// let state = boom_position! { Side::White;
///     . . . . . . . .
///     . . . . . . . .
///     . . . . . . . .
///     . . . B1 . . . .
///     . . . B2 . . . .
///     . . . W . . . .
///     . . . . . . . .
///     . . . . . . . .
/// };
/// ```
#[macro_export]
macro_rules! boom_position {
    ($active:expr; $($cell:tt)*) => {{
        let cells: Vec<&str> = vec![$(stringify!($cell)),*];
        // Ensure we have exactly 64 squares
        assert_eq!(cells.len(), 64, "Invalid number of squares. Expected 64, got {}", cells.len());
        let mut white = $crate::board::stack_map::StackMap::new();
        let mut black = $crate::board::stack_map::StackMap::new();
        for (i, cell) in cells.iter().enumerate() {
            if *cell == "." {
                continue;
            }
            let (owner, count) = cell.split_at(1);
            let count: u8 = if count.is_empty() {
                1
            } else {
                count.parse().expect("Invalid stack size in boom position")
            };
            // The diagram is drawn with row 7 at the top, so flip the row back.
            let row = 7 - i / 8;
            let column = i % 8;
            let position = $crate::board::position::Position::from_index(8 * row + column);
            let stacks = match owner {
                "W" => &mut white,
                "B" => &mut black,
                _ => panic!("Invalid character in boom position"),
            };
            stacks
                .add(position, count)
                .expect("Invalid stack size in boom position");
        }
        $crate::board::GameState::from_layout($active, white, black)
            .expect("Overlapping stacks in boom position")
    }};
}
