mod input;

pub use input::{parse_action_input, InputError};
