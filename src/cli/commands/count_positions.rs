//! Count positions command - count action sequences up to a given depth.

use expendibots::game::position_counter::run_count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        run_count_positions(self.depth);
    }
}
