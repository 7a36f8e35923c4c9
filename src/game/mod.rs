pub mod agent;
pub mod game_loop;
pub mod human_player;
pub mod player;
pub mod position_counter;
pub mod random_player;
pub mod renderer;
