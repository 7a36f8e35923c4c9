pub mod action;
pub mod alpha_beta_searcher;
pub mod board;
pub mod boom_search;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod prelude;
