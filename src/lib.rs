pub mod ai;
pub mod board;
pub mod game;
pub mod input_handler;
