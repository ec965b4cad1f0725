pub mod action;
pub mod display;
pub mod game;
pub mod game_loop;
pub mod input_source;
pub mod options;

pub use action::{ActionType, PlayerAction};
pub use display::GameDisplay;
pub use game::Game;
pub use game_loop::GameLoop;
pub use input_source::{ConditionalInput, EngineInput, HumanInput, InputSource};
pub use options::GameOptions;
