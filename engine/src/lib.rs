pub mod board;
pub mod bot_controller;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod minimax;
pub mod rng;
pub mod types;
pub mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{BotStrategy, calculate_move};
pub use error::{MoveError, PlaceError};
pub use game_state::Game;
pub use rng::GameRng;
pub use types::{Mark, Outcome, Position, SearchResult};
pub use win_detector::evaluate;
