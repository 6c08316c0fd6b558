pub mod board;
pub mod chains;
pub mod error;
pub mod game;
pub mod grid;
pub mod stone;
pub mod territory;

pub use board::Board;
pub use error::IllegalMove;
pub use game::{Captures, Game, GameState};
pub use grid::Grid;
pub use stone::Stone;
