//! Grid snake simulation.
//!
//! [`SnakeGame`] owns the whole state of one game and advances it with
//! [`SnakeGame::tick`]; the caller decides when ticks happen, feeds direction
//! changes through [`SnakeGame::submit`] and draws the result through the
//! [`Canvas`] and [`Scoreboard`] traits.

pub mod board;
pub mod chain;
pub mod config;
pub mod coordinates;
pub mod directions;
pub mod food;
pub mod game;
pub mod input;
pub mod occupancy;

pub use board::Board;
pub use chain::{Piece, PieceChain, Role, Segment};
pub use config::{ConfigError, GameConfig, Pacing};
pub use coordinates::{Coordinates, Direction, CELL_SIZE};
pub use directions::DirectionQueue;
pub use food::{place_food, FoodError};
pub use game::{Canvas, GameOverReason, Phase, Scoreboard, SnakeGame, Status, TickOutcome};
pub use input::{KeyDecoder, KeyEvent};
pub use occupancy::OccupancySet;
