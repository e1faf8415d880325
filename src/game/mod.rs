//! Core simulation module for the snake chase game
//!
//! Everything in here is synchronous and I/O-free: the session owns all
//! entity state and advances it one tick at a time. Rendering and input
//! only ever see `Command`s going in and `Snapshot`s coming out.

pub mod command;
pub mod config;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use command::{Command, Direction};
pub use config::GameConfig;
pub use food::{FoodSpawner, NoFreeCell};
pub use grid::{Grid, Position};
pub use session::{GameMode, GameSession, Snapshot};
pub use snake::{MoveError, PlayerSnake, PursuerSnake};
