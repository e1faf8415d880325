//! Snake Chase - a terminal arcade snake game with an AI pursuer
//!
//! This library provides:
//! - Core simulation: grid, snakes, food, mode state machine (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering over read-only snapshots (render module)
//! - In-process session stats (metrics module)
//! - The terminal game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
