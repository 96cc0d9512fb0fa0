//! Typeracer - 2D Typing Racing Game
//!
//! Core simulation for a typing-racing game: the player types displayed
//! sentences to accelerate a car along a horizontal track, racing against
//! AI-controlled bot cars. This crate owns the race state machine, the bot
//! speed controller, the keystroke-to-progress mapping and the text task
//! pools. Rendering, menu layout and window setup belong to a front-end,
//! which drives the simulation with per-tick keyboard snapshots and elapsed
//! time and reads back positions, camera and typing progress for display.

pub mod config;
pub mod input;
pub mod race;
pub mod text;

// Re-export commonly used types
pub use config::GameConfig;
pub use race::bot::{BotController, BotDifficulty, BotMode};
pub use race::car::Car;
pub use race::screen::{GameScreen, MenuChoice, RaceState, RaceWinner, ScreenCommand};
pub use race::typing::PlayerInput;
pub use text::TextTask;
