//! Classic single-screen Snake.
//!
//! [`game::GameSession`] is the whole simulation: it owns the snake, the food
//! and the score, advances once per [`game::GameSession::tick`] and reacts to
//! [`input::GameInput`] events. Everything else in the crate is the terminal
//! shell around it.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod sound;
pub mod terminal_runtime;
pub mod ui;
