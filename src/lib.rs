//! Arcade Snake - a terminal Snake game
//!
//! This library provides:
//! - Core game logic (game module)
//! - TUI rendering (render module)
//! - Keyboard input decoding (input module)
//! - Session stats (metrics module)
//! - The interactive app loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
