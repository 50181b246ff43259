//! Core game logic for Snake
//!
//! Everything in here is pure state and rules, with no I/O or rendering
//! dependencies: the grid geometry, the snake, apple placement and the
//! tick-by-tick engine.

pub mod config;
pub mod engine;
pub mod grid;
pub mod heading;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use grid::{Cell, Grid};
pub use heading::Heading;
pub use state::{CollisionKind, GamePhase, GameState, Snake};
