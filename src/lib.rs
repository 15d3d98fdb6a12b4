//! Grid Invaders: the simulation core of a single-screen arcade shooter.
//!
//! - `entities`: plain game data
//! - `compute`: pure per-tick state transitions
//! - `collision`: rectangle overlap
//! - `engine`: owns the state plus its injected RNG and clock
//! - `config` / `error`: validated playfield and startup configuration

pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, Playfield};
pub use engine::Engine;
pub use entities::{GameEvent, GameState, GameStatus, InputSnapshot};
pub use error::{AppError, ConfigError};
