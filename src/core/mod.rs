//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod game_state;
pub mod scheduler;
pub mod session;
pub mod types;

pub use config::GameConfig;
pub use game_state::{ActionOutcome, GameState, TickResult};
pub use scheduler::{Scheduler, TimerEvent};
pub use session::Session;
pub use types::{collision, Bird, Bounds, Pipe, PipeKind, RoundStatus};
