pub mod agent;
pub mod config;
pub mod controller;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use config::{GameConfig, Mode};
pub use controller::{GameController, GameSnapshot, Status};
pub use error::{GameError, GameResult};
pub use orchestrator::Orchestrator;
