use tablestakes_ai::UnknownStrategy;
use tablestakes_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Engine error: {0}")]
    Game(#[from] GameError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),
    #[error("Cancelled after {hands_played} hands")]
    Cancelled { hands_played: usize },
    #[error("Invalid benchmark setup: {0}")]
    InvalidConfig(String),
}
