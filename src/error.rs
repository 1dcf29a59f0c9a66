use std::path::PathBuf;

use thiserror::Error;

use crate::game::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("deck exhausted while dealing to the {side}")]
    DeckExhausted { side: Side },
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("round {round} aborted: {source}")]
    Round {
        round: u32,
        #[source]
        source: GameError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
}
