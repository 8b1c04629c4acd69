use thiserror::Error;

use crate::board::Move;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Move is not in the mover's legal move set for this board.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    #[error("invalid players: {0}")]
    InvalidPlayers(String),

    #[error("bad move notation {text:?}: expected two squares like \"01 22\"")]
    BadNotation { text: String },
}
