// Knight race engine: board model, move generation, evaluation and minimax search
pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, EvalCtx, Grid, Layout, Move, Player, Players, Side, Square};
pub use error::{EngineError, Result};
