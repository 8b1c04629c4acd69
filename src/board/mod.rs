pub mod grid;
pub mod position;
pub mod types;

pub use grid::{Grid, Layout};
pub use position::Board;
pub use types::{EvalCtx, Move, Player, Players, Side, Square, BOARD_SIZE, PIECES_PER_SIDE};
