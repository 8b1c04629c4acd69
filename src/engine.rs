//! Entry points for front ends (console, GUI, self-play).
//!
//! Thin functions over [`Board`] and the searcher so callers never need to know
//! which module owns which rule.

use crate::board::{Board, Move, Player};
use crate::error::Result;
use crate::search;

/// Computer's chosen move, `None` if it cannot move. `depth == 0` behaves like `depth == 1`.
pub fn best_move(board: &Board, computer: &Player, other: &Player, depth: u32) -> Option<Move> {
    search::best_move(board, computer, other, depth)
}

pub fn legal_moves(board: &Board, player: &Player) -> Vec<Move> {
    board.legal_moves(player)
}

/// Applies `mv` after checking it against the mover's legal moves.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board> {
    board.apply_move(mv)
}

/// True when `player` has a piece on its finish row.
pub fn is_game_over(board: &Board, player: &Player) -> bool {
    board.has_finished(player)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}
