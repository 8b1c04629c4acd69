use crate::board::{Board, Player};

/// Leaf count of the alternating move tree; `mover` plays first. Finished games are leaves.
pub fn perft(board: &Board, mover: &Player, other: &Player, depth: u32) -> u64 {
    if depth == 0 || board.is_game_over() { return 1; }
    board
        .legal_moves(mover)
        .iter()
        .map(|m| perft(&board.make_move(m), other, mover, depth - 1))
        .sum()
}

/// Root-split variant: each root move's subtree is counted on the rayon pool.
pub fn perft_parallel(board: &Board, mover: &Player, other: &Player, depth: u32) -> u64 {
    use rayon::prelude::*;
    if depth == 0 || board.is_game_over() { return 1; }
    board
        .legal_moves(mover)
        .par_iter()
        .map(|m| perft(&board.make_move(m), other, mover, depth - 1))
        .sum()
}
