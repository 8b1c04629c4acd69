// Position index and knight move generation. Both are recomputed per grid.
use crate::board::{Grid, Move, Player, Side, Square, BOARD_SIZE};

/// Knight offsets in generation order.
pub const KNIGHT_STEPS: [(i32, i32); 8] = [
    (1, 2), (-1, 2), (1, -2), (-1, -2),
    (2, 1), (-2, 1), (2, -1), (-2, -1),
];

/// Squares held by `side`, row-major.
pub fn occupied_by(grid: &Grid, side: Side) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            if grid.get(sq) == Some(side) { out.push(sq); }
        }
    }
    out
}

/// Every legal move for `player`: forward onto empty squares, any direction onto an opponent.
pub fn legal_moves(grid: &Grid, player: &Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    for from in occupied_by(grid, player.side) {
        push_moves_from(grid, player, from, &mut moves);
    }
    moves
}

/// Legal moves of the piece on `from` only. Empty if `from` is not the player's.
pub fn legal_moves_from(grid: &Grid, player: &Player, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    if grid.get(from) == Some(player.side) {
        push_moves_from(grid, player, from, &mut moves);
    }
    moves
}

fn push_moves_from(grid: &Grid, player: &Player, from: Square, out: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_STEPS {
        let Some(to) = from.offset(dr, dc) else { continue };
        match grid.get(to) {
            Some(s) if s == player.side => continue,
            Some(_) => {}
            None => {
                if !player.advances(from.row(), to.row()) { continue; }
            }
        }
        out.push(Move::new(*player, from, to));
    }
}

/// Destination holds an opponent piece.
#[inline]
pub fn is_capture(grid: &Grid, mv: &Move) -> bool {
    grid.get(mv.to) == Some(mv.player.opponent_side())
}

/// Number of the player's legal moves that land on an opponent.
pub fn capture_count(grid: &Grid, player: &Player) -> usize {
    legal_moves(grid, player).iter().filter(|m| is_capture(grid, m)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;

    #[test]
    fn occupied_by_is_row_major() {
        let g = Layout::WhiteTop.grid();
        let sqs = occupied_by(&g, Side::White);
        assert_eq!(sqs.len(), 8);
        assert_eq!(sqs[0], Square::new(0, 0));
        assert_eq!(sqs[7], Square::new(0, 7));
        assert!(occupied_by(&Grid::empty(), Side::Black).is_empty());
    }

    #[test]
    fn empty_side_has_no_moves() {
        let p = Player::new(Side::White, 0, true);
        assert!(legal_moves(&Grid::empty(), &p).is_empty());
    }

    #[test]
    fn moves_from_foreign_square_are_empty() {
        let g = Layout::WhiteTop.grid();
        let white = Player::new(Side::White, 0, true);
        assert!(legal_moves_from(&g, &white, Square::new(7, 0)).is_empty());
        assert_eq!(legal_moves_from(&g, &white, Square::new(0, 0)).len(), 2);
    }
}
