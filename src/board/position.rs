use std::fmt;

use crate::board::grid::{Grid, Layout};
use crate::board::types::{EvalCtx, Move, Player, Players, Side, Square, BOARD_SIZE};
use crate::error::{EngineError, Result};
use crate::movegen;
use crate::search::eval;

/// Immutable game position: grid plus the two players. `Copy`, so every ply is a fresh value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
    players: Players,
}

impl Board {
    pub fn new(grid: Grid, players: Players) -> Self { Self { grid, players } }

    pub fn start(layout: Layout, players: Players) -> Result<Self> {
        let top = layout.side_on_row0();
        if players.get(top).home_row != 0 {
            return Err(EngineError::InvalidPlayers(format!("{top} starts on row 0 in this layout")));
        }
        Ok(Self::new(layout.grid(), players))
    }

    pub fn from_text(text: &str, players: Players) -> Result<Self> {
        Ok(Self::new(text.parse()?, players))
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn players(&self) -> Players { self.players }
    pub fn player(&self, side: Side) -> Player { self.players.get(side) }

    pub fn occupied_by(&self, side: Side) -> Vec<Square> { movegen::occupied_by(&self.grid, side) }

    pub fn legal_moves(&self, player: &Player) -> Vec<Move> { movegen::legal_moves(&self.grid, player) }

    /// Destinations available to the piece on `from`.
    pub fn legal_targets(&self, player: &Player, from: Square) -> Vec<Square> {
        movegen::legal_moves_from(&self.grid, player, from).into_iter().map(|m| m.to).collect()
    }

    pub fn is_capture(&self, mv: &Move) -> bool { movegen::is_capture(&self.grid, mv) }

    /// Unchecked: clears `from`, places the mover on `to`. Callers pass legal moves only.
    pub fn make_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        next.grid.set(mv.from, None);
        next.grid.set(mv.to, Some(mv.player.side));
        next
    }

    /// Legal for the side as registered on this board. The computer flag is not compared.
    pub fn is_legal(&self, mv: &Move) -> bool {
        mv.player.home_row == self.player(mv.player.side).home_row && self.legal_moves(&mv.player).contains(mv)
    }

    /// Checked variant of `make_move`.
    pub fn apply_move(&self, mv: &Move) -> Result<Board> {
        if !self.is_legal(mv) {
            return Err(EngineError::IllegalMove(*mv));
        }
        Ok(self.make_move(mv))
    }

    /// Resolves `"rc rc"` or `"rcrc"` into one of `player`'s legal moves.
    pub fn parse_move(&self, player: &Player, text: &str) -> Result<Move> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(EngineError::BadNotation { text: text.to_string() });
        }
        let from: Square = compact[..2].parse()?;
        let to: Square = compact[2..].parse()?;
        let mv = Move::new(*player, from, to);
        if self.is_legal(&mv) { Ok(mv) } else { Err(EngineError::IllegalMove(mv)) }
    }

    /// `player` has a piece on its finish row.
    pub fn has_finished(&self, player: &Player) -> bool {
        self.grid.row_contains(player.finish_row(), player.side)
    }

    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|p| self.has_finished(&p))
    }

    /// First player (humans checked first) with a piece on its finish row.
    pub fn winner(&self) -> Option<Player> {
        self.players.iter().find(|p| self.has_finished(p))
    }

    pub fn evaluate(&self, player: &Player, ctx: &EvalCtx) -> f64 { eval::score(self, player, ctx) }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE { write!(f, "{col}")?; }
        writeln!(f)?;
        for (row, line) in self.grid.to_string().lines().enumerate() {
            writeln!(f, "{row} {line}")?;
        }
        Ok(())
    }
}
