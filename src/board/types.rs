use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const BOARD_SIZE: usize = 8;
pub const PIECES_PER_SIDE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Grid symbol used by the text format.
    pub fn symbol(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'W' | 'w' => Some(Side::White),
            'B' | 'b' => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// A board coordinate. Always in `0..8` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics on out-of-range coordinates; callers holding untrusted input use `try_new`.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square ({row},{col}) off the board");
        Self { row: row as u8, col: col as u8 }
    }

    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let n = BOARD_SIZE as i32;
        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn row(self) -> usize { self.row as usize }
    pub fn col(self) -> usize { self.col as usize }

    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || EngineError::BadNotation { text: s.to_string() };
        let b = s.trim().as_bytes();
        if b.len() != 2 { return Err(bad()); }
        let digit = |c: u8| if c.is_ascii_digit() { Some((c - b'0') as i32) } else { None };
        let (r, c) = (digit(b[0]).ok_or_else(bad)?, digit(b[1]).ok_or_else(bad)?);
        Square::try_new(r, c).ok_or_else(bad)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub home_row: usize,
    pub is_computer: bool,
}

impl Player {
    pub fn new(side: Side, home_row: usize, is_computer: bool) -> Self {
        Self { side, home_row, is_computer }
    }

    pub fn finish_row(&self) -> usize {
        if self.home_row == 0 { BOARD_SIZE - 1 } else { 0 }
    }

    pub fn opponent_side(&self) -> Side { self.side.opponent() }

    /// True if moving from `from_row` to `to_row` heads toward the finish row.
    pub fn advances(&self, from_row: usize, to_row: usize) -> bool {
        if self.finish_row() == BOARD_SIZE - 1 { to_row > from_row } else { to_row < from_row }
    }

    /// Same player with the computer flag set, for searching from this side's perspective.
    pub fn as_computer(self) -> Self { Self { is_computer: true, ..self } }

    pub fn as_human(self) -> Self { Self { is_computer: false, ..self } }
}

/// The two participants, one per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Players {
    white: Player,
    black: Player,
}

impl Players {
    pub fn new(a: Player, b: Player) -> Result<Self> {
        if a.side == b.side {
            return Err(EngineError::InvalidPlayers(format!("both players are {}", a.side)));
        }
        for p in [a, b] {
            if p.home_row != 0 && p.home_row != BOARD_SIZE - 1 {
                return Err(EngineError::InvalidPlayers(format!("{} home row {} is not 0 or 7", p.side, p.home_row)));
            }
        }
        if a.home_row == b.home_row {
            return Err(EngineError::InvalidPlayers(format!("both players start on row {}", a.home_row)));
        }
        let (white, black) = if a.side == Side::White { (a, b) } else { (b, a) };
        Ok(Self { white, black })
    }

    pub fn get(&self, side: Side) -> Player {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    pub fn opponent_of(&self, player: &Player) -> Player { self.get(player.opponent_side()) }

    /// Humans first, then computers; White before Black within a group.
    pub fn iter(&self) -> impl Iterator<Item = Player> {
        let mut order = [self.white, self.black];
        order.sort_by_key(|p| p.is_computer);
        order.into_iter()
    }

    pub fn computer(&self) -> Option<Player> { self.iter().find(|p| p.is_computer) }

    pub fn human(&self) -> Option<Player> { self.iter().find(|p| !p.is_computer) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(player: Player, from: Square, to: Square) -> Self { Self { player, from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Whose turn follows the scored position, and the player compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalCtx {
    pub next_to_move: Player,
    pub other: Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_row_is_opposite_home() {
        assert_eq!(Player::new(Side::White, 0, true).finish_row(), 7);
        assert_eq!(Player::new(Side::Black, 7, false).finish_row(), 0);
    }

    #[test]
    fn square_parses_two_digits() {
        assert_eq!("01".parse::<Square>().unwrap(), Square::new(0, 1));
        assert_eq!(" 76".parse::<Square>().unwrap(), Square::new(7, 6));
        assert!("8 0".parse::<Square>().is_err());
        assert!("80".parse::<Square>().is_err());
        assert!("a1".parse::<Square>().is_err());
    }

    #[test]
    fn players_reject_same_side_or_row() {
        let w = Player::new(Side::White, 0, true);
        assert!(Players::new(w, Player::new(Side::White, 7, false)).is_err());
        assert!(Players::new(w, Player::new(Side::Black, 0, false)).is_err());
        assert!(Players::new(w, Player::new(Side::Black, 3, false)).is_err());
        let ps = Players::new(Player::new(Side::Black, 7, false), w).unwrap();
        assert_eq!(ps.get(Side::White), w);
        assert_eq!(ps.human().map(|p| p.side), Some(Side::Black));
    }
}
