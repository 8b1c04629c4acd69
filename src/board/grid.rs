use std::fmt;
use std::str::FromStr;

use crate::board::types::{Side, Square, BOARD_SIZE};
use crate::error::{EngineError, Result};

pub const EMPTY_SYMBOL: char = '*';

/// 8x8 cell array held by value; `None` is an empty square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Option<Side>; BOARD_SIZE]; BOARD_SIZE],
}

/// The two mirrored starting layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// White on row 0, Black on row 7.
    WhiteTop,
    /// Black on row 0, White on row 7.
    BlackTop,
}

impl Layout {
    pub fn side_on_row0(self) -> Side {
        match self {
            Layout::WhiteTop => Side::White,
            Layout::BlackTop => Side::Black,
        }
    }

    pub fn grid(self) -> Grid {
        let top = self.side_on_row0();
        let mut g = Grid::empty();
        for col in 0..BOARD_SIZE {
            g.set(Square::new(0, col), Some(top));
            g.set(Square::new(BOARD_SIZE - 1, col), Some(top.opponent()));
        }
        g
    }
}

impl Grid {
    pub fn empty() -> Self { Self::default() }

    pub fn from_cells(cells: [[Option<Side>; BOARD_SIZE]; BOARD_SIZE]) -> Self { Self { cells } }

    /// Builds a grid from exactly 8 rows of 8 cells each.
    pub fn from_rows(rows: &[Vec<Option<Side>>]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::MalformedGrid(format!("expected {BOARD_SIZE} rows, got {}", rows.len())));
        }
        let mut g = Grid::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(EngineError::MalformedGrid(format!("row {r} has {} cells, expected {BOARD_SIZE}", row.len())));
            }
            g.cells[r].copy_from_slice(row);
        }
        Ok(g)
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Side> { self.cells[sq.row()][sq.col()] }

    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<Side>) { self.cells[sq.row()][sq.col()] = cell; }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().flatten().filter(|c| **c == Some(side)).count()
    }

    /// True if `side` has a piece anywhere on `row`.
    pub fn row_contains(&self, row: usize, side: Side) -> bool {
        self.cells[row].contains(&Some(side))
    }
}

impl FromStr for Grid {
    type Err = EngineError;

    /// Eight non-empty lines of `W`, `B` or `*`; spaces are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        for (r, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(BOARD_SIZE);
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                if c == EMPTY_SYMBOL {
                    row.push(None);
                } else if let Some(side) = Side::from_symbol(c) {
                    row.push(Some(side));
                } else {
                    return Err(EngineError::MalformedGrid(format!("unknown symbol {c:?} on row {r}")));
                }
            }
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.map_or(EMPTY_SYMBOL, Side::symbol)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
