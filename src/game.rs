use log::info;

use crate::board::{Board, Layout, Move, Player, Players, Side, Square, BOARD_SIZE};
use crate::error::{EngineError, Result};
use crate::search::{SearchParams, Searcher};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Player reached its finish row.
    Won(Player),
    /// Player is to move but has no legal move.
    NoMoves(Player),
}

/// Human-versus-computer game flow. The human always moves first.
pub struct Game {
    board: Board,
    human: Player,
    computer: Player,
    to_move: Side,
    params: SearchParams,
    history: Vec<Move>,
}

impl Game {
    /// The human starts on row 7, the computer on row 0.
    pub fn new(human_side: Side, params: SearchParams) -> Result<Self> {
        let human = Player::new(human_side, BOARD_SIZE - 1, false);
        let computer = Player::new(human_side.opponent(), 0, true);
        let layout = match computer.side {
            Side::White => Layout::WhiteTop,
            Side::Black => Layout::BlackTop,
        };
        let board = Board::start(layout, Players::new(human, computer)?)?;
        Ok(Self { board, human, computer, to_move: human_side, params, history: Vec::new() })
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn human(&self) -> Player { self.human }
    pub fn computer(&self) -> Player { self.computer }
    pub fn params(&self) -> SearchParams { self.params }
    pub fn history(&self) -> &[Move] { &self.history }

    pub fn to_move(&self) -> Player { self.board.player(self.to_move) }

    /// Where the human's piece on `from` may go; empty if it is not the human's piece.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.board.legal_targets(&self.human, from)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(p) = self.board.winner() {
            return GameStatus::Won(p);
        }
        let mover = self.to_move();
        if self.board.legal_moves(&mover).is_empty() {
            return GameStatus::NoMoves(mover);
        }
        GameStatus::InProgress
    }

    pub fn is_over(&self) -> bool { self.status() != GameStatus::InProgress }

    pub fn winner(&self) -> Option<Player> { self.board.winner() }

    /// Applies the human's move; rejected unless it is the human's turn and the move is legal.
    pub fn play_human(&mut self, mv: Move) -> Result<()> {
        if self.to_move != self.human.side || mv.player != self.human {
            return Err(EngineError::IllegalMove(mv));
        }
        self.commit(mv)
    }

    /// Parses `"rc rc"` for the human and plays it.
    pub fn play_human_text(&mut self, text: &str) -> Result<Move> {
        let mv = self.board.parse_move(&self.human, text)?;
        self.play_human(mv)?;
        Ok(mv)
    }

    /// Searches and plays the computer's move. `Ok(None)` when it has nothing to play.
    pub fn step_computer(&mut self) -> Result<Option<Move>> {
        let mut searcher = Searcher::default();
        let res = searcher.search_with_params(&self.board, &self.computer, &self.human, self.params);
        let Some(mv) = res.bestmove else {
            info!("computer ({}) has no legal move", self.computer.side);
            return Ok(None);
        };
        self.commit(mv)?;
        Ok(Some(mv))
    }

    /// Plays a move for whoever is on turn. Used by drivers that pick moves themselves.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move> {
        let mv = Move::new(self.to_move(), from, to);
        self.commit(mv)?;
        Ok(mv)
    }

    fn commit(&mut self, mv: Move) -> Result<()> {
        if mv.player.side != self.to_move || self.is_over() {
            return Err(EngineError::IllegalMove(mv));
        }
        self.board = self.board.apply_move(&mv)?;
        self.history.push(mv);
        self.to_move = self.to_move.opponent();
        Ok(())
    }
}
