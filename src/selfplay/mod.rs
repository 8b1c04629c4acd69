use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Move, Side};
use crate::error::Result;
use crate::game::{Game, GameStatus};
use crate::search::{SearchParams, Searcher};

/// Who plays against the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Opponent {
    /// Uniform choice among legal moves.
    Random,
    /// A second searcher scoring from its own side.
    Engine { depth: u32 },
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub search: SearchParams,
    pub opponent: Opponent,
    pub seed: u64,
    /// Side the engine plays; `None` alternates starting with Black.
    pub engine_side: Option<Side>,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, search: SearchParams::default(), opponent: Opponent::Random, seed: 42, engine_side: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Finished(Side),
    NoMoves(Side),
    PlyLimit,
}

#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub engine_side: Side,
    pub moves: Vec<String>,
    pub outcome: Outcome,
    pub plies: usize,
}

impl GameRecord {
    /// Side credited with the game: the finisher, or the opponent of a stuck mover.
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Outcome::Finished(s) => Some(s),
            Outcome::NoMoves(s) => Some(s.opponent()),
            Outcome::PlyLimit => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub games: usize,
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub undecided: usize,
    pub avg_plies: usize,
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with(params, |_| {})
}

/// Like `generate_games`, calling `on_game` after each finished game.
pub fn generate_games_with<F: FnMut(&GameRecord)>(params: &SelfPlayParams, mut on_game: F) -> Result<Vec<GameRecord>> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let engine_side = params.engine_side.unwrap_or(if gi % 2 == 0 { Side::Black } else { Side::White });
        let record = play_one(params, engine_side, &mut rng)?;
        debug!("game {} engine {} -> {:?} in {} plies", gi, engine_side, record.outcome, record.plies);
        on_game(&record);
        games.push(record);
    }
    Ok(games)
}

fn play_one(params: &SelfPlayParams, engine_side: Side, rng: &mut SmallRng) -> Result<GameRecord> {
    // The engine takes the "computer" seat; the opponent drives the human seat.
    let mut game = Game::new(engine_side.opponent(), params.search)?;
    let outcome = loop {
        match game.status() {
            GameStatus::Won(p) => break Outcome::Finished(p.side),
            GameStatus::NoMoves(p) => break Outcome::NoMoves(p.side),
            GameStatus::InProgress => {}
        }
        if game.history().len() >= params.max_plies { break Outcome::PlyLimit; }
        if game.to_move().is_computer {
            game.step_computer()?;
        } else if let Some(mv) = opponent_move(&game, params.opponent, rng) {
            game.play(mv.from, mv.to)?;
        }
    };
    let moves = game.history().iter().map(|m| format!("{}{}", m.from, m.to)).collect();
    Ok(GameRecord { engine_side, moves, outcome, plies: game.history().len() })
}

fn opponent_move(game: &Game, opponent: Opponent, rng: &mut SmallRng) -> Option<Move> {
    let board = game.board();
    match opponent {
        Opponent::Random => {
            let moves = board.legal_moves(&game.human());
            if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
        }
        Opponent::Engine { depth } => {
            // Flip perspective so the opponent maximizes its own score.
            let me = game.human().as_computer();
            let them = game.computer().as_human();
            let params = SearchParams { depth, ..game.params() };
            Searcher::default().search_with_params(board, &me, &them, params).bestmove
        }
    }
}

pub fn summarize(games: &[GameRecord]) -> MatchSummary {
    let mut s = MatchSummary { games: games.len(), ..MatchSummary::default() };
    let mut total_plies = 0;
    for g in games {
        total_plies += g.plies;
        match g.winner() {
            Some(side) if side == g.engine_side => s.engine_wins += 1,
            Some(_) => s.opponent_wins += 1,
            None => s.undecided += 1,
        }
    }
    if !games.is_empty() { s.avg_plies = total_plies / games.len(); }
    s
}
