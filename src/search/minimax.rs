use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::board::{Board, EvalCtx, Move, Player};

pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    /// Root candidates are scored on the rayon pool when > 1.
    pub threads: usize,
    /// Checked between root candidates only.
    pub movetime: Option<Duration>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, threads: 1, movetime: None }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    pub score: f64,
    pub nodes: u64,
    /// Deadline hit before every root move was scored.
    pub stopped: bool,
}

#[derive(Clone, Copy)]
struct Sides {
    computer: Player,
    human: Player,
}

impl Sides {
    // `maximizing` is the flag as received, before the per-node flip: true means the
    // computer just moved, so the human is next.
    fn ctx(&self, maximizing: bool) -> EvalCtx {
        EvalCtx {
            next_to_move: if maximizing { self.human } else { self.computer },
            other: self.human,
        }
    }
}

/// Full-width fixed-depth minimax, always scoring from the computer's side.
#[derive(Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
    deadline: Option<Instant>,
    threads: usize,
}

impl Searcher {
    pub fn search_depth(&mut self, board: &Board, computer: &Player, human: &Player, depth: u32) -> SearchResult {
        let sides = Sides { computer: *computer, human: *human };
        let moves = board.legal_moves(computer);
        if moves.is_empty() {
            return SearchResult { bestmove: None, score: board.evaluate(computer, &sides.ctx(false)), nodes: self.nodes, stopped: false };
        }
        let plies = depth.saturating_sub(1);
        if self.threads > 1 && moves.len() > 1 {
            return self.search_root_parallel(board, &sides, moves, plies);
        }

        let mut best: Option<(Move, f64)> = None;
        let mut stopped = false;
        for (i, m) in moves.iter().enumerate() {
            if i > 0 && self.deadline_passed() { stopped = true; break; }
            let child = board.make_move(m);
            let score = self.minimax(&child, &sides, plies, true);
            debug!("root {} -> {:.1}", m, score);
            if best.map_or(true, |(_, bs)| score > bs) { best = Some((*m, score)); }
        }
        let (bestmove, score) = best.map_or((None, f64::NEG_INFINITY), |(m, s)| (Some(m), s));
        SearchResult { bestmove, score, nodes: self.nodes, stopped }
    }

    fn search_root_parallel(&mut self, board: &Board, sides: &Sides, moves: Vec<Move>, plies: u32) -> SearchResult {
        let deadline = self.deadline;
        let results: Vec<Option<(f64, u64)>> = moves.par_iter().enumerate().map(|(i, m)| {
            if i > 0 && deadline.map_or(false, |dl| Instant::now() >= dl) { return None; }
            let child = board.make_move(m);
            let mut w = Searcher::default();
            let score = w.minimax(&child, sides, plies, true);
            Some((score, w.nodes))
        }).collect();

        // Reduce in generation order so ties resolve exactly as in the serial loop.
        let mut best: Option<(Move, f64)> = None;
        let mut stopped = false;
        for (m, r) in moves.iter().zip(results) {
            let Some((s, n)) = r else { stopped = true; continue };
            self.nodes += n;
            debug!("root {} -> {:.1}", m, s);
            if best.map_or(true, |(_, bs)| s > bs) { best = Some((*m, s)); }
        }
        let (bestmove, score) = best.map_or((None, f64::NEG_INFINITY), |(m, s)| (Some(m), s));
        SearchResult { bestmove, score, nodes: self.nodes, stopped }
    }

    fn minimax(&mut self, board: &Board, sides: &Sides, plies_left: u32, maximizing: bool) -> f64 {
        self.nodes += 1;
        if plies_left == 0 || board.is_game_over() {
            return board.evaluate(&sides.computer, &sides.ctx(maximizing));
        }
        let computer_ply = !maximizing;
        let mover = if computer_ply { sides.computer } else { sides.human };
        let moves = board.legal_moves(&mover);
        if moves.is_empty() {
            return board.evaluate(&sides.computer, &sides.ctx(maximizing));
        }
        let children = moves.iter().map(|m| board.make_move(m));
        if computer_ply {
            children.fold(f64::NEG_INFINITY, |acc, child| acc.max(self.minimax(&child, sides, plies_left - 1, true)))
        } else {
            children.fold(f64::INFINITY, |acc, child| acc.min(self.minimax(&child, sides, plies_left - 1, false)))
        }
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.map_or(false, |dl| Instant::now() >= dl)
    }

    pub fn search_with_params(&mut self, board: &Board, computer: &Player, human: &Player, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.threads = params.threads.max(1);
        self.deadline = params.movetime.map(|d| Instant::now() + d);
        let t0 = Instant::now();
        let res = self.search_depth(board, computer, human, params.depth);
        info!(
            "depth {} threads {} bestmove {} score {:.1} nodes {} stopped {} in {:.3}s",
            params.depth,
            self.threads,
            res.bestmove.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
            res.score,
            res.nodes,
            res.stopped,
            t0.elapsed().as_secs_f64(),
        );
        res
    }

    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn get_threads(&self) -> usize { self.threads }
}

/// The computer's chosen move at `depth`, or `None` when it has no legal move.
pub fn best_move(board: &Board, computer: &Player, other: &Player, depth: u32) -> Option<Move> {
    let params = SearchParams { depth, ..SearchParams::default() };
    Searcher::default().search_with_params(board, computer, other, params).bestmove
}
