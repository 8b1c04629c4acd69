use serde::Serialize;

use crate::board::{Board, EvalCtx, Player, PIECES_PER_SIDE};
use crate::movegen;

/// Score per capture opportunity.
pub const THREAT_WEIGHT: f64 = 100.0;

/// Progress value keyed by distance (in rows) to the finish row.
const PROGRESS_BY_DISTANCE: [f64; 8] = [1000.0, 900.0, 700.0, 500.0, 200.0, 100.0, 0.0, 0.0];

// Edge columns are covered by fewer neighbours, so they count less.
const HOME_COLUMN_WEIGHT: [f64; 8] = [10.0, 10.0, 15.0, 15.0, 15.0, 15.0, 10.0, 10.0];

/// The four heuristics summed by `score`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalIndex {
    Material,
    HomeStrength,
    Threat,
    Progress,
}

impl EvalIndex {
    pub const ALL: [EvalIndex; 4] = [EvalIndex::Material, EvalIndex::HomeStrength, EvalIndex::Threat, EvalIndex::Progress];

    pub fn calc(self, board: &Board, player: &Player, ctx: &EvalCtx) -> f64 {
        match self {
            EvalIndex::Material => material(board, player),
            EvalIndex::HomeStrength => home_strength(board, player),
            EvalIndex::Threat => threat(board, player, ctx),
            EvalIndex::Progress => progress(board, player, ctx),
        }
    }
}

/// Share of the starting pieces still on the board, 0..=100.
pub fn material(board: &Board, player: &Player) -> f64 {
    board.occupied_by(player.side).len() as f64 / PIECES_PER_SIDE as f64 * 100.0
}

/// Column-weighted count of pieces still guarding the home row.
pub fn home_strength(board: &Board, player: &Player) -> f64 {
    board
        .occupied_by(player.side)
        .into_iter()
        .filter(|sq| sq.row() == player.home_row)
        .map(|sq| HOME_COLUMN_WEIGHT[sq.col()])
        .sum()
}

/// Capture opportunities available to `player`. Positive when the computer moves next,
/// negative when the human does.
pub fn threat(board: &Board, player: &Player, ctx: &EvalCtx) -> f64 {
    let score = movegen::capture_count(board.grid(), player) as f64 * THREAT_WEIGHT;
    if ctx.next_to_move.is_computer { score } else { -score }
}

/// Closeness to the finish row, relative to `ctx.other`.
pub fn progress(board: &Board, player: &Player, ctx: &EvalCtx) -> f64 {
    progress_total(board, player) - progress_total(board, &ctx.other)
}

fn progress_total(board: &Board, player: &Player) -> f64 {
    let finish = player.finish_row();
    board
        .occupied_by(player.side)
        .into_iter()
        .map(|sq| PROGRESS_BY_DISTANCE.get(finish.abs_diff(sq.row())).copied().unwrap_or(0.0))
        .sum()
}

/// Static value of `board` for `player`.
pub fn score(board: &Board, player: &Player, ctx: &EvalCtx) -> f64 {
    EvalIndex::ALL.iter().map(|idx| idx.calc(board, player, ctx)).sum()
}

/// Per-index values alongside their sum.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvalBreakdown {
    pub material: f64,
    pub home_strength: f64,
    pub threat: f64,
    pub progress: f64,
    pub total: f64,
}

pub fn breakdown(board: &Board, player: &Player, ctx: &EvalCtx) -> EvalBreakdown {
    let material = material(board, player);
    let home_strength = home_strength(board, player);
    let threat = threat(board, player, ctx);
    let progress = progress(board, player, ctx);
    EvalBreakdown { material, home_strength, threat, progress, total: material + home_strength + threat + progress }
}
