pub mod eval;
pub mod minimax;

pub use minimax::{best_move, SearchParams, SearchResult, Searcher, DEFAULT_DEPTH};
