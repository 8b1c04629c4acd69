use clap::Parser;
use knightrace::search::{SearchParams, Searcher};
use knightrace::{Board, Layout, Player, Players, Side};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "knightrace-bench", version, about = "Benchmark minimax search nodes per second")]
struct Args {
    /// Board file (8 lines of W, B, *) or 'startpos'; White searches from row 0
    #[arg(long, default_value = "startpos")]
    board: String,

    /// Threads
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Fixed search depth
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Optional root deadline in milliseconds
    #[arg(long)]
    movetime: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let computer = Player::new(Side::White, 0, true);
    let human = Player::new(Side::Black, 7, false);
    let players = Players::new(computer, human)?;
    let board = if args.board == "startpos" {
        Board::start(Layout::WhiteTop, players)?
    } else {
        Board::from_text(&std::fs::read_to_string(&args.board)?, players)?
    };

    let p = SearchParams { depth: args.depth, threads: args.threads.max(1), movetime: args.movetime.map(Duration::from_millis) };
    let mut s = Searcher::default();
    let t0 = Instant::now();
    let res = if args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        pool.install(|| s.search_with_params(&board, &computer, &human, p))
    } else {
        s.search_with_params(&board, &computer, &human, p)
    };
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "bestmove={} score={:.1} nodes={} stopped={} elapsed={:.3}s nps={:.1}",
        res.bestmove.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
        res.score,
        res.nodes,
        res.stopped,
        dt.as_secs_f64(),
        nps
    );
    Ok(())
}
