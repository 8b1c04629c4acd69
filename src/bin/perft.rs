use clap::Parser;
use knightrace::perft::{perft, perft_parallel};
use knightrace::{Board, Layout, Player, Players, Side};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Move-generator node counts from the start position")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Optional board file (8 lines of W, B, *); White moves first from row 0
    #[arg(long)]
    board: Option<std::path::PathBuf>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let white = Player::new(Side::White, 0, true);
    let black = Player::new(Side::Black, 7, false);
    let players = Players::new(white, black)?;
    let board = match &args.board {
        Some(path) => Board::from_text(&std::fs::read_to_string(path)?, players)?,
        None => Board::start(Layout::WhiteTop, players)?,
    };

    let t0 = Instant::now();
    let nodes = if args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        pool.install(|| perft_parallel(&board, &white, &black, args.depth))
    } else {
        perft(&board, &white, &black, args.depth)
    };
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
