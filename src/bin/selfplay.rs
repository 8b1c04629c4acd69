use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use knightrace::search::SearchParams;
use knightrace::selfplay::{generate_games_with, summarize, Opponent, SelfPlayParams};
use knightrace::Side;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "knightrace-selfplay", about = "Play the engine against a random mover or itself and print a JSON summary")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 3)]
    depth: u32,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long)]
    movetime_ms: Option<u64>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Opponent search depth; omit for a random mover
    #[arg(long)]
    opponent_depth: Option<u32>,
    /// Engine color ('w' or 'b'); alternates when omitted
    #[arg(long)]
    engine_color: Option<String>,
    /// Print every game record as JSON lines
    #[arg(long, default_value_t = false)]
    records: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let engine_side = match a.engine_color.as_deref() {
        None => None,
        Some("w") | Some("white") => Some(Side::White),
        Some("b") | Some("black") => Some(Side::Black),
        Some(other) => anyhow::bail!("Invalid engine color {other:?}: use 'w' or 'b'"),
    };
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        search: SearchParams { depth: a.depth, threads: a.threads.max(1), movetime: a.movetime_ms.map(Duration::from_millis) },
        opponent: a.opponent_depth.map_or(Opponent::Random, |depth| Opponent::Engine { depth }),
        seed: a.seed,
        engine_side,
    };
    if a.threads > 1 {
        rayon::ThreadPoolBuilder::new().num_threads(a.threads).build_global()?;
    }
    eprintln!("Playing {} games (depth={}, threads={}, opponent={:?})", a.games, a.depth, a.threads, params.opponent);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")?);
    let games = generate_games_with(&params, |_| pb.inc(1))?;
    pb.finish_and_clear();

    if a.records {
        for g in &games {
            println!("{}", serde_json::to_string(g)?);
        }
    }
    println!("{}", serde_json::to_string_pretty(&summarize(&games))?);
    Ok(())
}
