use anyhow::Result;
use clap::Parser;
use knightrace::game::{Game, GameStatus};
use knightrace::search::eval;
use knightrace::search::SearchParams;
use knightrace::{EvalCtx, Side, Square};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the knight race game against the engine", long_about = None)]
struct Args {
    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Search depth in plies
    #[arg(long, default_value_t = knightrace::search::DEFAULT_DEPTH)]
    depth: u32,

    /// Threads for root-split search
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Stop scoring further root moves after this many milliseconds
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Print the evaluation breakdown after each computer move
    #[arg(long)]
    explain: bool,
}

fn parse_color(color_str: &str) -> Result<Side> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

/// Reply to a bare square: its targets, or why the input is not a square.
fn targets_message(game: &Game, input: &str) -> String {
    let from: Square = match input.parse() {
        Ok(sq) => sq,
        Err(e) => return format!("Move rejected: {}", e),
    };
    let targets: Vec<String> = game.legal_targets(from).iter().map(|s| s.to_string()).collect();
    if targets.is_empty() {
        format!("No moves from {}", input)
    } else {
        format!("Moves from {}: {}", input, targets.join(" "))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let human_side = parse_color(&args.color)?;
    let params = SearchParams {
        depth: args.depth,
        threads: args.threads.max(1),
        movetime: args.movetime_ms.map(Duration::from_millis),
    };
    if params.threads > 1 {
        rayon::ThreadPoolBuilder::new().num_threads(params.threads).build_global()?;
    }

    let mut game = Game::new(human_side, params)?;
    println!("You play {} from row {}. Enter moves as 'rc rc' (e.g. 70 51), a square to list its moves, or 'quit'.",
        game.human().side, game.human().home_row);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", game.board());
        match game.status() {
            GameStatus::Won(p) => {
                println!("Game over. {} wins!", p.side);
                break;
            }
            GameStatus::NoMoves(p) => {
                println!("{} has no legal moves. Game over.", p.side);
                break;
            }
            GameStatus::InProgress => {}
        }

        if game.to_move().is_computer {
            let t0 = Instant::now();
            match game.step_computer()? {
                Some(mv) => println!("Computer plays: {} ({:.2}s)", mv, t0.elapsed().as_secs_f64()),
                None => break,
            }
            if args.explain {
                let ctx = EvalCtx { next_to_move: game.human(), other: game.human() };
                let bd = eval::breakdown(game.board(), &game.computer(), &ctx);
                println!("{}", serde_json::to_string(&bd)?);
            }
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let input = line?;
        let input = input.trim();
        if input == "quit" {
            println!("Thanks for playing!");
            break;
        }
        if input.len() == 2 {
            println!("{}", targets_message(&game, input));
            continue;
        }
        match game.play_human_text(input) {
            Ok(mv) => println!("Move accepted: {}", mv),
            Err(e) => println!("Move rejected: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_message_reports_bad_square() {
        let game = Game::new(Side::White, SearchParams::default()).unwrap();
        assert!(targets_message(&game, "zz").starts_with("Move rejected:"));
        assert!(targets_message(&game, "89").starts_with("Move rejected:"));
        assert_eq!(targets_message(&game, "70"), "Moves from 70: 62 51");
        assert_eq!(targets_message(&game, "40"), "No moves from 40");
    }
}
