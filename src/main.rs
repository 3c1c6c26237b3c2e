use anyhow::Result;
use clap::Parser;
use log::debug;
use pleco::Player;
use std::fs::File;
use std::io::{self, Write};

use patzer::board::{GameStatus, Position};
use patzer::registry;
use patzer::search::HistoryEntry;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against one of the patzer engines", long_about = None)]
struct Args {
    /// Engine version key ("human" disables the engine entirely)
    #[arg(long, default_value = "v3")]
    engine: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Optional: write the engine's move records as JSONL
    #[arg(long)]
    history_out: Option<String>,
}

fn parse_color(color_str: &str) -> Result<Player> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Player::White),
        "b" | "black" => Ok(Player::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn side_name(side: Player) -> &'static str {
    if side == Player::White { "White" } else { "Black" }
}

fn get_human_move(pos: &Position) -> Result<pleco::BitMove> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("stdin closed before the game ended");
        }
        let input = input.trim();

        match pos.find_uci(input) {
            Some(mv) => return Ok(mv),
            None => println!("Illegal move! Use UCI format like 'e2e4'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human_color = parse_color(&args.color)?;

    println!("Available engines:");
    for opt in registry::catalog() {
        println!("  {:6} {}", opt.version, opt.name);
    }

    let option = registry::find(&args.engine);
    let mut engine = option.ctor.map(|ctor| ctor());
    match &engine {
        Some(_) => println!("\nPlaying against {} ({})", option.name, option.version),
        None => println!("\nNo engine selected: both sides move from the keyboard"),
    }

    let mut pos = match args.fen {
        Some(fen) => Position::from_fen(&fen)?,
        None => Position::startpos(),
    };

    let mut history: Vec<HistoryEntry> = Vec::new();
    let mut plies: u32 = 0;
    let mut next_id: u64 = 1;

    loop {
        let status = pos.status();
        if status != GameStatus::Ongoing {
            println!("\n{}", pos.pretty());
            match status {
                GameStatus::Checkmate => {
                    let winner = match pos.side_to_move() {
                        Player::White => Player::Black,
                        Player::Black => Player::White,
                    };
                    println!("\nCheckmate! {} wins!", side_name(winner));
                }
                GameStatus::Stalemate => println!("\nGame is a stalemate!"),
                GameStatus::Draw => println!("\nGame is a draw!"),
                GameStatus::Ongoing => {}
            }
            break;
        }

        println!("\n{}'s turn", side_name(pos.side_to_move()));
        println!("{}", pos.pretty());

        let human_turn = engine.is_none() || pos.side_to_move() == human_color;
        if human_turn {
            let mv = get_human_move(&pos)?;
            pos.make(mv);
        } else if let Some(eng) = engine.as_mut() {
            let result = eng.search(&mut pos)?;
            let san = pos.san(result.best_move);
            debug!(
                "search: move={} score_cp={} nodes={} elapsed_ms={}",
                result.best_move,
                result.score_cp,
                result.nodes,
                result.elapsed.as_millis()
            );
            println!(
                "{} plays: {} (eval {:+.2} pawns, {} nodes, {:.2}s)",
                option.name,
                san,
                f64::from(result.score_cp) / 100.0,
                result.nodes,
                result.elapsed.as_secs_f64()
            );
            history.push(HistoryEntry::new(next_id, plies, san, &result));
            next_id += 1;
            pos.make(result.best_move);
        }
        plies += 1;
    }

    if let Some(path) = args.history_out.as_deref() {
        let mut f = File::create(path)?;
        for entry in &history {
            writeln!(f, "{}", serde_json::to_string(entry)?)?;
        }
        println!("Wrote {} move records to {}", history.len(), path);
    }

    Ok(())
}
