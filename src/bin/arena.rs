use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Write;

use patzer::board::{GameStatus, Position};
use patzer::registry;
use patzer::search::HistoryEntry;
use pleco::Player;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Play engine-vs-engine matches between two registry entries")]
struct Args {
    /// Version key of engine A (plays White in even-numbered games)
    #[arg(long, default_value = "v3")]
    a: String,

    /// Version key of engine B
    #[arg(long, default_value = "v2")]
    b: String,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Max plies before adjudicating a draw
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Random seed for the opening noise
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Random plies at the start of each game (both sides), for variety
    #[arg(long, default_value_t = 0)]
    noise_plies: usize,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Optional: write per-move records as JSONL (one JSON per move)
    #[arg(long)]
    jsonl_out: Option<String>,

    /// Optional: write all games to a single PGN file
    #[arg(long)]
    pgn_out: Option<String>,

    /// Optional: write summary JSON to this path
    #[arg(long)]
    json_out: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let a_opt = registry::find(&args.a);
    let b_opt = registry::find(&args.b);
    let mut eng_a = match a_opt.ctor {
        Some(ctor) => ctor(),
        None => bail!("'{}' has no engine and cannot play in the arena", a_opt.version),
    };
    let mut eng_b = match b_opt.ctor {
        Some(ctor) => ctor(),
        None => bail!("'{}' has no engine and cannot play in the arena", b_opt.version),
    };
    println!(
        "arena: {} ({}) vs {} ({}), {} games",
        a_opt.name, a_opt.version, b_opt.name, b_opt.version, args.games
    );

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut jsonl: Option<File> = match &args.jsonl_out {
        Some(p) => Some(File::create(p).with_context(|| format!("creating jsonl_out {p}"))?),
        None => None,
    };

    let mut a_points = 0.0f64;
    let mut b_points = 0.0f64;
    let mut draws = 0usize;
    let mut sum_nodes_a: u64 = 0;
    let mut sum_time_a: f64 = 0.0;
    let mut cnt_a: u64 = 0;
    let mut sum_nodes_b: u64 = 0;
    let mut sum_time_b: f64 = 0.0;
    let mut cnt_b: u64 = 0;
    let mut next_id: u64 = 0;
    let mut pgn_buf = String::new();

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40} {pos}/{len} games {msg}",
    )?);

    for g in 0..args.games {
        let mut pos = match args.fen.as_deref() {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::startpos(),
        };
        // Per-game RNG so a fixed seed still varies the openings across games
        let game_seed: u64 = rng.gen();
        let mut game_rng = SmallRng::seed_from_u64(game_seed);
        let a_is_white = g % 2 == 0;
        let mut plies = 0usize;
        let mut san_moves: Vec<String> = Vec::new();
        let mut result: Option<f64> = None; // 1.0 A wins, 0.0 draw, -1.0 B wins

        loop {
            let status = pos.status();
            if status != GameStatus::Ongoing {
                result = Some(match status {
                    GameStatus::Checkmate => {
                        // The side to move has been mated, so the previous mover won
                        let white_won = pos.side_to_move() == Player::Black;
                        if white_won == a_is_white { 1.0 } else { -1.0 }
                    }
                    _ => 0.0,
                });
                debug!("terminal: game={} plies={} status={} fen={}", g + 1, plies, status, pos.fen());
                break;
            }
            if plies >= args.max_plies {
                debug!("adjudicated draw: game={} plies={} fen={}", g + 1, plies, pos.fen());
                result = Some(0.0);
                break;
            }

            let white_to_move = pos.side_to_move() == Player::White;
            let a_to_move = white_to_move == a_is_white;

            if plies < args.noise_plies {
                let moves: Vec<pleco::BitMove> = pos.legal_moves().iter().copied().collect();
                let mv = moves[game_rng.gen_range(0..moves.len())];
                san_moves.push(pos.san(mv));
                pos.make(mv);
                plies += 1;
                continue;
            }

            let eng = if a_to_move { eng_a.as_mut() } else { eng_b.as_mut() };
            let chosen = eng
                .search(&mut pos)
                .with_context(|| format!("game {} ply {}", g + 1, plies + 1))?;
            let san = pos.san(chosen.best_move);

            if a_to_move {
                sum_nodes_a += chosen.nodes;
                sum_time_a += chosen.elapsed.as_secs_f64();
                cnt_a += 1;
            } else {
                sum_nodes_b += chosen.nodes;
                sum_time_b += chosen.elapsed.as_secs_f64();
                cnt_b += 1;
            }

            if let Some(f) = jsonl.as_mut() {
                next_id += 1;
                let entry = HistoryEntry::new(next_id, plies as u32, san.clone(), &chosen);
                let mut obj = serde_json::to_value(&entry)?;
                obj["game"] = (g + 1).into();
                obj["engine"] = (if a_to_move { a_opt.version } else { b_opt.version }).into();
                obj["side"] = (if white_to_move { "w" } else { "b" }).into();
                obj["fen"] = pos.fen().into();
                writeln!(f, "{}", serde_json::to_string(&obj)?)?;
            }

            san_moves.push(san);
            pos.make(chosen.best_move);
            plies += 1;
        }

        let r = result.unwrap_or(0.0);
        if r > 0.0 {
            a_points += 1.0;
        } else if r < 0.0 {
            b_points += 1.0;
        } else {
            draws += 1;
        }
        pb.println(format!(
            "game={} result={} ({} as white) plies={}",
            g + 1,
            r,
            if a_is_white { a_opt.version } else { b_opt.version },
            plies
        ));
        pb.set_message(format!("A={a_points} B={b_points} D={draws}"));
        pb.inc(1);

        if args.pgn_out.is_some() {
            let res = if r > 0.0 {
                if a_is_white { "1-0" } else { "0-1" }
            } else if r < 0.0 {
                if a_is_white { "0-1" } else { "1-0" }
            } else {
                "1/2-1/2"
            };
            let white = if a_is_white { a_opt.name } else { b_opt.name };
            let black = if a_is_white { b_opt.name } else { a_opt.name };
            pgn_buf.push_str(&format!(
                "[Event \"Patzer Arena\"]\n[Site \"Local\"]\n[Round \"{}\"]\n[White \"{}\"]\n[Black \"{}\"]\n[Result \"{}\"]\n\n",
                g + 1, white, black, res
            ));
            let mut move_num = 1;
            for i in (0..san_moves.len()).step_by(2) {
                if i + 1 < san_moves.len() {
                    pgn_buf.push_str(&format!("{}. {} {} ", move_num, san_moves[i], san_moves[i + 1]));
                } else {
                    pgn_buf.push_str(&format!("{}. {} ", move_num, san_moves[i]));
                }
                move_num += 1;
            }
            pgn_buf.push_str(&format!("{res}\n\n"));
        }
    }
    pb.finish_and_clear();

    let avg_nodes_a = if cnt_a > 0 { sum_nodes_a as f64 / cnt_a as f64 } else { 0.0 };
    let avg_nodes_b = if cnt_b > 0 { sum_nodes_b as f64 / cnt_b as f64 } else { 0.0 };
    println!(
        "summary: games={} {}_pts={} {}_pts={} draws={}",
        args.games, a_opt.version, a_points, b_opt.version, b_points, draws
    );
    println!(
        "{}: avg_nodes={:.1} moves={} nodes={} time={:.3}s",
        a_opt.version, avg_nodes_a, cnt_a, sum_nodes_a, sum_time_a
    );
    println!(
        "{}: avg_nodes={:.1} moves={} nodes={} time={:.3}s",
        b_opt.version, avg_nodes_b, cnt_b, sum_nodes_b, sum_time_b
    );

    if let Some(path) = args.pgn_out.as_deref() {
        std::fs::write(path, pgn_buf).with_context(|| format!("writing pgn_out {path}"))?;
        println!("wrote PGN to {path}");
    }
    if let Some(path) = args.json_out.as_deref() {
        let payload = serde_json::json!({
            "games": args.games,
            "seed": args.seed,
            "noise_plies": args.noise_plies,
            "max_plies": args.max_plies,
            "a": { "version": a_opt.version, "name": a_opt.name, "points": a_points,
                   "moves": cnt_a, "nodes": sum_nodes_a, "time_s": sum_time_a },
            "b": { "version": b_opt.version, "name": b_opt.name, "points": b_points,
                   "moves": cnt_b, "nodes": sum_nodes_b, "time_s": sum_time_b },
            "draws": draws,
        });
        std::fs::write(path, serde_json::to_string_pretty(&payload)?)
            .with_context(|| format!("writing json_out {path}"))?;
        println!("wrote summary to {path}");
    }

    Ok(())
}
