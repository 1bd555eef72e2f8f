//! Run seeded computer-vs-computer matches and print a JSON report.
//!
//! ```text
//! simulate --games 500 --first hard --second medium --seed 7
//! RUST_LOG=cant_stop=debug simulate --games 1
//! ```

use std::path::PathBuf;

use cant_stop::game::{LifetimeStats, Match};
use cant_stop::{AiOpponent, Difficulty, GameConfig, GameRng, PlayerId, PlayerMap};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Simulate computer-vs-computer matches")]
struct Args {
    /// Number of matches to play.
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Difficulty of the seat that moves first.
    #[arg(long, default_value = "hard")]
    first: String,

    /// Difficulty of the seat that moves second.
    #[arg(long, default_value = "medium")]
    second: String,

    /// Base seed; each match forks its own seed from it. Drawn from OS
    /// entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon a match after this many rounds.
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Optional TOML rules file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct SeatReport {
    difficulty: Difficulty,
    #[serde(flatten)]
    stats: LifetimeStats,
    win_rate: f64,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    games: u32,
    abandoned: u32,
    average_turns: f64,
    seats: [SeatReport; 2],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let difficulties = PlayerMap::from_array([
        Difficulty::from_tag(&args.first),
        Difficulty::from_tag(&args.second),
    ]);
    let policies = PlayerMap::new(|seat| AiOpponent::new(difficulties[seat]));

    let mut seeds = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut totals: PlayerMap<LifetimeStats> = PlayerMap::default();
    let mut abandoned = 0;
    let mut turns = 0u64;

    for _ in 0..args.games {
        let seed = seeds.fork().seed();
        let summary = Match::computer_vs_computer(config, seed).play_out(&policies, args.max_turns);
        if summary.winner.is_none() {
            abandoned += 1;
        }
        turns += u64::from(summary.turns);
        for (seat, stats) in totals.iter_mut() {
            stats.record_summary(&summary, seat);
        }
    }

    let seat_report = |seat: PlayerId| SeatReport {
        difficulty: difficulties[seat],
        stats: totals[seat],
        win_rate: totals[seat].win_rate(),
    };
    let report = Report {
        seed: seeds.seed(),
        games: args.games,
        abandoned,
        average_turns: if args.games == 0 {
            0.0
        } else {
            turns as f64 / f64::from(args.games)
        },
        seats: [seat_report(PlayerId::FIRST), seat_report(PlayerId::SECOND)],
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
