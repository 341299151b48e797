//! Build repertoire line spaces from PGN dumps.
//!
//! Reads one or more PGN files, imports every game for the given
//! player, seeds a line space per color from the imported move
//! sequences, and prints the stored lines.
//!
//! Usage: cargo run --bin build-repertoire -- <username> <pgn_file>...

use std::env;
use std::fs;
use std::process::ExitCode;

use game_import::{pgn, GameRecord};
use repertoire_core::{LineSpace, MoveSequence};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Usage: build-repertoire <username> <pgn_file>...");
        return ExitCode::FAILURE;
    }
    let username = &args[0];

    let mut white_games: Vec<MoveSequence> = Vec::new();
    let mut black_games: Vec<MoveSequence> = Vec::new();

    for path in &args[1..] {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path, e);
                continue;
            }
        };
        for chunk in pgn::split_games(&text) {
            match GameRecord::parse(&chunk, username) {
                Ok(record) => {
                    if record.user_is_white {
                        white_games.push(record.moves);
                    } else {
                        black_games.push(record.moves);
                    }
                }
                Err(e) => tracing::warn!("Skipping game in {}: {}", path, e),
            }
        }
    }

    tracing::info!(
        "Imported {} white games and {} black games for {}",
        white_games.len(),
        black_games.len(),
        username
    );

    for (label, is_white, games) in [("white", true, white_games), ("black", false, black_games)] {
        if games.is_empty() {
            continue;
        }
        let space = LineSpace::new(label, is_white, games);
        println!("{} repertoire ({} lines):", label, space.len());
        let mut lines: Vec<String> = space.iter().map(|line| line.to_string()).collect();
        lines.sort();
        for line in lines {
            println!("  {line}");
        }
    }

    ExitCode::SUCCESS
}
