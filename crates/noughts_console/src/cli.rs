//! Command-line interface for the noughts binary.

use clap::Parser;

/// Noughts and crosses in the terminal.
///
/// With no options the game asks for the number of players.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses against a friend or a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of human players; skips the startup question
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub players: Option<u8>,

    /// Seed for the computer's moves and the initial turn
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Settings file (TOML). Defaults to noughts.toml when present
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}
