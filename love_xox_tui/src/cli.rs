//! Command-line interface for the Love XOX terminal host.

use clap::Parser;
use std::path::PathBuf;

/// Love XOX - win the board game to unlock the next stage
#[derive(Parser, Debug)]
#[command(name = "love_xox_tui")]
#[command(about = "Play the Love XOX stage in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fix the opponent's RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance (0.0-1.0) that the opponent plays a random cell
    #[arg(long)]
    pub mistake_probability: Option<f64>,

    /// Start with the stage already completed
    #[arg(long)]
    pub completed: bool,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long, default_value = "love_xox_tui.log")]
    pub log_file: PathBuf,
}
