use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aeolus weather guessing minigame.
#[derive(Parser)]
#[command(
    name = "aeolus",
    version,
    about = "Markov-chain weather guessing minigame"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Advance the weather chain day by day and report each outcome.
    Simulate(SimulateArgs),
    /// Play one guessing round against the simulator.
    Guess(GuessArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Number of days to simulate.
    #[arg(short = 'n', long, default_value_t = 30)]
    pub days: usize,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write a JSON run report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `guess` subcommand.
#[derive(clap::Args)]
pub struct GuessArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Your guess for tomorrow's weather (sunny, cloudy, or rainy).
    #[arg(short, long)]
    pub guess: String,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
