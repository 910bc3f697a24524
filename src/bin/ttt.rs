//! ttt CLI - Play against and train cached tic-tac-toe agents

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-tac-toe agents with a persisted state cache", long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play(ttt::cli::commands::play::PlayArgs),

    /// Fill a state cache by playing CPU against CPU
    Selfplay(ttt::cli::commands::selfplay::SelfPlayArgs),

    /// Summarize a saved state cache
    Inspect(ttt::cli::commands::inspect::InspectArgs),

    /// Convert a state cache to CSV, JSON or MessagePack
    Export(ttt::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ttt::logging::init(cli.verbose);

    match cli.command {
        Commands::Play(args) => ttt::cli::commands::play::execute(args),
        Commands::Selfplay(args) => ttt::cli::commands::selfplay::execute(args),
        Commands::Inspect(args) => ttt::cli::commands::inspect::execute(args),
        Commands::Export(args) => ttt::cli::commands::export::execute(args),
    }
}
