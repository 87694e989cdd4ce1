//! Network CLI - match driver for the machine player
//!
//! Commands:
//! - play: play a single game and print the moves as they happen
//! - match: play a series of games and report aggregate results
//! - solve: load a scenario file and report the agent's chosen move

use clap::{Parser, Subcommand};

mod driver;
mod match_cmd;
mod play_cmd;
mod solve_cmd;

#[derive(Parser)]
#[command(name = "network")]
#[command(about = "Rules engine and automated opponent for the board game Network")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game between two machine players
    Play(play_cmd::PlayArgs),
    /// Play a series of games and aggregate the results
    Match(match_cmd::MatchArgs),
    /// Report the agent's chosen move for a scenario file
    Solve(solve_cmd::SolveArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
        Commands::Solve(args) => solve_cmd::run(args),
    }
}
