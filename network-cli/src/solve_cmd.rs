//! Solve command - report the agent's chosen move for a scenario file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use network_core::Scenario;

#[derive(Args)]
pub struct SolveArgs {
    /// Scenario JSON file
    #[arg(long, value_name = "FILE")]
    pub scenario: PathBuf,

    /// Override the scenario's search depth
    #[arg(long)]
    pub depth: Option<u32>,

    /// Print the reconstructed board before solving
    #[arg(long)]
    pub board: bool,
}

pub fn run(args: SolveArgs) -> Result<()> {
    let mut scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("Failed to load scenario: {}", args.scenario.display()))?;

    if let Some(depth) = args.depth {
        scenario.depth = depth;
    }

    tracing::info!(
        "Scenario '{}': {} scripted moves, depth {}",
        scenario.name,
        scenario.moves.len(),
        scenario.depth
    );

    let mut player = scenario
        .to_player()
        .with_context(|| format!("Failed to replay scenario '{}'", scenario.name))?;

    if args.board {
        print!("{}", player.grid());
    }

    match player.choose_move() {
        Some(mv) => println!("{:?} plays {mv}", player.color()),
        None => println!("{:?} has no legal move", player.color()),
    }

    Ok(())
}
