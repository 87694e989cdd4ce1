//! Play command - a single game with every move printed

use anyhow::Result;
use clap::Args;

use network_core::Color;

use crate::driver::{play_game, Contestant, GameOutcome};

#[derive(Args)]
pub struct PlayArgs {
    /// Search depth for white
    #[arg(long, default_value = "2")]
    pub white_depth: u32,

    /// Search depth for black
    #[arg(long, default_value = "2")]
    pub black_depth: u32,

    /// Maximum moves before calling a draw
    #[arg(long, default_value = "120")]
    pub max_moves: usize,

    /// Print the board after every move
    #[arg(long)]
    pub boards: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let mut white = Contestant::minimax(Color::White, args.white_depth);
    let mut black = Contestant::minimax(Color::Black, args.black_depth);

    tracing::info!("Playing {} vs {}", white.name, black.name);

    let show_boards = args.boards;
    let (outcome, moves) = play_game(&mut white, &mut black, args.max_moves, |n, color, mv, player| {
        println!("{n:3}. {color:?} {mv}");
        if show_boards {
            println!("{}", player.grid());
        }
    })?;

    match outcome {
        GameOutcome::WhiteWins => println!("White wins in {moves} moves"),
        GameOutcome::BlackWins => println!("Black wins in {moves} moves"),
        GameOutcome::Draw => println!("Draw after {moves} moves"),
    }

    Ok(())
}
