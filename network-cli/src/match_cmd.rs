//! Match command - play a series of games between two configured sides
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use network_core::Color;

use crate::driver::{play_game, Contestant, GameOutcome};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play (the sides alternate colors)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Search depth for side A
    #[arg(long, default_value = "2")]
    pub depth_a: u32,

    /// Search depth for side B
    #[arg(long, default_value = "2")]
    pub depth_b: u32,

    /// Side A picks uniform random legal moves instead of searching
    #[arg(long)]
    pub random_a: bool,

    /// Side B picks uniform random legal moves instead of searching
    #[arg(long)]
    pub random_b: bool,

    /// Seed for random sides
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Maximum moves per game before calling a draw
    #[arg(long, default_value = "120")]
    pub max_moves: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// How one side of the match picks its moves
#[derive(Clone, Copy)]
struct SideConfig {
    depth: u32,
    random: bool,
}

impl SideConfig {
    fn name(&self) -> String {
        if self.random {
            "random".to_string()
        } else {
            format!("minimax(depth={})", self.depth)
        }
    }

    fn contestant(&self, color: Color, seed: u64) -> Contestant {
        if self.random {
            Contestant::random(color, ChaCha8Rng::seed_from_u64(seed))
        } else {
            Contestant::minimax(color, self.depth)
        }
    }
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    outcome: GameOutcome,
    moves: usize,
    white_side: String,
    black_side: String,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    white_wins: usize,
    black_wins: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the match command: play every game, then report
pub fn run(args: MatchArgs) -> Result<()> {
    let side_a = SideConfig {
        depth: args.depth_a,
        random: args.random_a,
    };
    let side_b = SideConfig {
        depth: args.depth_b,
        random: args.random_b,
    };

    tracing::info!(
        "Starting match: {} vs {} ({} games, max {} moves)",
        side_a.name(),
        side_b.name(),
        args.games,
        args.max_moves
    );

    let results = play_match(side_a, side_b, &args)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(side_a: SideConfig, side_b: SideConfig, args: &MatchArgs) -> Result<MatchResults> {
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        // Alternate colors for fairness
        let swap_colors = game_num % 2 == 1;

        let (white_cfg, black_cfg) = if swap_colors {
            (side_b, side_a)
        } else {
            (side_a, side_b)
        };

        let record = play_single_game(
            white_cfg,
            black_cfg,
            game_num + 1,
            args.max_moves,
            args.seed.wrapping_add(game_num as u64),
        )?;

        tracing::info!(
            "Game {}: {:?} in {} moves ({} vs {})",
            record.game_number,
            record.outcome,
            record.moves,
            record.white_side,
            record.black_side
        );

        games.push(record);
    }

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play a single game between the two configured sides
fn play_single_game(
    white_cfg: SideConfig,
    black_cfg: SideConfig,
    game_number: usize,
    max_moves: usize,
    seed: u64,
) -> Result<GameRecord> {
    let mut white = white_cfg.contestant(Color::White, seed);
    let mut black = black_cfg.contestant(Color::Black, seed.wrapping_add(0x9e37_79b9));

    let (outcome, moves) = play_game(&mut white, &mut black, max_moves, |_, _, _, _| {})?;

    Ok(GameRecord {
        game_number,
        outcome,
        moves,
        white_side: white.name.clone(),
        black_side: black.name.clone(),
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let white_wins = games
        .iter()
        .filter(|g| g.outcome == GameOutcome::WhiteWins)
        .count();
    let black_wins = games
        .iter()
        .filter(|g| g.outcome == GameOutcome::BlackWins)
        .count();
    let draws = games
        .iter()
        .filter(|g| g.outcome == GameOutcome::Draw)
        .count();

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        white_wins,
        black_wins,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        outcome: String,
        moves: usize,
        white_side: String,
        black_side: String,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        white_wins: usize,
        black_wins: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        white_wins: results.white_wins,
        black_wins: results.black_wins,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                outcome: format!("{:?}", g.outcome),
                moves: g.moves,
                white_side: g.white_side.clone(),
                black_side: g.black_side.clone(),
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{json}");
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();
    let pct = |n: usize| {
        if total > 0 {
            n as f32 / total as f32 * 100.0
        } else {
            0.0
        }
    };

    println!("\n=== Match Results ===");
    println!("Total games: {total}");
    println!("White wins:  {} ({:.1}%)", results.white_wins, pct(results.white_wins));
    println!("Black wins:  {} ({:.1}%)", results.black_wins, pct(results.black_wins));
    println!("Draws:       {} ({:.1}%)", results.draws, pct(results.draws));
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {:?} in {} moves ({} vs {})",
            game.game_number, game.outcome, game.moves, game.white_side, game.black_side
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
