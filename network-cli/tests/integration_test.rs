//! Integration tests for the Network driver stack
//!
//! Exercises the full protocol surface the CLI is built on: two machine
//! players relaying moves, phase transitions, and scenario solving.

use std::time::Instant;

use network_core::{
    has_network_win, Color, Coord, MachinePlayer, Move, MoveKind, Scenario, ScriptedMove,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn add(x: i8, y: i8) -> Move {
    Move::Add {
        to: Coord::new(x, y),
    }
}

/// Scenario where white is one placement away from a seven-piece network
fn near_win_scenario(depth: u32) -> Scenario {
    let white = [(0, 3), (2, 3), (2, 5), (4, 5), (4, 3), (6, 3)];
    let black = [(1, 1), (3, 1), (5, 1), (1, 6), (3, 6), (5, 6)];
    let mut moves = Vec::new();
    for (&(wx, wy), &(bx, by)) in white.iter().zip(black.iter()) {
        moves.push(ScriptedMove {
            color: Color::White,
            mv: add(wx, wy),
        });
        moves.push(ScriptedMove {
            color: Color::Black,
            mv: add(bx, by),
        });
    }
    Scenario {
        name: "near-win".to_string(),
        color: Color::White,
        depth,
        moves,
    }
}

// ============================================================================
// PROTOCOL TESTS
// ============================================================================

#[test]
fn test_relayed_moves_keep_both_boards_in_sync() {
    let mut white = MachinePlayer::with_depth(Color::White, 1);
    let mut black = MachinePlayer::with_depth(Color::Black, 1);

    for _ in 0..6 {
        let mv = white.choose_move().expect("white has a move");
        assert!(black.opponent_move(mv), "black rejected {mv}");

        let mv = black.choose_move().expect("black has a move");
        assert!(white.opponent_move(mv), "white rejected {mv}");
    }

    assert_eq!(white.grid(), black.grid());
    assert_eq!(white.grid().to_string(), black.grid().to_string());
}

#[test]
fn test_random_legal_moves_are_accepted_by_the_other_player() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut white = MachinePlayer::with_depth(Color::White, 1);
    let mut black = MachinePlayer::with_depth(Color::Black, 1);

    for turn in 0..30 {
        let (mover, other): (&mut MachinePlayer, &mut MachinePlayer) = if turn % 2 == 0 {
            (&mut white, &mut black)
        } else {
            (&mut black, &mut white)
        };
        let moves = mover.legal_moves();
        assert!(!moves.is_empty(), "no legal moves at turn {turn}");
        let mv = moves[rng.gen_range(0..moves.len())];
        assert!(mover.force_move(mv));
        assert!(other.opponent_move(mv), "relay rejected {mv}");
    }

    assert_eq!(white.grid(), black.grid());
}

#[test]
fn test_ten_adds_then_step_phase() {
    let mut player = MachinePlayer::with_depth(Color::White, 1);
    for y in [1, 3, 5] {
        for x in [1, 3, 5] {
            assert!(player.force_move(add(x, y)));
        }
    }
    assert!(player.force_move(add(6, 6)));

    assert_eq!(player.next_move_kind(Color::White), MoveKind::Step);
    assert_eq!(player.next_move_kind(Color::Black), MoveKind::Add);
}

// ============================================================================
// FULL GAME TESTS
// ============================================================================

#[test]
fn test_machine_players_finish_a_game() {
    let mut white = MachinePlayer::with_depth(Color::White, 1);
    let mut black = MachinePlayer::with_depth(Color::Black, 1);

    let mut winner = None;
    let mut moves_played = 0;

    for turn in 0..120 {
        let color = if turn % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        let (mover, other): (&mut MachinePlayer, &mut MachinePlayer) = match color {
            Color::White => (&mut white, &mut black),
            Color::Black => (&mut black, &mut white),
        };

        let Some(mv) = mover.choose_move() else { break };
        assert!(other.opponent_move(mv));
        moves_played += 1;

        if has_network_win(mover.grid(), color) {
            winner = Some(color);
            break;
        }
        if has_network_win(mover.grid(), color.opponent()) {
            winner = Some(color.opponent());
            break;
        }
    }

    // The earliest possible win is white's sixth piece, the eleventh move
    assert!(moves_played >= 11, "game stalled after {moves_played} moves");
    if let Some(color) = winner {
        assert!(has_network_win(white.grid(), color));
        assert!(has_network_win(black.grid(), color));
    }
}

#[test]
fn test_search_performance() {
    let mut player = MachinePlayer::with_depth(Color::White, 2);

    let start = Instant::now();
    let mv = player.choose_move();
    let elapsed = start.elapsed();

    println!("Depth 2 opening move: {mv:?} in {elapsed:?}");
    assert!(mv.is_some());
    assert!(elapsed.as_millis() < 30000, "depth 2 took too long");
}

// ============================================================================
// SCENARIO TESTS
// ============================================================================

#[test]
fn test_scenario_agent_finds_the_winning_placement() {
    let scenario = near_win_scenario(2);
    let mut player = scenario.to_player().expect("scenario replays cleanly");

    let chosen = player.choose_move().expect("a move exists");
    assert_eq!(chosen, add(7, 2));
    assert!(has_network_win(player.grid(), Color::White));
}

#[test]
fn test_scenario_round_trips_through_json() {
    let scenario = near_win_scenario(3);
    let path = std::env::temp_dir().join("network-cli-scenario.json");
    scenario.save(&path).unwrap();
    let loaded = Scenario::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.name, scenario.name);
    assert_eq!(loaded.moves, scenario.moves);

    let player = loaded.to_player().expect("loaded scenario replays");
    assert_eq!(player.color(), Color::White);
    assert_eq!(player.depth(), 3);
}
