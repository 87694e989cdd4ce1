//! Position evaluation

use crate::board::{Color, Coord, Grid, BOARD_SIZE};

/// Score of a completed network before the depth bonus. Heuristic scores
/// always stay well inside this bound.
pub const WIN_SCORE: i32 = 1000;

/// Connection-count differential over every occupied cell; positive favors
/// White, negative favors Black, zero is an even game.
pub fn evaluate(grid: &Grid) -> i32 {
    let mut score = 0;
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let at = Coord::new(x, y);
            match grid.piece(at) {
                Some(Color::White) => score += grid.connections(Color::White, at).len() as i32,
                Some(Color::Black) => score -= grid.connections(Color::Black, at).len() as i32,
                None => {}
            }
        }
    }
    score
}

/// Terminal score for a position `winner` has already won, biased by the
/// remaining search depth so the search prefers the fastest win and the
/// slowest loss
pub fn winning_score(winner: Color, depth_remaining: u32) -> i32 {
    match winner {
        Color::White => WIN_SCORE + depth_remaining as i32,
        Color::Black => -WIN_SCORE - depth_remaining as i32,
    }
}
