//! Moves, legality rules, and the mutate-and-restore game state

use crate::board::{Color, Coord, Grid, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moves each side must spend placing new pieces before it may relocate one
pub const ADD_MOVES_PER_SIDE: u32 = 10;

/// Whether a side's next move places a new piece or relocates one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Add,
    Step,
}

/// A move: place a new piece at `to`, or relocate the piece at `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Add { to: Coord },
    Step { to: Coord, from: Coord },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Add { .. } => MoveKind::Add,
            Move::Step { .. } => MoveKind::Step,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add { to } => write!(f, "add {to}"),
            Move::Step { to, from } => write!(f, "step {from} -> {to}"),
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Board plus one move counter per side.
///
/// Trial moves during search mutate this state in place; every [`apply`] is
/// paired with an [`undo`] that restores the exact prior state, counter
/// included.
///
/// [`apply`]: GameState::apply
/// [`undo`]: GameState::undo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    moves_taken: [u32; 2],
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Moves `color` has made so far
    pub fn moves_taken(&self, color: Color) -> u32 {
        self.moves_taken[color.index()]
    }

    /// The kind of move `color` must make next, derived from that side's own
    /// counter alone
    pub fn next_move_kind(&self, color: Color) -> MoveKind {
        if self.moves_taken[color.index()] < ADD_MOVES_PER_SIDE {
            MoveKind::Add
        } else {
            MoveKind::Step
        }
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// Whether `mv` is a legal move for `color` in the current position.
    ///
    /// Step validation lifts the source piece for the duration of the
    /// destination cluster check and puts it back regardless of outcome, so
    /// the state is unchanged on return.
    pub fn is_legal(&mut self, color: Color, mv: Move) -> bool {
        if mv.kind() != self.next_move_kind(color) {
            return false;
        }
        match mv {
            Move::Add { to } => {
                if !to.on_board() || to.is_corner() {
                    return false;
                }
                if self.grid.piece(to).is_some() {
                    return false;
                }
                if to.in_home_rows(color.opponent()) {
                    return false;
                }
                !self.would_cluster(color, to)
            }
            Move::Step { to, from } => {
                if !to.on_board() || !from.on_board() {
                    return false;
                }
                if to.is_corner() || from.is_corner() {
                    return false;
                }
                if self.grid.piece(from) != Some(color) {
                    return false;
                }
                if self.grid.piece(to).is_some() {
                    return false;
                }
                if to.in_home_rows(color.opponent()) {
                    return false;
                }
                self.grid.lift(from);
                let cluster = self.would_cluster(color, to);
                self.grid.place(color, from);
                !cluster
            }
        }
    }

    /// Whether putting a `color` piece on the empty cell `at` would complete
    /// a cluster of three mutually adjacent same-color pieces.
    ///
    /// Two same-color neighbors always cluster. A single neighbor clusters
    /// only if it has a same-color neighbor of its own; two hops of adjacency
    /// are enough to catch every possible third piece.
    pub fn would_cluster(&self, color: Color, at: Coord) -> bool {
        debug_assert!(self.grid.piece(at).is_none());
        let adjacent = self.adjacent_pieces(color, at);
        match adjacent.len() {
            0 => false,
            1 => !self.adjacent_pieces(color, adjacent[0]).is_empty(),
            _ => true,
        }
    }

    /// Same-color pieces in the eight cells around `at`
    fn adjacent_pieces(&self, color: Color, at: Coord) -> Vec<Coord> {
        let mut found = Vec::new();
        for x in at.x - 1..=at.x + 1 {
            for y in at.y - 1..=at.y + 1 {
                let near = Coord::new(x, y);
                if near == at || !near.on_board() {
                    continue;
                }
                if self.grid.piece(near) == Some(color) {
                    found.push(near);
                }
            }
        }
        found
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Every legal move for `color` in the current position
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        match self.next_move_kind(color) {
            MoveKind::Add => {
                for x in 0..BOARD_SIZE {
                    for y in 0..BOARD_SIZE {
                        let mv = Move::Add {
                            to: Coord::new(x, y),
                        };
                        if self.is_legal(color, mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
            MoveKind::Step => {
                for sx in 0..BOARD_SIZE {
                    for sy in 0..BOARD_SIZE {
                        let from = Coord::new(sx, sy);
                        if self.grid.piece(from) != Some(color) {
                            continue;
                        }
                        for tx in 0..BOARD_SIZE {
                            for ty in 0..BOARD_SIZE {
                                let mv = Move::Step {
                                    to: Coord::new(tx, ty),
                                    from,
                                };
                                if self.is_legal(color, mv) {
                                    moves.push(mv);
                                }
                            }
                        }
                    }
                }
            }
        }
        moves
    }

    // ========================================================================
    // APPLY / UNDO
    // ========================================================================

    /// Record `mv` for `color` without validating it. Search calls this only
    /// with moves produced by [`legal_moves`](GameState::legal_moves).
    pub fn apply(&mut self, color: Color, mv: Move) {
        match mv {
            Move::Add { to } => self.grid.place(color, to),
            Move::Step { to, from } => {
                self.grid.lift(from);
                self.grid.place(color, to);
            }
        }
        self.moves_taken[color.index()] += 1;
    }

    /// Reverse a move previously recorded with [`apply`](GameState::apply),
    /// restoring the grid and `color`'s counter exactly
    pub fn undo(&mut self, color: Color, mv: Move) {
        match mv {
            Move::Add { to } => self.grid.lift(to),
            Move::Step { to, from } => {
                self.grid.lift(to);
                self.grid.place(color, from);
            }
        }
        self.moves_taken[color.index()] -= 1;
    }

    /// Validate and record in one step. Returns false and leaves the state
    /// untouched when the move is illegal.
    pub fn try_apply(&mut self, color: Color, mv: Move) -> bool {
        if !self.is_legal(color, mv) {
            return false;
        }
        self.apply(color, mv);
        true
    }
}
