//! Alpha-beta game tree search and the referee-facing machine player

use crate::board::{Color, Grid};
use crate::eval::{evaluate, winning_score};
use crate::game::{GameState, Move, MoveKind};
use crate::network::has_network_win;

/// Search depth used when none is configured
const DEFAULT_DEPTH: u32 = 3;

/// A candidate move and the score its subtree settled on
#[derive(Clone, Copy, Debug)]
struct Best {
    mv: Option<Move>,
    score: i32,
}

/// An automatic Network player.
///
/// Keeps track of moves made by both sides on an internal board and selects
/// its own moves with a fixed-depth alpha-beta search. White is the
/// maximizing side, Black the minimizing side.
///
/// The search mutates the one internal [`GameState`] for every trial move
/// and restores it before trying the next; nothing is cloned per ply. That
/// discipline is only sound because the search is strictly sequential.
#[derive(Debug)]
pub struct MachinePlayer {
    state: GameState,
    color: Color,
    depth: u32,
}

impl MachinePlayer {
    /// Player with the default search depth
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_DEPTH)
    }

    pub fn with_depth(color: Color, depth: u32) -> Self {
        Self {
            state: GameState::new(),
            color,
            depth,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The player's internal board (debug rendering, win checks)
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    /// The kind of move `color` must make next, from that side's own counter
    pub fn next_move_kind(&self, color: Color) -> MoveKind {
        self.state.next_move_kind(color)
    }

    /// Every legal move for this player in the current position
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.state.legal_moves(self.color)
    }

    /// Choose a move by searching at the configured depth, record it as this
    /// player's own move, and return it. `None` means no legal move exists.
    pub fn choose_move(&mut self) -> Option<Move> {
        let best = self.search(self.color, i32::MIN, i32::MAX, self.depth);
        let mv = best.mv?;
        self.force_move(mv);
        Some(mv)
    }

    /// Record a move as made by this player. Returns false and leaves all
    /// state untouched when the move is illegal.
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.state.try_apply(self.color, mv)
    }

    /// Record a move reported by the opponent; same contract as
    /// [`force_move`](MachinePlayer::force_move)
    pub fn opponent_move(&mut self, mv: Move) -> bool {
        self.state.try_apply(self.color.opponent(), mv)
    }

    /// Alpha-beta search for the side `color` with `depth` plies remaining.
    ///
    /// Both sides are checked for a completed network at every node: the
    /// move that produced this position may have completed a network for
    /// each side at once, and neither outcome may be missed.
    fn search(&mut self, color: Color, mut alpha: i32, mut beta: i32, depth: u32) -> Best {
        if has_network_win(self.state.grid(), color) {
            return Best {
                mv: None,
                score: winning_score(color, depth),
            };
        }
        if has_network_win(self.state.grid(), color.opponent()) {
            return Best {
                mv: None,
                score: winning_score(color.opponent(), depth),
            };
        }
        if depth == 0 {
            return Best {
                mv: None,
                score: evaluate(self.state.grid()),
            };
        }

        let candidates = self.state.legal_moves(color);
        let mut best = Best {
            mv: None,
            score: match color {
                Color::White => alpha,
                Color::Black => beta,
            },
        };
        for &mv in &candidates {
            self.state.apply(color, mv);
            let reply = self.search(color.opponent(), alpha, beta, depth - 1);
            self.state.undo(color, mv);

            match color {
                Color::White if reply.score > best.score => {
                    best = Best {
                        mv: Some(mv),
                        score: reply.score,
                    };
                    alpha = reply.score;
                }
                Color::Black if reply.score < best.score => {
                    best = Best {
                        mv: Some(mv),
                        score: reply.score,
                    };
                    beta = reply.score;
                }
                _ => {}
            }
            if alpha >= beta {
                break;
            }
        }
        if best.mv.is_none() {
            // Pruning can cut every sibling before a move is recorded; fall
            // back to the first generated candidate (or no move at all)
            best.mv = candidates.first().copied();
        }
        best
    }
}
