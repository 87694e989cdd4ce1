//! Referee loop driving two machine players through the move protocol

use anyhow::{bail, ensure, Result};
use network_core::{has_network_win, Color, MachinePlayer, Move};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// How a finished (or abandoned) game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

fn win_for(color: Color) -> GameOutcome {
    match color {
        Color::White => GameOutcome::WhiteWins,
        Color::Black => GameOutcome::BlackWins,
    }
}

/// Move selection policy for one side
pub enum Policy {
    /// Fixed-depth alpha-beta search
    Minimax,
    /// Uniform choice among legal moves, for baseline matches
    Random(ChaCha8Rng),
}

/// One side of a match: a machine player plus the policy picking its moves
pub struct Contestant {
    pub name: String,
    pub player: MachinePlayer,
    pub policy: Policy,
}

impl Contestant {
    pub fn minimax(color: Color, depth: u32) -> Self {
        Self {
            name: format!("minimax(depth={depth})"),
            player: MachinePlayer::with_depth(color, depth),
            policy: Policy::Minimax,
        }
    }

    /// Random mover; the player still tracks both boards so its legal moves
    /// and the relayed opponent moves stay validated
    pub fn random(color: Color, rng: ChaCha8Rng) -> Self {
        Self {
            name: "random".to_string(),
            player: MachinePlayer::with_depth(color, 1),
            policy: Policy::Random(rng),
        }
    }

    fn pick_move(&mut self) -> Option<Move> {
        match &mut self.policy {
            Policy::Minimax => self.player.choose_move(),
            Policy::Random(rng) => {
                let moves = self.player.legal_moves();
                if moves.is_empty() {
                    return None;
                }
                let mv = moves[rng.gen_range(0..moves.len())];
                self.player.force_move(mv);
                Some(mv)
            }
        }
    }
}

/// Play one game, relaying every move between the two players.
///
/// The callback observes each move right after it lands on the mover's
/// board. Both players validate every relayed move, so their internal boards
/// cannot drift apart silently; a rejected relay is a driver bug and aborts
/// the game.
pub fn play_game(
    white: &mut Contestant,
    black: &mut Contestant,
    max_moves: usize,
    mut on_move: impl FnMut(usize, Color, Move, &MachinePlayer),
) -> Result<(GameOutcome, usize)> {
    ensure!(white.player.color() == Color::White, "white plays White");
    ensure!(black.player.color() == Color::Black, "black plays Black");

    let mut moves_played = 0;
    while moves_played < max_moves {
        let color = if moves_played % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        let (mover, other) = match color {
            Color::White => (&mut *white, &mut *black),
            Color::Black => (&mut *black, &mut *white),
        };

        let Some(mv) = mover.pick_move() else {
            // No legal move for the side to move; call the game a draw
            tracing::warn!("{:?} has no legal move after {} moves", color, moves_played);
            return Ok((GameOutcome::Draw, moves_played));
        };
        if !other.player.opponent_move(mv) {
            bail!("referee desync: {:?} rejected {mv} played by {:?}", color.opponent(), color);
        }
        moves_played += 1;
        on_move(moves_played, color, mv, &mover.player);

        // The mover wins the race when one move completes both networks
        let grid = mover.player.grid();
        if has_network_win(grid, color) {
            return Ok((win_for(color), moves_played));
        }
        if has_network_win(grid, color.opponent()) {
            return Ok((win_for(color.opponent()), moves_played));
        }
    }
    Ok((GameOutcome::Draw, moves_played))
}
