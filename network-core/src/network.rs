//! Network paths and exhaustive path enumeration

use crate::board::{Color, Coord, Direction, Grid, BOARD_SIZE};
use std::fmt;

/// Minimum number of pieces in a game-winning network
const WINNING_LENGTH: usize = 6;

type Visited = [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// An ordered chain of same-color pieces. Consecutive coordinates are
/// directly connected per [`Grid::connections`], and no two consecutive hops
/// travel the same direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    path: Vec<Coord>,
}

impl Network {
    fn single(at: Coord) -> Self {
        Self { path: vec![at] }
    }

    fn prepend(&mut self, at: Coord) {
        self.path.insert(0, at);
    }

    /// Coordinates in traversal order, front to back
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// A network wins when it has at least six pieces and its endpoints lie
    /// on opposite goal edges of one axis, in traversal order. Only the
    /// endpoints are examined.
    pub fn is_game_winning(&self) -> bool {
        if self.path.len() < WINNING_LENGTH {
            return false;
        }
        let first = self.path[0];
        let last = self.path[self.path.len() - 1];
        (first.x == 0 && last.x == BOARD_SIZE - 1) || (first.y == 0 && last.y == BOARD_SIZE - 1)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for at in &self.path {
            write!(f, "{sep}{at}")?;
            sep = " -> ";
        }
        Ok(())
    }
}

/// All maximal direction-alternating simple paths of `color` pieces that
/// start at `start`, which is assumed to hold a `color` piece.
///
/// Every returned path ends in a piece that cannot extend the path further;
/// callers filter for winning paths themselves.
pub fn networks_from(grid: &Grid, color: Color, start: Coord) -> Vec<Network> {
    debug_assert_eq!(grid.piece(start), Some(color));
    let mut visited = [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    extend(grid, color, start, &mut visited, None)
}

fn extend(
    grid: &Grid,
    color: Color,
    at: Coord,
    visited: &mut Visited,
    arrived: Option<Direction>,
) -> Vec<Network> {
    visited[at.x as usize][at.y as usize] = true;
    let mut networks = Vec::new();
    for next in grid.connections(color, at) {
        let dir = Direction::between(at, next);
        // A network may not continue two hops in the same direction, and
        // never revisits a piece
        if visited[next.x as usize][next.y as usize] || Some(dir) == arrived {
            continue;
        }
        for mut network in extend(grid, color, next, visited, Some(dir)) {
            network.prepend(at);
            networks.push(network);
        }
    }
    // A piece with nowhere left to go still forms a one-piece path
    if networks.is_empty() {
        networks.push(Network::single(at));
    }
    visited[at.x as usize][at.y as usize] = false;
    networks
}

/// Whether `color` has a completed network on `grid`.
///
/// Black networks can only start on the top goal row, White networks on the
/// left goal column; corners are skipped since they never hold a piece.
pub fn has_network_win(grid: &Grid, color: Color) -> bool {
    let starts = (1..BOARD_SIZE - 1).map(|i| match color {
        Color::Black => Coord::new(i, 0),
        Color::White => Coord::new(0, i),
    });
    starts
        .filter(|&at| grid.piece(at) == Some(color))
        .any(|at| {
            networks_from(grid, color, at)
                .iter()
                .any(Network::is_game_winning)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixture_grid;

    fn network(pairs: &[(i8, i8)]) -> Network {
        Network {
            path: pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        }
    }

    #[test]
    fn short_paths_never_win() {
        assert!(!network(&[(0, 3), (7, 4)]).is_game_winning());
        assert!(!network(&[(0, 1), (2, 2), (3, 3), (4, 4), (7, 5)]).is_game_winning());
    }

    #[test]
    fn six_piece_edge_spanning_path_wins() {
        assert!(network(&[(0, 3), (2, 3), (2, 5), (4, 5), (4, 3), (7, 3)]).is_game_winning());
        assert!(network(&[(3, 0), (3, 2), (5, 4), (2, 4), (4, 6), (4, 7)]).is_game_winning());
    }

    #[test]
    fn same_edge_endpoints_do_not_win() {
        assert!(!network(&[(0, 1), (2, 2), (3, 3), (4, 4), (2, 5), (0, 6)]).is_game_winning());
        assert!(!network(&[(1, 2), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]).is_game_winning());
    }

    #[test]
    fn lone_piece_enumerates_as_single_path() {
        let mut grid = Grid::new();
        grid.place(Color::White, Coord::new(3, 3));
        let networks = networks_from(&grid, Color::White, Coord::new(3, 3));
        assert_eq!(networks, vec![network(&[(3, 3)])]);
    }

    #[test]
    fn collinear_run_is_not_extended_twice_in_one_direction() {
        let mut grid = Grid::new();
        for x in [1, 3, 5] {
            grid.place(Color::White, Coord::new(x, 3));
        }
        let networks = networks_from(&grid, Color::White, Coord::new(1, 3));
        // The second eastward hop is forbidden, so the path stops at (3, 3)
        assert_eq!(networks, vec![network(&[(1, 3), (3, 3)])]);
    }

    #[test]
    fn enumeration_contains_known_winning_paths() {
        let grid = fixture_grid();

        let white = networks_from(&grid, Color::White, Coord::new(0, 4));
        let white_win = network(&[(0, 4), (2, 4), (2, 2), (3, 1), (5, 1), (5, 2), (7, 4)]);
        assert!(
            white.contains(&white_win),
            "missing {white_win} among {} paths",
            white.len()
        );

        let black = networks_from(&grid, Color::Black, Coord::new(1, 0));
        let black_win = network(&[(1, 0), (1, 3), (4, 3), (4, 4), (2, 6), (4, 6), (4, 7)]);
        assert!(
            black.contains(&black_win),
            "missing {black_win} among {} paths",
            black.len()
        );
    }

    #[test]
    fn winning_paths_satisfy_their_own_test() {
        let white_win = network(&[(0, 4), (2, 4), (2, 2), (3, 1), (5, 1), (5, 2), (7, 4)]);
        let black_win = network(&[(1, 0), (1, 3), (4, 3), (4, 4), (2, 6), (4, 6), (4, 7)]);
        assert!(white_win.is_game_winning());
        assert!(black_win.is_game_winning());
    }

    #[test]
    fn fixture_position_is_won_by_both_sides() {
        // One earlier move completed a network for each side at once; the
        // search's dual terminal check relies on detecting both.
        let grid = fixture_grid();
        assert!(has_network_win(&grid, Color::White));
        assert!(has_network_win(&grid, Color::Black));
    }

    #[test]
    fn empty_board_has_no_winner() {
        let grid = Grid::new();
        assert!(!has_network_win(&grid, Color::White));
        assert!(!has_network_win(&grid, Color::Black));
    }
}
