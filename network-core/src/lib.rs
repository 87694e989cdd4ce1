//! Network Core - rules engine and automated opponent
//!
//! This crate provides the core logic for the board game Network:
//! - Board grid and line-of-sight connectivity (8x8, eight compass rays)
//! - Exhaustive enumeration of networks with the direction-alternation rule
//! - Move legality, including the three-piece cluster rule
//! - Fixed-depth alpha-beta machine player behind a small move protocol

pub mod ai;
pub mod board;
pub mod eval;
pub mod game;
pub mod network;
pub mod scenario;

// Re-exports for convenient access
pub use ai::MachinePlayer;
pub use board::{Color, Coord, Direction, Grid, BOARD_SIZE};
pub use eval::{evaluate, WIN_SCORE};
pub use game::{GameState, Move, MoveKind, ADD_MOVES_PER_SIDE};
pub use network::{has_network_win, networks_from, Network};
pub use scenario::{Scenario, ScenarioError, ScriptedMove};
