//! Scenario files: scripted positions for the machine player to solve

use crate::ai::MachinePlayer;
use crate::board::Color;
use crate::game::Move;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A scripted sequence of moves replayed through the move protocol to
/// reconstruct a position, plus the agent configuration to solve it with
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Color the agent plays
    pub color: Color,
    /// Search depth for the agent
    pub depth: u32,
    /// Moves in the order they were made
    pub moves: Vec<ScriptedMove>,
}

/// One recorded move and the side that made it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedMove {
    pub color: Color,
    #[serde(rename = "move")]
    pub mv: Move,
}

/// Failure to materialize a scenario into a playable position. A scenario
/// that scripts an illegal move is malformed input, unlike an illegal move
/// during play which is an ordinary `false` result.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scripted move {index} ({mv} by {color:?}) is illegal in its position")]
    IllegalScriptedMove {
        index: usize,
        color: Color,
        mv: Move,
    },
}

impl Scenario {
    /// Replay the script into a fresh machine player of the scenario's color
    pub fn to_player(&self) -> Result<MachinePlayer, ScenarioError> {
        let mut player = MachinePlayer::with_depth(self.color, self.depth);
        for (index, scripted) in self.moves.iter().enumerate() {
            let accepted = if scripted.color == self.color {
                player.force_move(scripted.mv)
            } else {
                player.opponent_move(scripted.mv)
            };
            if !accepted {
                return Err(ScenarioError::IllegalScriptedMove {
                    index,
                    color: scripted.color,
                    mv: scripted.mv,
                });
            }
        }
        Ok(player)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario = serde_json::from_str(&content)?;
        Ok(scenario)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use crate::game::MoveKind;

    fn scripted(color: Color, x: i8, y: i8) -> ScriptedMove {
        ScriptedMove {
            color,
            mv: Move::Add {
                to: Coord::new(x, y),
            },
        }
    }

    fn opening() -> Scenario {
        Scenario {
            name: "opening".to_string(),
            color: Color::White,
            depth: 2,
            moves: vec![
                scripted(Color::White, 2, 2),
                scripted(Color::Black, 5, 2),
                scripted(Color::White, 2, 4),
                scripted(Color::Black, 5, 4),
            ],
        }
    }

    #[test]
    fn replay_reconstructs_the_position() {
        let player = opening().to_player().unwrap();
        assert_eq!(player.grid().piece(Coord::new(2, 2)), Some(Color::White));
        assert_eq!(player.grid().piece(Coord::new(5, 4)), Some(Color::Black));
        assert_eq!(player.next_move_kind(Color::White), MoveKind::Add);
        assert_eq!(player.depth(), 2);
    }

    #[test]
    fn illegal_script_is_a_typed_error() {
        let mut scenario = opening();
        // Black may not use white's goal column
        scenario.moves.push(scripted(Color::Black, 0, 3));
        let err = scenario.to_player().unwrap_err();
        match err {
            ScenarioError::IllegalScriptedMove { index, color, .. } => {
                assert_eq!(index, 4);
                assert_eq!(color, Color::Black);
            }
        }
    }

    #[test]
    fn json_round_trip_preserves_the_script() {
        let scenario = opening();
        let path = std::env::temp_dir().join("network-scenario-roundtrip.json");
        scenario.save(&path).unwrap();
        let loaded = Scenario::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.name, scenario.name);
        assert_eq!(loaded.color, scenario.color);
        assert_eq!(loaded.depth, scenario.depth);
        assert_eq!(loaded.moves, scenario.moves);
    }
}
