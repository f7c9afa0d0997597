//! Engine error types
//!
//! These cover integration mistakes only. Illegal player intents are not
//! errors; the engine ignores them and reports `Event::Ignored`.

use crate::game::Player;
use crate::hex::Hex;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Board dimensions must be positive, got {width}x{height}")]
    InvalidBoardSize { width: i32, height: i32 },

    #[error("Placement at {hex} is outside the {width}x{height} board")]
    PlacementOutOfBounds { hex: Hex, width: i32, height: i32 },

    #[error("Hex {0} already holds a unit")]
    OccupiedPlacement(Hex),

    #[error("{0} has no units to deploy")]
    MissingSide(Player),

    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    #[error("Invalid player id {0}, expected 1 or 2")]
    InvalidPlayer(u8),
}

pub type Result<T> = std::result::Result<T, EngineError>;
