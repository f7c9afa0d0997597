//! HEXFRONT Core - Rules engine for hex-grid squad tactics
//!
//! This crate provides the game rules with no rendering or input handling:
//! - Hex geometry (axial coordinates, distance, rounding for pointer input)
//! - Rectangular board region
//! - Unit archetypes and per-unit state
//! - Movement/attack legality and combat resolution
//! - Turn engine driven by select/phase/deselect/end-turn intents
//! - Scenario configuration

pub mod hex;
pub mod board;
pub mod units;
pub mod index;
pub mod dice;
pub mod combat;
pub mod game;
pub mod scenario;
pub mod error;

// Re-exports for convenient access
pub use hex::{Hex, DIRECTIONS, round_fractional, pixel_to_hex, hex_to_pixel};
pub use board::Board;
pub use units::{Archetype, Unit, UnitId, UnitType, UNIT_TYPES};
pub use index::UnitIndex;
pub use dice::{RandomSource, SeededRolls, FixedRolls};
pub use combat::{AttackOutcome, AttackProfile, AttackReport};
pub use game::{GameState, GameResult, Player, Phase, Intent, Event, Snapshot};
pub use scenario::{Scenario, Placement};
pub use error::EngineError;
