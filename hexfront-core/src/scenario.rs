//! Scenario - board size and starting deployment

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::{GameState, Player};
use crate::hex::Hex;
use crate::units::Archetype;

/// One unit to deploy at game start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub archetype: Archetype,
    pub q: i32,
    pub r: i32,
    pub owner: Player,
}

impl Placement {
    pub fn new(archetype: Archetype, hex: Hex, owner: Player) -> Self {
        Self {
            archetype,
            q: hex.q,
            r: hex.r,
            owner,
        }
    }

    pub fn hex(&self) -> Hex {
        Hex::new(self.q, self.r)
    }
}

/// Board dimensions plus the armies on it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "unnamed")]
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub placements: Vec<Placement>,
}

fn unnamed() -> String {
    "unnamed".to_string()
}

impl Scenario {
    /// Build the game this scenario describes
    pub fn to_game_state(&self) -> Result<GameState> {
        GameState::initialize(self.width, self.height, &self.placements)
    }

    /// The standard opening: two marines, an assault and a sniper per side,
    /// facing each other across a 15x8 board.
    pub fn skirmish() -> Self {
        use Archetype::{Assault, Marine, Sniper};

        let army = |owner: Player, positions: [(i32, i32); 4]| {
            [Marine, Marine, Assault, Sniper]
                .into_iter()
                .zip(positions)
                .map(move |(archetype, (q, r))| Placement::new(archetype, Hex::new(q, r), owner))
        };

        let placements = army(Player::One, [(2, 2), (3, 3), (1, 4), (2, 5)])
            .chain(army(Player::Two, [(12, 2), (11, 3), (13, 4), (12, 5)]))
            .collect();

        Self {
            name: "skirmish".to_string(),
            width: 15,
            height: 8,
            placements,
        }
    }

    /// Parse from JSON text
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let scenario: Scenario = serde_json::from_str(content)?;
        Ok(scenario)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::skirmish()
    }
}
