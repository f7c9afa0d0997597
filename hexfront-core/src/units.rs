//! Unit archetypes and per-instance unit state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::game::Player;
use crate::hex::Hex;

/// Unit archetype tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(alias = "MA")]
    Marine,
    #[serde(alias = "AM", alias = "AssaultMarine")]
    Assault,
    #[serde(alias = "SN")]
    Sniper,
    #[serde(alias = "AR")]
    Artillery,
    #[serde(alias = "T")]
    Tank,
    #[serde(alias = "AV", alias = "AntiVehicleMarine")]
    AntiVehicle,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Marine,
        Archetype::Assault,
        Archetype::Sniper,
        Archetype::Artillery,
        Archetype::Tank,
        Archetype::AntiVehicle,
    ];

    /// Stat template for this archetype
    pub fn spec(self) -> &'static UnitType {
        &UNIT_TYPES[self as usize]
    }

    /// Short code used on unit markers
    pub fn code(self) -> &'static str {
        self.spec().code
    }

    /// Full name kept for scenario files, matching the serde aliases
    fn long_alias(self) -> Option<&'static str> {
        match self {
            Archetype::Assault => Some("AssaultMarine"),
            Archetype::AntiVehicle => Some("AntiVehicleMarine"),
            _ => None,
        }
    }

    /// Tanks and artillery are vehicles
    pub fn is_vehicle(self) -> bool {
        matches!(self, Archetype::Tank | Archetype::Artillery)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for Archetype {
    type Err = EngineError;

    /// Accepts the display name, the short code or a long alias, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Archetype::ALL
            .into_iter()
            .find(|a| {
                let spec = a.spec();
                spec.name.eq_ignore_ascii_case(wanted)
                    || spec.code.eq_ignore_ascii_case(wanted)
                    || a.long_alias().is_some_and(|alias| alias.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| EngineError::UnknownArchetype(s.to_string()))
    }
}

/// Immutable stat template shared by every unit of one archetype
#[derive(Clone, Debug, Serialize)]
pub struct UnitType {
    pub archetype: Archetype,
    pub code: &'static str,
    pub name: &'static str,
    pub max_health: i32,
    pub damage: i32,
    pub max_movement: u32,
    pub attack_range: u32,
}

impl UnitType {
    const fn new(
        archetype: Archetype,
        code: &'static str,
        name: &'static str,
        max_health: i32,
        damage: i32,
        max_movement: u32,
        attack_range: u32,
    ) -> Self {
        Self {
            archetype,
            code,
            name,
            max_health,
            damage,
            max_movement,
            attack_range,
        }
    }
}

/// All archetypes, indexed by `Archetype as usize`
pub static UNIT_TYPES: [UnitType; 6] = [
    UnitType::new(Archetype::Marine, "MA", "Marine", 80, 20, 3, 2),
    UnitType::new(Archetype::Assault, "AM", "Assault", 120, 35, 4, 1),
    UnitType::new(Archetype::Sniper, "SN", "Sniper", 60, 40, 2, 3),
    UnitType::new(Archetype::Artillery, "AR", "Artillery", 50, 60, 1, 4),
    UnitType::new(Archetype::Tank, "T", "Tank", 150, 45, 2, 2),
    UnitType::new(Archetype::AntiVehicle, "AV", "AntiVehicle", 70, 30, 3, 2),
];

/// Unit identifier, assigned in placement order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit on the board
///
/// `position` is only changed through `GameState`, which keeps the
/// hex-to-unit index in step with it.
#[derive(Clone, Debug, Serialize)]
pub struct Unit {
    id: UnitId,
    archetype: Archetype,
    owner: Player,
    position: Hex,
    health: i32,
    movement_remaining: u32,
    has_moved: bool,
    has_attacked: bool,
}

impl Unit {
    /// Fresh unit at full health and movement
    pub fn new(id: UnitId, archetype: Archetype, owner: Player, position: Hex) -> Self {
        let spec = archetype.spec();
        Self {
            id,
            archetype,
            owner,
            position,
            health: spec.max_health,
            movement_remaining: spec.max_movement,
            has_moved: false,
            has_attacked: false,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn spec(&self) -> &'static UnitType {
        self.archetype.spec()
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn position(&self) -> Hex {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.spec().max_health
    }

    pub fn damage(&self) -> i32 {
        self.spec().damage
    }

    pub fn movement_remaining(&self) -> u32 {
        self.movement_remaining
    }

    pub fn attack_range(&self) -> u32 {
        self.spec().attack_range
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn has_attacked(&self) -> bool {
        self.has_attacked
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Restore movement and actions at the start of the owner's turn
    pub fn reset_for_new_turn(&mut self) {
        self.movement_remaining = self.spec().max_movement;
        self.has_moved = false;
        self.has_attacked = false;
    }

    /// Spend `cost` movement and relocate. Only `GameState` may call this,
    /// since the unit index has to be re-keyed at the same time.
    pub(crate) fn relocate(&mut self, to: Hex, cost: u32) {
        self.movement_remaining = self.movement_remaining.saturating_sub(cost);
        self.position = to;
        self.has_moved = true;
    }

    pub(crate) fn mark_attacked(&mut self) {
        self.has_attacked = true;
    }

    /// Apply damage, returning true if the unit died
    pub(crate) fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        !self.is_alive()
    }
}
