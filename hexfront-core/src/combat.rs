//! Movement/attack legality and attack resolution
//!
//! All combat policy lives here. Archetype-specific rules are explicit
//! branches on the archetype tag:
//! - Sniper suppression: a sniper firing at a target that stands next to one
//!   of its own side's Assault units hits half as often.
//! - Anti-vehicle: an AntiVehicle unit deals double damage to Tanks and
//!   Artillery at a flat 95% hit chance, replacing any suppression penalty.

use serde::Serialize;

use crate::board::Board;
use crate::dice::RandomSource;
use crate::hex::Hex;
use crate::index::UnitIndex;
use crate::units::{Archetype, Unit, UnitId};

// ============================================================================
// CONSTANTS
// ============================================================================

pub const BASE_HIT_CHANCE: f64 = 0.85;

/// Multiplier applied to a suppressed sniper's hit chance
pub const SUPPRESSION_FACTOR: f64 = 0.5;

pub const ANTI_VEHICLE_HIT_CHANCE: f64 = 0.95;
pub const ANTI_VEHICLE_DAMAGE_FACTOR: f64 = 2.0;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AttackOutcome {
    Hit,
    Miss,
}

/// Hit chance and damage for one attacker/defender pairing
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AttackProfile {
    pub hit_chance: f64,
    pub damage: i32,
    pub suppressed: bool,
    pub anti_vehicle: bool,
}

/// Everything that happened in one resolved attack
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttackReport {
    pub attacker: UnitId,
    pub defender: UnitId,
    pub target: Hex,
    pub hit_chance: f64,
    pub damage: i32,
    pub roll: f64,
    pub outcome: AttackOutcome,
    /// Defender health after the attack (may be negative)
    pub defender_health: i32,
    pub defender_destroyed: bool,
}

// ============================================================================
// LEGALITY
// ============================================================================

/// A unit may make one move per turn, to any empty board hex within its
/// remaining movement.
pub fn can_move(board: &Board, units: &UnitIndex, unit: &Unit, target: Hex) -> bool {
    if unit.has_moved() {
        return false;
    }
    if !board.contains(target) || units.is_occupied(target) {
        return false;
    }
    unit.position().distance_to(target) <= unit.movement_remaining()
}

/// A unit may attack once per turn, any enemy within its attack range.
pub fn can_attack(units: &UnitIndex, unit: &Unit, target: Hex) -> bool {
    if unit.has_attacked() {
        return false;
    }
    match units.get(target) {
        Some(defender) if defender.owner() != unit.owner() => {
            unit.position().distance_to(target) <= unit.attack_range()
        }
        _ => false,
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Compute hit chance and damage for `attacker` firing on `defender`
pub fn attack_profile(
    board: &Board,
    units: &UnitIndex,
    attacker: &Unit,
    defender: &Unit,
) -> AttackProfile {
    let mut hit_chance = BASE_HIT_CHANCE;
    let mut damage = attacker.damage();

    let suppressed = attacker.archetype() == Archetype::Sniper
        && defender.owner() != attacker.owner()
        && is_screened_by_assault(board, units, attacker, defender);
    if suppressed {
        hit_chance *= SUPPRESSION_FACTOR;
    }

    let anti_vehicle =
        attacker.archetype() == Archetype::AntiVehicle && defender.archetype().is_vehicle();
    if anti_vehicle {
        damage = (damage as f64 * ANTI_VEHICLE_DAMAGE_FACTOR) as i32;
        hit_chance = ANTI_VEHICLE_HIT_CHANCE;
    }

    AttackProfile {
        hit_chance,
        damage,
        suppressed,
        anti_vehicle,
    }
}

/// Does an Assault unit hostile to the attacker stand next to the defender?
fn is_screened_by_assault(board: &Board, units: &UnitIndex, attacker: &Unit, defender: &Unit) -> bool {
    board.neighbors(defender.position()).any(|hex| {
        units.get(hex).is_some_and(|neighbor| {
            neighbor.archetype() == Archetype::Assault && neighbor.owner() != attacker.owner()
        })
    })
}

/// Resolve an attack from the unit at `from` on the unit at `target`.
///
/// Legality is the caller's job (see `can_attack`); this returns `None` only
/// when either hex is empty. The attacker's action is spent on hit or miss,
/// and a defender brought to zero health is removed from the index before
/// returning.
pub fn resolve_attack<R: RandomSource + ?Sized>(
    board: &Board,
    units: &mut UnitIndex,
    from: Hex,
    target: Hex,
    rng: &mut R,
) -> Option<AttackReport> {
    let attacker = units.get(from)?;
    let defender = units.get(target)?;

    let profile = attack_profile(board, units, attacker, defender);
    let attacker_id = attacker.id();
    let defender_id = defender.id();

    let roll = rng.roll();
    let outcome = if roll <= profile.hit_chance {
        AttackOutcome::Hit
    } else {
        AttackOutcome::Miss
    };

    if let Some(attacker) = units.get_mut(from) {
        attacker.mark_attacked();
    }

    let mut defender_destroyed = false;
    let mut defender_health = 0;
    if let Some(defender) = units.get_mut(target) {
        if outcome == AttackOutcome::Hit {
            defender_destroyed = defender.take_damage(profile.damage);
        }
        defender_health = defender.health();
    }
    if defender_destroyed {
        units.remove(target);
    }

    Some(AttackReport {
        attacker: attacker_id,
        defender: defender_id,
        target,
        hit_chance: profile.hit_chance,
        damage: profile.damage,
        roll,
        outcome,
        defender_health,
        defender_destroyed,
    })
}

// ============================================================================
// TESTS
// ============================================================================
