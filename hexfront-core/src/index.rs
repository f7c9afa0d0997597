//! Hex -> unit index

use rustc_hash::FxHashMap;

use crate::game::Player;
use crate::hex::Hex;
use crate::units::Unit;

/// Sparse map from hex to the single unit standing on it.
///
/// A unit's stored position always equals the key it sits under; `relocate`
/// is the only way to change a position and re-keys in one step.
#[derive(Clone, Debug, Default)]
pub struct UnitIndex {
    units: FxHashMap<Hex, Unit>,
}

impl UnitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hex: Hex) -> Option<&Unit> {
        self.units.get(&hex)
    }

    pub(crate) fn get_mut(&mut self, hex: Hex) -> Option<&mut Unit> {
        self.units.get_mut(&hex)
    }

    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.units.contains_key(&hex)
    }

    /// Place a unit under its own position. Returns the unit back if the
    /// hex is already taken.
    pub(crate) fn insert(&mut self, unit: Unit) -> Result<(), Unit> {
        let hex = unit.position();
        if self.units.contains_key(&hex) {
            return Err(unit);
        }
        self.units.insert(hex, unit);
        Ok(())
    }

    pub(crate) fn remove(&mut self, hex: Hex) -> Option<Unit> {
        self.units.remove(&hex)
    }

    /// Move the unit at `from` to the empty hex `to`, spending `cost`
    /// movement. Returns false and changes nothing if `from` is empty or
    /// `to` is occupied.
    pub(crate) fn relocate(&mut self, from: Hex, to: Hex, cost: u32) -> bool {
        if from == to || self.units.contains_key(&to) {
            return false;
        }
        let Some(mut unit) = self.units.remove(&from) else {
            return false;
        };
        unit.relocate(to, cost);
        self.units.insert(to, unit);
        true
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate units in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.units.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> + '_ {
        self.units.values_mut()
    }

    pub fn count_for(&self, player: Player) -> usize {
        self.units.values().filter(|u| u.owner() == player).count()
    }
}
