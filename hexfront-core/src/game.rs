//! Game state and turn engine
//!
//! The engine is a small state machine driven by intents:
//!
//! ```text
//! Idle --select own unit--> Selected(Move) --move--> Selected(Attack) --attack--> Idle
//! ```
//!
//! Clicking the selected unit again deselects it, clicking another friendly
//! unit switches to it. Anything illegal is ignored and reported as
//! `Event::Ignored`; it never fails.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::combat::{self, AttackProfile, AttackReport};
use crate::dice::RandomSource;
use crate::error::{EngineError, Result};
use crate::hex::Hex;
use crate::index::UnitIndex;
use crate::scenario::Placement;
use crate::units::{Unit, UnitId};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player id, serialized as `1` or `2`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.number()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Sub-state of an activation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Move,
    Attack,
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameResult {
    Ongoing,
    Victory(Player),
    /// Both sides were wiped out
    Draw,
}

/// Player input, already mapped to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Select(Hex),
    SetPhase(Phase),
    Deselect,
    EndTurn,
}

/// What an intent did
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Event {
    Selected { unit: UnitId, at: Hex },
    Deselected,
    PhaseChanged(Phase),
    Moved { unit: UnitId, from: Hex, to: Hex, cost: u32 },
    Attacked(AttackReport),
    TurnEnded { next_player: Player, turn_number: u32 },
    /// The intent was not legal in the current state
    Ignored,
}

// ============================================================================
// GAME STATE
// ============================================================================

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    units: UnitIndex,

    current_player: Player,

    /// Increments each time play returns to player one
    turn_number: u32,

    /// Hex of the selected unit, always one of the current player's
    selection: Option<Hex>,
    phase: Phase,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Set up a game on a `width x height` board.
    ///
    /// Fails if the board is empty, a placement is off the board or on top of
    /// another, or either side has nothing to deploy.
    pub fn initialize(width: i32, height: i32, placements: &[Placement]) -> Result<Self> {
        let board = Board::new(width, height)?;
        Self::new(board, placements)
    }

    pub fn new(board: Board, placements: &[Placement]) -> Result<Self> {
        let mut units = UnitIndex::new();

        for (i, placement) in placements.iter().enumerate() {
            let hex = placement.hex();
            if !board.contains(hex) {
                return Err(EngineError::PlacementOutOfBounds {
                    hex,
                    width: board.width(),
                    height: board.height(),
                });
            }
            let unit = Unit::new(UnitId(i as u32), placement.archetype, placement.owner, hex);
            if units.insert(unit).is_err() {
                return Err(EngineError::OccupiedPlacement(hex));
            }
        }

        for player in [Player::One, Player::Two] {
            if units.count_for(player) == 0 {
                return Err(EngineError::MissingSide(player));
            }
        }

        tracing::debug!(
            "New game on {}x{} board with {} units",
            board.width(),
            board.height(),
            units.len()
        );

        Ok(Self {
            board,
            units,
            current_player: Player::One,
            turn_number: 1,
            selection: None,
            phase: Phase::Move,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn unit_at(&self, hex: Hex) -> Option<&Unit> {
        self.units.get(hex)
    }

    pub fn units(&self) -> &UnitIndex {
        &self.units
    }

    /// All living units, ordered by id
    pub fn all_units(&self) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.iter().collect();
        units.sort_by_key(|u| u.id());
        units
    }

    /// Living units of one side, ordered by id
    pub fn units_of(&self, player: Player) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.iter().filter(|u| u.owner() == player).collect();
        units.sort_by_key(|u| u.id());
        units
    }

    /// Currently selected unit
    pub fn selection(&self) -> Option<&Unit> {
        self.selection.and_then(|hex| self.units.get(hex))
    }

    /// Phase of the current activation; `None` when nothing is selected
    pub fn phase(&self) -> Option<Phase> {
        self.selection.map(|_| self.phase)
    }

    pub fn result(&self) -> GameResult {
        let one = self.units.count_for(Player::One);
        let two = self.units.count_for(Player::Two);
        match (one, two) {
            (0, 0) => GameResult::Draw,
            (0, _) => GameResult::Victory(Player::Two),
            (_, 0) => GameResult::Victory(Player::One),
            _ => GameResult::Ongoing,
        }
    }

    /// Winning player, if any. A mutual wipe-out is a draw and has no winner.
    pub fn winner(&self) -> Option<Player> {
        match self.result() {
            GameResult::Victory(player) => Some(player),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result() != GameResult::Ongoing
    }

    // ========================================================================
    // OVERLAY QUERIES
    // ========================================================================

    /// Hexes inside the unit's movement radius, excluding its own.
    /// Empty once the unit has moved.
    pub fn reachable_move_hexes(&self, unit: &Unit) -> Vec<Hex> {
        if unit.has_moved() {
            return Vec::new();
        }
        self.hexes_around(unit, unit.movement_remaining())
    }

    /// Hexes inside the unit's attack radius, excluding its own.
    /// Empty once the unit has attacked.
    pub fn reachable_attack_hexes(&self, unit: &Unit) -> Vec<Hex> {
        if unit.has_attacked() {
            return Vec::new();
        }
        self.hexes_around(unit, unit.attack_range())
    }

    fn hexes_around(&self, unit: &Unit, radius: u32) -> Vec<Hex> {
        let center = unit.position();
        self.board
            .coordinates_within(center, radius)
            .into_iter()
            .filter(|&h| h != center)
            .collect()
    }

    pub fn can_move(&self, unit: &Unit, target: Hex) -> bool {
        combat::can_move(&self.board, &self.units, unit, target)
    }

    pub fn can_attack(&self, unit: &Unit, target: Hex) -> bool {
        combat::can_attack(&self.units, unit, target)
    }

    /// Hit chance and damage `attacker` would have against `defender` now
    pub fn attack_profile(&self, attacker: &Unit, defender: &Unit) -> AttackProfile {
        combat::attack_profile(&self.board, &self.units, attacker, defender)
    }

    // ========================================================================
    // INTENTS
    // ========================================================================

    /// Apply any intent
    pub fn apply<R: RandomSource + ?Sized>(&mut self, intent: Intent, rng: &mut R) -> Event {
        match intent {
            Intent::Select(hex) => self.handle_select(hex, rng),
            Intent::SetPhase(phase) => self.set_phase(phase),
            Intent::Deselect => self.deselect(),
            Intent::EndTurn => self.end_turn(),
        }
    }

    /// Click on a hex: select, move, or attack depending on state
    pub fn handle_select<R: RandomSource + ?Sized>(&mut self, hex: Hex, rng: &mut R) -> Event {
        if self.is_over() {
            return Event::Ignored;
        }

        let clicked_own = self
            .units
            .get(hex)
            .filter(|u| u.owner() == self.current_player)
            .map(|u| u.id());

        let Some(selected) = self.selection else {
            return match clicked_own {
                Some(unit) => self.select(unit, hex),
                None => Event::Ignored,
            };
        };

        if hex == selected {
            return self.deselect();
        }
        if let Some(unit) = clicked_own {
            return self.select(unit, hex);
        }

        match self.phase {
            Phase::Move => self.try_move(selected, hex),
            Phase::Attack => self.try_attack(selected, hex, rng),
        }
    }

    /// Switch between move and attack for the selected unit
    pub fn set_phase(&mut self, phase: Phase) -> Event {
        if self.is_over() || self.selection.is_none() {
            return Event::Ignored;
        }
        self.phase = phase;
        tracing::debug!("{} switched to {:?} phase", self.current_player, phase);
        Event::PhaseChanged(phase)
    }

    pub fn deselect(&mut self) -> Event {
        if self.selection.take().is_none() {
            return Event::Ignored;
        }
        self.phase = Phase::Move;
        tracing::debug!("{} cleared selection", self.current_player);
        Event::Deselected
    }

    /// Refresh the current player's units and hand play to the opponent
    pub fn end_turn(&mut self) -> Event {
        if self.is_over() {
            return Event::Ignored;
        }

        let player = self.current_player;
        for unit in self.units.iter_mut().filter(|u| u.owner() == player) {
            unit.reset_for_new_turn();
        }

        self.selection = None;
        self.phase = Phase::Move;
        self.current_player = player.opponent();

        // Increment turn after player two's turn
        if self.current_player == Player::One {
            self.turn_number += 1;
        }

        tracing::debug!(
            "{} ended turn; {} to act on turn {}",
            player,
            self.current_player,
            self.turn_number
        );

        Event::TurnEnded {
            next_player: self.current_player,
            turn_number: self.turn_number,
        }
    }

    /// Take a unit off the board. Clears the selection if it was that unit.
    pub fn remove_unit(&mut self, hex: Hex) -> Option<Unit> {
        let removed = self.units.remove(hex)?;
        if self.selection == Some(hex) {
            self.selection = None;
            self.phase = Phase::Move;
        }
        Some(removed)
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    fn select(&mut self, unit: UnitId, at: Hex) -> Event {
        self.selection = Some(at);
        self.phase = Phase::Move;
        tracing::debug!("{} selected unit {} at {}", self.current_player, unit, at);
        Event::Selected { unit, at }
    }

    fn try_move(&mut self, from: Hex, to: Hex) -> Event {
        let Some(unit) = self.units.get(from) else {
            return Event::Ignored;
        };
        if !self.can_move(unit, to) {
            return Event::Ignored;
        }

        let id = unit.id();
        let cost = from.distance_to(to);
        if !self.units.relocate(from, to, cost) {
            return Event::Ignored;
        }

        self.selection = Some(to);
        self.phase = Phase::Attack;
        tracing::debug!("Unit {} moved {} -> {} (cost {})", id, from, to, cost);

        Event::Moved {
            unit: id,
            from,
            to,
            cost,
        }
    }

    fn try_attack<R: RandomSource + ?Sized>(&mut self, from: Hex, target: Hex, rng: &mut R) -> Event {
        let Some(unit) = self.units.get(from) else {
            return Event::Ignored;
        };
        if !self.can_attack(unit, target) {
            return Event::Ignored;
        }

        let Some(report) = combat::resolve_attack(&self.board, &mut self.units, from, target, rng)
        else {
            return Event::Ignored;
        };

        self.selection = None;
        self.phase = Phase::Move;

        tracing::debug!(
            "Unit {} attacked {} at {}: {:?} (roll {:.3} vs {:.3}, damage {})",
            report.attacker,
            report.defender,
            target,
            report.outcome,
            report.roll,
            report.hit_chance,
            report.damage
        );
        if report.defender_destroyed {
            tracing::debug!("Unit {} destroyed", report.defender);
        }
        match self.result() {
            GameResult::Victory(player) => tracing::info!("{} wins on turn {}", player, self.turn_number),
            GameResult::Draw => tracing::info!("Both sides eliminated on turn {}", self.turn_number),
            GameResult::Ongoing => {}
        }

        Event::Attacked(report)
    }

    // ========================================================================
    // SNAPSHOT
    // ========================================================================

    /// Serializable read model for presentation layers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current_player: self.current_player,
            turn_number: self.turn_number,
            selection: self.selection().map(|u| u.id()),
            phase: self.phase(),
            result: self.result(),
            units: self.all_units().into_iter().cloned().collect(),
        }
    }
}

/// Point-in-time copy of the visible game state
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub current_player: Player,
    pub turn_number: u32,
    pub selection: Option<UnitId>,
    pub phase: Option<Phase>,
    pub result: GameResult,
    pub units: Vec<Unit>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackOutcome;
    use crate::dice::FixedRolls;
    use crate::units::Archetype;

    const HIT: f64 = 0.0;
    const MISS: f64 = 0.99;

    fn place(archetype: Archetype, q: i32, r: i32, owner: Player) -> Placement {
        Placement::new(archetype, Hex::new(q, r), owner)
    }

    /// Marine vs marine two hexes apart, plus a spare friendly marine
    fn duel() -> GameState {
        GameState::initialize(
            8,
            6,
            &[
                place(Archetype::Marine, 1, 1, Player::One),
                place(Archetype::Marine, 3, 1, Player::Two),
                place(Archetype::Marine, 1, 3, Player::One),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_game_creation() {
        let game = duel();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.result(), GameResult::Ongoing);
        assert!(game.selection().is_none());
        assert_eq!(game.phase(), None);
        assert_eq!(game.all_units().len(), 3);
        assert_eq!(game.units_of(Player::One).len(), 2);
    }

    #[test]
    fn test_initialize_rejects_bad_setup() {
        let off_board = GameState::initialize(
            4,
            4,
            &[
                place(Archetype::Marine, 4, 0, Player::One),
                place(Archetype::Marine, 1, 1, Player::Two),
            ],
        );
        assert!(matches!(off_board, Err(EngineError::PlacementOutOfBounds { .. })));

        let stacked = GameState::initialize(
            4,
            4,
            &[
                place(Archetype::Marine, 1, 1, Player::One),
                place(Archetype::Sniper, 1, 1, Player::Two),
            ],
        );
        assert_eq!(stacked.unwrap_err(), EngineError::OccupiedPlacement(Hex::new(1, 1)));

        let one_sided = GameState::initialize(4, 4, &[place(Archetype::Marine, 1, 1, Player::One)]);
        assert_eq!(one_sided.unwrap_err(), EngineError::MissingSide(Player::Two));

        let empty_board = GameState::initialize(0, 4, &[]);
        assert!(matches!(empty_board, Err(EngineError::InvalidBoardSize { .. })));
    }

    #[test]
    fn test_select_own_unit_only() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);

        assert_eq!(game.handle_select(Hex::new(3, 1), &mut rng), Event::Ignored);
        assert_eq!(game.handle_select(Hex::new(5, 5), &mut rng), Event::Ignored);
        assert!(game.selection().is_none());

        let event = game.handle_select(Hex::new(1, 1), &mut rng);
        assert_eq!(event, Event::Selected { unit: UnitId(0), at: Hex::new(1, 1) });
        assert_eq!(game.phase(), Some(Phase::Move));
    }

    #[test]
    fn test_reselect_deselects() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);
        assert_eq!(game.handle_select(Hex::new(1, 1), &mut rng), Event::Deselected);
        assert!(game.selection().is_none());
    }

    #[test]
    fn test_switch_selection_resets_phase() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);
        game.set_phase(Phase::Attack);

        let event = game.handle_select(Hex::new(1, 3), &mut rng);
        assert_eq!(event, Event::Selected { unit: UnitId(2), at: Hex::new(1, 3) });
        assert_eq!(game.phase(), Some(Phase::Move));
    }

    #[test]
    fn test_move_then_attack() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);

        let event = game.handle_select(Hex::new(2, 2), &mut rng);
        assert_eq!(
            event,
            Event::Moved { unit: UnitId(0), from: Hex::new(1, 1), to: Hex::new(2, 2), cost: 2 }
        );
        assert!(game.unit_at(Hex::new(1, 1)).is_none());
        let moved = game.unit_at(Hex::new(2, 2)).unwrap();
        assert!(moved.has_moved());
        assert_eq!(moved.movement_remaining(), 1);
        assert_eq!(game.selection().map(|u| u.id()), Some(UnitId(0)));
        assert_eq!(game.phase(), Some(Phase::Attack));

        let Event::Attacked(report) = game.handle_select(Hex::new(3, 1), &mut rng) else {
            panic!("expected attack");
        };
        assert_eq!(report.outcome, AttackOutcome::Hit);
        assert_eq!(game.unit_at(Hex::new(3, 1)).unwrap().health(), 60);
        assert!(game.selection().is_none());
        assert_eq!(game.phase(), None);
    }

    #[test]
    fn test_move_too_far_ignored() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);

        assert_eq!(game.handle_select(Hex::new(5, 1), &mut rng), Event::Ignored);
        assert_eq!(game.phase(), Some(Phase::Move));
        assert!(!game.unit_at(Hex::new(1, 1)).unwrap().has_moved());
    }

    #[test]
    fn test_move_phase_does_not_attack() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);
        assert_eq!(game.handle_select(Hex::new(3, 1), &mut rng), Event::Ignored);
        assert_eq!(game.unit_at(Hex::new(3, 1)).unwrap().health(), 80);
    }

    #[test]
    fn test_attack_without_moving() {
        let mut game = duel();
        let mut rng = FixedRolls::always(MISS);
        game.handle_select(Hex::new(1, 1), &mut rng);
        assert_eq!(game.set_phase(Phase::Attack), Event::PhaseChanged(Phase::Attack));

        let Event::Attacked(report) = game.handle_select(Hex::new(3, 1), &mut rng) else {
            panic!("expected attack");
        };
        assert_eq!(report.outcome, AttackOutcome::Miss);
        assert_eq!(game.unit_at(Hex::new(3, 1)).unwrap().health(), 80);
        assert!(game.unit_at(Hex::new(1, 1)).unwrap().has_attacked());

        // The spent attacker cannot fire again this turn
        game.handle_select(Hex::new(1, 1), &mut rng);
        game.set_phase(Phase::Attack);
        assert_eq!(game.handle_select(Hex::new(3, 1), &mut rng), Event::Ignored);
    }

    #[test]
    fn test_attack_empty_hex_ignored() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);
        game.set_phase(Phase::Attack);
        assert_eq!(game.handle_select(Hex::new(2, 1), &mut rng), Event::Ignored);
        assert_eq!(game.phase(), Some(Phase::Attack));
    }

    #[test]
    fn test_set_phase_requires_selection() {
        let mut game = duel();
        assert_eq!(game.set_phase(Phase::Attack), Event::Ignored);
        assert_eq!(game.deselect(), Event::Ignored);
    }

    #[test]
    fn test_turn_cycling() {
        let mut game = duel();
        assert_eq!(
            game.end_turn(),
            Event::TurnEnded { next_player: Player::Two, turn_number: 1 }
        );
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.turn_number(), 1);

        game.end_turn();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.turn_number(), 2);
    }

    #[test]
    fn test_end_turn_refreshes_current_player() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 1), &mut rng);
        game.handle_select(Hex::new(2, 1), &mut rng);
        assert!(game.unit_at(Hex::new(2, 1)).unwrap().has_moved());

        game.end_turn();
        assert!(game.selection().is_none());
        let unit = game.unit_at(Hex::new(2, 1)).unwrap();
        assert!(!unit.has_moved());
        assert_eq!(unit.movement_remaining(), 3);
    }

    #[test]
    fn test_kill_decides_game() {
        let mut game = GameState::initialize(
            6,
            6,
            &[
                place(Archetype::Artillery, 0, 0, Player::One),
                place(Archetype::Sniper, 3, 0, Player::Two),
            ],
        )
        .unwrap();
        let mut rng = FixedRolls::always(HIT);

        game.handle_select(Hex::new(0, 0), &mut rng);
        game.set_phase(Phase::Attack);
        let Event::Attacked(report) = game.handle_select(Hex::new(3, 0), &mut rng) else {
            panic!("expected attack");
        };
        assert!(report.defender_destroyed);
        assert!(game.unit_at(Hex::new(3, 0)).is_none());
        assert_eq!(game.winner(), Some(Player::One));

        // Decided games accept no further intents
        assert_eq!(game.end_turn(), Event::Ignored);
        assert_eq!(game.handle_select(Hex::new(0, 0), &mut rng), Event::Ignored);
    }

    #[test]
    fn test_winner_after_removal() {
        let mut game = duel();
        assert_eq!(game.winner(), None);

        game.remove_unit(Hex::new(3, 1));
        assert_eq!(game.winner(), Some(Player::One));

        game.remove_unit(Hex::new(1, 1));
        game.remove_unit(Hex::new(1, 3));
        assert_eq!(game.result(), GameResult::Draw);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 3), &mut rng);
        game.remove_unit(Hex::new(1, 3));
        assert!(game.selection().is_none());
        assert_eq!(game.phase(), None);
    }

    #[test]
    fn test_reachable_hexes() {
        let game = duel();
        let marine = game.unit_at(Hex::new(3, 1)).unwrap();

        let moves = game.reachable_move_hexes(marine);
        assert!(!moves.contains(&Hex::new(3, 1)));
        assert!(moves.iter().all(|&h| Hex::new(3, 1).distance_to(h) <= 3));
        assert_eq!(moves.len(), game.board().coordinates_within(Hex::new(3, 1), 3).len() - 1);

        let attacks = game.reachable_attack_hexes(marine);
        assert!(attacks.contains(&Hex::new(1, 1)));
        assert!(attacks.iter().all(|&h| Hex::new(3, 1).distance_to(h) <= 2));
    }

    #[test]
    fn test_reachable_empty_after_acting() {
        let mut game = duel();
        let mut rng = FixedRolls::always(MISS);
        game.handle_select(Hex::new(1, 1), &mut rng);
        game.handle_select(Hex::new(2, 1), &mut rng);
        game.handle_select(Hex::new(3, 1), &mut rng);

        let unit = game.unit_at(Hex::new(2, 1)).unwrap();
        assert!(game.reachable_move_hexes(unit).is_empty());
        assert!(game.reachable_attack_hexes(unit).is_empty());
    }

    #[test]
    fn test_apply_dispatches() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        assert!(matches!(
            game.apply(Intent::Select(Hex::new(1, 1)), &mut rng),
            Event::Selected { .. }
        ));
        assert_eq!(game.apply(Intent::Deselect, &mut rng), Event::Deselected);
        assert!(matches!(game.apply(Intent::EndTurn, &mut rng), Event::TurnEnded { .. }));
    }

    #[test]
    fn test_player_serde() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Player>("1").unwrap(), Player::One);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }

    #[test]
    fn test_snapshot() {
        let mut game = duel();
        let mut rng = FixedRolls::always(HIT);
        game.handle_select(Hex::new(1, 3), &mut rng);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.selection, Some(UnitId(2)));
        assert_eq!(snapshot.phase, Some(Phase::Move));
        assert_eq!(snapshot.units.len(), 3);
        assert_eq!(snapshot.units[0].id(), UnitId(0));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["current_player"], 1);
        assert_eq!(json["units"][1]["archetype"], "Marine");
    }
}
