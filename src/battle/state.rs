use crate::creature::CreatureId;
use crate::errors::{RepositoryError, RepositoryResult};
use schema::StatType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(pub String);

impl BattleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BattleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One of the two opposing sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Side1,
    Side2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Side1, Side::Side2];

    pub fn index(self) -> usize {
        match self {
            Side::Side1 => 0,
            Side::Side2 => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Side1 => Side::Side2,
            Side::Side2 => Side::Side1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Side1 => write!(f, "Side 1"),
            Side::Side2 => write!(f, "Side 2"),
        }
    }
}

/// Who picks replacements for a side after a faint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Waits for an explicit switch action
    Human,
    /// Sends out the first available reserve immediately
    Ai,
}

/// State machine phase of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A move (or voluntary switch) may be submitted by `to_move`.
    Active { to_move: Side },
    /// `side` must send out a reserve. `queued` is a second side that also
    /// lost its active in the same action and selects next.
    Selecting { side: Side, queued: Option<Side> },
    /// Absorbing.
    Won { winner: Side },
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won { .. })
    }

    pub fn to_move(&self) -> Option<Side> {
        match self {
            Phase::Active { to_move } => Some(*to_move),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Active { to_move } => write!(f, "active ({} to move)", to_move),
            Phase::Selecting { side, .. } => write!(f, "waiting for {} to select", side),
            Phase::Won { winner } => write!(f, "won by {}", winner),
        }
    }
}

/// Status condition on an active creature. Freeze and sleep carry the number
/// of turns remaining; the others last until the creature is switched out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    Poison,
    Burn,
    Paralysis,
    Freeze(u8),
    Sleep(u8),
}

/// Stat stages of the active creature, each in [-6, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub speed: i8,
}

impl StatStages {
    pub fn get(&self, stat: StatType) -> i8 {
        match stat {
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: StatType, value: i8) {
        let value = value.clamp(-6, 6);
        match stat {
            StatType::Attack => self.attack = value,
            StatType::Defense => self.defense = value,
            StatType::Speed => self.speed = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideState {
    pub controller: Controller,
    pub roster: Vec<CreatureId>,
    pub active: CreatureId,
    pub active_hp: u16,
    pub fainted: Vec<CreatureId>,
    pub stat_stages: StatStages,
    pub status: Option<StatusCondition>,
}

impl SideState {
    pub fn is_fainted(&self, id: &CreatureId) -> bool {
        self.fainted.contains(id)
    }

    /// Roster members that are neither active nor fainted, in roster order.
    pub fn reserves(&self) -> impl Iterator<Item = &CreatureId> {
        self.roster
            .iter()
            .filter(move |id| **id != self.active && !self.is_fainted(id))
    }

    pub fn has_reserves(&self) -> bool {
        self.reserves().next().is_some()
    }

    pub fn all_fainted(&self) -> bool {
        self.roster.iter().all(|id| self.is_fainted(id))
    }
}

/// A level-up that happened because of an award during the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpEvent {
    pub creature_id: CreatureId,
    pub creature_name: String,
    pub old_level: u8,
    pub new_level: u8,
    pub xp_gained: u32,
}

/// The durable battle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub battle_id: BattleId,
    pub sides: [SideState; 2],
    pub phase: Phase,
    pub log: Vec<String>,
    pub level_ups: Vec<LevelUpEvent>,
}

impl BattleState {
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side.index()]
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Won { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub fn to_postcard(&self) -> RepositoryResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|e| RepositoryError::Codec(e.to_string()))
    }

    pub fn from_postcard(bytes: &[u8]) -> RepositoryResult<Self> {
        postcard::from_bytes(bytes).map_err(|e| RepositoryError::Codec(e.to_string()))
    }

    pub fn to_json(&self) -> RepositoryResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RepositoryError::Codec(e.to_string()))
    }

    pub fn from_json(source: &str) -> RepositoryResult<Self> {
        serde_json::from_str(source).map_err(|e| RepositoryError::Codec(e.to_string()))
    }
}
