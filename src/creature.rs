use crate::errors::{BattleResult, NotFoundError};
use schema::{CreatureType, MoveData};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub String);

impl CreatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CreatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// A creature record as held by storage.
///
/// Level is always the XP table lookup of `xp`; stats only change through a
/// level transition (see `progression::leveling`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub types: Vec<CreatureType>,
    pub stats: BaseStats,
    pub moves: Vec<MoveData>,
    pub level: u8,
    pub xp: u32,
    #[serde(default)]
    pub description: String,
    /// Opaque to the engine.
    #[serde(default)]
    pub portrait: Option<String>,
}

impl Creature {
    /// Create a level 1 creature with no experience.
    pub fn new(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        types: Vec<CreatureType>,
        stats: BaseStats,
        moves: Vec<MoveData>,
    ) -> Self {
        Creature {
            id: id.into(),
            name: name.into(),
            types,
            stats,
            moves,
            level: 1,
            xp: 0,
            description: String::new(),
            portrait: None,
        }
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }
}

impl From<String> for CreatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The creature records a battle references, materialized up front so turn
/// resolution never reaches back into storage.
#[derive(Debug, Clone, Default)]
pub struct CreatureBook {
    creatures: HashMap<CreatureId, Creature>,
}

impl CreatureBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_creatures(creatures: impl IntoIterator<Item = Creature>) -> Self {
        let mut book = Self::new();
        for creature in creatures {
            book.insert(creature);
        }
        book
    }

    pub fn insert(&mut self, creature: Creature) {
        self.creatures.insert(creature.id.clone(), creature);
    }

    pub fn get(&self, id: &CreatureId) -> BattleResult<&Creature> {
        self.creatures
            .get(id)
            .ok_or_else(|| NotFoundError::Creature(id.clone()).into())
    }

    pub fn contains(&self, id: &CreatureId) -> bool {
        self.creatures.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}
