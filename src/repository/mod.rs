//! Storage collaborator contracts.
//!
//! The engine never talks to storage mid-turn. `BattleService` loads a battle
//! and every creature it references, resolves the action, then writes back.

mod memory;

pub use memory::{InMemoryBattleRepo, InMemoryCreatureRepo};

use crate::battle::state::{BattleId, BattleState};
use crate::creature::{Creature, CreatureId};
use crate::errors::RepositoryResult;

/// Repository for creature records.
pub trait CreatureRepository: Send + Sync {
    fn load(&self, id: &CreatureId) -> RepositoryResult<Option<Creature>>;

    fn save(&self, creature: &Creature) -> RepositoryResult<()>;

    fn exists(&self, id: &CreatureId) -> bool;
}

/// Repository for battle records.
///
/// Implementations must make a `load` followed by a `save` for the same id
/// atomic with respect to other writers of that id, or callers must serialize
/// them (as `BattleService` does).
pub trait BattleRepository: Send + Sync {
    fn load(&self, id: &BattleId) -> RepositoryResult<Option<BattleState>>;

    fn save(&self, state: &BattleState) -> RepositoryResult<()>;

    fn exists(&self, id: &BattleId) -> bool;

    /// List all stored battle ids
    fn list_ids(&self) -> RepositoryResult<Vec<BattleId>> {
        Ok(vec![])
    }
}
