//! In-memory repositories for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::battle::state::{BattleId, BattleState};
use crate::creature::{Creature, CreatureId};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BattleRepository, CreatureRepository};

pub struct InMemoryCreatureRepo {
    creatures: RwLock<HashMap<CreatureId, Creature>>,
}

impl InMemoryCreatureRepo {
    pub fn new() -> Self {
        Self {
            creatures: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_creatures(creatures: impl IntoIterator<Item = Creature>) -> Self {
        let map = creatures
            .into_iter()
            .map(|creature| (creature.id.clone(), creature))
            .collect();
        Self {
            creatures: RwLock::new(map),
        }
    }

    pub fn remove(&self, id: &CreatureId) -> RepositoryResult<Option<Creature>> {
        let mut creatures = self
            .creatures
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(creatures.remove(id))
    }
}

impl Default for InMemoryCreatureRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatureRepository for InMemoryCreatureRepo {
    fn load(&self, id: &CreatureId) -> RepositoryResult<Option<Creature>> {
        let creatures = self
            .creatures
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(creatures.get(id).cloned())
    }

    fn save(&self, creature: &Creature) -> RepositoryResult<()> {
        let mut creatures = self
            .creatures
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        creatures.insert(creature.id.clone(), creature.clone());
        Ok(())
    }

    fn exists(&self, id: &CreatureId) -> bool {
        self.creatures
            .read()
            .map(|creatures| creatures.contains_key(id))
            .unwrap_or(false)
    }
}

/// Stores battles as postcard-encoded records, so everything that goes in has
/// passed through the durable format.
pub struct InMemoryBattleRepo {
    battles: RwLock<HashMap<BattleId, Vec<u8>>>,
}

impl InMemoryBattleRepo {
    pub fn new() -> Self {
        Self {
            battles: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBattleRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRepository for InMemoryBattleRepo {
    fn load(&self, id: &BattleId) -> RepositoryResult<Option<BattleState>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles
            .get(id)
            .map(|bytes| BattleState::from_postcard(bytes))
            .transpose()
    }

    fn save(&self, state: &BattleState) -> RepositoryResult<()> {
        let bytes = state.to_postcard()?;
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.insert(state.battle_id.clone(), bytes);
        tracing::debug!("Saved battle[{}]", state.battle_id);
        Ok(())
    }

    fn exists(&self, id: &BattleId) -> bool {
        self.battles
            .read()
            .map(|battles| battles.contains_key(id))
            .unwrap_or(false)
    }

    fn list_ids(&self) -> RepositoryResult<Vec<BattleId>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<BattleId> = battles.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::engine::{create_battle, SideSetup};
    use crate::creature::{BaseStats, CreatureBook};
    use pretty_assertions::assert_eq;
    use schema::{CreatureType, MoveData};

    fn creature(id: &str) -> Creature {
        Creature::new(
            id,
            id,
            vec![CreatureType::Normal],
            BaseStats {
                hp: 50,
                attack: 50,
                defense: 50,
                speed: 50,
            },
            vec![MoveData::new("Tackle", CreatureType::Normal, 40, 100)],
        )
    }

    fn battle(id: &str, book: &CreatureBook) -> BattleState {
        create_battle(
            BattleId::from(id),
            SideSetup::human(vec!["a".into()]),
            SideSetup::ai(vec!["b".into()]),
            book,
        )
        .expect("valid setup")
    }

    #[test]
    fn test_battle_repo_round_trips_and_lists_sorted_ids() {
        let book = CreatureBook::from_creatures(vec![creature("a"), creature("b")]);
        let repo = InMemoryBattleRepo::new();
        assert_eq!(repo.list_ids(), Ok(vec![]));

        let second = battle("battle-2", &book);
        repo.save(&second).expect("save");
        repo.save(&battle("battle-1", &book)).expect("save");

        assert_eq!(
            repo.list_ids(),
            Ok(vec![BattleId::from("battle-1"), BattleId::from("battle-2")])
        );
        assert_eq!(repo.load(&BattleId::from("battle-2")), Ok(Some(second)));
        assert!(repo.exists(&BattleId::from("battle-1")));
        assert_eq!(repo.load(&BattleId::from("battle-3")), Ok(None));
    }

    #[test]
    fn test_creature_repo_remove() {
        let repo = InMemoryCreatureRepo::with_creatures(vec![creature("a")]);
        let id = CreatureId::from("a");

        assert_eq!(repo.remove(&id).map(|c| c.map(|c| c.name)), Ok(Some("a".to_string())));
        assert!(!repo.exists(&id));
        assert_eq!(repo.load(&id), Ok(None));
    }
}
