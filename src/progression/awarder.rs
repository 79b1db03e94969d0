//! The Experience Awarder boundary.
//!
//! The engine only knows the contract: give a creature some XP, learn whether
//! it leveled. `RepositoryAwarder` is the storage-backed implementation used by
//! `BattleService`.

use crate::creature::CreatureId;
use crate::errors::{BattleResult, NotFoundError};
use crate::progression::leveling::{award_experience, LevelUpOutcome};
use crate::repository::CreatureRepository;

pub trait ExperienceAwarder {
    fn award(&self, creature_id: &CreatureId, xp: u32) -> BattleResult<LevelUpOutcome>;
}

pub struct RepositoryAwarder<'a, R: CreatureRepository + ?Sized> {
    creatures: &'a R,
    growth_percent: u8,
}

impl<'a, R: CreatureRepository + ?Sized> RepositoryAwarder<'a, R> {
    pub fn new(creatures: &'a R, growth_percent: u8) -> Self {
        Self {
            creatures,
            growth_percent,
        }
    }
}

impl<R: CreatureRepository + ?Sized> ExperienceAwarder for RepositoryAwarder<'_, R> {
    fn award(&self, creature_id: &CreatureId, xp: u32) -> BattleResult<LevelUpOutcome> {
        let mut creature = self
            .creatures
            .load(creature_id)?
            .ok_or_else(|| NotFoundError::Creature(creature_id.clone()))?;

        let outcome = award_experience(&mut creature, xp, self.growth_percent);
        self.creatures.save(&creature)?;

        if outcome.leveled_up {
            tracing::info!(
                "{} grew from level {} to {}",
                creature.name,
                outcome.old_level,
                outcome.new_level
            );
        }
        Ok(outcome)
    }
}
