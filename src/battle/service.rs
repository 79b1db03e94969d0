//! Orchestration boundary between the pure resolver and its collaborators.
//!
//! Each action runs as one transaction per battle id: load the battle and
//! every creature it references, resolve, save, then hand out XP.

use crate::battle::ai;
use crate::battle::engine::{self, SideSetup, TurnOutcome};
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleId, BattleState, LevelUpEvent, Phase, Side};
use crate::battle::switching::resolve_switch;
use crate::battle::view::BattleView;
use crate::config::EngineConfig;
use crate::creature::{CreatureBook, CreatureId};
use crate::errors::{BattleEngineError, BattleResult, NotFoundError, RepositoryError};
use crate::progression::{ExperienceAwarder, RepositoryAwarder, XpAward};
use crate::repository::{BattleRepository, CreatureRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub struct BattleService<C, B> {
    creatures: C,
    battles: B,
    config: EngineConfig,
    locks: Mutex<HashMap<BattleId, Arc<Mutex<()>>>>,
    next_id: AtomicU64,
}

impl<C: CreatureRepository, B: BattleRepository> BattleService<C, B> {
    pub fn new(creatures: C, battles: B, config: EngineConfig) -> Self {
        Self {
            creatures,
            battles,
            config,
            locks: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn creatures(&self) -> &C {
        &self.creatures
    }

    pub fn battles(&self) -> &B {
        &self.battles
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create and store a battle under a generated id.
    pub fn create_battle(&self, side1: SideSetup, side2: SideSetup) -> BattleResult<BattleState> {
        let battle_id = loop {
            let candidate = BattleId(format!("battle-{}", self.next_id.fetch_add(1, Ordering::Relaxed)));
            if !self.battles.exists(&candidate) {
                break candidate;
            }
        };
        self.create_battle_with_id(battle_id, side1, side2)
    }

    pub fn create_battle_with_id(
        &self,
        battle_id: BattleId,
        side1: SideSetup,
        side2: SideSetup,
    ) -> BattleResult<BattleState> {
        let lock = self.battle_lock(&battle_id)?;
        let _guard = lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        if self.battles.exists(&battle_id) {
            return Err(BattleEngineError::BattleExists { battle_id });
        }

        let book = self.load_book(side1.roster.iter().chain(side2.roster.iter()))?;
        let state = engine::create_battle(battle_id, side1, side2, &book)?;
        self.battles.save(&state)?;
        tracing::info!("Battle[{}] created", state.battle_id);
        Ok(state)
    }

    /// Submit a move for whichever side is due to move.
    pub fn submit_move(
        &self,
        battle_id: &BattleId,
        move_index: usize,
        rng: &mut dyn BattleRng,
    ) -> BattleResult<BattleState> {
        self.transact(battle_id, |state, book, config| {
            engine::resolve_move(state, book, acting_side(state), move_index, config, rng).map(Some)
        })
    }

    pub fn submit_move_as(
        &self,
        battle_id: &BattleId,
        side: Side,
        move_index: usize,
        rng: &mut dyn BattleRng,
    ) -> BattleResult<BattleState> {
        self.transact(battle_id, |state, book, config| {
            engine::resolve_move(state, book, side, move_index, config, rng).map(Some)
        })
    }

    /// Switch for whichever side is selecting, or voluntarily for the side to move.
    pub fn submit_switch(
        &self,
        battle_id: &BattleId,
        creature_id: &CreatureId,
    ) -> BattleResult<BattleState> {
        self.transact(battle_id, |state, book, _| {
            resolve_switch(state, book, acting_side(state), creature_id).map(Some)
        })
    }

    pub fn submit_switch_as(
        &self,
        battle_id: &BattleId,
        side: Side,
        creature_id: &CreatureId,
    ) -> BattleResult<BattleState> {
        self.transact(battle_id, |state, book, _| {
            resolve_switch(state, book, side, creature_id).map(Some)
        })
    }

    /// Returns the stored state unchanged when no AI side is due to move.
    pub fn perform_ai_move(
        &self,
        battle_id: &BattleId,
        rng: &mut dyn BattleRng,
    ) -> BattleResult<BattleState> {
        self.transact(battle_id, |state, book, config| {
            ai::perform_ai_move(state, book, config, rng)
        })
    }

    pub fn battle(&self, battle_id: &BattleId) -> BattleResult<BattleState> {
        self.load_battle(battle_id)
    }

    pub fn battle_view(&self, battle_id: &BattleId) -> BattleResult<BattleView> {
        let state = self.load_battle(battle_id)?;
        let book = self.load_book(referenced_creatures(&state))?;
        BattleView::build(&state, &book)
    }

    fn transact<F>(&self, battle_id: &BattleId, resolve: F) -> BattleResult<BattleState>
    where
        F: FnOnce(&BattleState, &CreatureBook, &EngineConfig) -> BattleResult<Option<TurnOutcome>>,
    {
        let lock = self.battle_lock(battle_id)?;
        let _guard = lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;

        let state = self.load_battle(battle_id)?;
        if state.is_terminal() {
            self.release_lock(battle_id);
        }
        let book = self.load_book(referenced_creatures(&state))?;

        let Some(TurnOutcome { mut state, awards }) = resolve(&state, &book, &self.config)? else {
            return Ok(state);
        };
        // Commit the turn before any XP is written.
        self.battles.save(&state)?;
        if self.apply_awards(&mut state, &book, awards) {
            if let Err(e) = self.battles.save(&state) {
                tracing::warn!("Battle[{}]: level-up events not saved: {}", state.battle_id, e);
            }
        }
        if state.is_terminal() {
            self.release_lock(battle_id);
        }
        Ok(state)
    }

    /// Award failures are logged and skipped; they never undo the turn.
    /// Returns whether any level-up event was recorded.
    fn apply_awards(&self, state: &mut BattleState, book: &CreatureBook, awards: Vec<XpAward>) -> bool {
        let recorded = state.level_ups.len();
        let awarder = RepositoryAwarder::new(&self.creatures, self.config.level_growth_percent);
        for award in awards {
            match awarder.award(&award.creature_id, award.amount) {
                Ok(outcome) if outcome.leveled_up => {
                    let creature_name = book
                        .get(&award.creature_id)
                        .map(|creature| creature.name.clone())
                        .unwrap_or_else(|_| award.creature_id.to_string());
                    state.level_ups.push(LevelUpEvent {
                        creature_id: award.creature_id,
                        creature_name,
                        old_level: outcome.old_level,
                        new_level: outcome.new_level,
                        xp_gained: award.amount,
                    });
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(
                    "Battle[{}]: skipped {} XP for {}: {}",
                    state.battle_id,
                    award.amount,
                    award.creature_id,
                    e
                ),
            }
        }
        state.level_ups.len() > recorded
    }

    fn battle_lock(&self, battle_id: &BattleId) -> BattleResult<Arc<Mutex<()>>> {
        let mut locks = self.locks.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(locks.entry(battle_id.clone()).or_default().clone())
    }

    /// Finished battles are read-only, so their lock entry can go.
    fn release_lock(&self, battle_id: &BattleId) {
        if let Ok(mut locks) = self.locks.lock() {
            locks.remove(battle_id);
        }
    }

    #[cfg(test)]
    pub(crate) fn tracked_locks(&self) -> usize {
        self.locks.lock().map(|locks| locks.len()).unwrap_or(0)
    }

    fn load_battle(&self, battle_id: &BattleId) -> BattleResult<BattleState> {
        self.battles
            .load(battle_id)?
            .ok_or_else(|| NotFoundError::Battle(battle_id.clone()).into())
    }

    fn load_book<'a>(&self, ids: impl IntoIterator<Item = &'a CreatureId>) -> BattleResult<CreatureBook> {
        let mut book = CreatureBook::new();
        for id in ids {
            if book.contains(id) {
                continue;
            }
            let creature = self
                .creatures
                .load(id)?
                .ok_or_else(|| NotFoundError::Creature(id.clone()))?;
            book.insert(creature);
        }
        Ok(book)
    }
}

fn referenced_creatures(state: &BattleState) -> impl Iterator<Item = &CreatureId> {
    state.sides.iter().flat_map(|side| side.roster.iter())
}

/// The side the next action belongs to, whatever its kind.
fn acting_side(state: &BattleState) -> Side {
    match state.phase {
        Phase::Active { to_move } => to_move,
        Phase::Selecting { side, .. } => side,
        Phase::Won { winner } => winner,
    }
}
