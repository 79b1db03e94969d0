//! Read-only projection of a battle for presentation.

use crate::battle::state::{
    BattleId, BattleState, Controller, LevelUpEvent, Phase, Side, StatStages, StatusCondition,
};
use crate::creature::{Creature, CreatureBook, CreatureId};
use crate::errors::BattleResult;
use serde::Serialize;

/// One side with its roster ids resolved to creature records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideView {
    pub side: Side,
    pub controller: Controller,
    pub active: Creature,
    pub current_hp: u16,
    pub max_hp: u16,
    pub stat_stages: StatStages,
    pub status: Option<StatusCondition>,
    pub roster: Vec<Creature>,
    pub reserves: Vec<Creature>,
    pub fainted: Vec<Creature>,
}

impl SideView {
    /// Remaining HP as a fraction of max, for HP bars.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) / f64::from(self.max_hp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleView {
    pub battle_id: BattleId,
    pub phase: Phase,
    pub sides: [SideView; 2],
    pub log: Vec<String>,
    pub level_ups: Vec<LevelUpEvent>,
}

impl BattleView {
    pub fn build(state: &BattleState, book: &CreatureBook) -> BattleResult<Self> {
        Ok(Self {
            battle_id: state.battle_id.clone(),
            phase: state.phase,
            sides: [
                side_view(state, book, Side::Side1)?,
                side_view(state, book, Side::Side2)?,
            ],
            log: state.log.clone(),
            level_ups: state.level_ups.clone(),
        })
    }

    pub fn side(&self, side: Side) -> &SideView {
        &self.sides[side.index()]
    }
}

fn side_view(state: &BattleState, book: &CreatureBook, side: Side) -> BattleResult<SideView> {
    let side_state = state.side(side);
    let resolve = |ids: Vec<&CreatureId>| -> BattleResult<Vec<Creature>> {
        ids.into_iter().map(|id| book.get(id).cloned()).collect()
    };
    let active = book.get(&side_state.active)?.clone();

    Ok(SideView {
        side,
        controller: side_state.controller,
        current_hp: side_state.active_hp,
        max_hp: active.max_hp(),
        stat_stages: side_state.stat_stages,
        status: side_state.status,
        roster: resolve(side_state.roster.iter().collect())?,
        reserves: resolve(side_state.reserves().collect())?,
        fainted: resolve(side_state.fainted.iter().collect())?,
        active,
    })
}
