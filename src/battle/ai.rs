//! A module for defining AI behaviors for battle opponents.

use crate::battle::engine::{resolve_move, TurnOutcome};
use crate::battle::rng::{pick_index, BattleRng};
use crate::battle::state::{BattleState, Controller, Side};
use crate::config::EngineConfig;
use crate::creature::{Creature, CreatureBook};
use crate::errors::{BattleEngineError, BattleResult};

/// A trait for any system that can pick a move for an AI-controlled side.
pub trait Behavior {
    /// Index into `creature.moves`.
    fn choose_move(&self, creature: &Creature, rng: &mut dyn BattleRng) -> usize;
}

/// Picks uniformly among the known moves.
pub struct RandomAI;

impl Behavior for RandomAI {
    fn choose_move(&self, creature: &Creature, rng: &mut dyn BattleRng) -> usize {
        pick_index(rng, creature.moves.len(), "AI move choice")
    }
}

/// The AI-controlled side whose turn it is, if any.
pub fn ai_side_to_move(state: &BattleState) -> Option<Side> {
    state
        .phase
        .to_move()
        .filter(|&side| state.side(side).controller == Controller::Ai)
}

/// Let the AI act if it is an AI-controlled side's turn. `Ok(None)` means
/// nothing happened.
pub fn perform_ai_move(
    state: &BattleState,
    book: &CreatureBook,
    config: &EngineConfig,
    rng: &mut dyn BattleRng,
) -> BattleResult<Option<TurnOutcome>> {
    if state.is_terminal() {
        return Err(BattleEngineError::TerminalBattle {
            battle_id: state.battle_id.clone(),
        });
    }
    let Some(side) = ai_side_to_move(state) else {
        return Ok(None);
    };

    let creature = book.get(&state.side(side).active)?;
    let move_index = RandomAI.choose_move(creature, rng);
    resolve_move(state, book, side, move_index, config, rng).map(Some)
}
