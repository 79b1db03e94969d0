use crate::battle::engine::TurnOutcome;
use crate::battle::state::{BattleState, Phase, Side, SideState, StatStages};
use crate::creature::{CreatureBook, CreatureId};
use crate::errors::{ActionError, BattleEngineError, BattleResult};

/// First reserve in roster order.
pub fn first_reserve(side_state: &SideState) -> Option<&CreatureId> {
    side_state.reserves().next()
}

/// Put `id` in as the active creature for `side` at full HP with a clean
/// slate. Returns the creature's name.
pub(crate) fn send_out(
    state: &mut BattleState,
    book: &CreatureBook,
    side: Side,
    id: &CreatureId,
) -> BattleResult<String> {
    let creature = book.get(id)?;
    let side_state = state.side_mut(side);
    side_state.active = id.clone();
    side_state.active_hp = creature.max_hp();
    side_state.stat_stages = StatStages::default();
    side_state.status = None;
    Ok(creature.name.clone())
}

/// Swap the active creature of `side` for `creature_id`.
///
/// Forced when `side` is selecting after a faint; the switching side then
/// moves next (or the queued side selects). Voluntary when it is `side`'s turn
/// to move; the switch uses up the turn.
pub fn resolve_switch(
    state: &BattleState,
    book: &CreatureBook,
    side: Side,
    creature_id: &CreatureId,
) -> BattleResult<TurnOutcome> {
    let forced = match state.phase {
        Phase::Won { .. } => {
            return Err(BattleEngineError::TerminalBattle {
                battle_id: state.battle_id.clone(),
            })
        }
        Phase::Selecting { side: selecting, .. } if selecting == side => true,
        Phase::Active { to_move } if to_move == side => false,
        _ => return Err(ActionError::NotYourTurn { side }.into()),
    };

    let side_state = state.side(side);
    if !forced && !side_state.has_reserves() {
        return Err(ActionError::NoReserves { side }.into());
    }
    if !side_state.roster.contains(creature_id) {
        return Err(ActionError::NotInRoster(creature_id.clone()).into());
    }
    if side_state.is_fainted(creature_id) {
        return Err(ActionError::CreatureFainted(creature_id.clone()).into());
    }
    if &side_state.active == creature_id {
        return Err(ActionError::AlreadyActive(creature_id.clone()).into());
    }

    let outgoing = book.get(&side_state.active)?.name.clone();
    let mut next = state.clone();
    let incoming = send_out(&mut next, book, side, creature_id)?;

    if forced {
        next.push_log(format!("{} sent out {}!", side, incoming));
        next.phase = match state.phase {
            Phase::Selecting {
                queued: Some(queued),
                ..
            } => Phase::Selecting {
                side: queued,
                queued: None,
            },
            _ => Phase::Active { to_move: side },
        };
    } else {
        next.push_log(format!(
            "{} withdrew {} and sent out {}!",
            side, outgoing, incoming
        ));
        next.phase = Phase::Active {
            to_move: side.opponent(),
        };
    }

    tracing::debug!(
        "Battle[{}]: {} switched to {} -> {}",
        next.battle_id,
        side,
        incoming,
        next.phase
    );

    Ok(TurnOutcome {
        state: next,
        awards: Vec::new(),
    })
}
