//! Turn resolution.
//!
//! Every entry point here is pure: it reads a battle snapshot plus the
//! creature records it references and returns the next snapshot together with
//! the XP the action earned. Rejected actions return an error and produce no
//! new state.

use crate::battle::calculators::{compute_damage, effectiveness_suffix, DamageInputs};
use crate::battle::conditions::{self, MoveGate};
use crate::battle::rng::{self, BattleRng};
use crate::battle::state::{
    BattleId, BattleState, Controller, Phase, Side, SideState, StatStages,
};
use crate::battle::stats::{apply_stage_delta, stage_change_message};
use crate::battle::switching::{first_reserve, send_out};
use crate::config::EngineConfig;
use crate::creature::{Creature, CreatureBook, CreatureId};
use crate::errors::{ActionError, BattleEngineError, BattleResult};
use crate::progression::{battle_end_awards, AwardLedger, XpAward};
use schema::{CreatureType, MoveData, MoveEffect, Target};
use std::collections::HashSet;

/// One side's starting lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideSetup {
    pub roster: Vec<CreatureId>,
    pub active: CreatureId,
    pub controller: Controller,
}

impl SideSetup {
    pub fn new(roster: Vec<CreatureId>, active: CreatureId, controller: Controller) -> Self {
        Self {
            roster,
            active,
            controller,
        }
    }

    /// Human-controlled lineup leading with the first roster member.
    pub fn human(roster: Vec<CreatureId>) -> Self {
        let active = roster.first().cloned().unwrap_or_else(|| CreatureId::new(""));
        Self::new(roster, active, Controller::Human)
    }

    /// AI-controlled lineup leading with the first roster member.
    pub fn ai(roster: Vec<CreatureId>) -> Self {
        Self {
            controller: Controller::Ai,
            ..Self::human(roster)
        }
    }
}

/// Result of one accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: BattleState,
    /// XP owed, one entry per creature, to hand to the Experience Awarder.
    pub awards: Vec<XpAward>,
}

fn validate_setup(setup: &SideSetup, side: Side, book: &CreatureBook) -> BattleResult<()> {
    let invalid = |reason: String| -> BattleEngineError {
        ActionError::InvalidRoster(format!("{}: {}", side, reason)).into()
    };

    if setup.roster.is_empty() {
        return Err(invalid("roster is empty".to_string()));
    }
    let mut seen = HashSet::new();
    for id in &setup.roster {
        if !seen.insert(id) {
            return Err(invalid(format!("{} appears twice", id)));
        }
        if book.get(id)?.moves.is_empty() {
            return Err(invalid(format!("{} knows no moves", id)));
        }
    }
    if !setup.roster.contains(&setup.active) {
        return Err(invalid(format!("active {} is not in the roster", setup.active)));
    }
    Ok(())
}

fn initial_side(setup: SideSetup, active: &Creature) -> SideState {
    SideState {
        controller: setup.controller,
        roster: setup.roster,
        active: setup.active,
        active_hp: active.max_hp(),
        fainted: Vec::new(),
        stat_stages: StatStages::default(),
        status: None,
    }
}

/// Start a battle. The faster active moves first; ties go to side 1.
pub fn create_battle(
    battle_id: BattleId,
    side1: SideSetup,
    side2: SideSetup,
    book: &CreatureBook,
) -> BattleResult<BattleState> {
    validate_setup(&side1, Side::Side1, book)?;
    validate_setup(&side2, Side::Side2, book)?;
    if let Some(shared) = side1.roster.iter().find(|id| side2.roster.contains(id)) {
        return Err(ActionError::InvalidRoster(format!("{} is on both sides", shared)).into());
    }

    let active1 = book.get(&side1.active)?;
    let active2 = book.get(&side2.active)?;
    let to_move = if active2.stats.speed > active1.stats.speed {
        Side::Side2
    } else {
        Side::Side1
    };
    let opening = format!("Battle begins! {} vs {}", active1.name, active2.name);

    Ok(BattleState {
        battle_id,
        sides: [initial_side(side1, active1), initial_side(side2, active2)],
        phase: Phase::Active { to_move },
        log: vec![opening],
        level_ups: Vec::new(),
    })
}

/// Resolve `side` using move `move_index` of its active creature.
pub fn resolve_move(
    state: &BattleState,
    book: &CreatureBook,
    side: Side,
    move_index: usize,
    config: &EngineConfig,
    rng: &mut dyn BattleRng,
) -> BattleResult<TurnOutcome> {
    let to_move = match state.phase {
        Phase::Won { .. } => {
            return Err(BattleEngineError::TerminalBattle {
                battle_id: state.battle_id.clone(),
            })
        }
        Phase::Active { to_move } => to_move,
        phase @ Phase::Selecting { .. } => {
            return Err(ActionError::WrongPhase {
                action: "use a move",
                phase,
            }
            .into())
        }
    };
    if to_move != side {
        return Err(ActionError::NotYourTurn { side }.into());
    }

    let attacker = book.get(&state.side(side).active)?;
    let defender = book.get(&state.side(side.opponent()).active)?;
    let move_data = attacker
        .moves
        .get(move_index)
        .ok_or(ActionError::InvalidMoveIndex {
            index: move_index,
            available: attacker.moves.len(),
        })?;

    let mut next = state.clone();
    let mut ledger = AwardLedger::default();

    let gate = conditions::pre_move_gate(&attacker.name, &mut next.side_mut(side).status, rng);
    let defender_fainted = match gate {
        MoveGate::Prevented(line) => {
            next.push_log(line);
            false
        }
        MoveGate::Proceed(line) => {
            if let Some(line) = line {
                next.push_log(line);
            }
            use_move(&mut next, side, attacker, defender, move_data, rng)
        }
    };

    if defender_fainted {
        settle_faints(&mut next, book, &[side.opponent()], config, &mut ledger)?;
    } else {
        next.phase = Phase::Active {
            to_move: side.opponent(),
        };
    }

    if !next.is_terminal() {
        end_of_turn(&mut next, book, config, &mut ledger)?;
    }

    tracing::debug!(
        "Battle[{}]: {} used {} -> {}",
        next.battle_id,
        attacker.name,
        move_data.name,
        next.phase
    );

    Ok(TurnOutcome {
        state: next,
        awards: ledger.into_awards(),
    })
}

/// Accuracy, damage and effect for a move that got past the status gate.
/// Returns whether the defender's HP reached 0.
fn use_move(
    next: &mut BattleState,
    side: Side,
    attacker: &Creature,
    defender: &Creature,
    move_data: &MoveData,
    rng: &mut dyn BattleRng,
) -> bool {
    let opponent = side.opponent();

    if rng::roll_percent(rng, "accuracy") > f64::from(move_data.accuracy) {
        next.push_log(format!(
            "{} used {}, but it missed!",
            attacker.name, move_data.name
        ));
        return false;
    }

    if move_data.is_damaging() {
        let effectiveness = CreatureType::type_effectiveness(move_data.move_type, &defender.types);
        if effectiveness == 0.0 {
            next.push_log(format!(
                "{} used {}!{}",
                attacker.name,
                move_data.name,
                effectiveness_suffix(effectiveness)
            ));
        } else {
            let inputs = DamageInputs {
                power: move_data.power,
                move_type: move_data.move_type,
                attack: attacker.stats.attack,
                attack_stage: next.side(side).stat_stages.attack,
                attacker_status: next.side(side).status,
                defense: defender.stats.defense,
                defense_stage: next.side(opponent).stat_stages.defense,
                defender_types: &defender.types,
            };
            let damage = compute_damage(&inputs, rng);
            let defender_side = next.side_mut(opponent);
            defender_side.active_hp = defender_side.active_hp.saturating_sub(damage);
            next.push_log(format!(
                "{} used {}! It dealt {} damage.{}",
                attacker.name,
                move_data.name,
                damage,
                effectiveness_suffix(effectiveness)
            ));
        }
    } else {
        next.push_log(format!("{} used {}!", attacker.name, move_data.name));
    }

    if let Some(effect) = &move_data.effect {
        apply_effect(next, side, attacker, defender, effect, rng);
    }

    next.side(opponent).active_hp == 0
}

fn apply_effect(
    next: &mut BattleState,
    side: Side,
    attacker: &Creature,
    defender: &Creature,
    effect: &MoveEffect,
    rng: &mut dyn BattleRng,
) {
    let (target_side, target) = match effect.target() {
        Target::User => (side, attacker),
        Target::Opponent => (side.opponent(), defender),
    };
    if next.side(target_side).active_hp == 0 {
        return;
    }

    match *effect {
        MoveEffect::StatusInflict { status, chance, .. } => {
            // No stacking: an afflicted target is never rolled against.
            if next.side(target_side).status.is_some() {
                return;
            }
            if !rng::chance(rng, chance, "status chance") {
                return;
            }
            let condition = conditions::inflict(status, rng);
            next.side_mut(target_side).status = Some(condition);
            next.push_log(conditions::infliction_message(&target.name, status));
        }
        MoveEffect::StatBoost { .. } | MoveEffect::StatReduction { .. } => {
            if let Some((stat, delta)) = effect.stage_delta() {
                let change = apply_stage_delta(&mut next.side_mut(target_side).stat_stages, stat, delta);
                if let Some(line) = stage_change_message(&target.name, stat, delta, change) {
                    next.push_log(line);
                }
            }
        }
    }
}

/// Status damage and countdown for both actives, then faint routing for any
/// creature the tick knocked out. Side 1 ticks first.
fn end_of_turn(
    next: &mut BattleState,
    book: &CreatureBook,
    config: &EngineConfig,
    ledger: &mut AwardLedger,
) -> BattleResult<()> {
    let mut fainted = Vec::new();
    for side in Side::BOTH {
        let creature = book.get(&next.side(side).active)?;
        let side_state = next.side_mut(side);
        if side_state.active_hp == 0 {
            continue;
        }
        let lines = conditions::end_of_turn_tick(
            &creature.name,
            creature.max_hp(),
            &mut side_state.active_hp,
            &mut side_state.status,
        );
        let fainted_now = side_state.active_hp == 0;
        next.log.extend(lines);
        if fainted_now {
            fainted.push(side);
        }
    }

    if fainted.is_empty() {
        return Ok(());
    }
    settle_faints(next, book, &fainted, config, ledger)
}

/// Record the faints of the listed sides' actives, award knockout XP and
/// route each side to a win, an AI replacement or a pending selection.
fn settle_faints(
    next: &mut BattleState,
    book: &CreatureBook,
    fainted_sides: &[Side],
    config: &EngineConfig,
    ledger: &mut AwardLedger,
) -> BattleResult<()> {
    for &side in fainted_sides {
        let side_state = next.side_mut(side);
        let id = side_state.active.clone();
        side_state.active_hp = 0;
        if !side_state.fainted.contains(&id) {
            side_state.fainted.push(id.clone());
        }
        let name = &book.get(&id)?.name;
        next.push_log(format!("{} fainted!", name));
    }

    // The knocker only earns the bonus if it is still standing.
    for &side in fainted_sides {
        let knocker_side = side.opponent();
        if !fainted_sides.contains(&knocker_side) && next.side(knocker_side).active_hp > 0 {
            let knocker = next.side(knocker_side).active.clone();
            ledger.add(&knocker, config.rewards.knockout);
        }
    }

    for &side in fainted_sides {
        if next.is_terminal() {
            break;
        }
        if !next.side(side).has_reserves() {
            let winner = side.opponent();
            next.phase = Phase::Won { winner };
            next.push_log(format!("{} wins the battle!", winner));
            ledger.extend(battle_end_awards(next, winner, &config.rewards));
            tracing::info!("Battle[{}] won by {}", next.battle_id, winner);
            break;
        }

        match next.side(side).controller {
            Controller::Ai => {
                let reserve = first_reserve(next.side(side)).cloned().ok_or(ActionError::NoReserves { side })?;
                let name = send_out(next, book, side, &reserve)?;
                next.push_log(format!("{} sent out {}!", side, name));
                if !matches!(next.phase, Phase::Selecting { .. }) {
                    next.phase = Phase::Active { to_move: side };
                }
            }
            Controller::Human => {
                next.phase = match next.phase {
                    Phase::Selecting {
                        side: pending,
                        queued: None,
                    } if pending != side => Phase::Selecting {
                        side: pending,
                        queued: Some(side),
                    },
                    _ => Phase::Selecting { side, queued: None },
                };
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::TurnRng;
    use crate::creature::BaseStats;
    use pretty_assertions::assert_eq;

    fn creature(id: &str, speed: u16) -> Creature {
        Creature::new(
            id,
            id.to_uppercase(),
            vec![CreatureType::Normal],
            BaseStats {
                hp: 100,
                attack: 80,
                defense: 80,
                speed,
            },
            vec![MoveData::new("Tackle", CreatureType::Normal, 40, 100)],
        )
    }

    fn book() -> CreatureBook {
        CreatureBook::from_creatures(vec![creature("a", 50), creature("b", 50), creature("x", 50)])
    }

    #[test]
    fn test_speed_tie_goes_to_side_one() {
        let state = create_battle(
            BattleId::from("tie"),
            SideSetup::human(vec!["a".into()]),
            SideSetup::human(vec!["x".into()]),
            &book(),
        )
        .expect("valid battle");
        assert_eq!(state.phase, Phase::Active { to_move: Side::Side1 });
        assert_eq!(state.log, vec!["Battle begins! A vs X".to_string()]);
    }

    #[test]
    fn test_invalid_rosters_are_rejected() {
        let book = book();
        let empty = create_battle(
            BattleId::from("e"),
            SideSetup::human(vec![]),
            SideSetup::human(vec!["x".into()]),
            &book,
        );
        assert!(matches!(
            empty,
            Err(BattleEngineError::InvalidAction(ActionError::InvalidRoster(_)))
        ));

        let shared = create_battle(
            BattleId::from("s"),
            SideSetup::human(vec!["a".into()]),
            SideSetup::human(vec!["a".into()]),
            &book,
        );
        assert!(matches!(
            shared,
            Err(BattleEngineError::InvalidAction(ActionError::InvalidRoster(_)))
        ));

        let missing = create_battle(
            BattleId::from("m"),
            SideSetup::human(vec!["a".into()]),
            SideSetup::human(vec!["ghost".into()]),
            &book,
        );
        assert!(matches!(missing, Err(BattleEngineError::NotFound(_))));

        let stray_active = create_battle(
            BattleId::from("s"),
            SideSetup::new(vec!["a".into()], "b".into(), Controller::Human),
            SideSetup::human(vec!["x".into()]),
            &book,
        );
        assert!(matches!(
            stray_active,
            Err(BattleEngineError::InvalidAction(ActionError::InvalidRoster(_)))
        ));
    }

    #[test]
    fn test_selecting_phase_rejects_moves() {
        let book = book();
        let mut state = create_battle(
            BattleId::from("sel"),
            SideSetup::human(vec!["a".into(), "b".into()]),
            SideSetup::human(vec!["x".into()]),
            &book,
        )
        .expect("valid battle");
        state.phase = Phase::Selecting {
            side: Side::Side1,
            queued: None,
        };
        let mut rng = TurnRng::new_for_test(vec![]);
        let result = resolve_move(&state, &book, Side::Side1, 0, &EngineConfig::default(), &mut rng);
        assert!(matches!(
            result,
            Err(BattleEngineError::InvalidAction(ActionError::WrongPhase { .. }))
        ));
    }
}
