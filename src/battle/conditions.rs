use crate::battle::rng::{self, BattleRng};
use crate::battle::state::StatusCondition;
use schema::StatusKind;

pub const THAW_CHANCE: u8 = 20;
pub const FULL_PARALYSIS_CHANCE: u8 = 25;

/// Outcome of the pre-move status gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGate {
    /// The move goes ahead, possibly with a log line (woke up, thawed out).
    Proceed(Option<String>),
    Prevented(String),
}

/// Check whether the status on a creature stops it from moving this turn.
/// Clears the status when the creature wakes or thaws.
pub fn pre_move_gate(
    name: &str,
    status: &mut Option<StatusCondition>,
    rng: &mut dyn BattleRng,
) -> MoveGate {
    match *status {
        Some(StatusCondition::Freeze(_)) => {
            if rng::chance(rng, THAW_CHANCE, "freeze thaw") {
                *status = None;
                MoveGate::Proceed(Some(format!("{} thawed out!", name)))
            } else {
                MoveGate::Prevented(format!("{} is frozen solid!", name))
            }
        }
        Some(StatusCondition::Sleep(turns)) => {
            if turns <= 1 {
                *status = None;
                MoveGate::Proceed(Some(format!("{} woke up!", name)))
            } else {
                MoveGate::Prevented(format!("{} is fast asleep.", name))
            }
        }
        Some(StatusCondition::Paralysis) => {
            if rng::chance(rng, FULL_PARALYSIS_CHANCE, "full paralysis") {
                MoveGate::Prevented(format!("{} is fully paralyzed!", name))
            } else {
                MoveGate::Proceed(None)
            }
        }
        Some(StatusCondition::Poison) | Some(StatusCondition::Burn) | None => MoveGate::Proceed(None),
    }
}

/// Build the condition for a freshly inflicted status, drawing its duration.
pub fn inflict(kind: StatusKind, rng: &mut dyn BattleRng) -> StatusCondition {
    match kind {
        StatusKind::Poison => StatusCondition::Poison,
        StatusKind::Burn => StatusCondition::Burn,
        StatusKind::Paralyze => StatusCondition::Paralysis,
        StatusKind::Freeze => StatusCondition::Freeze(rng::turns_between(rng, 2, 4, "freeze duration")),
        StatusKind::Sleep => StatusCondition::Sleep(rng::turns_between(rng, 1, 3, "sleep duration")),
    }
}

pub fn infliction_message(name: &str, kind: StatusKind) -> String {
    match kind {
        StatusKind::Poison => format!("{} was poisoned!", name),
        StatusKind::Burn => format!("{} was burned!", name),
        StatusKind::Paralyze => format!("{} is paralyzed! It may be unable to move!", name),
        StatusKind::Freeze => format!("{} was frozen solid!", name),
        StatusKind::Sleep => format!("{} fell asleep!", name),
    }
}

/// Damage dealt by poison and burn each turn.
pub fn tick_damage(max_hp: u16) -> u16 {
    (max_hp / 16).max(1)
}

/// End-of-turn processing for one active creature: poison and burn damage,
/// freeze and sleep countdown. Returns the log lines produced.
pub fn end_of_turn_tick(
    name: &str,
    max_hp: u16,
    hp: &mut u16,
    status: &mut Option<StatusCondition>,
) -> Vec<String> {
    let mut lines = Vec::new();
    match status {
        Some(StatusCondition::Poison) => {
            let damage = tick_damage(max_hp).min(*hp);
            *hp -= damage;
            lines.push(format!("{} is hurt by its poison! ({} damage)", name, damage));
        }
        Some(StatusCondition::Burn) => {
            let damage = tick_damage(max_hp).min(*hp);
            *hp -= damage;
            lines.push(format!("{} is hurt by its burn! ({} damage)", name, damage));
        }
        Some(StatusCondition::Sleep(turns)) => {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                *status = None;
                lines.push(format!("{} woke up!", name));
            }
        }
        Some(StatusCondition::Freeze(turns)) => {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                *status = None;
                lines.push(format!("{} thawed out!", name));
            }
        }
        Some(StatusCondition::Paralysis) | None => {}
    }
    lines
}
