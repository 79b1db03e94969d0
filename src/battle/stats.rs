use crate::battle::state::StatStages;
use schema::StatType;

pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// Stage multipliers, indexed by `stage + 6`.
pub const STAGE_MULTIPLIERS: [f64; 13] = [
    0.25, 0.28, 0.33, 0.4, 0.5, 0.66, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0,
];

pub fn stage_multiplier(stage: i8) -> f64 {
    let clamped = stage.clamp(MIN_STAGE, MAX_STAGE);
    STAGE_MULTIPLIERS[(clamped - MIN_STAGE) as usize]
}

/// Stat value after its stage multiplier, unfloored.
pub fn staged_stat(base: u16, stage: i8) -> f64 {
    f64::from(base) * stage_multiplier(stage)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageChange {
    Changed { old: i8, new: i8 },
    /// Already at the bound in the requested direction.
    Blocked,
    Unchanged,
}

/// Apply `delta` to `stat`, clamping the stored stage.
pub fn apply_stage_delta(stages: &mut StatStages, stat: StatType, delta: i8) -> StageChange {
    if delta == 0 {
        return StageChange::Unchanged;
    }
    let old = stages.get(stat);
    let new = old.saturating_add(delta).clamp(MIN_STAGE, MAX_STAGE);
    if new == old {
        return StageChange::Blocked;
    }
    stages.set(stat, new);
    StageChange::Changed { old, new }
}

/// Log line for a stage change, keyed by the requested delta.
pub fn stage_change_message(name: &str, stat: StatType, delta: i8, change: StageChange) -> Option<String> {
    match change {
        StageChange::Unchanged => None,
        StageChange::Blocked if delta > 0 => Some(format!("{}'s {} can't go any higher!", name, stat)),
        StageChange::Blocked => Some(format!("{}'s {} can't go any lower!", name, stat)),
        StageChange::Changed { .. } => {
            let phrase = match delta {
                1 => "rose!",
                2 => "rose sharply!",
                d if d >= 3 => "rose drastically!",
                -1 => "fell!",
                -2 => "fell sharply!",
                _ => "fell drastically!",
            };
            Some(format!("{}'s {} {}", name, stat, phrase))
        }
    }
}
