use crate::creature::Creature;
use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u8 = 20;

/// Total XP required to reach each level; `XP_TABLE[n]` is the threshold for level `n + 1`.
pub const XP_TABLE: [u32; MAX_LEVEL as usize] = [
    0, 100, 250, 450, 700, 1000, 1350, 1750, 2200, 2700, 3250, 3850, 4500, 5200, 5950, 6750, 7600,
    8500, 9450, 10450,
];

/// Result of awarding experience to one creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpOutcome {
    pub leveled_up: bool,
    pub old_level: u8,
    pub new_level: u8,
}

/// The level a creature with `xp` total experience sits at.
pub fn level_for_xp(xp: u32) -> u8 {
    XP_TABLE
        .iter()
        .rposition(|&threshold| xp >= threshold)
        .map(|index| index as u8 + 1)
        .unwrap_or(1)
        .min(MAX_LEVEL)
}

/// XP still needed to reach the next level, 0 at max level.
pub fn xp_to_next_level(xp: u32, level: u8) -> u32 {
    if level >= MAX_LEVEL || level == 0 {
        return 0;
    }
    XP_TABLE[level as usize].saturating_sub(xp)
}

/// Per-level increase for one stat: `growth_percent` of its current value, at least 1.
fn stat_increase(current: u16, levels_gained: u8, growth_percent: u8) -> u16 {
    let per_level = (u32::from(current) * u32::from(growth_percent) / 100).max(1);
    (per_level * u32::from(levels_gained)).min(u32::from(u16::MAX)) as u16
}

/// Add experience, recompute the level from the table and grow the stats for
/// every level gained. Growth is taken from the current stats, so it
/// compounds across level-ups.
pub fn award_experience(creature: &mut Creature, amount: u32, growth_percent: u8) -> LevelUpOutcome {
    let old_level = creature.level;
    creature.xp = creature.xp.saturating_add(amount);
    let new_level = level_for_xp(creature.xp).max(old_level);

    if new_level > old_level {
        let gained = new_level - old_level;
        let stats = &mut creature.stats;
        stats.hp = stats.hp.saturating_add(stat_increase(stats.hp, gained, growth_percent));
        stats.attack = stats
            .attack
            .saturating_add(stat_increase(stats.attack, gained, growth_percent));
        stats.defense = stats
            .defense
            .saturating_add(stat_increase(stats.defense, gained, growth_percent));
        stats.speed = stats
            .speed
            .saturating_add(stat_increase(stats.speed, gained, growth_percent));
        creature.level = new_level;
    }

    LevelUpOutcome {
        leveled_up: new_level > old_level,
        old_level,
        new_level,
    }
}
