use crate::battle::rng::{self, BattleRng};
use crate::battle::state::StatusCondition;
use crate::battle::stats::staged_stat;
use schema::CreatureType;

/// Everything the damage formula reads about one attack.
#[derive(Debug, Clone, Copy)]
pub struct DamageInputs<'a> {
    pub power: u16,
    pub move_type: CreatureType,
    pub attack: u16,
    pub attack_stage: i8,
    pub attacker_status: Option<StatusCondition>,
    pub defense: u16,
    pub defense_stage: i8,
    pub defender_types: &'a [CreatureType],
}

impl DamageInputs<'_> {
    pub fn effectiveness(&self) -> f64 {
        CreatureType::type_effectiveness(self.move_type, self.defender_types)
    }
}

/// Damage before variance: staged attack over staged defense, scaled by
/// power and effectiveness. Burn halves the attacker's side.
pub fn base_damage(inputs: &DamageInputs) -> f64 {
    let mut modified_attack = staged_stat(inputs.attack, inputs.attack_stage);
    if matches!(inputs.attacker_status, Some(StatusCondition::Burn)) {
        modified_attack *= 0.5;
    }
    let modified_defense = staged_stat(inputs.defense, inputs.defense_stage).max(1.0);

    ((modified_attack / modified_defense) * f64::from(inputs.power) * inputs.effectiveness() * 1.5
        / 5.0)
        .floor()
}

/// Final damage with variance, at least 1.
///
/// Callers must not use this for immune matchups or power 0 moves; both deal
/// no damage at all.
pub fn compute_damage(inputs: &DamageInputs, rng: &mut dyn BattleRng) -> u16 {
    let base = base_damage(inputs);
    let varied = (base * (1.0 + rng::variance(rng))).floor();
    varied.clamp(1.0, f64::from(u16::MAX)) as u16
}

/// Suffix appended to the damage log line.
pub fn effectiveness_suffix(effectiveness: f64) -> &'static str {
    if effectiveness == 0.0 {
        " It has no effect!"
    } else if effectiveness > 1.0 {
        " It's super effective!"
    } else if effectiveness < 1.0 {
        " It's not very effective..."
    } else {
        ""
    }
}
