use crate::CreatureType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

/// The stats that carry an in-battle stage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum StatType {
    Attack,
    Defense,
    Speed,
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            StatType::Attack => "Attack",
            StatType::Defense => "Defense",
            StatType::Speed => "Speed",
        };
        write!(f, "{}", display_name)
    }
}

/// Who a move effect lands on, relative to the creature using the move.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    User,
    Opponent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum StatusKind {
    Poison,
    Burn,
    Paralyze,
    Freeze,
    Sleep,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            StatusKind::Poison => "poison",
            StatusKind::Burn => "burn",
            StatusKind::Paralyze => "paralysis",
            StatusKind::Freeze => "freeze",
            StatusKind::Sleep => "sleep",
        };
        write!(f, "{}", display_name)
    }
}

/// Secondary effect carried by a move. A move has at most one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// Raises `stat` by `|stages|`.
    StatBoost {
        target: Target,
        stat: StatType,
        stages: i8,
    },
    /// Lowers `stat` by `|stages|`.
    StatReduction {
        target: Target,
        stat: StatType,
        stages: i8,
    },
    /// Inflicts `status` with `chance` percent probability (0-100).
    StatusInflict {
        target: Target,
        status: StatusKind,
        chance: u8,
    },
}

impl MoveEffect {
    pub fn target(&self) -> Target {
        match self {
            MoveEffect::StatBoost { target, .. }
            | MoveEffect::StatReduction { target, .. }
            | MoveEffect::StatusInflict { target, .. } => *target,
        }
    }

    /// Signed stage delta for stat effects, `None` for status effects.
    pub fn stage_delta(&self) -> Option<(StatType, i8)> {
        match self {
            MoveEffect::StatBoost { stat, stages, .. } => Some((*stat, stages.saturating_abs())),
            MoveEffect::StatReduction { stat, stages, .. } => {
                Some((*stat, -stages.saturating_abs()))
            }
            MoveEffect::StatusInflict { .. } => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveData {
    pub name: String,
    pub move_type: CreatureType,
    /// 0 marks a non-damaging status move.
    pub power: u16,
    /// Hit chance in percent, checked on every use.
    pub accuracy: u8,
    pub effect: Option<MoveEffect>,
}

impl MoveData {
    pub fn new(name: impl Into<String>, move_type: CreatureType, power: u16, accuracy: u8) -> Self {
        Self {
            name: name.into(),
            move_type,
            power,
            accuracy,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: MoveEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}
