use crate::battle::state::{BattleState, Side};
use crate::creature::CreatureId;
use serde::{Deserialize, Serialize};

// Default reward amounts
const PARTICIPATION_XP: u32 = 50;
const VICTORY_XP: u32 = 100;
const KNOCKOUT_XP: u32 = 75;
const SURVIVAL_XP: u32 = 25;

/// Fixed XP amounts handed out by the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpRewards {
    /// Every roster member at battle end
    pub participation: u32,
    /// Winning roster members at battle end
    pub victory: u32,
    /// The active creature that knocked out an opponent
    pub knockout: u32,
    /// Roster members that never fainted
    pub survival: u32,
}

impl Default for XpRewards {
    fn default() -> Self {
        Self {
            participation: PARTICIPATION_XP,
            victory: VICTORY_XP,
            knockout: KNOCKOUT_XP,
            survival: SURVIVAL_XP,
        }
    }
}

/// XP owed to one creature, handed to the Experience Awarder after the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    pub creature_id: CreatureId,
    pub amount: u32,
}

/// Accumulates awards during one action, one entry per creature in the order
/// creatures first earned something.
#[derive(Debug, Clone, Default)]
pub struct AwardLedger {
    awards: Vec<XpAward>,
}

impl AwardLedger {
    pub fn add(&mut self, creature_id: &CreatureId, amount: u32) {
        if amount == 0 {
            return;
        }
        match self
            .awards
            .iter_mut()
            .find(|award| &award.creature_id == creature_id)
        {
            Some(award) => award.amount = award.amount.saturating_add(amount),
            None => self.awards.push(XpAward {
                creature_id: creature_id.clone(),
                amount,
            }),
        }
    }

    pub fn extend(&mut self, awards: impl IntoIterator<Item = XpAward>) {
        for award in awards {
            self.add(&award.creature_id, award.amount);
        }
    }

    pub fn into_awards(self) -> Vec<XpAward> {
        self.awards
    }
}

/// Battle-end awards for every roster member of both sides.
pub fn battle_end_awards(state: &BattleState, winner: Side, rewards: &XpRewards) -> Vec<XpAward> {
    Side::BOTH
        .iter()
        .flat_map(|&side| {
            let side_state = state.side(side);
            side_state.roster.iter().map(move |id| {
                let mut amount = rewards.participation;
                if side == winner {
                    amount += rewards.victory;
                }
                if !side_state.is_fainted(id) {
                    amount += rewards.survival;
                }
                XpAward {
                    creature_id: id.clone(),
                    amount,
                }
            })
        })
        .collect()
}
