pub mod awarder;
pub mod leveling;
pub mod rewards;

pub use awarder::{ExperienceAwarder, RepositoryAwarder};
pub use leveling::{award_experience, level_for_xp, xp_to_next_level, LevelUpOutcome, MAX_LEVEL, XP_TABLE};
pub use rewards::{battle_end_awards, AwardLedger, XpAward, XpRewards};
