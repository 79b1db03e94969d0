use crate::config::ConfigError;
use crate::creature::{BaseStats, Creature};
use schema::{CreatureType, MoveData, MoveEffect, StatType, StatusKind, Target};
use serde::{Deserialize, Serialize};

/// A predefined roster for quick battles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefabRoster {
    pub id: String,
    pub name: String,
    pub description: String,
    pub creatures: Vec<Creature>,
}

/// Parse a roster from RON, e.g. one hand-authored in a data file.
pub fn parse_roster_ron(source: &str) -> Result<PrefabRoster, ConfigError> {
    Ok(ron::from_str(source)?)
}

fn status(name: &str, move_type: CreatureType, power: u16, accuracy: u8, kind: StatusKind, chance: u8) -> MoveData {
    MoveData::new(name, move_type, power, accuracy).with_effect(MoveEffect::StatusInflict {
        target: Target::Opponent,
        status: kind,
        chance,
    })
}

fn boost(name: &str, move_type: CreatureType, stat: StatType, stages: i8) -> MoveData {
    MoveData::new(name, move_type, 0, 100).with_effect(MoveEffect::StatBoost {
        target: Target::User,
        stat,
        stages,
    })
}

fn lower(name: &str, move_type: CreatureType, power: u16, stat: StatType, stages: i8) -> MoveData {
    MoveData::new(name, move_type, power, 100).with_effect(MoveEffect::StatReduction {
        target: Target::Opponent,
        stat,
        stages,
    })
}

fn creature(
    id: &str,
    name: &str,
    types: Vec<CreatureType>,
    [hp, attack, defense, speed]: [u16; 4],
    moves: Vec<MoveData>,
    description: &str,
) -> Creature {
    let mut creature = Creature::new(id, name, types, BaseStats { hp, attack, defense, speed }, moves);
    creature.description = description.to_string();
    creature
}

/// Get all available prefab rosters
pub fn get_prefab_rosters() -> Vec<PrefabRoster> {
    use CreatureType::*;
    vec![
        PrefabRoster {
            id: "ember_roster".to_string(),
            name: "Ember Roster".to_string(),
            description: "Aggressive fire and electric lineup that leans on burns and paralysis".to_string(),
            creatures: vec![
                creature(
                    "ember-emberfang",
                    "Emberfang",
                    vec![Fire],
                    [110, 92, 64, 88],
                    vec![
                        status("Flame Burst", Fire, 70, 100, StatusKind::Burn, 30),
                        MoveData::new("Quick Attack", Normal, 40, 100),
                        boost("Kindle", Fire, StatType::Attack, 2),
                    ],
                    "A restless Fire type that grows fiercer the longer a fight lasts.",
                ),
                creature(
                    "ember-voltwhisper",
                    "Voltwhisper",
                    vec![Electric, Flying],
                    [92, 80, 58, 99],
                    vec![
                        status("Thunder", Electric, 110, 70, StatusKind::Paralyze, 30),
                        MoveData::new("Air Slash", Flying, 75, 95),
                        status("Static Field", Electric, 0, 90, StatusKind::Paralyze, 100),
                    ],
                    "An Electric/Flying type that rides storm fronts.",
                ),
                creature(
                    "ember-stonecrest",
                    "Stonecrest",
                    vec![Rock, Ground],
                    [128, 84, 88, 42],
                    vec![
                        MoveData::new("Rock Slide", Rock, 75, 90),
                        MoveData::new("Earthquake", Ground, 100, 100),
                        boost("Harden", Rock, StatType::Defense, 1),
                        lower("Sand Stomp", Ground, 40, StatType::Speed, 1),
                    ],
                    "A Rock/Ground type that shrugs off blows.",
                ),
            ],
        },
        PrefabRoster {
            id: "tide_roster".to_string(),
            name: "Tide Roster".to_string(),
            description: "Patient water and ice lineup built around sleep and freezing".to_string(),
            creatures: vec![
                creature(
                    "tide-tidalmaw",
                    "Tidalmaw",
                    vec![Water],
                    [120, 86, 76, 70],
                    vec![
                        MoveData::new("Hydro Pump", Water, 110, 80),
                        lower("Undertow", Water, 50, StatType::Attack, 1),
                        MoveData::new("Quick Attack", Normal, 40, 100),
                    ],
                    "A Water type that drags foes under.",
                ),
                creature(
                    "tide-glacierglow",
                    "Glacierglow",
                    vec![Ice],
                    [98, 88, 66, 74],
                    vec![
                        status("Ice Beam", Ice, 90, 100, StatusKind::Freeze, 10),
                        status("Frost Breath", Ice, 0, 85, StatusKind::Freeze, 100),
                        MoveData::new("Quick Attack", Normal, 40, 100),
                    ],
                    "An Ice type whose breath stills the air.",
                ),
                creature(
                    "tide-mysticsoul",
                    "Mysticsoul",
                    vec![Psychic, Fairy],
                    [104, 78, 70, 82],
                    vec![
                        MoveData::new("Psychic", Psychic, 90, 100),
                        status("Lullaby", Fairy, 0, 75, StatusKind::Sleep, 100),
                        MoveData::new("Moonblast", Fairy, 95, 100),
                        status("Sludge Bomb", Poison, 90, 100, StatusKind::Poison, 30),
                    ],
                    "A Psychic/Fairy type said to sing foes to sleep.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_prefab_rosters_are_battle_ready() {
        let rosters = get_prefab_rosters();
        let mut ids = HashSet::new();
        for roster in &rosters {
            assert_eq!(roster.creatures.len(), 3, "{} should field three", roster.name);
            for creature in &roster.creatures {
                assert!(ids.insert(creature.id.clone()), "duplicate id {}", creature.id);
                assert!((2..=4).contains(&creature.moves.len()));
                assert!((1..=2).contains(&creature.types.len()));
                assert_eq!(creature.level, 1);
            }
        }
    }

    #[test]
    fn test_roster_round_trips_through_ron() {
        let roster = get_prefab_rosters().remove(0);
        let source = ron::ser::to_string_pretty(&roster, ron::ser::PrettyConfig::default())
            .expect("roster serializes");
        assert_eq!(parse_roster_ron(&source).expect("roster parses"), roster);
    }

    #[test]
    fn test_hand_written_roster_parses() {
        let source = r#"(
            id: "duo",
            name: "Duo",
            description: "Two scrappers",
            creatures: [
                (
                    id: "duo-1",
                    name: "Punchfist",
                    types: [Fighting],
                    stats: (hp: 100, attack: 90, defense: 70, speed: 60),
                    moves: [
                        (name: "Close Combat", move_type: Fighting, power: 120, accuracy: 100, effect: None),
                        (name: "Focus", move_type: Fighting, power: 0, accuracy: 100,
                            effect: Some(StatBoost(target: User, stat: Attack, stages: 1))),
                    ],
                    level: 1,
                    xp: 0,
                ),
            ],
        )"#;

        let roster = parse_roster_ron(source).expect("roster parses");
        let creature = &roster.creatures[0];
        assert_eq!(creature.description, "");
        assert_eq!(
            creature.moves[1].effect,
            Some(MoveEffect::StatBoost {
                target: Target::User,
                stat: StatType::Attack,
                stages: 1
            })
        );
    }

    #[test]
    fn test_malformed_roster_is_a_parse_error() {
        assert!(matches!(parse_roster_ron("(id: 3)"), Err(ConfigError::Parse(_))));
    }
}
