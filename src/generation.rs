//! Random creature generation.

use crate::battle::rng::{chance, pick_index, BattleRng};
use crate::creature::{BaseStats, Creature, CreatureId};
use schema::{CreatureType, MoveData};
use strum::IntoEnumIterator;

pub const SECONDARY_TYPE_CHANCE: u8 = 30;
pub const TEAM_SIZE: usize = 3;

const NAME_ROOTS: &[&str] = &[
    "Blaze", "Aqua", "Flora", "Volt", "Psy", "Frost", "Draco", "Punch", "Wind", "Venom", "Earth",
    "Stone", "Speed", "Phantom", "Steel", "Shadow", "Sparkle", "Thunder", "Crystal", "Inferno",
    "Tidal", "Jungle", "Storm", "Mystic", "Glacier", "Cosmos", "Crimson", "Azure", "Emerald",
    "Golden", "Silver", "Obsidian", "Prismatic", "Nebula",
];

const NAME_SUFFIXES: &[&str] = &[
    "rix", "saur", "axis", "wave", "bite", "nus", "claw", "storm", "fang", "guard", "bug", "mis",
    "crest", "maw", "wings", "ton", "fury", "blade", "heart", "soul", "fire", "flow", "wing",
    "tail", "horn", "eye", "fist", "strike", "roar", "whisper", "echo", "spark", "flame", "frost",
    "glow", "shine", "burst", "dash",
];

/// The fixed pool generated creatures draw their moves from, one per type.
pub fn move_pool() -> Vec<MoveData> {
    use CreatureType::*;
    vec![
        MoveData::new("Flame Burst", Fire, 70, 100),
        MoveData::new("Hydro Pump", Water, 110, 80),
        MoveData::new("Vine Whip", Grass, 45, 100),
        MoveData::new("Thunder", Electric, 110, 70),
        MoveData::new("Psychic", Psychic, 90, 100),
        MoveData::new("Ice Beam", Ice, 90, 100),
        MoveData::new("Dragon Pulse", Dragon, 85, 100),
        MoveData::new("Close Combat", Fighting, 120, 100),
        MoveData::new("Air Slash", Flying, 75, 95),
        MoveData::new("Sludge Bomb", Poison, 90, 100),
        MoveData::new("Earthquake", Ground, 100, 100),
        MoveData::new("Rock Slide", Rock, 75, 90),
        MoveData::new("Quick Attack", Normal, 40, 100),
        MoveData::new("Shadow Ball", Ghost, 80, 100),
        MoveData::new("Bug Bite", Bug, 60, 100),
        MoveData::new("Steel Wing", Steel, 70, 90),
        MoveData::new("Dark Pulse", Dark, 80, 100),
        MoveData::new("Moonblast", Fairy, 95, 100),
    ]
}

fn pick<'a, T>(rng: &mut dyn BattleRng, items: &'a [T], reason: &str) -> &'a T {
    &items[pick_index(rng, items.len(), reason)]
}

/// Uniform integer in `min..min + span`.
fn stat_in(rng: &mut dyn BattleRng, min: u16, span: u16, reason: &str) -> u16 {
    min + pick_index(rng, usize::from(span), reason) as u16
}

fn generate_types(rng: &mut dyn BattleRng) -> Vec<CreatureType> {
    let all: Vec<CreatureType> = CreatureType::iter().collect();
    let primary = *pick(rng, &all, "primary type");
    if !chance(rng, SECONDARY_TYPE_CHANCE, "has secondary type") {
        return vec![primary];
    }
    let others: Vec<CreatureType> = all.into_iter().filter(|t| *t != primary).collect();
    vec![primary, *pick(rng, &others, "secondary type")]
}

/// 2-4 distinct moves. The first always matches one of `types`, falling back
/// to a Normal move when no pool move does.
fn generate_moves(rng: &mut dyn BattleRng, types: &[CreatureType]) -> Vec<MoveData> {
    let mut pool = move_pool();
    let move_count = 2 + pick_index(rng, 3, "move count");

    let matching: Vec<usize> = (0..pool.len())
        .filter(|&i| types.contains(&pool[i].move_type))
        .collect();
    let first = if matching.is_empty() {
        pool.iter()
            .position(|m| m.move_type == CreatureType::Normal)
            .unwrap_or(0)
    } else {
        *pick(rng, &matching, "signature move")
    };

    let mut moves = vec![pool.remove(first)];
    while moves.len() < move_count && !pool.is_empty() {
        let index = pick_index(rng, pool.len(), "extra move");
        moves.push(pool.remove(index));
    }
    moves
}

/// Roll a fresh level 1 creature.
pub fn generate_creature(id: impl Into<CreatureId>, rng: &mut dyn BattleRng) -> Creature {
    let name = format!(
        "{}{}",
        pick(rng, NAME_ROOTS, "name root"),
        pick(rng, NAME_SUFFIXES, "name suffix")
    );
    let types = generate_types(rng);
    let moves = generate_moves(rng, &types);
    let stats = BaseStats {
        hp: stat_in(rng, 80, 50, "hp"),
        attack: stat_in(rng, 60, 40, "attack"),
        defense: stat_in(rng, 50, 40, "defense"),
        speed: stat_in(rng, 40, 60, "speed"),
    };
    let type_names: Vec<String> = types.iter().map(|t| t.to_string()).collect();
    let description = format!(
        "A mysterious {} type creature with incredible power.",
        type_names.join("/")
    );

    let mut creature = Creature::new(id, name, types, stats, moves);
    creature.description = description;
    creature
}

/// A team of `TEAM_SIZE` creatures with ids `{prefix}-1`, `{prefix}-2`, ...
pub fn generate_team(prefix: &str, rng: &mut dyn BattleRng) -> Vec<Creature> {
    (1..=TEAM_SIZE)
        .map(|n| generate_creature(format!("{}-{}", prefix, n), rng))
        .collect()
}
