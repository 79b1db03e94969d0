//! Demo runner: two AI rosters battle to the end and the log is printed.
//!
//! Usage: `creature-arena [--seed N] [--config engine.ron] [--generate]`

use clap::Parser;
use creature_arena::generation::generate_team;
use creature_arena::prefab_rosters::get_prefab_rosters;
use creature_arena::repository::{InMemoryBattleRepo, InMemoryCreatureRepo};
use creature_arena::{BattleService, Creature, CreatureId, EngineConfig, RandRng, SideSetup};
use std::path::PathBuf;
use std::process::ExitCode;

const MAX_ACTIONS: usize = 1000;

/// Run an AI-vs-AI battle and print its log
#[derive(Parser)]
#[command(name = "creature-arena")]
struct Args {
    /// Seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// Engine config file in RON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Battle with freshly generated teams instead of the prefab rosters
    #[arg(long)]
    generate: bool,
}

fn rosters(generate: bool, rng: &mut RandRng) -> (Vec<Creature>, Vec<Creature>) {
    if generate {
        return (generate_team("red", rng), generate_team("blue", rng));
    }
    let mut prefabs = get_prefab_rosters().into_iter();
    let first = prefabs.next().map(|r| r.creatures).unwrap_or_default();
    let second = prefabs.next().map(|r| r.creatures).unwrap_or_default();
    (first, second)
}

fn ids(creatures: &[Creature]) -> Vec<CreatureId> {
    creatures.iter().map(|c| c.id.clone()).collect()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => RandRng::seeded(seed),
        None => RandRng::from_entropy(),
    };

    let (side1, side2) = rosters(args.generate, &mut rng);
    let (roster1, roster2) = (ids(&side1), ids(&side2));
    let service = BattleService::new(
        InMemoryCreatureRepo::with_creatures(side1.into_iter().chain(side2)),
        InMemoryBattleRepo::new(),
        config,
    );

    let mut state = match service.create_battle(SideSetup::ai(roster1), SideSetup::ai(roster2)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error creating battle: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for _ in 0..MAX_ACTIONS {
        if state.is_terminal() {
            break;
        }
        state = match service.perform_ai_move(&state.battle_id, &mut rng) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Error resolving turn: {}", e);
                return ExitCode::FAILURE;
            }
        };
    }

    for line in &state.log {
        println!("{}", line);
    }
    if !state.level_ups.is_empty() {
        println!();
        for event in &state.level_ups {
            println!(
                "{} grew from level {} to {} (+{} XP)",
                event.creature_name, event.old_level, event.new_level, event.xp_gained
            );
        }
    }

    if state.is_terminal() {
        ExitCode::SUCCESS
    } else {
        eprintln!("Battle did not finish within {} actions", MAX_ACTIONS);
        ExitCode::FAILURE
    }
}
