//! Creature Arena Battle Engine
//!
//! A turn-based creature battle resolver: two rosters trade moves until one
//! side is fully knocked out. The engine is a pure state machine over a
//! fetched battle snapshot; randomness, storage and experience awards are
//! injected at the edges.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod errors;
pub mod generation;
pub mod prefab_rosters;
pub mod progression;
pub mod repository;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{CreatureType, MoveData, MoveEffect, StatType, StatusKind, Target, TypeMatchups};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{create_battle, resolve_move, SideSetup, TurnOutcome};
pub use battle::rng::{BattleRng, RandRng, TurnRng};
pub use battle::service::BattleService;
pub use battle::state::{
    BattleId, BattleState, Controller, LevelUpEvent, Phase, Side, SideState, StatStages,
    StatusCondition,
};
pub use battle::switching::resolve_switch;
pub use battle::view::{BattleView, SideView};

// Creature records and progression.
pub use config::{ConfigError, EngineConfig};
pub use creature::{BaseStats, Creature, CreatureBook, CreatureId};
pub use progression::{ExperienceAwarder, LevelUpOutcome, XpAward, XpRewards};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, NotFoundError, RepositoryError, RepositoryResult,
};
