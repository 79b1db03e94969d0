// Creature Arena Schema - Shared type definitions
// This crate contains the closed vocabulary shared by the battle engine and
// anything that stores or displays battle records: type tags and their chart,
// stat kinds, status kinds, and the move/effect records creatures carry.

pub use battle_data::*;
pub use creature_types::*;

pub mod battle_data;
pub mod creature_types;
