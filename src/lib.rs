//! Mobfight - Turn-Based Mob Combat Library
//!
//! This module exposes the battle logic for testing and external use.

pub mod build_info;
pub mod combat;
pub mod constants;
pub mod simulator;

pub use combat::battle::{attack, narrate_battle, run_battle, AttackOutcome, BattleEvent};
pub use combat::mob::Mob;
