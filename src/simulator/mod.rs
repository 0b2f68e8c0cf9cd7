//! Battle balance simulator for Monte Carlo analysis.
//!
//! Runs many randomized mob battles to analyze:
//! - First-mover advantage
//! - Battle length distribution
//! - How much health winners have left
//!
//! The simulator resolves battles with the shared `run_battle` logic,
//! so results match real battle behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, BattleStats};
