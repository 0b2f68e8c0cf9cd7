//! Main simulation runner.
//!
//! Each battle spawns two random mobs and resolves them with the same
//! `run_battle` used everywhere else, so simulation results match real
//! battle behavior. Statistics are tracked from the returned events.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::SimConfig;
use super::report::SimReport;
use crate::combat::battle::{run_battle, BattleEvent};
use crate::combat::spawn::generate_mob;

/// Statistics for a single simulated battle.
#[derive(Debug, Clone, Serialize)]
pub struct BattleStats {
    /// Whether the first striker won
    pub first_mover_won: bool,
    /// Full rounds fought (a round is up to two attacks)
    pub rounds: u32,
    /// Individual attacks resolved
    pub attacks: u32,
    pub winner_name: String,
    pub winner_health: u32,
    pub winner_max_health: u32,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_battles = Vec::with_capacity(config.num_battles as usize);

    for battle_idx in 0..config.num_battles {
        // Per-battle RNG so runs are reproducible independent of order
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + battle_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_battle(&mut rng);

        if config.verbosity >= 2 {
            println!(
                "Battle {}/{} - {} wins in {} rounds with {}/{} health",
                battle_idx + 1,
                config.num_battles,
                stats.winner_name,
                stats.rounds,
                stats.winner_health,
                stats.winner_max_health
            );
        }

        all_battles.push(stats);
    }

    SimReport::from_battles(all_battles)
}

fn simulate_single_battle(rng: &mut ChaCha8Rng) -> BattleStats {
    let mut first = generate_mob(rng);
    let mut second = generate_mob(rng);

    let events = run_battle(&mut first, &mut second);
    let attacks = events
        .iter()
        .filter(|e| matches!(e, BattleEvent::Attack(_)))
        .count() as u32;

    let first_mover_won = first.is_alive();
    let winner = if first_mover_won { &first } else { &second };

    BattleStats {
        first_mover_won,
        rounds: attacks.div_ceil(2),
        attacks,
        winner_name: winner.name().to_string(),
        winner_health: winner.health(),
        winner_max_health: winner.max_health(),
    }
}
