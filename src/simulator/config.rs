//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to simulate
    pub num_battles: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-battle)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_battles: 1000,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick seeded config for tests and reproducible analysis.
    pub fn seeded(num_battles: u32, seed: u64) -> Self {
        Self {
            num_battles,
            seed: Some(seed),
            verbosity: 0,
        }
    }
}
