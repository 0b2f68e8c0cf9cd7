//! Simulation report generation.

use serde::Serialize;

use super::runner::BattleStats;

/// Aggregated results from multiple simulated battles.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_battles: u32,

    // Outcome split
    pub first_mover_wins: u32,
    pub second_mover_wins: u32,

    // Battle length
    pub avg_rounds: f64,
    pub min_rounds: u32,
    pub median_rounds: u32,
    pub max_rounds: u32,

    // How much health winners keep, as a fraction of their max
    pub avg_survivor_health_pct: f64,

    // Individual battle stats for detailed analysis
    pub battle_stats: Vec<BattleStats>,
}

impl SimReport {
    /// Create a new report from completed battle stats.
    pub fn from_battles(battles: Vec<BattleStats>) -> Self {
        let num_battles = battles.len() as u32;
        let divisor = num_battles.max(1) as f64;

        let first_mover_wins = battles.iter().filter(|b| b.first_mover_won).count() as u32;
        let second_mover_wins = num_battles - first_mover_wins;

        let avg_rounds = battles.iter().map(|b| b.rounds as f64).sum::<f64>() / divisor;
        let min_rounds = battles.iter().map(|b| b.rounds).min().unwrap_or(0);
        let max_rounds = battles.iter().map(|b| b.rounds).max().unwrap_or(0);
        let median_rounds = {
            let mut sorted: Vec<u32> = battles.iter().map(|b| b.rounds).collect();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };

        let avg_survivor_health_pct = battles
            .iter()
            .map(|b| b.winner_health as f64 / b.winner_max_health as f64)
            .sum::<f64>()
            / divisor
            * 100.0;

        Self {
            num_battles,
            first_mover_wins,
            second_mover_wins,
            avg_rounds,
            min_rounds,
            median_rounds,
            max_rounds,
            avg_survivor_health_pct,
            battle_stats: battles,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  BATTLE SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Battles: {}\n\n", self.num_battles));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        let divisor = self.num_battles.max(1) as f64;
        report.push_str(&format!(
            "  First Mover Wins:   {:>6} ({:.1}%)\n",
            self.first_mover_wins,
            self.first_mover_wins as f64 / divisor * 100.0
        ));
        report.push_str(&format!(
            "  Second Mover Wins:  {:>6} ({:.1}%)\n\n",
            self.second_mover_wins,
            self.second_mover_wins as f64 / divisor * 100.0
        ));

        report.push_str("── BATTLE LENGTH ────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rounds:    {:.1}\n", self.avg_rounds));
        report.push_str(&format!("  Min Rounds:    {}\n", self.min_rounds));
        report.push_str(&format!("  Median Rounds: {}\n", self.median_rounds));
        report.push_str(&format!("  Max Rounds:    {}\n\n", self.max_rounds));

        report.push_str("── ROUND DISTRIBUTION ───────────────────────────────────────────\n");
        for (label, count) in self.round_buckets() {
            let pct = count as f64 / divisor * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:>7}: {:>5.1}% {}\n", label, pct, bar));
        }
        report.push('\n');

        report.push_str("── SURVIVORS ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Survivor Health: {:.1}% of max\n",
            self.avg_survivor_health_pct
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Bucket battle lengths for the histogram: 1-5, 6-10, ... 25+.
    fn round_buckets(&self) -> Vec<(String, u32)> {
        let mut buckets = vec![0u32; 6];
        for battle in &self.battle_stats {
            let idx = ((battle.rounds.saturating_sub(1)) / 5).min(5) as usize;
            buckets[idx] += 1;
        }
        buckets
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let label = if i == 5 {
                    "25+".to_string()
                } else {
                    format!("{}-{}", i * 5 + 1, i * 5 + 5)
                };
                (label, count)
            })
            .collect()
    }
}
