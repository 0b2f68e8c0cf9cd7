//! Battle balance simulator CLI.
//!
//! Run Monte Carlo mob battles to analyze combat balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                 # Default: 1000 battles
//!   cargo run --bin simulate -- -n 100       # 100 battles
//!   cargo run --bin simulate -- --seed 42    # Reproducible run
//!   cargo run --bin simulate -- --json       # Also dump a JSON report

use mobfight::build_info::{BUILD_COMMIT, BUILD_DATE};
use mobfight::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MOBFIGHT BATTLE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Build: {} ({})", BUILD_COMMIT, BUILD_DATE);
    println!();
    println!("Configuration:");
    println!("  Battles:  {}", config.num_battles);
    if let Some(seed) = config.seed {
        println!("  Seed:     {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "battle_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--battles" => {
                if i + 1 < args.len() {
                    config.num_battles = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                // Handled in main after the report is built
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Mobfight battle simulator");
    println!();
    println!("OPTIONS:");
    println!("  -n, --battles <N>   Number of battles to simulate (default 1000)");
    println!("  -s, --seed <SEED>   Random seed for reproducible runs");
    println!("  -v, --verbose       Print each battle result");
    println!("  -q, --quiet         Suppress per-battle output");
    println!("      --json          Also write the report to a timestamped JSON file");
    println!("  -h, --help          Show this help");
}
