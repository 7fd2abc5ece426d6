//! Collection balance simulator CLI.
//!
//! Run Monte Carlo playthroughs of the full 1-100 collection loop.
//!
//! Usage:
//!   cargo run --bin simulate -- [TRIALS] [SPEED] [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Default: 5 trials
//!   cargo run --bin simulate -- 100            # 100 trials
//!   cargo run --bin simulate -- --seed 42      # Reproducible batch

use centum::simulator::{run_analysis, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, out_path) = parse_args(&args);

    if config.verbosity > 0 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              CENTUM BALANCE SIMULATOR                         ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Trials:         {}", config.trials);
        println!("  Speed:          x{}", config.speed_multiplier);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        if let Some(cap) = config.max_rolls {
            println!("  Max Rolls:      {}", cap);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_analysis(&config);

    println!("{}", report.to_text());

    std::fs::write(&out_path, report.to_json()).expect("Failed to write results file");
    println!("Raw data saved to: {}", out_path);
}

fn parse_args(args: &[String]) -> (SimConfig, String) {
    let mut config = SimConfig::default();
    let mut out_path = String::from("balance-results.json");
    let mut positionals = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--max-rolls" => {
                if i + 1 < args.len() {
                    config.max_rolls = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-o" | "--out" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--thorough" => {
                config = SimConfig::thorough(50);
            }
            arg => {
                // Positionals: trial count first, then speed multiplier
                if let Ok(value) = arg.parse::<u32>() {
                    match positionals {
                        0 => config.trials = value,
                        1 => config.speed_multiplier = value,
                        _ => {}
                    }
                    positionals += 1;
                }
            }
        }
        i += 1;
    }

    (config, out_path)
}

fn print_help() {
    println!("Centum Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [TRIALS] [SPEED] [OPTIONS]");
    println!();
    println!("ARGS:");
    println!("    TRIALS              Number of full playthroughs (default: 5)");
    println!("    SPEED               Cooldown speed multiplier (default: 1000)");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --max-rolls <N>     Abort a trial after N rolls");
    println!("    -o, --out <FILE>    Results file (default: balance-results.json)");
    println!("    -q, --quiet         Suppress per-trial output");
    println!("    -v, --verbose       Show within-trial progress");
    println!("    --thorough          Larger batch (50 trials) for tighter averages");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                   # Default run");
    println!("    cargo run --bin simulate -- 100            # 100 trials");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- 20 -q          # Quiet batch of 20");
}
