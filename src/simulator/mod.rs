//! Monte Carlo balance simulator.
//!
//! Runs batches of simulated playthroughs to answer:
//! - How many rolls does a full collection take?
//! - How do bias and cooldown reduction ramp across the run?
//! - How expensive is the final stretch (the last few numbers)?
//!
//! The simulator drives GameSession (src/core/session.rs) directly, so
//! results match real gameplay behavior roll for roll.

mod config;
mod report;
mod runner;
mod session;

pub use config::SimConfig;
pub use report::{BalanceReport, EndgameStats, MilestoneStats};
pub use runner::{run_analysis, simulate_session};
pub use session::{MilestoneSample, SessionResult, SessionSummary};
