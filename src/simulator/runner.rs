//! Trial runner: plays full collection sessions and records progress.
//!
//! The engine itself does no I/O and takes an injected RNG; printing and
//! timing live out here. A session terminates almost surely on its own
//! because the uniform branch never drops below 15% probability, so the
//! roll cap is a harness safety valve only and is off by default.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::BalanceReport;
use super::session::{MilestoneSample, SessionResult, SessionSummary};
use crate::constants::{ITEM_COUNT, RECORDED_MILESTONES};
use crate::core::session::GameSession;

/// Run the full batch and aggregate a report.
pub fn run_analysis(config: &SimConfig) -> BalanceReport {
    let mut sessions = Vec::with_capacity(config.trials as usize);

    for trial_idx in 0..config.trials {
        // Create RNG for this trial
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + trial_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let result = simulate_session(config, &mut rng);

        if config.verbosity >= 1 {
            let summary = &result.summary;
            println!(
                "Trial {}/{} - {} rolls, bias {:.1}%, cooldown -{}%{}",
                trial_idx + 1,
                config.trials,
                summary.total_rolls,
                summary.final_bias,
                summary.final_cooldown_reduction,
                if summary.completed {
                    ""
                } else {
                    " (did not complete)"
                },
            );
        }

        sessions.push(result);
    }

    BalanceReport::from_sessions(sessions)
}

/// Play one session until the collection is complete (or the safety cap
/// fires) and record milestone samples along the way.
pub fn simulate_session(config: &SimConfig, rng: &mut ChaCha8Rng) -> SessionResult {
    let mut session = GameSession::new();
    let mut rolls_by_completion = BTreeMap::new();
    let mut milestones = Vec::with_capacity(RECORDED_MILESTONES.len());
    let started = Instant::now();
    let mut last_reported = 0;

    loop {
        if let Some(cap) = config.max_rolls {
            if session.stats().total_rolls >= cap {
                break;
            }
        }

        session.draw(rng);
        let collected = session.stats().collected_count;

        if RECORDED_MILESTONES.contains(&collected) && !rolls_by_completion.contains_key(&collected)
        {
            let rolls = session.stats().total_rolls;
            rolls_by_completion.insert(collected, rolls);
            milestones.push(MilestoneSample {
                completion: collected,
                rolls,
                bias: session.bias(),
                cooldown_reduction: session.cooldown_reduction(),
            });
        }

        if config.verbosity >= 2 && collected >= last_reported + 10 {
            last_reported = collected - collected % 10;
            println!(
                "  {}/{} collected - bias {:.1}%, {} rolls",
                collected,
                ITEM_COUNT,
                session.bias(),
                session.stats().total_rolls
            );
        }

        if session.is_complete() {
            break;
        }
    }

    let summary = SessionSummary {
        total_rolls: session.stats().total_rolls,
        final_bias: session.bias(),
        final_cooldown_reduction: session.cooldown_reduction(),
        best_streak: session.stats().best_streak,
        completed: session.is_complete(),
        elapsed_ms: started.elapsed().as_millis() as u64,
    };

    SessionResult {
        rolls_by_completion,
        milestones,
        summary,
    }
}
