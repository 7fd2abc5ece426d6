//! Simulation configuration.

/// Configuration for a batch of simulated collection runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of trials to play out
    pub trials: u32,

    /// Legacy pacing knob kept for CLI compatibility; the harness always
    /// runs a tight loop, so this is echoed but never applied
    pub speed_multiplier: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Safety cap on rolls per trial (None = play until complete)
    pub max_rolls: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 5,
            speed_multiplier: 1000,
            seed: None,
            max_rolls: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quiet deterministic config for tests.
    pub fn seeded(trials: u32, seed: u64) -> Self {
        Self {
            trials,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Larger batch for tighter aggregate estimates.
    pub fn thorough(trials: u32) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }
}
