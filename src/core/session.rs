//! Session engine: owns a collection plus its lifetime stats and commits
//! draws against them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPLETION_MILESTONES, COOLDOWN_AUTO_MS, COOLDOWN_MANUAL_MS, UNLOCK_AUTO_THRESHOLD,
};
use crate::core::balance::{compute_bias, cooldown_reduction, effective_cooldown_ms};
use crate::core::collection::CollectionState;
use crate::core::sampling::roll_with_bias;

/// Lifetime counters for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionStats {
    /// Total draws ever made.
    pub total_rolls: u64,
    /// Distinct items collected. Always equals the collection's own
    /// recount for any reachable state.
    pub collected_count: u32,
    /// Consecutive new-item draws.
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Everything one draw did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawResult {
    pub index: u32,
    pub was_new: bool,
    pub old_level: u8,
    pub new_level: u8,
    /// Bias in effect when this draw was sampled.
    pub bias: f64,
}

impl DrawResult {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }
}

/// A running game. Create one per player, or one per simulated trial.
#[derive(Debug, Clone)]
pub struct GameSession {
    collection: CollectionState,
    stats: ProgressionStats,
    auto_unlocked: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh session: nothing collected, nothing unlocked.
    pub fn new() -> Self {
        Self {
            collection: CollectionState::new(),
            stats: ProgressionStats::default(),
            auto_unlocked: false,
        }
    }

    /// Rebuilds a session from loaded parts. Derived fields are healed:
    /// the collection is normalized and the collected counter recounted,
    /// so partial or hand-edited saves cannot break the invariants.
    pub fn from_parts(
        mut collection: CollectionState,
        mut stats: ProgressionStats,
        auto_unlocked: bool,
    ) -> Self {
        collection.normalize();
        stats.collected_count = collection.collected_count();
        let auto_unlocked = auto_unlocked || stats.collected_count >= UNLOCK_AUTO_THRESHOLD;
        Self {
            collection,
            stats,
            auto_unlocked,
        }
    }

    pub fn collection(&self) -> &CollectionState {
        &self.collection
    }

    pub fn stats(&self) -> &ProgressionStats {
        &self.stats
    }

    /// Current sampling bias (recomputed, never cached).
    pub fn bias(&self) -> f64 {
        compute_bias(&self.collection)
    }

    /// Current cooldown reduction in percentage points.
    pub fn cooldown_reduction(&self) -> u32 {
        cooldown_reduction(&self.collection)
    }

    /// Effective manual draw cooldown for the caller's timer.
    pub fn manual_cooldown_ms(&self) -> u64 {
        effective_cooldown_ms(COOLDOWN_MANUAL_MS, self.cooldown_reduction())
    }

    /// Effective auto draw cooldown for the caller's timer.
    pub fn auto_cooldown_ms(&self) -> u64 {
        effective_cooldown_ms(COOLDOWN_AUTO_MS, self.cooldown_reduction())
    }

    /// Whether auto drawing has been unlocked (10 items, sticky).
    pub fn auto_roll_unlocked(&self) -> bool {
        self.auto_unlocked
    }

    pub fn is_complete(&self) -> bool {
        self.collection.is_complete()
    }

    /// Samples one index with the current bias and commits it.
    pub fn draw(&mut self, rng: &mut impl Rng) -> DrawResult {
        let bias = self.bias();
        let index = roll_with_bias(&self.collection, bias, rng);
        match self.commit(index, bias) {
            Some(result) => result,
            // the sampler only yields indices in 1..=100
            None => unreachable!("sampled index out of range"),
        }
    }

    /// Commits an externally chosen roll (replays, deterministic tests).
    /// Out-of-range indices are rejected without touching any state.
    pub fn apply_roll(&mut self, index: u32) -> Option<DrawResult> {
        let bias = self.bias();
        self.commit(index, bias)
    }

    fn commit(&mut self, index: u32, bias: f64) -> Option<DrawResult> {
        let outcome = self.collection.record_draw(index)?;
        self.stats.total_rolls += 1;
        if outcome.was_new {
            self.stats.collected_count += 1;
            self.stats.current_streak += 1;
            self.stats.best_streak = self.stats.best_streak.max(self.stats.current_streak);
            if self.stats.collected_count >= UNLOCK_AUTO_THRESHOLD {
                self.auto_unlocked = true;
            }
        } else {
            self.stats.current_streak = 0;
        }
        Some(DrawResult {
            index,
            was_new: outcome.was_new,
            old_level: outcome.old_level,
            new_level: outcome.new_level,
            bias,
        })
    }
}

/// Completion milestones (25/50/75/100) crossed by a count change.
/// Callers observe these from draw results; the engine never re-checks.
pub fn milestones_crossed(old_count: u32, new_count: u32) -> Vec<u32> {
    COMPLETION_MILESTONES
        .iter()
        .copied()
        .filter(|&milestone| old_count < milestone && new_count >= milestone)
        .collect()
}
