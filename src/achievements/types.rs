//! Achievement types and unlock state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::session::GameSession;

/// Achievement categories for organization in a browser view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Collection,
    Streaks,
    Mastery,
    Dedication,
}

impl AchievementCategory {
    /// Display order for category headers.
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Collection,
        AchievementCategory::Streaks,
        AchievementCategory::Mastery,
        AchievementCategory::Dedication,
    ];

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Collection => "Collection",
            AchievementCategory::Streaks => "Streaks",
            AchievementCategory::Mastery => "Mastery",
            AchievementCategory::Dedication => "Dedication",
        }
    }
}

/// Stable identifier for every achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Collection progress
    FirstFind,     // 1 number
    QuarterClub,   // 25 numbers
    HalfwayThere,  // 50 numbers
    HomeStretch,   // 75 numbers
    Completionist, // all 100
    // New-number streaks
    HotStreak,   // streak of 5
    Unstoppable, // streak of 10
    // Special sets and levels
    PrimeCollector, // all 25 primes
    GoldenSpiral,   // all Fibonacci numbers
    RisingStar,     // first leveled number
    Centurion,      // a number at max level
    // Long-haul rolling
    DedicatedRoller, // 100 rolls
    MarathonRoller,  // 1,000 rolls
    Automated,       // auto-roll unlocked
}

/// Static definition of one achievement. The predicate is the unlock
/// rule, evaluated against a session by `Achievements::evaluate`.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub secret: bool,
    pub icon: &'static str,
    pub predicate: fn(&GameSession) -> bool,
}

/// When an achievement was unlocked (unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlock state (saved to disk). Purely an observer: the session engine
/// never calls into this; a front end evaluates after draws.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Achievements {
    /// Unlocked ids with their unlock timestamps.
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    /// Whether an achievement has been unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Marks an achievement unlocked. Returns false if it already was.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    /// Runs every rule against the session and unlocks the ones that now
    /// hold. Returns only the newly unlocked ids, in table order.
    pub fn evaluate(&mut self, session: &GameSession) -> Vec<AchievementId> {
        use super::data::ALL_ACHIEVEMENTS;

        let mut newly_unlocked = Vec::new();
        for def in ALL_ACHIEVEMENTS {
            if !self.is_unlocked(def.id) && (def.predicate)(session) {
                self.unlock(def.id);
                newly_unlocked.push(def.id);
            }
        }
        newly_unlocked
    }

    /// Number of defined achievements.
    pub fn total_count(&self) -> usize {
        use super::data::ALL_ACHIEVEMENTS;
        ALL_ACHIEVEMENTS.len()
    }

    /// Number unlocked so far.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlocked share of the table, 0.0 to 100.0.
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }
}
