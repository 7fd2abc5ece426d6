//! Achievement system module.
//!
//! A declarative rule table evaluated against the session after draws.
//! The engine never calls into this; front ends run `evaluate` and store
//! the result in `~/.centum/achievements.json`.

pub mod data;
pub mod persistence;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use persistence::{load_achievements, save_achievements};
pub use types::{AchievementCategory, AchievementDef, AchievementId, Achievements};
