//! Core collection engine: state, balance math, sampling, sessions.

pub mod balance;
pub mod collection;
pub mod sampling;
pub mod session;

pub use balance::{compute_bias, cooldown_reduction, effective_cooldown_ms, special_bonus};
pub use collection::{
    level_for_count, level_progress, CollectionState, ItemSlot, LevelProgress, RollOutcome,
};
pub use sampling::{roll_with_bias, select_biased_target};
pub use session::{milestones_crossed, DrawResult, GameSession, ProgressionStats};
