//! Centum - Collect-Them-All Progression Engine
//!
//! This module exposes the game logic for testing and external use.

pub mod achievements;
pub mod constants;
pub mod core;
pub mod save;
pub mod simulator;
