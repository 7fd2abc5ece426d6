//! Achievement persistence (load/save to disk).

use std::io;

use super::types::Achievements;
use crate::save::{load_json_or_default, save_json};

/// Filename of the achievements file inside ~/.centum/.
pub const ACHIEVEMENTS_FILENAME: &str = "achievements.json";

/// Load achievements from disk, or return default if missing or invalid.
pub fn load_achievements() -> Achievements {
    load_json_or_default(ACHIEVEMENTS_FILENAME)
}

/// Save achievements to disk.
pub fn save_achievements(achievements: &Achievements) -> io::Result<()> {
    save_json(ACHIEVEMENTS_FILENAME, achievements)
}
