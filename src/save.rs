//! Save schema and JSON persistence for ~/.centum/ files.
//!
//! Loads are tolerant: missing fields fall back to defaults, corrupt
//! files fall back to a fresh state, and derived fields are healed when
//! the session is rebuilt.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::collection::CollectionState;
use crate::core::session::{GameSession, ProgressionStats};

/// Filename of the main session save inside ~/.centum/.
pub const SAVE_FILENAME: &str = "save.json";

/// On-disk snapshot of a session. Every field defaults so saves written
/// by older versions (or trimmed by hand) still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSave {
    #[serde(default)]
    pub collection: CollectionState,
    #[serde(default)]
    pub stats: ProgressionStats,
    /// Sticky auto-draw unlock. Cooldown timers are runtime state and
    /// are never saved.
    #[serde(default)]
    pub auto_unlocked: bool,
    #[serde(default)]
    pub saved_at: i64,
}

impl GameSave {
    /// Snapshots a live session.
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            collection: session.collection().clone(),
            stats: session.stats().clone(),
            auto_unlocked: session.auto_roll_unlocked(),
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Rebuilds the session, healing derived fields on the way in.
    pub fn into_session(self) -> GameSession {
        GameSession::from_parts(self.collection, self.stats, self.auto_unlocked)
    }
}

/// Get the ~/.centum/ directory path, creating it if needed.
pub fn centum_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home_dir.join(".centum");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.centum/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(centum_dir()?.join(filename))
}

/// Load a JSON file from ~/.centum/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(path) => path,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.centum/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Save the session snapshot to the default file.
pub fn save_session(session: &GameSession) -> io::Result<()> {
    save_json(SAVE_FILENAME, &GameSave::from_session(session))
}

/// Load the saved session, or a fresh one if missing or corrupt.
pub fn load_session() -> GameSession {
    load_json_or_default::<GameSave>(SAVE_FILENAME).into_session()
}
