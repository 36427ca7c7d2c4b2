//! High score persistence collaborator
//!
//! Narrow interface: load the table once at startup, save it after every
//! insertion. Backed by LocalStorage in the browser and an in-memory slot on
//! native (used by tests). Malformed or absent data is never an error — it
//! decodes to an empty table.

use crate::highscores::HighScoreTable;

/// Fixed storage key for the persisted table
pub const STORAGE_KEY: &str = "astro_dodge_highscores";

/// Durable key-value persistence for the high score table
pub trait ScoreStore {
    fn load_table(&self) -> HighScoreTable;
    fn save_table(&mut self, table: &HighScoreTable);
}

/// Decode persisted JSON, treating anything unreadable as an empty table
fn decode(json: Option<&str>) -> HighScoreTable {
    match json {
        Some(json) => serde_json::from_str(json).unwrap_or_else(|err| {
            log::warn!("discarding malformed high score data: {err}");
            HighScoreTable::new()
        }),
        None => {
            log::info!("no high scores found, starting fresh");
            HighScoreTable::new()
        }
    }
}

/// In-memory store for native builds and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the slot with raw JSON (test hook for corrupt data)
    pub fn with_raw(json: &str) -> Self {
        Self {
            slot: Some(json.to_string()),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_table(&self) -> HighScoreTable {
        decode(self.slot.as_deref())
    }

    fn save_table(&mut self, table: &HighScoreTable) {
        match serde_json::to_string(table) {
            Ok(json) => self.slot = Some(json),
            Err(err) => log::warn!("failed to encode high scores: {err}"),
        }
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn load_table(&self) -> HighScoreTable {
        let json = Self::storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        decode(json.as_deref())
    }

    fn save_table(&mut self, table: &HighScoreTable) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(table) {
                let _ = storage.set_item(STORAGE_KEY, &json);
                log::info!("high scores saved ({} entries)", table.entries.len());
            }
        }
    }
}
