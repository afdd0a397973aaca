//! High score leaderboard
//!
//! Persisted as a JSON array under the `"leaderboard"` key, kept sorted by
//! score descending. Invalid or missing stored data loads as an empty list.

use serde::{Deserialize, Serialize};

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player-entered name
    pub name: String,
    /// Final session score
    pub score: u64,
}

/// Score-descending leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "leaderboard";

    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a score and re-sort descending.
    ///
    /// The sort is stable, so among equal scores earlier submissions keep
    /// the higher rank. Returns the 1-indexed rank achieved.
    pub fn submit(&mut self, name: impl Into<String>, score: u64) -> usize {
        self.entries.push(LeaderboardEntry {
            name: name.into(),
            score,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));

        // The new entry is the last among its score group
        self.entries
            .iter()
            .rposition(|e| e.score == score)
            .map(|i| i + 1)
            .unwrap_or(self.entries.len())
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Serialize to the stored JSON form (a bare entry array)
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Deserialize from the stored JSON form; any decode failure yields an
    /// empty leaderboard rather than an error.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<LeaderboardEntry>>(json) {
            Ok(entries) => Self { entries },
            Err(err) => {
                log::warn!("discarding unreadable leaderboard data: {err}");
                Self::new()
            }
        }
    }

    /// Load the leaderboard from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let board = Self::from_json(&json);
                log::info!("Loaded {} leaderboard entries", board.entries.len());
                return board;
            }
        }

        log::info!("No leaderboard found, starting fresh");
        Self::new()
    }

    /// Save the leaderboard to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Leaderboard saved ({} entries)", self.entries.len());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
