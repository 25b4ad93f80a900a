//! High score persistence
//!
//! A single integer. Native builds keep it in a plain-text file; wasm builds
//! keep it in LocalStorage. Missing or unreadable data counts as 0.

use std::path::{Path, PathBuf};

use crate::error::GameResult;

/// Somewhere the high score lives between runs
pub trait HighScoreStore {
    /// Stored high score, 0 if absent or corrupt
    fn load(&self) -> u64;

    /// Overwrite the stored high score
    fn save(&mut self, score: u64) -> GameResult<()>;
}

/// Parse stored text as a non-negative integer.
///
/// Surrounding whitespace is tolerated; anything else that is not plain
/// digits is rejected.
pub fn parse_high_score(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Plain-text file store
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u64 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return 0;
            }
        };
        match parse_high_score(&text) {
            Some(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            None => {
                log::warn!("Corrupt high score file {}, using 0", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u64) -> GameResult<()> {
        std::fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    /// Raw stored text, as a file would hold it
    pub contents: Option<String>,
    /// Every value passed to `save`, in order
    pub saves: Vec<u64>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            saves: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u64 {
        self.contents
            .as_deref()
            .and_then(parse_high_score)
            .unwrap_or(0)
    }

    fn save(&mut self, score: u64) -> GameResult<()> {
        self.contents = Some(score.to_string());
        self.saves.push(score);
        Ok(())
    }
}

/// LocalStorage store (wasm only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageHighScoreStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageHighScoreStore {
    const STORAGE_KEY: &'static str = "tower_climb_high_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageHighScoreStore {
    fn load(&self) -> u64 {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(text)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(score) = parse_high_score(&text) {
                    log::info!("Loaded high score {}", score);
                    return score;
                }
                log::warn!("Corrupt high score in LocalStorage, using 0");
            }
        }
        0
    }

    fn save(&mut self, score: u64) -> GameResult<()> {
        let storage = Self::storage().ok_or(crate::error::GameError::StorageUnavailable)?;
        storage
            .set_item(Self::STORAGE_KEY, &score.to_string())
            .map_err(|_| crate::error::GameError::StorageUnavailable)?;
        log::info!("High score {} saved", score);
        Ok(())
    }
}
