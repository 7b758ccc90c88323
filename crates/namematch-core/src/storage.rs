//! JSON-file and in-memory implementations of [`QuizRepository`].

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{QuizError, Result};
use crate::model::{Person, Stats};
use crate::traits::QuizRepository;

/// Default roster file name.
pub const DEFAULT_DATA_FILE: &str = "people_data.json";
/// Default statistics file name.
pub const DEFAULT_STATS_FILE: &str = "game_stats.json";

/// Stores the roster and the statistics as two pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    roster_path: PathBuf,
    stats_path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(roster_path: impl Into<PathBuf>, stats_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            stats_path: stats_path.into(),
        }
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE, DEFAULT_STATS_FILE)
    }
}

impl QuizRepository for JsonFileRepository {
    fn load_roster(&self) -> Vec<Person> {
        load_or_default(&self.roster_path)
    }

    fn save_roster(&self, people: &[Person]) -> Result<()> {
        write_json(&self.roster_path, &people)
    }

    fn load_stats(&self) -> Stats {
        load_or_default(&self.stats_path)
    }

    fn save_stats(&self, stats: &Stats) -> Result<()> {
        write_json(&self.stats_path, stats)
    }
}

/// Read and decode `path`, substituting `T::default()` when the file is
/// missing, unreadable, or malformed.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            tracing::warn!("error reading {}: {e}; starting with empty data", path.display());
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("error decoding {}: {e}; starting with empty data", path.display());
            T::default()
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let persist_err = |source| QuizError::Persist {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(persist_err)?;
    }
    std::fs::write(path, json).map_err(persist_err)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// In-memory repository for tests and embedding.
///
/// Counts saves so callers can assert that every mutation was flushed.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    roster: Mutex<Vec<Person>>,
    stats: Mutex<Stats>,
    roster_saves: AtomicU32,
    stats_saves: AtomicU32,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an existing roster.
    pub fn with_roster(people: Vec<Person>) -> Self {
        Self {
            roster: Mutex::new(people),
            ..Self::default()
        }
    }

    pub fn roster_saves(&self) -> u32 {
        self.roster_saves.load(Ordering::Relaxed)
    }

    pub fn stats_saves(&self) -> u32 {
        self.stats_saves.load(Ordering::Relaxed)
    }
}

// Saves replace the stored value wholesale, so data behind a poisoned lock is
// still a complete snapshot. Loads return it; saves report the poisoning.
impl QuizRepository for MemoryRepository {
    fn load_roster(&self) -> Vec<Person> {
        self.roster
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save_roster(&self, people: &[Person]) -> Result<()> {
        let mut roster = self.roster.lock().map_err(|_| QuizError::LockPoisoned)?;
        *roster = people.to_vec();
        self.roster_saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn load_stats(&self) -> Stats {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save_stats(&self, stats: &Stats) -> Result<()> {
        let mut stored = self.stats.lock().map_err(|_| QuizError::LockPoisoned)?;
        *stored = stats.clone();
        self.stats_saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
