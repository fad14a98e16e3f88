//! Key-value persistence for the player and match collections.
//!
//! A store only knows how to get and set named blobs of text. The typed loaders here are
//! the single boundary where stored JSON is validated: a missing or corrupt collection
//! loads as empty, and records that cannot be read or fail validation are skipped, so
//! nothing downstream has to deal with partially-shaped data. Skipped records are not kept:
//! the next save of that collection drops them for good, which the warning says.

use crate::models::{GameMatch, Player};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key of the players collection.
pub const PLAYERS_KEY: &str = "billiardPlayers";
/// Storage key of the match history collection.
pub const MATCHES_KEY: &str = "billiardMatches";

/// Opaque get/set of named collections as serialized text.
pub trait Store {
    /// Stored text for `key`, or None if nothing was ever written (or it cannot be read).
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> io::Result<()>;
}

/// In-process store; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> io::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// One `<key>.json` file per collection inside a data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: String) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write-then-rename: readers never observe a half-written collection.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

/// Parse a stored collection, skipping records that fail to parse or `check`.
/// Corrupt text yields an empty list.
fn load_collection<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
    check: impl Fn(T) -> Result<T, String>,
) -> Vec<T> {
    let Some(text) = store.get(key) else {
        return Vec::new();
    };
    let raw: Vec<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Collection {} is corrupt, treating it as empty: {}", key, e);
            return Vec::new();
        }
    };
    raw.into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let raw = value.to_string();
            let record = serde_json::from_value(value)
                .map_err(|e| e.to_string())
                .and_then(&check);
            match record {
                Ok(record) => Some(record),
                Err(reason) => {
                    log::warn!(
                        "Skipping record {} in {} ({}); it will be dropped on the next save: {}",
                        idx,
                        key,
                        reason,
                        raw
                    );
                    None
                }
            }
        })
        .collect()
}

fn save_collection<T: Serialize>(store: &mut dyn Store, key: &str, items: &[T]) -> io::Result<()> {
    let text = serde_json::to_string(items).map_err(io::Error::other)?;
    store.set(key, text)
}

/// Registered players; blank names are skipped and inconsistent counters repaired.
pub fn load_players(store: &dyn Store) -> Vec<Player> {
    load_collection(store, PLAYERS_KEY, Player::validated)
}

pub fn save_players(store: &mut dyn Store, players: &[Player]) -> io::Result<()> {
    save_collection(store, PLAYERS_KEY, players)
}

/// Match history in append (chronological creation) order.
pub fn load_matches(store: &dyn Store) -> Vec<GameMatch> {
    load_collection(store, MATCHES_KEY, Ok)
}

pub fn save_matches(store: &mut dyn Store, matches: &[GameMatch]) -> io::Result<()> {
    save_collection(store, MATCHES_KEY, matches)
}
