//! Key-value persistence behind a trait so tests can inject an in-memory fake.
//!
//! Every persisted blob is a JSON string under one of four fixed keys. The
//! file-backed store keeps one `<key>.json` per key under the platform config
//! directory, resolved with the `directories` crate.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

pub const PLAYERS_KEY: &str = "players";
pub const QUIZ_LEADERBOARD_KEY: &str = "leaderboard_quiz";
pub const MATCH_LEADERBOARD_KEY: &str = "leaderboard_match";
pub const VERSUS_LEADERBOARD_KEY: &str = "leaderboard_versus";

const ALL_KEYS: [&str; 4] = [
    PLAYERS_KEY,
    QUIZ_LEADERBOARD_KEY,
    MATCH_LEADERBOARD_KEY,
    VERSUS_LEADERBOARD_KEY,
];

/// String-keyed blob storage. Reads never fail; a missing or unreadable key
/// is simply absent and callers fall back to defaults.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Clears every persisted key: roster plus all three leaderboards.
pub fn reset_all(store: &mut dyn KvStore) -> io::Result<()> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}

/// File-backed store rooted at the platform config directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "kataclash").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        let dir = project_dirs.config_dir().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store rooted at an explicit directory (used by tests and tools).
    pub fn at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert!(store.get("players").is_none());
        store.set("players", "[]").unwrap();
        assert_eq!(store.get("players").as_deref(), Some("[]"));
        store.remove("players").unwrap();
        assert!(store.get("players").is_none());
    }

    #[test]
    fn test_reset_all_clears_every_key() {
        let mut store = MemoryStore::default();
        for key in ALL_KEYS {
            store.set(key, "{}").unwrap();
        }
        reset_all(&mut store).unwrap();
        for key in ALL_KEYS {
            assert!(store.get(key).is_none(), "key {} should be cleared", key);
        }
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = std::env::temp_dir().join("kataclash-test-store");
        let mut store = FileStore::at(dir.clone()).unwrap();
        store.remove("players").unwrap();
        assert!(store.get("players").is_none());
        store.set("players", "[1]").unwrap();
        assert_eq!(store.get("players").as_deref(), Some("[1]"));
        store.remove("players").unwrap();
        let _ = fs::remove_dir_all(dir);
    }
}
