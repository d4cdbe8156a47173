//! Key-value storage for the persisted state
//!
//! The store is three JSON strings, one per slice, under fixed keys. A
//! repository only moves those strings; parsing stays in the manager.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LeagueError, Result};

/// Storage keys of the three persisted slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Teams,
    Fixtures,
    Standings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::Teams, StorageKey::Fixtures, StorageKey::Standings];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Teams => "ggu-teams",
            StorageKey::Fixtures => "ggu-fixtures",
            StorageKey::Standings => "ggu-standings",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the manager writes each changed slice.
pub trait Repository {
    /// Stored value for `key`, or `None` if nothing was ever saved.
    fn load(&self, key: StorageKey) -> Result<Option<String>>;

    fn save(&mut self, key: StorageKey, value: &str) -> Result<()>;
}

/// In-process storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    values: HashMap<StorageKey, String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StorageKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }
}

impl Repository for MemoryRepository {
    fn load(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.values.get(&key).cloned())
    }

    fn save(&mut self, key: StorageKey, value: &str) -> Result<()> {
        self.values.insert(key, value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per slice inside a directory.
#[derive(Clone, Debug)]
pub struct FileRepository {
    dir: PathBuf,
}

impl FileRepository {
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Repository for FileRepository {
    fn load(&self, key: StorageKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LeagueError::Io { path, source }),
        }
    }

    fn save(&mut self, key: StorageKey, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| LeagueError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| LeagueError::Io { path, source })
    }
}
