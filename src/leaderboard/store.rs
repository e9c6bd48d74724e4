use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use crate::errors::LeaderboardError;
use super::RankEntry;

/// Persistence backend for a [super::Leaderboard].
pub trait RankStore {
    fn load(&mut self) -> Result<Vec<RankEntry>, LeaderboardError>;
    fn save(&mut self, entries: &[RankEntry]) -> Result<(), LeaderboardError>;
}

/// Keeps entries in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Vec<RankEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }
}

impl RankStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<RankEntry>, LeaderboardError> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[RankEntry]) -> Result<(), LeaderboardError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// Stores the leaderboard as a JSON array in a single file.
/// A missing file reads as an empty leaderboard.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, kind: ErrorKind) -> LeaderboardError {
        LeaderboardError::IoError(self.path.display().to_string(), kind)
    }
}

impl RankStore for JsonFileStore {
    fn load(&mut self) -> Result<Vec<RankEntry>, LeaderboardError> {
        match fs::read_to_string(&self.path) {
            Ok(src) => Ok(serde_json::from_str(&src)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e.kind())),
        }
    }

    fn save(&mut self, entries: &[RankEntry]) -> Result<(), LeaderboardError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e.kind()))?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e.kind()))
    }
}
