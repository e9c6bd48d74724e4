mod store;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::LeaderboardError;

pub use store::{JsonFileStore, MemoryStore, RankStore};

/// Names longer than this are cut off on submission. Length is counted in
/// UTF-16 code units, the way browser clients measure it, without ever
/// splitting a character.
pub const NAME_MAX_CHARS: usize = 20;
/// How many entries [Leaderboard::top] returns by default.
pub const DEFAULT_TOP_N: usize = 10;
/// Only this many of the best times are kept.
pub const RETAINED_ENTRIES: usize = 100;

/// One completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub name: String,
    /// Completion time in whole seconds.
    pub time: u64,
    pub date: DateTime<Utc>,
}

/// Best-time leaderboard over an injected [RankStore].
/// Entries are kept sorted by ascending time; on ties the earlier submission
/// ranks higher.
#[derive(Debug)]
pub struct Leaderboard<S: RankStore> {
    store: S,
}

impl<S: RankStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Leaderboard { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Records a finished run, stamped with the current time.
    pub fn submit(&mut self, name: &str, time: f64) -> Result<RankEntry, LeaderboardError> {
        self.submit_at(name, time, Utc::now())
    }

    pub fn submit_at(&mut self, name: &str, time: f64, date: DateTime<Utc>) -> Result<RankEntry, LeaderboardError> {
        if name.trim().is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        if !time.is_finite() || time < 0.0 {
            return Err(LeaderboardError::InvalidTime(time));
        }

        let entry = RankEntry {
            name: truncate_name(name),
            time: time.floor() as u64,
            date,
        };

        let mut entries = self.store.load()?;
        entries.push(entry.clone());
        let entries = entries.into_iter()
            .sorted_by_key(|e| e.time)
            .take(RETAINED_ENTRIES)
            .collect_vec();
        self.store.save(&entries)?;

        info!("Recorded {}s for '{}'", entry.time, entry.name);
        Ok(entry)
    }

    /// The best `n` entries, fastest first.
    pub fn top(&mut self, n: usize) -> Result<Vec<RankEntry>, LeaderboardError> {
        let entries = self.store.load()?;
        debug!("Loaded {} leaderboard entries", entries.len());
        Ok(entries.into_iter()
            .sorted_by_key(|e| e.time)
            .take(n)
            .collect())
    }
}

fn truncate_name(name: &str) -> String {
    let mut units = 0;
    name.chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= NAME_MAX_CHARS
        })
        .collect()
}
