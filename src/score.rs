use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "serpent";
const SCORE_FILE_NAME: &str = "high_score.json";

/// On-disk score record.
///
/// Field names and shape are stable: earlier versions of this game wrote the
/// same JSON, and `last_updated` stays a plain string for their sake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecord {
    pub high_score: u32,
    pub last_updated: String,
    pub total_games: u32,
}

impl ScoreRecord {
    fn stamped(high_score: u32, total_games: u32) -> Self {
        Self {
            high_score,
            last_updated: unix_timestamp_string(),
            total_games,
        }
    }
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self {
            high_score: 0,
            last_updated: String::new(),
            total_games: 0,
        }
    }
}

fn unix_timestamp_string() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
        .to_string()
}

/// File-backed store for the persisted score record.
///
/// A store without a path is valid and simply remembers nothing, which is
/// what deterministic tests and `--scores-path` experiments want.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: Option<PathBuf>,
}

impl ScoreStore {
    /// Store at the platform's local-data directory.
    #[must_use]
    pub fn default_path() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: Some(base) }
    }

    /// Store at an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that never reads or writes anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Loads the persisted record.
    ///
    /// Any failure mode (no path, missing file, unreadable file, malformed
    /// JSON) collapses to the zeroed default: a lost high score is a shrug,
    /// not a crash.
    #[must_use]
    pub fn load(&self) -> ScoreRecord {
        let Some(path) = self.path.as_deref() else {
            return ScoreRecord::default();
        };

        load_record(path).unwrap_or_default()
    }

    /// Writes `record`, creating parent directories when needed.
    pub fn save(&self, record: &ScoreRecord) -> io::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        save_record(path, record)
    }
}

fn load_record(path: &Path) -> Option<ScoreRecord> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn save_record(path: &Path, record: &ScoreRecord) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(record)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}

/// Score counter with a persisted high score and games-played tally.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
    total_games: u32,
    game_over: bool,
    store: ScoreStore,
}

impl Scoreboard {
    /// Creates a scoreboard, loading the persisted record through `store`.
    #[must_use]
    pub fn new(store: ScoreStore) -> Self {
        let record = store.load();

        Self {
            score: 0,
            high_score: record.high_score,
            total_games: record.total_games,
            game_over: false,
            store,
        }
    }

    /// Awards one point. A new high score is persisted immediately; a save
    /// failure is swallowed so the tick never stalls on storage.
    pub fn increase(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            let _ = self
                .store
                .save(&ScoreRecord::stamped(self.high_score, self.total_games));
        }
    }

    /// Marks the game over, counts the finished game, and persists
    /// unconditionally.
    pub fn game_over(&mut self) {
        self.game_over = true;
        self.total_games += 1;
        let _ = self
            .store
            .save(&ScoreRecord::stamped(self.high_score, self.total_games));
    }

    /// Starts a fresh game: score and flag cleared, lifetime stats kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
