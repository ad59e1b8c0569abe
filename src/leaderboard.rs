//! Per-level leaderboards and the versus win table.
//!
//! Single-player boards keep one entry per player name per level, replaced
//! only on strict improvement: quiz ranks by score descending, match by
//! completion time ascending. The versus board counts wins per human player.

use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::battle::BattleMode;
use crate::storage::{KvStore, MATCH_LEADERBOARD_KEY, QUIZ_LEADERBOARD_KEY, VERSUS_LEADERBOARD_KEY};

/// One single-player board row. `score` carries quiz rank, `time_ms` match
/// rank; the off-mode field is stored but not ranked on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub avatar: String,
    pub time_ms: u64,
    pub score: u32,
    pub date: i64,
}

/// One versus board row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersusLeaderboardEntry {
    pub player_name: String,
    pub avatar: String,
    pub wins: u32,
    pub last_played: i64,
}

fn board_key(mode: BattleMode) -> &'static str {
    match mode {
        BattleMode::Quiz => QUIZ_LEADERBOARD_KEY,
        BattleMode::Match => MATCH_LEADERBOARD_KEY,
    }
}

type Board = HashMap<u32, Vec<LeaderboardEntry>>;

fn load_board(store: &dyn KvStore, mode: BattleMode) -> Board {
    store
        .get(board_key(mode))
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_board(store: &mut dyn KvStore, mode: BattleMode, board: &Board) -> io::Result<()> {
    let raw = serde_json::to_string(board)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.set(board_key(mode), &raw)
}

/// The board for one level, sorted best-first for the mode.
pub fn get_leaderboard(store: &dyn KvStore, mode: BattleMode, level: u32) -> Vec<LeaderboardEntry> {
    let mut entries = load_board(store, mode).remove(&level).unwrap_or_default();
    match mode {
        BattleMode::Quiz => entries.sort_by(|a, b| b.score.cmp(&a.score)),
        BattleMode::Match => entries.sort_by(|a, b| a.time_ms.cmp(&b.time_ms)),
    }
    entries
}

/// Records a result, keeping at most one row per player name and replacing
/// it only when the new result is strictly better.
pub fn save_score(
    store: &mut dyn KvStore,
    mode: BattleMode,
    level: u32,
    entry: LeaderboardEntry,
) -> io::Result<()> {
    let mut board = load_board(store, mode);
    let entries = board.entry(level).or_default();
    match entries
        .iter_mut()
        .find(|e| e.player_name == entry.player_name)
    {
        Some(existing) => {
            let improved = match mode {
                BattleMode::Quiz => entry.score > existing.score,
                BattleMode::Match => entry.time_ms < existing.time_ms,
            };
            if improved {
                *existing = entry;
            }
        }
        None => entries.push(entry),
    }
    save_board(store, mode, &board)
}

/// The versus board, most wins first.
pub fn get_versus_leaderboard(store: &dyn KvStore) -> Vec<VersusLeaderboardEntry> {
    let mut entries: Vec<VersusLeaderboardEntry> = store
        .get(VERSUS_LEADERBOARD_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    entries.sort_by(|a, b| b.wins.cmp(&a.wins));
    entries
}

/// Bumps a human winner's versus win count. Computer wins are not recorded;
/// the caller filters those out.
pub fn save_versus_win(
    store: &mut dyn KvStore,
    player_name: &str,
    avatar: &str,
    now_ms: i64,
) -> io::Result<()> {
    let mut entries: Vec<VersusLeaderboardEntry> = store
        .get(VERSUS_LEADERBOARD_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    match entries.iter_mut().find(|e| e.player_name == player_name) {
        Some(existing) => {
            existing.wins += 1;
            existing.last_played = now_ms;
            existing.avatar = avatar.to_string();
        }
        None => entries.push(VersusLeaderboardEntry {
            player_name: player_name.to_string(),
            avatar: avatar.to_string(),
            wins: 1,
            last_played: now_ms,
        }),
    }
    let raw = serde_json::to_string(&entries)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.set(VERSUS_LEADERBOARD_KEY, &raw)
}

/// Formats a match time for display, e.g. `45.20s` or `1:05.20`.
pub fn format_time(time_ms: u64) -> String {
    let total_seconds = time_ms as f64 / 1000.0;
    if time_ms >= 60_000 {
        let minutes = time_ms / 60_000;
        let seconds = total_seconds - minutes as f64 * 60.0;
        format!("{}:{:05.2}", minutes, seconds)
    } else {
        format!("{:.2}s", total_seconds)
    }
}
