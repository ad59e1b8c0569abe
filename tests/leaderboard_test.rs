//! Integration test: Leaderboard store
//!
//! Tests ranking order, the strict-improvement upsert, key isolation in the
//! underlying store, and versus win accounting.

use kataclash::battle::BattleMode;
use kataclash::leaderboard::{
    get_leaderboard, get_versus_leaderboard, save_score, save_versus_win, LeaderboardEntry,
};
use kataclash::storage::{
    KvStore, MemoryStore, MATCH_LEADERBOARD_KEY, QUIZ_LEADERBOARD_KEY, VERSUS_LEADERBOARD_KEY,
};

fn entry(name: &str, score: u32, time_ms: u64, date: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        player_name: name.to_string(),
        avatar: "ninja".to_string(),
        time_ms,
        score,
        date,
    }
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn test_quiz_ranking_is_score_descending() {
    let mut store = MemoryStore::default();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Ali", 4_000, 0, 1)).unwrap();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Siti", 9_000, 0, 2)).unwrap();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Chen", 6_500, 0, 3)).unwrap();

    let board = get_leaderboard(&store, BattleMode::Quiz, 1);
    let names: Vec<&str> = board.iter().map(|e| e.player_name.as_str()).collect();
    assert_eq!(names, vec!["Siti", "Chen", "Ali"]);
}

#[test]
fn test_match_ranking_is_time_ascending() {
    let mut store = MemoryStore::default();
    save_score(&mut store, BattleMode::Match, 1, entry("Ali", 0, 61_000, 1)).unwrap();
    save_score(&mut store, BattleMode::Match, 1, entry("Siti", 0, 44_500, 2)).unwrap();

    let board = get_leaderboard(&store, BattleMode::Match, 1);
    assert_eq!(board[0].player_name, "Siti");
    assert_eq!(board[1].player_name, "Ali");
}

// =============================================================================
// Strict-improvement upsert
// =============================================================================

#[test]
fn test_slower_match_rerun_keeps_the_record() {
    let mut store = MemoryStore::default();
    save_score(&mut store, BattleMode::Match, 1, entry("Ali", 0, 4_200, 1)).unwrap();
    save_score(&mut store, BattleMode::Match, 1, entry("Ali", 0, 5_000, 2)).unwrap();

    let board = get_leaderboard(&store, BattleMode::Match, 1);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].time_ms, 4_200);
    // The whole row survives, including its original date.
    assert_eq!(board[0].date, 1);
}

#[test]
fn test_equal_score_does_not_replace() {
    let mut store = MemoryStore::default();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Ali", 4_000, 0, 1)).unwrap();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Ali", 4_000, 0, 9)).unwrap();

    let board = get_leaderboard(&store, BattleMode::Quiz, 1);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].date, 1);
}

#[test]
fn test_better_score_replaces_the_whole_row() {
    let mut store = MemoryStore::default();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Ali", 4_000, 0, 1)).unwrap();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Ali", 8_000, 0, 9)).unwrap();

    let board = get_leaderboard(&store, BattleMode::Quiz, 1);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].score, 8_000);
    assert_eq!(board[0].date, 9);
}

// =============================================================================
// Storage layout
// =============================================================================

#[test]
fn test_each_board_lives_under_its_own_key() {
    let mut store = MemoryStore::default();
    save_score(&mut store, BattleMode::Quiz, 1, entry("Ali", 4_000, 0, 1)).unwrap();
    save_score(&mut store, BattleMode::Match, 1, entry("Ali", 0, 9_000, 1)).unwrap();
    save_versus_win(&mut store, "Ali", "ninja", 1).unwrap();

    assert!(store.get(QUIZ_LEADERBOARD_KEY).is_some());
    assert!(store.get(MATCH_LEADERBOARD_KEY).is_some());
    assert!(store.get(VERSUS_LEADERBOARD_KEY).is_some());
}

#[test]
fn test_corrupt_versus_board_reads_as_empty() {
    let mut store = MemoryStore::default();
    store.set(VERSUS_LEADERBOARD_KEY, "oops").unwrap();
    assert!(get_versus_leaderboard(&store).is_empty());
    // And heals on the next write.
    save_versus_win(&mut store, "Ali", "ninja", 5).unwrap();
    assert_eq!(get_versus_leaderboard(&store).len(), 1);
}

// =============================================================================
// Versus wins
// =============================================================================

#[test]
fn test_versus_board_counts_wins_per_player() {
    let mut store = MemoryStore::default();
    save_versus_win(&mut store, "Siti", "girl_pink", 1).unwrap();
    save_versus_win(&mut store, "Ali", "ninja", 2).unwrap();
    save_versus_win(&mut store, "Siti", "girl_pink", 3).unwrap();
    save_versus_win(&mut store, "Siti", "girl_pink", 4).unwrap();

    let board = get_versus_leaderboard(&store);
    assert_eq!(board[0].player_name, "Siti");
    assert_eq!(board[0].wins, 3);
    assert_eq!(board[0].last_played, 4);
    assert_eq!(board[1].player_name, "Ali");
    assert_eq!(board[1].wins, 1);
}
