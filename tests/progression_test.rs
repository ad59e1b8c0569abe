//! Integration test: Progression pipeline
//!
//! Tests the full post-battle pipeline: XP and account levels, star and
//! unlock monotonicity, achievement unlocks, and the leaderboard write.

use kataclash::battle::BattleMode;
use kataclash::constants::TOTAL_LEVELS;
use kataclash::leaderboard::get_leaderboard;
use kataclash::player::Player;
use kataclash::progression::{process_battle_result, BattleOutcome, BattleStatus};
use kataclash::storage::MemoryStore;

fn quiz_win(level: u32, stars: u32, score: u32) -> BattleOutcome {
    BattleOutcome {
        level,
        mode: BattleMode::Quiz,
        is_win: true,
        stars_earned: stars,
        score_earned: score,
        time_ms: Some(42_000),
    }
}

fn ali() -> Player {
    Player::new("Ali".to_string(), "ninja".to_string(), 1_700_000_000_000)
}

// =============================================================================
// The first-win scenario
// =============================================================================

#[test]
fn test_flawless_first_level_win() {
    let mut store = MemoryStore::default();
    let mut player = ali();

    let result =
        process_battle_result(&mut player, &quiz_win(1, 3, 13_600), &mut store, 99).unwrap();

    assert_eq!(result.status, BattleStatus::Win);
    assert_eq!(result.stars, 3);
    assert_eq!(result.score, 13_600);
    // 100 base + 50 per star = 250 XP, enough for level 2 with 50 banked.
    assert_eq!(result.xp_gained, 250.0);
    assert!(result.is_level_up);
    assert_eq!(player.player_level, 2);
    assert_eq!(player.xp, 50.0);

    assert_eq!(player.stars_for(1), 3);
    assert_eq!(player.best_score(1), 13_600);
    assert_eq!(player.max_unlocked_level, 2);

    // First clear and first perfect clear both unlock at once.
    assert!(result.new_achievements.contains(&"first_clear".to_string()));
    assert!(result
        .new_achievements
        .contains(&"perfect_clear".to_string()));
    assert!(player.has_achievement("first_clear"));
}

#[test]
fn test_win_writes_one_leaderboard_row() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    process_battle_result(&mut player, &quiz_win(1, 3, 13_600), &mut store, 99).unwrap();

    let board = get_leaderboard(&store, BattleMode::Quiz, 1);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].player_name, "Ali");
    assert_eq!(board[0].score, 13_600);
    assert_eq!(board[0].date, 99);
    assert!(get_leaderboard(&store, BattleMode::Match, 1).is_empty());
}

#[test]
fn test_loss_writes_nothing() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    let loss = BattleOutcome {
        is_win: false,
        stars_earned: 0,
        score_earned: 0,
        ..quiz_win(1, 0, 0)
    };
    let result = process_battle_result(&mut player, &loss, &mut store, 0).unwrap();

    assert_eq!(result.status, BattleStatus::Lose);
    assert_eq!(result.xp_gained, 20.0);
    assert_eq!(player.max_unlocked_level, 1);
    assert!(get_leaderboard(&store, BattleMode::Quiz, 1).is_empty());
}

// =============================================================================
// Monotonicity
// =============================================================================

#[test]
fn test_replaying_a_level_never_loses_progress() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    process_battle_result(&mut player, &quiz_win(1, 3, 13_600), &mut store, 0).unwrap();
    process_battle_result(&mut player, &quiz_win(1, 1, 2_000), &mut store, 0).unwrap();

    assert_eq!(player.stars_for(1), 3);
    assert_eq!(player.best_score(1), 13_600);
    assert_eq!(player.max_unlocked_level, 2);
}

#[test]
fn test_match_wins_do_not_touch_quiz_scores() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    let outcome = BattleOutcome {
        mode: BattleMode::Match,
        score_earned: 0,
        ..quiz_win(1, 2, 0)
    };
    let result = process_battle_result(&mut player, &outcome, &mut store, 0).unwrap();

    // Match pays the mode bonus on top of the star formula.
    assert_eq!(result.xp_gained, 250.0);
    assert_eq!(player.best_score(1), 0);
    assert_eq!(player.stars_for(1), 2);
    assert_eq!(get_leaderboard(&store, BattleMode::Match, 1).len(), 1);
}

#[test]
fn test_zero_star_win_does_not_clear_the_level() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    let result = process_battle_result(&mut player, &quiz_win(1, 0, 0), &mut store, 0).unwrap();

    // XP still flows, but nothing unlocks without a star.
    assert_eq!(result.xp_gained, 100.0);
    assert_eq!(player.max_unlocked_level, 1);
    assert!(player.stars.is_empty());
    assert!(player.scores.is_empty());
    assert_eq!(player.cleared_levels(), 0);
}

#[test]
fn test_final_level_win_does_not_unlock_past_the_end() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    player.max_unlocked_level = TOTAL_LEVELS;
    process_battle_result(&mut player, &quiz_win(TOTAL_LEVELS, 3, 5_000), &mut store, 0).unwrap();
    assert_eq!(player.max_unlocked_level, TOTAL_LEVELS);
}

// =============================================================================
// Long-run accumulation
// =============================================================================

#[test]
fn test_grinding_accumulates_levels_and_achievements() {
    let mut store = MemoryStore::default();
    let mut player = ali();

    for level in 1..=10 {
        process_battle_result(&mut player, &quiz_win(level, 3, 4_000), &mut store, 0).unwrap();
    }

    assert_eq!(player.max_unlocked_level, 11);
    assert_eq!(player.total_stars(), 30);
    assert_eq!(player.cleared_levels(), 10);
    // 10 wins at 250 XP each: levels 1 through 4 cost 200+400+600+800,
    // leaving 500 banked at level 5.
    assert_eq!(player.player_level, 5);
    assert_eq!(player.xp, 500.0);
    assert!(player.has_achievement("level_five"));
    assert!(player.has_achievement("ten_levels"));
    assert!(player.has_achievement("world_one"));
    assert!(player.has_achievement("thirty_stars"));
}

#[test]
fn test_achievements_unlock_exactly_once() {
    let mut store = MemoryStore::default();
    let mut player = ali();
    let first = process_battle_result(&mut player, &quiz_win(1, 1, 1_000), &mut store, 0).unwrap();
    assert!(first.new_achievements.contains(&"first_clear".to_string()));

    let second = process_battle_result(&mut player, &quiz_win(2, 1, 1_000), &mut store, 0).unwrap();
    assert!(!second.new_achievements.contains(&"first_clear".to_string()));
    assert_eq!(
        player
            .achievements
            .iter()
            .filter(|a| a.as_str() == "first_clear")
            .count(),
        1
    );
}
