//! Post-battle bookkeeping: XP, account levels, stars, unlocks, achievement
//! checks, and the leaderboard write.
//!
//! Everything a finished battle changes about a player funnels through
//! `process_battle_result`, which mutates the record in place and returns
//! one summary the result screen renders directly.

use std::io;

use crate::achievements::newly_unlocked;
use crate::battle::BattleMode;
use crate::constants::*;
use crate::leaderboard::{save_score, LeaderboardEntry};
use crate::player::{required_xp, Player};
use crate::storage::KvStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Win,
    Lose,
}

/// What a battle engine hands over when it terminates.
#[derive(Debug, Clone, Copy)]
pub struct BattleOutcome {
    pub level: u32,
    pub mode: BattleMode,
    pub is_win: bool,
    pub stars_earned: u32,
    pub score_earned: u32,
    pub time_ms: Option<u64>,
}

/// Everything the result screen needs about a processed battle.
#[derive(Debug, Clone)]
pub struct BattleResult {
    pub status: BattleStatus,
    pub stars: u32,
    pub score: u32,
    pub time_ms: Option<u64>,
    pub xp_gained: f64,
    pub is_level_up: bool,
    pub new_achievements: Vec<String>,
}

/// XP granted for one battle. Losses still pay a small consolation amount.
fn xp_for(outcome: &BattleOutcome) -> f64 {
    if !outcome.is_win {
        return XP_LOSS;
    }
    let mut xp = XP_WIN_BASE + XP_PER_STAR * outcome.stars_earned as f64;
    if outcome.mode == BattleMode::Match {
        xp += XP_MATCH_BONUS;
    }
    xp
}

/// Applies a finished battle to the player record and persists the
/// leaderboard entry on a win. The caller saves the roster afterwards.
pub fn process_battle_result(
    player: &mut Player,
    outcome: &BattleOutcome,
    store: &mut dyn KvStore,
    now_ms: i64,
) -> io::Result<BattleResult> {
    let xp_gained = xp_for(outcome);
    player.xp += xp_gained;

    // Carry overflow across multiple level-ups in one award.
    let level_before = player.player_level;
    while player.xp >= required_xp(player.player_level) {
        player.xp -= required_xp(player.player_level);
        player.player_level += 1;
    }
    let is_level_up = player.player_level > level_before;

    // Only a starred win counts as clearing the level.
    if outcome.is_win && outcome.stars_earned > 0 {
        let best_stars = player.stars_for(outcome.level).max(outcome.stars_earned);
        player.stars.insert(outcome.level, best_stars);

        let next = (outcome.level + 1).min(TOTAL_LEVELS);
        player.max_unlocked_level = player.max_unlocked_level.max(next);

        if outcome.mode == BattleMode::Quiz && outcome.score_earned > 0 {
            let best_score = player.best_score(outcome.level).max(outcome.score_earned);
            player.scores.insert(outcome.level, best_score);
        }
    }

    let unlocked = newly_unlocked(player);
    let new_achievements: Vec<String> = unlocked.iter().map(|d| d.id.to_string()).collect();
    player
        .achievements
        .extend(new_achievements.iter().cloned());

    if outcome.is_win {
        save_score(
            store,
            outcome.mode,
            outcome.level,
            LeaderboardEntry {
                player_name: player.name.clone(),
                avatar: player.avatar.clone(),
                time_ms: outcome.time_ms.unwrap_or(0),
                score: outcome.score_earned,
                date: now_ms,
            },
        )?;
    }

    Ok(BattleResult {
        status: if outcome.is_win {
            BattleStatus::Win
        } else {
            BattleStatus::Lose
        },
        stars: outcome.stars_earned,
        score: outcome.score_earned,
        time_ms: outcome.time_ms,
        xp_gained,
        is_level_up,
        new_achievements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn win(level: u32, stars: u32) -> BattleOutcome {
        BattleOutcome {
            level,
            mode: BattleMode::Quiz,
            is_win: true,
            stars_earned: stars,
            score_earned: 9000,
            time_ms: Some(30_000),
        }
    }

    #[test]
    fn test_win_xp_scales_with_stars() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        let result = process_battle_result(&mut player, &win(1, 3), &mut store, 0).unwrap();
        assert_eq!(result.xp_gained, 250.0);
    }

    #[test]
    fn test_match_win_pays_bonus() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        let outcome = BattleOutcome {
            mode: BattleMode::Match,
            ..win(1, 2)
        };
        let result = process_battle_result(&mut player, &outcome, &mut store, 0).unwrap();
        assert_eq!(result.xp_gained, 250.0);
    }

    #[test]
    fn test_loss_pays_consolation_xp_and_unlocks_nothing() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        let outcome = BattleOutcome {
            is_win: false,
            stars_earned: 0,
            ..win(1, 0)
        };
        let result = process_battle_result(&mut player, &outcome, &mut store, 0).unwrap();
        assert_eq!(result.xp_gained, XP_LOSS);
        assert_eq!(player.max_unlocked_level, 1);
        assert!(player.stars.is_empty());
    }

    #[test]
    fn test_level_up_carries_overflow() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        // 250 XP against a 200 XP requirement: level 2 with 50 banked.
        let result = process_battle_result(&mut player, &win(1, 3), &mut store, 0).unwrap();
        assert!(result.is_level_up);
        assert_eq!(player.player_level, 2);
        assert_eq!(player.xp, 50.0);
    }

    #[test]
    fn test_stars_and_scores_never_regress() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        process_battle_result(&mut player, &win(1, 3), &mut store, 0).unwrap();
        let weaker = BattleOutcome {
            stars_earned: 1,
            score_earned: 1000,
            ..win(1, 1)
        };
        process_battle_result(&mut player, &weaker, &mut store, 0).unwrap();
        assert_eq!(player.stars_for(1), 3);
        assert_eq!(player.best_score(1), 9000);
    }

    #[test]
    fn test_unlock_clamps_at_final_level() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        player.max_unlocked_level = TOTAL_LEVELS;
        process_battle_result(&mut player, &win(TOTAL_LEVELS, 3), &mut store, 0).unwrap();
        assert_eq!(player.max_unlocked_level, TOTAL_LEVELS);
    }

    #[test]
    fn test_first_win_reports_achievement_once() {
        let mut store = MemoryStore::default();
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        let result = process_battle_result(&mut player, &win(1, 1), &mut store, 0).unwrap();
        assert!(result.new_achievements.contains(&"first_clear".to_string()));
        let again = process_battle_result(&mut player, &win(2, 1), &mut store, 0).unwrap();
        assert!(!again.new_achievements.contains(&"first_clear".to_string()));
    }
}
