//! Achievement catalog and unlock detection.
//!
//! Conditions are a closed set of tagged variants rather than arbitrary
//! closures, so the whole catalog is exhaustively testable. Unlock detection
//! runs after every battle against the already-updated player record; the
//! unlocked set itself is append-only.

mod data;

pub use data::{all_achievements, AchievementDef};

use crate::player::Player;

/// Predicate kinds an achievement may test, with their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// At least this many levels cleared with one or more stars.
    LevelsCleared(u32),
    /// At least this many levels cleared with a full 3 stars.
    PerfectLevels(u32),
    /// Star total across all levels reaches this count.
    TotalStars(u32),
    /// Account level reaches this value.
    PlayerLevel(u32),
    /// Highest unlocked level reaches this value.
    UnlockedLevel(u32),
    /// Any single level's best quiz score reaches this value.
    BestScore(u32),
    /// The mistake bank holds at least this many distinct words.
    MistakeBank(u32),
    /// Every level of the given world cleared.
    WorldCleared(u32),
}

impl Condition {
    pub fn is_met(&self, player: &Player) -> bool {
        match *self {
            Condition::LevelsCleared(n) => player.cleared_levels() >= n,
            Condition::PerfectLevels(n) => player.perfect_levels() >= n,
            Condition::TotalStars(n) => player.total_stars() >= n,
            Condition::PlayerLevel(n) => player.player_level >= n,
            Condition::UnlockedLevel(n) => player.max_unlocked_level >= n,
            Condition::BestScore(n) => player.scores.values().any(|&s| s >= n),
            Condition::MistakeBank(n) => player.mistakes.len() as u32 >= n,
            Condition::WorldCleared(w) => player.world_cleared(w),
        }
    }
}

/// Achievements whose condition the player now satisfies but which are not
/// yet in their unlocked set. Caller appends the returned ids.
pub fn newly_unlocked(player: &Player) -> Vec<&'static AchievementDef> {
    all_achievements()
        .iter()
        .filter(|def| !player.has_achievement(def.id) && def.condition.is_met(player))
        .collect()
}
