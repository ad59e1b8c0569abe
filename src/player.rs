//! Player records and roster persistence.

use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::constants::{LEVELS_PER_WORLD, XP_BASE};
use crate::storage::{KvStore, PLAYERS_KEY};

fn default_player_level() -> u32 {
    1
}

/// Persistent per-player progress.
///
/// Records saved by older versions may lack the score/mistake/XP/achievement
/// fields; `#[serde(default)]` fills them in on load so migration is never
/// destructive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub max_unlocked_level: u32,
    pub stars: HashMap<u32, u32>,
    #[serde(default)]
    pub scores: HashMap<u32, u32>,
    #[serde(default)]
    pub mistakes: Vec<u32>,
    #[serde(default)]
    pub xp: f64,
    #[serde(default = "default_player_level")]
    pub player_level: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Player {
    /// Creates a fresh player. The id derives from the creation timestamp
    /// (milliseconds), matching how records have always been keyed.
    pub fn new(name: String, avatar: String, created_at_ms: i64) -> Self {
        Self {
            id: created_at_ms,
            name,
            avatar,
            max_unlocked_level: 1,
            stars: HashMap::new(),
            scores: HashMap::new(),
            mistakes: Vec::new(),
            xp: 0.0,
            player_level: 1,
            achievements: Vec::new(),
        }
    }

    pub fn stars_for(&self, level: u32) -> u32 {
        self.stars.get(&level).copied().unwrap_or(0)
    }

    pub fn best_score(&self, level: u32) -> u32 {
        self.scores.get(&level).copied().unwrap_or(0)
    }

    /// Sum of best star ratings across all levels.
    pub fn total_stars(&self) -> u32 {
        self.stars.values().sum()
    }

    /// Number of levels cleared with at least one star.
    pub fn cleared_levels(&self) -> u32 {
        self.stars.values().filter(|&&s| s > 0).count() as u32
    }

    /// Number of levels cleared with a full 3-star rating.
    pub fn perfect_levels(&self) -> u32 {
        self.stars.values().filter(|&&s| s >= 3).count() as u32
    }

    /// True when every level of the world has been cleared.
    pub fn world_cleared(&self, world_id: u32) -> bool {
        let start = (world_id - 1) * LEVELS_PER_WORLD + 1;
        (start..start + LEVELS_PER_WORLD).all(|level| self.stars_for(level) > 0)
    }

    /// Records a missed word. Idempotent: the bank never holds duplicates.
    pub fn add_mistake(&mut self, word_id: u32) {
        if !self.mistakes.contains(&word_id) {
            self.mistakes.push(word_id);
        }
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }
}

/// XP required to advance from `player_level` to the next.
pub fn required_xp(player_level: u32) -> f64 {
    player_level as f64 * XP_BASE
}

/// Loads the roster from storage. Corrupt or missing data yields an empty
/// roster rather than an error; storage is self-healing on the next save.
pub fn load_roster(store: &dyn KvStore) -> Vec<Player> {
    store
        .get(PLAYERS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Writes the whole roster back. Every mutation path goes through this:
/// read-entire-roster, transform, write-entire-roster.
pub fn save_roster(store: &mut dyn KvStore, roster: &[Player]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(roster)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.set(PLAYERS_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Ali".to_string(), "ninja".to_string(), 1_700_000_000_000);
        assert_eq!(player.id, 1_700_000_000_000);
        assert_eq!(player.max_unlocked_level, 1);
        assert_eq!(player.player_level, 1);
        assert_eq!(player.xp, 0.0);
        assert!(player.stars.is_empty());
        assert!(player.scores.is_empty());
        assert!(player.mistakes.is_empty());
        assert!(player.achievements.is_empty());
    }

    #[test]
    fn test_add_mistake_deduplicates() {
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        player.add_mistake(42);
        player.add_mistake(7);
        player.add_mistake(42);
        assert_eq!(player.mistakes, vec![42, 7]);
    }

    #[test]
    fn test_required_xp_formula() {
        assert_eq!(required_xp(1), 200.0);
        assert_eq!(required_xp(2), 400.0);
        assert_eq!(required_xp(10), 2000.0);
    }

    #[test]
    fn test_legacy_record_migrates_with_defaults() {
        // Early saves only carried id/name/avatar/unlock/stars.
        let legacy = r#"{
            "id": 123,
            "name": "Siti",
            "avatar": "girl_pink",
            "max_unlocked_level": 4,
            "stars": {"1": 3, "2": 2, "3": 1}
        }"#;
        let player: Player = serde_json::from_str(legacy).unwrap();
        assert_eq!(player.name, "Siti");
        assert_eq!(player.max_unlocked_level, 4);
        assert!(player.scores.is_empty());
        assert!(player.mistakes.is_empty());
        assert_eq!(player.xp, 0.0);
        assert_eq!(player.player_level, 1);
        assert!(player.achievements.is_empty());
    }

    #[test]
    fn test_roster_corrupt_json_falls_back_to_empty() {
        let mut store = MemoryStore::default();
        store.set(PLAYERS_KEY, "{not json").unwrap();
        assert!(load_roster(&store).is_empty());
    }

    #[test]
    fn test_roster_round_trip() {
        let mut store = MemoryStore::default();
        let roster = vec![
            Player::new("Ali".to_string(), "ninja".to_string(), 1),
            Player::new("Siti".to_string(), "girl_pink".to_string(), 2),
        ];
        save_roster(&mut store, &roster).unwrap();
        let loaded = load_roster(&store);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Ali");
        assert_eq!(loaded[1].name, "Siti");
    }

    #[test]
    fn test_world_cleared() {
        let mut player = Player::new("Ali".to_string(), "ninja".to_string(), 1);
        for level in 1..=9 {
            player.stars.insert(level, 1);
        }
        assert!(!player.world_cleared(1));
        player.stars.insert(10, 2);
        assert!(player.world_cleared(1));
        assert!(!player.world_cleared(2));
    }
}
