//! Battle engines: single-player quiz, single-player match, and versus.
//!
//! Each engine is a self-contained state machine driven by user intents plus
//! an explicit `now_ms` clock. No engine sleeps or owns a timer; presentation
//! pauses are deadlines the caller pumps with `tick`.

pub mod matching;
pub mod quiz;
pub mod versus;

use serde::{Deserialize, Serialize};

/// Single-player battle flavor. Quiz is HP-based and score-ranked; Match is
/// time-pressured and time-ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleMode {
    Quiz,
    Match,
}

impl BattleMode {
    pub fn name(&self) -> &'static str {
        match self {
            BattleMode::Quiz => "Kuiz",
            BattleMode::Match => "Padanan",
        }
    }
}
