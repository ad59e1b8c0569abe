//! Versus mode: two lanes race to answer the same question first.
//!
//! The first correct answer locks the round: the winner gains score, the
//! loser takes HP damage, and a short toast shows the result before the
//! next round. The second lane may be a computer whose answer is decided
//! and scheduled at round start; a scheduled answer that fires after the
//! round already locked is discarded.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Word, WordCatalog};
use crate::constants::*;

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    P1,
    P2,
}

impl Lane {
    pub fn opponent(self) -> Lane {
        match self {
            Lane::P1 => Lane::P2,
            Lane::P2 => Lane::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Lane::P1 => 0,
            Lane::P2 => 1,
        }
    }
}

/// Opponent presets. The delay window is when the computer commits its
/// answer; accuracy is the chance that answer is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersusDifficulty {
    Easy,
    Medium,
    Hard,
    /// Two humans at one keyboard, playing one chosen level's deck.
    Manual(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub accuracy: f64,
}

impl VersusDifficulty {
    pub fn ai_profile(&self) -> AiProfile {
        match self {
            VersusDifficulty::Easy | VersusDifficulty::Manual(_) => AiProfile {
                min_delay_ms: 2000,
                max_delay_ms: 4000,
                accuracy: 0.70,
            },
            VersusDifficulty::Medium => AiProfile {
                min_delay_ms: 1500,
                max_delay_ms: 3000,
                accuracy: 0.85,
            },
            VersusDifficulty::Hard => AiProfile {
                min_delay_ms: 1000,
                max_delay_ms: 2000,
                accuracy: 0.95,
            },
        }
    }

    /// The word stream for a match. Ranked difficulties sample across a
    /// level band; manual play runs one level's deck twice, capped at 15.
    fn build_deck(&self, catalog: &WordCatalog, rng: &mut impl Rng) -> Vec<Word> {
        match *self {
            VersusDifficulty::Easy => catalog.random_words(rng, VERSUS_DECK_SIZE, 1, 10),
            VersusDifficulty::Medium => catalog.random_words(rng, VERSUS_DECK_SIZE, 11, 30),
            VersusDifficulty::Hard => {
                catalog.random_words(rng, VERSUS_DECK_SIZE, 31, TOTAL_LEVELS)
            }
            VersusDifficulty::Manual(level) => {
                let words = catalog.words_for_level(level);
                let mut deck = words.clone();
                deck.extend(words);
                deck.truncate(VERSUS_MANUAL_DECK_SIZE);
                deck
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VersusDifficulty::Easy => "Mudah",
            VersusDifficulty::Medium => "Sederhana",
            VersusDifficulty::Hard => "Sukar",
            VersusDifficulty::Manual(_) => "Manual",
        }
    }
}

/// One competitor's live state.
#[derive(Debug, Clone)]
pub struct VersusPlayer {
    pub name: String,
    pub avatar: String,
    pub hp: i32,
    pub score: u32,
    pub is_computer: bool,
}

impl VersusPlayer {
    pub fn human(name: String, avatar: String) -> Self {
        Self {
            name,
            avatar,
            hp: VERSUS_START_HP,
            score: 0,
            is_computer: false,
        }
    }

    pub fn computer() -> Self {
        Self {
            name: "Komputer".to_string(),
            avatar: "robot_2".to_string(),
            hp: VERSUS_START_HP,
            score: 0,
            is_computer: true,
        }
    }
}

/// Computer answer committed at round start.
#[derive(Debug, Clone, Copy)]
struct AiDecision {
    fires_at_ms: u64,
    word_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundPhase {
    Active,
    /// Result toast between rounds.
    Toast { until_ms: u64 },
    Terminal { winner: Lane },
}

/// Immediate feedback from one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersusFeedback {
    /// Correct and first: round won.
    RoundWon { lane: Lane, defeated: bool },
    /// Wrong: this lane is locked out for the rest of the round.
    Wrong { lane: Lane },
    /// Input outside an active round, or from a locked-out lane.
    Ignored,
}

/// Fired by `tick` when time moves the match forward. End of match is
/// observed through `winner()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersusEvent {
    /// The computer lane committed its scheduled answer.
    AiAnswered(VersusFeedback),
    /// Toast elapsed, next round is up.
    RoundStarted,
}

pub struct VersusMatch {
    difficulty: VersusDifficulty,
    deck: Vec<Word>,
    round_index: usize,
    options: Vec<Word>,
    players: [VersusPlayer; 2],
    /// Lanes that already answered this round (wrong answers lock out).
    answered: [bool; 2],
    pending_ai: Option<AiDecision>,
    phase: RoundPhase,
}

impl VersusMatch {
    pub fn new(
        catalog: &WordCatalog,
        rng: &mut impl Rng,
        p1: VersusPlayer,
        p2: VersusPlayer,
        difficulty: VersusDifficulty,
        now_ms: u64,
    ) -> Self {
        let deck = difficulty.build_deck(catalog, rng);
        let options = catalog.generate_options(rng, &deck[0]);
        let mut game = Self {
            difficulty,
            deck,
            round_index: 0,
            options,
            players: [p1, p2],
            answered: [false, false],
            pending_ai: None,
            phase: RoundPhase::Active,
        };
        game.schedule_ai(rng, now_ms);
        game
    }

    pub fn difficulty(&self) -> VersusDifficulty {
        self.difficulty
    }

    pub fn player(&self, lane: Lane) -> &VersusPlayer {
        &self.players[lane.index()]
    }

    pub fn current_word(&self) -> &Word {
        &self.deck[self.round_index % self.deck.len()]
    }

    pub fn options(&self) -> &[Word] {
        &self.options
    }

    pub fn round(&self) -> usize {
        self.round_index + 1
    }

    pub fn is_round_active(&self) -> bool {
        matches!(self.phase, RoundPhase::Active)
    }

    pub fn has_answered(&self, lane: Lane) -> bool {
        self.answered[lane.index()]
    }

    pub fn winner(&self) -> Option<Lane> {
        match self.phase {
            RoundPhase::Terminal { winner } => Some(winner),
            _ => None,
        }
    }

    /// When the computer lane will commit its answer, if one is scheduled.
    pub fn ai_decision_at(&self) -> Option<u64> {
        self.pending_ai.map(|d| d.fires_at_ms)
    }

    /// Rolls the computer's answer for the current round and schedules it
    /// inside the difficulty's delay window.
    fn schedule_ai(&mut self, rng: &mut impl Rng, now_ms: u64) {
        self.pending_ai = None;
        if !self.players[1].is_computer {
            return;
        }
        let profile = self.difficulty.ai_profile();
        let delay = rng.gen_range(profile.min_delay_ms..=profile.max_delay_ms);
        let target_id = self.current_word().id;
        let word_id = if rng.gen_bool(profile.accuracy) {
            target_id
        } else {
            self.options
                .iter()
                .filter(|w| w.id != target_id)
                .map(|w| w.id)
                .collect::<Vec<_>>()
                .choose(rng)
                .copied()
                .unwrap_or(target_id)
        };
        self.pending_ai = Some(AiDecision {
            fires_at_ms: now_ms + delay,
            word_id,
        });
    }

    /// Resolves one lane's answer. First correct answer locks the round;
    /// a wrong answer locks only that lane out until the next round.
    pub fn submit_answer(&mut self, lane: Lane, word_id: u32, now_ms: u64) -> VersusFeedback {
        if !matches!(self.phase, RoundPhase::Active) || self.answered[lane.index()] {
            return VersusFeedback::Ignored;
        }

        if word_id == self.current_word().id {
            self.players[lane.index()].score += VERSUS_ROUND_SCORE;
            let loser = lane.opponent();
            self.players[loser.index()].hp -= VERSUS_ROUND_DAMAGE;
            let defeated = self.players[loser.index()].hp <= 0;
            // Round is locked; a scheduled computer answer is now stale.
            self.pending_ai = None;
            self.phase = RoundPhase::Toast {
                until_ms: now_ms + VERSUS_TOAST_MS,
            };
            if defeated {
                self.phase = RoundPhase::Terminal { winner: lane };
            }
            VersusFeedback::RoundWon {
                lane,
                defeated,
            }
        } else {
            self.answered[lane.index()] = true;
            if lane == Lane::P2 {
                self.pending_ai = None;
            }
            if self.answered[0] && self.answered[1] {
                // Nobody left to answer; skip to the next round.
                self.phase = RoundPhase::Toast {
                    until_ms: now_ms + VERSUS_TOAST_MS,
                };
            }
            VersusFeedback::Wrong { lane }
        }
    }

    /// Pumps scheduled computer answers and the between-round toast.
    pub fn tick(
        &mut self,
        catalog: &WordCatalog,
        rng: &mut impl Rng,
        now_ms: u64,
    ) -> Option<VersusEvent> {
        match self.phase {
            RoundPhase::Terminal { .. } => return None,
            RoundPhase::Toast { until_ms } => {
                if now_ms < until_ms {
                    return None;
                }
                self.round_index += 1;
                let word = self.current_word().clone();
                self.options = catalog.generate_options(rng, &word);
                self.answered = [false, false];
                self.schedule_ai(rng, now_ms);
                self.phase = RoundPhase::Active;
                return Some(VersusEvent::RoundStarted);
            }
            RoundPhase::Active => {}
        }

        let decision = self.pending_ai?;
        if now_ms < decision.fires_at_ms {
            return None;
        }
        self.pending_ai = None;
        let feedback = self.submit_answer(Lane::P2, decision.word_id, now_ms);
        match feedback {
            VersusFeedback::Ignored => None,
            _ => Some(VersusEvent::AiAnswered(feedback)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_profiles() {
        let easy = VersusDifficulty::Easy.ai_profile();
        assert_eq!(easy.min_delay_ms, 2000);
        assert_eq!(easy.max_delay_ms, 4000);
        let hard = VersusDifficulty::Hard.ai_profile();
        assert_eq!(hard.accuracy, 0.95);
    }

    #[test]
    fn test_lane_opponent() {
        assert_eq!(Lane::P1.opponent(), Lane::P2);
        assert_eq!(Lane::P2.opponent(), Lane::P1);
    }
}
