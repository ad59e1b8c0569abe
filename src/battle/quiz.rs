//! Quiz battle: turn-based combat against a scripted enemy, scored by combo
//! chain.
//!
//! The turn loop is an explicit state machine:
//! `AwaitingInput -> Resolving -> (AwaitingInput | Terminal)`. All combat
//! mutation happens synchronously inside `submit_answer`; `Resolving` only
//! delays presenting the next question, and its duration is a constructor
//! parameter (zero makes the engine fully synchronous for tests).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{enemy_max_hp, Word, WordCatalog};
use crate::constants::*;

/// Terminal result of a quiz battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Win {
        mistakes: u32,
        score: u32,
        time_ms: u64,
    },
    Lose {
        mistakes: u32,
    },
}

/// What happens once the resolve pause elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    /// Advance to the next word in the deck.
    NextWord,
    /// Re-present the same word with fresh distractors.
    Retry,
    /// Battle is over.
    Finish(QuizOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnPhase {
    AwaitingInput,
    Resolving { until_ms: u64, next: NextStep },
    Terminal(QuizOutcome),
}

/// Immediate feedback from one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    /// Correct answer landed a hit.
    Hit { damage: u32, defeated: bool },
    /// Wrong answer; the missed word id goes to the mistake bank.
    Miss { word_id: u32, fatal: bool },
    /// Input arrived outside `AwaitingInput` and was dropped.
    Ignored,
}

/// Fired by `tick` when the resolve pause elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTick {
    /// A new question is up (next word or same word retried).
    Presented,
    /// The battle reached its terminal state.
    Finished(QuizOutcome),
}

pub struct QuizBattle {
    level: u32,
    enemy_max_hp: u32,
    enemy_hp: u32,
    player_hp: i32,
    deck: Vec<Word>,
    current_index: usize,
    options: Vec<Word>,
    combo: u32,
    score: u32,
    mistakes: u32,
    started_at_ms: u64,
    resolve_ms: u64,
    phase: TurnPhase,
}

impl QuizBattle {
    /// Starts a battle for one level: shuffled level deck, enemy HP scaled
    /// from the world baseline, full player HP.
    pub fn new(
        catalog: &WordCatalog,
        rng: &mut impl Rng,
        level: u32,
        now_ms: u64,
        resolve_ms: u64,
    ) -> Self {
        let mut deck = catalog.words_for_level(level);
        deck.shuffle(rng);
        let max_hp = enemy_max_hp(level);
        let options = catalog.generate_options(rng, &deck[0]);
        Self {
            level,
            enemy_max_hp: max_hp,
            enemy_hp: max_hp,
            player_hp: PLAYER_START_HP,
            deck,
            current_index: 0,
            options,
            combo: 0,
            score: 0,
            mistakes: 0,
            started_at_ms: now_ms,
            resolve_ms,
            phase: TurnPhase::AwaitingInput,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn enemy_hp(&self) -> u32 {
        self.enemy_hp
    }

    pub fn enemy_max_hp(&self) -> u32 {
        self.enemy_max_hp
    }

    pub fn player_hp(&self) -> i32 {
        self.player_hp
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn current_word(&self) -> &Word {
        &self.deck[self.current_index]
    }

    pub fn options(&self) -> &[Word] {
        &self.options
    }

    pub fn is_awaiting_input(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingInput)
    }

    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.phase {
            TurnPhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Damage per correct hit: ~12% of max HP, so roughly 9 hits to kill
    /// regardless of level.
    fn hit_damage(&self) -> u32 {
        (self.enemy_max_hp as f64 / 10.0 * 1.2).ceil() as u32
    }

    /// Resolves one answer. Combat state mutates here, synchronously; the
    /// follow-up (next word, retry, terminal) applies when `tick` observes
    /// the resolve deadline.
    pub fn submit_answer(
        &mut self,
        catalog: &WordCatalog,
        rng: &mut impl Rng,
        word_id: u32,
        now_ms: u64,
    ) -> AnswerFeedback {
        if !matches!(self.phase, TurnPhase::AwaitingInput) {
            return AnswerFeedback::Ignored;
        }

        if word_id == self.current_word().id {
            let damage = self.hit_damage();
            self.enemy_hp = self.enemy_hp.saturating_sub(damage);
            // Combo bonus uses the pre-increment streak: first hit +1000,
            // second consecutive +1200, third +1400...
            self.score += QUIZ_HIT_SCORE + QUIZ_COMBO_BONUS * self.combo;
            self.combo += 1;

            let defeated = self.enemy_hp == 0;
            let next = if defeated {
                NextStep::Finish(QuizOutcome::Win {
                    mistakes: self.mistakes,
                    score: self.score,
                    time_ms: now_ms.saturating_sub(self.started_at_ms),
                })
            } else {
                NextStep::NextWord
            };
            self.phase = TurnPhase::Resolving {
                until_ms: now_ms + self.resolve_ms,
                next,
            };
            AnswerFeedback::Hit { damage, defeated }
        } else {
            let missed_id = self.current_word().id;
            self.player_hp -= WRONG_ANSWER_DAMAGE;
            self.mistakes += 1;
            self.combo = 0;

            let fatal = self.player_hp <= 0;
            let next = if fatal {
                NextStep::Finish(QuizOutcome::Lose {
                    mistakes: self.mistakes,
                })
            } else {
                // Same question again, fresh distractors.
                self.options = catalog.generate_options(rng, self.current_word());
                NextStep::Retry
            };
            self.phase = TurnPhase::Resolving {
                until_ms: now_ms + self.resolve_ms,
                next,
            };
            AnswerFeedback::Miss {
                word_id: missed_id,
                fatal,
            }
        }
    }

    /// Pumps the resolve pause. Returns an event when the pause elapses.
    pub fn tick(&mut self, catalog: &WordCatalog, rng: &mut impl Rng, now_ms: u64) -> Option<QuizTick> {
        let (until_ms, next) = match self.phase {
            TurnPhase::Resolving { until_ms, next } => (until_ms, next),
            _ => return None,
        };
        if now_ms < until_ms {
            return None;
        }
        match next {
            NextStep::NextWord => {
                // Deck length always covers the hits required, no wrap needed.
                self.current_index += 1;
                self.options = catalog.generate_options(rng, self.current_word());
                self.phase = TurnPhase::AwaitingInput;
                Some(QuizTick::Presented)
            }
            NextStep::Retry => {
                self.phase = TurnPhase::AwaitingInput;
                Some(QuizTick::Presented)
            }
            NextStep::Finish(outcome) => {
                self.phase = TurnPhase::Terminal(outcome);
                Some(QuizTick::Finished(outcome))
            }
        }
    }
}

/// Star rating from mistake count on a quiz win.
pub fn stars_for_quiz(mistakes: u32) -> u32 {
    if mistakes == 0 {
        3
    } else if mistakes <= QUIZ_TWO_STAR_MISTAKES {
        2
    } else {
        1
    }
}
