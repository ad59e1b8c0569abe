//! Match mode: pair every word of the level deck with its meaning before
//! the mistake budget runs out. Time-based: elapsed milliseconds are the
//! completion metric the leaderboard ranks ascending.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Word, WordCatalog};
use crate::constants::{MATCH_MISTAKE_LIMIT, MATCH_TWO_STAR_MISTAKES};

/// Terminal result of a match game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win { mistakes: u32, time_ms: u64 },
    Lose { mistakes: u32 },
}

/// Immediate feedback from one attempted pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFeedback {
    Matched { complete: bool },
    Mismatch { word_id: u32, fatal: bool },
    Ignored,
}

pub struct MatchGame {
    level: u32,
    /// Left column: level deck in shuffled order.
    words: Vec<Word>,
    /// Right column: same words, independently shuffled, shown by meaning.
    meanings: Vec<Word>,
    matched: Vec<u32>,
    mistakes: u32,
    mistake_limit: u32,
    started_at_ms: u64,
    outcome: Option<MatchOutcome>,
}

impl MatchGame {
    pub fn new(catalog: &WordCatalog, rng: &mut impl Rng, level: u32, now_ms: u64) -> Self {
        let mut words = catalog.words_for_level(level);
        words.shuffle(rng);
        let mut meanings = words.clone();
        meanings.shuffle(rng);
        Self {
            level,
            words,
            meanings,
            matched: Vec::new(),
            mistakes: 0,
            mistake_limit: MATCH_MISTAKE_LIMIT,
            started_at_ms: now_ms,
            outcome: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn meanings(&self) -> &[Word] {
        &self.meanings
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn mistakes_left(&self) -> u32 {
        self.mistake_limit.saturating_sub(self.mistakes)
    }

    pub fn is_matched(&self, word_id: u32) -> bool {
        self.matched.contains(&word_id)
    }

    pub fn remaining(&self) -> usize {
        self.words.len() - self.matched.len()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Attempts to pair a word card with a meaning card. A correct pair is
    /// one where both cards carry the same word id.
    pub fn submit_pair(&mut self, word_id: u32, meaning_word_id: u32, now_ms: u64) -> PairFeedback {
        if self.outcome.is_some() {
            return PairFeedback::Ignored;
        }
        if self.is_matched(word_id) || !self.words.iter().any(|w| w.id == word_id) {
            return PairFeedback::Ignored;
        }

        if word_id == meaning_word_id {
            self.matched.push(word_id);
            let complete = self.remaining() == 0;
            if complete {
                self.outcome = Some(MatchOutcome::Win {
                    mistakes: self.mistakes,
                    time_ms: now_ms.saturating_sub(self.started_at_ms),
                });
            }
            PairFeedback::Matched { complete }
        } else {
            self.mistakes += 1;
            let fatal = self.mistakes >= self.mistake_limit;
            if fatal {
                self.outcome = Some(MatchOutcome::Lose {
                    mistakes: self.mistakes,
                });
            }
            PairFeedback::Mismatch { word_id, fatal }
        }
    }
}

/// Star rating from mistake count on a match win. One mistake wider than
/// the quiz thresholds.
pub fn stars_for_match(mistakes: u32) -> u32 {
    if mistakes == 0 {
        3
    } else if mistakes <= MATCH_TWO_STAR_MISTAKES {
        2
    } else {
        1
    }
}
