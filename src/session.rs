//! Session state machine: one `Game` owns the catalog, the store, the
//! roster, and whichever battle engine is live, and moves between screens
//! in response to user intents.
//!
//! Intents that make no sense in the current screen are ignored rather than
//! panicking; the UI layer can forward input without pre-filtering.

use std::io;

use rand::Rng;

use crate::audio::{AudioSink, SoundEffect};
use crate::battle::matching::{stars_for_match, MatchGame, MatchOutcome, PairFeedback};
use crate::battle::quiz::{stars_for_quiz, AnswerFeedback, QuizBattle, QuizOutcome, QuizTick};
use crate::battle::versus::{
    Lane, VersusDifficulty, VersusEvent, VersusFeedback, VersusMatch, VersusPlayer,
};
use crate::battle::BattleMode;
use crate::catalog::WordCatalog;
use crate::constants::QUIZ_RESOLVE_MS;
use crate::leaderboard::save_versus_win;
use crate::player::{load_roster, save_roster, Player};
use crate::progression::{process_battle_result, BattleOutcome, BattleResult};
use crate::storage::{reset_all, KvStore};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Splash,
    UserSelect,
    Menu,
    WorldSelect,
    LevelSelect,
    ModeSelect,
    Battle,
    VersusSetup,
    VersusGame,
    LeaderboardView,
    Achievements,
    Result,
}

/// Leaderboard screen tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardTab {
    Single,
    Versus,
}

pub struct Game {
    pub catalog: WordCatalog,
    store: Box<dyn KvStore>,
    audio: Box<dyn AudioSink>,
    players: Vec<Player>,
    current_player_id: Option<i64>,
    state: AppState,
    selected_world: u32,
    selected_level: u32,
    selected_mode: BattleMode,
    leaderboard_tab: LeaderboardTab,
    quiz: Option<QuizBattle>,
    match_game: Option<MatchGame>,
    versus: Option<VersusMatch>,
    versus_recorded: bool,
    last_result: Option<BattleResult>,
    resolve_ms: u64,
}

impl Game {
    pub fn new(store: Box<dyn KvStore>, audio: Box<dyn AudioSink>) -> Self {
        let players = load_roster(store.as_ref());
        Self {
            catalog: WordCatalog::standard(),
            store,
            audio,
            players,
            current_player_id: None,
            state: AppState::Splash,
            selected_world: 1,
            selected_level: 1,
            selected_mode: BattleMode::Quiz,
            leaderboard_tab: LeaderboardTab::Single,
            quiz: None,
            match_game: None,
            versus: None,
            versus_recorded: false,
            last_result: None,
            resolve_ms: QUIZ_RESOLVE_MS,
        }
    }

    /// Overrides the quiz resolve pause. Zero makes battles synchronous.
    pub fn with_resolve_ms(mut self, resolve_ms: u64) -> Self {
        self.resolve_ms = resolve_ms;
        self
    }

    // ==================== Accessors ====================

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> Option<&Player> {
        let id = self.current_player_id?;
        self.players.iter().find(|p| p.id == id)
    }

    fn current_player_mut(&mut self) -> Option<&mut Player> {
        let id = self.current_player_id?;
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    pub fn selected_world(&self) -> u32 {
        self.selected_world
    }

    pub fn selected_level(&self) -> u32 {
        self.selected_level
    }

    pub fn selected_mode(&self) -> BattleMode {
        self.selected_mode
    }

    pub fn leaderboard_tab(&self) -> LeaderboardTab {
        self.leaderboard_tab
    }

    pub fn quiz(&self) -> Option<&QuizBattle> {
        self.quiz.as_ref()
    }

    pub fn match_game(&self) -> Option<&MatchGame> {
        self.match_game.as_ref()
    }

    pub fn versus(&self) -> Option<&VersusMatch> {
        self.versus.as_ref()
    }

    pub fn last_result(&self) -> Option<&BattleResult> {
        self.last_result.as_ref()
    }

    // ==================== Navigation ====================

    pub fn advance_splash(&mut self) {
        if self.state == AppState::Splash {
            self.state = AppState::UserSelect;
        }
    }

    pub fn create_player(
        &mut self,
        name: &str,
        avatar: &str,
        now_ms: i64,
    ) -> io::Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        let player = Player::new(name.to_string(), avatar.to_string(), now_ms);
        self.current_player_id = Some(player.id);
        self.players.push(player);
        save_roster(self.store.as_mut(), &self.players)?;
        self.state = AppState::Menu;
        Ok(())
    }

    pub fn select_player(&mut self, id: i64) {
        if self.players.iter().any(|p| p.id == id) {
            self.current_player_id = Some(id);
            self.state = AppState::Menu;
        }
    }

    pub fn delete_player(&mut self, id: i64) -> io::Result<()> {
        self.players.retain(|p| p.id != id);
        if self.current_player_id == Some(id) {
            self.current_player_id = None;
        }
        save_roster(self.store.as_mut(), &self.players)
    }

    pub fn open_worlds(&mut self) {
        if self.state == AppState::Menu && self.current_player().is_some() {
            self.state = AppState::WorldSelect;
        }
    }

    pub fn select_world(&mut self, world_id: u32) {
        if self.state == AppState::WorldSelect && (1..=5).contains(&world_id) {
            self.selected_world = world_id;
            self.state = AppState::LevelSelect;
        }
    }

    /// Enters mode selection for a level the player has unlocked.
    pub fn select_level(&mut self, level: u32) {
        if self.state != AppState::LevelSelect {
            return;
        }
        let unlocked = self
            .current_player()
            .map(|p| level <= p.max_unlocked_level)
            .unwrap_or(false);
        if unlocked {
            self.selected_level = level;
            self.state = AppState::ModeSelect;
        }
    }

    pub fn open_leaderboard(&mut self, tab: LeaderboardTab) {
        if self.state == AppState::Menu {
            self.leaderboard_tab = tab;
            self.state = AppState::LeaderboardView;
        }
    }

    pub fn set_leaderboard_tab(&mut self, tab: LeaderboardTab) {
        if self.state == AppState::LeaderboardView {
            self.leaderboard_tab = tab;
        }
    }

    pub fn open_achievements(&mut self) {
        if self.state == AppState::Menu {
            self.state = AppState::Achievements;
        }
    }

    pub fn open_versus_setup(&mut self) {
        if self.state == AppState::Menu {
            self.state = AppState::VersusSetup;
        }
    }

    /// Back out of the current screen toward the menu.
    pub fn back(&mut self) {
        self.state = match self.state {
            AppState::WorldSelect
            | AppState::LeaderboardView
            | AppState::Achievements
            | AppState::VersusSetup => AppState::Menu,
            AppState::LevelSelect => AppState::WorldSelect,
            AppState::ModeSelect => AppState::LevelSelect,
            AppState::UserSelect => AppState::UserSelect,
            AppState::Menu => AppState::UserSelect,
            AppState::Result => {
                self.last_result = None;
                AppState::Menu
            }
            other => other,
        };
    }

    /// Wipes the roster and every leaderboard.
    pub fn reset_all_progress(&mut self) -> io::Result<()> {
        reset_all(self.store.as_mut())?;
        self.players.clear();
        self.current_player_id = None;
        self.state = AppState::UserSelect;
        Ok(())
    }

    // ==================== Single-player battles ====================

    /// Picks a mode and launches the battle for the selected level.
    pub fn start_battle(&mut self, rng: &mut impl Rng, mode: BattleMode, now_ms: u64) {
        if self.state != AppState::ModeSelect {
            return;
        }
        self.selected_mode = mode;
        self.launch_battle(rng, now_ms);
    }

    /// Replays the level that just ended, same mode.
    pub fn try_again(&mut self, rng: &mut impl Rng, now_ms: u64) {
        if self.state != AppState::Result {
            return;
        }
        self.last_result = None;
        self.launch_battle(rng, now_ms);
    }

    fn launch_battle(&mut self, rng: &mut impl Rng, now_ms: u64) {
        match self.selected_mode {
            BattleMode::Quiz => {
                let battle = QuizBattle::new(
                    &self.catalog,
                    rng,
                    self.selected_level,
                    now_ms,
                    self.resolve_ms,
                );
                self.audio.speak(&battle.current_word().word);
                self.quiz = Some(battle);
            }
            BattleMode::Match => {
                self.match_game = Some(MatchGame::new(
                    &self.catalog,
                    rng,
                    self.selected_level,
                    now_ms,
                ));
            }
        }
        self.state = AppState::Battle;
    }

    /// Forwards an answer to the quiz engine, banking missed words as they
    /// happen so a quit mid-battle still keeps them.
    pub fn submit_quiz_answer(
        &mut self,
        rng: &mut impl Rng,
        word_id: u32,
        now_ms: u64,
    ) -> io::Result<AnswerFeedback> {
        let Some(quiz) = self.quiz.as_mut() else {
            return Ok(AnswerFeedback::Ignored);
        };
        let feedback = quiz.submit_answer(&self.catalog, rng, word_id, now_ms);
        match feedback {
            AnswerFeedback::Hit { .. } => self.audio.play(SoundEffect::Attack),
            AnswerFeedback::Miss { word_id, .. } => {
                self.audio.play(SoundEffect::Damage);
                if let Some(player) = self.current_player_mut() {
                    player.add_mistake(word_id);
                }
                save_roster(self.store.as_mut(), &self.players)?;
            }
            AnswerFeedback::Ignored => {}
        }
        Ok(feedback)
    }

    pub fn submit_match_pair(
        &mut self,
        word_id: u32,
        meaning_word_id: u32,
        now_ms: u64,
    ) -> io::Result<PairFeedback> {
        let Some(game) = self.match_game.as_mut() else {
            return Ok(PairFeedback::Ignored);
        };
        let feedback = game.submit_pair(word_id, meaning_word_id, now_ms);
        if let PairFeedback::Mismatch { word_id, .. } = feedback {
            self.audio.play(SoundEffect::Damage);
            if let Some(player) = self.current_player_mut() {
                player.add_mistake(word_id);
            }
            save_roster(self.store.as_mut(), &self.players)?;
        }
        if let Some(outcome) = self.match_game.as_ref().and_then(|g| g.outcome()) {
            self.finish_match(outcome, now_ms)?;
        }
        Ok(feedback)
    }

    /// Pumps time through whichever battle engine is live.
    pub fn tick(&mut self, rng: &mut impl Rng, now_ms: u64) -> io::Result<()> {
        if self.state == AppState::Battle {
            if let Some(quiz) = self.quiz.as_mut() {
                match quiz.tick(&self.catalog, rng, now_ms) {
                    Some(QuizTick::Presented) => {
                        let word = quiz.current_word().word.clone();
                        self.audio.speak(&word);
                    }
                    Some(QuizTick::Finished(outcome)) => self.finish_quiz(outcome, now_ms)?,
                    None => {}
                }
            }
        }
        if self.state == AppState::VersusGame {
            self.versus_tick(rng, now_ms)?;
        }
        Ok(())
    }

    fn finish_quiz(&mut self, outcome: QuizOutcome, now_ms: u64) -> io::Result<()> {
        let battle_outcome = match outcome {
            QuizOutcome::Win {
                mistakes,
                score,
                time_ms,
            } => {
                self.audio.play(SoundEffect::Win);
                BattleOutcome {
                    level: self.selected_level,
                    mode: BattleMode::Quiz,
                    is_win: true,
                    stars_earned: stars_for_quiz(mistakes),
                    score_earned: score,
                    time_ms: Some(time_ms),
                }
            }
            QuizOutcome::Lose { .. } => {
                self.audio.play(SoundEffect::Fail);
                BattleOutcome {
                    level: self.selected_level,
                    mode: BattleMode::Quiz,
                    is_win: false,
                    stars_earned: 0,
                    score_earned: 0,
                    time_ms: None,
                }
            }
        };
        self.quiz = None;
        self.finalize(battle_outcome, now_ms)
    }

    fn finish_match(&mut self, outcome: MatchOutcome, now_ms: u64) -> io::Result<()> {
        let battle_outcome = match outcome {
            MatchOutcome::Win { mistakes, time_ms } => {
                self.audio.play(SoundEffect::Win);
                BattleOutcome {
                    level: self.selected_level,
                    mode: BattleMode::Match,
                    is_win: true,
                    stars_earned: stars_for_match(mistakes),
                    score_earned: 0,
                    time_ms: Some(time_ms),
                }
            }
            MatchOutcome::Lose { .. } => {
                self.audio.play(SoundEffect::Fail);
                BattleOutcome {
                    level: self.selected_level,
                    mode: BattleMode::Match,
                    is_win: false,
                    stars_earned: 0,
                    score_earned: 0,
                    time_ms: None,
                }
            }
        };
        self.match_game = None;
        self.finalize(battle_outcome, now_ms)
    }

    fn finalize(&mut self, outcome: BattleOutcome, now_ms: u64) -> io::Result<()> {
        let id = self.current_player_id;
        let Some(player) = self
            .players
            .iter_mut()
            .find(|p| Some(p.id) == id)
        else {
            self.state = AppState::Menu;
            return Ok(());
        };
        let result =
            process_battle_result(player, &outcome, self.store.as_mut(), now_ms as i64)?;
        save_roster(self.store.as_mut(), &self.players)?;
        self.last_result = Some(result);
        self.state = AppState::Result;
        Ok(())
    }

    // ==================== Versus ====================

    /// Launches a versus match from the setup screen. `opponent` is `None`
    /// for a computer lane.
    pub fn start_versus(
        &mut self,
        rng: &mut impl Rng,
        opponent: Option<VersusPlayer>,
        difficulty: VersusDifficulty,
        now_ms: u64,
    ) {
        if self.state != AppState::VersusSetup {
            return;
        }
        let Some(current) = self.current_player() else {
            return;
        };
        let p1 = VersusPlayer::human(current.name.clone(), current.avatar.clone());
        let p2 = opponent.unwrap_or_else(VersusPlayer::computer);
        let game = VersusMatch::new(&self.catalog, rng, p1, p2, difficulty, now_ms);
        self.audio.speak(&game.current_word().word);
        self.versus = Some(game);
        self.versus_recorded = false;
        self.state = AppState::VersusGame;
    }

    pub fn submit_versus_answer(
        &mut self,
        lane: Lane,
        word_id: u32,
        now_ms: u64,
    ) -> io::Result<VersusFeedback> {
        let Some(game) = self.versus.as_mut() else {
            return Ok(VersusFeedback::Ignored);
        };
        let feedback = game.submit_answer(lane, word_id, now_ms);
        match feedback {
            VersusFeedback::RoundWon { .. } => self.audio.play(SoundEffect::Attack),
            VersusFeedback::Wrong { .. } => self.audio.play(SoundEffect::Damage),
            VersusFeedback::Ignored => {}
        }
        self.record_versus_winner(now_ms)?;
        Ok(feedback)
    }

    fn versus_tick(&mut self, rng: &mut impl Rng, now_ms: u64) -> io::Result<()> {
        let Some(game) = self.versus.as_mut() else {
            return Ok(());
        };
        if let Some(VersusEvent::RoundStarted) = game.tick(&self.catalog, rng, now_ms) {
            let word = game.current_word().word.clone();
            self.audio.speak(&word);
        }
        self.record_versus_winner(now_ms)
    }

    /// Persists a human versus win exactly once per match.
    fn record_versus_winner(&mut self, now_ms: u64) -> io::Result<()> {
        if self.versus_recorded {
            return Ok(());
        }
        let Some(game) = self.versus.as_ref() else {
            return Ok(());
        };
        let Some(lane) = game.winner() else {
            return Ok(());
        };
        self.versus_recorded = true;
        let winner = game.player(lane);
        if !winner.is_computer {
            let (name, avatar) = (winner.name.clone(), winner.avatar.clone());
            save_versus_win(self.store.as_mut(), &name, &avatar, now_ms as i64)?;
        }
        Ok(())
    }

    /// Quits a single-player battle without finishing it. Banked mistakes
    /// are already saved; no result is produced.
    pub fn abandon_battle(&mut self) {
        if self.state == AppState::Battle {
            self.quiz = None;
            self.match_game = None;
            self.state = AppState::ModeSelect;
        }
    }

    /// Leaves a finished (or abandoned) versus match.
    pub fn exit_versus(&mut self) {
        if self.state == AppState::VersusGame {
            self.versus = None;
            self.state = AppState::Menu;
        }
    }
}
