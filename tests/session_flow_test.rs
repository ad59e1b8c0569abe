//! Integration test: Session state machine
//!
//! Drives whole play sessions through the `Game` facade with an in-memory
//! store, a silent audio sink, and a zero-length resolve pause.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use kataclash::audio::NullAudio;
use kataclash::battle::versus::{Lane, VersusDifficulty};
use kataclash::battle::BattleMode;
use kataclash::constants::VERSUS_TOAST_MS;
use kataclash::leaderboard::{get_leaderboard, get_versus_leaderboard};
use kataclash::player::load_roster;
use kataclash::progression::BattleStatus;
use kataclash::session::{AppState, Game, LeaderboardTab};
use kataclash::storage::{KvStore, MemoryStore, PLAYERS_KEY};

fn new_game() -> Game {
    Game::new(Box::new(MemoryStore::default()), Box::new(NullAudio)).with_resolve_ms(0)
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(99)
}

/// Splash through mode select for level 1.
fn navigate_to_mode_select(game: &mut Game) {
    game.advance_splash();
    game.create_player("Ali", "ninja", 1_700_000_000_000).unwrap();
    game.open_worlds();
    game.select_world(1);
    game.select_level(1);
    assert_eq!(game.state(), AppState::ModeSelect);
}

// =============================================================================
// Navigation and roster
// =============================================================================

#[test]
fn test_create_player_persists_roster() {
    let mut game = new_game();
    game.advance_splash();
    assert_eq!(game.state(), AppState::UserSelect);

    game.create_player("Ali", "ninja", 123).unwrap();
    assert_eq!(game.state(), AppState::Menu);
    assert_eq!(game.current_player().unwrap().name, "Ali");

    let roster = load_roster(game.store());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, 123);
}

#[test]
fn test_blank_name_creates_nothing() {
    let mut game = new_game();
    game.advance_splash();
    game.create_player("   ", "ninja", 1).unwrap();
    assert_eq!(game.state(), AppState::UserSelect);
    assert!(game.players().is_empty());
}

#[test]
fn test_locked_level_cannot_be_entered() {
    let mut game = new_game();
    game.advance_splash();
    game.create_player("Ali", "ninja", 1).unwrap();
    game.open_worlds();
    game.select_world(1);
    game.select_level(7);
    // Still on the level picker: only level 1 is unlocked.
    assert_eq!(game.state(), AppState::LevelSelect);
}

#[test]
fn test_legacy_roster_loads_with_defaults() {
    let mut store = MemoryStore::default();
    store
        .set(
            PLAYERS_KEY,
            r#"[{"id": 5, "name": "Siti", "avatar": "girl_pink",
                 "max_unlocked_level": 12, "stars": {"1": 3}}]"#,
        )
        .unwrap();
    let mut game = Game::new(Box::new(store), Box::new(NullAudio));
    game.advance_splash();
    game.select_player(5);

    let player = game.current_player().unwrap();
    assert_eq!(player.max_unlocked_level, 12);
    assert_eq!(player.player_level, 1);
    assert!(player.mistakes.is_empty());
}

#[test]
fn test_reset_wipes_everything() {
    let mut game = new_game();
    game.advance_splash();
    game.create_player("Ali", "ninja", 1).unwrap();
    game.reset_all_progress().unwrap();

    assert!(game.players().is_empty());
    assert!(game.current_player().is_none());
    assert_eq!(game.state(), AppState::UserSelect);
    assert!(game.store().get(PLAYERS_KEY).is_none());
}

// =============================================================================
// Quiz end to end
// =============================================================================

#[test]
fn test_quiz_win_flows_into_result_and_persists() {
    let mut game = new_game();
    let mut rng = rng();
    navigate_to_mode_select(&mut game);

    game.start_battle(&mut rng, BattleMode::Quiz, 0);
    assert_eq!(game.state(), AppState::Battle);

    // Level 1 enemy falls in 8 flawless hits.
    let mut guard = 0;
    while game.state() == AppState::Battle {
        let word_id = game.quiz().unwrap().current_word().id;
        game.submit_quiz_answer(&mut rng, word_id, 0).unwrap();
        game.tick(&mut rng, 0).unwrap();
        guard += 1;
        assert!(guard <= 10, "battle should finish in 8 answers");
    }

    assert_eq!(game.state(), AppState::Result);
    let result = game.last_result().unwrap();
    assert_eq!(result.status, BattleStatus::Win);
    assert_eq!(result.stars, 3);
    assert!(result.is_level_up);

    let player = game.current_player().unwrap();
    assert_eq!(player.max_unlocked_level, 2);
    assert_eq!(player.stars_for(1), 3);

    // Both the roster and the leaderboard hit the store.
    let roster = load_roster(game.store());
    assert_eq!(roster[0].max_unlocked_level, 2);
    assert_eq!(get_leaderboard(game.store(), BattleMode::Quiz, 1).len(), 1);
}

#[test]
fn test_quiz_miss_banks_the_word_immediately() {
    let mut game = new_game();
    let mut rng = rng();
    navigate_to_mode_select(&mut game);
    game.start_battle(&mut rng, BattleMode::Quiz, 0);

    let target = game.quiz().unwrap().current_word().id;
    let wrong = game
        .quiz()
        .unwrap()
        .options()
        .iter()
        .map(|w| w.id)
        .find(|&id| id != target)
        .unwrap();
    game.submit_quiz_answer(&mut rng, wrong, 0).unwrap();

    // Banked and saved mid-battle, not at the end.
    assert_eq!(game.current_player().unwrap().mistakes, vec![target]);
    assert_eq!(load_roster(game.store())[0].mistakes, vec![target]);
}

#[test]
fn test_abandoned_battle_produces_no_result() {
    let mut game = new_game();
    let mut rng = rng();
    navigate_to_mode_select(&mut game);
    game.start_battle(&mut rng, BattleMode::Quiz, 0);

    game.abandon_battle();
    assert_eq!(game.state(), AppState::ModeSelect);
    assert!(game.last_result().is_none());
    assert!(game.quiz().is_none());
}

#[test]
fn test_try_again_restarts_the_same_level() {
    let mut game = new_game();
    let mut rng = rng();
    navigate_to_mode_select(&mut game);
    game.start_battle(&mut rng, BattleMode::Quiz, 0);
    while game.state() == AppState::Battle {
        let word_id = game.quiz().unwrap().current_word().id;
        game.submit_quiz_answer(&mut rng, word_id, 0).unwrap();
        game.tick(&mut rng, 0).unwrap();
    }

    game.try_again(&mut rng, 500);
    assert_eq!(game.state(), AppState::Battle);
    assert_eq!(game.quiz().unwrap().level(), 1);
    assert!(game.last_result().is_none());
}

// =============================================================================
// Match end to end
// =============================================================================

#[test]
fn test_match_win_awards_time_and_bonus() {
    let mut game = new_game();
    let mut rng = rng();
    navigate_to_mode_select(&mut game);
    game.start_battle(&mut rng, BattleMode::Match, 10_000);

    let ids: Vec<u32> = game
        .match_game()
        .unwrap()
        .words()
        .iter()
        .map(|w| w.id)
        .collect();
    for id in &ids {
        game.submit_match_pair(*id, *id, 25_000).unwrap();
    }

    assert_eq!(game.state(), AppState::Result);
    let result = game.last_result().unwrap();
    assert_eq!(result.status, BattleStatus::Win);
    assert_eq!(result.stars, 3);
    assert_eq!(result.time_ms, Some(15_000));
    // 100 base + 150 stars + 50 match bonus.
    assert_eq!(result.xp_gained, 300.0);

    let board = get_leaderboard(game.store(), BattleMode::Match, 1);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].time_ms, 15_000);
}

// =============================================================================
// Versus end to end
// =============================================================================

#[test]
fn test_versus_sweep_records_the_human_win() {
    let mut game = new_game();
    let mut rng = rng();
    game.advance_splash();
    game.create_player("Ali", "ninja", 1).unwrap();
    game.open_versus_setup();
    game.start_versus(&mut rng, None, VersusDifficulty::Easy, 0);
    assert_eq!(game.state(), AppState::VersusGame);

    // Answer at round start every time: always ahead of the computer's
    // 2000ms-minimum schedule.
    let mut now = 0;
    for _ in 0..5 {
        now += 100;
        let answer = game.versus().unwrap().current_word().id;
        game.submit_versus_answer(Lane::P1, answer, now).unwrap();
        now += VERSUS_TOAST_MS;
        game.tick(&mut rng, now).unwrap();
    }

    assert_eq!(game.versus().unwrap().winner(), Some(Lane::P1));
    let board = get_versus_leaderboard(game.store());
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].player_name, "Ali");
    assert_eq!(board[0].wins, 1);

    game.exit_versus();
    assert_eq!(game.state(), AppState::Menu);
    assert!(game.versus().is_none());
}

#[test]
fn test_computer_victory_is_not_recorded() {
    let mut game = new_game();
    let mut rng = rng();
    game.advance_splash();
    game.create_player("Ali", "ninja", 1).unwrap();
    game.open_versus_setup();
    game.start_versus(&mut rng, None, VersusDifficulty::Hard, 0);

    // The human never answers correctly; the computer takes every round it
    // gets right, and the human concedes the rounds it gets wrong.
    let mut now = 0;
    let mut guard = 0;
    while game.versus().unwrap().winner().is_none() {
        now += 50;
        game.tick(&mut rng, now).unwrap();
        let versus = game.versus().unwrap();
        if versus.winner().is_none()
            && versus.is_round_active()
            && versus.ai_decision_at().is_none()
            && !versus.has_answered(Lane::P1)
        {
            // The computer missed this round; concede to move on.
            let answer = versus.current_word().id;
            let wrong = versus
                .options()
                .iter()
                .map(|w| w.id)
                .find(|&id| id != answer)
                .unwrap();
            game.submit_versus_answer(Lane::P1, wrong, now).unwrap();
        }
        guard += 1;
        assert!(guard < 10_000, "computer should close out the match");
    }

    assert_eq!(game.versus().unwrap().winner(), Some(Lane::P2));
    assert!(get_versus_leaderboard(game.store()).is_empty());
}

#[test]
fn test_leaderboard_tab_switch() {
    let mut game = new_game();
    game.advance_splash();
    game.create_player("Ali", "ninja", 1).unwrap();
    game.open_leaderboard(LeaderboardTab::Single);
    assert_eq!(game.state(), AppState::LeaderboardView);
    game.set_leaderboard_tab(LeaderboardTab::Versus);
    assert_eq!(game.leaderboard_tab(), LeaderboardTab::Versus);
    game.back();
    assert_eq!(game.state(), AppState::Menu);
}
