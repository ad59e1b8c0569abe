mod achievements;
mod audio;
mod battle;
mod build_info;
mod catalog;
mod constants;
mod leaderboard;
mod player;
mod progression;
mod session;
mod storage;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use audio::NullAudio;
use battle::versus::{Lane, VersusDifficulty, VersusPlayer};
use battle::BattleMode;
use catalog::AVATARS;
use constants::LEVELS_PER_WORLD;
use session::{AppState, Game, LeaderboardTab};
use storage::FileStore;
use ui::{MatchColumn, UiState};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "kataclash {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Pertarungan Kata - Malay Vocabulary Battle Game\n");
                println!("Usage: kataclash\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'kataclash --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = FileStore::new()?;
    let mut game = Game::new(Box::new(store), Box::new(NullAudio));
    let mut ui_state = UiState::new();
    let mut rng = rand::thread_rng();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let started = Instant::now();
    let result = run(&mut terminal, &mut game, &mut ui_state, &mut rng, started);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
    ui_state: &mut UiState,
    rng: &mut ThreadRng,
    started: Instant,
) -> io::Result<()> {
    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        game.tick(rng, now_ms)?;

        terminal.draw(|frame| ui::draw_ui(frame, game, ui_state))?;

        // Poll for input (50ms non-blocking)
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let now_ms = started.elapsed().as_millis() as u64;

        // Reset confirmation overlays every screen
        if ui_state.confirm_reset {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    game.reset_all_progress()?;
                    ui_state.confirm_reset = false;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ui_state.confirm_reset = false;
                }
                _ => {}
            }
            continue;
        }

        match game.state() {
            AppState::Splash => game.advance_splash(),

            AppState::UserSelect => match key.code {
                KeyCode::Up => ui_state.roster_index = ui_state.roster_index.saturating_sub(1),
                KeyCode::Down => {
                    if ui_state.roster_index + 1 < game.players().len() {
                        ui_state.roster_index += 1;
                    }
                }
                KeyCode::Left => {
                    ui_state.avatar_index =
                        (ui_state.avatar_index + AVATARS.len() - 1) % AVATARS.len();
                }
                KeyCode::Right => {
                    ui_state.avatar_index = (ui_state.avatar_index + 1) % AVATARS.len();
                }
                KeyCode::Char('q') if ui_state.name_input.is_empty() => return Ok(()),
                KeyCode::Char('d') if ui_state.name_input.is_empty() => {
                    if let Some(player) = game.players().get(ui_state.roster_index) {
                        let id = player.id;
                        game.delete_player(id)?;
                        ui_state.roster_index = 0;
                    }
                }
                KeyCode::Char(c) => ui_state.name_input.push(c),
                KeyCode::Backspace => {
                    ui_state.name_input.pop();
                }
                KeyCode::Enter => {
                    if ui_state.name_input.trim().is_empty() {
                        if let Some(player) = game.players().get(ui_state.roster_index) {
                            let id = player.id;
                            game.select_player(id);
                        }
                    } else {
                        let name = ui_state.name_input.clone();
                        let avatar = AVATARS[ui_state.avatar_index % AVATARS.len()];
                        game.create_player(&name, avatar, Utc::now().timestamp_millis())?;
                        ui_state.name_input.clear();
                    }
                }
                _ => {}
            },

            AppState::Menu => match key.code {
                KeyCode::Char('1') => game.open_worlds(),
                KeyCode::Char('2') => game.open_versus_setup(),
                KeyCode::Char('3') => game.open_leaderboard(LeaderboardTab::Single),
                KeyCode::Char('4') => game.open_achievements(),
                KeyCode::Char('r') | KeyCode::Char('R') => ui_state.confirm_reset = true,
                KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                KeyCode::Esc => game.back(),
                _ => {}
            },

            AppState::WorldSelect => match key.code {
                KeyCode::Char(c @ '1'..='5') => {
                    let world_id = c as u32 - '0' as u32;
                    game.select_world(world_id);
                    ui_state.level_index =
                        catalog::world_start_level(game.selected_world());
                }
                KeyCode::Esc => game.back(),
                _ => {}
            },

            AppState::LevelSelect => {
                let start = catalog::world_start_level(game.selected_world());
                let end = start + LEVELS_PER_WORLD - 1;
                match key.code {
                    KeyCode::Up => {
                        ui_state.level_index = ui_state.level_index.saturating_sub(1).max(start);
                    }
                    KeyCode::Down => {
                        ui_state.level_index = (ui_state.level_index + 1).min(end);
                    }
                    KeyCode::Enter => game.select_level(ui_state.level_index),
                    KeyCode::Esc => game.back(),
                    _ => {}
                }
            }

            AppState::ModeSelect => match key.code {
                KeyCode::Char('1') => {
                    ui_state.reset_battle_cursor();
                    game.start_battle(rng, BattleMode::Quiz, now_ms);
                }
                KeyCode::Char('2') => {
                    ui_state.reset_battle_cursor();
                    game.start_battle(rng, BattleMode::Match, now_ms);
                }
                KeyCode::Esc => game.back(),
                _ => {}
            },

            AppState::Battle => {
                if game.quiz().is_some() {
                    handle_quiz_key(game, rng, key.code, now_ms)?;
                } else if game.match_game().is_some() {
                    handle_match_key(game, ui_state, key.code, now_ms)?;
                }
            }

            AppState::VersusSetup => match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    ui_state.vs_computer = !ui_state.vs_computer;
                }
                KeyCode::Left | KeyCode::Right if ui_state.vs_computer => {
                    ui_state.difficulty = match ui_state.difficulty {
                        VersusDifficulty::Easy => VersusDifficulty::Medium,
                        VersusDifficulty::Medium => VersusDifficulty::Hard,
                        _ => VersusDifficulty::Easy,
                    };
                }
                KeyCode::Up if !ui_state.vs_computer => {
                    ui_state.manual_level = ui_state.manual_level.saturating_sub(1).max(1);
                }
                KeyCode::Down if !ui_state.vs_computer => {
                    ui_state.manual_level = (ui_state.manual_level + 1).min(constants::TOTAL_LEVELS);
                }
                KeyCode::Char(c) if !ui_state.vs_computer => ui_state.p2_name_input.push(c),
                KeyCode::Backspace if !ui_state.vs_computer => {
                    ui_state.p2_name_input.pop();
                }
                KeyCode::Enter => {
                    let (opponent, difficulty) = if ui_state.vs_computer {
                        (None, ui_state.difficulty)
                    } else {
                        let name = if ui_state.p2_name_input.trim().is_empty() {
                            "Pemain 2".to_string()
                        } else {
                            ui_state.p2_name_input.trim().to_string()
                        };
                        (
                            Some(VersusPlayer::human(name, "guest".to_string())),
                            VersusDifficulty::Manual(ui_state.manual_level),
                        )
                    };
                    game.start_versus(rng, opponent, difficulty, now_ms);
                }
                KeyCode::Esc => game.back(),
                _ => {}
            },

            AppState::VersusGame => match key.code {
                KeyCode::Char(c @ '1'..='4') => {
                    let index = c as usize - '1' as usize;
                    submit_versus(game, Lane::P1, index, now_ms)?;
                }
                KeyCode::Char(c @ ('u' | 'i' | 'o' | 'p')) => {
                    let index = match c {
                        'u' => 0,
                        'i' => 1,
                        'o' => 2,
                        _ => 3,
                    };
                    submit_versus(game, Lane::P2, index, now_ms)?;
                }
                KeyCode::Esc => game.exit_versus(),
                _ => {}
            },

            AppState::LeaderboardView => match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    game.set_leaderboard_tab(LeaderboardTab::Single);
                }
                KeyCode::Char('v') | KeyCode::Char('V') => {
                    game.set_leaderboard_tab(LeaderboardTab::Versus);
                }
                KeyCode::Left => {
                    ui_state.board_level = ui_state.board_level.saturating_sub(1).max(1);
                }
                KeyCode::Right => {
                    ui_state.board_level = (ui_state.board_level + 1).min(constants::TOTAL_LEVELS);
                }
                KeyCode::Esc => game.back(),
                _ => {}
            },

            AppState::Achievements => {
                if key.code == KeyCode::Esc {
                    game.back();
                }
            }

            AppState::Result => match key.code {
                KeyCode::Enter => {
                    ui_state.reset_battle_cursor();
                    game.try_again(rng, now_ms);
                }
                KeyCode::Esc => game.back(),
                _ => {}
            },
        }
    }
}

fn handle_quiz_key(
    game: &mut Game,
    rng: &mut ThreadRng,
    code: KeyCode,
    now_ms: u64,
) -> io::Result<()> {
    match code {
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            let word_id = game
                .quiz()
                .and_then(|q| q.options().get(index))
                .map(|w| w.id);
            if let Some(word_id) = word_id {
                game.submit_quiz_answer(rng, word_id, now_ms)?;
            }
        }
        KeyCode::Esc => game.abandon_battle(),
        _ => {}
    }
    Ok(())
}

fn handle_match_key(
    game: &mut Game,
    ui_state: &mut UiState,
    code: KeyCode,
    now_ms: u64,
) -> io::Result<()> {
    let card_count = game.match_game().map(|m| m.words().len()).unwrap_or(0);
    match code {
        KeyCode::Up => ui_state.match_row = ui_state.match_row.saturating_sub(1),
        KeyCode::Down => {
            if ui_state.match_row + 1 < card_count {
                ui_state.match_row += 1;
            }
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            ui_state.match_column = match ui_state.match_column {
                MatchColumn::Words => MatchColumn::Meanings,
                MatchColumn::Meanings => MatchColumn::Words,
            };
        }
        KeyCode::Enter => {
            let Some(match_game) = game.match_game() else {
                return Ok(());
            };
            match ui_state.match_column {
                MatchColumn::Words => {
                    if let Some(word) = match_game.words().get(ui_state.match_row) {
                        if !match_game.is_matched(word.id) {
                            ui_state.selected_word = Some(word.id);
                            ui_state.match_column = MatchColumn::Meanings;
                        }
                    }
                }
                MatchColumn::Meanings => {
                    let meaning_id = match_game.meanings().get(ui_state.match_row).map(|w| w.id);
                    if let (Some(word_id), Some(meaning_id)) = (ui_state.selected_word, meaning_id)
                    {
                        game.submit_match_pair(word_id, meaning_id, now_ms)?;
                        ui_state.selected_word = None;
                        ui_state.match_column = MatchColumn::Words;
                    }
                }
            }
        }
        KeyCode::Esc => game.abandon_battle(),
        _ => {}
    }
    Ok(())
}

fn submit_versus(game: &mut Game, lane: Lane, index: usize, now_ms: u64) -> io::Result<()> {
    // The computer lane answers on its own schedule.
    if game.versus().map(|v| v.player(lane).is_computer) == Some(true) {
        return Ok(());
    }
    let word_id = game
        .versus()
        .and_then(|v| v.options().get(index))
        .map(|w| w.id);
    if let Some(word_id) = word_id {
        game.submit_versus_answer(lane, word_id, now_ms)?;
    }
    Ok(())
}
