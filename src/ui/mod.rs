pub mod battle_scene;
pub mod boards;
pub mod menus;
pub mod versus_scene;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::battle::versus::VersusDifficulty;
use crate::session::{AppState, Game};

/// Which column of the match board the cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchColumn {
    Words,
    Meanings,
}

/// Terminal-local input state: cursors, text buffers, toggles. Everything
/// here is presentation only; the session never sees it.
pub struct UiState {
    pub name_input: String,
    pub avatar_index: usize,
    pub roster_index: usize,
    pub level_index: u32,
    pub match_column: MatchColumn,
    pub match_row: usize,
    pub selected_word: Option<u32>,
    pub vs_computer: bool,
    pub difficulty: VersusDifficulty,
    pub manual_level: u32,
    pub p2_name_input: String,
    pub board_level: u32,
    pub confirm_reset: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            avatar_index: 0,
            roster_index: 0,
            level_index: 1,
            match_column: MatchColumn::Words,
            match_row: 0,
            selected_word: None,
            vs_computer: true,
            difficulty: VersusDifficulty::Easy,
            manual_level: 1,
            p2_name_input: String::new(),
            board_level: 1,
            confirm_reset: false,
        }
    }

    /// Clears per-battle cursor state when a new battle starts.
    pub fn reset_battle_cursor(&mut self) {
        self.match_column = MatchColumn::Words;
        self.match_row = 0;
        self.selected_word = None;
    }
}

/// Top-level draw dispatch, one branch per screen.
pub fn draw_ui(frame: &mut Frame, game: &Game, ui: &UiState) {
    let area = frame.size();
    match game.state() {
        AppState::Splash => menus::draw_splash(frame, area),
        AppState::UserSelect => menus::draw_user_select(frame, area, game, ui),
        AppState::Menu => menus::draw_menu(frame, area, game),
        AppState::WorldSelect => menus::draw_world_select(frame, area, game),
        AppState::LevelSelect => menus::draw_level_select(frame, area, game, ui),
        AppState::ModeSelect => menus::draw_mode_select(frame, area, game),
        AppState::Battle => battle_scene::draw(frame, area, game, ui),
        AppState::VersusSetup => versus_scene::draw_setup(frame, area, ui),
        AppState::VersusGame => versus_scene::draw_game(frame, area, game),
        AppState::LeaderboardView => boards::draw_leaderboard(frame, area, game, ui),
        AppState::Achievements => boards::draw_achievements(frame, area, game),
        AppState::Result => boards::draw_result(frame, area, game),
    }
    if ui.confirm_reset {
        draw_reset_confirm(frame, area);
    }
}

/// Bordered block with the standard title style.
pub(crate) fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan))
}

/// Centers a fixed-size rect inside the given area.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let h = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(v[1]);
    h[1]
}

fn draw_reset_confirm(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 7, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Padam Semua Data ");
    let inner = block.inner(popup);
    frame.render_widget(ratatui::widgets::Clear, popup);
    frame.render_widget(block, popup);
    let text = Paragraph::new(vec![
        ratatui::text::Line::from(""),
        ratatui::text::Line::from("  Semua pemain dan papan markah akan dipadam."),
        ratatui::text::Line::from(""),
        ratatui::text::Line::from("  [Y] Ya, padam    [N] Batal"),
    ]);
    frame.render_widget(text, inner);
}
