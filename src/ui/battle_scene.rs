//! Single-player battle rendering: the quiz arena and the match board.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::battle::matching::MatchGame;
use crate::battle::quiz::QuizBattle;
use crate::catalog::world_for_level;
use crate::constants::PLAYER_START_HP;
use crate::session::Game;

use super::{titled_block, MatchColumn, UiState};

pub fn draw(frame: &mut Frame, area: Rect, game: &Game, ui: &UiState) {
    if let Some(quiz) = game.quiz() {
        draw_quiz(frame, area, quiz);
    } else if let Some(match_game) = game.match_game() {
        draw_match(frame, area, match_game, ui);
    }
}

fn hp_gauge(label: String, current: u32, max: u32, color: Color) -> Gauge<'static> {
    let ratio = if max == 0 {
        0.0
    } else {
        (current as f64 / max as f64).clamp(0.0, 1.0)
    };
    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(label)
}

fn draw_quiz(frame: &mut Frame, area: Rect, quiz: &QuizBattle) {
    let enemy_name = world_for_level(quiz.level())
        .map(|w| w.enemy)
        .unwrap_or("Musuh");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        hp_gauge(
            format!("{} {}/{}", enemy_name, quiz.enemy_hp(), quiz.enemy_max_hp()),
            quiz.enemy_hp(),
            quiz.enemy_max_hp(),
            Color::Red,
        )
        .block(titled_block("Musuh")),
        chunks[0],
    );

    let player_hp = quiz.player_hp().max(0) as u32;
    frame.render_widget(
        hp_gauge(
            format!("Anda {}/{}", player_hp, PLAYER_START_HP),
            player_hp,
            PLAYER_START_HP as u32,
            Color::Green,
        ),
        chunks[1],
    );

    let word = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.current_word().word.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(titled_block("Apakah maksudnya?"));
    frame.render_widget(word, chunks[2]);

    let options: Vec<Line> = quiz
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| Line::from(format!("  [{}] {}", i + 1, option.meaning)))
        .collect();
    let list = Paragraph::new(options).block(titled_block("Jawapan"));
    frame.render_widget(list, chunks[3]);

    let status = Paragraph::new(format!(
        " Mata: {}  Combo: x{}  Silap: {}",
        quiz.score(),
        quiz.combo(),
        quiz.mistakes()
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[4]);
}

fn draw_match(frame: &mut Frame, area: Rect, game: &MatchGame, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let word_lines: Vec<Line> = game
        .words()
        .iter()
        .enumerate()
        .map(|(row, word)| {
            card_line(
                row,
                &word.word,
                game.is_matched(word.id),
                ui.match_column == MatchColumn::Words && ui.match_row == row,
                ui.selected_word == Some(word.id),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(word_lines).block(titled_block("Perkataan")),
        columns[0],
    );

    let meaning_lines: Vec<Line> = game
        .meanings()
        .iter()
        .enumerate()
        .map(|(row, word)| {
            card_line(
                row,
                &word.meaning,
                game.is_matched(word.id),
                ui.match_column == MatchColumn::Meanings && ui.match_row == row,
                false,
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(meaning_lines).block(titled_block("Maksud")),
        columns[1],
    );

    let status = Paragraph::new(format!(
        " Baki: {}  Peluang silap: {}",
        game.remaining(),
        game.mistakes_left()
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[1]);
}

fn card_line(
    row: usize,
    text: &str,
    matched: bool,
    under_cursor: bool,
    selected: bool,
) -> Line<'static> {
    let cursor = if under_cursor { "> " } else { "  " };
    let label = if matched {
        format!("{}✓ {}", cursor, text)
    } else {
        format!("{}{}. {}", cursor, row + 1, text)
    };
    let style = if matched {
        Style::default().fg(Color::DarkGray)
    } else if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if under_cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(Span::styled(label, style))
}
