//! Leaderboard, achievement, and result screens.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::achievements::all_achievements;
use crate::battle::BattleMode;
use crate::leaderboard::{format_time, get_leaderboard, get_versus_leaderboard};
use crate::progression::BattleStatus;
use crate::session::{Game, LeaderboardTab};

use super::{centered_rect, titled_block, UiState};

pub fn draw_leaderboard(frame: &mut Frame, area: Rect, game: &Game, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let tabs = Paragraph::new(" [S] Tahap tunggal   [V] Pertandingan   [Kiri/Kanan] tahap")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(tabs, chunks[0]);

    match game.leaderboard_tab() {
        LeaderboardTab::Single => draw_single_board(frame, chunks[1], game, ui),
        LeaderboardTab::Versus => draw_versus_board(frame, chunks[1], game),
    }
}

fn draw_single_board(frame: &mut Frame, area: Rect, game: &Game, ui: &UiState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let quiz = get_leaderboard(game.store(), BattleMode::Quiz, ui.board_level);
    let quiz_lines: Vec<Line> = quiz
        .iter()
        .take(10)
        .enumerate()
        .map(|(i, e)| Line::from(format!("  {}. {} - {} mata", i + 1, e.player_name, e.score)))
        .collect();
    frame.render_widget(
        Paragraph::new(quiz_lines).block(titled_block(&format!("Kuiz - Tahap {}", ui.board_level))),
        columns[0],
    );

    let matches = get_leaderboard(game.store(), BattleMode::Match, ui.board_level);
    let match_lines: Vec<Line> = matches
        .iter()
        .take(10)
        .enumerate()
        .map(|(i, e)| {
            Line::from(format!(
                "  {}. {} - {}",
                i + 1,
                e.player_name,
                format_time(e.time_ms)
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(match_lines)
            .block(titled_block(&format!("Padanan - Tahap {}", ui.board_level))),
        columns[1],
    );
}

fn draw_versus_board(frame: &mut Frame, area: Rect, game: &Game) {
    let entries = get_versus_leaderboard(game.store());
    let lines: Vec<Line> = entries
        .iter()
        .take(15)
        .enumerate()
        .map(|(i, e)| {
            Line::from(format!(
                "  {}. {} [{}] - {} kemenangan",
                i + 1,
                e.player_name,
                e.avatar,
                e.wins
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Juara Pertandingan")),
        area,
    );
}

pub fn draw_achievements(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(player) = game.current_player() else {
        return;
    };
    let lines: Vec<Line> = all_achievements()
        .iter()
        .map(|def| {
            let unlocked = player.has_achievement(def.id);
            let label = if unlocked {
                format!("  {} {} - {}", def.icon, def.name, def.desc)
            } else {
                format!("  🔒 ??? - {}", def.desc)
            };
            let style = if unlocked {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();
    let unlocked_count = all_achievements()
        .iter()
        .filter(|d| player.has_achievement(d.id))
        .count();
    let title = format!("Pencapaian {}/{}", unlocked_count, all_achievements().len());
    frame.render_widget(Paragraph::new(lines).block(titled_block(&title)), area);
}

pub fn draw_result(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(result) = game.last_result() else {
        return;
    };
    let popup = centered_rect(48, 13, area);
    let mut lines = vec![Line::from("")];
    match result.status {
        BattleStatus::Win => {
            lines.push(Line::from(Span::styled(
                "🎉 MENANG! 🎉",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from("⭐".repeat(result.stars as usize)));
            if result.score > 0 {
                lines.push(Line::from(format!("Mata: {}", result.score)));
            }
            if let Some(time_ms) = result.time_ms {
                lines.push(Line::from(format!("Masa: {}", format_time(time_ms))));
            }
        }
        BattleStatus::Lose => {
            lines.push(Line::from(Span::styled(
                "💀 Kalah...",
                Style::default().fg(Color::Red),
            )));
        }
    }
    lines.push(Line::from(format!("+{:.0} XP", result.xp_gained)));
    if result.is_level_up {
        lines.push(Line::from(Span::styled(
            "NAIK ARAS!",
            Style::default().fg(Color::Cyan),
        )));
    }
    for id in &result.new_achievements {
        if let Some(def) = all_achievements().iter().find(|d| d.id == id.as_str()) {
            lines.push(Line::from(format!("{} Pencapaian: {}", def.icon, def.name)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] cuba lagi  [Esc] menu",
        Style::default().fg(Color::DarkGray),
    )));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled_block("Keputusan"));
    frame.render_widget(paragraph, popup);
}
