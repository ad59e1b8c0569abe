//! Versus rendering: the setup form and the two-lane arena.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::battle::versus::{Lane, VersusPlayer};
use crate::constants::VERSUS_START_HP;
use crate::session::Game;

use super::{centered_rect, titled_block, UiState};

pub fn draw_setup(frame: &mut Frame, area: Rect, ui: &UiState) {
    let popup = centered_rect(52, 11, area);
    let opponent = if ui.vs_computer {
        format!("Komputer ({})", ui.difficulty.name())
    } else {
        format!("Manusia: {}_  (Tahap {})", ui.p2_name_input, ui.manual_level)
    };
    let lines = vec![
        Line::from(""),
        Line::from(format!("  Lawan: {}", opponent)),
        Line::from(""),
        Line::from("  [C] komputer / manusia"),
        Line::from("  [Kiri/Kanan] kesukaran, [Atas/Bawah] tahap manual"),
        Line::from("  Taip nama untuk pemain kedua"),
        Line::from(""),
        Line::from(Span::styled(
            "  [Enter] mula  [Esc] kembali",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(titled_block("Pertandingan 1 lwn 1"));
    frame.render_widget(paragraph, popup);
}

pub fn draw_game(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(versus) = game.versus() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);
    let lanes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_lane(frame, lanes[0], versus.player(Lane::P1), Color::Green);
    draw_lane(frame, lanes[1], versus.player(Lane::P2), Color::Magenta);

    let word = Paragraph::new(vec![
        Line::from(format!("Pusingan {}", versus.round())),
        Line::from(""),
        Line::from(Span::styled(
            versus.current_word().word.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(titled_block("Siapa cepat?"));
    frame.render_widget(word, chunks[1]);

    let options: Vec<Line> = versus
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            Line::from(format!(
                "  [{}] / [{}]  {}",
                i + 1,
                ['u', 'i', 'o', 'p'][i.min(3)],
                option.meaning
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(options).block(titled_block("Jawapan (P1 kiri / P2 kanan)")),
        chunks[2],
    );

    let footer = if let Some(winner) = versus.winner() {
        format!(
            " 🏆 {} menang! [Esc] kembali",
            versus.player(winner).name
        )
    } else {
        " [Esc] tinggalkan perlawanan".to_string()
    };
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn draw_lane(frame: &mut Frame, area: Rect, player: &VersusPlayer, color: Color) {
    let hp = player.hp.max(0) as f64 / VERSUS_START_HP as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(hp.clamp(0.0, 1.0))
        .label(format!(
            "{} [{}]  HP {}  Mata {}",
            player.name,
            player.avatar,
            player.hp.max(0),
            player.score
        ))
        .block(titled_block(if player.is_computer {
            "Komputer"
        } else {
            "Pemain"
        }));
    frame.render_widget(gauge, area);
}
