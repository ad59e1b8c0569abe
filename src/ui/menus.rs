//! Menu screens: splash, player select, main menu, world/level/mode pickers.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::{world_for_level, world_start_level, AVATARS, WORLDS};
use crate::constants::LEVELS_PER_WORLD;
use crate::player::required_xp;
use crate::session::Game;

use super::{centered_rect, titled_block, UiState};

pub fn draw_splash(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 9, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "⚔ PERTARUNGAN KATA ⚔",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Kuasai perkataan, kalahkan musuh!"),
        Line::from(""),
        Line::from(Span::styled(
            "Tekan mana-mana kekunci...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, popup);
}

pub fn draw_user_select(frame: &mut Frame, area: Rect, game: &Game, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let items: Vec<ListItem> = game
        .players()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let marker = if i == ui.roster_index { "> " } else { "  " };
            let line = format!(
                "{}{} [{}]  Aras {}  ⭐{}",
                marker,
                p.name,
                p.avatar,
                p.player_level,
                p.total_stars()
            );
            let style = if i == ui.roster_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();
    let list = List::new(items).block(titled_block("Pilih Pemain"));
    frame.render_widget(list, chunks[0]);

    let avatar = AVATARS[ui.avatar_index % AVATARS.len()];
    let form = Paragraph::new(vec![
        Line::from(format!("Nama baru: {}_", ui.name_input)),
        Line::from(format!("Avatar: < {} >  (kiri/kanan)", avatar)),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] cipta/pilih  [Atas/Bawah] senarai  [D] padam  [Q] keluar",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(titled_block("Pemain Baru"));
    frame.render_widget(form, chunks[1]);
}

pub fn draw_menu(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(player) = game.current_player() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let needed = required_xp(player.player_level);
    let header = Paragraph::new(vec![
        Line::from(format!("{} [{}]", player.name, player.avatar)),
        Line::from(format!(
            "Aras {}  XP {:.0}/{:.0}",
            player.player_level, player.xp, needed
        )),
        Line::from(format!(
            "⭐ {}  Tahap dibuka: {}  Pencapaian: {}",
            player.total_stars(),
            player.max_unlocked_level,
            player.achievements.len()
        )),
    ])
    .block(titled_block("Profil"));
    frame.render_widget(header, chunks[0]);

    let menu = Paragraph::new(vec![
        Line::from(""),
        Line::from("  [1] Mod Pengembaraan"),
        Line::from("  [2] Pertandingan 1 lwn 1"),
        Line::from("  [3] Papan Markah"),
        Line::from("  [4] Pencapaian"),
        Line::from(""),
        Line::from(Span::styled(
            "  [R] Padam semua data  [Esc] tukar pemain  [Q] keluar",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(titled_block("Menu Utama"));
    frame.render_widget(menu, chunks[1]);
}

pub fn draw_world_select(frame: &mut Frame, area: Rect, game: &Game) {
    let unlocked = game
        .current_player()
        .map(|p| p.max_unlocked_level)
        .unwrap_or(1);
    let lines: Vec<Line> = WORLDS
        .iter()
        .map(|world| {
            let start = world_start_level(world.id);
            let reachable = start <= unlocked;
            let label = if reachable {
                format!("  [{}] {} - {} ({})", world.id, world.name, world.enemy, world.desc)
            } else {
                format!("  [{}] {} - Berkunci", world.id, world.name)
            };
            let style = if reachable {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(titled_block("Pilih Dunia"));
    frame.render_widget(paragraph, area);
}

pub fn draw_level_select(frame: &mut Frame, area: Rect, game: &Game, ui: &UiState) {
    let Some(player) = game.current_player() else {
        return;
    };
    let world_id = game.selected_world();
    let start = world_start_level(world_id);
    let world_name = world_for_level(start).map(|w| w.name).unwrap_or("?");

    let lines: Vec<Line> = (start..start + LEVELS_PER_WORLD)
        .map(|level| {
            let unlocked = level <= player.max_unlocked_level;
            let stars = "⭐".repeat(player.stars_for(level) as usize);
            let cursor = if level == ui.level_index { "> " } else { "  " };
            let label = if unlocked {
                format!("{}Tahap {}  {}", cursor, level, stars)
            } else {
                format!("{}Tahap {}  🔒", cursor, level)
            };
            let style = if level == ui.level_index {
                Style::default().fg(Color::Yellow)
            } else if !unlocked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(Span::styled(label, style))
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(titled_block(world_name));
    frame.render_widget(paragraph, area);
}

pub fn draw_mode_select(frame: &mut Frame, area: Rect, game: &Game) {
    let popup = centered_rect(44, 8, area);
    let lines = vec![
        Line::from(format!("Tahap {}", game.selected_level())),
        Line::from(""),
        Line::from("  [1] Kuiz    - lawan musuh, kumpul mata"),
        Line::from("  [2] Padanan - padankan kata, lawan masa"),
        Line::from(""),
        Line::from(Span::styled(
            "  [Esc] kembali",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(titled_block("Pilih Mod"));
    frame.render_widget(paragraph, popup);
}
