//! Stateless UI rendering.
//!
//! The renderer is a pure observer: it reads the [`App`] and draws the
//! localized title, the board, the turn/outcome banner, and the
//! end-of-game modal. It never mutates game state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use trioline::{Board, GameStatus, Outcome, Player, Square};

use crate::app::App;
use crate::i18n::{Key, Messages};

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Status banner
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let messages = app.messages();

    let title = Paragraph::new(messages.resolve(Key::Title))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game().state().board(), app.cursor());

    let banner = match app.game().state().status() {
        GameStatus::InProgress => messages.next_player(app.game().state().to_move()),
        GameStatus::Won(player) => messages.winner_is(player),
        GameStatus::Draw => messages.resolve(Key::Draw).to_string(),
    };
    let status = Paragraph::new(banner)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hints = format!(
        "[1-9/Enter]  [r] {}  [l] {}  [q] {}",
        messages.resolve(Key::Reset),
        messages.other_lang_label(),
        messages.resolve(Key::Quit),
    );
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);

    if let Some(outcome) = app.modal() {
        draw_modal(frame, area, messages, outcome);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: usize) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], board, cursor, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], board, cursor, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], board, cursor, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: usize, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_square(frame, cols[0], board, cursor, start);
    draw_vertical_separator(frame, cols[1]);
    draw_square(frame, cols[2], board, cursor, start + 1);
    draw_vertical_separator(frame, cols[3]);
    draw_square(frame, cols[4], board, cursor, start + 2);
}

fn draw_square(frame: &mut Frame, area: Rect, board: &Board, cursor: usize, pos: usize) {
    let (text, mut style) = match board.get(pos) {
        Some(Square::Occupied(Player::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };
    if pos == cursor {
        style = style.bg(Color::Gray);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_modal(frame: &mut Frame, area: Rect, messages: &Messages, outcome: Outcome) {
    let modal_area = center_rect(area, 40, 7);
    frame.render_widget(Clear, modal_area);

    let (title, body) = match outcome {
        Outcome::Winner(player) => (
            messages.resolve(Key::Congratulations),
            messages.winner_is(player),
        ),
        Outcome::Draw => (
            messages.resolve(Key::Draw),
            String::new(),
        ),
    };

    let text = format!("{}\n\n[Enter] {}", body, messages.resolve(Key::Ok));
    let modal = Paragraph::new(text)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(modal, modal_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
