//! Stateless UI rendering: board, status line and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_core::{GameView, MoveEntry, Order, Player, Position, Square};

use super::app::App;

const HELP: &str = "arrows move · enter place · j/k step · g/G first/last · s sort · n new · q quit";

/// Renders the whole screen from a fresh view of the app.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(20)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app.cursor());
    draw_moves(frame, body[1], &view, app.show_coordinates());

    let mut status = vec![Line::from(view.status_line())];
    if let Some(message) = app.message() {
        status.push(Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))));
    }
    status.push(Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))));
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, row: usize) {
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

    for col in 0..3 {
        if let Some(pos) = Position::at(row, col) {
            draw_cell(frame, cols[col * 2], view, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, pos: Position) {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if view.is_winning_square(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Middle line of the three-line cell.
    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, show_coordinates: bool) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let text = move_label(entry, show_coordinates);
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let arrow = match view.order() {
        Order::Ascending => "↑",
        Order::Descending => "↓",
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Moves {} ", arrow)),
    );
    frame.render_widget(list, area);
}

/// Label for one move list row.
pub fn move_label(entry: &MoveEntry, show_coordinates: bool) -> String {
    if show_coordinates || entry.position().is_none() {
        entry.label().clone()
    } else {
        format!("Go to move #{}", entry.step())
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
