//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use ttt_timeline::view::{self, StatusLine};
use ttt_timeline::{Player, Position, Square};

use crate::app::App;
use crate::input::Focus;

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(
        "arrows move  enter play  1-9 play cell  tab switch panel  s sort  r restart  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.engine().state();
    let board = state.current_board();
    let winning = view::winning_cells(state);
    let show_cursor = app.focus() == Focus::Board;

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let Some(pos) = Position::from_index(row * 3 + col) else {
                continue;
            };
            spans.push(cell_span(
                board.get(pos),
                winning.contains(&pos),
                show_cursor && pos == app.cursor(),
            ));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled(
                "─────┼─────┼─────",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let block = panel_block(
        format!("Board (step {})", state.step_number()),
        app.focus() == Focus::Board,
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, center_rect(area, 30, 9));
}

fn cell_span(square: Square, winning: bool, cursor: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => ("     ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "  X  ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "  O  ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.engine().state();
    let items: Vec<ListItem> = app
        .entries()
        .into_iter()
        .map(|entry| {
            let marker = if entry.is_current { "● " } else { "  " };
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{}{}", marker, entry), style))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let title = format!("Moves [s: {}]", view::sort_label(state.order_ascending()));
    let list = List::new(items)
        .block(panel_block(title, focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(focused.then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = view::status_line(app.engine().state());
    let color = match status {
        StatusLine::Winner(_) => Color::Green,
        StatusLine::Draw => Color::Magenta,
        StatusLine::NextPlayer(_) => Color::Yellow,
    };

    let mut text = status.to_string();
    if !app.status_message().is_empty() {
        text.push_str("  |  ");
        text.push_str(app.status_message());
    }

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
