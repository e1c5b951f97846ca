//! Stateless UI rendering for tic-tac-toe.

use crate::games::tictactoe::{Player, Position, Square, ViewState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "arrows/1-9: move  enter: play  [ ]: select  g: jump  o: order  q: quit";

/// Draws one frame from a view.
pub fn draw(
    frame: &mut Frame,
    view: &ViewState,
    cursor: Position,
    selected: usize,
    message: Option<&str>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    draw_board(frame, columns[0], view, cursor);
    draw_moves(frame, columns[1], view, selected);

    let status = match message {
        Some(message) => format!("{}  ({})", view.status(), message),
        None => view.status().to_string(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &ViewState, cursor: Position) {
    let board_area = center_rect(area, 17, 5);
    let lines: Vec<Line> = (0..3)
        .flat_map(|row| {
            let cells: Vec<Span> = (0..3)
                .filter_map(|col| Position::from_coordinates(row, col))
                .flat_map(|pos| {
                    let cell = cell_span(view, cursor, pos);
                    if pos.col() < 2 {
                        vec![cell, Span::styled("│", Style::default().fg(Color::DarkGray))]
                    } else {
                        vec![cell]
                    }
                })
                .collect();
            let mut lines = vec![Line::from(cells)];
            if row < 2 {
                lines.push(Line::styled(
                    "─────┼─────┼─────",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(view: &ViewState, cursor: Position, pos: Position) -> Span<'static> {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => ("     ", Style::default()),
        Square::Occupied(Player::X) => (
            "  X  ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "  O  ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &ViewState, selected: usize) {
    let lines: Vec<Line> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(row, descriptor)| {
            let mut style = if *descriptor.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if row == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::styled(descriptor.label(), style)
        })
        .collect();

    let title = format!("Moves ({})", view.display_order());
    let list = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameSession;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draw_renders_status_and_moves() {
        let mut session = GameSession::new();
        for index in [0, 4, 1, 3, 2] {
            session.play_move(index).expect("in range");
        }
        let view = session.view_state().expect("valid history");

        let mut terminal = Terminal::new(TestBackend::new(90, 24)).expect("test backend");
        terminal
            .draw(|frame| draw(frame, &view, Position::Center, 0, None))
            .expect("draw");

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Winner: X"));
        assert!(rendered.contains("Go to game start"));
        assert!(rendered.contains("You are at move 5 (0,2)"));
    }
}
