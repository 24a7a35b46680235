//! Stateless UI rendering for the board and tally.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::rc::Rc;
use tally_tictactoe::{Outcome, Player, Position, Square};

use crate::app::App;
use crate::theme::Palette;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = screen_chunks(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_stats(frame, chunks[1], app, &palette);
    draw_board(frame, chunks[2], app, &palette);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "arrows/hjkl move · enter play · 1-9 cell · n new game · s reset stats · t theme · q quit",
    )
    .style(Style::default().add_modifier(Modifier::DIM))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

/// Screen rectangles of the 9 cells, row-major, for a frame of `area`.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let grid = grid_rect(screen_chunks(area)[2]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(CELL_HEIGHT))
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(grid_constraints(CELL_WIDTH))
            .split(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// Cell under the screen coordinate `(x, y)`, if any.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<Position> {
    board_cells(area)
        .iter()
        .position(|r| r.contains(ScreenPosition::new(x, y)))
        .and_then(Position::from_index)
}

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title
            Constraint::Length(3),               // Tally
            Constraint::Min(GRID_HEIGHT + 2),    // Board
            Constraint::Length(3),               // Status
            Constraint::Length(1),               // Help
        ])
        .split(area)
}

fn grid_constraints(cell: u16) -> [Constraint; 5] {
    [
        Constraint::Length(cell),
        Constraint::Length(1),
        Constraint::Length(cell),
        Constraint::Length(1),
        Constraint::Length(cell),
    ]
}

/// Inner grid area, inside the board frame.
fn grid_rect(board_area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(center_rect(board_area, GRID_WIDTH + 2, GRID_HEIGHT + 2))
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let stats = app.engine().stats();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("X ", bold.fg(palette.x)),
        Span::raw(format!("{} Wins", stats.x_wins())),
        Span::styled("    — ", bold),
        Span::raw(format!("{} Draws    ", stats.draws())),
        Span::styled("O ", bold.fg(palette.o)),
        Span::raw(format!("{} Wins", stats.o_wins())),
    ]);

    let tally = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tally, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let spark = app.spark_remaining();
    let (border_style, border_type) = if spark > 0 {
        (
            Style::default().fg(palette.spark[usize::from(spark % 2)]),
            BorderType::Thick,
        )
    } else {
        (Style::default().fg(palette.border), BorderType::Rounded)
    };

    let frame_area = center_rect(area, GRID_WIDTH + 2, GRID_HEIGHT + 2);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style),
        frame_area,
    );

    let grid = grid_rect(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(CELL_HEIGHT))
        .split(grid);
    draw_separator(frame, rows[1], palette);
    draw_separator(frame, rows[3], palette);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(grid_constraints(CELL_WIDTH))
            .split(row_area);
        draw_separator_vertical(frame, cols[1], palette);
        draw_separator_vertical(frame, cols[3], palette);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, cell, app, palette, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let engine = app.engine();
    let winning = engine
        .winning_triple()
        .is_some_and(|triple| triple.contains(&pos.to_index()));
    let under_cursor = pos == app.cursor() && engine.outcome() == Outcome::InProgress;

    let background = if winning {
        palette.winning
    } else if under_cursor {
        palette.cursor
    } else {
        palette.square
    };

    let mark = match engine.board().get(pos) {
        Square::Empty => Span::raw(" "),
        Square::Occupied(player) => {
            let color = match player {
                Player::X => palette.x,
                Player::O => palette.o,
            };
            Span::styled(
                player.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(mark)])
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let run = "─".repeat(usize::from(CELL_WIDTH));
    let sep = Paragraph::new(format!("{run}┼{run}┼{run}"))
        .style(Style::default().fg(palette.border));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(palette.border));
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
