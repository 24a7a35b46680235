//! Keyboard mapping: cursor movement, direct cell keys and commands.

use crossterm::event::KeyCode;
use tally_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Start a new game, keeping the tally.
    NewGame,
    /// Zero the tally and start a new game.
    ResetStats,
    /// Switch between dark and light.
    ToggleTheme,
    /// Leave the app.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key to an [`Action`] given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('s') => Action::ResetStats,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::None, Action::Play),
        code => {
            let moved = move_cursor(cursor, code);
            if moved == cursor {
                Action::None
            } else {
                Action::Cursor(moved)
            }
        }
    }
}

/// Moves cursor based on arrow keys or `hjkl`, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::from_row_col(row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}
