//! End-to-end key handling through the app.

use crossterm::event::KeyCode;
use tally_tictactoe::{Outcome, Player};
use tally_tui::{App, Control, TuiConfig};

fn keys(app: &mut App, input: &str) {
    for c in input.chars() {
        assert_eq!(app.handle_key(KeyCode::Char(c)), Control::Continue);
    }
}

#[test]
fn test_tally_accumulates_across_games() {
    let mut app = App::new(&TuiConfig::default());

    // X wins the top row.
    keys(&mut app, "14253");
    assert_eq!(app.engine().outcome(), Outcome::Won(Player::X));
    keys(&mut app, "n");

    // Draw.
    keys(&mut app, "123546879");
    assert_eq!(app.engine().outcome(), Outcome::Draw);
    keys(&mut app, "n");

    // O wins the middle row.
    keys(&mut app, "14257");
    keys(&mut app, "6");
    assert_eq!(app.engine().outcome(), Outcome::Won(Player::O));

    let stats = app.engine().stats();
    assert_eq!((stats.x_wins(), stats.o_wins(), stats.draws()), (1, 1, 1));

    keys(&mut app, "s");
    assert_eq!(app.engine().stats().total(), 0);
    assert_eq!(app.status_message(), "Next player: X");
}

#[test]
fn test_keys_after_win_are_ignored() {
    let mut app = App::new(&TuiConfig::default());
    keys(&mut app, "14253");
    let board = app.engine().board().clone();

    keys(&mut app, "6789");
    assert_eq!(app.engine().board(), &board);
    assert_eq!(app.engine().stats().x_wins(), 1);
}
