//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{self, Action};
use crate::theme::Theme;
use crossterm::event::KeyCode;
use tally_tictactoe::{Engine, MoveOutcome, Outcome, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep polling.
    Continue,
    /// Leave the loop and restore the terminal.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    cursor: Position,
    theme: Theme,
    spark_ticks: u16,
    spark_remaining: u16,
}

impl App {
    /// Creates a new application from config.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            engine: Engine::new(),
            cursor: Position::Center,
            theme: *config.theme(),
            spark_ticks: *config.spark_ticks(),
            spark_remaining: 0,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Ticks left in the win spark, 0 when idle.
    pub fn spark_remaining(&self) -> u16 {
        self.spark_remaining
    }

    /// Status line text.
    pub fn status_message(&self) -> String {
        match self.engine.outcome() {
            Outcome::InProgress => format!("Next player: {}", self.engine.to_move()),
            outcome => outcome.to_string(),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match input::action_for(self.cursor, key) {
            Action::Quit => return Control::Quit,
            Action::Cursor(pos) => self.cursor = pos,
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::NewGame => self.new_game(),
            Action::ResetStats => self.reset_stats(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = %self.theme, "Theme toggled");
            }
            Action::None => {}
        }
        Control::Continue
    }

    /// Handles a click on `pos`.
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        self.play(pos);
    }

    /// Advances the spark animation by one tick.
    pub fn on_tick(&mut self) {
        self.spark_remaining = self.spark_remaining.saturating_sub(1);
    }

    /// Plays `pos`; rejected moves are ignored.
    fn play(&mut self, pos: Position) {
        match self.engine.apply_move(pos.to_index()) {
            MoveOutcome::Accepted {
                outcome: Outcome::Won(player),
                ..
            } => {
                info!(%player, "Win - sparking");
                self.spark_remaining = self.spark_ticks;
            }
            MoveOutcome::Accepted { .. } => {}
            MoveOutcome::Rejected(reason) => debug!(%reason, "Click ignored"),
        }
    }

    /// Starts a new game, keeping the tally.
    fn new_game(&mut self) {
        self.engine.reset();
        self.spark_remaining = 0;
    }

    /// Zeroes the tally and starts a new game.
    fn reset_stats(&mut self) {
        self.engine.reset_stats();
        self.spark_remaining = 0;
    }
}
