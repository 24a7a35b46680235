//! Tally - terminal tic-tac-toe with a running win/draw tally.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;
use tally_tui::{App, Cli, Command, Control, Theme, TuiConfig, logging, replay, ui};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    match Cli::parse().command() {
        Command::Play { config, theme } => run_play(config, theme),
        Command::Replay { moves } => {
            logging::init_stderr();
            println!("{}", replay::replay(&moves));
            Ok(())
        }
    }
}

/// Runs the interactive board until the user quits.
fn run_play(config_path: Option<PathBuf>, theme: Option<Theme>) -> Result<()> {
    let mut config = TuiConfig::load(config_path.as_deref())?;
    if let Some(theme) = theme {
        config = config.with_theme(theme);
    }

    logging::init_file(config.log_file())?;
    info!(theme = %config.theme(), "Starting tally TUI");

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let res = run_app(&mut terminal, App::new(&config), &config);
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(e) = &res {
        error!(error = %e, "TUI exited with error");
    }
    res
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App, config: &TuiConfig) -> Result<()> {
    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code) == Control::Quit {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(pos) = ui::cell_at(area, mouse.column, mouse.row) {
                        app.click(pos);
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
