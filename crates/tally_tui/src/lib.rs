//! Tally TUI - terminal front end for the tic-tac-toe tally engine.
//!
//! # Architecture
//!
//! - **App**: owns the [`Engine`](tally_tictactoe::Engine), cursor, theme
//!   and spark timer; maps keys and clicks onto engine operations
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Config**: TOML settings with clap overrides
//! - **Replay**: headless move application for scripting

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod theme;
pub mod ui;

pub use app::{App, Control};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use theme::Theme;
