//! Command-line interface for tally.

use crate::theme::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_tictactoe::Position;

/// Tally - tic-tac-toe with a running win/draw tally
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Terminal tic-tac-toe with a running win/draw tally", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (default: tally.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Starting theme, overriding the config file
        #[arg(long, value_enum)]
        theme: Option<Theme>,
    },

    /// Apply moves headlessly and print the result
    Replay {
        /// Cells to play in order: indices 0-8 or labels like `top-left`
        #[arg(required = true)]
        moves: Vec<Position>,
    },
}

impl Cli {
    /// Returns the subcommand, treating a bare `tally` as `tally play`.
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            config: None,
            theme: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_plays() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                config: None,
                theme: None
            }
        );
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from(["tally", "play", "--config", "x.toml", "--theme", "light"])
            .unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                config: Some(PathBuf::from("x.toml")),
                theme: Some(Theme::Light)
            }
        );
    }

    #[test]
    fn test_replay_accepts_numbers_and_labels() {
        let cli = Cli::try_parse_from(["tally", "replay", "0", "center", "8"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec![Position::TopLeft, Position::Center, Position::BottomRight]
            }
        );
    }

    #[test]
    fn test_replay_rejects_bad_cell() {
        assert!(Cli::try_parse_from(["tally", "replay", "12"]).is_err());
        assert!(Cli::try_parse_from(["tally", "replay"]).is_err());
    }
}
