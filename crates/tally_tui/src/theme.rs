//! Dark and light color palettes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Color theme for the board.
///
/// Defaults to [`Theme::Dark`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Deep green felt.
    #[default]
    Dark,
    /// Bright green felt.
    Light,
}

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub text: Color,
    /// Empty square background.
    pub square: Color,
    /// Grid lines and frame.
    pub border: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Squares of the winning triple.
    pub winning: Color,
    /// Square under the cursor.
    pub cursor: Color,
    /// Frame colors cycled while sparking.
    pub spark: [Color; 2],
}

impl Theme {
    /// Toggles between `Dark` and `Light`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the palette for this theme.
    pub fn palette(self) -> Palette {
        let common = Palette {
            background: Color::Rgb(0x00, 0x2a, 0x18),
            text: Color::Rgb(0xf5, 0xf5, 0xf5),
            square: Color::Rgb(0x4f, 0x00, 0x00),
            border: Color::Rgb(0x86, 0x31, 0x00),
            x: Color::Rgb(0xf8, 0x5b, 0x53),
            o: Color::Rgb(0x68, 0xc7, 0xff),
            winning: Color::Rgb(0xff, 0xd7, 0x7b),
            cursor: Color::Rgb(0xae, 0x58, 0x4f),
            spark: [Color::Rgb(0x77, 0x69, 0xff), Color::Rgb(0xff, 0xd7, 0x7b)],
        };

        match self {
            Self::Dark => common,
            Self::Light => Palette {
                background: Color::Rgb(0x00, 0x9b, 0x81),
                text: Color::Rgb(0x10, 0x10, 0x10),
                ..common
            },
        }
    }
}
