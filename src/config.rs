//! Configuration file support for pickline.
//!
//! Configuration is loaded from `~/.config/pickline/config.toml` and only
//! customizes presentation; the prompt itself never reads or writes files.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/pickline/config.toml
//! marker = ">"
//! accent = "magenta"
//! hint = " (↑/↓, enter to confirm)"
//! ```

use std::path::PathBuf;

use crossterm::style::Color;
use serde::Deserialize;

use crate::theme::Theme;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Marker drawn before the selected line
    pub marker: Option<String>,

    /// Accent color name for the selected line (e.g. "cyan", "magenta")
    pub accent: Option<String>,

    /// Hint appended to the message while the prompt is active
    pub hint: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't
    /// be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pickline")
            .join("config.toml")
    }

    /// Resolve the effective theme: defaults overlaid with any
    /// configured overrides. An unrecognized accent name keeps the
    /// default color.
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        if let Some(marker) = &self.marker {
            theme.marker = marker.clone();
        }
        if let Some(accent) = self.accent.as_deref().and_then(parse_color) {
            theme.accent = accent;
        }
        if let Some(hint) = &self.hint {
            theme.hint = hint.clone();
        }
        theme
    }
}

/// Map a color name to a terminal color.
fn parse_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}
