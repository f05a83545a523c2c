use crossterm::style::Color;

// Frame colors
pub const TITLE: Color = Color::Green;
pub const ACCENT: Color = Color::Cyan;

// Selected-line marker and header hint
pub const MARKER: &str = "❯";
pub const HINT: &str = "(use arrow keys)";

/// Visual styling for a prompt.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Prefix for the selected line
    pub marker: String,
    /// Color for the selected line and the confirmed answer
    pub accent: Color,
    /// Color for the leading `?`
    pub title: Color,
    /// Hint appended to the message while the prompt is active
    pub hint: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            marker: MARKER.to_string(),
            accent: ACCENT,
            title: TITLE,
            hint: HINT.to_string(),
        }
    }
}
