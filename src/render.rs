//! Frame composition and in-place redraw.
//!
//! `compose` is a pure function of the selection state; `FrameRenderer`
//! owns the erase-and-redraw discipline: before each frame it rewinds the
//! cursor over the prior frame's lines and clears downward, so the prompt
//! always repaints in place instead of scrolling.

use std::io::Write;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::output::MutedWriter;
use crate::state::PromptState;
use crate::theme::Theme;

/// Compose the frame text for a state.
///
/// Active frames are a header plus one line per choice, joined with
/// `\r\n` (the terminal is in raw mode). The final frame collapses to a
/// single answer line terminated with a line break.
pub fn compose(message: &str, labels: &[String], state: &PromptState, theme: &Theme) -> String {
    if state.done {
        return format!(
            "{} {} {}\r\n",
            "?".with(theme.title),
            message.bold(),
            labels[state.selected].as_str().with(theme.accent)
        );
    }

    let mut lines = Vec::with_capacity(labels.len() + 1);
    lines.push(format!(
        "{} {}",
        "?".with(theme.title),
        format!("{}{}", message, theme.hint).bold()
    ));
    for (idx, label) in labels.iter().enumerate() {
        if idx == state.selected {
            lines.push(format!("{} {}", theme.marker, label).with(theme.accent).to_string());
        } else {
            lines.push(format!("  {}", label));
        }
    }
    lines.join("\r\n")
}

/// Erase-and-redraw writer for composed frames.
///
/// Tracks how many lines the frame currently on screen occupies. Each
/// draw issues one `write_frame` on the sink: cursor rewind, clear, new
/// frame text.
pub struct FrameRenderer {
    rows: usize,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self { rows: 0 }
    }

    /// Lines occupied by the frame currently on screen.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Replace the prior frame with `frame`.
    pub fn draw<W: Write>(&mut self, out: &mut MutedWriter<W>, frame: &str) -> std::io::Result<()> {
        let mut buf = Vec::new();
        if self.rows > 1 {
            // Cursor sits on the prior frame's last line.
            queue!(buf, MoveUp((self.rows - 1) as u16))?;
        }
        if self.rows > 0 {
            queue!(buf, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
        }
        buf.extend_from_slice(frame.as_bytes());
        out.write_frame(&buf)?;
        self.rows = frame.lines().count();
        Ok(())
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}
