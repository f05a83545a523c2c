//! Prompt controller: configuration, lifecycle, and the event loop.
//!
//! `SelectPrompt::run` owns the whole lifecycle: validate the config,
//! open the muted sink and the raw key source, draw the initial frame,
//! process keys strictly in arrival order, then tear down the terminal
//! before the result is delivered. The inner loop is generic over the
//! key stream and the sink so it can be driven by scripted input in
//! tests.

use std::io::{self, Write};

use futures::{Stream, StreamExt};

use crate::error::{PromptError, Result};
use crate::key::{Key, KeySource};
use crate::log;
use crate::output::MutedWriter;
use crate::render::{FrameRenderer, compose};
use crate::state::PromptState;
use crate::theme::Theme;

/// One selectable item: display label plus the value the prompt resolves to.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Single-select, arrow-key-driven list prompt.
///
/// Not re-entrant: the terminal's input mode and mute state are
/// process-wide, so only one prompt may run at a time.
pub struct SelectPrompt<T> {
    message: String,
    choices: Vec<Choice<T>>,
    default_index: usize,
    theme: Theme,
}

impl<T> SelectPrompt<T> {
    pub fn new(message: impl Into<String>, choices: Vec<Choice<T>>) -> Self {
        Self {
            message: message.into(),
            choices,
            default_index: 0,
            theme: Theme::default(),
        }
    }

    /// Index highlighted when the prompt opens. Defaults to 0.
    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the prompt and resolve to the chosen value.
    ///
    /// Fails fast on an empty choice list or an out-of-range default
    /// index, before any terminal mode change. On every other exit path
    /// (confirmation, interrupt, I/O error) the key source is closed
    /// before the result is delivered, leaving the terminal cooked and
    /// unmuted.
    pub async fn run(mut self) -> Result<T> {
        let len = self.choices.len();
        if len == 0 {
            return Err(PromptError::EmptyChoices);
        }
        if self.default_index >= len {
            return Err(PromptError::DefaultIndexOutOfRange {
                index: self.default_index,
                len,
            });
        }

        let labels: Vec<String> = self.choices.iter().map(|c| c.label.clone()).collect();

        let mut out = MutedWriter::new(io::stdout());
        let mut keys = KeySource::open()?;
        out.mute();
        log::log_event("prompt opened");

        let mut renderer = FrameRenderer::new();
        let outcome = drive(
            &mut keys,
            &mut out,
            &mut renderer,
            &self.message,
            &labels,
            PromptState::new(self.default_index),
            &self.theme,
        )
        .await;

        // Teardown runs on every path, and the key source closes strictly
        // before the result reaches the caller.
        let keys_closed = keys.close();
        let out_closed = out.close();

        let state = outcome?;
        keys_closed?;
        out_closed?;

        log::log_event(&format!("prompt resolved at index {}", state.selected));
        Ok(self.choices.swap_remove(state.selected).value)
    }
}

/// Event loop over an already-open key stream and sink.
///
/// Keys are processed strictly in arrival order; the frame for event N
/// is fully written before event N+1 is read. Returns the completed
/// state; the caller owns teardown.
async fn drive<S, W>(
    keys: &mut S,
    out: &mut MutedWriter<W>,
    renderer: &mut FrameRenderer,
    message: &str,
    labels: &[String],
    mut state: PromptState,
    theme: &Theme,
) -> Result<PromptState>
where
    S: Stream<Item = Key> + Unpin,
    W: Write,
{
    renderer.draw(out, &compose(message, labels, &state, theme))?;

    while let Some(key) = keys.next().await {
        if key == Key::Interrupt {
            log::log_event("prompt interrupted");
            return Err(PromptError::Interrupted);
        }
        state = state.apply(key, labels.len());
        renderer.draw(out, &compose(message, labels, &state, theme))?;
        if state.done {
            return Ok(state);
        }
    }
    Err(PromptError::InputClosed)
}
