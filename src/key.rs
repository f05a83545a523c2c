//! Raw key source: terminal raw mode plus decoded key events.
//!
//! `KeySource::open` switches the terminal into raw mode (immediate
//! keystroke delivery, local echo off) and wraps crossterm's async
//! `EventStream`. The source implements `futures::Stream<Item = Key>`,
//! yielding only the semantic keys the prompt cares about; everything
//! else decodes to `Key::Other` and is a no-op downstream.

use std::pin::Pin;
use std::task::{Context, Poll};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures::{Stream, StreamExt};

use crate::error::Result;

/// Decoded key event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    /// Esc or Ctrl-C; handled by the controller, never by the state machine.
    Interrupt,
    /// Anything else; ignored by downstream consumers.
    Other,
}

/// Map a crossterm key event to a semantic `Key`.
fn decode(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Interrupt,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        _ => Key::Other,
    }
}

/// Terminal key event source.
///
/// Holds the terminal in raw mode between `open` and `close`. `close` is
/// idempotent; `Drop` repeats it best-effort so a panic or early return
/// cannot leave the terminal raw.
pub struct KeySource {
    events: EventStream,
    open: bool,
}

impl KeySource {
    /// Enable raw mode and start reading terminal events.
    pub fn open() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            events: EventStream::new(),
            open: true,
        })
    }

    /// Restore cooked mode and stop delivering events. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.open {
            self.open = false;
            disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for KeySource {
    fn drop(&mut self) {
        if self.open {
            let _ = disable_raw_mode();
        }
    }
}

impl Stream for KeySource {
    type Item = Key;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Key>> {
        let this = self.get_mut();
        if !this.open {
            return Poll::Ready(None);
        }
        loop {
            match this.events.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(Event::Key(key)))) => {
                    // Release events fire on some platforms; only presses count.
                    if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                        return Poll::Ready(Some(decode(key)));
                    }
                }
                // Mouse, resize, focus etc. are not the prompt's concern.
                Poll::Ready(Some(Ok(_))) => {}
                // A read error ends the stream; the controller surfaces it
                // as InputClosed.
                Poll::Ready(Some(Err(_))) | Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
