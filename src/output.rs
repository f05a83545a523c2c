//! Muted output sink.
//!
//! Wraps the terminal output stream with a suppressible pass-through.
//! The `Write` impl is the echo path: while the sink is muted, bytes
//! arriving there are swallowed. Frames go through `write_frame`, which
//! unmutes for exactly one write and re-mutes afterwards, error or not,
//! so the widget's own output always appears while the user's keystrokes
//! stay invisible.

use std::io::{self, Write};

/// Suppressible writer around the terminal output stream.
pub struct MutedWriter<W: Write> {
    inner: W,
    muted: bool,
    closed: bool,
}

impl<W: Write> MutedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            muted: false,
            closed: false,
        }
    }

    /// Suppress echo-path writes until `unmute`.
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Let echo-path writes through again.
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Write a frame, bypassing the mute.
    ///
    /// The mute state is restored even when the write fails; a failed
    /// frame write is fatal to the prompt, not retried.
    pub fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let was_muted = self.muted;
        self.muted = false;
        let result = self
            .inner
            .write_all(frame)
            .and_then(|()| self.inner.flush());
        self.muted = was_muted;
        result
    }

    /// Flush and end the sink. Idempotent, safe to call multiple times.
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.muted = false;
        self.inner.flush()
    }

    #[cfg(test)]
    pub(crate) fn inner_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for MutedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.muted || self.closed {
            // Swallowed, but reported as written so callers don't loop.
            return Ok(buf.len());
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_echo_writes_are_swallowed() {
        let mut out = MutedWriter::new(Vec::new());
        out.mute();
        out.write_all(b"typed by user").unwrap();
        assert!(out.inner_ref().is_empty());
    }

    #[test]
    fn test_unmuted_echo_writes_pass_through() {
        let mut out = MutedWriter::new(Vec::new());
        out.write_all(b"visible").unwrap();
        assert_eq!(out.inner_ref().as_slice(), b"visible");
    }

    #[test]
    fn test_frame_writes_bypass_mute() {
        let mut out = MutedWriter::new(Vec::new());
        out.mute();
        out.write_frame(b"? frame").unwrap();
        assert_eq!(out.inner_ref().as_slice(), b"? frame");
        assert!(out.is_muted());
    }

    #[test]
    fn test_close_is_idempotent_and_final() {
        let mut out = MutedWriter::new(Vec::new());
        out.write_frame(b"a").unwrap();
        out.close().unwrap();
        out.close().unwrap();
        out.write_frame(b"b").unwrap();
        out.write_all(b"c").unwrap();
        assert_eq!(out.inner_ref().as_slice(), b"a");
    }

    #[test]
    fn test_close_unmutes() {
        let mut out = MutedWriter::new(Vec::new());
        out.mute();
        out.close().unwrap();
        assert!(!out.is_muted());
    }
}
