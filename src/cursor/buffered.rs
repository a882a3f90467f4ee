use std::io::Read;

use crate::error::ParseErrorKind;

use super::Cursor;

/// A cursor over a chunked byte source: a sliding text window that grows by
/// reading one more chunk at a time, preserving whatever of the previous
/// window was not yet consumed.
///
/// Incremental UTF-8 decoding: bytes that arrive mid-multibyte-sequence are
/// held in `pending_bytes` until the rest of the sequence arrives, using
/// [`std::str::from_utf8`]'s `valid_up_to`/`error_len` to tell "truncated,
/// wait for more" apart from "genuinely invalid".
pub struct BufferedCursor<R: Read> {
    reader: R,
    chunk_size: usize,
    window: String,
    pos: usize,
    pending_bytes: Vec<u8>,
    source_eof: bool,
    absolute_base: usize,
}

impl<R: Read> BufferedCursor<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        BufferedCursor {
            reader,
            chunk_size: chunk_size.max(1),
            window: String::new(),
            pos: 0,
            pending_bytes: Vec::new(),
            source_eof: false,
            absolute_base: 0,
        }
    }

    /// Drop the already-consumed prefix of the window, read one more chunk,
    /// and decode as much of it as is currently valid UTF-8.
    fn refill_once(&mut self) -> Result<bool, ParseErrorKind> {
        if self.pos > 0 {
            self.window.drain(..self.pos);
            self.absolute_base += self.pos;
            self.pos = 0;
        }

        if self.source_eof {
            return Ok(false);
        }

        let mut buf = vec![0u8; self.chunk_size];
        let n = self
            .reader
            .read(&mut buf)
            .map_err(ParseErrorKind::from)?;

        if n == 0 {
            self.source_eof = true;
            if !self.pending_bytes.is_empty() {
                return Err(ParseErrorKind::InvalidEscape);
            }
            return Ok(false);
        }

        let mut combined = std::mem::take(&mut self.pending_bytes);
        combined.extend_from_slice(&buf[..n]);

        match std::str::from_utf8(&combined) {
            Ok(s) => {
                self.window.push_str(s);
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                // SAFETY: `valid_up_to` bytes were just validated by
                // `from_utf8` above.
                let valid = std::str::from_utf8(&combined[..valid_up_to]).unwrap();
                self.window.push_str(valid);
                if e.error_len().is_some() {
                    return Err(ParseErrorKind::InvalidEscape);
                }
                self.pending_bytes = combined[valid_up_to..].to_vec();
            }
        }

        Ok(true)
    }
}

impl<R: Read> Cursor for BufferedCursor<R> {
    fn pos(&self) -> usize {
        self.pos
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn window(&self) -> &str {
        &self.window
    }

    fn ensure(&mut self, min_needed: usize) -> Result<bool, ParseErrorKind> {
        while self.window.len() - self.pos < min_needed {
            if !self.refill_once()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn at_eof(&self) -> bool {
        self.source_eof && self.pending_bytes.is_empty()
    }

    fn absolute_pos(&self) -> usize {
        self.absolute_base + self.pos
    }
}
