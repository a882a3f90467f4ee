//! The engine's view of "where am I in the input". Two implementations
//! share one trait so the engine can run its algorithm identically over
//! an in-memory string and a chunked byte reader.

mod buffered;
mod str_cursor;

pub use buffered::BufferedCursor;
pub use str_cursor::StrCursor;

use crate::error::ParseErrorKind;
use crate::lexical::{scan_string, NumberMatch, StringScan};

/// A cursor exposes a resident text window and a position into it, plus the
/// ability to grow the window when a lexical scan runs off its end.
pub trait Cursor {
    /// The current read position, relative to the resident window.
    fn pos(&self) -> usize;

    /// Move the read position forward by `n` bytes (not chars) within the
    /// resident window. `n` must not move past the window's length.
    fn advance(&mut self, n: usize);

    /// The resident window, as a string slice.
    fn window(&self) -> &str;

    /// Ensure at least `min_needed` bytes are available starting at the
    /// current position, growing the window if necessary. Returns `true` if
    /// that many bytes (or more) are now available, `false` if the
    /// underlying source is exhausted and fewer are available.
    fn ensure(&mut self, min_needed: usize) -> Result<bool, ParseErrorKind>;

    /// `true` once the underlying source has been fully consumed and the
    /// resident window holds everything that remains.
    fn at_eof(&self) -> bool;

    /// The absolute byte offset of the cursor's position in the logical
    /// input stream (used for error reporting).
    fn absolute_pos(&self) -> usize;

    /// Peek the byte at the current position, if any is resident.
    fn peek_byte(&self) -> Option<u8> {
        self.window().as_bytes().get(self.pos()).copied()
    }

    /// Skip whitespace, growing the window as needed in case the input
    /// ends in a run of whitespace that straddles a refill boundary.
    fn skip_whitespace(&mut self) -> Result<(), ParseErrorKind> {
        loop {
            let mut p = self.pos();
            let w = self.window();
            let new_p = crate::lexical::skip_whitespace(w, p);
            p = new_p;
            let len = self.window().len();
            self.advance_to(p);
            if p < len {
                return Ok(());
            }
            if self.at_eof() {
                return Ok(());
            }
            if !self.ensure(p + 1)? {
                return Ok(());
            }
        }
    }

    /// Move the read position to an absolute index within the window
    /// (must be >= current position).
    fn advance_to(&mut self, new_pos: usize) {
        let delta = new_pos - self.pos();
        self.advance(delta);
    }

    /// Scan a quoted string starting right after an opening `"` already
    /// consumed by the caller, refilling and retrying as needed.
    fn scan_string(&mut self) -> Result<String, ParseErrorKind> {
        loop {
            let start = self.pos();
            match scan_string(self.window(), start) {
                StringScan::Complete { value, end } => {
                    self.advance_to(end);
                    return Ok(value);
                }
                StringScan::Malformed(kind) => return Err(kind),
                StringScan::Incomplete => {
                    let len = self.window().len();
                    if !self.ensure(len + 1)? {
                        return Err(ParseErrorKind::UnexpectedEof);
                    }
                }
            }
        }
    }

    /// Match a number literal starting at the current position, refilling
    /// and retrying while the match runs up against the window's edge.
    fn match_number(&mut self) -> Result<(String, bool), ParseErrorKind> {
        loop {
            let start = self.pos();
            let eof = self.at_eof();
            match crate::lexical::match_number(self.window(), start, eof) {
                NumberMatch::Complete { end, is_float } => {
                    let text = self.window()[start..end].to_string();
                    self.advance_to(end);
                    return Ok((text, is_float));
                }
                NumberMatch::NoMatch => {
                    return Err(ParseErrorKind::UnexpectedCharacter(
                        self.window()[start..].chars().next().unwrap_or('\0'),
                    ));
                }
                NumberMatch::Incomplete => {
                    let len = self.window().len();
                    if !self.ensure(len + 1)? {
                        // Source is exhausted; re-run once more with
                        // at_eof forced by the cursor's own at_eof() flag,
                        // which ensure() should now reflect.
                        continue;
                    }
                }
            }
        }
    }
}
