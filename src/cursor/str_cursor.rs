use std::borrow::Cow;

use crate::error::ParseErrorKind;

use super::Cursor;

/// An in-memory cursor over an already-decoded string (borrowed or owned).
/// The whole input is resident from the start, so `ensure` never needs to
/// grow anything, it only ever reports whether the requested amount is
/// already available.
pub struct StrCursor<'a> {
    data: Cow<'a, str>,
    pos: usize,
}

impl<'a> StrCursor<'a> {
    pub fn new(data: Cow<'a, str>) -> Self {
        StrCursor { data, pos: 0 }
    }

    pub fn from_str(s: &'a str) -> Self {
        StrCursor::new(Cow::Borrowed(s))
    }

    pub fn from_string(s: String) -> Self {
        StrCursor::new(Cow::Owned(s))
    }
}

impl<'a> Cursor for StrCursor<'a> {
    fn pos(&self) -> usize {
        self.pos
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn window(&self) -> &str {
        &self.data
    }

    fn ensure(&mut self, min_needed: usize) -> Result<bool, ParseErrorKind> {
        Ok(self.data.len() >= self.pos + min_needed)
    }

    fn at_eof(&self) -> bool {
        true
    }

    fn absolute_pos(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ensure_never_grows() {
        let mut c = StrCursor::from_str("abc");
        assert!(c.ensure(3).unwrap());
        assert!(!c.ensure(4).unwrap());
    }

    #[test]
    fn skip_whitespace_to_eof() {
        let mut c = StrCursor::from_str("   ");
        c.skip_whitespace().unwrap();
        assert_eq!(c.pos(), 3);
    }
}
