use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::event::{JsonEvent, JsonValue};
use crate::options::JsonParserOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Object,
    Array,
}

struct Frame {
    kind: FrameKind,
    first: bool,
}

/// An iterative, pull-style JSON parser generic over any [`Cursor`]
/// implementation.
///
/// Nesting is tracked with an explicit heap-allocated stack of [`Frame`]s
/// rather than recursion, so depth is bounded by `options.max_depth()` and
/// available memory, never by the host call stack.
///
/// Implements [`Iterator`]: each call to `next()` advances the parse by
/// exactly one [`JsonEvent`], or returns `None` once the document (and any
/// trailing input, which is ignored) has been fully consumed.
pub struct JsonParser<C: Cursor> {
    cursor: C,
    options: JsonParserOptions,
    stack: Vec<Frame>,
    awaiting_value: bool,
    started: bool,
    finished: bool,
}

impl<C: Cursor> JsonParser<C> {
    /// Create a new parser over the given cursor with default options.
    pub fn new(cursor: C) -> Self {
        Self::new_with_options(cursor, JsonParserOptions::default())
    }

    /// Create a new parser over the given cursor with explicit options.
    pub fn new_with_options(cursor: C, options: JsonParserOptions) -> Self {
        JsonParser {
            cursor,
            options,
            stack: Vec::new(),
            awaiting_value: false,
            started: false,
            finished: false,
        }
    }

    fn err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.absolute_pos())
    }

    /// Skip whitespace and return the next byte, failing with
    /// `UnexpectedEof` if the input ends here.
    fn require_byte(&mut self) -> Result<u8, ParseError> {
        self.cursor.skip_whitespace().map_err(|k| self.err(k))?;
        match self.cursor.peek_byte() {
            Some(b) => Ok(b),
            None => Err(self.err(ParseErrorKind::UnexpectedEof)),
        }
    }

    fn match_keyword(&mut self, kw: &str, value: JsonValue) -> Result<JsonEvent, ParseError> {
        let n = kw.len();
        let ok = self.cursor.ensure(n).map_err(|k| self.err(k))?;
        if !ok {
            return Err(self.err(ParseErrorKind::UnexpectedEof));
        }
        let start = self.cursor.pos();
        let matches = &self.cursor.window().as_bytes()[start..start + n] == kw.as_bytes();
        if matches {
            self.cursor.advance(n);
            Ok(JsonEvent::Value(value))
        } else {
            let bad = self.cursor.window()[start..].chars().next().unwrap_or('\0');
            Err(self.err(ParseErrorKind::UnexpectedCharacter(bad)))
        }
    }

    /// Parse a single scalar value or container opener at the current
    /// position, dispatching on the first byte per the JSON value grammar.
    fn parse_value(&mut self) -> Result<JsonEvent, ParseError> {
        let b = self.require_byte()?;
        match b {
            b'"' => {
                self.cursor.advance(1);
                let s = self.cursor.scan_string().map_err(|k| self.err(k))?;
                Ok(JsonEvent::Value(JsonValue::String(s)))
            }
            b'{' => {
                self.push_frame(FrameKind::Object)?;
                self.cursor.advance(1);
                Ok(JsonEvent::StartMap)
            }
            b'[' => {
                self.push_frame(FrameKind::Array)?;
                self.cursor.advance(1);
                Ok(JsonEvent::StartArray)
            }
            b't' => self.match_keyword("true", JsonValue::Bool(true)),
            b'f' => self.match_keyword("false", JsonValue::Bool(false)),
            b'n' => self.match_keyword("null", JsonValue::Null),
            b'-' | b'0'..=b'9' => {
                let (text, is_float) = self.cursor.match_number().map_err(|k| self.err(k))?;
                let value = if is_float {
                    JsonValue::Float(
                        text.parse::<f64>()
                            .map_err(|_| self.err(ParseErrorKind::InvalidNumber))?,
                    )
                } else {
                    match btoi::btoi::<i64>(text.as_bytes()) {
                        Ok(i) => JsonValue::Int(i),
                        Err(_) => JsonValue::Float(
                            text.parse::<f64>()
                                .map_err(|_| self.err(ParseErrorKind::InvalidNumber))?,
                        ),
                    }
                };
                Ok(JsonEvent::Value(value))
            }
            _ => {
                let pos = self.cursor.pos();
                let bad = self.cursor.window()[pos..].chars().next().unwrap_or('\0');
                Err(self.err(ParseErrorKind::UnexpectedCharacter(bad)))
            }
        }
    }

    fn push_frame(&mut self, kind: FrameKind) -> Result<(), ParseError> {
        if self.stack.len() >= self.options.max_depth() {
            return Err(self.err(ParseErrorKind::DepthExceeded));
        }
        self.stack.push(Frame { kind, first: true });
        Ok(())
    }

    fn closing_delim(kind: FrameKind) -> u8 {
        match kind {
            FrameKind::Object => b'}',
            FrameKind::Array => b']',
        }
    }

    /// If `b` is a closing delimiter but not the one `kind` expects (e.g. a
    /// `]` appearing where an object's `}` is due), the specific mismatched-
    /// closer error to report.
    fn wrong_closer(b: u8, kind: FrameKind) -> Option<ParseErrorKind> {
        match b {
            b'}' if kind != FrameKind::Object => Some(ParseErrorKind::ExpectingArrayClose),
            b']' if kind != FrameKind::Array => Some(ParseErrorKind::ExpectingObjectClose),
            _ => None,
        }
    }

    /// Handle the "is this the first element, or do we need a comma"
    /// bookkeeping for the current frame. Consumes a comma if present
    /// (including a trailing comma right before the close, which the
    /// caller detects by re-inspecting after this returns).
    fn handle_separator(&mut self) -> Result<(), ParseError> {
        let first = self.stack.last().expect("frame present").first;
        if first {
            self.stack.last_mut().unwrap().first = false;
            return Ok(());
        }
        let b = self.require_byte()?;
        if b != b',' {
            return Err(self.err(ParseErrorKind::ExpectingComma));
        }
        self.cursor.advance(1);
        Ok(())
    }

    fn start_root(&mut self) -> Option<Result<JsonEvent, ParseError>> {
        self.started = true;
        if let Err(k) = self.cursor.skip_whitespace() {
            return Some(Err(self.err(k)));
        }
        match self.cursor.peek_byte() {
            None => {
                self.finished = true;
                None
            }
            Some(b'{') => {
                self.cursor.advance(1);
                self.stack.push(Frame {
                    kind: FrameKind::Object,
                    first: true,
                });
                Some(Ok(JsonEvent::StartMap))
            }
            Some(b'[') => {
                self.cursor.advance(1);
                self.stack.push(Frame {
                    kind: FrameKind::Array,
                    first: true,
                });
                Some(Ok(JsonEvent::StartArray))
            }
            Some(_) => Some(Err(self.err(ParseErrorKind::ExpectedRootValue))),
        }
    }

    fn continue_value_after_key(&mut self) -> Result<JsonEvent, ParseError> {
        self.awaiting_value = false;
        let b = self.require_byte()?;
        if b != b':' {
            return Err(self.err(ParseErrorKind::ExpectingColon));
        }
        self.cursor.advance(1);
        self.parse_value()
    }

    /// Advance one step within the current top-of-stack frame: either
    /// close it, or consume the separator and parse the next key/value.
    fn step(&mut self) -> Result<JsonEvent, ParseError> {
        loop {
            let kind = self.stack.last().unwrap().kind;
            let b = self.require_byte()?;
            if b == Self::closing_delim(kind) {
                self.cursor.advance(1);
                self.stack.pop();
                return Ok(match kind {
                    FrameKind::Object => JsonEvent::EndMap,
                    FrameKind::Array => JsonEvent::EndArray,
                });
            }
            if let Some(mismatch) = Self::wrong_closer(b, kind) {
                return Err(self.err(mismatch));
            }

            self.handle_separator()?;

            // After consuming a (possibly trailing) comma, re-check for a
            // close before committing to parsing a key/value: this is how
            // trailing commas are accepted.
            let b2 = self.require_byte()?;
            if b2 == Self::closing_delim(kind) {
                continue;
            }
            if let Some(mismatch) = Self::wrong_closer(b2, kind) {
                return Err(self.err(mismatch));
            }

            return match kind {
                FrameKind::Object => {
                    if b2 != b'"' {
                        return Err(self.err(ParseErrorKind::ExpectingPropertyName));
                    }
                    self.cursor.advance(1);
                    let key = self.cursor.scan_string().map_err(|k| self.err(k))?;
                    self.awaiting_value = true;
                    Ok(JsonEvent::MapKey(key))
                }
                FrameKind::Array => self.parse_value(),
            };
        }
    }
}

impl<C: Cursor> Iterator for JsonParser<C> {
    type Item = Result<JsonEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            return self.start_root();
        }
        if self.awaiting_value {
            let r = self.continue_value_after_key();
            if r.is_err() {
                self.finished = true;
            }
            return Some(r);
        }
        if self.stack.is_empty() {
            self.finished = true;
            return None;
        }
        let r = self.step();
        if r.is_err() {
            self.finished = true;
        }
        Some(r)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::StrCursor;

    fn events(json: &str) -> Vec<JsonEvent> {
        let parser = JsonParser::new(StrCursor::from_str(json));
        parser.map(|e| e.expect("parse error")).collect()
    }

    #[test]
    fn empty_object() {
        assert_eq!(events("{}"), vec![JsonEvent::StartMap, JsonEvent::EndMap]);
    }

    #[test]
    fn empty_array() {
        assert_eq!(
            events("[]"),
            vec![JsonEvent::StartArray, JsonEvent::EndArray]
        );
    }

    #[test]
    fn empty_input_yields_no_events() {
        assert_eq!(events(""), vec![]);
        assert_eq!(events("   \n\t"), vec![]);
    }

    #[test]
    fn trailing_comma_object() {
        assert_eq!(
            events(r#"{"a":1,}"#),
            vec![
                JsonEvent::StartMap,
                JsonEvent::MapKey("a".to_string()),
                JsonEvent::Value(JsonValue::Int(1)),
                JsonEvent::EndMap,
            ]
        );
    }

    #[test]
    fn trailing_comma_array() {
        assert_eq!(
            events("[1,2,]"),
            vec![
                JsonEvent::StartArray,
                JsonEvent::Value(JsonValue::Int(1)),
                JsonEvent::Value(JsonValue::Int(2)),
                JsonEvent::EndArray,
            ]
        );
    }

    #[test]
    fn trailing_garbage_ignored() {
        let parser = JsonParser::new(StrCursor::from_str(r#"{"a":1}trailing garbage"#));
        let collected: Vec<_> = parser.map(|e| e.expect("parse error")).collect();
        assert_eq!(
            collected,
            vec![
                JsonEvent::StartMap,
                JsonEvent::MapKey("a".to_string()),
                JsonEvent::Value(JsonValue::Int(1)),
                JsonEvent::EndMap,
            ]
        );
    }

    #[test]
    fn unterminated_object_errors() {
        let parser = JsonParser::new(StrCursor::from_str(r#"{"a":"#));
        let results: Vec<_> = parser.collect();
        assert!(results.last().unwrap().is_err());
    }

    #[test]
    fn nested_and_mixed() {
        assert_eq!(
            events(r#"{"a":1,"b":[true,null,"x"]}"#),
            vec![
                JsonEvent::StartMap,
                JsonEvent::MapKey("a".to_string()),
                JsonEvent::Value(JsonValue::Int(1)),
                JsonEvent::MapKey("b".to_string()),
                JsonEvent::StartArray,
                JsonEvent::Value(JsonValue::Bool(true)),
                JsonEvent::Value(JsonValue::Null),
                JsonEvent::Value(JsonValue::String("x".to_string())),
                JsonEvent::EndArray,
                JsonEvent::EndMap,
            ]
        );
    }

    #[test]
    fn numbers_int_and_float() {
        assert_eq!(
            events("[1.5e2, -0, 42]"),
            vec![
                JsonEvent::StartArray,
                JsonEvent::Value(JsonValue::Float(150.0)),
                JsonEvent::Value(JsonValue::Int(0)),
                JsonEvent::Value(JsonValue::Int(42)),
                JsonEvent::EndArray,
            ]
        );
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            events(r#"{"k":"a\"b\\c\nd"}"#),
            vec![
                JsonEvent::StartMap,
                JsonEvent::MapKey("k".to_string()),
                JsonEvent::Value(JsonValue::String("a\"b\\c\nd".to_string())),
                JsonEvent::EndMap,
            ]
        );
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let depth = 10_000;
        let mut json = String::new();
        for _ in 0..depth {
            json.push('[');
        }
        for _ in 0..depth {
            json.push(']');
        }
        let parser = JsonParser::new_with_options(
            StrCursor::from_str(&json),
            crate::options::JsonParserOptionsBuilder::default()
                .with_max_depth(depth + 1)
                .build(),
        );
        let count = parser.filter(|e| e.is_ok()).count();
        assert_eq!(count, depth * 2);
    }

    #[test]
    fn max_depth_enforced() {
        let json = "[[[[[1]]]]]";
        let parser = JsonParser::new_with_options(
            StrCursor::from_str(json),
            crate::options::JsonParserOptionsBuilder::default()
                .with_max_depth(2)
                .build(),
        );
        let results: Vec<_> = parser.collect();
        assert!(matches!(
            results.last().unwrap(),
            Err(ParseError {
                kind: ParseErrorKind::DepthExceeded,
                ..
            })
        ));
    }

    #[test]
    fn mismatched_array_close_on_object() {
        let parser = JsonParser::new(StrCursor::from_str(r#"{"a":1]"#));
        let results: Vec<_> = parser.collect();
        assert!(matches!(
            results.last().unwrap(),
            Err(ParseError {
                kind: ParseErrorKind::ExpectingObjectClose,
                ..
            })
        ));
    }

    #[test]
    fn mismatched_object_close_on_array() {
        let parser = JsonParser::new(StrCursor::from_str("[1,2}"));
        let results: Vec<_> = parser.collect();
        assert!(matches!(
            results.last().unwrap(),
            Err(ParseError {
                kind: ParseErrorKind::ExpectingArrayClose,
                ..
            })
        ));
    }

    #[test]
    fn keyword_mismatch_with_trailing_multibyte_char_does_not_panic() {
        // '€' is 3 bytes (E2 82 AC); "nx€" after "n" makes start+4 land
        // inside it, which must not panic when comparing against "null".
        let parser = JsonParser::new(StrCursor::from_str("[nx\u{20AC}]"));
        let results: Vec<_> = parser.collect();
        assert!(matches!(
            results.last().unwrap(),
            Err(ParseError {
                kind: ParseErrorKind::UnexpectedCharacter(_),
                ..
            })
        ));
    }
}
