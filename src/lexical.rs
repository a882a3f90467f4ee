//! Pure scanning functions over a `&str` window: whitespace skip, quoted
//! string scan, and number matching. None of these touch I/O; callers
//! (the cursors) are responsible for deciding whether a partial match means
//! "refill and retry" or "genuinely malformed".

use crate::error::ParseErrorKind;

/// Advance `pos` past any run of JSON whitespace (space, tab, newline, CR).
/// Never fails; returns the new position.
pub fn skip_whitespace(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let mut i = pos;
    while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
        i += 1;
    }
    i
}

/// The result of attempting to scan a quoted string starting right after its
/// opening `"`.
pub enum StringScan {
    /// The string was fully scanned; `value` is the decoded content and
    /// `end` is the position right after the closing quote.
    Complete { value: String, end: usize },
    /// The closing quote was not found within the available window. The
    /// caller should refill and retry the scan from the same starting
    /// position.
    Incomplete,
    /// The string is syntactically malformed (bad escape, stray control
    /// character, or similar), not recoverable by refilling.
    Malformed(ParseErrorKind),
}

/// Scan a quoted string, assuming `pos` is the index right after the opening
/// `"`. Handles the standard JSON escapes, including `\uXXXX` surrogate
/// pairs.
pub fn scan_string(s: &str, pos: usize) -> StringScan {
    let bytes = s.as_bytes();
    let mut i = pos;
    let mut value = String::new();
    let mut pending_high_surrogate: Option<u16> = None;

    loop {
        if i >= bytes.len() {
            return StringScan::Incomplete;
        }
        let b = bytes[i];
        match b {
            b'"' => {
                if pending_high_surrogate.is_some() {
                    return StringScan::Malformed(ParseErrorKind::InvalidEscape);
                }
                return StringScan::Complete {
                    value,
                    end: i + 1,
                };
            }
            b'\\' => {
                if i + 1 >= bytes.len() {
                    return StringScan::Incomplete;
                }
                match bytes[i + 1] {
                    b'"' => {
                        value.push('"');
                        i += 2;
                    }
                    b'\\' => {
                        value.push('\\');
                        i += 2;
                    }
                    b'/' => {
                        value.push('/');
                        i += 2;
                    }
                    b'b' => {
                        value.push('\u{0008}');
                        i += 2;
                    }
                    b'f' => {
                        value.push('\u{000C}');
                        i += 2;
                    }
                    b'n' => {
                        value.push('\n');
                        i += 2;
                    }
                    b'r' => {
                        value.push('\r');
                        i += 2;
                    }
                    b't' => {
                        value.push('\t');
                        i += 2;
                    }
                    b'u' => {
                        if i + 6 > bytes.len() {
                            return StringScan::Incomplete;
                        }
                        let hex = match s.get(i + 2..i + 6) {
                            Some(h) => h,
                            None => {
                                return StringScan::Malformed(ParseErrorKind::InvalidEscape);
                            }
                        };
                        let code = match u16::from_str_radix(hex, 16) {
                            Ok(c) => c,
                            Err(_) => {
                                return StringScan::Malformed(ParseErrorKind::InvalidEscape);
                            }
                        };
                        i += 6;
                        if let Some(high) = pending_high_surrogate.take() {
                            match char::decode_utf16([high, code]).next() {
                                Some(Ok(c)) => value.push(c),
                                _ => return StringScan::Malformed(ParseErrorKind::InvalidEscape),
                            }
                        } else if (0xD800..=0xDBFF).contains(&code) {
                            pending_high_surrogate = Some(code);
                        } else if (0xDC00..=0xDFFF).contains(&code) {
                            return StringScan::Malformed(ParseErrorKind::InvalidEscape);
                        } else {
                            match char::decode_utf16([code]).next() {
                                Some(Ok(c)) => value.push(c),
                                _ => return StringScan::Malformed(ParseErrorKind::InvalidEscape),
                            }
                        }
                    }
                    _ => return StringScan::Malformed(ParseErrorKind::InvalidEscape),
                }
            }
            _ if pending_high_surrogate.is_some() => {
                return StringScan::Malformed(ParseErrorKind::InvalidEscape);
            }
            0x00..=0x1F => {
                return StringScan::Malformed(ParseErrorKind::InvalidEscape);
            }
            _ => {
                // Advance by one full UTF-8 scalar, not one byte.
                let ch_len = utf8_char_len(b);
                if i + ch_len > bytes.len() {
                    return StringScan::Incomplete;
                }
                match s.get(i..i + ch_len) {
                    Some(chunk) => {
                        value.push_str(chunk);
                        i += ch_len;
                    }
                    None => return StringScan::Malformed(ParseErrorKind::InvalidEscape),
                }
            }
        }
    }
}

fn utf8_char_len(first_byte: u8) -> usize {
    if first_byte & 0x80 == 0 {
        1
    } else if first_byte & 0xE0 == 0xC0 {
        2
    } else if first_byte & 0xF0 == 0xE0 {
        3
    } else {
        4
    }
}

/// The result of attempting to match a JSON number literal.
pub enum NumberMatch {
    /// Matched `text` (available as `&s[pos..end]`), `end` is the
    /// position right after the last matched byte. `is_float` indicates
    /// whether the literal contains `.`, `e`, or `E`.
    Complete { end: usize, is_float: bool },
    /// No number grammar matched at all at `pos` (not even a leading `-` or
    /// digit), this is not a number.
    NoMatch,
    /// A number grammar prefix matched but the scan reached the end of the
    /// available window at a point where more digits could legally follow
    /// (right after a sign, a digit run, the decimal point, or an exponent
    /// sign). The caller should refill and retry from `pos` unless the
    /// source is at EOF, in which case the match should be finalized with
    /// what's available.
    Incomplete,
}

/// Attempt to match the JSON number grammar
/// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][-+]?[0-9]+)?` starting at `pos`.
///
/// `at_eof` tells the scanner whether `s` is known to hold all remaining
/// input; when `true`, a scan that would otherwise report [`NumberMatch::Incomplete`]
/// is instead finalized as [`NumberMatch::Complete`] (or [`NumberMatch::NoMatch`]
/// if nothing valid was matched at all).
pub fn match_number(s: &str, pos: usize, at_eof: bool) -> NumberMatch {
    let bytes = s.as_bytes();
    let mut i = pos;
    let len = bytes.len();

    macro_rules! need_more {
        () => {
            if at_eof {
                // fall through to finalize with what's matched so far
            } else {
                return NumberMatch::Incomplete;
            }
        };
    }

    if i >= len {
        if at_eof {
            return NumberMatch::NoMatch;
        }
        return NumberMatch::Incomplete;
    }
    if bytes[i] == b'-' {
        i += 1;
        if i >= len {
            need_more!();
            return NumberMatch::NoMatch;
        }
    }
    if i >= len || !bytes[i].is_ascii_digit() {
        return NumberMatch::NoMatch;
    }
    if bytes[i] == b'0' {
        i += 1;
    } else {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    let mut is_float = false;

    if i >= len {
        need_more!();
    }

    if i < len && bytes[i] == b'.' {
        let dot_pos = i;
        i += 1;
        if i >= len {
            if at_eof {
                // trailing '.' with no digits is not valid; back out
                return finalize_int(pos, dot_pos);
            }
            return NumberMatch::Incomplete;
        }
        if !bytes[i].is_ascii_digit() {
            // '.' not followed by a digit: not part of the number
            return finalize_int(pos, dot_pos);
        }
        is_float = true;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i >= len {
            need_more!();
        }
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let exp_start = i;
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j >= len {
            if at_eof {
                return NumberMatch::Complete {
                    end: exp_start,
                    is_float,
                };
            }
            return NumberMatch::Incomplete;
        }
        if !bytes[j].is_ascii_digit() {
            return NumberMatch::Complete {
                end: exp_start,
                is_float,
            };
        }
        is_float = true;
        i = j;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i >= len {
            need_more!();
        }
    }

    NumberMatch::Complete { end: i, is_float }
}

fn finalize_int(_start: usize, end: usize) -> NumberMatch {
    NumberMatch::Complete {
        end,
        is_float: false,
    }
}
