use thiserror::Error;

/// The distinguishable failure reasons a parse can stop with.
///
/// Every variant corresponds to one of the messages listed in the parser's
/// error handling design: a single error kind with a human-readable message,
/// parameterized by the input and the position at which it occurred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected UTF-8 BOM; decode using utf-8-sig")]
    UnexpectedBom,

    #[error("JSON must start with '{{' or '['")]
    ExpectedRootValue,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expecting comma")]
    ExpectingComma,

    #[error("expecting property name enclosed in double quotes")]
    ExpectingPropertyName,

    #[error("expecting ':'")]
    ExpectingColon,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("expecting '}}'")]
    ExpectingObjectClose,

    #[error("expecting ']'")]
    ExpectingArrayClose,

    #[error("invalid string escape")]
    InvalidEscape,

    #[error("invalid number literal")]
    InvalidNumber,

    #[error("maximum nesting depth exceeded")]
    DepthExceeded,

    #[error("unsupported or undetectable byte encoding")]
    UnsupportedEncoding,

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ParseErrorKind {
    fn from(e: std::io::Error) -> Self {
        ParseErrorKind::Io(e.to_string())
    }
}

/// An error produced while parsing, carrying the offending byte position in
/// addition to the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (at byte {pos})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: usize) -> Self {
        ParseError { kind, pos }
    }
}
