//! # iterjson
//!
//! A pull-style, iterative JSON parser that emits a flat stream of parse
//! events as it walks the input, instead of building a value tree up
//! front. Two input modes share one engine: an in-memory cursor over an
//! already-loaded string or byte buffer, and a buffered cursor over any
//! [`Read`](std::io::Read) source that refills a sliding window one chunk
//! at a time, so documents larger than memory can still be parsed.
//!
//! Nesting is tracked with an explicit, heap-allocated container stack
//! rather than recursion, so depth is bounded by memory, not by the host
//! call stack. A small set of lenient grammar extensions is accepted:
//! trailing commas before a closing `}`/`]`, and arbitrary bytes following
//! the root value (ignored).
//!
//! ## Examples
//!
//! ### Parsing a string and collecting events
//!
//! ```
//! use iterjson::{JsonEvent, JsonParser, JsonValue};
//!
//! let json = r#"{"name": "Elvis"}"#;
//! let parser = JsonParser::from_str(json).unwrap();
//! let events: Vec<_> = parser.map(|e| e.unwrap()).collect();
//!
//! assert_eq!(events, vec![
//!     JsonEvent::StartMap,
//!     JsonEvent::MapKey("name".to_string()),
//!     JsonEvent::Value(JsonValue::String("Elvis".to_string())),
//!     JsonEvent::EndMap,
//! ]);
//! ```
//!
//! ### Materializing a tree
//!
//! ```
//! use iterjson::JsonParser;
//! use iterjson::sink::tree::collect;
//!
//! let json = r#"{"name": "Elvis"}"#;
//! let parser = JsonParser::from_str(json).unwrap();
//! let tree = collect(parser).unwrap();
//! ```
//!
//! ### Parsing from a reader
//!
//! For sources too large to hold in memory, use [`JsonParser::from_reader`]:
//! it reads in fixed-size chunks (64 KiB by default) and handles tokens
//! that straddle a chunk boundary transparently.
//!
//! ```no_run
//! use std::fs::File;
//! use iterjson::JsonParser;
//!
//! let file = File::open("document.json").unwrap();
//! let parser = JsonParser::from_reader(file);
//! for event in parser {
//!     let _event = event.unwrap();
//! }
//! ```
//!
//! ### Parsing into a Serde JSON Value
//!
//! Enable the `serde_json` feature for interop with code that already
//! works with [`serde_json::Value`].
//!
//! ```
//! # #[cfg(feature = "serde_json")]
//! # {
//! use iterjson::JsonParser;
//! use iterjson::sink::serde_json::to_serde_value;
//!
//! let json = r#"{"name": "Elvis"}"#;
//! let parser = JsonParser::from_str(json).unwrap();
//! let value = to_serde_value(parser).unwrap();
//! assert_eq!(value["name"], "Elvis");
//! # }
//! ```

pub mod cursor;
pub mod encoding;
pub mod error;
mod event;
mod input;
pub mod lexical;
pub mod options;
mod parser;
pub mod sink;

pub use event::{JsonEvent, JsonValue};
pub use input::parse_to_tree;
pub use parser::JsonParser;
