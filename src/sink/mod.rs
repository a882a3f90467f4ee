//! Consumers of a [`JsonEvent`](crate::event::JsonEvent) stream: a tree
//! materializer and a dotted-path annotator.

pub mod path;
pub mod tree;

#[cfg(feature = "serde_json")]
pub mod serde_json;

pub use tree::{collect, JsonTree};
