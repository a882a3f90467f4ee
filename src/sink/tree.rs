//! Materializes an event stream into a single, fully-owned value tree.
//!
//! Grounded on the stack-of-`(container, pending_key)` technique used by
//! both the teacher's `serde_json::from_slice` and the original's
//! `events_to_object`: every container push/pop carries its own pending-key
//! slot, so a value or nested container is routed to the right place (an
//! object's last-seen key, or the next array slot) without extra state.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::event::{JsonEvent, JsonValue};

/// A fully materialized JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonTree {
    Map(BTreeMap<String, JsonTree>),
    Array(Vec<JsonTree>),
    Scalar(JsonValue),
}

enum Frame {
    Map(BTreeMap<String, JsonTree>, Option<String>),
    Array(Vec<JsonTree>),
}

/// Collect an event stream into a [`JsonTree`].
pub fn collect<I>(events: I) -> Result<JsonTree, ParseError>
where
    I: IntoIterator<Item = Result<JsonEvent, ParseError>>,
{
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<JsonTree> = None;

    fn insert(stack: &mut [Frame], value: JsonTree) {
        match stack.last_mut() {
            Some(Frame::Map(map, key)) => {
                let k = key.take().expect("map frame missing pending key");
                map.insert(k, value);
            }
            Some(Frame::Array(arr)) => arr.push(value),
            None => unreachable!("insert called with no enclosing frame"),
        }
    }

    for event in events {
        match event? {
            JsonEvent::StartMap => stack.push(Frame::Map(BTreeMap::new(), None)),
            JsonEvent::StartArray => stack.push(Frame::Array(Vec::new())),
            JsonEvent::MapKey(k) => match stack.last_mut() {
                Some(Frame::Map(_, key)) => *key = Some(k),
                _ => unreachable!("MapKey event outside a map frame"),
            },
            JsonEvent::EndMap => {
                let frame = stack.pop().expect("EndMap with no open frame");
                let tree = match frame {
                    Frame::Map(map, _) => JsonTree::Map(map),
                    Frame::Array(_) => unreachable!("EndMap closing an array frame"),
                };
                if stack.is_empty() {
                    root = Some(tree);
                } else {
                    insert(&mut stack, tree);
                }
            }
            JsonEvent::EndArray => {
                let frame = stack.pop().expect("EndArray with no open frame");
                let tree = match frame {
                    Frame::Array(arr) => JsonTree::Array(arr),
                    Frame::Map(_, _) => unreachable!("EndArray closing a map frame"),
                };
                if stack.is_empty() {
                    root = Some(tree);
                } else {
                    insert(&mut stack, tree);
                }
            }
            JsonEvent::Value(v) => insert(&mut stack, JsonTree::Scalar(v)),
        }
    }

    Ok(root.expect("event stream produced no root value"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::parser::JsonParser;

    fn parse_to_tree(json: &str) -> JsonTree {
        let parser = JsonParser::new(StrCursor::from_str(json));
        collect(parser).expect("parse error")
    }

    #[test]
    fn simple_object() {
        let tree = parse_to_tree(r#"{"a":1,"b":[true,null,"x"]}"#);
        match tree {
            JsonTree::Map(m) => {
                assert_eq!(m.get("a"), Some(&JsonTree::Scalar(JsonValue::Int(1))));
                assert_eq!(
                    m.get("b"),
                    Some(&JsonTree::Array(vec![
                        JsonTree::Scalar(JsonValue::Bool(true)),
                        JsonTree::Scalar(JsonValue::Null),
                        JsonTree::Scalar(JsonValue::String("x".to_string())),
                    ]))
                );
            }
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn nested_objects_and_arrays() {
        let tree = parse_to_tree(r#"{"a":{"b":[10,20]}}"#);
        if let JsonTree::Map(outer) = tree {
            if let Some(JsonTree::Map(inner)) = outer.get("a") {
                assert_eq!(
                    inner.get("b"),
                    Some(&JsonTree::Array(vec![
                        JsonTree::Scalar(JsonValue::Int(10)),
                        JsonTree::Scalar(JsonValue::Int(20)),
                    ]))
                );
                return;
            }
        }
        panic!("unexpected tree shape");
    }

    #[test]
    fn idempotent() {
        let json = r#"{"a":1,"b":[1,2,3]}"#;
        assert_eq!(parse_to_tree(json), parse_to_tree(json));
    }
}
