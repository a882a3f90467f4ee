//! Materializes an event stream into a [`serde_json::Value`] instead of
//! this crate's own [`JsonTree`](super::JsonTree), for interop with code
//! that already works with Serde JSON.
//!
//! Grounded directly on the teacher's `src/serde_json/mod.rs::from_slice`:
//! same stack-of-`(pending_key, container)` technique and the same
//! `Number::from`/`Number::from_f64` conversions, just re-based onto this
//! crate's own event stream instead of driving its own push-feeder loop.

use serde_json::{Map, Number, Value};

use crate::error::ParseError;
use crate::event::{JsonEvent, JsonValue};

fn to_serde_scalar(v: JsonValue) -> Value {
    match v {
        JsonValue::String(s) => Value::String(s),
        JsonValue::Int(i) => Value::Number(Number::from(i)),
        JsonValue::Float(f) => {
            Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
        }
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Null => Value::Null,
    }
}

/// Collect an event stream into a [`serde_json::Value`].
pub fn to_serde_value<I>(events: I) -> Result<Value, ParseError>
where
    I: IntoIterator<Item = Result<JsonEvent, ParseError>>,
{
    let mut stack: Vec<(Option<String>, Value)> = Vec::new();
    let mut current_key: Option<String> = None;
    let mut result = None;

    for event in events {
        match event? {
            JsonEvent::StartMap => {
                stack.push((current_key.take(), Value::Object(Map::new())));
            }
            JsonEvent::StartArray => {
                stack.push((current_key.take(), Value::Array(Vec::new())));
            }
            JsonEvent::MapKey(k) => current_key = Some(k),
            JsonEvent::EndMap | JsonEvent::EndArray => {
                let (key, v) = stack.pop().expect("unbalanced container close");
                if let Some((_, top)) = stack.last_mut() {
                    if let Some(m) = top.as_object_mut() {
                        m.insert(key.expect("map entry missing key"), v);
                    } else if let Some(a) = top.as_array_mut() {
                        a.push(v);
                    }
                } else {
                    result = Some(v);
                }
            }
            JsonEvent::Value(v) => {
                let value = to_serde_scalar(v);
                if let Some((_, top)) = stack.last_mut() {
                    if let Some(m) = top.as_object_mut() {
                        m.insert(current_key.take().expect("value missing key"), value);
                    } else if let Some(a) = top.as_array_mut() {
                        a.push(value);
                    }
                } else {
                    result = Some(value);
                }
            }
        }
    }

    Ok(result.expect("event stream produced no root value"))
}
