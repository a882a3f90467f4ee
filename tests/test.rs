use iterjson::error::ParseErrorKind;
use iterjson::{JsonEvent, JsonParser, JsonValue};

fn events(json: &str) -> Vec<JsonEvent> {
    JsonParser::from_str(json)
        .unwrap()
        .map(|e| e.expect("parse error"))
        .collect()
}

/// Well-formed documents produce a balanced event stream.
#[test]
fn simple_object() {
    assert_eq!(
        events(r#"{"name": "Elvis", "age": 42}"#),
        vec![
            JsonEvent::StartMap,
            JsonEvent::MapKey("name".to_string()),
            JsonEvent::Value(JsonValue::String("Elvis".to_string())),
            JsonEvent::MapKey("age".to_string()),
            JsonEvent::Value(JsonValue::Int(42)),
            JsonEvent::EndMap,
        ]
    );
}

/// Whitespace-only input produces no events and no error, matching the
/// decided-consistent behavior across the in-memory and buffered variants.
#[test]
fn whitespace_only_input() {
    assert_eq!(events("   \n\t  "), vec![]);
}

/// An unterminated object fails with "unexpected end of input".
#[test]
fn unterminated_input_errors() {
    let results: Vec<_> = JsonParser::from_str(r#"{"a":"#).unwrap().collect();
    assert!(results.last().unwrap().is_err());
}

/// A malformed key (missing quotes) fails with a property-name error.
#[test]
fn missing_quotes_on_key_errors() {
    let results: Vec<_> = JsonParser::from_str(r#"{a:1}"#).unwrap().collect();
    assert!(results.last().unwrap().is_err());
}

/// A bare scalar at the root is rejected: the grammar requires the root
/// value to be an object or array.
#[test]
fn bare_scalar_root_rejected() {
    let results: Vec<_> = JsonParser::from_str("42").unwrap().collect();
    let err = results[0].as_ref().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedRootValue);
}

/// Reject a decoded string carrying a byte-order mark.
#[test]
fn bom_on_decoded_string_rejected() {
    assert!(JsonParser::from_str("\u{FEFF}{}").is_err());
}
