use iterjson::sink::path::annotate;
use iterjson::sink::tree::{collect, JsonTree};
use iterjson::{parse_to_tree, JsonParser, JsonValue};

/// The tree sink materializes nested objects and arrays into a single
/// owned tree.
#[test]
fn tree_sink_nested() {
    let parser = JsonParser::from_str(r#"{"a":{"b":[10,20]}}"#).unwrap();
    let tree = collect(parser).unwrap();
    match tree {
        JsonTree::Map(m) => match m.get("a") {
            Some(JsonTree::Map(inner)) => {
                assert_eq!(
                    inner.get("b"),
                    Some(&JsonTree::Array(vec![
                        JsonTree::Scalar(JsonValue::Int(10)),
                        JsonTree::Scalar(JsonValue::Int(20)),
                    ]))
                );
            }
            _ => panic!("expected nested map"),
        },
        _ => panic!("expected map"),
    }
}

/// `parse_to_tree` (the direct-to-tree convenience entry point) produces
/// the same result as parsing to events and collecting them separately.
#[test]
fn parse_to_tree_matches_collect() {
    let json = r#"{"a":1,"b":[1,2,3]}"#;
    let via_convenience = parse_to_tree(json).unwrap();
    let via_events = collect(JsonParser::from_str(json).unwrap()).unwrap();
    assert_eq!(via_convenience, via_events);
}

/// The path annotator reproduces the documented worked example: the
/// prefix at a `MapKey` event includes the key just read.
#[test]
fn path_annotator_worked_example() {
    let parser = JsonParser::from_str(r#"{"a":{"b":[10,20]}}"#).unwrap();
    let prefixes: Vec<String> = annotate(parser)
        .map(|r| r.expect("parse error").0)
        .collect();
    assert_eq!(
        prefixes,
        vec!["", "a", "a", "a.b", "a.b", "a.b.item", "a.b.item", "a.b", "a", ""]
    );
}
