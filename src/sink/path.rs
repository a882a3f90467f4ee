//! Annotates each event with a dotted, JSON-pointer-like path describing
//! its location in the document. Array elements use the fixed segment
//! `"item"` rather than a numeric index.
//!
//! Grounded on the original's `parse_base`, with one deliberate deviation:
//! see `DESIGN.md` for why the `MapKey` prefix here is computed *after*
//! the key replaces its placeholder segment, matching the documented
//! worked example rather than a literal port of that function.

use crate::error::ParseError;
use crate::event::JsonEvent;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Key(String),
    Placeholder,
    Item,
}

impl Segment {
    fn as_str(&self) -> &str {
        match self {
            Segment::Key(k) => k,
            Segment::Placeholder => "",
            Segment::Item => "item",
        }
    }
}

fn join(path: &[Segment]) -> String {
    path.iter()
        .map(Segment::as_str)
        .collect::<Vec<_>>()
        .join(".")
}

/// Annotate an event stream with dotted path prefixes, yielding
/// `(prefix, event)` pairs lazily.
pub fn annotate<I>(events: I) -> impl Iterator<Item = Result<(String, JsonEvent), ParseError>>
where
    I: IntoIterator<Item = Result<JsonEvent, ParseError>>,
{
    let mut path: Vec<Segment> = Vec::new();
    events.into_iter().map(move |event| {
        let event = event?;
        let prefix = match &event {
            JsonEvent::StartMap => {
                let p = join(&path);
                path.push(Segment::Placeholder);
                p
            }
            JsonEvent::StartArray => {
                let p = join(&path);
                path.push(Segment::Item);
                p
            }
            JsonEvent::MapKey(k) => {
                if let Some(last) = path.last_mut() {
                    *last = Segment::Key(k.clone());
                }
                join(&path)
            }
            JsonEvent::EndMap | JsonEvent::EndArray => {
                path.pop();
                join(&path)
            }
            JsonEvent::Value(_) => join(&path),
        };
        Ok((prefix, event))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::parser::JsonParser;

    #[test]
    fn worked_example() {
        let parser = JsonParser::new(StrCursor::from_str(r#"{"a":{"b":[10,20]}}"#));
        let prefixes: Vec<(String, JsonEvent)> = annotate(parser)
            .map(|r| r.expect("parse error"))
            .collect();

        let expected_prefixes = vec![
            "", "a", "a", "a.b", "a.b", "a.b.item", "a.b.item", "a.b", "a", "",
        ];
        let actual: Vec<&str> = prefixes.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(actual, expected_prefixes);
    }
}
