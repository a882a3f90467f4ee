/// A scalar JSON value, decoded at parse time.
///
/// Numbers are converted immediately rather than kept in textual form:
/// a literal containing `.`, `e`, or `E` becomes [`JsonValue::Float`],
/// everything else becomes [`JsonValue::Int`] (widening to `f64` if it
/// doesn't fit in `i64`, see `DESIGN.md`).
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// One step of the flat event stream a parser yields while walking a JSON
/// document.
///
/// The stream always begins with [`JsonEvent::StartMap`] or
/// [`JsonEvent::StartArray`], brackets are balanced, and a [`JsonEvent::MapKey`]
/// only ever appears as the immediate child of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonEvent {
    StartMap,
    EndMap,
    StartArray,
    EndArray,
    /// The key of the next key/value pair inside the object currently being
    /// parsed.
    MapKey(String),
    /// A scalar value appearing either as an array element or as the value
    /// half of an object's key/value pair.
    Value(JsonValue),
}
