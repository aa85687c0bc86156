use serde_json::{Map, Value};

use crate::fields::Record;

/// Reduces `record` to its identifier plus the requested fields it actually has.
///
/// An empty `fields` list returns the full record. Requested names the record
/// kind does not define are skipped silently.
pub fn project<R: Record>(record: &R, fields: &[String]) -> Value {
    if fields.is_empty() {
        return full(record);
    }

    let mut out = Map::new();
    out.insert(R::ID_FIELD.to_string(), Value::String(record.id().to_string()));
    for name in fields {
        if let Some(value) = record.field(name) {
            out.insert(name.clone(), value);
        }
    }
    Value::Object(out)
}

fn full<R: Record>(record: &R) -> Value {
    let out: Map<String, Value> = R::FIELDS
        .iter()
        .filter_map(|name| record.field(name).map(|v| (name.to_string(), v)))
        .collect();
    Value::Object(out)
}
