use serde_json::Value as JsonValue;

/// Keys checked, in order, when a tag is stored as an object.
const TAG_NAME_KEYS: [&str; 2] = ["name", "label"];

/// Flattens a stored tech-stack value into display-ordered tag names.
///
/// Accepts an array of strings, an array of `{ "name": .. }` objects (or a mix),
/// or a single comma-separated string. Blank entries are dropped and
/// duplicates kept.
pub fn normalize_tags(value: &JsonValue) -> Vec<String> {
    match value {
        JsonValue::Array(items) => items
            .iter()
            .filter_map(tag_name)
            .collect(),
        JsonValue::String(joined) => split_tags(joined),
        JsonValue::Null => Vec::new(),
        other => {
            tracing::warn!("Unsupported tag list shape, ignoring: {}", other);
            Vec::new()
        }
    }
}

fn tag_name(item: &JsonValue) -> Option<String> {
    let raw = match item {
        JsonValue::String(s) => Some(s.as_str()),
        JsonValue::Object(map) => TAG_NAME_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(JsonValue::as_str)),
        _ => None,
    };

    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        Some(_) => None,
        None => {
            tracing::warn!("Skipping tag entry without a name: {}", item);
            None
        }
    }
}

/// Splits "Rust, Actix,  SQL" into trimmed, non-empty tags.
pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
