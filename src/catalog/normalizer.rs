//! Coerces loosely-shaped catalog records into canonical [`Item`]s.
//!
//! This is the only module that looks at the raw JSON shape of a record.
//! Missing or oddly-typed fields never fail: they degrade to empty strings
//! or empty lists and the renderer decides how to present them.

use serde_json::Value;
use tracing::trace;

use crate::models::item::ItemParts;
use crate::models::{Item, ItemId, RawRecord};

/// Normalizes one raw record. `id` is the record's position in load order.
pub fn normalize(id: ItemId, raw: &RawRecord) -> Item {
    let parts = ItemParts {
        src: scalar_field(raw.src.as_ref()),
        date: scalar_field(raw.date.as_ref()),
        location: scalar_field(raw.location.as_ref()),
        device: scalar_field(raw.device.as_ref()),
        brand: list_field(raw.brand.as_ref()),
        oem: list_field(raw.oem.as_ref()),
        rarity: list_field(raw.rarity.as_ref()),
        tags: tag_field(raw.tags.as_ref()),
    };

    if parts.src.is_empty() {
        trace!(%id, "Record has no image source");
    }

    Item::from_parts(id, parts)
}

fn scalar_field(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_default()
}

/// Text of a JSON scalar, trimmed. Arrays and objects have no scalar text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Set-like list coercion used for brand, oem and rarity.
///
/// - array: each element trimmed
/// - string: split on commas and trimmed
/// - other scalar: single element
/// - null/absent/object: empty
///
/// Empty entries are dropped and duplicates removed, keeping first occurrence.
fn list_field(value: Option<&Value>) -> Vec<String> {
    let entries: Vec<String> = match value {
        Some(Value::Array(values)) => values.iter().filter_map(scalar_text).collect(),
        Some(Value::String(s)) => s.split(',').map(|part| part.trim().to_string()).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    };

    let mut out: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_empty() && !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

/// Tags are free text: never split, duplicates kept.
fn tag_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(scalar_text)
            .filter(|tag| !tag.is_empty())
            .collect(),
        Some(other) => scalar_text(other)
            .filter(|tag| !tag.is_empty())
            .into_iter()
            .collect(),
        None => Vec::new(),
    }
}
