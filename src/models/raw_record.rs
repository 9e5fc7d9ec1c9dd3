use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Item;

/// A catalog record as it appears in the JSON resource.
///
/// Every field is kept as a loose JSON value; the normalizer is the only
/// place that inspects the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
}

fn string_array(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

impl From<&Item> for RawRecord {
    fn from(item: &Item) -> Self {
        Self {
            src: Some(Value::String(item.src().to_string())),
            date: Some(Value::String(item.date().to_string())),
            location: Some(Value::String(item.location().to_string())),
            device: Some(Value::String(item.device().to_string())),
            brand: Some(string_array(item.brand())),
            oem: Some(string_array(item.oem())),
            rarity: Some(string_array(item.rarity())),
            tags: Some(string_array(item.tags())),
        }
    }
}
