//! Product attribute input model
//!
//! Upstream systems describe a product as a flat map of attribute keys to
//! values. Values are strings ("Сок яблочный"), booleans (`requires_qr`),
//! or lists of strings (`warnings`). Unknown keys are ignored by every
//! consumer, so callers may pass richer maps than the engine understands.
//!
//! Empty and whitespace-only strings count as absent. Upstream exporters
//! routinely emit `""` for fields they have no data for, and treating
//! those as present would produce labels full of blank sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A flat map of product attributes keyed by name
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A single attribute value
///
/// Deserializes untagged, so plain JSON maps work directly:
///
/// ```
/// use labelrender::{AttributeMap, AttributeValue};
///
/// let map: AttributeMap = serde_json::from_str(
///   r#"{"product_name": "Сок", "requires_qr": true, "warnings": ["Хрупкое"]}"#,
/// ).unwrap();
/// assert_eq!(map["product_name"], AttributeValue::from("Сок"));
/// assert_eq!(map["requires_qr"], AttributeValue::Bool(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
  Bool(bool),
  Str(String),
  List(Vec<String>),
}

impl From<&str> for AttributeValue {
  fn from(value: &str) -> Self {
    AttributeValue::Str(value.to_string())
  }
}

impl From<String> for AttributeValue {
  fn from(value: String) -> Self {
    AttributeValue::Str(value)
  }
}

impl From<bool> for AttributeValue {
  fn from(value: bool) -> Self {
    AttributeValue::Bool(value)
  }
}

impl From<Vec<String>> for AttributeValue {
  fn from(value: Vec<String>) -> Self {
    AttributeValue::List(value)
  }
}

/// Looks up a string attribute, treating empty strings as absent
pub fn get_str<'a>(map: &'a AttributeMap, key: &str) -> Option<&'a str> {
  match map.get(key) {
    Some(AttributeValue::Str(s)) => {
      let trimmed = s.trim();
      if trimmed.is_empty() {
        None
      } else {
        Some(trimmed)
      }
    }
    _ => None,
  }
}

/// Looks up a boolean attribute, defaulting to false
pub fn get_bool(map: &AttributeMap, key: &str) -> bool {
  matches!(map.get(key), Some(AttributeValue::Bool(true)))
}

/// Looks up a list attribute, skipping empty entries
pub fn get_list<'a>(map: &'a AttributeMap, key: &str) -> Vec<&'a str> {
  match map.get(key) {
    Some(AttributeValue::List(items)) => items
      .iter()
      .map(|s| s.trim())
      .filter(|s| !s.is_empty())
      .collect(),
    _ => Vec::new(),
  }
}

// =============================================================================
// Tests
// =============================================================================
