//! Prize selections
//!
//! The store treats a selection as an opaque JSON value. Its shape is checked
//! once, when a submission is validated: a list of objects that each carry a
//! non-empty `name`. Any other keys the client sends ride along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClaimError;

const FIELD: &str = "selectedPrizes";

/// A single prize record as sent by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Prize {
    attributes: Map<String, Value>,
}

impl Prize {
    /// Creates a prize carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::String(name.into()));
        Self { attributes }
    }

    /// Adds an extra attribute (e.g. `value`, `image`)
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "name" {
            self.attributes.insert(key, value.into());
        }
        self
    }

    /// Returns the prize name
    pub fn name(&self) -> &str {
        self.attributes
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns every attribute, including the name
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl TryFrom<Value> for Prize {
    type Error = ClaimError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(attributes) = value else {
            return Err(ClaimError::invalid(FIELD, "each prize must be an object"));
        };

        match attributes.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Ok(Self { attributes }),
            _ => Err(ClaimError::invalid(FIELD, "each prize needs a non-empty name")),
        }
    }
}

impl From<Prize> for Value {
    fn from(prize: Prize) -> Value {
        Value::Object(prize.attributes)
    }
}

/// Ordered list of prizes picked by the winner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeSelection(Vec<Prize>);

impl PrizeSelection {
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self(prizes)
    }

    /// Validates a raw JSON value received from a client
    pub fn from_json(value: Value) -> Result<Self, ClaimError> {
        let Value::Array(items) = value else {
            return Err(ClaimError::invalid(FIELD, "must be a list of prizes"));
        };

        items
            .into_iter()
            .map(Prize::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Converts back to the JSON value handed to the store
    pub fn to_json(&self) -> Value {
        Value::Array(self.0.iter().cloned().map(Value::from).collect())
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.0
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Prize::name).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extracts prize names from a stored selection without enforcing its shape
///
/// Rows written before validation existed may hold anything; entries without
/// a usable name are skipped.
pub fn stored_prize_names(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
                Value::String(name) => Some(name.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_attributes_are_kept_verbatim() {
        let raw = json!([{ "name": "Mug", "value": 2500, "image": "mug.png" }]);
        let selection = PrizeSelection::from_json(raw.clone()).unwrap();

        assert_eq!(selection.to_json(), raw);
        assert_eq!(selection.names(), vec!["Mug"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let raw = json!([{ "name": "Hat" }, { "name": "Mug" }, { "name": "Bag" }]);
        let selection = PrizeSelection::from_json(raw).unwrap();
        assert_eq!(selection.names(), vec!["Hat", "Mug", "Bag"]);
    }

    #[test]
    fn test_rejects_non_list() {
        let err = PrizeSelection::from_json(json!({ "name": "Mug" })).unwrap_err();
        assert_eq!(err.fields(), vec!["selectedPrizes"]);
    }

    #[test]
    fn test_rejects_prize_without_name() {
        assert!(PrizeSelection::from_json(json!([{ "value": 10 }])).is_err());
        assert!(PrizeSelection::from_json(json!([{ "name": "  " }])).is_err());
        assert!(PrizeSelection::from_json(json!(["Mug"])).is_err());
    }

    #[test]
    fn test_empty_list_is_accepted() {
        let selection = PrizeSelection::from_json(json!([])).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_stored_names_are_lenient() {
        let stored = json!([{ "name": "Mug" }, "Hat", 42, { "title": "x" }]);
        assert_eq!(stored_prize_names(&stored), vec!["Mug", "Hat"]);
        assert!(stored_prize_names(&json!("oops")).is_empty());
    }

    #[test]
    fn test_builder_never_overwrites_name() {
        let prize = Prize::named("Mug").with_attribute("name", "Other");
        assert_eq!(prize.name(), "Mug");
    }
}
