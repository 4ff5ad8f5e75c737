//! Test Data Builders
//!
//! Builds claim submissions with sensible defaults so tests only spell out
//! the fields they care about.

use serde_json::{json, Map, Value};

/// Builder for JSON claim submissions
#[derive(Debug, Clone)]
pub struct SubmissionBuilder {
    fields: Map<String, Value>,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBuilder {
    /// Creates a builder holding a valid submission
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("fullName".to_string(), json!("Jane Doe"));
        fields.insert("email".to_string(), json!("jane@example.com"));
        fields.insert("fullAddress".to_string(), json!("1 Main St"));
        fields.insert("selectedPrizes".to_string(), json!([{ "name": "Mug" }]));
        fields.insert("totalFee".to_string(), json!(1500));
        Self { fields }
    }

    /// Sets the full name
    pub fn with_full_name(self, name: impl Into<String>) -> Self {
        self.with("fullName", Value::String(name.into()))
    }

    /// Sets the email
    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with("email", Value::String(email.into()))
    }

    /// Sets the phone
    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        self.with("phone", Value::String(phone.into()))
    }

    /// Sets the city
    pub fn with_city(self, city: impl Into<String>) -> Self {
        self.with("city", Value::String(city.into()))
    }

    /// Sets the prize names, in order
    pub fn with_prizes(self, names: &[&str]) -> Self {
        let prizes = names.iter().map(|n| json!({ "name": n })).collect();
        self.with("selectedPrizes", Value::Array(prizes))
    }

    /// Sets the fee
    pub fn with_fee(self, fee: impl Into<Value>) -> Self {
        self.with("totalFee", fee.into())
    }

    /// Sets an arbitrary field
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Removes a field entirely
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    /// Builds the JSON body
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_complete() {
        let body = SubmissionBuilder::new().build();
        for key in ["fullName", "email", "fullAddress", "selectedPrizes", "totalFee"] {
            assert!(body.get(key).is_some(), "{key} missing");
        }
    }

    #[test]
    fn test_without_removes_field() {
        let body = SubmissionBuilder::new().without("email").build();
        assert!(body.get("email").is_none());
    }

    #[test]
    fn test_with_prizes_keeps_order() {
        let body = SubmissionBuilder::new().with_prizes(&["A", "B"]).build();
        assert_eq!(body["selectedPrizes"][0]["name"], "A");
        assert_eq!(body["selectedPrizes"][1]["name"], "B");
    }
}
