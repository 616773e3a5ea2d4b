// Common validation types and traits

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating one submission. Errors are keyed by field name, so
/// a later failure for the same field overwrites the earlier message.
///
/// Serializes as the wire body: `{"result": bool, "error": {field: msg}}`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub result: bool,
    #[serde(rename = "error")]
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            result: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.result = false;
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.result
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T: ?Sized> {
    fn validate(&self, data: &T) -> ValidationResult;
}
