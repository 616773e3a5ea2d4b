// src/forms/service.rs

use tracing::debug;

use super::models::FormField;
use super::validators::validator_for;
use crate::common::{ValidationResult, Validator};

/// Validates a contact-form submission field by field.
///
/// Every field is checked regardless of earlier failures; a failing field
/// records `"Invalid <name>"` under its name, overwriting any earlier entry
/// for the same name. Fields without a registered validator are skipped.
pub struct ContactFormValidator;

impl Validator<[FormField]> for ContactFormValidator {
    fn validate(&self, data: &[FormField]) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field in data {
            if let Some(validator) = validator_for(&field.name) {
                if !validator(&field.value) {
                    result.add_error(&field.name, &format!("Invalid {}", field.name));
                }
            }
        }

        debug!(
            fields = data.len(),
            valid = result.is_valid(),
            "form submission validated"
        );

        result
    }
}
