// src/forms/validators.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::phone_patterns::PHONE_PATTERN_SET;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

// Anything shaped like an opening or closing HTML tag.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

/// Signature shared by all field validators.
pub type FieldValidator = fn(&str) -> bool;

/// Registry mapping recognized field names to their validators. Field names
/// without an entry are skipped by the validation service.
pub const FIELD_VALIDATORS: &[(&str, FieldValidator)] = &[
    ("name", validate_name),
    ("phone", validate_phone),
    ("email", validate_email),
    ("comment", validate_comment),
];

/// Look up the validator registered for a field name.
pub fn validator_for(field: &str) -> Option<FieldValidator> {
    FIELD_VALIDATORS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, validator)| *validator)
}

// ============================================================================
// Field Validators
// ============================================================================

/// Mandatory. Letters and whitespace only, 1-63 bytes after trimming.
pub fn validate_name(value: &str) -> bool {
    let name = value.trim();
    !name.is_empty() && name.len() < 64 && NAME_REGEX.is_match(name)
}

/// Mandatory. Must match one cataloged international template exactly,
/// e.g. `+380(67)123-45-67`. The raw value is not normalized or trimmed.
pub fn validate_phone(value: &str) -> bool {
    PHONE_PATTERN_SET.is_match(value)
}

/// Optional. When present, must look like `local@domain.tld`.
pub fn validate_email(value: &str) -> bool {
    let email = value.trim();
    email.is_empty() || EMAIL_REGEX.is_match(email)
}

/// Optional. When present, stripping markup tags must leave the value
/// unchanged and the trimmed length must stay within 1024 bytes.
pub fn validate_comment(value: &str) -> bool {
    let comment = value.trim();
    comment.is_empty() || (comment.len() <= 1024 && !TAG_REGEX.is_match(comment))
}
