// src/forms/tests/service_tests.rs

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::forms::models::FormField;
    use crate::forms::service::ContactFormValidator;

    fn field(name: &str, value: &str) -> FormField {
        FormField {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_single_invalid_field_reported() {
        let data = vec![
            field("name", "John"),
            field("phone", "bad"),
            field("email", ""),
            field("comment", ""),
        ];

        let result = ContactFormValidator.validate(&data);
        assert!(!result.result);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors.get("phone").map(String::as_str),
            Some("Invalid phone")
        );
    }

    #[test]
    fn test_empty_submission_is_valid() {
        let result = ContactFormValidator.validate(&[]);
        assert!(result.result);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_skipped() {
        let data = vec![field("subject", "!!! not validated !!!")];

        let result = ContactFormValidator.validate(&data);
        assert!(result.result);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_all_fields_checked_without_short_circuit() {
        let data = vec![field("name", "1234"), field("phone", "bad")];

        let result = ContactFormValidator.validate(&data);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.contains_key("name"));
        assert!(result.errors.contains_key("phone"));
    }

    #[test]
    fn test_duplicate_names_keep_one_entry() {
        let data = vec![field("phone", "bad"), field("phone", "also bad")];

        let result = ContactFormValidator.validate(&data);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors.get("phone").map(String::as_str),
            Some("Invalid phone")
        );
    }

    #[test]
    fn test_later_valid_duplicate_does_not_clear_error() {
        // Aggregation only writes on failure; an earlier failure stands.
        let data = vec![field("phone", "bad"), field("phone", "+1(212)555-0100")];

        let result = ContactFormValidator.validate(&data);
        assert!(!result.result);
        assert!(result.errors.contains_key("phone"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let data = vec![field("name", "John"), field("phone", "bad")];

        let first = ContactFormValidator.validate(&data);
        let second = ContactFormValidator.validate(&data);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_with_error_key() {
        let result = ContactFormValidator.validate(&[field("phone", "bad")]);

        let json = serde_json::to_value(&result).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"result": false, "error": {"phone": "Invalid phone"}})
        );
    }

    #[test]
    fn test_valid_submission_serializes_empty_error_map() {
        let result = ContactFormValidator.validate(&[field("name", "John")]);

        let json = serde_json::to_value(&result).expect("serializable");
        assert_eq!(json, serde_json::json!({"result": true, "error": {}}));
    }
}
