// src/forms/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::forms::phone_patterns::{PHONE_PATTERNS, PHONE_PATTERN_SET};
    use crate::forms::validators::*;

    #[test]
    fn test_name_accepts_letters_and_whitespace() {
        assert!(validate_name("John"));
        assert!(validate_name("John Smith"));
        assert!(validate_name("  John  ")); // trimmed before checking
    }

    #[test]
    fn test_name_rejects_empty_and_blank() {
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
    }

    #[test]
    fn test_name_rejects_digits_and_punctuation() {
        assert!(!validate_name("John3"));
        assert!(!validate_name("John-Smith"));
        assert!(!validate_name("John!"));
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(validate_name(&"a".repeat(63)));
        assert!(!validate_name(&"a".repeat(64)));
    }

    #[test]
    fn test_phone_matches_cataloged_patterns() {
        assert!(validate_phone("+380(67)123-45-67"));
        assert!(validate_phone("+1(212)555-0100"));
        assert!(validate_phone("+44-20-7946-0958"));
        assert!(validate_phone("+247-1234"));
    }

    #[test]
    fn test_phone_rejects_non_matching_input() {
        assert!(!validate_phone("not-a-phone"));
        assert!(!validate_phone(""));
        assert!(!validate_phone("380671234567"));
    }

    #[test]
    fn test_phone_is_anchored_and_untrimmed() {
        assert!(!validate_phone(" +1(212)555-0100"));
        assert!(!validate_phone("+1(212)555-0100 "));
        assert!(!validate_phone("call +1(212)555-0100"));
    }

    #[test]
    fn test_phone_catalog_compiles() {
        assert_eq!(PHONE_PATTERNS.len(), 299);
        // Forcing the lazy set proves every template is a valid pattern.
        assert!(!PHONE_PATTERN_SET.is_match("x"));
    }

    #[test]
    fn test_email_is_optional() {
        assert!(validate_email(""));
        assert!(validate_email("   "));
    }

    #[test]
    fn test_email_syntax() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("  user@example.com  ")); // trimmed
        assert!(!validate_email("user@@bad"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_comment_is_optional() {
        assert!(validate_comment(""));
        assert!(validate_comment("   "));
    }

    #[test]
    fn test_comment_rejects_markup() {
        assert!(validate_comment("Looking forward to hearing from you."));
        assert!(!validate_comment("<script>x</script>"));
        assert!(!validate_comment("hello <b>world</b>"));
        // Bare angle brackets are not tags.
        assert!(validate_comment("1 < 2 and 3 > 1"));
    }

    #[test]
    fn test_comment_length_bounds() {
        assert!(validate_comment(&"a".repeat(1024)));
        assert!(!validate_comment(&"a".repeat(1025)));
    }

    #[test]
    fn test_registry_covers_recognized_fields() {
        for field in ["name", "phone", "email", "comment"] {
            assert!(validator_for(field).is_some(), "missing validator: {field}");
        }
        assert!(validator_for("subject").is_none());
        assert!(validator_for("Name").is_none()); // names are case-sensitive
    }
}
