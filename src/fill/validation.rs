//! Per-field validation for submitted values

use crate::state::{Field, FieldKind, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[1-9]\d{0,15}$").expect("valid phone regex"));

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const PATTERN_MESSAGE: &str = "Please match the requested format";

/// First problem with `value` for `field`, if any
///
/// Empty values only fail the required check; every other constraint is
/// skipped for them.
pub fn validate_field(field: &Field, value: Option<&FieldValue>) -> Option<String> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ if field.required => return Some(REQUIRED_MESSAGE.to_string()),
        _ => return None,
    };

    if let Some(rules) = &field.validation {
        if let Some(min) = rules.min_length.filter(|&m| m > 0) {
            if value.len() < min {
                return Some(format!("Minimum length is {min} characters"));
            }
        }
        if let Some(max) = rules.max_length.filter(|&m| m > 0) {
            if value.len() > max {
                return Some(format!("Maximum length is {max} characters"));
            }
        }
        if let (Some(pattern), Some(text)) = (rules.pattern.as_deref(), value.as_text()) {
            match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) if !re.is_match(text) => return Some(PATTERN_MESSAGE.to_string()),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("Ignoring invalid pattern on field {}: {err}", field.id);
                }
            }
        }
    }

    let text = value.as_text()?;
    match field.kind {
        FieldKind::Email if !EMAIL.is_match(text) => Some(EMAIL_MESSAGE.to_string()),
        FieldKind::Phone => {
            let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            if PHONE.is_match(&compact) {
                None
            } else {
                Some(PHONE_MESSAGE.to_string())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldDraft, Validation};
    use pretty_assertions::assert_eq;

    fn field(kind: FieldKind) -> Field {
        FieldDraft::new(kind, "Field").into_field("f".to_string())
    }

    fn check(field: &Field, value: &str) -> Option<String> {
        validate_field(field, Some(&FieldValue::from(value)))
    }

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_required_value() {
            let f = FieldDraft::new(FieldKind::Text, "Name")
                .required(true)
                .into_field("f".to_string());
            assert_eq!(validate_field(&f, None), Some(REQUIRED_MESSAGE.to_string()));
            assert_eq!(check(&f, ""), Some(REQUIRED_MESSAGE.to_string()));
        }

        #[test]
        fn test_empty_list_fails_required() {
            let f = FieldDraft::new(FieldKind::Checkbox, "Pick")
                .required(true)
                .into_field("f".to_string());
            assert_eq!(
                validate_field(&f, Some(&FieldValue::List(vec![]))),
                Some(REQUIRED_MESSAGE.to_string())
            );
        }

        #[test]
        fn test_optional_empty_value_passes() {
            let f = field(FieldKind::Email);
            assert_eq!(validate_field(&f, None), None);
            assert_eq!(check(&f, ""), None);
        }
    }

    mod lengths {
        use super::*;
        use pretty_assertions::assert_eq;

        fn bounded(min: Option<usize>, max: Option<usize>) -> Field {
            FieldDraft::new(FieldKind::Textarea, "Message")
                .validation(Validation {
                    min_length: min,
                    max_length: max,
                    pattern: None,
                })
                .into_field("f".to_string())
        }

        #[test]
        fn test_min_length() {
            let f = bounded(Some(10), None);
            assert_eq!(
                check(&f, "short"),
                Some("Minimum length is 10 characters".to_string())
            );
            assert_eq!(check(&f, "long enough text"), None);
        }

        #[test]
        fn test_max_length() {
            let f = bounded(None, Some(3));
            assert_eq!(
                check(&f, "four"),
                Some("Maximum length is 3 characters".to_string())
            );
            assert_eq!(check(&f, "abc"), None);
        }

        #[test]
        fn test_zero_bounds_are_ignored() {
            let f = bounded(Some(0), Some(0));
            assert_eq!(check(&f, "anything"), None);
        }
    }

    mod pattern {
        use super::*;
        use pretty_assertions::assert_eq;

        fn patterned(pattern: &str) -> Field {
            FieldDraft::new(FieldKind::Text, "Code")
                .validation(Validation {
                    pattern: Some(pattern.to_string()),
                    ..Default::default()
                })
                .into_field("f".to_string())
        }

        #[test]
        fn test_pattern_must_match_whole_value() {
            let f = patterned(r"[A-Z]{3}");
            assert_eq!(check(&f, "ABC"), None);
            assert_eq!(check(&f, "ABCD"), Some(PATTERN_MESSAGE.to_string()));
        }

        #[test]
        fn test_invalid_pattern_is_ignored() {
            let f = patterned("([unclosed");
            assert_eq!(check(&f, "whatever"), None);
        }
    }

    mod kinds {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_email() {
            let f = field(FieldKind::Email);
            assert_eq!(check(&f, "a@b.co"), None);
            assert_eq!(check(&f, "not-an-email"), Some(EMAIL_MESSAGE.to_string()));
            assert_eq!(check(&f, "a b@c.d"), Some(EMAIL_MESSAGE.to_string()));
        }

        #[test]
        fn test_phone_strips_whitespace() {
            let f = field(FieldKind::Phone);
            assert_eq!(check(&f, "+1 555 0100"), None);
            assert_eq!(check(&f, "0123"), Some(PHONE_MESSAGE.to_string()));
            assert_eq!(check(&f, "call me"), Some(PHONE_MESSAGE.to_string()));
        }

        #[test]
        fn test_text_accepts_anything() {
            assert_eq!(check(&field(FieldKind::Text), "@@@"), None);
        }
    }
}
