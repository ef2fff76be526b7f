//! Field-level validation rules shared by every category validator.
//!
//! Each `required_*` helper reads one key from an object, pushes at most
//! one [`ValidationError`] when the rule fails, and returns the cleaned
//! value on success. Validators compose these instead of hand-rolling the
//! same absent/wrong-type/empty checks per field.

use std::str::FromStr;

use serde_json::{Map, Value};
use url::Url;

use super::path::FieldPath;
use crate::domain::error::DomainError;
use crate::domain::report::{ErrorKind, ValidationError};

/// Clone the raw value at `key` for error capture; `Null` when absent.
pub(crate) fn raw(obj: &Map<String, Value>, key: &str) -> Value {
    obj.get(key).cloned().unwrap_or(Value::Null)
}

/// Required non-empty string. Absent, non-string, or empty-after-trim all
/// fail the same way: one `MISSING_REQUIRED_FIELD` at `parent.key`.
pub(crate) fn required_str(
    obj: &Map<String, Value>,
    key: &str,
    parent: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match obj
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(s) => Some(s.to_string()),
        None => {
            errors.push(ValidationError::new(
                ErrorKind::MissingRequiredField,
                parent.key(key),
                format!("{key} is required and must be a non-empty string"),
                &raw(obj, key),
            ));
            None
        }
    }
}

/// Optional string: `Some(trimmed)` when present as a non-empty string,
/// otherwise `None`. Never errors — wrong-typed optional fields are
/// silently dropped from the sanitized output.
pub(crate) fn optional_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Required member of a closed enumeration. The value must be a string
/// that parses exactly; anything else is one `INVALID_ENUM_VALUE`.
pub(crate) fn required_enum<T>(
    obj: &Map<String, Value>,
    key: &str,
    allowed: &'static str,
    parent: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Option<T>
where
    T: FromStr<Err = DomainError>,
{
    match obj.get(key).and_then(Value::as_str).map(T::from_str) {
        Some(Ok(value)) => Some(value),
        _ => {
            errors.push(ValidationError::new(
                ErrorKind::InvalidEnumValue,
                parent.key(key),
                format!("{key} must be one of: {allowed}"),
                &raw(obj, key),
            ));
            None
        }
    }
}

/// Required JSON boolean. No truthiness coercion: a string `"true"` is a
/// type error, exactly as it is in the source schema.
pub(crate) fn required_bool(
    obj: &Map<String, Value>,
    key: &str,
    parent: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Option<bool> {
    match obj.get(key).and_then(Value::as_bool) {
        Some(b) => Some(b),
        None => {
            errors.push(ValidationError::new(
                ErrorKind::InvalidType,
                parent.key(key),
                format!("{key} must be a boolean"),
                &raw(obj, key),
            ));
            None
        }
    }
}

/// The URL acceptance rule for link-bearing fields.
///
/// Accepted: any string `Url::parse` takes (scheme-agnostic on purpose —
/// `ftp://x.com` parses and therefore passes, matching the source
/// behavior), plus root-relative paths, plus `mailto:` URIs where the
/// field allows them. `mailto:` also parses as an absolute URL, so the
/// flag only matters for inputs too mangled to parse.
pub(crate) fn is_acceptable_url(candidate: &str, allow_mailto: bool) -> bool {
    if Url::parse(candidate).is_ok() {
        return true;
    }
    candidate.starts_with('/') || (allow_mailto && candidate.starts_with("mailto:"))
}

/// `YYYY-MM` with a real month. Year is any four digits; month is 01-12.
pub(crate) fn is_year_month(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit)
        || !bytes[5..].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    let month = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    (1..=12).contains(&month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn required_str_trims_and_accepts() {
        let mut errors = Vec::new();
        let o = obj(json!({ "name": "  Jane  " }));
        let got = required_str(&o, "name", &FieldPath::empty(), &mut errors);
        assert_eq!(got.as_deref(), Some("Jane"));
        assert!(errors.is_empty());
    }

    #[test]
    fn required_str_rejects_absent_blank_and_nonstring_alike() {
        for o in [json!({}), json!({ "name": "   " }), json!({ "name": 7 })] {
            let mut errors = Vec::new();
            assert!(required_str(&obj(o), "name", &FieldPath::empty(), &mut errors).is_none());
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ErrorKind::MissingRequiredField);
            assert_eq!(errors[0].field.as_str(), "name");
        }
    }

    #[test]
    fn required_enum_parses_exact_values_only() {
        use crate::domain::value_objects::CtaAction;

        let mut errors = Vec::new();
        let o = obj(json!({ "action": "scroll" }));
        let got: Option<CtaAction> =
            required_enum(&o, "action", CtaAction::allowed(), &FieldPath::empty(), &mut errors);
        assert_eq!(got, Some(CtaAction::Scroll));

        let o = obj(json!({ "action": "hover" }));
        let got: Option<CtaAction> =
            required_enum(&o, "action", CtaAction::allowed(), &FieldPath::empty(), &mut errors);
        assert!(got.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::InvalidEnumValue);
    }

    #[test]
    fn required_bool_has_no_truthiness() {
        let mut errors = Vec::new();
        assert_eq!(
            required_bool(&obj(json!({ "external": true })), "external", &FieldPath::empty(), &mut errors),
            Some(true)
        );
        assert!(
            required_bool(&obj(json!({ "external": "true" })), "external", &FieldPath::empty(), &mut errors)
                .is_none()
        );
        assert_eq!(errors[0].kind, ErrorKind::InvalidType);
    }

    #[test]
    fn url_rule_accepts_absolute_relative_and_mailto() {
        assert!(is_acceptable_url("https://example.com/x", false));
        assert!(is_acceptable_url("ftp://x.com", false)); // parses, so accepted
        assert!(is_acceptable_url("/resume.pdf", false));
        assert!(is_acceptable_url("mailto:me@example.com", true));
        assert!(!is_acceptable_url("not a url", false));
        assert!(!is_acceptable_url("relative/path", false));
    }

    #[test]
    fn year_month_requires_real_months() {
        assert!(is_year_month("2022-03"));
        assert!(is_year_month("1999-12"));
        assert!(!is_year_month("2022-13"));
        assert!(!is_year_month("2022-00"));
        assert!(!is_year_month("2022-3"));
        assert!(!is_year_month("22-03"));
        assert!(!is_year_month("2022/03"));
        assert!(!is_year_month("Present"));
    }
}
