//! Profile validation and sanitization.
//!
//! The profile is the one category that always yields a renderable
//! sanitized value (unless the input is not even an object): missing
//! required fields are reported AND replaced with documented defaults, so
//! the hero section never renders blank.

use serde_json::Value;

use super::path::FieldPath;
use super::rules;
use crate::domain::entities::profile::defaults;
use crate::domain::entities::{CallToAction, ImageAsset, ProfileInfo};
use crate::domain::report::{ErrorKind, Report, ValidationError};
use crate::domain::value_objects::{CtaAction, CtaVariant};

/// Profile violations use bare field names (`title`, `headshot.src`)
/// rather than a `profile.` prefix, matching the report format consumers
/// already parse.
pub(crate) fn validate_profile(input: &Value) -> Report<ProfileInfo> {
    let Some(obj) = input.as_object() else {
        return Report::rejected(
            ValidationError::new(
                ErrorKind::InvalidType,
                FieldPath::root("profile"),
                "Profile must be an object",
                input,
            ),
            None,
        );
    };

    let root = FieldPath::empty();
    let mut errors = Vec::new();

    let name = rules::required_str(obj, "name", &root, &mut errors);
    let title = rules::required_str(obj, "title", &root, &mut errors);
    let summary = rules::required_str(obj, "summary", &root, &mut errors);

    let headshot = match obj.get("headshot").and_then(Value::as_object) {
        Some(shot) => {
            let path = root.key("headshot");
            let src = rules::required_str(shot, "src", &path, &mut errors);
            let alt = rules::required_str(shot, "alt", &path, &mut errors);
            ImageAsset {
                src: src.unwrap_or_else(|| defaults::HEADSHOT_SRC.to_string()),
                alt: alt.unwrap_or_else(|| defaults::HEADSHOT_ALT.to_string()),
                placeholder: rules::optional_str(shot, "placeholder"),
            }
        }
        None => {
            errors.push(ValidationError::new(
                ErrorKind::MissingRequiredField,
                root.key("headshot"),
                "headshot object is required",
                &rules::raw(obj, "headshot"),
            ));
            ImageAsset::new(defaults::HEADSHOT_SRC, defaults::HEADSHOT_ALT)
        }
    };

    let call_to_actions = match obj.get("callToActions") {
        Some(Value::Array(items)) => {
            let base = root.key("callToActions");
            let mut kept = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let (cta_errors, cta) = check_call_to_action(item, base.index(i));
                errors.extend(cta_errors);
                if let Some(cta) = cta {
                    kept.push(cta);
                }
            }
            kept
        }
        other => {
            errors.push(ValidationError::new(
                ErrorKind::InvalidType,
                root.key("callToActions"),
                "callToActions must be an array",
                other.unwrap_or(&Value::Null),
            ));
            Vec::new()
        }
    };

    let sanitized = ProfileInfo {
        name: name.unwrap_or_else(|| defaults::NAME.to_string()),
        title: title.unwrap_or_else(|| defaults::TITLE.to_string()),
        summary: summary.unwrap_or_else(|| defaults::SUMMARY.to_string()),
        headshot,
        call_to_actions,
    };

    Report::new(errors, Some(sanitized))
}

/// Returns `Some` only when the item produced zero violations; failing
/// call-to-actions are reported and dropped from the sanitized profile.
fn check_call_to_action(
    value: &Value,
    path: FieldPath,
) -> (Vec<ValidationError>, Option<CallToAction>) {
    let mut errors = Vec::new();

    let Some(obj) = value.as_object() else {
        errors.push(ValidationError::new(
            ErrorKind::InvalidType,
            path,
            "Call to action must be an object",
            value,
        ));
        return (errors, None);
    };

    let id = rules::required_str(obj, "id", &path, &mut errors);
    let label = rules::required_str(obj, "label", &path, &mut errors);
    let action: Option<CtaAction> =
        rules::required_enum(obj, "action", CtaAction::allowed(), &path, &mut errors);
    let variant: Option<CtaVariant> =
        rules::required_enum(obj, "variant", CtaVariant::allowed(), &path, &mut errors);
    let target = rules::optional_str(obj, "target");

    let cta = match (id, label, action, variant) {
        (Some(id), Some(label), Some(action), Some(variant)) => Some(CallToAction {
            id,
            label,
            action,
            variant,
            target,
        }),
        _ => None,
    };

    (errors, cta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_profile() -> Value {
        json!({
            "name": "Jane Doe",
            "title": "Staff Engineer",
            "summary": "Builds things.",
            "headshot": { "src": "/images/jane.jpg", "alt": "Jane Doe" },
            "callToActions": [
                { "id": "view-projects", "label": "View My Work",
                  "action": "scroll", "target": "#projects", "variant": "primary" }
            ]
        })
    }

    #[test]
    fn complete_profile_is_valid() {
        let report = validate_profile(&complete_profile());
        assert!(report.is_valid);
        let profile = report.sanitized.unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.call_to_actions.len(), 1);
        assert_eq!(profile.call_to_actions[0].target.as_deref(), Some("#projects"));
    }

    #[test]
    fn non_object_input_is_rejected_without_sanitized_value() {
        let report = validate_profile(&json!(["not", "an", "object"]));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::InvalidType);
        assert_eq!(report.errors[0].field.as_str(), "profile");
        assert!(report.sanitized.is_none());
    }

    #[test]
    fn missing_fields_reported_and_defaulted() {
        let report = validate_profile(&json!({ "callToActions": [] }));
        assert!(!report.is_valid);

        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "title", "summary", "headshot"]);
        assert!(report
            .errors
            .iter()
            .all(|e| e.kind == ErrorKind::MissingRequiredField));

        let profile = report.sanitized.unwrap();
        assert_eq!(profile.name, defaults::NAME);
        assert_eq!(profile.title, defaults::TITLE);
        assert_eq!(profile.summary, defaults::SUMMARY);
        assert_eq!(profile.headshot.src, defaults::HEADSHOT_SRC);
        assert_eq!(profile.headshot.alt, defaults::HEADSHOT_ALT);
    }

    #[test]
    fn headshot_inner_fields_use_dotted_paths() {
        let mut value = complete_profile();
        value["headshot"] = json!({ "src": "   " });
        let report = validate_profile(&value);

        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["headshot.src", "headshot.alt"]);

        let profile = report.sanitized.unwrap();
        assert_eq!(profile.headshot.src, defaults::HEADSHOT_SRC);
    }

    #[test]
    fn invalid_cta_is_reported_and_filtered() {
        let mut value = complete_profile();
        value["callToActions"] = json!([
            { "id": "ok", "label": "Fine", "action": "download", "variant": "secondary" },
            { "id": "bad", "label": "Broken", "action": "hover", "variant": "primary" }
        ]);
        let report = validate_profile(&value);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::InvalidEnumValue);
        assert_eq!(report.errors[0].field.as_str(), "callToActions[1].action");

        let profile = report.sanitized.unwrap();
        assert_eq!(profile.call_to_actions.len(), 1);
        assert_eq!(profile.call_to_actions[0].id, "ok");
    }

    #[test]
    fn non_array_ctas_is_a_type_error() {
        let mut value = complete_profile();
        value["callToActions"] = json!("click me");
        let report = validate_profile(&value);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::InvalidType);
        assert_eq!(report.errors[0].field.as_str(), "callToActions");
        assert!(report.sanitized.unwrap().call_to_actions.is_empty());
    }

    #[test]
    fn whitespace_fields_are_trimmed() {
        let mut value = complete_profile();
        value["name"] = json!("  Jane Doe  ");
        let report = validate_profile(&value);
        assert!(report.is_valid);
        assert_eq!(report.sanitized.unwrap().name, "Jane Doe");
    }
}
