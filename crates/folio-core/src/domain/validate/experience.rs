//! Experience validation and sanitization.
//!
//! Violations on an element split into two buckets with different
//! consequences. Errors on the element's own fields (including its
//! `achievements`) drop it from the sanitized list; errors inside
//! individual `technologies` items only drop those items, and the parent
//! survives with the rest.

use serde_json::{Map, Value};

use super::path::FieldPath;
use super::rules;
use crate::domain::entities::{Experience, Technology};
use crate::domain::report::{ErrorKind, Report, ValidationError};
use crate::domain::value_objects::TechCategory;

pub(crate) fn validate_experiences(input: &Value) -> Report<Vec<Experience>> {
    let root = FieldPath::root("experiences");

    let Some(items) = input.as_array() else {
        return Report::rejected(
            ValidationError::new(
                ErrorKind::InvalidType,
                root,
                "Experiences must be an array",
                input,
            ),
            Some(Vec::new()),
        );
    };

    let mut errors = Vec::new();
    let mut sanitized = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let path = root.index(i);

        let Some(obj) = item.as_object() else {
            errors.push(ValidationError::new(
                ErrorKind::InvalidType,
                path,
                "Experience must be an object",
                item,
            ));
            continue;
        };

        let mut own = Vec::new();
        let mut nested = Vec::new();

        let id = rules::required_str(obj, "id", &path, &mut own);
        let company = rules::required_str(obj, "company", &path, &mut own);
        let position = rules::required_str(obj, "position", &path, &mut own);
        let description = rules::required_str(obj, "description", &path, &mut own);

        let start_date = rules::required_str(obj, "startDate", &path, &mut own);
        if let Some(date) = &start_date {
            if !rules::is_year_month(date) {
                own.push(ValidationError::new(
                    ErrorKind::InvalidDate,
                    path.key("startDate"),
                    "Start date must be in YYYY-MM format",
                    &rules::raw(obj, "startDate"),
                ));
            }
        }

        let end_date = rules::required_str(obj, "endDate", &path, &mut own);
        if let Some(date) = &end_date {
            if date != "Present" && !rules::is_year_month(date) {
                own.push(ValidationError::new(
                    ErrorKind::InvalidDate,
                    path.key("endDate"),
                    "End date must be in YYYY-MM format or \"Present\"",
                    &rules::raw(obj, "endDate"),
                ));
            }
        }

        let achievements = check_achievements(obj, &path, &mut own);
        let technologies = check_technologies(obj, &path, &mut own, &mut nested);
        let location = rules::optional_str(obj, "location");

        if own.is_empty() {
            if let (Some(id), Some(company), Some(position), Some(start_date), Some(end_date), Some(description)) =
                (id, company, position, start_date, end_date, description)
            {
                sanitized.push(Experience {
                    id,
                    company,
                    position,
                    start_date,
                    end_date,
                    description,
                    achievements,
                    technologies,
                    location,
                });
            }
        }
        errors.extend(own);
        errors.extend(nested);
    }

    Report::new(errors, Some(sanitized))
}

/// Achievements must be an array holding at least one non-empty string.
/// Returns the trimmed survivors; an empty result is an error on the
/// parent, not something to silently render around.
fn check_achievements(
    obj: &Map<String, Value>,
    path: &FieldPath,
    own: &mut Vec<ValidationError>,
) -> Vec<String> {
    let Some(items) = obj.get("achievements").and_then(Value::as_array) else {
        own.push(ValidationError::new(
            ErrorKind::InvalidType,
            path.key("achievements"),
            "Achievements must be an array",
            &rules::raw(obj, "achievements"),
        ));
        return Vec::new();
    };

    let cleaned: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if cleaned.is_empty() {
        own.push(ValidationError::new(
            ErrorKind::MissingRequiredField,
            path.key("achievements"),
            "At least one achievement is required",
            &rules::raw(obj, "achievements"),
        ));
    }
    cleaned
}

/// Shared by experiences and projects: the array itself failing is an
/// `own` error, a failing item inside it a `nested` one.
pub(crate) fn check_technologies(
    obj: &Map<String, Value>,
    path: &FieldPath,
    own: &mut Vec<ValidationError>,
    nested: &mut Vec<ValidationError>,
) -> Vec<Technology> {
    let Some(items) = obj.get("technologies").and_then(Value::as_array) else {
        own.push(ValidationError::new(
            ErrorKind::InvalidType,
            path.key("technologies"),
            "Technologies must be an array",
            &rules::raw(obj, "technologies"),
        ));
        return Vec::new();
    };

    let base = path.key("technologies");
    let mut kept = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let (tech_errors, tech) = check_technology(item, base.index(i));
        nested.extend(tech_errors);
        if let Some(tech) = tech {
            kept.push(tech);
        }
    }
    kept
}

fn check_technology(value: &Value, path: FieldPath) -> (Vec<ValidationError>, Option<Technology>) {
    let mut errors = Vec::new();

    let Some(obj) = value.as_object() else {
        errors.push(ValidationError::new(
            ErrorKind::InvalidType,
            path,
            "Technology must be an object",
            value,
        ));
        return (errors, None);
    };

    let name = rules::required_str(obj, "name", &path, &mut errors);
    let category: Option<TechCategory> =
        rules::required_enum(obj, "category", TechCategory::allowed(), &path, &mut errors);

    let tech = match (name, category) {
        (Some(name), Some(category)) => Some(Technology { name, category }),
        _ => None,
    };
    (errors, tech)
}
