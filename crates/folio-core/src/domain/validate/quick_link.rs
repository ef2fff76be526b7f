//! Quick-link validation and sanitization.

use serde_json::Value;

use super::path::FieldPath;
use super::rules;
use crate::domain::entities::QuickLink;
use crate::domain::report::{ErrorKind, Report, ValidationError};
use crate::domain::value_objects::LinkKind;

pub(crate) fn validate_quick_links(input: &Value) -> Report<Vec<QuickLink>> {
    let root = FieldPath::root("quickLinks");

    let Some(items) = input.as_array() else {
        return Report::rejected(
            ValidationError::new(
                ErrorKind::InvalidType,
                root,
                "Quick links must be an array",
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
                "Quick link must be an object",
                item,
            ));
            continue;
        };

        let mut link_errors = Vec::new();

        let id = rules::required_str(obj, "id", &path, &mut link_errors);
        let label = rules::required_str(obj, "label", &path, &mut link_errors);

        let url = rules::required_str(obj, "url", &path, &mut link_errors);
        if let Some(url) = &url {
            // mailto: is legal here and nowhere else.
            if !rules::is_acceptable_url(url, true) {
                link_errors.push(ValidationError::new(
                    ErrorKind::InvalidUrl,
                    path.key("url"),
                    "Quick link URL must be a valid URL or mailto link",
                    &rules::raw(obj, "url"),
                ));
            }
        }

        let icon = rules::required_str(obj, "icon", &path, &mut link_errors);
        let kind: Option<LinkKind> =
            rules::required_enum(obj, "type", LinkKind::allowed(), &path, &mut link_errors);
        let external = rules::required_bool(obj, "external", &path, &mut link_errors);

        if link_errors.is_empty() {
            if let (Some(id), Some(label), Some(url), Some(icon), Some(kind), Some(external)) =
                (id, label, url, icon, kind, external)
            {
                sanitized.push(QuickLink {
                    id,
                    label,
                    url,
                    icon,
                    kind,
                    external,
                });
            }
        }
        errors.extend(link_errors);
    }

    Report::new(errors, Some(sanitized))
}
