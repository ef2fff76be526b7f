//! Project validation and sanitization.
//!
//! Same own/nested error split as experiences: errors on a project's own
//! fields drop it from the sanitized list, errors inside individual
//! technology or link items only drop those items.

use serde_json::{Map, Value};

use super::experience::check_technologies;
use super::path::FieldPath;
use super::rules;
use crate::domain::entities::{ImageAsset, Project, ProjectLink};
use crate::domain::report::{ErrorKind, Report, ValidationError};
use crate::domain::value_objects::{ProjectLinkKind, ProjectStatus};

pub(crate) fn validate_projects(input: &Value) -> Report<Vec<Project>> {
    let root = FieldPath::root("projects");

    let Some(items) = input.as_array() else {
        return Report::rejected(
            ValidationError::new(
                ErrorKind::InvalidType,
                root,
                "Projects must be an array",
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
                "Project must be an object",
                item,
            ));
            continue;
        };

        let mut own = Vec::new();
        let mut nested = Vec::new();

        let id = rules::required_str(obj, "id", &path, &mut own);
        let title = rules::required_str(obj, "title", &path, &mut own);
        let description = rules::required_str(obj, "description", &path, &mut own);
        let category = rules::required_str(obj, "category", &path, &mut own);
        let long_description = rules::optional_str(obj, "longDescription");

        let image = check_image(obj, &path, &mut own);
        let technologies = check_technologies(obj, &path, &mut own, &mut nested);
        let links = check_links(obj, &path, &mut own, &mut nested);

        let featured = rules::required_bool(obj, "featured", &path, &mut own);
        let status: Option<ProjectStatus> =
            rules::required_enum(obj, "status", ProjectStatus::allowed(), &path, &mut own);

        if own.is_empty() {
            if let (Some(id), Some(title), Some(description), Some(category), Some(image), Some(featured), Some(status)) =
                (id, title, description, category, image, featured, status)
            {
                sanitized.push(Project {
                    id,
                    title,
                    description,
                    long_description,
                    image,
                    technologies,
                    links,
                    category,
                    featured,
                    status,
                });
            }
        }
        errors.extend(own);
        errors.extend(nested);
    }

    Report::new(errors, Some(sanitized))
}

fn check_image(
    obj: &Map<String, Value>,
    path: &FieldPath,
    own: &mut Vec<ValidationError>,
) -> Option<ImageAsset> {
    let Some(img) = obj.get("image").and_then(Value::as_object) else {
        own.push(ValidationError::new(
            ErrorKind::MissingRequiredField,
            path.key("image"),
            "Project image object is required",
            &rules::raw(obj, "image"),
        ));
        return None;
    };

    let img_path = path.key("image");
    let src = rules::required_str(img, "src", &img_path, own);
    let alt = rules::required_str(img, "alt", &img_path, own);

    match (src, alt) {
        (Some(src), Some(alt)) => Some(ImageAsset {
            src,
            alt,
            placeholder: rules::optional_str(img, "placeholder"),
        }),
        _ => None,
    }
}

fn check_links(
    obj: &Map<String, Value>,
    path: &FieldPath,
    own: &mut Vec<ValidationError>,
    nested: &mut Vec<ValidationError>,
) -> Vec<ProjectLink> {
    let Some(items) = obj.get("links").and_then(Value::as_array) else {
        own.push(ValidationError::new(
            ErrorKind::InvalidType,
            path.key("links"),
            "Links must be an array",
            &rules::raw(obj, "links"),
        ));
        return Vec::new();
    };

    let base = path.key("links");
    let mut kept = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let (link_errors, link) = check_project_link(item, base.index(i));
        nested.extend(link_errors);
        if let Some(link) = link {
            kept.push(link);
        }
    }
    kept
}

fn check_project_link(
    value: &Value,
    path: FieldPath,
) -> (Vec<ValidationError>, Option<ProjectLink>) {
    let mut errors = Vec::new();

    let Some(obj) = value.as_object() else {
        errors.push(ValidationError::new(
            ErrorKind::InvalidType,
            path,
            "Project link must be an object",
            value,
        ));
        return (errors, None);
    };

    let kind: Option<ProjectLinkKind> =
        rules::required_enum(obj, "type", ProjectLinkKind::allowed(), &path, &mut errors);

    let url = rules::required_str(obj, "url", &path, &mut errors);
    if let Some(url) = &url {
        // No mailto here: project links point at demos, repos, and docs.
        if !rules::is_acceptable_url(url, false) {
            errors.push(ValidationError::new(
                ErrorKind::InvalidUrl,
                path.key("url"),
                "Project link URL must be a valid URL",
                &rules::raw(obj, "url"),
            ));
        }
    }

    let label = rules::required_str(obj, "label", &path, &mut errors);

    let link = match (kind, url, label) {
        (Some(kind), Some(url), Some(label)) => Some(ProjectLink { kind, url, label }),
        _ => None,
    };
    (errors, link)
}
