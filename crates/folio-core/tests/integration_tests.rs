//! End-to-end validation behavior over realistic portfolio content.

use folio_core::domain::{ContentValidator, ErrorKind, RawContent};
use serde_json::{Value, json};

fn profile() -> Value {
    json!({
        "name": "Jane Doe",
        "title": "Staff Engineer",
        "summary": "Builds reliable systems.",
        "headshot": { "src": "/images/jane.jpg", "alt": "Jane Doe" },
        "callToActions": [
            { "id": "view-projects", "label": "View My Work",
              "action": "scroll", "target": "#projects", "variant": "primary" },
            { "id": "download-resume", "label": "Download Resume",
              "action": "download", "target": "/resume.pdf", "variant": "secondary" }
        ]
    })
}

fn quick_links() -> Value {
    json!([
        { "id": "github", "label": "GitHub", "url": "https://github.com/janedoe",
          "icon": "FaGithub", "type": "professional", "external": true },
        { "id": "email", "label": "Email", "url": "mailto:jane@example.com",
          "icon": "FaEnvelope", "type": "contact", "external": false },
        { "id": "resume", "label": "Resume", "url": "/resume.pdf",
          "icon": "FaFileAlt", "type": "professional", "external": false }
    ])
}

fn experiences() -> Value {
    json!([
        {
            "id": "acme-2022", "company": "Acme Corp", "position": "Senior Engineer",
            "startDate": "2022-03", "endDate": "Present",
            "description": "Owned the billing platform.",
            "achievements": ["Cut invoice latency by 40%", "Led a team of four"],
            "technologies": [
                { "name": "Rust", "category": "language" },
                { "name": "PostgreSQL", "category": "database" }
            ],
            "location": "Remote"
        },
        {
            "id": "initech-2019", "company": "Initech", "position": "Engineer",
            "startDate": "2019-06", "endDate": "2022-02",
            "description": "Internal tooling.",
            "achievements": ["Shipped the reporting pipeline"],
            "technologies": [{ "name": "Python", "category": "language" }]
        }
    ])
}

fn projects() -> Value {
    json!([
        {
            "id": "folio", "title": "Folio",
            "description": "Portfolio content toolkit.",
            "image": { "src": "/images/projects/folio.jpg", "alt": "Folio screenshot" },
            "technologies": [{ "name": "Rust", "category": "language" }],
            "links": [
                { "type": "code", "url": "https://github.com/janedoe/folio", "label": "Source" }
            ],
            "category": "Full Stack", "featured": true, "status": "completed"
        }
    ])
}

#[test]
fn well_formed_content_validates_cleanly() {
    let content = RawContent {
        profile: Some(profile()),
        quick_links: Some(quick_links()),
        experiences: Some(experiences()),
        projects: Some(projects()),
    };
    let audit = ContentValidator::validate_all(&content);

    assert!(audit.is_valid);
    assert!(audit.errors.is_empty());
    assert_eq!(audit.sanitized.quick_links.as_ref().map(Vec::len), Some(3));
    assert_eq!(audit.sanitized.experiences.as_ref().map(Vec::len), Some(2));
    assert_eq!(audit.sanitized.projects.as_ref().map(Vec::len), Some(1));
}

// Empty required string reports the bare field path and the sanitized
// profile falls back to the documented default title.
#[test]
fn empty_title_falls_back_to_default() {
    let input = json!({
        "name": "Jane", "title": "", "summary": "Eng",
        "headshot": { "src": "/a.jpg", "alt": "x" },
        "callToActions": []
    });
    let report = ContentValidator::validate_profile(&input);

    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::MissingRequiredField);
    assert_eq!(report.errors[0].field.as_str(), "title");

    let sanitized = report.sanitized.unwrap();
    assert_eq!(sanitized.name, "Jane");
    assert_eq!(sanitized.title, "Software Engineer");
}

#[test]
fn out_of_range_month_fails_only_that_field() {
    let mut items = experiences();
    items[0]["endDate"] = json!("2022-13");
    let report = ContentValidator::validate_experiences(&items);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::InvalidDate);
    assert_eq!(report.errors[0].field.as_str(), "experiences[0].endDate");
    // startDate "2022-03" untouched; only the broken record is dropped.
    assert_eq!(report.sanitized.unwrap().len(), 1);
}

#[test]
fn ftp_scheme_parses_and_is_accepted_but_garbage_is_not() {
    let mut links = quick_links();
    links[0]["url"] = json!("ftp://x.com");
    let report = ContentValidator::validate_quick_links(&links);
    assert!(report.is_valid);

    links[0]["url"] = json!("not a url");
    let report = ContentValidator::validate_quick_links(&links);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::InvalidUrl);
    assert_eq!(report.errors[0].field.as_str(), "quickLinks[0].url");
}

#[test]
fn broken_technology_entry_is_dropped_but_project_survives() {
    let mut items = projects();
    items[0]["technologies"] = json!([
        { "name": "React", "category": "framework" },
        { "name": "", "category": "bogus" }
    ]);
    let report = ContentValidator::validate_projects(&items);

    assert!(!report.is_valid);
    let kinds: Vec<ErrorKind> = report.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [ErrorKind::MissingRequiredField, ErrorKind::InvalidEnumValue]
    );
    assert!(report
        .errors
        .iter()
        .all(|e| e.field.as_str().starts_with("projects[0].technologies[1]")));

    let kept = report.sanitized.unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].technologies.len(), 1);
    assert_eq!(kept[0].technologies[0].name, "React");
}

#[test]
fn empty_achievements_omit_the_whole_experience() {
    let mut items = experiences();
    items[1]["achievements"] = json!([]);
    let report = ContentValidator::validate_experiences(&items);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::MissingRequiredField);
    assert_eq!(report.errors[0].field.as_str(), "experiences[1].achievements");

    let kept = report.sanitized.unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "acme-2022");
}

#[test]
fn one_malformed_item_in_a_list_of_n_leaves_n_minus_one() {
    let mut links = quick_links();
    links[1]["type"] = json!("carrier-pigeon");
    let report = ContentValidator::validate_quick_links(&links);

    assert!(!report.is_valid);
    assert!(report
        .errors
        .iter()
        .all(|e| e.field.as_str().starts_with("quickLinks[1]")));
    assert_eq!(report.sanitized.unwrap().len(), 2);
}

#[test]
fn sanitized_output_revalidates_cleanly() {
    // Start from deliberately mangled content in every category.
    let mut prof = profile();
    prof["title"] = json!("   ");
    let mut links = quick_links();
    links[2]["url"] = json!("::::");
    let mut exps = experiences();
    exps[0]["achievements"] = json!(["  Shipped  ", "", 42]);
    let mut projs = projects();
    projs[0]["technologies"] = json!([{ "name": "Rust", "category": "crab" }]);

    let content = RawContent {
        profile: Some(prof),
        quick_links: Some(links),
        experiences: Some(exps),
        projects: Some(projs),
    };
    let first = ContentValidator::validate_all(&content);
    assert!(!first.is_valid);

    let salvaged = first.best_effort();
    let second = ContentValidator::validate_all(&RawContent {
        profile: salvaged
            .profile
            .map(|p| serde_json::to_value(p).unwrap()),
        quick_links: salvaged
            .quick_links
            .map(|l| serde_json::to_value(l).unwrap()),
        experiences: salvaged
            .experiences
            .map(|e| serde_json::to_value(e).unwrap()),
        projects: salvaged
            .projects
            .map(|p| serde_json::to_value(p).unwrap()),
    });

    assert!(second.is_valid, "errors on re-validation: {:?}", second.errors);
}

#[test]
fn audit_aggregates_across_categories_without_short_circuiting() {
    let content = RawContent {
        profile: Some(json!(null)),
        quick_links: Some(json!(null)),
        experiences: Some(experiences()),
        projects: Some(json!(null)),
    };
    let audit = ContentValidator::validate_all(&content);

    assert!(!audit.is_valid);
    assert_eq!(audit.errors.len(), 3);
    // The valid category still produced its sanitized slice.
    assert_eq!(audit.sanitized.experiences.as_ref().map(Vec::len), Some(2));
    assert_eq!(audit.summary().error_count, 3);
}
