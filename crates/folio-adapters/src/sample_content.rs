//! Built-in sample portfolio content.
//!
//! Used by `folio init` to seed a new content directory and by tests that
//! need realistic, known-good input. Everything here must validate
//! cleanly; a unit test below enforces that.

use folio_core::domain::RawContent;
use serde_json::{Value, json};

pub fn profile() -> Value {
    json!({
        "name": "Aryan Kapoor",
        "title": "Software Engineer",
        "summary": "Passionate software engineer with expertise in full-stack development, specializing in scalable web applications and cloud infrastructure.",
        "headshot": {
            "src": "/images/headshot-placeholder.jpg",
            "alt": "Aryan Kapoor - Software Engineer"
        },
        "callToActions": [
            {
                "id": "view-projects",
                "label": "View My Work",
                "action": "scroll",
                "target": "#projects",
                "variant": "primary"
            },
            {
                "id": "download-resume",
                "label": "Download Resume",
                "action": "download",
                "target": "/AryanKapoor_Resume.pdf",
                "variant": "secondary"
            }
        ]
    })
}

pub fn quick_links() -> Value {
    json!([
        {
            "id": "linkedin",
            "label": "LinkedIn",
            "url": "https://linkedin.com/in/aryankapoor",
            "icon": "FaLinkedin",
            "type": "professional",
            "external": true
        },
        {
            "id": "github",
            "label": "GitHub",
            "url": "https://github.com/aryankapoor",
            "icon": "FaGithub",
            "type": "professional",
            "external": true
        },
        {
            "id": "email",
            "label": "Email",
            "url": "mailto:aryan.kapoor@email.com",
            "icon": "FaEnvelope",
            "type": "contact",
            "external": false
        },
        {
            "id": "twitter",
            "label": "Twitter",
            "url": "https://twitter.com/aryankapoor_dev",
            "icon": "FaTwitter",
            "type": "social",
            "external": true
        },
        {
            "id": "portfolio",
            "label": "Portfolio",
            "url": "https://aryankapoor.dev",
            "icon": "FaGlobe",
            "type": "professional",
            "external": true
        },
        {
            "id": "resume",
            "label": "Resume",
            "url": "/AryanKapoor_Resume.pdf",
            "icon": "FaFileDownload",
            "type": "professional",
            "external": false
        }
    ])
}

pub fn experiences() -> Value {
    json!([
        {
            "id": "exp-1",
            "company": "TechCorp Solutions",
            "position": "Senior Software Engineer",
            "startDate": "2022-03",
            "endDate": "Present",
            "description": "Lead full-stack development of enterprise web applications serving 100k+ users.",
            "achievements": [
                "Reduced application load time by 40% through performance optimization",
                "Led migration from monolithic to microservices architecture",
                "Mentored 3 junior developers and established code review processes"
            ],
            "technologies": [
                { "name": "React", "category": "framework" },
                { "name": "TypeScript", "category": "language" },
                { "name": "PostgreSQL", "category": "database" },
                { "name": "Docker", "category": "tool" }
            ],
            "location": "San Francisco, CA"
        },
        {
            "id": "exp-2",
            "company": "StartupXYZ",
            "position": "Full Stack Developer",
            "startDate": "2020-06",
            "endDate": "2022-02",
            "description": "Developed and maintained multiple client-facing applications in a fast-paced startup environment.",
            "achievements": [
                "Built responsive web applications from scratch using React and Express",
                "Improved code coverage from 45% to 85% through comprehensive testing"
            ],
            "technologies": [
                { "name": "JavaScript", "category": "language" },
                { "name": "Express.js", "category": "framework" },
                { "name": "MongoDB", "category": "database" }
            ],
            "location": "Remote"
        },
        {
            "id": "exp-3",
            "company": "Digital Agency Pro",
            "position": "Frontend Developer",
            "startDate": "2019-01",
            "endDate": "2020-05",
            "description": "Created responsive websites and web applications for diverse clients.",
            "achievements": [
                "Delivered 15+ client projects on time and within budget",
                "Achieved 95+ PageSpeed scores on all production websites"
            ],
            "technologies": [
                { "name": "Vue.js", "category": "framework" },
                { "name": "Sass", "category": "tool" }
            ],
            "location": "New York, NY"
        }
    ])
}

pub fn projects() -> Value {
    json!([
        {
            "id": "project-1",
            "title": "E-Commerce Platform",
            "description": "Full-stack e-commerce solution with real-time inventory management and payment processing.",
            "longDescription": "A comprehensive e-commerce platform featuring user authentication, product catalog, shopping cart, order management, and an admin dashboard for inventory and sales analytics.",
            "image": {
                "src": "/images/ecommerce-project.jpg",
                "alt": "E-Commerce Platform Screenshot"
            },
            "technologies": [
                { "name": "React", "category": "framework" },
                { "name": "Node.js", "category": "framework" },
                { "name": "MongoDB", "category": "database" },
                { "name": "Stripe", "category": "tool" }
            ],
            "links": [
                { "type": "demo", "url": "https://ecommerce-demo.aryankapoor.dev", "label": "Live Demo" },
                { "type": "code", "url": "https://github.com/aryankapoor/ecommerce-platform", "label": "Source Code" }
            ],
            "category": "Full Stack",
            "featured": true,
            "status": "completed"
        },
        {
            "id": "project-2",
            "title": "Task Management App",
            "description": "Collaborative task management application with real-time updates and progress tracking.",
            "image": {
                "src": "/images/taskmanager-project.jpg",
                "alt": "Task Management App Screenshot"
            },
            "technologies": [
                { "name": "React", "category": "framework" },
                { "name": "TypeScript", "category": "language" },
                { "name": "Firebase", "category": "database" }
            ],
            "links": [
                { "type": "demo", "url": "https://taskmanager.aryankapoor.dev", "label": "Live Demo" },
                { "type": "code", "url": "https://github.com/aryankapoor/task-manager", "label": "Source Code" }
            ],
            "category": "Frontend",
            "featured": true,
            "status": "completed"
        },
        {
            "id": "project-3",
            "title": "API Gateway Service",
            "description": "Microservices API gateway with authentication, rate limiting, and monitoring.",
            "image": {
                "src": "/images/api-gateway-project.jpg",
                "alt": "API Gateway Service Architecture"
            },
            "technologies": [
                { "name": "Node.js", "category": "framework" },
                { "name": "Redis", "category": "database" },
                { "name": "Docker", "category": "tool" }
            ],
            "links": [
                { "type": "code", "url": "https://github.com/aryankapoor/api-gateway", "label": "Source Code" },
                { "type": "documentation", "url": "https://github.com/aryankapoor/api-gateway/wiki", "label": "Docs" }
            ],
            "category": "Backend",
            "featured": false,
            "status": "in-progress"
        }
    ])
}

/// The full sample portfolio as raw content, ready for validation.
pub fn sample_content() -> RawContent {
    RawContent {
        profile: Some(profile()),
        quick_links: Some(quick_links()),
        experiences: Some(experiences()),
        projects: Some(projects()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::domain::ContentValidator;

    #[test]
    fn sample_content_validates_cleanly() {
        let audit = ContentValidator::validate_all(&sample_content());
        assert!(audit.is_valid, "sample content must stay valid: {:?}", audit.errors);
        assert!(audit.sanitized.profile.is_some());
        assert_eq!(audit.sanitized.quick_links.as_ref().map(Vec::len), Some(6));
        assert_eq!(audit.sanitized.experiences.as_ref().map(Vec::len), Some(3));
        assert_eq!(audit.sanitized.projects.as_ref().map(Vec::len), Some(3));
    }
}
