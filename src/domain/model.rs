use serde::{Deserialize, Serialize};

/// A resume as returned by `GET /resume?name=...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub twitter: String,
    pub address: String,
    /// Only sent by some deployments of the resume API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(
        rename = "startDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_date: None,
            end_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_shape() {
        let json = serde_json::json!({
            "name": "Vivek Sachan",
            "phone": "555-0100",
            "email": "vivek@example.com",
            "twitter": "@vivek",
            "address": "Bengaluru",
            "skills": ["Go", "Rust"],
            "projects": [{"title": "X", "description": "Y"}]
        });

        let resume: Resume = serde_json::from_value(json).unwrap();

        assert_eq!(resume.name, "Vivek Sachan");
        assert_eq!(resume.skills, vec!["Go", "Rust"]);
        assert_eq!(resume.projects, vec![Project::new("X", "Y")]);
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_deserialize_extended_shape() {
        let json = serde_json::json!({
            "name": "A",
            "phone": "B",
            "email": "C",
            "twitter": "D",
            "address": "E",
            "summary": "Systems engineer",
            "skills": [],
            "projects": [{
                "title": "Compiler",
                "description": "Toy compiler",
                "startDate": "2021",
                "endDate": "2022"
            }]
        });

        let resume: Resume = serde_json::from_value(json).unwrap();

        assert_eq!(resume.summary.as_deref(), Some("Systems engineer"));
        assert_eq!(resume.projects[0].start_date.as_deref(), Some("2021"));
        assert_eq!(resume.projects[0].end_date.as_deref(), Some("2022"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = serde_json::json!({
            "name": "A",
            "phone": "B",
            "skills": [],
            "projects": []
        });

        assert!(serde_json::from_value::<Resume>(json).is_err());
    }
}
