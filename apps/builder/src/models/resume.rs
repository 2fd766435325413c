//! The normalized in-memory resume record.
//!
//! Absence of an optional text field is represented by `None` or an empty
//! string interchangeably; renderers treat both the same way. `current`
//! entries keep whatever end date was typed — "Present" is substituted at
//! render time, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub current: bool,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// `level` is an open string domain, conventionally one of Beginner /
/// Intermediate / Advanced / Expert. Unrecognized values degrade to the
/// lowest visual tier instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
}

/// The aggregate root. Certifications, references, and languages are
/// optional lists: they may be absent from a persisted record without
/// affecting any other section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub template_id: String,
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resume {
    /// Copy prepared for the wire: optional personal-info fields holding an
    /// empty or whitespace-only string are normalized to null before send.
    /// The in-memory draft itself is never touched.
    pub fn normalized(&self) -> Resume {
        let mut out = self.clone();
        let p = &mut out.personal_info;
        for field in [
            &mut p.email,
            &mut p.address,
            &mut p.city,
            &mut p.country,
            &mut p.postal_code,
            &mut p.linkedin,
            &mut p.github,
            &mut p.website,
            &mut p.summary,
        ] {
            blank_to_none(field);
        }
        out
    }
}

fn blank_to_none(field: &mut Option<String>) {
    if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *field = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_nulls_blank_optionals() {
        let mut resume = Resume::default();
        resume.personal_info.email = Some(String::new());
        resume.personal_info.linkedin = Some("  ".to_string());
        resume.personal_info.summary = Some("Keeps real text.".to_string());

        let normalized = resume.normalized();
        assert_eq!(normalized.personal_info.email, None);
        assert_eq!(normalized.personal_info.linkedin, None);
        assert_eq!(
            normalized.personal_info.summary.as_deref(),
            Some("Keeps real text.")
        );
        // The draft itself is untouched.
        assert_eq!(resume.personal_info.email.as_deref(), Some(""));
    }

    #[test]
    fn test_optional_lists_default_when_absent() {
        let json = r#"{
            "template_id": "2",
            "personal_info": {"full_name": "A", "email": null, "phone": ""},
            "education": [],
            "experience": [],
            "skills": [],
            "projects": []
        }"#;
        let resume: Resume = serde_json::from_str(json).unwrap();
        assert!(resume.certifications.is_empty());
        assert!(resume.references.is_empty());
        assert!(resume.languages.is_empty());
    }

    #[test]
    fn test_persisted_id_round_trips_under_wire_name() {
        let mut resume = Resume {
            template_id: "4".to_string(),
            ..Default::default()
        };
        resume.id = Some("68a309eb5bd4f4f3594268ca".to_string());

        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["_id"], "68a309eb5bd4f4f3594268ca");

        let back: Resume = serde_json::from_value(value).unwrap();
        assert_eq!(back.id, resume.id);
    }
}
