//! Seed data provider: complete, realistic records used for previews
//! before any user editing has happened.
//!
//! Two independently-maintained lookup tables serve different call sites:
//! the builder page seeds by template id ([`for_template`]), the gallery
//! and full-page preview seed by template category ([`for_category`]).
//! Their value sets are allowed to diverge; do not unify them.

pub mod by_category;
pub mod by_template;

pub use by_category::for_category;
pub use by_template::for_template;

use crate::models::{Certification, Education, Experience, Language, Project, Reference, Skill};

fn opt(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn skill(name: &str, level: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level: opt(level),
    }
}

fn language(name: &str, proficiency: &str) -> Language {
    Language {
        name: name.to_string(),
        proficiency: proficiency.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn education(
    degree: &str,
    field_of_study: &str,
    institution: &str,
    start_date: &str,
    end_date: &str,
    current: bool,
    gpa: &str,
    description: &str,
) -> Education {
    Education {
        institution: institution.to_string(),
        degree: degree.to_string(),
        field_of_study: field_of_study.to_string(),
        start_date: start_date.to_string(),
        end_date: Some(end_date.to_string()),
        current,
        gpa: opt(gpa),
        description: opt(description),
    }
}

#[allow(clippy::too_many_arguments)]
fn experience(
    position: &str,
    company: &str,
    location: &str,
    start_date: &str,
    end_date: &str,
    current: bool,
    description: &str,
    achievements: &[&str],
) -> Experience {
    Experience {
        company: company.to_string(),
        position: position.to_string(),
        location: opt(location),
        start_date: start_date.to_string(),
        end_date: Some(end_date.to_string()),
        current,
        description: description.to_string(),
        achievements: strings(achievements),
    }
}

fn project(
    name: &str,
    description: &str,
    technologies: &[&str],
    link: &str,
    start_date: &str,
    end_date: &str,
) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        link: opt(link),
        start_date: opt(start_date),
        end_date: opt(end_date),
    }
}

fn certification(
    name: &str,
    issuer: &str,
    date: &str,
    credential_id: &str,
    url: &str,
) -> Certification {
    Certification {
        name: name.to_string(),
        issuer: issuer.to_string(),
        date: date.to_string(),
        credential_id: opt(credential_id),
        url: opt(url),
    }
}

fn reference(
    name: &str,
    position: &str,
    company: &str,
    email: &str,
    phone: &str,
    relationship: &str,
) -> Reference {
    Reference {
        name: name.to_string(),
        position: position.to_string(),
        company: company.to_string(),
        email: opt(email),
        phone: opt(phone),
        relationship: opt(relationship),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resume;

    fn assert_fully_populated(resume: &Resume, label: &str) {
        assert!(
            !resume.personal_info.full_name.is_empty(),
            "{label}: name missing"
        );
        assert!(!resume.education.is_empty(), "{label}: education empty");
        assert!(!resume.experience.is_empty(), "{label}: experience empty");
        assert!(!resume.skills.is_empty(), "{label}: skills empty");
        assert!(!resume.projects.is_empty(), "{label}: projects empty");
        assert!(!resume.languages.is_empty(), "{label}: languages empty");
        assert!(
            !resume.certifications.is_empty(),
            "{label}: certifications empty"
        );
        assert!(!resume.references.is_empty(), "{label}: references empty");
    }

    #[test]
    fn test_every_template_seed_populates_every_section() {
        for id in ["2", "3", "4", "5", "11", "unknown-id"] {
            assert_fully_populated(&for_template(id), &format!("template {id}"));
        }
    }

    #[test]
    fn test_every_category_seed_populates_every_section() {
        for category in ["Finance", "Sales", "Legal", "Technology", "Other"] {
            assert_fully_populated(
                &for_category(category, "1"),
                &format!("category {category}"),
            );
        }
    }

    #[test]
    fn test_unknown_template_id_yields_generic_record() {
        let resume = for_template("no-such-template");
        assert_eq!(resume.personal_info.full_name, "Your Name");
        assert_eq!(
            resume.personal_info.summary.as_deref(),
            Some("Write a compelling professional summary that highlights your key skills and career objectives.")
        );
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let a = for_template("2");
        let b = for_template("2");
        assert_eq!(a, b);
        let c = for_category("Finance", "9");
        let d = for_category("Finance", "9");
        assert_eq!(c, d);
    }

    #[test]
    fn test_the_two_tables_diverge_deliberately() {
        // Same profession, different call sites, different curated people.
        let by_id = for_template("11");
        let by_cat = for_category("Legal", "11");
        assert_ne!(
            by_id.personal_info.full_name,
            by_cat.personal_info.full_name
        );
    }
}
