//! Academic CV layout. Education leads, projects double as a publications
//! section, and the optional lists (certifications, languages, references)
//! get their own two-column block at the bottom. The headline is derived
//! from the first experience entry's position.

use crate::models::Resume;
use crate::render::helpers::{
    date_range, display_name, experience_headline, external_link, is_present, present,
};
use crate::render::html::{escape, HtmlWriter};

const LINKEDIN_PREFIX: &str = "https://linkedin.com/in/";

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="academic-scholar-template""#);

    w.open(r#"div class="academic-header""#);
    w.leaf(r#"h1 class="scholar-name""#, display_name(p));
    w.leaf(
        r#"div class="academic-title""#,
        experience_headline(resume, "Academic Professional"),
    );

    w.open(r#"div class="contact-info-row""#);
    if let Some(email) = present(&p.email) {
        w.line(&format!(
            r#"<span class="contact-detail"><span class="label">Email:</span> {}</span>"#,
            escape(email)
        ));
    }
    if is_present(&p.phone) {
        w.line(&format!(
            r#"<span class="contact-detail"><span class="label">Phone:</span> {}</span>"#,
            escape(&p.phone)
        ));
    }
    if let Some(url) = present(&p.linkedin) {
        let handle = url.strip_prefix(LINKEDIN_PREFIX).unwrap_or(url);
        w.line(&format!(
            r#"<span class="contact-detail"><span class="label">LinkedIn:</span>{}</span>"#,
            external_link(url, handle)
        ));
    }
    w.close("div");

    w.open(r#"div class="address-row""#);
    let address = present(&p.address);
    let city = present(&p.city);
    let country = present(&p.country);
    if address.is_some() || city.is_some() || country.is_some() {
        let mut line = String::new();
        if let Some(address) = address {
            line.push_str(&format!("{address}, "));
        }
        if let Some(city) = city {
            line.push_str(&format!("{city}, "));
        }
        if let Some(country) = country {
            line.push_str(country);
        }
        if let Some(postal_code) = present(&p.postal_code) {
            line.push_str(&format!(" {postal_code}"));
        }
        w.leaf(r#"span class="address-detail""#, &line);
    }
    if let Some(url) = present(&p.website) {
        w.line(&format!(
            r#"<span class="website-detail"><span class="label">Website:</span>{}</span>"#,
            external_link(url, url)
        ));
    }
    w.close("div");
    w.close("div");

    w.open(r#"div class="academic-body""#);

    if let Some(summary) = present(&p.summary) {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "PROFESSIONAL PROFILE");
        w.leaf(r#"p class="summary-text""#, summary);
        w.close("section");
    }

    if !resume.education.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "EDUCATION");
        for edu in &resume.education {
            w.open(r#"div class="education-entry""#);
            w.open(r#"div class="edu-header""#);
            w.open(r#"div class="edu-title""#);
            w.leaf(r#"strong class="degree-name""#, &edu.degree);
            if is_present(&edu.field_of_study) {
                w.leaf(
                    r#"span class="field-study""#,
                    &format!(" in {}", edu.field_of_study),
                );
            }
            w.close("div");
            w.leaf(
                r#"div class="edu-dates""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "–"),
            );
            w.close("div");
            w.leaf(r#"div class="institution-name""#, &edu.institution);
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf(r#"div class="edu-details""#, &format!("GPA: {gpa}"));
            }
            if let Some(description) = present(&edu.description) {
                w.leaf(r#"div class="edu-description""#, description);
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.experience.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(
            r#"h2 class="section-heading""#,
            "ACADEMIC & PROFESSIONAL EXPERIENCE",
        );
        for exp in &resume.experience {
            w.open(r#"div class="experience-entry""#);
            w.open(r#"div class="exp-header""#);
            w.open(r#"div class="exp-title""#);
            w.leaf(r#"strong class="position-name""#, &exp.position);
            w.close("div");
            w.leaf(
                r#"div class="exp-dates""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "–"),
            );
            w.close("div");
            w.open(r#"div class="institution-employer""#);
            w.text(&exp.company);
            if let Some(location) = present(&exp.location) {
                w.leaf(r#"span class="location""#, &format!(" • {location}"));
            }
            w.close("div");
            if is_present(&exp.description) {
                w.leaf(r#"p class="exp-description""#, &exp.description);
            }
            if !exp.achievements.is_empty() {
                w.open(r#"ul class="achievements-list""#);
                for achievement in &exp.achievements {
                    w.leaf("li", achievement);
                }
                w.close("ul");
            }
            w.close("div");
        }
        w.close("section");
    }

    // Projects double as publications in the academic context.
    if !resume.projects.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "RESEARCH & PUBLICATIONS");
        for project in &resume.projects {
            w.open(r#"div class="publication-entry""#);
            w.open(r#"div class="pub-title""#);
            w.leaf("strong", &project.name);
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "[Link]"));
            }
            w.close("div");
            w.leaf(r#"div class="pub-description""#, &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="pub-keywords""#);
                w.leaf(r#"span class="keywords-label""#, "Keywords:");
                let last = project.technologies.len() - 1;
                for (i, tech) in project.technologies.iter().enumerate() {
                    let text = if i < last {
                        format!("{tech}, ")
                    } else {
                        tech.clone()
                    };
                    w.leaf(r#"span class="keyword""#, &text);
                }
                w.close("div");
            }
            let start = present(&project.start_date);
            let end = present(&project.end_date);
            if start.is_some() || end.is_some() {
                w.leaf(r#"div class="pub-date""#, end.or(start).unwrap_or(""));
            }
            w.close("div");
        }
        w.close("section");
    }

    w.open(r#"div class="academic-columns""#);
    w.open(r#"div class="left-column""#);
    if !resume.skills.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "AREAS OF EXPERTISE");
        w.open(r#"div class="expertise-grid""#);
        for skill in &resume.skills {
            w.open(r#"div class="expertise-item""#);
            w.leaf(r#"span class="expertise-name""#, &skill.name);
            if let Some(level) = present(&skill.level) {
                w.leaf(r#"span class="expertise-level""#, &format!("({level})"));
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.certifications.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "CERTIFICATIONS & HONORS");
        for cert in &resume.certifications {
            w.open(r#"div class="certification-entry""#);
            w.leaf(r#"div class="cert-title""#, &cert.name);
            w.leaf(
                r#"div class="cert-details""#,
                &format!("{} • {}", cert.issuer, cert.date),
            );
            if let Some(url) = present(&cert.url) {
                w.line(&external_link(url, "View Certificate"));
            }
            w.close("div");
        }
        w.close("section");
    }
    w.close("div");

    w.open(r#"div class="right-column""#);
    if !resume.languages.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "LANGUAGES");
        w.open(r#"div class="languages-grid""#);
        for lang in &resume.languages {
            w.open(r#"div class="language-entry""#);
            w.leaf(r#"span class="lang-name""#, &lang.name);
            w.leaf(r#"span class="lang-level""#, &lang.proficiency);
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.references.is_empty() {
        w.open(r#"section class="academic-section""#);
        w.leaf(r#"h2 class="section-heading""#, "REFERENCES");
        for reference in &resume.references {
            w.open(r#"div class="reference-entry""#);
            w.leaf(r#"div class="ref-name""#, &reference.name);
            w.leaf(r#"div class="ref-position""#, &reference.position);
            w.leaf(r#"div class="ref-company""#, &reference.company);
            if let Some(email) = present(&reference.email) {
                w.leaf(r#"div class="ref-contact""#, &format!("Email: {email}"));
            }
            if let Some(phone) = present(&reference.phone) {
                w.leaf(r#"div class="ref-contact""#, &format!("Phone: {phone}"));
            }
            w.close("div");
        }
        w.close("section");
    }
    w.close("div");
    w.close("div");

    w.close("div");
    w.close("div");
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, Project};

    #[test]
    fn test_headline_comes_from_first_experience_position() {
        let mut resume = Resume::default();
        resume.experience.push(Experience {
            company: "Harvard University".to_string(),
            position: "Professor of Computer Science".to_string(),
            start_date: "2018".to_string(),
            current: true,
            description: "Research and teaching.".to_string(),
            ..Default::default()
        });
        let html = render(&resume);
        assert!(html.contains("Professor of Computer Science"));
    }

    #[test]
    fn test_headline_fallback_without_experience() {
        let html = render(&Resume::default());
        assert!(html.contains("Academic Professional"));
    }

    #[test]
    fn test_linkedin_handle_strips_profile_prefix() {
        let mut resume = Resume::default();
        resume.personal_info.linkedin =
            Some("https://linkedin.com/in/jonathanpierce".to_string());
        let html = render(&resume);
        assert!(html.contains(">jonathanpierce</a>"));
    }

    #[test]
    fn test_publication_date_prefers_end_date() {
        let mut resume = Resume::default();
        resume.projects.push(Project {
            name: "Neural Language Model".to_string(),
            description: "Novel architecture.".to_string(),
            start_date: Some("2022".to_string()),
            end_date: Some("2024".to_string()),
            ..Default::default()
        });
        let html = render(&resume);
        assert!(html.contains(r#"<div class="pub-date">2024</div>"#));
    }
}
