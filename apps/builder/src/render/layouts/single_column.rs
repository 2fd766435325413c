//! Default single-column layout: header → summary → experience → education
//! → skills → projects. This is the fallback for every unrecognized
//! template id, so it must hold up no matter how little data is present.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, is_present, present,
};
use crate::render::html::{escape, HtmlWriter};

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="resume-preview""#);

    w.open(r#"div class="resume-header""#);
    w.leaf("h1", display_name(p));
    w.open(r#"div class="contact-info""#);
    if let Some(email) = present(&p.email) {
        w.leaf("span", email);
    }
    if is_present(&p.phone) {
        w.leaf("span", &p.phone);
    }
    if let Some(location) = city_country(p) {
        w.leaf("span", &location);
    }
    w.close("div");
    w.open(r#"div class="social-links""#);
    if let Some(url) = present(&p.linkedin) {
        w.line(&external_link(url, "LinkedIn"));
    }
    if let Some(url) = present(&p.github) {
        w.line(&external_link(url, "GitHub"));
    }
    if let Some(url) = present(&p.website) {
        w.line(&external_link(url, "Website"));
    }
    w.close("div");
    w.close("div");

    if let Some(summary) = present(&p.summary) {
        w.open(r#"section class="resume-section""#);
        w.leaf("h2", "Professional Summary");
        w.leaf("p", summary);
        w.close("section");
    }

    if !resume.experience.is_empty() {
        w.open(r#"section class="resume-section""#);
        w.leaf("h2", "Experience");
        for exp in &resume.experience {
            w.open(r#"div class="experience-item""#);
            w.open(r#"div class="experience-header""#);
            w.leaf("h3", &exp.position);
            w.leaf(
                r#"span class="date-range""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            w.open(r#"div class="company-location""#);
            w.leaf("strong", &exp.company);
            if let Some(location) = present(&exp.location) {
                w.leaf("span", &format!(" | {location}"));
            }
            w.close("div");
            w.leaf("p", &exp.description);
            if !exp.achievements.is_empty() {
                w.open("ul");
                for achievement in &exp.achievements {
                    w.leaf("li", achievement);
                }
                w.close("ul");
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.education.is_empty() {
        w.open(r#"section class="resume-section""#);
        w.leaf("h2", "Education");
        for edu in &resume.education {
            w.open(r#"div class="education-item""#);
            w.open(r#"div class="education-header""#);
            w.leaf("h3", &format!("{} in {}", edu.degree, edu.field_of_study));
            w.leaf(
                r#"span class="date-range""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            w.close("div");
            w.leaf("strong", &edu.institution);
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf("p", &format!("GPA: {gpa}"));
            }
            if let Some(description) = present(&edu.description) {
                w.leaf("p", description);
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.skills.is_empty() {
        w.open(r#"section class="resume-section""#);
        w.leaf("h2", "Skills");
        w.open(r#"div class="skills-list""#);
        for skill in &resume.skills {
            w.open(r#"span class="skill-item""#);
            w.text(&skill.name);
            if let Some(level) = present(&skill.level) {
                w.leaf(r#"span class="skill-level""#, &format!(" ({level})"));
            }
            w.close("span");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.projects.is_empty() {
        w.open(r#"section class="resume-section""#);
        w.leaf("h2", "Projects");
        for project in &resume.projects {
            w.open(r#"div class="project-item""#);
            w.leaf("h3", &project.name);
            w.leaf("p", &project.description);
            if !project.technologies.is_empty() {
                w.line(&format!(
                    r#"<div class="project-tech"><strong>Technologies:</strong> {}</div>"#,
                    escape(&project.technologies.join(", "))
                ));
            }
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "View Project"));
            }
            w.close("div");
        }
        w.close("section");
    }

    w.close("div");
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, Experience};

    #[test]
    fn test_empty_resume_shows_only_placeholder_header() {
        let html = render(&Resume::default());
        assert!(html.contains("Your Name"));
        assert!(!html.contains("Professional Summary"));
        assert!(!html.contains("<h2>Experience</h2>"));
        assert!(!html.contains("<h2>Education</h2>"));
    }

    #[test]
    fn test_current_experience_renders_present() {
        let mut resume = Resume::default();
        resume.experience.push(Experience {
            company: "TechCorp Inc.".to_string(),
            position: "Senior Software Engineer".to_string(),
            start_date: "2021".to_string(),
            end_date: Some("2024".to_string()),
            current: true,
            description: "Microservices.".to_string(),
            ..Default::default()
        });
        let html = render(&resume);
        assert!(html.contains("2021 - Present"));
        assert!(!html.contains("2021 - 2024"));
    }

    #[test]
    fn test_empty_end_date_prints_next_to_separator() {
        let mut resume = Resume::default();
        resume.education.push(Education {
            institution: "UC Berkeley".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Software Engineering".to_string(),
            start_date: "2012".to_string(),
            end_date: Some(String::new()),
            current: false,
            ..Default::default()
        });
        let html = render(&resume);
        assert!(html.contains("2012 - </span>"));
    }
}
