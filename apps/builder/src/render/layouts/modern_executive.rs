//! Executive layout: full-width timeline experience, then education and
//! core competencies side by side, then a project grid. The header title
//! line reuses the whole professional summary.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, is_present, present, summary_or,
};
use crate::render::html::{escape, HtmlWriter};

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="modern-executive-template""#);

    w.open(r#"div class="executive-header""#);
    w.open(r#"div class="header-content""#);
    w.open(r#"div class="executive-name""#);
    w.leaf("h1", display_name(p));
    w.leaf(
        r#"div class="executive-title""#,
        summary_or(p, "Professional Title"),
    );
    w.close("div");
    w.open(r#"div class="executive-contact""#);
    if let Some(email) = present(&p.email) {
        w.leaf(r#"div class="contact-item""#, &format!("📧 {email}"));
    }
    if is_present(&p.phone) {
        w.leaf(r#"div class="contact-item""#, &format!("📞 {}", p.phone));
    }
    if let Some(location) = city_country(p) {
        w.leaf(r#"div class="contact-item""#, &format!("📍 {location}"));
    }
    if let Some(url) = present(&p.linkedin) {
        w.line(&format!(
            r#"<div class="contact-item">💼 {}</div>"#,
            external_link(url, "LinkedIn")
        ));
    }
    w.close("div");
    w.close("div");
    w.close("div");

    w.open(r#"div class="executive-content""#);

    if !resume.experience.is_empty() {
        w.open(r#"section class="executive-section""#);
        w.leaf(r#"h2 class="section-title""#, "PROFESSIONAL EXPERIENCE");
        w.open(r#"div class="section-content""#);
        for exp in &resume.experience {
            w.open(r#"div class="executive-experience-item""#);
            w.open(r#"div class="experience-timeline""#);
            w.line(r#"<div class="timeline-dot"></div>"#);
            w.line(r#"<div class="timeline-line"></div>"#);
            w.close("div");
            w.open(r#"div class="experience-details""#);
            w.open(r#"div class="experience-header""#);
            w.leaf("h3", &exp.position);
            w.open(r#"div class="experience-meta""#);
            w.leaf("strong", &exp.company);
            w.leaf(
                r#"span class="date-range""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            w.close("div");
            w.leaf(r#"p class="experience-description""#, &exp.description);
            if !exp.achievements.is_empty() {
                w.open(r#"ul class="achievements-list""#);
                for achievement in &exp.achievements {
                    w.leaf("li", achievement);
                }
                w.close("ul");
            }
            w.close("div");
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    w.open(r#"div class="executive-two-column""#);
    if !resume.education.is_empty() {
        w.open(r#"section class="executive-section""#);
        w.leaf(r#"h2 class="section-title""#, "EDUCATION");
        w.open(r#"div class="section-content""#);
        for edu in &resume.education {
            w.open(r#"div class="executive-education-item""#);
            w.leaf("h3", &format!("{} in {}", edu.degree, edu.field_of_study));
            w.open(r#"div class="education-details""#);
            w.leaf("strong", &edu.institution);
            w.leaf(
                r#"span class="education-date""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            w.close("div");
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf("p", &format!("GPA: {gpa}"));
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.skills.is_empty() {
        w.open(r#"section class="executive-section""#);
        w.leaf(r#"h2 class="section-title""#, "CORE COMPETENCIES");
        w.open(r#"div class="section-content""#);
        w.open(r#"div class="executive-skills-grid""#);
        for skill in &resume.skills {
            w.leaf(r#"div class="executive-skill-item""#, &skill.name);
        }
        w.close("div");
        w.close("div");
        w.close("section");
    }
    w.close("div");

    if !resume.projects.is_empty() {
        w.open(r#"section class="executive-section""#);
        w.leaf(r#"h2 class="section-title""#, "KEY PROJECTS");
        w.open(r#"div class="section-content""#);
        w.open(r#"div class="projects-grid""#);
        for project in &resume.projects {
            w.open(r#"div class="executive-project-item""#);
            w.leaf("h3", &project.name);
            w.leaf("p", &project.description);
            if !project.technologies.is_empty() {
                w.line(&format!(
                    r#"<div class="project-technologies">{}</div>"#,
                    escape(&project.technologies.join(" • "))
                ));
            }
            w.close("div");
        }
        w.close("div");
        w.close("div");
        w.close("section");
    }

    w.close("div");
    w.close("div");
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_line_falls_back_without_summary() {
        let html = render(&Resume::default());
        assert!(html.contains("Professional Title"));
        assert!(html.contains("Your Name"));
    }

    #[test]
    fn test_title_line_uses_whole_summary() {
        let mut resume = Resume::default();
        resume.personal_info.summary =
            Some("Visionary C-Level Executive. Proven track record.".to_string());
        let html = render(&resume);
        // This layout does not truncate at the first period.
        assert!(html.contains("Visionary C-Level Executive. Proven track record."));
    }
}
