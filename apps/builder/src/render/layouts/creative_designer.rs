//! Creative sidebar layout: initials badge, contact, skills, and education
//! in the sidebar; experience and projects in the main column.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, initials, is_present, present,
    summary_or,
};
use crate::render::html::HtmlWriter;

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="creative-designer-template""#);

    w.open(r#"div class="creative-sidebar""#);
    w.open(r#"div class="creative-header""#);
    w.open(r#"div class="profile-circle""#);
    w.leaf("h1", &initials(display_name(p)));
    w.close("div");
    w.leaf("h2", display_name(p));
    w.leaf(
        r#"div class="creative-subtitle""#,
        summary_or(p, "Creative Professional"),
    );
    w.close("div");

    w.open(r#"div class="sidebar-content""#);
    w.open(r#"section class="sidebar-section""#);
    w.leaf("h3", "CONTACT");
    w.open(r#"div class="contact-list""#);
    if let Some(email) = present(&p.email) {
        contact_item(&mut w, "✉", email);
    }
    if is_present(&p.phone) {
        contact_item(&mut w, "☎", &p.phone);
    }
    if let Some(location) = city_country(p) {
        contact_item(&mut w, "📍", &location);
    }
    if let Some(url) = present(&p.linkedin) {
        contact_link(&mut w, "💼", url, "LinkedIn");
    }
    if let Some(url) = present(&p.github) {
        contact_link(&mut w, "💻", url, "GitHub");
    }
    w.close("div");
    w.close("section");

    if !resume.skills.is_empty() {
        w.open(r#"section class="sidebar-section""#);
        w.leaf("h3", "SKILLS");
        w.open(r#"div class="skills-creative""#);
        for skill in &resume.skills {
            w.leaf(r#"div class="creative-skill-tag""#, &skill.name);
        }
        w.close("div");
        w.close("section");
    }

    if !resume.education.is_empty() {
        w.open(r#"section class="sidebar-section""#);
        w.leaf("h3", "EDUCATION");
        for edu in &resume.education {
            w.open(r#"div class="sidebar-education-item""#);
            w.leaf("h4", &edu.degree);
            w.leaf("p", &edu.field_of_study);
            w.leaf("strong", &edu.institution);
            w.leaf(
                r#"div class="edu-year""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            w.close("div");
        }
        w.close("section");
    }
    w.close("div");
    w.close("div");

    w.open(r#"div class="creative-main""#);

    if !resume.experience.is_empty() {
        w.open(r#"section class="main-section""#);
        w.open(r#"h2 class="main-title""#);
        w.leaf(r#"span class="title-icon""#, "💼");
        w.text("EXPERIENCE");
        w.close("h2");
        for exp in &resume.experience {
            w.open(r#"div class="creative-experience-item""#);
            w.open(r#"div class="exp-header""#);
            w.leaf("h3", &exp.position);
            w.open(r#"div class="exp-company-date""#);
            w.leaf("strong", &exp.company);
            w.leaf(
                r#"span class="exp-date""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            w.close("div");
            w.leaf(r#"p class="exp-description""#, &exp.description);
            if !exp.achievements.is_empty() {
                w.open(r#"ul class="creative-achievements""#);
                for achievement in &exp.achievements {
                    w.leaf("li", achievement);
                }
                w.close("ul");
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.projects.is_empty() {
        w.open(r#"section class="main-section""#);
        w.open(r#"h2 class="main-title""#);
        w.leaf(r#"span class="title-icon""#, "🚀");
        w.text("PROJECTS");
        w.close("h2");
        w.open(r#"div class="projects-creative-grid""#);
        for project in &resume.projects {
            w.open(r#"div class="creative-project-card""#);
            w.leaf("h3", &project.name);
            w.leaf("p", &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="project-tech-tags""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="tech-tag""#, tech);
                }
                w.close("div");
            }
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "View Project →"));
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    w.close("div");
    w.close("div");
    w.finish()
}

fn contact_item(w: &mut HtmlWriter, icon: &str, value: &str) {
    w.open(r#"div class="contact-item""#);
    w.leaf(r#"span class="contact-icon""#, icon);
    w.leaf("span", value);
    w.close("div");
}

fn contact_link(w: &mut HtmlWriter, icon: &str, url: &str, label: &str) {
    w.open(r#"div class="contact-item""#);
    w.leaf(r#"span class="contact-icon""#, icon);
    w.line(&external_link(url, label));
    w.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_badge_from_name() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Sofia Rodriguez".to_string();
        let html = render(&resume);
        assert!(html.contains("<h1>SR</h1>"));
    }

    #[test]
    fn test_empty_name_still_produces_badge() {
        let html = render(&Resume::default());
        // "Your Name" → "YN"
        assert!(html.contains("<h1>YN</h1>"));
        assert!(html.contains("Creative Professional"));
    }
}
