//! Developer-oriented sidebar layout: avatar initials, contact, skill
//! bars, and education on the left; experience and a project grid on the
//! right. One of the two layouts that encode proficiency as a bar width.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, initials, is_present, present,
    skill_level_width, summary_or,
};
use crate::render::html::{escape, HtmlWriter};

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    let avatar_source = if is_present(&p.full_name) {
        p.full_name.as_str()
    } else {
        "YN"
    };

    w.open(r#"div class="tech-sidebar-template""#);

    w.open(r#"div class="tech-left-sidebar""#);
    w.open(r#"div class="tech-profile""#);
    w.open(r#"div class="tech-avatar""#);
    w.leaf("span", &initials(avatar_source));
    w.close("div");
    w.leaf("h1", display_name(p));
    w.leaf(r#"p class="tech-role""#, summary_or(p, "Software Developer"));
    w.close("div");

    w.open(r#"div class="tech-sidebar-section""#);
    w.line(r#"<h3><span class="section-icon">📧</span> CONTACT</h3>"#);
    w.open(r#"div class="tech-contact-list""#);
    if let Some(email) = present(&p.email) {
        w.line(&format!(
            r#"<div class="tech-contact-item"><strong>Email:</strong> {}</div>"#,
            escape(email)
        ));
    }
    if is_present(&p.phone) {
        w.line(&format!(
            r#"<div class="tech-contact-item"><strong>Phone:</strong> {}</div>"#,
            escape(&p.phone)
        ));
    }
    if let Some(location) = city_country(p) {
        w.line(&format!(
            r#"<div class="tech-contact-item"><strong>Location:</strong> {}</div>"#,
            escape(&location)
        ));
    }
    if let Some(url) = present(&p.linkedin) {
        w.line(&format!(
            r#"<div class="tech-contact-item"><strong>LinkedIn:</strong> {}</div>"#,
            external_link(url, "Profile")
        ));
    }
    if let Some(url) = present(&p.github) {
        w.line(&format!(
            r#"<div class="tech-contact-item"><strong>GitHub:</strong> {}</div>"#,
            external_link(url, "Portfolio")
        ));
    }
    w.close("div");
    w.close("div");

    if !resume.skills.is_empty() {
        w.open(r#"div class="tech-sidebar-section""#);
        w.line(r#"<h3><span class="section-icon">⚡</span> TECHNICAL SKILLS</h3>"#);
        w.open(r#"div class="tech-skills-list""#);
        for skill in &resume.skills {
            w.open(r#"div class="tech-skill-item""#);
            w.leaf(r#"span class="skill-name""#, &skill.name);
            if let Some(level) = present(&skill.level) {
                w.open(r#"div class="skill-level""#);
                w.open(r#"div class="skill-bar""#);
                w.line(&format!(
                    r#"<div class="skill-progress" style="width: {}"></div>"#,
                    skill_level_width(Some(level))
                ));
                w.close("div");
                w.close("div");
            }
            w.close("div");
        }
        w.close("div");
        w.close("div");
    }

    if !resume.education.is_empty() {
        w.open(r#"div class="tech-sidebar-section""#);
        w.line(r#"<h3><span class="section-icon">🎓</span> EDUCATION</h3>"#);
        for edu in &resume.education {
            w.open(r#"div class="tech-education-item""#);
            w.leaf("h4", &edu.degree);
            w.leaf("p", &edu.field_of_study);
            w.leaf("strong", &edu.institution);
            w.leaf(
                r#"div class="tech-edu-year""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf(r#"div class="tech-gpa""#, &format!("GPA: {gpa}"));
            }
            w.close("div");
        }
        w.close("div");
    }
    w.close("div");

    w.open(r#"div class="tech-main-content""#);

    if !resume.experience.is_empty() {
        w.open(r#"section class="tech-main-section""#);
        section_title(&mut w, "EXPERIENCE");
        for exp in &resume.experience {
            w.open(r#"div class="tech-experience-item""#);
            w.open(r#"div class="tech-exp-header""#);
            w.open("div");
            w.leaf("h3", &exp.position);
            w.open(r#"div class="tech-company""#);
            w.leaf("strong", &exp.company);
            if let Some(location) = present(&exp.location) {
                w.leaf("span", &format!(" | {location}"));
            }
            w.close("div");
            w.close("div");
            w.leaf(
                r#"div class="tech-date-badge""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            w.leaf(r#"p class="tech-description""#, &exp.description);
            if !exp.achievements.is_empty() {
                w.open(r#"ul class="tech-achievements""#);
                for achievement in &exp.achievements {
                    w.line(&format!(
                        r#"<li><span class="achievement-bullet">▸</span>{}</li>"#,
                        escape(achievement)
                    ));
                }
                w.close("ul");
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.projects.is_empty() {
        w.open(r#"section class="tech-main-section""#);
        section_title(&mut w, "PROJECTS");
        w.open(r#"div class="tech-projects-grid""#);
        for project in &resume.projects {
            w.open(r#"div class="tech-project-card""#);
            w.open(r#"div class="project-header""#);
            w.leaf("h3", &project.name);
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "🔗"));
            }
            w.close("div");
            w.leaf(r#"p class="project-description""#, &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="tech-stack""#);
                w.leaf(r#"div class="tech-stack-label""#, "Tech Stack:");
                w.open(r#"div class="tech-tags""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="tech-tag""#, tech);
                }
                w.close("div");
                w.close("div");
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

/// Headings in this layout are bracketed like a tag: `<EXPERIENCE/>`.
fn section_title(w: &mut HtmlWriter, title: &str) {
    w.open(r#"h2 class="tech-section-title""#);
    w.leaf(r#"span class="title-bracket""#, "<");
    w.text(title);
    w.leaf(r#"span class="title-bracket""#, "/>");
    w.close("h2");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn skill(name: &str, level: Option<&str>) -> Skill {
        Skill {
            name: name.to_string(),
            level: level.map(|l| l.to_string()),
        }
    }

    #[test]
    fn test_skill_bar_widths_follow_the_exact_mapping() {
        let mut resume = Resume::default();
        resume.skills = vec![
            skill("JavaScript", Some("Expert")),
            skill("Node.js", Some("Advanced")),
            skill("AWS", Some("Intermediate")),
            skill("COBOL", Some("Dabbling")),
        ];
        let html = render(&resume);
        assert!(html.contains("width: 100%"));
        assert!(html.contains("width: 80%"));
        assert!(html.contains("width: 60%"));
        assert!(html.contains("width: 40%"));
    }

    #[test]
    fn test_skill_without_level_renders_no_bar() {
        let mut resume = Resume::default();
        resume.skills = vec![skill("Git", None)];
        let html = render(&resume);
        assert!(html.contains("Git"));
        assert!(!html.contains("skill-progress"));
    }

    #[test]
    fn test_avatar_fallback_runs_through_the_initials_derivation() {
        // The fallback string is "YN", which the initials derivation then
        // reduces to "Y".
        let html = render(&Resume::default());
        assert!(html.contains("<span>Y</span>"));
    }
}
