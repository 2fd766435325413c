//! Legal-profession layout. The designation line under the name is the
//! summary truncated at its first period, and a static professional
//! associations block always renders in the right column.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, designation_line, display_name, external_link, is_present, present,
};
use crate::render::html::{escape, HtmlWriter};

const LINKEDIN_PREFIX: &str = "https://www.linkedin.com/in/";

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="legal-professional-template""#);

    w.open(r#"div class="legal-header""#);
    w.open(r#"div class="header-top""#);
    w.leaf("h1", display_name(p));
    w.leaf(
        r#"p class="legal-designation""#,
        designation_line(p, "Attorney at Law | Legal Counsel"),
    );
    w.close("div");
    w.open(r#"div class="header-contact""#);
    w.open(r#"div class="contact-row""#);
    if let Some(email) = present(&p.email) {
        w.line(&format!(
            r#"<span class="contact-item"><strong>Email:</strong> {}</span>"#,
            escape(email)
        ));
    }
    if is_present(&p.phone) {
        w.line(&format!(
            r#"<span class="contact-item"><strong>Phone:</strong> {}</span>"#,
            escape(&p.phone)
        ));
    }
    w.close("div");
    w.open(r#"div class="contact-row""#);
    if let Some(location) = city_country(p) {
        w.line(&format!(
            r#"<span class="contact-item"><strong>Address:</strong> {}</span>"#,
            escape(&location)
        ));
    }
    if let Some(url) = present(&p.linkedin) {
        let handle = url.strip_prefix(LINKEDIN_PREFIX).unwrap_or(url);
        w.line(&format!(
            r#"<span class="contact-item"><strong>LinkedIn:</strong> {}</span>"#,
            external_link(url, handle)
        ));
    }
    w.close("div");
    w.close("div");
    w.close("div");

    w.open(r#"div class="legal-body""#);

    if let Some(summary) = present(&p.summary) {
        w.open(r#"section class="legal-section""#);
        section_title(&mut w, "Professional Profile");
        w.leaf(r#"p class="professional-profile""#, summary);
        w.close("section");
    }

    if !resume.experience.is_empty() {
        w.open(r#"section class="legal-section""#);
        section_title(&mut w, "Legal Experience");
        for exp in &resume.experience {
            w.open(r#"div class="legal-experience-item""#);
            w.open(r#"div class="exp-header""#);
            w.open(r#"div class="exp-title""#);
            w.leaf("h3", &exp.position);
            w.leaf(r#"p class="firm-name""#, &exp.company);
            if let Some(location) = present(&exp.location) {
                w.leaf(r#"p class="location""#, location);
            }
            w.close("div");
            w.leaf(
                r#"div class="exp-date""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            if is_present(&exp.description) {
                w.leaf(r#"p class="exp-description""#, &exp.description);
            }
            if !exp.achievements.is_empty() {
                w.open(r#"div class="case-highlights""#);
                w.leaf("h4", "Notable Cases & Achievements:");
                w.open(r#"ul class="legal-achievements""#);
                for achievement in &exp.achievements {
                    w.line(&format!(
                        r#"<li><span class="bullet">•</span>{}</li>"#,
                        escape(achievement)
                    ));
                }
                w.close("ul");
                w.close("div");
            }
            w.close("div");
        }
        w.close("section");
    }

    w.open(r#"div class="legal-grid""#);
    w.open(r#"div class="left-section""#);

    if !resume.education.is_empty() {
        w.open(r#"section class="legal-section""#);
        section_title(&mut w, "Education & Bar Admissions");
        for edu in &resume.education {
            w.open(r#"div class="education-item""#);
            w.leaf("h3", &edu.degree);
            if is_present(&edu.field_of_study) {
                w.leaf(r#"p class="specialization""#, &edu.field_of_study);
            }
            w.leaf(r#"p class="institution""#, &edu.institution);
            w.leaf(
                r#"p class="edu-date""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf(r#"p class="honors""#, &format!("GPA: {gpa}"));
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.skills.is_empty() {
        w.open(r#"section class="legal-section""#);
        section_title(&mut w, "Practice Areas & Expertise");
        w.open(r#"div class="practice-areas""#);
        for skill in &resume.skills {
            w.open(r#"div class="practice-item""#);
            w.leaf(r#"span class="practice-icon""#, "⚖");
            w.open(r#"div class="practice-details""#);
            w.leaf(r#"span class="practice-name""#, &skill.name);
            if let Some(level) = present(&skill.level) {
                w.leaf(r#"span class="expertise-level""#, level);
            }
            w.close("div");
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }
    w.close("div");

    w.open(r#"div class="right-section""#);
    if !resume.projects.is_empty() {
        w.open(r#"section class="legal-section""#);
        section_title(&mut w, "Notable Cases & Pro Bono Work");
        for project in &resume.projects {
            w.open(r#"div class="case-item""#);
            w.leaf("h3", &project.name);
            w.leaf(r#"p class="case-description""#, &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="case-areas""#);
                w.leaf("strong", "Areas of Law:");
                w.open(r#"div class="area-tags""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="area-tag""#, tech);
                }
                w.close("div");
                w.close("div");
            }
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "View Details →"));
            }
            w.close("div");
        }
        w.close("section");
    }

    // Static block: renders regardless of data.
    w.open(r#"section class="legal-section""#);
    section_title(&mut w, "Professional Associations");
    w.open(r#"div class="associations-list""#);
    association(&mut w, "🏛", "State Bar Association Member");
    association(&mut w, "📚", "Legal Research Society");
    association(&mut w, "⚖", "Professional Law Society");
    w.close("div");
    w.close("section");

    w.close("div");
    w.close("div");

    w.close("div");
    w.close("div");
    w.finish()
}

/// Headings in this layout are flanked by decorative rule lines.
fn section_title(w: &mut HtmlWriter, title: &str) {
    w.open(r#"h2 class="section-title""#);
    w.line(r#"<span class="title-line"></span>"#);
    w.text(title);
    w.line(r#"<span class="title-line"></span>"#);
    w.close("h2");
}

fn association(w: &mut HtmlWriter, icon: &str, name: &str) {
    w.open(r#"div class="association-item""#);
    w.leaf(r#"span class="assoc-icon""#, icon);
    w.leaf("span", name);
    w.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designation_truncates_summary_at_first_period() {
        let mut resume = Resume::default();
        resume.personal_info.summary = Some("Senior Engineer. Loves Go.".to_string());
        let html = render(&resume);
        assert!(html.contains(r#"<p class="legal-designation">Senior Engineer</p>"#));
        assert!(!html.contains(r#"<p class="legal-designation">Senior Engineer. Loves Go."#));
    }

    #[test]
    fn test_designation_fallback_when_summary_missing() {
        let html = render(&Resume::default());
        assert!(html.contains("Attorney at Law | Legal Counsel"));
    }

    #[test]
    fn test_associations_block_always_renders() {
        let html = render(&Resume::default());
        assert!(html.contains("State Bar Association Member"));
        assert!(html.contains("Legal Research Society"));
        assert!(html.contains("Professional Law Society"));
    }

    #[test]
    fn test_linkedin_handle_strips_www_prefix() {
        let mut resume = Resume::default();
        resume.personal_info.linkedin =
            Some("https://www.linkedin.com/in/catherinemorrison".to_string());
        let html = render(&resume);
        assert!(html.contains(">catherinemorrison</a>"));
    }
}
