//! Finance-profession layout. Skills are split into two sub-groups purely
//! by index parity — even indices under "Technical Skills", odd indices
//! under "Software & Tools" — with no semantic tagging behind the split.

use crate::models::{Resume, Skill};
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, is_present, present, summary_or,
};
use crate::render::html::HtmlWriter;

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="professional-accountant-template""#);

    w.open(r#"div class="accountant-header""#);
    w.open(r#"div class="header-main""#);
    w.leaf("h1", display_name(p));
    w.leaf(
        r#"p class="professional-title""#,
        summary_or(p, "Chartered Accountant | Financial Professional"),
    );
    w.close("div");
    w.open(r#"div class="header-contact""#);
    w.open(r#"div class="contact-grid""#);
    if let Some(email) = present(&p.email) {
        labeled_contact(&mut w, "Email:", email);
    }
    if is_present(&p.phone) {
        labeled_contact(&mut w, "Phone:", &p.phone);
    }
    if let Some(location) = city_country(p) {
        labeled_contact(&mut w, "Location:", &location);
    }
    if let Some(url) = present(&p.linkedin) {
        w.open(r#"div class="contact-item""#);
        w.leaf(r#"span class="contact-label""#, "LinkedIn:");
        w.line(&external_link(url, "Profile"));
        w.close("div");
    }
    w.close("div");
    w.close("div");
    w.close("div");

    w.open(r#"div class="accountant-body""#);

    if let Some(summary) = present(&p.summary) {
        w.open(r#"section class="accountant-section""#);
        section_title(&mut w, "📊", "Professional Summary");
        w.leaf(r#"p class="professional-summary""#, summary);
        w.close("section");
    }

    if !resume.experience.is_empty() {
        w.open(r#"section class="accountant-section""#);
        section_title(&mut w, "💼", "Professional Experience");
        for exp in &resume.experience {
            w.open(r#"div class="experience-item""#);
            w.open(r#"div class="exp-header""#);
            w.open(r#"div class="exp-title""#);
            w.leaf("h3", &exp.position);
            w.leaf(r#"p class="company-name""#, &exp.company);
            w.close("div");
            w.open(r#"div class="exp-period""#);
            w.leaf(
                r#"span class="date-badge""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            if let Some(location) = present(&exp.location) {
                w.leaf(r#"span class="location""#, location);
            }
            w.close("div");
            w.close("div");
            if is_present(&exp.description) {
                w.leaf(r#"p class="exp-description""#, &exp.description);
            }
            if !exp.achievements.is_empty() {
                w.open(r#"div class="key-achievements""#);
                w.leaf("h4", "Key Achievements:");
                w.open(r#"ul class="achievements-list""#);
                for achievement in &exp.achievements {
                    w.leaf("li", achievement);
                }
                w.close("ul");
                w.close("div");
            }
            w.close("div");
        }
        w.close("section");
    }

    w.open(r#"div class="two-column-section""#);
    w.open(r#"div class="left-column""#);

    if !resume.education.is_empty() {
        w.open(r#"section class="accountant-section""#);
        section_title(&mut w, "🎓", "Education & Certifications");
        for edu in &resume.education {
            w.open(r#"div class="education-item""#);
            w.leaf("h3", &edu.degree);
            if is_present(&edu.field_of_study) {
                w.leaf(r#"p class="field""#, &edu.field_of_study);
            }
            w.leaf(r#"p class="institution""#, &edu.institution);
            w.leaf(
                r#"p class="edu-period""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf(r#"p class="gpa""#, &format!("GPA: {gpa}"));
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.skills.is_empty() {
        w.open(r#"section class="accountant-section""#);
        section_title(&mut w, "🔧", "Professional Skills");
        w.open(r#"div class="skills-categories""#);
        skill_category(&mut w, "Technical Skills", &resume.skills, 0);
        skill_category(&mut w, "Software & Tools", &resume.skills, 1);
        w.close("div");
        w.close("section");
    }
    w.close("div");

    w.open(r#"div class="right-column""#);
    if !resume.projects.is_empty() {
        w.open(r#"section class="accountant-section""#);
        section_title(&mut w, "📈", "Key Projects & Engagements");
        for project in &resume.projects {
            w.open(r#"div class="project-item""#);
            w.leaf("h3", &project.name);
            w.leaf(r#"p class="project-description""#, &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="project-tools""#);
                w.leaf("strong", "Tools Used:");
                w.open(r#"div class="tools-list""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="tool-tag""#, tech);
                }
                w.close("div");
                w.close("div");
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

fn section_title(w: &mut HtmlWriter, icon: &str, title: &str) {
    w.open(r#"h2 class="section-title""#);
    w.leaf(r#"span class="title-icon""#, icon);
    w.text(title);
    w.close("h2");
}

fn labeled_contact(w: &mut HtmlWriter, label: &str, value: &str) {
    w.open(r#"div class="contact-item""#);
    w.leaf(r#"span class="contact-label""#, label);
    w.leaf("span", value);
    w.close("div");
}

/// One half of the positional skill split: keeps every skill whose index
/// matches `parity` (0 = even, 1 = odd), in list order.
fn skill_category(w: &mut HtmlWriter, heading: &str, skills: &[Skill], parity: usize) {
    w.open(r#"div class="skill-category""#);
    w.leaf("h4", heading);
    w.open(r#"div class="skills-list""#);
    for (_, skill) in skills.iter().enumerate().filter(|(i, _)| i % 2 == parity) {
        w.open(r#"div class="skill-item""#);
        w.leaf(r#"span class="skill-name""#, &skill.name);
        if let Some(level) = present(&skill.level) {
            w.leaf(r#"span class="skill-level""#, level);
        }
        w.close("div");
    }
    w.close("div");
    w.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_skills(names: &[&str]) -> Vec<Skill> {
        names
            .iter()
            .map(|n| Skill {
                name: n.to_string(),
                level: None,
            })
            .collect()
    }

    #[test]
    fn test_skills_split_by_index_parity() {
        let mut resume = Resume::default();
        resume.skills = named_skills(&["A", "B", "C", "D", "E"]);
        let html = render(&resume);

        let technical_start = html.find("Technical Skills").unwrap();
        let software_start = html.find("Software &amp; Tools").unwrap();
        assert!(technical_start < software_start);

        let technical = &html[technical_start..software_start];
        let software = &html[software_start..];

        for name in ["A", "C", "E"] {
            assert!(
                technical.contains(&format!(r#"<span class="skill-name">{name}</span>"#)),
                "{name} should land under Technical Skills"
            );
        }
        for name in ["B", "D"] {
            assert!(
                software.contains(&format!(r#"<span class="skill-name">{name}</span>"#)),
                "{name} should land under Software & Tools"
            );
            assert!(
                !technical.contains(&format!(r#"<span class="skill-name">{name}</span>"#)),
                "{name} must not land under Technical Skills"
            );
        }
    }

    #[test]
    fn test_header_title_falls_back() {
        let html = render(&Resume::default());
        assert!(html.contains("Chartered Accountant | Financial Professional"));
    }
}
