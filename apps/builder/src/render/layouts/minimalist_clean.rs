//! Minimalist single-column layout. The only layout that renders the
//! summary without a heading, and it uses an en dash in date ranges.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, is_present, present,
};
use crate::render::html::HtmlWriter;

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="minimalist-clean-template""#);

    w.open(r#"header class="minimal-header""#);
    w.leaf(r#"h1 class="minimal-name""#, display_name(p));
    w.open(r#"div class="minimal-contact""#);
    if let Some(email) = present(&p.email) {
        w.leaf("span", email);
    }
    if is_present(&p.phone) {
        w.leaf("span", &p.phone);
    }
    if let Some(location) = city_country(p) {
        w.leaf("span", &location);
    }
    if let Some(url) = present(&p.linkedin) {
        w.line(&external_link(url, "LinkedIn"));
    }
    w.close("div");
    w.close("header");

    if let Some(summary) = present(&p.summary) {
        w.open(r#"section class="minimal-section""#);
        w.leaf(r#"p class="minimal-summary""#, summary);
        w.close("section");
    }

    if !resume.experience.is_empty() {
        w.open(r#"section class="minimal-section""#);
        w.leaf(r#"h2 class="minimal-section-title""#, "Experience");
        w.open(r#"div class="minimal-content""#);
        for exp in &resume.experience {
            w.open(r#"div class="minimal-experience""#);
            w.open(r#"div class="minimal-exp-header""#);
            w.open(r#"div class="minimal-exp-left""#);
            w.leaf(r#"h3 class="minimal-position""#, &exp.position);
            w.leaf(r#"div class="minimal-company""#, &exp.company);
            w.close("div");
            w.open(r#"div class="minimal-exp-right""#);
            w.leaf(
                r#"div class="minimal-date""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "–"),
            );
            if let Some(location) = present(&exp.location) {
                w.leaf(r#"div class="minimal-location""#, location);
            }
            w.close("div");
            w.close("div");
            if is_present(&exp.description) {
                w.leaf(r#"p class="minimal-description""#, &exp.description);
            }
            if !exp.achievements.is_empty() {
                w.open(r#"ul class="minimal-achievements""#);
                for achievement in &exp.achievements {
                    w.leaf("li", achievement);
                }
                w.close("ul");
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.education.is_empty() {
        w.open(r#"section class="minimal-section""#);
        w.leaf(r#"h2 class="minimal-section-title""#, "Education");
        w.open(r#"div class="minimal-content""#);
        for edu in &resume.education {
            w.open(r#"div class="minimal-education""#);
            w.open(r#"div class="minimal-edu-header""#);
            w.open(r#"div class="minimal-edu-left""#);
            w.leaf(r#"h3 class="minimal-degree""#, &edu.degree);
            w.leaf(r#"div class="minimal-field""#, &edu.field_of_study);
            w.leaf(r#"div class="minimal-institution""#, &edu.institution);
            w.close("div");
            w.open(r#"div class="minimal-edu-right""#);
            w.leaf(
                r#"div class="minimal-date""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "–"),
            );
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf(r#"div class="minimal-gpa""#, &format!("GPA: {gpa}"));
            }
            w.close("div");
            w.close("div");
            if let Some(description) = present(&edu.description) {
                w.leaf(r#"p class="minimal-description""#, description);
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.skills.is_empty() {
        w.open(r#"section class="minimal-section""#);
        w.leaf(r#"h2 class="minimal-section-title""#, "Skills");
        w.open(r#"div class="minimal-content""#);
        w.open(r#"div class="minimal-skills""#);
        for skill in &resume.skills {
            w.leaf(r#"span class="minimal-skill""#, &skill.name);
        }
        w.close("div");
        w.close("div");
        w.close("section");
    }

    if !resume.projects.is_empty() {
        w.open(r#"section class="minimal-section""#);
        w.leaf(r#"h2 class="minimal-section-title""#, "Projects");
        w.open(r#"div class="minimal-content""#);
        for project in &resume.projects {
            w.open(r#"div class="minimal-project""#);
            w.open(r#"div class="minimal-project-header""#);
            w.leaf(r#"h3 class="minimal-project-name""#, &project.name);
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "View"));
            }
            w.close("div");
            w.leaf(r#"p class="minimal-description""#, &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="minimal-technologies""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="minimal-tech""#, tech);
                }
                w.close("div");
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    w.close("div");
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Experience;

    #[test]
    fn test_uses_en_dash_in_date_ranges() {
        let mut resume = Resume::default();
        resume.experience.push(Experience {
            company: "Stripe".to_string(),
            position: "Senior Product Manager".to_string(),
            start_date: "2021".to_string(),
            current: true,
            description: "Payments.".to_string(),
            ..Default::default()
        });
        let html = render(&resume);
        assert!(html.contains("2021 – Present"));
    }

    #[test]
    fn test_summary_renders_without_heading() {
        let mut resume = Resume::default();
        resume.personal_info.summary = Some("Strategic Product Manager.".to_string());
        let html = render(&resume);
        assert!(html.contains("Strategic Product Manager."));
        assert!(!html.contains("Professional Summary"));
    }
}
