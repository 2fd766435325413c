//! Sales-profession layout. Experience leads, competencies carry
//! proficiency bars (the second of the two bar-width layouts), and a
//! static performance-highlights block always closes the page.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, external_link, is_present, present,
    skill_level_width, summary_or,
};
use crate::render::html::{escape, HtmlWriter};

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="sales-executive-template""#);

    w.open(r#"div class="sales-header""#);
    w.open(r#"div class="header-content""#);
    w.open(r#"div class="name-section""#);
    w.leaf("h1", display_name(p));
    w.close("div");
    w.open(r#"div class="header-bottom""#);
    w.open(r#"div class="summary-section""#);
    w.leaf(
        r#"p class="sales-title""#,
        summary_or(p, "Sales Professional | Business Development Executive"),
    );
    w.close("div");
    w.open(r#"div class="contact-section""#);
    w.open(r#"div class="contact-bar""#);
    if let Some(email) = present(&p.email) {
        contact_item(&mut w, "✉", email);
    }
    if is_present(&p.phone) {
        contact_item(&mut w, "📱", &p.phone);
    }
    if let Some(location) = city_country(p) {
        contact_item(&mut w, "📍", &location);
    }
    if let Some(url) = present(&p.linkedin) {
        w.open(r#"span class="contact-item""#);
        w.leaf(r#"span class="icon""#, "🔗");
        w.line(&external_link(url, "LinkedIn"));
        w.close("span");
    }
    w.close("div");
    w.close("div");
    w.close("div");
    w.close("div");
    w.close("div");

    w.open(r#"div class="sales-body""#);

    if !resume.experience.is_empty() {
        w.open(r#"section class="sales-section""#);
        w.leaf(r#"h2 class="section-title""#, "Professional Experience");
        for exp in &resume.experience {
            w.open(r#"div class="sales-experience-item""#);
            w.open(r#"div class="exp-header""#);
            w.open(r#"div class="exp-left""#);
            w.leaf("h3", &exp.position);
            w.open(r#"p class="company-info""#);
            w.leaf("strong", &exp.company);
            if let Some(location) = present(&exp.location) {
                w.leaf("span", &format!(" • {location}"));
            }
            w.close("p");
            w.close("div");
            w.open(r#"div class="exp-right""#);
            w.leaf(
                r#"span class="period""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            w.close("div");
            if is_present(&exp.description) {
                w.leaf(r#"p class="role-description""#, &exp.description);
            }
            if !exp.achievements.is_empty() {
                w.open(r#"div class="achievements-section""#);
                w.leaf("h4", "Key Achievements & Metrics:");
                w.open(r#"ul class="sales-achievements""#);
                for achievement in &exp.achievements {
                    w.line(&format!(
                        r#"<li><span class="achievement-marker">▸</span>{}</li>"#,
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

    w.open(r#"div class="sales-columns""#);
    w.open(r#"div class="main-column""#);
    if !resume.projects.is_empty() {
        w.open(r#"section class="sales-section""#);
        w.leaf(r#"h2 class="section-title""#, "Key Accounts & Projects");
        w.open(r#"div class="accounts-grid""#);
        for project in &resume.projects {
            w.open(r#"div class="account-card""#);
            w.leaf("h3", &project.name);
            w.leaf("p", &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="industries""#);
                w.leaf("strong", "Industries/Products:");
                w.open(r#"div class="industry-tags""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="industry-tag""#, tech);
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

    w.open(r#"div class="side-column""#);
    if !resume.skills.is_empty() {
        w.open(r#"section class="sales-section""#);
        w.leaf(r#"h2 class="section-title""#, "Core Competencies");
        w.open(r#"div class="competencies-grid""#);
        for skill in &resume.skills {
            w.open(r#"div class="competency-item""#);
            w.leaf(r#"span class="competency-icon""#, "★");
            w.leaf(r#"span class="competency-name""#, &skill.name);
            if let Some(level) = present(&skill.level) {
                w.open(r#"div class="competency-level""#);
                w.open(r#"div class="level-bar""#);
                w.line(&format!(
                    r#"<div class="level-fill" style="width: {}"></div>"#,
                    skill_level_width(Some(level))
                ));
                w.close("div");
                w.close("div");
            }
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.education.is_empty() {
        w.open(r#"section class="sales-section""#);
        w.leaf(r#"h2 class="section-title""#, "Education & Training");
        for edu in &resume.education {
            w.open(r#"div class="education-card""#);
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
                w.leaf(r#"p class="performance""#, &format!("GPA: {gpa}"));
            }
            w.close("div");
        }
        w.close("section");
    }
    w.close("div");
    w.close("div");

    // Static highlights block: always rendered, independent of data.
    w.open(r#"section class="sales-section metrics-section""#);
    w.leaf(r#"h2 class="section-title""#, "Sales Performance Highlights");
    w.open(r#"div class="metrics-grid""#);
    metric_card(&mut w, "📈", "Revenue Growth", "Consistently exceeded sales targets");
    metric_card(&mut w, "🤝", "Client Relations", "Built strong B2B partnerships");
    metric_card(&mut w, "🎯", "Target Achievement", "High conversion rates");
    metric_card(&mut w, "🏆", "Awards & Recognition", "Top performer awards");
    w.close("div");
    w.close("section");

    w.close("div");
    w.close("div");
    w.finish()
}

fn contact_item(w: &mut HtmlWriter, icon: &str, value: &str) {
    w.open(r#"span class="contact-item""#);
    w.leaf(r#"span class="icon""#, icon);
    w.text(value);
    w.close("span");
}

fn metric_card(w: &mut HtmlWriter, icon: &str, heading: &str, blurb: &str) {
    w.open(r#"div class="metric-card""#);
    w.leaf(r#"div class="metric-icon""#, icon);
    w.leaf("h4", heading);
    w.leaf("p", blurb);
    w.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    #[test]
    fn test_metrics_block_renders_even_on_empty_resume() {
        let html = render(&Resume::default());
        assert!(html.contains("Sales Performance Highlights"));
        assert!(html.contains("Revenue Growth"));
        assert!(html.contains("Top performer awards"));
    }

    #[test]
    fn test_competency_bar_width() {
        let mut resume = Resume::default();
        resume.skills = vec![Skill {
            name: "Negotiation".to_string(),
            level: Some("Advanced".to_string()),
        }];
        let html = render(&resume);
        assert!(html.contains(r#"style="width: 80%""#));
    }
}
