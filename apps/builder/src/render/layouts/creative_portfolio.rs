//! Portfolio layout: projects lead the main column, experience follows as
//! a timeline, and skills/education/languages/certifications sit in the
//! sidebar. The tagline is derived from the first experience position.

use crate::models::Resume;
use crate::render::helpers::{
    city_country, date_range, display_name, experience_headline, external_link, is_present,
    present,
};
use crate::render::html::HtmlWriter;

pub fn render(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut w = HtmlWriter::new();

    w.open(r#"div class="creative-portfolio-template""#);

    w.open(r#"div class="portfolio-header""#);
    w.open(r#"div class="header-content""#);
    w.open(r#"div class="header-main""#);
    w.open(r#"div class="name-section""#);
    w.leaf(r#"h1 class="portfolio-name""#, display_name(p));
    w.leaf(
        r#"div class="portfolio-tagline""#,
        experience_headline(resume, "Creative Professional"),
    );
    w.close("div");

    w.open(r#"div class="contact-section""#);
    w.open(r#"div class="contact-items""#);
    if let Some(email) = present(&p.email) {
        contact_item(&mut w, "✉", email);
    }
    if is_present(&p.phone) {
        contact_item(&mut w, "📞", &p.phone);
    }
    if let Some(location) = city_country(p) {
        contact_item(&mut w, "📍", &location);
    }
    if let Some(url) = present(&p.website) {
        w.open(r#"div class="contact-item""#);
        w.leaf(r#"span class="icon""#, "🌐");
        w.line(&external_link(url, "Portfolio"));
        w.close("div");
    }
    w.close("div");
    w.close("div");
    w.close("div");
    w.line(r#"<div class="header-pattern"></div>"#);
    w.close("div");
    w.close("div");

    w.open(r#"div class="portfolio-body""#);
    w.open(r#"div class="portfolio-main""#);

    if let Some(summary) = present(&p.summary) {
        w.open(r#"section class="portfolio-section intro-section""#);
        w.leaf(r#"h2 class="section-title""#, "About Me");
        w.leaf(r#"p class="intro-text""#, summary);
        w.close("section");
    }

    if !resume.projects.is_empty() {
        w.open(r#"section class="portfolio-section""#);
        w.leaf(r#"h2 class="section-title""#, "Featured Projects");
        w.open(r#"div class="projects-grid""#);
        for project in &resume.projects {
            w.open(r#"div class="project-card""#);
            w.open(r#"div class="project-header""#);
            w.leaf("h3", &project.name);
            if let Some(url) = present(&project.link) {
                w.line(&external_link(url, "View Project →"));
            }
            w.close("div");
            w.leaf(r#"p class="project-description""#, &project.description);
            if !project.technologies.is_empty() {
                w.open(r#"div class="project-tech""#);
                for tech in &project.technologies {
                    w.leaf(r#"span class="tech-tag""#, tech);
                }
                w.close("div");
            }
            // The start date prints as stored, even when blank; the end
            // date is appended only when present.
            let start = project.start_date.as_deref().unwrap_or("");
            let range = match present(&project.end_date) {
                Some(end) => format!("{start} - {end}"),
                None => format!("{start} "),
            };
            w.leaf(r#"div class="project-date""#, &range);
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.experience.is_empty() {
        w.open(r#"section class="portfolio-section""#);
        w.leaf(r#"h2 class="section-title""#, "Work Experience");
        w.open(r#"div class="experience-timeline""#);
        for exp in &resume.experience {
            w.open(r#"div class="timeline-item""#);
            w.line(r#"<div class="timeline-marker"></div>"#);
            w.open(r#"div class="timeline-content""#);
            w.open(r#"div class="experience-header""#);
            w.leaf("h3", &exp.position);
            w.leaf(
                r#"span class="date-badge""#,
                &date_range(&exp.start_date, exp.end_date.as_deref(), exp.current, "-"),
            );
            w.close("div");
            w.open(r#"div class="company-info""#);
            w.leaf("strong", &exp.company);
            if let Some(location) = present(&exp.location) {
                w.leaf("span", &format!(" • {location}"));
            }
            w.close("div");
            w.leaf(r#"p class="experience-description""#, &exp.description);
            if !exp.achievements.is_empty() {
                w.open(r#"div class="achievements""#);
                for achievement in &exp.achievements {
                    w.open(r#"div class="achievement-item""#);
                    w.leaf(r#"span class="achievement-marker""#, "★");
                    w.leaf("span", achievement);
                    w.close("div");
                }
                w.close("div");
            }
            w.close("div");
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }
    w.close("div");

    w.open(r#"div class="portfolio-sidebar""#);
    if !resume.skills.is_empty() {
        w.open(r#"section class="sidebar-section""#);
        w.leaf("h3", "Skills & Expertise");
        w.open(r#"div class="skills-cloud""#);
        for skill in &resume.skills {
            // Bubble sizing keys off the lowercased level name.
            let class = match present(&skill.level) {
                Some(level) => format!("skill-bubble {}", level.to_lowercase()),
                None => "skill-bubble".to_string(),
            };
            w.leaf(&format!(r#"div class="{class}""#), &skill.name);
        }
        w.close("div");
        w.close("section");
    }

    if !resume.education.is_empty() {
        w.open(r#"section class="sidebar-section""#);
        w.leaf("h3", "Education");
        for edu in &resume.education {
            w.open(r#"div class="education-card""#);
            w.leaf(r#"div class="edu-degree""#, &edu.degree);
            w.leaf(r#"div class="edu-field""#, &edu.field_of_study);
            w.leaf(r#"div class="edu-institution""#, &edu.institution);
            w.leaf(
                r#"div class="edu-period""#,
                &date_range(&edu.start_date, edu.end_date.as_deref(), edu.current, "-"),
            );
            if let Some(gpa) = present(&edu.gpa) {
                w.leaf(r#"div class="edu-gpa""#, &format!("GPA: {gpa}"));
            }
            w.close("div");
        }
        w.close("section");
    }

    if !resume.languages.is_empty() {
        w.open(r#"section class="sidebar-section""#);
        w.leaf("h3", "Languages");
        w.open(r#"div class="languages-list""#);
        for lang in &resume.languages {
            w.open(r#"div class="language-item""#);
            w.leaf(r#"span class="lang-name""#, &lang.name);
            w.leaf(r#"span class="lang-prof""#, &lang.proficiency);
            w.close("div");
        }
        w.close("div");
        w.close("section");
    }

    if !resume.certifications.is_empty() {
        w.open(r#"section class="sidebar-section""#);
        w.leaf("h3", "Certifications");
        for cert in &resume.certifications {
            w.open(r#"div class="cert-item""#);
            w.leaf(r#"div class="cert-name""#, &cert.name);
            w.leaf(r#"div class="cert-issuer""#, &cert.issuer);
            w.leaf(r#"div class="cert-date""#, &cert.date);
            w.close("div");
        }
        w.close("section");
    }
    w.close("div");
    w.close("div");

    w.close("div");
    w.finish()
}

fn contact_item(w: &mut HtmlWriter, icon: &str, value: &str) {
    w.open(r#"div class="contact-item""#);
    w.leaf(r#"span class="icon""#, icon);
    w.text(value);
    w.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Skill};

    #[test]
    fn test_tagline_fallback() {
        let html = render(&Resume::default());
        assert!(html.contains("Creative Professional"));
    }

    #[test]
    fn test_skill_bubble_class_uses_lowercased_level() {
        let mut resume = Resume::default();
        resume.skills = vec![Skill {
            name: "Figma".to_string(),
            level: Some("Expert".to_string()),
        }];
        let html = render(&resume);
        assert!(html.contains(r#"class="skill-bubble expert""#));
    }

    #[test]
    fn test_project_date_appends_end_only_when_present() {
        let mut resume = Resume::default();
        resume.projects.push(Project {
            name: "MediTrack Pro".to_string(),
            description: "Medication management.".to_string(),
            start_date: Some("2017".to_string()),
            end_date: Some("2018".to_string()),
            ..Default::default()
        });
        resume.projects.push(Project {
            name: "Fashion Week VR".to_string(),
            description: "Immersive runway.".to_string(),
            start_date: Some("2023".to_string()),
            end_date: None,
            ..Default::default()
        });
        let html = render(&resume);
        assert!(html.contains(r#"<div class="project-date">2017 - 2018</div>"#));
        assert!(html.contains(r#"<div class="project-date">2023 </div>"#));
    }
}
