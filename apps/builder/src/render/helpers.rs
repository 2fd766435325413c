//! Projection helpers shared by the layout strategies.
//!
//! Every presence check, fallback string, and derived line used by more
//! than one layout lives here as a free function over the data model, so
//! the per-layout files only encode ordering and structure.

use crate::models::{PersonalInfo, Resume};
use crate::render::html;

/// A field renders only when it is non-empty after trimming. Blank and
/// absent are indistinguishable to every layout.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Borrows an optional field when it has renderable content.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| is_present(v))
}

/// Name header with the standard placeholder for an unfilled record.
pub fn display_name(personal: &PersonalInfo) -> &str {
    if is_present(&personal.full_name) {
        &personal.full_name
    } else {
        "Your Name"
    }
}

/// Formats a date range. A `current` entry always ends in the literal
/// "Present" regardless of the stored end date; otherwise the stored end
/// date is printed verbatim — including the empty string next to the
/// separator, which is accepted behavior.
pub fn date_range(start: &str, end: Option<&str>, current: bool, separator: &str) -> String {
    let end_token = if current { "Present" } else { end.unwrap_or("") };
    format!("{start} {separator} {end_token}")
}

/// Proficiency bar width. Unrecognized or absent levels fall to the lowest
/// tier rather than failing.
pub fn skill_level_width(level: Option<&str>) -> &'static str {
    match level {
        Some("Expert") => "100%",
        Some("Advanced") => "80%",
        Some("Intermediate") => "60%",
        _ => "40%",
    }
}

/// First letter of each whitespace-separated word, e.g. "Sofia Rodriguez"
/// → "SR".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Headline synthesized from the first experience entry's position; falls
/// back to a layout-specific literal when there is no usable position.
pub fn experience_headline<'a>(resume: &'a Resume, fallback: &'a str) -> &'a str {
    resume
        .experience
        .first()
        .map(|exp| exp.position.as_str())
        .filter(|position| is_present(position))
        .unwrap_or(fallback)
}

/// The full professional summary, or a layout-specific literal.
pub fn summary_or<'a>(personal: &'a PersonalInfo, fallback: &'a str) -> &'a str {
    present(&personal.summary).unwrap_or(fallback)
}

/// Short designation line: the summary up to (not including) its first
/// period. An empty result falls back to the layout's literal.
pub fn designation_line<'a>(personal: &'a PersonalInfo, fallback: &'a str) -> &'a str {
    present(&personal.summary)
        .and_then(|summary| summary.split('.').next())
        .filter(|designation| is_present(designation))
        .unwrap_or(fallback)
}

/// "City, Country" — rendered only when both halves are present.
pub fn city_country(personal: &PersonalInfo) -> Option<String> {
    match (present(&personal.city), present(&personal.country)) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        _ => None,
    }
}

/// External anchor that opens in a new browsing context without leaking
/// referrer or opener to the destination.
pub fn external_link(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        html::attr(href),
        html::escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Experience;

    #[test]
    fn test_is_present_rejects_whitespace() {
        assert!(is_present("Stripe"));
        assert!(!is_present(""));
        assert!(!is_present("   "));
    }

    #[test]
    fn test_date_range_present_substitution() {
        // The stored end date is ignored whenever `current` is set.
        assert_eq!(date_range("2021", Some("2023"), true, "-"), "2021 - Present");
        assert_eq!(date_range("2021", None, true, "–"), "2021 – Present");
    }

    #[test]
    fn test_date_range_empty_end_prints_next_to_separator() {
        assert_eq!(date_range("2021", Some(""), false, "-"), "2021 - ");
        assert_eq!(date_range("2021", None, false, "-"), "2021 - ");
    }

    #[test]
    fn test_skill_level_width_mapping_is_exact() {
        assert_eq!(skill_level_width(Some("Expert")), "100%");
        assert_eq!(skill_level_width(Some("Advanced")), "80%");
        assert_eq!(skill_level_width(Some("Intermediate")), "60%");
        assert_eq!(skill_level_width(Some("Beginner")), "40%");
        assert_eq!(skill_level_width(Some("Wizard")), "40%");
        assert_eq!(skill_level_width(None), "40%");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sofia Rodriguez"), "SR");
        assert_eq!(initials("Dr. Jonathan Pierce"), "DJP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_experience_headline_falls_back() {
        let mut resume = Resume::default();
        assert_eq!(
            experience_headline(&resume, "Creative Professional"),
            "Creative Professional"
        );

        resume.experience.push(Experience {
            position: "Creative Director".to_string(),
            ..Default::default()
        });
        assert_eq!(
            experience_headline(&resume, "Creative Professional"),
            "Creative Director"
        );
    }

    #[test]
    fn test_designation_line_takes_text_before_first_period() {
        let mut personal = PersonalInfo::default();
        personal.summary = Some("Senior Engineer. Loves Go.".to_string());
        assert_eq!(
            designation_line(&personal, "Attorney at Law | Legal Counsel"),
            "Senior Engineer"
        );

        personal.summary = None;
        assert_eq!(
            designation_line(&personal, "Attorney at Law | Legal Counsel"),
            "Attorney at Law | Legal Counsel"
        );

        // A summary that opens with a period yields nothing usable.
        personal.summary = Some(".trailing".to_string());
        assert_eq!(
            designation_line(&personal, "Attorney at Law | Legal Counsel"),
            "Attorney at Law | Legal Counsel"
        );
    }

    #[test]
    fn test_city_country_requires_both() {
        let mut personal = PersonalInfo::default();
        personal.city = Some("Portland".to_string());
        assert_eq!(city_country(&personal), None);
        personal.country = Some("United States".to_string());
        assert_eq!(
            city_country(&personal).as_deref(),
            Some("Portland, United States")
        );
    }

    #[test]
    fn test_external_link_never_leaks_opener() {
        let anchor = external_link("https://github.com/sofia-design", "GitHub");
        assert!(anchor.contains(r#"target="_blank""#));
        assert!(anchor.contains(r#"rel="noopener noreferrer""#));
    }
}
