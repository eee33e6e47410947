//! Feature Extractors — experience years, degree matches and skill matches.
//!
//! All three read the raw (non-normalized) text and fold case internally.
//! Matching is plain substring search; no fuzzy matching or synonyms.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ranking::FeatureResult;
use crate::ranking::profiles::RoleCatalog;

/// `<n>[+-] years|yrs [of experience|experience|exp]`, case-insensitive.
static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)[+-]?\s*(?:years?|yrs?)\s*(?:of experience|experience|exp)?")
        .expect("experience pattern is a valid regex")
});

/// Returns the largest year count mentioned in `text`, or `None` when no
/// pattern matches. Counts that do not fit a `u32` are ignored.
pub fn extract_experience(text: &str) -> Option<u32> {
    EXPERIENCE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

/// Returns the keywords that occur anywhere in `text`, case-insensitively,
/// in the order they are listed.
pub fn match_keywords(text: &str, keywords: &[String]) -> Vec<String> {
    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| text_lower.contains(&kw.to_lowercase()))
        .cloned()
        .collect()
}

/// Required degrees of `role` found in `text`. Unknown roles match nothing.
pub fn extract_qualifications(text: &str, role: &str, catalog: &RoleCatalog) -> Vec<String> {
    match_keywords(text, catalog.degrees_for(role))
}

/// Required skills of `role` found in `text`. Unknown roles match nothing.
pub fn extract_skills(text: &str, role: &str, catalog: &RoleCatalog) -> Vec<String> {
    match_keywords(text, catalog.skills_for(role))
}

/// Runs all three extractors over one raw document.
pub fn extract_features(text: &str, role: &str, catalog: &RoleCatalog) -> FeatureResult {
    FeatureResult {
        experience_years: extract_experience(text),
        matched_skills: extract_skills(text, role, catalog),
        matched_degrees: extract_qualifications(text, role, catalog),
    }
}
