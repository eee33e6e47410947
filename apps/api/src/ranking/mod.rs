//! Hybrid resume ranking: TF-IDF similarity to the job description combined
//! with experience, skill and degree signals.
//!
//! Everything in this module is synchronous, pure and total. The HTTP layer in
//! `handlers` is the only place that can fail.

pub mod features;
pub mod handlers;
pub mod normalize;
pub mod profiles;
pub mod similarity;

use tracing::debug;

use crate::models::ranking::{Document, RankedEntry};
use crate::ranking::features::extract_features;
use crate::ranking::normalize::normalize;
use crate::ranking::profiles::RoleCatalog;
use crate::ranking::similarity::similarity_scores;

/// Characters of raw text kept in each entry's preview.
pub const PREVIEW_CHARS: usize = 200;
const PREVIEW_ELLIPSIS: &str = "...";

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Composite score weights. The values are a fixed ranking policy and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub similarity: f64,
    pub experience: f64,
    pub skills: f64,
    pub qualifications: f64,
}

pub const WEIGHTS: RankingWeights = RankingWeights {
    similarity: 0.5,
    experience: 0.2,
    skills: 0.2,
    qualifications: 0.1,
};

impl RankingWeights {
    /// `similarity·w₁ + years·w₂ + skill_count·w₃ + degree_count·w₄`
    pub fn composite(
        &self,
        similarity: f64,
        experience_years: u32,
        skill_count: usize,
        qualification_count: usize,
    ) -> f64 {
        self.similarity * similarity
            + self.experience * f64::from(experience_years)
            + self.skills * skill_count as f64
            + self.qualifications * qualification_count as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranker
// ────────────────────────────────────────────────────────────────────────────

/// Ranks raw resume texts against a job description for `role`.
///
/// Entries are labelled `"1".."N"` / `Resume_1..Resume_N` in submission order.
pub fn rank<S: AsRef<str>>(
    job_description: &str,
    resumes: &[S],
    role: &str,
    catalog: &RoleCatalog,
) -> Vec<RankedEntry> {
    let documents: Vec<Document> = resumes
        .iter()
        .enumerate()
        .map(|(i, text)| Document::numbered(i, text.as_ref()))
        .collect();
    rank_documents(job_description, &documents, role, catalog)
}

/// Ranks documents against a job description for `role`, keeping each
/// document's id and name.
///
/// Returns every document, highest score first. Equal scores keep submission
/// order. An unknown role contributes no skill or degree matches.
pub fn rank_documents(
    job_description: &str,
    documents: &[Document],
    role: &str,
    catalog: &RoleCatalog,
) -> Vec<RankedEntry> {
    if catalog.get(role).is_none() {
        debug!("Role '{role}' not in catalog; skill and degree matches will be empty");
    }

    let normalized_jd = normalize(job_description);
    let normalized_resumes: Vec<String> = documents.iter().map(|d| normalize(&d.text)).collect();
    let similarities = similarity_scores(&normalized_jd, &normalized_resumes);

    let mut entries: Vec<RankedEntry> = documents
        .iter()
        .zip(similarities)
        .map(|(doc, similarity)| {
            let features = extract_features(&doc.text, role, catalog);
            let experience_years = features.experience_years.unwrap_or(0);
            let score = WEIGHTS.composite(
                similarity,
                experience_years,
                features.matched_skills.len(),
                features.matched_degrees.len(),
            );
            RankedEntry {
                id: doc.id.clone(),
                name: doc.name.clone(),
                score,
                experience_years,
                matched_skills: features.matched_skills,
                matched_degrees: features.matched_degrees,
                preview: preview(&doc.text),
            }
        })
        .collect();

    // Vec::sort_by is stable: ties stay in submission order
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        "Ranked {} resumes for role '{}' (top score {:.3})",
        entries.len(),
        role,
        entries.first().map(|e| e.score).unwrap_or(0.0)
    );

    entries
}

/// First `PREVIEW_CHARS` characters of `text` followed by `...`.
pub fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str(PREVIEW_ELLIPSIS);
    preview
}
