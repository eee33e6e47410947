//! Similarity Engine — joint TF-IDF over one job description plus N resumes,
//! scored by cosine similarity against the job description.
//!
//! The vector space is a per-call value: vocabulary and IDF weights come from
//! the batch being ranked and nothing is cached between calls.

use std::collections::HashMap;

use tracing::trace;

/// Sparse term → weight vector, L2-normalized unless all-zero.
pub type SparseVector = HashMap<String, f64>;

/// Word tokens the vectorizer counts: whitespace-separated, two characters or more.
fn analyze(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace().filter(|t| t.chars().count() >= 2)
}

/// TF-IDF model fitted on a fixed corpus.
#[derive(Debug, Clone, Default)]
pub struct TfIdfSpace {
    idf: HashMap<String, f64>,
    vectors: Vec<SparseVector>,
}

impl TfIdfSpace {
    /// Fits the vocabulary and smoothed IDF on `corpus` and vectorizes every
    /// document, preserving input order.
    ///
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, term frequency is the raw count.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let n = corpus.len() as f64;

        let counts: Vec<HashMap<&str, u32>> = corpus
            .iter()
            .map(|doc| {
                let mut tf: HashMap<&str, u32> = HashMap::new();
                for token in analyze(doc.as_ref()) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut df: HashMap<&str, u32> = HashMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *df.entry(*term).or_insert(0) += 1;
            }
        }

        let idf: HashMap<String, f64> = df
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term.to_string(), weight)
            })
            .collect();

        let vectors = counts
            .iter()
            .map(|tf| {
                let raw: SparseVector = tf
                    .iter()
                    .map(|(term, count)| (term.to_string(), *count as f64 * idf[*term]))
                    .collect();
                l2_normalize(raw)
            })
            .collect();

        Self { idf, vectors }
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

fn l2_normalize(mut vector: SparseVector) -> SparseVector {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
    vector
}

/// Cosine similarity in [0, 1]. Zero vectors score 0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Scores each normalized resume against the normalized job description.
///
/// Output is index-aligned with `resumes`; an empty batch yields an empty vec.
pub fn similarity_scores<S: AsRef<str>>(job_description: &str, resumes: &[S]) -> Vec<f64> {
    if resumes.is_empty() {
        return Vec::new();
    }

    let corpus: Vec<&str> = std::iter::once(job_description)
        .chain(resumes.iter().map(|r| r.as_ref()))
        .collect();
    let space = TfIdfSpace::fit(&corpus);
    trace!(
        "TF-IDF space over {} documents, {} terms",
        corpus.len(),
        space.vocabulary_size()
    );

    let (jd_vector, resume_vectors) = match space.vectors().split_first() {
        Some(split) => split,
        None => return Vec::new(),
    };

    resume_vectors
        .iter()
        .map(|v| cosine_similarity(jd_vector, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_documents_score_one() {
        let scores = similarity_scores("rust developer", &["rust developer"]);
        assert!((scores[0] - 1.0).abs() < EPS, "got {}", scores[0]);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let scores = similarity_scores("rust developer", &["graphic designer"]);
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let scores = similarity_scores("rust developer", &["", "rust"]);
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > 0.0);
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let scores = similarity_scores("", &["rust developer", ""]);
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_no_resumes_yields_no_scores() {
        let scores = similarity_scores::<&str>("rust developer", &[]);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_scores_are_index_aligned() {
        let resumes = ["graphic designer", "rust developer", "rust"];
        let scores = similarity_scores("rust developer", &resumes);
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < EPS);
        assert!(scores[2] > 0.0 && scores[2] < 1.0);
    }

    #[test]
    fn test_scores_are_bounded() {
        let resumes = ["python python python", "python machine learning", "year python"];
        for score in similarity_scores("year experience python machine learning", &resumes) {
            assert!((0.0..=1.0).contains(&score), "out of range: {score}");
        }
    }

    #[test]
    fn test_single_character_tokens_are_ignored() {
        let scores = similarity_scores("c rust", &["c"]);
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_smoothed_idf_values() {
        let space = TfIdfSpace::fit(&["rust go", "rust", "python"]);
        // rust appears in 2 of 3 documents: ln(4 / 3) + 1
        let expected = (4.0_f64 / 3.0).ln() + 1.0;
        assert!((space.idf["rust"] - expected).abs() < EPS);
        // go appears in 1 of 3: ln(4 / 2) + 1
        assert!((space.idf["go"] - (2.0_f64.ln() + 1.0)).abs() < EPS);
        assert_eq!(space.vocabulary_size(), 3);
    }

    #[test]
    fn test_known_cosine_value() {
        // Corpus: ["rust go", "rust"]. idf(rust) = 1, idf(go) = ln(3/2) + 1.
        // JD vector ∝ (1, g), resume vector = (1, 0) → cosine = 1 / sqrt(1 + g²).
        let g = (3.0_f64 / 2.0).ln() + 1.0;
        let expected = 1.0 / (1.0 + g * g).sqrt();
        let scores = similarity_scores("rust go", &["rust"]);
        assert!((scores[0] - expected).abs() < EPS, "got {}", scores[0]);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let space = TfIdfSpace::fit(&["rust rust go", "python", ""]);
        for (i, v) in space.vectors().iter().enumerate() {
            let norm = v.values().map(|w| w * w).sum::<f64>().sqrt();
            if i == 2 {
                assert_eq!(norm, 0.0);
            } else {
                assert!((norm - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_cosine_of_zero_vectors_is_zero() {
        let empty = SparseVector::new();
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }
}
