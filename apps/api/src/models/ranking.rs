use serde::{Deserialize, Serialize};

/// One uploaded document after text extraction. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// Document at zero-based `index` with the default `"<n>"` / `Resume_<n>` labels.
    pub fn numbered(index: usize, text: impl Into<String>) -> Self {
        let n = index + 1;
        Self::new(n.to_string(), format!("Resume_{n}"), text)
    }
}

/// Heuristic signals pulled from one raw resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureResult {
    pub experience_years: Option<u32>,
    pub matched_skills: Vec<String>,
    pub matched_degrees: Vec<String>,
}

/// A scored resume. Field names on the wire match what the upload UI reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub name: String,
    pub score: f64,
    #[serde(rename = "experience")]
    pub experience_years: u32,
    #[serde(rename = "skills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "qualifications")]
    pub matched_degrees: Vec<String>,
    pub preview: String,
}
