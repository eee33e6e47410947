//! Text Normalizer — lowercases, strips non-letters, drops stopwords and
//! lemmatizes, producing the space-joined token string the similarity engine
//! vectorizes.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

// ────────────────────────────────────────────────────────────────────────────
// Stopwords
// ────────────────────────────────────────────────────────────────────────────

/// English stopwords. Contraction forms appear without apostrophes because
/// apostrophes never survive the letter filter.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
        "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
        "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

// ────────────────────────────────────────────────────────────────────────────
// Lemmatizer
// ────────────────────────────────────────────────────────────────────────────

/// Plurals that the suffix rules would get wrong. Invariant nouns map to
/// themselves.
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("series", "series"),
    ("species", "species"),
    ("news", "news"),
];

fn is_irregular(token: &str) -> bool {
    IRREGULAR.iter().any(|(plural, _)| *plural == token)
}

/// Suffixes that mark a word as already singular.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Reduces a lowercase token to its noun base form.
///
/// Words of three letters or fewer are returned as-is, and a rule whose output
/// would be a stopword or an irregular plural is not applied. Every output is
/// a fixed point, so lemmatizing twice changes nothing.
pub fn lemmatize(token: &str) -> Cow<'_, str> {
    if let Some(&(_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == token) {
        return Cow::Borrowed(base);
    }
    if token.len() <= 3 || SINGULAR_ENDINGS.iter().any(|e| token.ends_with(e)) {
        return Cow::Borrowed(token);
    }

    let lemma = if let Some(stem) = token.strip_suffix("sses") {
        format!("{stem}ss")
    } else if ["xes", "ches", "shes"].iter().any(|s| token.ends_with(s)) {
        token[..token.len() - 2].to_string()
    } else if token.len() > 4 && token.ends_with("ies") {
        format!("{}y", &token[..token.len() - 3])
    } else if let Some(stem) = token.strip_suffix('s') {
        stem.to_string()
    } else {
        return Cow::Borrowed(token);
    };

    if is_stopword(&lemma) || is_irregular(&lemma) {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(lemma)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Splits letter-only text into word tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}

/// Normalizes raw text: lowercase → keep `a-z` and whitespace → tokenize →
/// drop stopwords → lemmatize → join with single spaces.
///
/// Total: empty or letter-free input yields `""`.
pub fn normalize(text: &str) -> String {
    let letters: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    tokenize(&letters)
        .filter(|token| !is_stopword(token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}
