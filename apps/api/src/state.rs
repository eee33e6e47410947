use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::ranking::profiles::RoleCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Role table loaded once at startup; never mutated afterwards.
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
