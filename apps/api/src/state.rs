use std::sync::Arc;

use crate::analysis::provider::AnalysisProvider;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis provider. Default: Gemini. Tests inject a stub.
    pub provider: Arc<dyn AnalysisProvider>,
    pub config: Config,
}
