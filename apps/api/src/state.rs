use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::DocumentGenerator;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable document store. Default: MemoryDocumentStore.
    pub store: Arc<dyn DocumentStore>,
    pub generator: DocumentGenerator,
    pub config: Config,
}
