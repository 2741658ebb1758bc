//! HTTP surface of the gateway.
//!
//! - `stub`: GET /<author>/<repository>/<branch>/path/to/file
//!   Resolves, fetches and projects a remote file into TypeScript stubs.
//!   `?dry_run=true` returns the resolved candidates as JSON instead.

pub mod stub;

use std::sync::Arc;

use axum::Router;

use crate::projector::ProjectorRegistry;
use crate::remote::{PathResolver, SourceFetcher};

/// Built once at startup; nothing in here is mutated by requests.
pub struct AppState {
    pub resolver: PathResolver,
    pub fetcher: Arc<dyn SourceFetcher>,
    pub projectors: ProjectorRegistry,
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState) -> Router {
    Router::new().merge(stub::routes(state))
}
