//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Handles shared by all requests.
///
/// Built once at startup from the connection pool; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
}

impl AppState {
    /// Creates the state from an already constructed link service.
    pub fn new(link_service: Arc<LinkService<PgLinkRepository>>) -> Self {
        Self { link_service }
    }

    /// Wires the repository and service on top of `pool`.
    pub fn from_pool(pool: sqlx::PgPool, base_url: impl Into<String>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool));
        let link_service = Arc::new(LinkService::new(link_repository, base_url));
        Self::new(link_service)
    }
}
