use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::AdminPortal;
use crate::config::{AppConfig, DEFAULT_MAX_BODY_BYTES};
use crate::handlers::{admin, coasters, health};
use crate::store::CoasterStore;

/// Everything the handlers share. Built once at startup and handed to the
/// router; there is no global state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub coasters: CoasterStore,
    pub admin: AdminPortal,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(coasters: CoasterStore, admin: AdminPortal) -> Self {
        Self {
            coasters,
            admin,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(CoasterStore::new(), AdminPortal::new(config.admin_password.clone()))
            .with_max_body_bytes(config.max_body_bytes)
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Build the complete router. Unknown paths fall through to an empty 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(coaster_routes())
        .merge(admin_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn coaster_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/coasters",
            get(coasters::list)
                .post(coasters::create)
                .fallback(coasters::method_not_allowed),
        )
        // The handler re-checks the raw path, so deeper paths still 404
        .route(
            "/coasters/*rest",
            get(coasters::show).fallback(coasters::method_not_allowed),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin", any(admin::portal))
}
