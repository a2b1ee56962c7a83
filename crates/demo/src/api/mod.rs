//! HTTP routes.

mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use broadcast::Resolver;

use crate::config::Config;

/// Shared app state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<Resolver>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resolver = Resolver::new(config.resolver.clone());
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(routes::page_routes())
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
