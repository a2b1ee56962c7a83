//! Page and API route handlers.

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use broadcast::{bootstrap, resolve_name, BroadcastName, PageVariant, Resolver, Role};

use crate::api::AppState;
use crate::document::Document;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(watch_page))
        .route("/index.html", get(watch_page))
        .route("/publish.html", get(publish_page))
        .route("/support.html", get(support_page))
}

pub fn api_routes() -> Router<AppState> {
    Router::new().route("/resolve", get(resolve))
}

// --- Pages ---

async fn watch_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, (StatusCode, String)> {
    render_page(PageVariant::Watch, query, &state.resolver)
}

async fn publish_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, (StatusCode, String)> {
    render_page(PageVariant::Publish, query, &state.resolver)
}

async fn support_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_page(PageVariant::Support, None, &state.resolver)
}

/// Bind a fresh document for one page load and render it.
fn render_page(
    variant: PageVariant,
    query: Option<String>,
    resolver: &Resolver,
) -> Result<Html<String>, (StatusCode, String)> {
    bind_and_render(Document::for_variant(variant), variant, query, resolver)
}

fn bind_and_render(
    mut doc: Document,
    variant: PageVariant,
    query: Option<String>,
    resolver: &Resolver,
) -> Result<Html<String>, (StatusCode, String)> {
    bootstrap(&mut doc, variant, query.as_deref().unwrap_or(""), resolver).map_err(|e| {
        tracing::warn!(?variant, error = %e, "failed to bind page");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(Html(doc.render()))
}

// --- API ---

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveResponse {
    pub role: Role,
    pub name: String,
    pub url: String,
    /// Only for publishers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_link: Option<String>,
}

/// Resolve a name with the same defaults the pages use.
/// `GET /api/resolve?name=demo/me&role=publisher`
async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResolveResponse>, (StatusCode, String)> {
    let role = match params.role.as_deref() {
        Some(role) => role
            .parse::<Role>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?,
        None => Role::Watcher,
    };
    let name = resolve_name(query.as_deref().unwrap_or(""), role);
    Ok(Json(resolve_response(&state.resolver, role, &name)))
}

fn resolve_response(resolver: &Resolver, role: Role, name: &BroadcastName) -> ResolveResponse {
    let url = resolver.resolve_address(name);
    let watch_link = match role {
        Role::Publisher => Some(resolver.watch_link(name)),
        Role::Watcher => None,
    };
    ResolveResponse {
        role,
        name: name.to_string(),
        url: url.into_string(),
        watch_link,
    }
}
