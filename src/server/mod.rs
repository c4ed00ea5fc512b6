//! Preview server
//!
//! Serves the public directory at `/` and the content collections as JSON
//! under `/api`. Every request loads a fresh snapshot of the content.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{self, BlogPost, Leader, OutreachEvent, Sponsor, SponsorTier};
use crate::error::ContentError;
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
}

/// Error returned by the API handlers
#[derive(Debug)]
enum ApiError {
    Content(ContentError),
    Internal(String),
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        ApiError::Content(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Content(err) if err.is_not_found() => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Content(err) => {
                tracing::error!("Content error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Build the router for a site
pub fn router(site: Site) -> Router {
    let public_dir = site.public_dir.clone();
    let state = Arc::new(ServerState { site });

    Router::new()
        .route("/api/blog", get(list_posts))
        .route("/api/blog/:slug", get(get_post))
        .route("/api/leaders", get(list_leaders))
        .route("/api/outreach", get(list_outreach))
        .route("/api/sponsors", get(list_sponsors))
        .route("/api/sponsors/tiers", get(sponsor_tiers))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run a content load on the blocking pool
async fn load<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ContentError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

async fn list_posts(State(state): State<Arc<ServerState>>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let site = state.site.clone();
    Ok(Json(load(move || site.posts()).await?))
}

async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let site = state.site.clone();
    Ok(Json(load(move || site.post(&slug)).await?))
}

async fn list_leaders(State(state): State<Arc<ServerState>>) -> Result<Json<Vec<Leader>>, ApiError> {
    let site = state.site.clone();
    Ok(Json(load(move || site.leaders()).await?))
}

async fn list_outreach(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<OutreachEvent>>, ApiError> {
    let site = state.site.clone();
    Ok(Json(load(move || site.outreach_events()).await?))
}

async fn list_sponsors(State(state): State<Arc<ServerState>>) -> Result<Json<Vec<Sponsor>>, ApiError> {
    let site = state.site.clone();
    Ok(Json(load(move || site.sponsors()).await?))
}

#[derive(Serialize)]
struct TierGroup {
    tier: SponsorTier,
    sponsors: Vec<Sponsor>,
}

async fn sponsor_tiers(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<TierGroup>>, ApiError> {
    let site = state.site.clone();
    let sponsors = load(move || site.sponsors()).await?;

    let groups = content::group_by_tier(&sponsors)
        .into_iter()
        .map(|(tier, members)| TierGroup {
            tier,
            sponsors: members.into_iter().cloned().collect(),
        })
        .collect();
    Ok(Json(groups))
}
