//! Catalog HTTP server.
//!
//! Exposes the catalog resolvers as a read-only JSON API. Handlers only
//! parse and validate parameters; all filtering, sorting, and lookup lives
//! in `catalog-core`.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Service name, version, and available endpoints |
//! | `GET`  | `/api/items` | Search (`q`, `sort_by`, `categories`) |
//! | `GET`  | `/api/items/{id}` | Single item |
//! | `GET`  | `/api/items/{id}/related` | Same-category items (`limit`, default 3, max 10) |
//! | `GET`  | `/api/categories` | Distinct category labels, sorted |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "not_found", "message": "item not found: 999" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500).
//!
//! # CORS
//!
//! With no `[server].cors_origins` configured, all origins, methods, and
//! headers are permitted. Otherwise only the listed origins are allowed.

use anyhow::{Context, Result};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_core::lookup::{distinct_categories, get_by_id, related};
use catalog_core::params::QueryLimits;
use catalog_core::search::{search, SearchRequest};
use catalog_core::{Catalog, CatalogError, InMemoryCatalog, Item};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::load_catalog;
use crate::config::{Config, ServerConfig};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The catalog, built once before the listener binds and never mutated.
    catalog: Arc<InMemoryCatalog>,
    /// Boundary bounds for `q` and `limit`.
    limits: QueryLimits,
}

impl AppState {
    pub fn new(catalog: InMemoryCatalog, limits: QueryLimits) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits,
        }
    }
}

/// Starts the catalog HTTP server.
///
/// Loads the catalog, binds to `bind` (or `[server].bind` when `None`), and
/// serves until the process is terminated or receives Ctrl-C.
pub async fn run_server(config: &Config, bind: Option<&str>) -> Result<()> {
    let bind_addr = bind.unwrap_or(config.server.bind.as_str()).to_string();
    let catalog = load_catalog(config)?;
    let item_count = catalog.len();

    let state = AppState::new(catalog, config.query.limits());
    let app = build_router(state, &config.server)?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!(
        addr = %bind_addr,
        items = item_count,
        "catalog server listening on http://{}",
        bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Builds the router with CORS and request tracing applied.
///
/// Fails only if a configured CORS origin is not a valid header value.
pub fn build_router(state: AppState, server: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(&server.cors_origins)?;

    Ok(Router::new()
        .route("/", get(handle_root))
        .route("/api/items", get(handle_search))
        .route("/api/items/{id}", get(handle_get_item))
        .route("/api/items/{id}/related", get(handle_related))
        .route("/api/categories", get(handle_categories))
        .route("/health", get(handle_health))
        .fallback(handle_fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .with_context(|| format!("invalid CORS origin in server.cors_origins: {}", o))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`, `"not_found"`).
    code: String,
    /// Human-readable error message.
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = %self.code, "{}", self.message);
        } else {
            tracing::debug!(status = self.status.as_u16(), code = %self.code, "{}", self.message);
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => not_found(err.to_string()),
            CatalogError::Validation { .. } => bad_request(err.to_string()),
            CatalogError::InvalidCatalog { .. } => internal(err.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        bad_request(rejection.body_text())
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

/// Constructs a 404 Not Found error.
fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

/// Constructs a 500 error.
fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: message.into(),
    }
}

// ============ GET / ============

/// JSON response body for `GET /`.
#[derive(Serialize)]
struct RootResponse {
    message: String,
    version: String,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    search: &'static str,
    item_detail: &'static str,
    related_items: &'static str,
    categories: &'static str,
    health: &'static str,
}

async fn handle_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Catalog Search API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            search: "/api/items?q=search_term&sort_by=name&categories=Electronics,Furniture",
            item_detail: "/api/items/{item_id}",
            related_items: "/api/items/{item_id}/related?limit=3",
            categories: "/api/categories",
            health: "/health",
        },
    })
}

// ============ GET /api/items ============

/// Raw query string for `GET /api/items`. Validated in the handler so every
/// failure uses the JSON error contract.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
    sort_by: Option<String>,
    categories: Option<String>,
}

async fn handle_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, AppError> {
    let Query(query) = query?;

    let req = SearchRequest {
        query: state.limits.query(query.q.as_deref())?,
        categories: query.categories.as_deref(),
        sort_by: state.limits.sort_by(query.sort_by.as_deref())?,
    };
    let results = search(&*state.catalog, &req);

    tracing::debug!(
        q = ?req.query,
        categories = ?req.categories,
        sort_by = %req.sort_by,
        results = results.len(),
        "search"
    );
    Ok(Json(results))
}

// ============ GET /api/items/{id} ============

async fn handle_get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, AppError> {
    let Path(id) = id?;
    let item = get_by_id(&*state.catalog, id)?;
    Ok(Json(item.clone()))
}

// ============ GET /api/items/{id}/related ============

#[derive(Debug, Deserialize)]
struct RelatedQuery {
    limit: Option<i64>,
}

async fn handle_related(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<RelatedQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, AppError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let limit = state.limits.related_limit(query.limit)?;
    let items = related(&*state.catalog, id, limit)?;
    Ok(Json(items))
}

// ============ GET /api/categories ============

/// JSON response body for `GET /api/categories`.
#[derive(Serialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: distinct_categories(&*state.catalog),
    })
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_fallback() -> AppError {
    not_found("no such endpoint")
}
