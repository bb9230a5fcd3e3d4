use std::sync::Arc;

use astrasim_core::{RouteMetadata, Site};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::WebConfig;
use crate::error::WebError;
use crate::logging::log_request;

pub const API_V1_PREFIX: &str = "/api/v1";

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub config: Arc<WebConfig>,
    pub started_at: OffsetDateTime,
}

impl AppState {
    pub fn new(site: Site, config: WebConfig) -> Self {
        Self {
            site: Arc::new(site),
            config: Arc::new(config),
            started_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaInfoResponse {
    pub app_name: String,
    pub environment: String,
    pub version: String,
    pub started_at: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub path: String,
}

/// Build the application router: JSON API under `/api/v1`, pages everywhere else.
pub fn app_router(state: AppState) -> Router {
    let api = Router::<AppState>::new()
        .route("/health", get(health))
        .route("/meta/info", get(meta_info))
        .route("/meta/route", get(meta_route));

    let mut router = Router::<AppState>::new()
        .route("/health", get(health))
        .nest(API_V1_PREFIX, api);

    if let Some(static_dir) = &state.config.static_dir {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    let cors = cors_layer(&state.config.cors_origins);

    let router = router
        .fallback(render_page)
        .with_state(state)
        .layer(middleware::from_fn(log_request));

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allowed = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn meta_info(State(state): State<AppState>) -> Json<MetaInfoResponse> {
    let started_at = state
        .started_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| state.started_at.to_string());

    Json(MetaInfoResponse {
        app_name: state.config.app_name.clone(),
        environment: state.config.environment.clone(),
        version: state.config.version.clone(),
        started_at,
    })
}

async fn meta_route(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<RouteMetadata>, WebError> {
    let Query(query) = query.map_err(|rejection| WebError::InvalidQuery {
        message: rejection.body_text(),
    })?;
    let metadata = state.site.metadata(&query.path)?;
    Ok(Json(metadata))
}

async fn render_page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return WebError::MethodNotAllowed {
            method: method.to_string(),
        }
        .into_response();
    }

    let path = uri.path();
    match state.site.render(path) {
        Ok(page) => {
            tracing::debug!(page = page.page, %path, "rendered page");
            Html(page.html).into_response()
        }
        Err(error) => WebError::PageNotFound {
            document: state.site.not_found(path),
            error,
        }
        .into_response(),
    }
}
