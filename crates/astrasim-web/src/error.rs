use astrasim_core::RouteError;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-level failures of the HTTP service.
#[derive(Debug, Error)]
pub enum WebError {
    /// Page path with no route; carries the rendered not-found document.
    #[error("{error}")]
    PageNotFound { error: RouteError, document: String },

    /// API lookup for a path with no route.
    #[error(transparent)]
    RouteNotFound(#[from] RouteError),

    #[error("method {method} is not allowed")]
    MethodNotAllowed { method: String },

    /// API request whose query string could not be read.
    #[error("{message}")]
    InvalidQuery { message: String },
}

impl WebError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::PageNotFound { .. } | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::PageNotFound { error, .. } | Self::RouteNotFound(error) => error.code(),
            Self::MethodNotAllowed { .. } => "http.method_not_allowed",
            Self::InvalidQuery { .. } => "http.invalid_query",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::PageNotFound { document, .. } => (status, Html(document)).into_response(),
            Self::MethodNotAllowed { .. } => {
                let mut response = (status, self.to_string()).into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
                response
            }
            Self::RouteNotFound(_) | Self::InvalidQuery { .. } => {
                let body = json!({
                    "error": {
                        "code": self.code(),
                        "message": self.to_string(),
                    }
                });
                (status, Json(body)).into_response()
            }
        }
    }
}
