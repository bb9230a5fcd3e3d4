//! # AstraSim Web
//!
//! axum service that serves the dashboard pages rendered by
//! [`astrasim_core::Site`] plus a small JSON API.
//!
//! | Path | Description |
//! |------|-------------|
//! | any page path | HTML document, 404 document when unmatched |
//! | `/api/v1/health` | liveness check |
//! | `/api/v1/meta/info` | application name, environment, version |
//! | `/api/v1/meta/route?path=` | resolved page metadata for a path |
//! | `/health` | legacy liveness check |
//! | `/static/*` | files from the configured static directory |

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

use astrasim_core::Site;
use tokio::net::TcpListener;

pub use api::{app_router, AppState};
pub use config::{ConfigError, WebConfig};
pub use error::WebError;
pub use logging::init_tracing;

/// Bind `config.listen_addr` and serve until the process is stopped.
pub async fn serve(config: WebConfig) -> std::io::Result<()> {
    let listen_addr = config.listen_addr;
    let state = AppState::new(Site::default(), config);
    let router = app_router(state);

    let listener = TcpListener::bind(listen_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}
