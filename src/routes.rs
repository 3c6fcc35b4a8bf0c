//! Router assembly.
//!
//! The storefront is a static page plus a wasm bundle, so the router is just
//! two file services and a health probe. `/pkg` carries the wasm-bindgen
//! output; everything else falls through to the public directory, with
//! `index.html` served for directory paths.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full application router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    let public = ServeDir::new(&config.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
