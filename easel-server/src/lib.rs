//! # Easel Persistence Server
//!
//! Shared types and router assembly for the persistence server. The binary
//! and the integration tests both build the application from [`app`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod health;
pub mod routes;
pub mod store;

pub use store::{ImageStore, SavedImage, StoreError};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The filesystem image store.
    pub store: Arc<ImageStore>,
}

impl AppState {
    /// Wrap a store as shared state.
    #[must_use]
    pub fn new(store: ImageStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build a CORS layer that only allows localhost origins.
///
/// The server binds to localhost only; requests from anywhere else are
/// rejected at the CORS layer too.
#[must_use]
pub fn build_cors_layer(port: u16) -> CorsLayer {
    let localhost_origins = [
        format!("http://localhost:{port}"),
        format!("http://127.0.0.1:{port}"),
        // Common dev-server ports
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ];

    let origins: Vec<HeaderValue> = localhost_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Assemble the application router over shared state.
///
/// Stored images are served statically under `/saved/`.
#[must_use]
pub fn app(state: AppState, port: u16) -> Router {
    let saved_service = ServeDir::new(state.store.data_dir());

    Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness))
        .route("/api/save", post(routes::save_image))
        .route("/api/delete", post(routes::delete_image))
        .route("/api/images", get(routes::list_images))
        .route("/api/save_placeholder", post(routes::save_placeholder))
        .nest_service("/saved", saved_service)
        .layer(build_cors_layer(port))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
