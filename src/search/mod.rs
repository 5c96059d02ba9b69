//! Autocomplete HTTP Module
//!
//! The request-facing side of the service. It bridges the axum web server with the query
//! translator, the Elasticsearch client and the result projector.
//!
//! ## Request Flow
//! 1. **Validate**: The four required parameters must be present and the enum-like
//!    parameters must hold a known value.
//! 2. **Translate**: Build the query document for the request's domain and mode.
//! 3. **Search**: Submit it to the requested index through the shared client.
//! 4. **Project**: Flatten each hit to a comma-joined `output` string.
//!
//! ## Submodules
//! - **`handlers`**: Axum handlers for search and ping.
//! - **`error`**: Mapping of validation and backend failures to HTTP responses.
//! - **`types`**: Query parameter DTOs and request validation.

pub mod error;
pub mod handlers;
pub mod types;


use crate::elastic::client::ElasticClient;
use axum::http::Method;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const SEARCH_ROUTE: &str = "/autocomplete/search";
pub const PING_ROUTE: &str = "/autocomplete/v1/ping";

/// Builds the service router around a shared backend client.
pub fn router(client: ElasticClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route(SEARCH_ROUTE, get(handlers::handle_autocomplete))
        .route(PING_ROUTE, get(handlers::handle_ping))
        .layer(Extension(Arc::new(client)))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
