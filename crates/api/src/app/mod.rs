//! Axum application assembly.
//!
//! Layout: `services.rs` holds the shared state (warehouse client behind the
//! inventory resolver), `routes/` has one handler file per area, `dto.rs`
//! the query/body types and JSON mappers, `errors.rs` the error envelope.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Assemble the complete router; `main.rs` and the black-box tests both
/// start from here.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
