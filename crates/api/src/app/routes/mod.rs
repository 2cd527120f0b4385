use axum::{Router, routing::get};

pub mod catalog;
pub mod inventory;
pub mod pricing;
pub mod system;

/// Router for everything except the bare health route.
pub fn router() -> Router {
    Router::new()
        .route("/inventory", get(inventory::get_inventory))
        .nest("/catalog", catalog::router())
        .nest("/pricing", pricing::router())
}
