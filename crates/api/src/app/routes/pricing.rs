use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use chrono::Utc;

use hatworks_core::QuoteId;
use hatworks_pricing::{QuoteRequest, price_quote};

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/quote", post(create_quote))
}

pub async fn create_quote(Json(body): Json<QuoteRequest>) -> axum::response::Response {
    match price_quote(&body, QuoteId::new(), Utc::now()) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
