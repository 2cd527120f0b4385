use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use hatworks_catalog::find_model;
use hatworks_inventory::WarehouseClient;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/models", get(list_models))
        .route("/models/:model", get(get_model))
        .route("/models/:model/style", get(get_model_style))
}

pub async fn list_models() -> axum::response::Response {
    let items = hatworks_catalog::entries()
        .iter()
        .map(dto::catalog_entry_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_model(Path(model): Path<String>) -> axum::response::Response {
    match find_model(&model) {
        Ok(entry) => (StatusCode::OK, Json(dto::catalog_entry_to_json(entry))).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// Upstream style metadata for one model. Supplier failures degrade to
/// `style: null` rather than an error, mirroring the inventory routes.
pub async fn get_model_style(
    Extension(services): Extension<Arc<AppServices>>,
    Path(model): Path<String>,
) -> axum::response::Response {
    let entry = match find_model(&model) {
        Ok(entry) => entry,
        Err(err) => return errors::domain_error_to_response(err),
    };

    let style = match services.client().fetch_style(entry.style_id).await {
        Ok(records) => records.into_iter().next().map(dto::style_record_to_json),
        Err(err) => {
            tracing::warn!(model = %entry.model, error = %err, "style metadata fetch failed");
            None
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "model": entry.model,
            "style_id": entry.style_id,
            "style": style,
        })),
    )
        .into_response()
}
