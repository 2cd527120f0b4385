use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use hatworks_catalog::{find_model, split_legacy_part_number};
use hatworks_core::StyleId;
use hatworks_inventory::StockLevel;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::InventoryQuery>,
) -> axum::response::Response {
    if params.debug {
        let diagnostic = services.client().credentials().diagnostic();
        return (StatusCode::OK, Json(diagnostic)).into_response();
    }

    if !services.client().credentials().is_configured() {
        return (StatusCode::OK, Json(dto::not_configured_json())).into_response();
    }

    // Legacy combined part numbers take precedence, then explicit style ids,
    // then model codes.
    if let Some(part_number) = params.part_number.as_deref() {
        return part_number_lookup(&services, part_number).await;
    }

    if let Some(raw) = params.style_id.as_deref() {
        let style_id: StyleId = match raw.parse() {
            Ok(v) => v,
            Err(e) => return errors::domain_error_to_response(e),
        };
        return style_lookup(&services, style_id).await;
    }

    if let Some(model) = params.model.as_deref() {
        return model_lookup(&services, model, params.color_code.as_deref()).await;
    }

    errors::json_error(
        StatusCode::BAD_REQUEST,
        "missing_parameter",
        "Please provide model, style_id, or part_number parameter",
    )
}

/// `?part_number=112-BLK`: old storefront links carry the combined form.
/// Unknown models answer `qty: null` rather than an error so stale links
/// degrade quietly.
async fn part_number_lookup(services: &AppServices, part_number: &str) -> axum::response::Response {
    let style_id = split_legacy_part_number(part_number)
        .and_then(|(model, _)| find_model(model).ok())
        .map(|entry| entry.style_id);
    let Some(style_id) = style_id else {
        return (
            StatusCode::OK,
            Json(serde_json::json!({ "part_number": part_number, "qty": null })),
        )
            .into_response();
    };

    let outcome = services.resolver().resolve(style_id).await;
    let qty = outcome
        .snapshot()
        .map(|snapshot| snapshot.quantity_for(part_number, None))
        .and_then(|level| level.quantity());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "part_number": part_number, "qty": qty })),
    )
        .into_response()
}

/// `?style_id=4332`: raw snapshot for one supplier style.
async fn style_lookup(services: &AppServices, style_id: StyleId) -> axum::response::Response {
    let outcome = services.resolver().resolve(style_id).await;
    let inventory = match outcome.snapshot() {
        Some(snapshot) => dto::snapshot_to_json(snapshot),
        None => serde_json::json!({}),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "style_id": style_id,
            "configured": true,
            "fetched": outcome.is_fetched(),
            "inventory": inventory,
        })),
    )
        .into_response()
}

/// `?model=112[&color_code=BLK]`: catalog-backed lookup, either the whole
/// color mapping or one sellable quantity.
async fn model_lookup(
    services: &AppServices,
    model: &str,
    color_code: Option<&str>,
) -> axum::response::Response {
    // The legacy surface answered unknown models with 400, not 404; keep it.
    let entry = match find_model(model) {
        Ok(entry) => entry,
        Err(err) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "unknown_model", err.to_string());
        }
    };

    let outcome = services.resolver().resolve(entry.style_id).await;

    if let Some(color_code) = color_code {
        let level = match outcome.snapshot() {
            Some(snapshot) => snapshot.quantity_for(&format!("{model}-{color_code}"), None),
            None => StockLevel::Unknown,
        };
        return (
            StatusCode::OK,
            Json(serde_json::json!({
                "model": model,
                "color_code": color_code,
                "style_id": entry.style_id,
                "qty": level.quantity(),
                "low_stock": level.is_low(),
            })),
        )
            .into_response();
    }

    let inventory = match outcome.snapshot() {
        Some(snapshot) => dto::snapshot_to_json(snapshot),
        None => serde_json::json!({}),
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "model": model,
            "style_id": entry.style_id,
            "configured": true,
            "fetched": outcome.is_fetched(),
            "inventory": inventory,
        })),
    )
        .into_response()
}
