use serde::Deserialize;

use hatworks_catalog::StyleCatalogEntry;
use hatworks_inventory::{InventorySnapshot, StyleRecord};

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters accepted by `GET /inventory`.
///
/// One selector (`part_number`, `style_id`, `model`) is honored per request,
/// checked in that order. `color_code` narrows `model` to a single quantity
/// and `debug=true` short-circuits to the credential diagnostic.
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub style_id: Option<String>,
    pub model: Option<String>,
    pub color_code: Option<String>,
    pub part_number: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Body served for every inventory selector when credentials are absent.
pub fn not_configured_json() -> serde_json::Value {
    serde_json::json!({
        "configured": false,
        "fetched": false,
        "qty": null,
        "inventory": {},
        "error": "API not configured",
    })
}

pub fn snapshot_to_json(snapshot: &InventorySnapshot) -> serde_json::Value {
    serde_json::json!(snapshot.quantities())
}

pub fn catalog_entry_to_json(entry: &StyleCatalogEntry) -> serde_json::Value {
    serde_json::json!({
        "model": entry.model,
        "style_id": entry.style_id,
        "brand": entry.brand,
    })
}

pub fn style_record_to_json(record: StyleRecord) -> serde_json::Value {
    serde_json::json!({
        "style_id": record.style_id,
        "part_number": record.part_number,
        "brand_name": record.brand_name,
        "style_name": record.style_name,
        "title": record.title,
        "base_category": record.base_category,
    })
}
