use serde::Serialize;

use hatworks_core::{DomainError, DomainResult, ModelCode, StyleId};

/// One sellable model and where it lives upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleCatalogEntry {
    /// Storefront model code, uppercase alphanumeric.
    pub model: &'static str,
    /// The supplier's style id for this model.
    pub style_id: StyleId,
    /// Brand line the model belongs to.
    pub brand: &'static str,
}

const fn entry(model: &'static str, style_id: u32, brand: &'static str) -> StyleCatalogEntry {
    StyleCatalogEntry {
        model,
        style_id: StyleId::new(style_id),
        brand,
    }
}

/// Every model the shop sells, in display order.
static STYLE_CATALOG: &[StyleCatalogEntry] = &[
    entry("112", 4332, "Richardson"),
    entry("112PFP", 12234, "Richardson"),
    entry("168", 2130, "Richardson"),
    entry("220", 15650, "Richardson"),
    entry("256", 8151, "Richardson"),
    entry("258", 12237, "Richardson"),
    entry("6606", 3783, "YP Classics"),
    entry("6006", 2523, "YP Classics"),
    entry("6506", 5768, "YP Classics"),
];

/// All catalog entries in display order.
pub fn entries() -> &'static [StyleCatalogEntry] {
    STYLE_CATALOG
}

/// Look up a model code in the catalog.
pub fn find(model: &ModelCode) -> Option<&'static StyleCatalogEntry> {
    STYLE_CATALOG.iter().find(|e| e.model == model.as_str())
}

/// Look up a raw model string, normalizing through [`ModelCode`] first.
///
/// A string that does not even parse as a model code cannot be in the
/// catalog, so both failure shapes collapse to
/// [`DomainError::UnknownModel`] carrying the caller's spelling.
pub fn find_model(raw: &str) -> DomainResult<&'static StyleCatalogEntry> {
    ModelCode::parse(raw)
        .ok()
        .as_ref()
        .and_then(find)
        .ok_or_else(|| DomainError::unknown_model(raw))
}

/// Split a legacy combined part number (`112-BLK`) into model and color code.
///
/// The split happens on the first dash only; the color side keeps any later
/// dashes (`112PFP-RTEDG-BRN` → `112PFP` / `RTEDG-BRN`). Returns `None` when
/// either side would be empty.
pub fn split_legacy_part_number(part_number: &str) -> Option<(&str, &str)> {
    let (model, color) = part_number.split_once('-')?;
    if model.is_empty() || color.is_empty() {
        return None;
    }
    Some((model, color))
}
