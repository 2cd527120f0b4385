//! Normalized per-style inventory snapshots.
//!
//! A snapshot is the flattened answer to "what does the warehouse have for
//! style X right now": every SKU line collapsed into a key → quantity table,
//! stamped with the fetch time. Snapshots are built once and never mutated;
//! the resolver replaces them wholesale on refresh.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{color_code_suffix, color_name_key, part_number_key};

/// Units held back from every displayed quantity, absorbing concurrent
/// orders and upstream reporting lag.
pub const STOCK_BUFFER: u32 = 99;

/// At or below this (buffered) quantity the storefront flags the color as low.
pub const LOW_STOCK_THRESHOLD: u32 = 50;

/// Per-warehouse quantity line inside a SKU record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStock {
    #[serde(default)]
    pub warehouse_abbr: String,
    #[serde(default)]
    pub qty: Option<i64>,
}

/// One SKU record as the supplier's products endpoint returns it.
///
/// Every field is optional on the wire: the endpoint is queried with a
/// `fields=` filter and omits anything not asked for, and some records are
/// simply sparse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseLineItem {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub color_name: String,
    #[serde(default)]
    pub size_name: String,
    #[serde(default)]
    pub qty: Option<i64>,
    #[serde(default)]
    pub warehouses: Option<Vec<WarehouseStock>>,
}

impl WarehouseLineItem {
    /// Total units for this SKU line.
    ///
    /// A non-empty per-warehouse breakdown is authoritative and the direct
    /// `qty` is ignored; otherwise the direct `qty` is used. Missing values
    /// read as zero.
    pub fn total_quantity(&self) -> i64 {
        match &self.warehouses {
            Some(warehouses) if !warehouses.is_empty() => warehouses
                .iter()
                .map(|w| w.qty.unwrap_or(0))
                .fold(0i64, i64::saturating_add),
            _ => self.qty.unwrap_or(0),
        }
    }
}

/// Result of looking one catalog item up in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// The item could not be correlated with any upstream SKU (or there is
    /// no usable snapshot data at all). Not the same as zero: callers must
    /// not cap or block on it.
    Unknown,
    /// Sellable quantity after the safety buffer.
    Available(u32),
}

impl StockLevel {
    pub fn quantity(&self) -> Option<u32> {
        match self {
            StockLevel::Unknown => None,
            StockLevel::Available(n) => Some(*n),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StockLevel::Unknown)
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockLevel::Available(0))
    }

    /// In stock but at or under the low-stock display threshold.
    pub fn is_low(&self) -> bool {
        matches!(self, StockLevel::Available(n) if *n > 0 && *n <= LOW_STOCK_THRESHOLD)
    }
}

/// Flattened inventory for one style id at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySnapshot {
    quantities: HashMap<String, u32>,
    fetched_at: DateTime<Utc>,
}

impl InventorySnapshot {
    /// Flatten raw SKU lines into the normalized lookup table.
    ///
    /// Each line contributes up to three keys: the normalized full part
    /// number, the trailing color-code suffix, and the normalized color
    /// name. Keys that collide accumulate by summation, so several sizes of
    /// one color all land in the same color key. Totals are clamped at zero;
    /// a snapshot never reports negative stock.
    pub fn from_line_items(items: &[WarehouseLineItem], fetched_at: DateTime<Utc>) -> Self {
        let mut acc: HashMap<String, i64> = HashMap::new();

        for item in items {
            let total = item.total_quantity();

            let full = part_number_key(&item.part_number);
            if !full.is_empty() {
                *acc.entry(full).or_insert(0) += total;
            }

            if let Some(code) = color_code_suffix(&item.part_number) {
                *acc.entry(code).or_insert(0) += total;
            }

            let name = color_name_key(&item.color_name);
            if !name.is_empty() {
                *acc.entry(name).or_insert(0) += total;
            }
        }

        let quantities = acc
            .into_iter()
            .map(|(key, total)| (key, total.clamp(0, i64::from(u32::MAX)) as u32))
            .collect();

        Self {
            quantities,
            fetched_at,
        }
    }

    /// An empty table with the given timestamp ("fetched, nothing there").
    pub fn empty(fetched_at: DateTime<Utc>) -> Self {
        Self {
            quantities: HashMap::new(),
            fetched_at,
        }
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.fetched_at)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Raw (un-buffered) quantity under an exact normalized key.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.quantities.get(key).copied()
    }

    pub fn quantities(&self) -> &HashMap<String, u32> {
        &self.quantities
    }

    /// Answer "how many can we sell" for one catalog item.
    ///
    /// Strategies run in a fixed order, first hit wins, no summation across
    /// strategies (construction already summed within each key):
    /// 1. the normalized full part number;
    /// 2. the part number's trailing color-code suffix;
    /// 3. the normalized color name, when one is given.
    ///
    /// A hit has the safety buffer subtracted, floored at zero. An empty
    /// snapshot answers [`StockLevel::Unknown`] for everything: at this
    /// layer a truly empty style and an unconfigured upstream look alike.
    pub fn quantity_for(&self, part_number: &str, color_name: Option<&str>) -> StockLevel {
        if self.quantities.is_empty() {
            return StockLevel::Unknown;
        }

        match self.raw_quantity_for(part_number, color_name) {
            Some(raw) => StockLevel::Available(raw.saturating_sub(STOCK_BUFFER)),
            None => StockLevel::Unknown,
        }
    }

    fn raw_quantity_for(&self, part_number: &str, color_name: Option<&str>) -> Option<u32> {
        let full = part_number_key(part_number);
        if !full.is_empty() {
            if let Some(qty) = self.get(&full) {
                return Some(qty);
            }
        }

        if let Some(code) = color_code_suffix(part_number) {
            if let Some(qty) = self.get(&code) {
                return Some(qty);
            }
        }

        if let Some(name) = color_name.map(color_name_key) {
            if !name.is_empty() {
                if let Some(qty) = self.get(&name) {
                    return Some(qty);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn line(part_number: &str, color_name: &str, qty: i64) -> WarehouseLineItem {
        WarehouseLineItem {
            sku: None,
            part_number: part_number.to_string(),
            color_name: color_name.to_string(),
            size_name: "OSFM".to_string(),
            qty: Some(qty),
            warehouses: None,
        }
    }

    fn line_with_warehouses(
        part_number: &str,
        color_name: &str,
        direct_qty: i64,
        breakdown: &[i64],
    ) -> WarehouseLineItem {
        let warehouses = breakdown
            .iter()
            .map(|qty| WarehouseStock {
                warehouse_abbr: "IL".to_string(),
                qty: Some(*qty),
            })
            .collect();
        WarehouseLineItem {
            sku: Some("S104".to_string()),
            part_number: part_number.to_string(),
            color_name: color_name.to_string(),
            size_name: "OSFM".to_string(),
            qty: Some(direct_qty),
            warehouses: Some(warehouses),
        }
    }

    #[test]
    fn breakdown_is_authoritative_over_direct_qty() {
        let item = line_with_warehouses("112-BLK", "Black", 999, &[120, 30]);
        assert_eq!(item.total_quantity(), 150);
    }

    #[test]
    fn direct_qty_used_when_breakdown_missing_or_empty() {
        let mut item = line("112-BLK", "Black", 42);
        assert_eq!(item.total_quantity(), 42);

        item.warehouses = Some(vec![]);
        assert_eq!(item.total_quantity(), 42);
    }

    #[test]
    fn missing_quantities_read_as_zero() {
        let item = WarehouseLineItem {
            sku: None,
            part_number: "112-BLK".to_string(),
            color_name: String::new(),
            size_name: String::new(),
            qty: None,
            warehouses: None,
        };
        assert_eq!(item.total_quantity(), 0);
    }

    #[test]
    fn snapshot_carries_three_keys_per_line() {
        let snapshot = InventorySnapshot::from_line_items(
            &[line_with_warehouses("112-BLK", "Black", 999, &[120, 30])],
            test_time(),
        );

        assert_eq!(snapshot.get("112-BLK"), Some(150));
        assert_eq!(snapshot.get("BLK"), Some(150));
        assert_eq!(snapshot.get("BLACK"), Some(150));
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn colliding_keys_sum_instead_of_overwriting() {
        // Two sizes of the same color share every derived key.
        let snapshot = InventorySnapshot::from_line_items(
            &[line("6606-NVY", "Navy", 40), line("6606-NVY", "Navy", 25)],
            test_time(),
        );

        assert_eq!(snapshot.get("6606-NVY"), Some(65));
        assert_eq!(snapshot.get("NVY"), Some(65));
        assert_eq!(snapshot.get("NAVY"), Some(65));
    }

    #[test]
    fn different_raw_spellings_meet_in_one_key() {
        // "112 BLK" and "112BLK" normalize to the same full key.
        let snapshot = InventorySnapshot::from_line_items(
            &[line("112 BLK", "", 10), line("112BLK", "", 5)],
            test_time(),
        );

        assert_eq!(snapshot.get("112BLK"), Some(15));
    }

    #[test]
    fn negative_upstream_totals_clamp_to_zero() {
        let snapshot =
            InventorySnapshot::from_line_items(&[line("112-BLK", "Black", -50)], test_time());

        assert_eq!(snapshot.get("112-BLK"), Some(0));
    }

    #[test]
    fn buffered_lookup_subtracts_reserve_floored_at_zero() {
        let snapshot = InventorySnapshot::from_line_items(
            &[
                line("112-BLK", "Black", 150),
                line("112-NVY", "Navy", 99),
                line("112-WHT", "White", 30),
            ],
            test_time(),
        );

        assert_eq!(
            snapshot.quantity_for("112-BLK", Some("Black")),
            StockLevel::Available(51)
        );
        assert_eq!(
            snapshot.quantity_for("112-NVY", Some("Navy")),
            StockLevel::Available(0)
        );
        assert_eq!(
            snapshot.quantity_for("112-WHT", Some("White")),
            StockLevel::Available(0)
        );
    }

    #[test]
    fn dashless_query_falls_through_to_suffix_key() {
        let snapshot = InventorySnapshot::from_line_items(
            &[line_with_warehouses("112-BLK", "Black", 999, &[120, 30])],
            test_time(),
        );

        // "112BLK" is not a stored key, but its suffix "BLK" is.
        assert_eq!(
            snapshot.quantity_for("112BLK", None),
            StockLevel::Available(51)
        );
    }

    #[test]
    fn strategy_order_prefers_full_part_number() {
        let snapshot = InventorySnapshot::from_line_items(
            &[line("112-BLK", "Black", 200), line("220-BLK", "Black", 500)],
            test_time(),
        );

        // Full key hits first; the shared "BLK" suffix key (700) never runs.
        assert_eq!(
            snapshot.quantity_for("112-BLK", None),
            StockLevel::Available(101)
        );
    }

    #[test]
    fn color_name_is_the_last_resort() {
        let snapshot = InventorySnapshot::from_line_items(
            &[line("112-HGBLK", "Heather Grey/Black", 120)],
            test_time(),
        );

        // Neither the full key nor the suffix of the query matches; the
        // normalized color name does.
        assert_eq!(
            snapshot.quantity_for("UNLISTED-XYZ", Some("Heather Grey / Black")),
            StockLevel::Available(21)
        );
        // Without a color name the same query has nowhere left to go.
        assert_eq!(
            snapshot.quantity_for("UNLISTED-XYZ", None),
            StockLevel::Unknown
        );
    }

    #[test]
    fn unmatched_lookup_is_unknown_not_zero() {
        let snapshot =
            InventorySnapshot::from_line_items(&[line("112-BLK", "Black", 150)], test_time());

        let level = snapshot.quantity_for("6606-RED", Some("Red"));
        assert!(level.is_unknown());
        assert_eq!(level.quantity(), None);

        // A real zero is a different answer.
        assert_eq!(
            snapshot.quantity_for("112-BLK", None).quantity(),
            Some(51)
        );
    }

    #[test]
    fn empty_snapshot_answers_unknown_for_everything() {
        let snapshot = InventorySnapshot::empty(test_time());

        assert!(snapshot.is_empty());
        assert!(snapshot.quantity_for("112-BLK", Some("Black")).is_unknown());
    }

    #[test]
    fn stock_level_predicates() {
        assert!(StockLevel::Unknown.is_unknown());
        assert!(!StockLevel::Unknown.is_low());
        assert!(StockLevel::Available(0).is_out_of_stock());
        assert!(!StockLevel::Available(0).is_low());
        assert!(StockLevel::Available(49).is_low());
        // The threshold itself still counts as low; only 51+ clears it.
        assert!(StockLevel::Available(LOW_STOCK_THRESHOLD).is_low());
        assert!(!StockLevel::Available(LOW_STOCK_THRESHOLD + 1).is_low());
    }

    #[test]
    fn age_measures_since_fetch() {
        let snapshot = InventorySnapshot::empty(test_time());
        let later = test_time() + Duration::minutes(7);
        assert_eq!(snapshot.age(later), Duration::minutes(7));
    }

    #[test]
    fn line_item_parses_supplier_json() {
        let json = r#"{
            "sku": "B00760004",
            "partNumber": "112-BLK",
            "colorName": "Black",
            "sizeName": "OSFM",
            "qty": 5,
            "warehouses": [
                {"warehouseAbbr": "IL", "qty": 3},
                {"warehouseAbbr": "KS", "qty": 2}
            ]
        }"#;

        let item: WarehouseLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.part_number, "112-BLK");
        assert_eq!(item.total_quantity(), 5);
        assert_eq!(item.warehouses.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn line_item_tolerates_sparse_records() {
        let item: WarehouseLineItem = serde_json::from_str(r#"{"partNumber": "112-RED"}"#).unwrap();
        assert_eq!(item.qty, None);
        assert_eq!(item.total_quantity(), 0);

        let nulls: WarehouseLineItem =
            serde_json::from_str(r#"{"partNumber": "112-RED", "qty": null, "warehouses": null}"#)
                .unwrap();
        assert_eq!(nulls.total_quantity(), 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_line() -> impl Strategy<Value = WarehouseLineItem> {
            (
                "[0-9]{3}-[A-Z]{2,6}",
                "[A-Za-z ]{0,12}",
                0i64..5_000,
                proptest::collection::vec(0i64..2_000, 0..4),
            )
                .prop_map(|(part, color, qty, breakdown)| {
                    let warehouses = if breakdown.is_empty() {
                        None
                    } else {
                        Some(
                            breakdown
                                .into_iter()
                                .map(|q| WarehouseStock {
                                    warehouse_abbr: "IL".to_string(),
                                    qty: Some(q),
                                })
                                .collect(),
                        )
                    };
                    WarehouseLineItem {
                        sku: None,
                        part_number: part,
                        color_name: color,
                        size_name: String::new(),
                        qty: Some(qty),
                        warehouses,
                    }
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                // Use deterministic seed for CI reproducibility
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: a non-empty breakdown always equals its own sum,
            /// whatever the direct qty says.
            #[test]
            fn breakdown_sum_wins(item in arb_line()) {
                match &item.warehouses {
                    Some(ws) if !ws.is_empty() => {
                        let expected: i64 = ws.iter().map(|w| w.qty.unwrap_or(0)).sum();
                        prop_assert_eq!(item.total_quantity(), expected);
                    }
                    _ => prop_assert_eq!(item.total_quantity(), item.qty.unwrap_or(0)),
                }
            }

            /// Property: every stored quantity is the sum of the per-strategy
            /// contributions for that key. A single line counts once per
            /// strategy that derives the key, which is how construction works.
            #[test]
            fn snapshot_keys_sum_contributions(items in proptest::collection::vec(arb_line(), 0..20)) {
                use crate::normalize::{color_code_suffix, color_name_key, part_number_key};

                let snapshot = InventorySnapshot::from_line_items(&items, Utc::now());

                for (key, qty) in snapshot.quantities() {
                    let mut expected = 0i64;
                    for item in &items {
                        let total = item.total_quantity();
                        let full = part_number_key(&item.part_number);
                        if !full.is_empty() && &full == key {
                            expected += total;
                        }
                        if color_code_suffix(&item.part_number).as_deref() == Some(key.as_str()) {
                            expected += total;
                        }
                        let name = color_name_key(&item.color_name);
                        if !name.is_empty() && &name == key {
                            expected += total;
                        }
                    }
                    prop_assert_eq!(i64::from(*qty), expected.max(0));
                }
            }

            /// Property: buffered lookups never go negative and never
            /// exceed raw minus buffer.
            #[test]
            fn buffer_floors_at_zero(items in proptest::collection::vec(arb_line(), 1..20), pick in 0usize..20) {
                let snapshot = InventorySnapshot::from_line_items(&items, Utc::now());
                let item = &items[pick % items.len()];

                match snapshot.quantity_for(&item.part_number, Some(&item.color_name)) {
                    StockLevel::Available(n) => {
                        let raw = snapshot
                            .raw_quantity_for(&item.part_number, Some(&item.color_name))
                            .unwrap();
                        prop_assert_eq!(n, raw.saturating_sub(STOCK_BUFFER));
                    }
                    StockLevel::Unknown => {
                        // Only possible when nothing matched at all.
                        prop_assert!(
                            snapshot.is_empty()
                                || snapshot
                                    .raw_quantity_for(&item.part_number, Some(&item.color_name))
                                    .is_none()
                        );
                    }
                }
            }
        }
    }
}
