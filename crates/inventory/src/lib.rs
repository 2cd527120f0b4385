//! Warehouse inventory resolution and caching.
//!
//! This crate fronts the SS Activewear API for the storefront: it fetches
//! per-SKU stock for a style, flattens it into a normalized lookup table,
//! caches the result under a freshness window, and degrades to "no data"
//! on every failure mode instead of surfacing errors. The safety buffer
//! keeps the storefront from overselling while a snapshot ages.

pub mod client;
pub mod clock;
pub mod normalize;
pub mod resolver;
pub mod snapshot;

pub use client::{
    CredentialDiagnostic, DEFAULT_BASE_URL, SsActivewearClient, StyleRecord, WarehouseClient,
    WarehouseCredentials, WarehouseError,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use resolver::{FRESHNESS_WINDOW_SECS, InventoryResolver, ResolveOutcome};
pub use snapshot::{
    InventorySnapshot, LOW_STOCK_THRESHOLD, STOCK_BUFFER, StockLevel, WarehouseLineItem,
    WarehouseStock,
};
