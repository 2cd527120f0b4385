//! The inventory resolver: a cached, always-degrading front over the
//! warehouse API.
//!
//! One snapshot per style id, refreshed lazily when a lookup finds the
//! cached copy older than the freshness window. Nothing in here ever raises
//! toward a caller: missing credentials and upstream failures come back as
//! their own [`ResolveOutcome`] variants and the HTTP boundary collapses
//! them to "no stock data".

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

use hatworks_core::StyleId;

use crate::client::WarehouseClient;
use crate::clock::{Clock, SystemClock};
use crate::snapshot::InventorySnapshot;

/// Cache hits are served while a snapshot is younger than this.
pub const FRESHNESS_WINDOW_SECS: i64 = 5 * 60;

/// What one `resolve` call produced.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// A snapshot is available, cached or just fetched. It may be empty:
    /// "fetched and found nothing" is a real answer, not a failure.
    Fetched(Arc<InventorySnapshot>),
    /// No API key is configured; no network call was attempted.
    NotConfigured,
    /// Upstream or decode failure, already logged. Any previously cached
    /// snapshot for the style stays in place for the next attempt.
    Failed,
}

impl ResolveOutcome {
    pub fn snapshot(&self) -> Option<&Arc<InventorySnapshot>> {
        match self {
            ResolveOutcome::Fetched(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, ResolveOutcome::Fetched(_))
    }

    pub fn is_not_configured(&self) -> bool {
        matches!(self, ResolveOutcome::NotConfigured)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ResolveOutcome::Failed)
    }
}

/// Cached proxy over a [`WarehouseClient`].
///
/// Client and clock are injected so tests can drive freshness and failure
/// without timers or a network. Concurrent misses for the same style both
/// fetch; last writer wins.
pub struct InventoryResolver<C, K = SystemClock> {
    client: C,
    clock: K,
    cache: RwLock<HashMap<StyleId, Arc<InventorySnapshot>>>,
}

impl<C> InventoryResolver<C>
where
    C: WarehouseClient,
{
    pub fn new(client: C) -> Self {
        Self::with_clock(client, SystemClock)
    }
}

impl<C, K> InventoryResolver<C, K>
where
    C: WarehouseClient,
    K: Clock,
{
    pub fn with_clock(client: C, clock: K) -> Self {
        Self {
            client,
            clock,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolve current inventory for a style id.
    ///
    /// Serves the cached snapshot when it is younger than the freshness
    /// window; otherwise issues exactly one upstream request. Errors never
    /// escape: they are logged and reported as [`ResolveOutcome::Failed`].
    /// There is no retry or backoff, and concurrent identical requests are
    /// not de-duplicated.
    pub async fn resolve(&self, style_id: StyleId) -> ResolveOutcome {
        if !self.client.is_configured() {
            tracing::warn!(%style_id, "warehouse API key not configured, serving no stock data");
            return ResolveOutcome::NotConfigured;
        }

        let now = self.clock.now();
        if let Some(snapshot) = self.fresh_cached(style_id, now) {
            return ResolveOutcome::Fetched(snapshot);
        }

        // The fetch runs outside the cache lock.
        match self.client.fetch_inventory(style_id).await {
            Ok(items) => {
                let snapshot = Arc::new(InventorySnapshot::from_line_items(&items, now));
                tracing::info!(
                    %style_id,
                    lines = items.len(),
                    keys = snapshot.len(),
                    "refreshed inventory snapshot"
                );
                self.store(style_id, Arc::clone(&snapshot));
                ResolveOutcome::Fetched(snapshot)
            }
            Err(err) => {
                tracing::warn!(
                    %style_id,
                    error = %err,
                    "inventory fetch failed, keeping previous snapshot if any"
                );
                ResolveOutcome::Failed
            }
        }
    }

    fn fresh_cached(&self, style_id: StyleId, now: DateTime<Utc>) -> Option<Arc<InventorySnapshot>> {
        let cache = self.cache.read().ok()?;
        let snapshot = cache.get(&style_id)?;
        if snapshot.age(now) < Duration::seconds(FRESHNESS_WINDOW_SECS) {
            Some(Arc::clone(snapshot))
        } else {
            None
        }
    }

    fn store(&self, style_id: StyleId, snapshot: Arc<InventorySnapshot>) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(style_id, snapshot);
        }
    }
}
