//! SS Activewear warehouse API client.
//!
//! Auth is HTTP Basic with the account number as username and the API key as
//! password. Inventory is served by the `products` collection filtered to a
//! field list; style metadata lives in the `styles` collection. Both return
//! JSON arrays of flat records.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use hatworks_core::StyleId;

use crate::snapshot::WarehouseLineItem;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.ssactivewear.com/v2";

/// Field filter for inventory queries. The supplier names the sku filter
/// `skuid` even though the response field is `sku`.
const INVENTORY_FIELDS: &str = "skuid,qty,warehouses,partNumber,colorName,sizeName";

/// Supplier account credentials.
///
/// The account number is allowed to be empty (the supplier accepts key-only
/// auth for some accounts); a missing API key means the integration is not
/// configured at all. `Debug` never prints either value.
#[derive(Clone)]
pub struct WarehouseCredentials {
    account_number: String,
    api_key: String,
}

impl WarehouseCredentials {
    pub fn new(account_number: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            api_key: api_key.into(),
        }
    }

    /// No API key, no upstream calls.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Presence/length report for the diagnostic endpoint. Lengths only,
    /// never the values.
    pub fn diagnostic(&self) -> CredentialDiagnostic {
        CredentialDiagnostic {
            configured: self.is_configured(),
            has_account_number: !self.account_number.is_empty(),
            account_number_length: self.account_number.len(),
            api_key_length: self.api_key.len(),
        }
    }
}

impl std::fmt::Debug for WarehouseCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarehouseCredentials")
            .field("account_number", &"<REDACTED>")
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

/// What the diagnostic endpoint is allowed to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CredentialDiagnostic {
    pub configured: bool,
    pub has_account_number: bool,
    pub account_number_length: usize,
    pub api_key_length: usize,
}

/// Failure modes at the warehouse boundary.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("credentials not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Style-level metadata record from the supplier's styles collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    #[serde(rename = "styleID", default)]
    pub style_id: Option<u32>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub style_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub base_category: Option<String>,
}

/// Upstream warehouse contract, injectable so the resolver can be exercised
/// without a network.
pub trait WarehouseClient: Send + Sync {
    /// Whether credentials are present. Checked before any network call.
    fn is_configured(&self) -> bool;

    /// Per-SKU inventory lines for one style.
    fn fetch_inventory(
        &self,
        style_id: StyleId,
    ) -> impl Future<Output = Result<Vec<WarehouseLineItem>, WarehouseError>> + Send;

    /// Style metadata records for one style.
    fn fetch_style(
        &self,
        style_id: StyleId,
    ) -> impl Future<Output = Result<Vec<StyleRecord>, WarehouseError>> + Send;
}

impl<C> WarehouseClient for std::sync::Arc<C>
where
    C: WarehouseClient,
{
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn fetch_inventory(
        &self,
        style_id: StyleId,
    ) -> impl Future<Output = Result<Vec<WarehouseLineItem>, WarehouseError>> + Send {
        (**self).fetch_inventory(style_id)
    }

    fn fetch_style(
        &self,
        style_id: StyleId,
    ) -> impl Future<Output = Result<Vec<StyleRecord>, WarehouseError>> + Send {
        (**self).fetch_style(style_id)
    }
}

/// Live client against the SS Activewear REST API.
///
/// Configures no request timeout beyond the transport default; callers that
/// need a deadline put one in front of the lookup.
pub struct SsActivewearClient {
    http: reqwest::Client,
    base_url: String,
    credentials: WarehouseCredentials,
}

impl SsActivewearClient {
    pub fn new(credentials: WarehouseCredentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Point the client at a different API root (stub servers in tests).
    pub fn with_base_url(credentials: WarehouseCredentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    pub fn credentials(&self) -> &WarehouseCredentials {
        &self.credentials
    }

    async fn get_json<T>(&self, url: String) -> Result<T, WarehouseError>
    where
        T: serde::de::DeserializeOwned,
    {
        if !self.credentials.is_configured() {
            return Err(WarehouseError::NotConfigured);
        }

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.account_number, Some(&self.credentials.api_key))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| WarehouseError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(WarehouseError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json::<T>()
            .await
            .map_err(|e| WarehouseError::Parse(e.to_string()))
    }
}

impl WarehouseClient for SsActivewearClient {
    fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    async fn fetch_inventory(
        &self,
        style_id: StyleId,
    ) -> Result<Vec<WarehouseLineItem>, WarehouseError> {
        let url = format!(
            "{}/products/?style={}&fields={}",
            self.base_url, style_id, INVENTORY_FIELDS
        );
        self.get_json(url).await
    }

    async fn fetch_style(&self, style_id: StyleId) -> Result<Vec<StyleRecord>, WarehouseError> {
        let url = format!("{}/styles/{}", self.base_url, style_id);
        self.get_json(url).await
    }
}
