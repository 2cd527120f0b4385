use hatworks_inventory::{
    DEFAULT_BASE_URL, InventoryResolver, SsActivewearClient, WarehouseCredentials,
};

/// Shared state for the HTTP layer: one warehouse client plus the snapshot
/// cache sitting on top of it.
pub struct AppServices {
    resolver: InventoryResolver<SsActivewearClient>,
}

impl AppServices {
    pub fn new(credentials: WarehouseCredentials, base_url: impl Into<String>) -> Self {
        let client = SsActivewearClient::with_base_url(credentials, base_url);
        Self {
            resolver: InventoryResolver::new(client),
        }
    }

    pub fn resolver(&self) -> &InventoryResolver<SsActivewearClient> {
        &self.resolver
    }

    pub fn client(&self) -> &SsActivewearClient {
        self.resolver.client()
    }
}

/// Build services from the environment (used by `main.rs`).
pub fn build_services() -> AppServices {
    let account_number = std::env::var("SSACTIVEWEAR_ACCOUNT_NUMBER").unwrap_or_default();
    let api_key = std::env::var("SSACTIVEWEAR_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("SSACTIVEWEAR_API_KEY not set; serving without live stock data");
        String::new()
    });
    let base_url =
        std::env::var("SSACTIVEWEAR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    AppServices::new(WarehouseCredentials::new(account_number, api_key), base_url)
}
