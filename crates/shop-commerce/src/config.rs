//! Store configuration.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Default name of the durable slot holding the cart.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// Configuration for a [`CartStore`](crate::CartStore) and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Catalog endpoint returning `{"products": [...]}`.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Durable slot the cart map is written to.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Timeout for the catalog request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            storage_key: default_storage_key(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(self.catalog_url.starts_with("http://") || self.catalog_url.starts_with("https://")) {
            return Err(CommerceError::InvalidConfig(format!(
                "catalog_url must be http(s): {}",
                self.catalog_url
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(CommerceError::InvalidConfig(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(CommerceError::InvalidConfig(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
