//! Where the catalog comes from.

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::CommerceError;
use async_trait::async_trait;
use shop_data::FetchClient;

/// Supplies the product catalog once per session.
///
/// Any transport that yields the same shape is interchangeable.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog.
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError>;
}

/// A fixed in-memory catalog, handy for tests and offline use.
#[async_trait]
impl CatalogSource for Catalog {
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError> {
        Ok(self.clone())
    }
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError> {
        (**self).fetch_catalog().await
    }
}

/// Fetches the catalog with a single unauthenticated GET.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: FetchClient,
    url: String,
}

impl HttpCatalogSource {
    /// Create a source for `url` with the given client.
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Create a source from store configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self, CommerceError> {
        config.validate()?;
        let client = FetchClient::new().with_timeout(config.request_timeout());
        Ok(Self::new(client, config.catalog_url.clone()))
    }

    /// The endpoint this source reads.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError> {
        let catalog = self
            .client
            .get(self.url.as_str())
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Catalog>()?;
        Ok(catalog)
    }
}
