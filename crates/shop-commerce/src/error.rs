//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never return these; they surface only from the
/// collaborators (catalog fetch, durable storage) and from explicit
/// `save`/lookup calls.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The catalog could not be fetched or decoded.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<shop_data::FetchError> for CommerceError {
    fn from(e: shop_data::FetchError) -> Self {
        CommerceError::CatalogUnavailable(e.to_string())
    }
}

impl From<shop_cache::CacheError> for CommerceError {
    fn from(e: shop_cache::CacheError) -> Self {
        match e {
            shop_cache::CacheError::SerializeError(inner) => inner.into(),
            other => CommerceError::CacheError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
