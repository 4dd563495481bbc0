//! Storefront catalog and cart state for shopcart.
//!
//! - **Catalog**: products fetched once per session through a [`CatalogSource`]
//! - **Cart**: a sparse product → quantity map with add/remove/delete
//!   operations and derived totals
//! - **CartStore**: the session store tying both together and mirroring the
//!   cart into a durable key-value slot
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_cache::FileStore;
//! use shop_commerce::prelude::*;
//!
//! let config = StoreConfig::default();
//! let source = HttpCatalogSource::from_config(&config)?;
//! let mut store = CartStore::new(source, FileStore::open(".shop")?)
//!     .with_storage_key(config.storage_key.clone());
//! store.initialize().await;
//!
//! store.add_to_cart(ProductId::new(1), 3);
//! println!("Total: ${:.2}", store.total_cart_amount());
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;

pub use cart::{CartMap, CartStore};
pub use catalog::{Catalog, CatalogSource, HttpCatalogSource, Product};
pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartMap, CartStore};
    pub use crate::catalog::{Catalog, CatalogSource, HttpCatalogSource, Product};
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
}
