//! Type-safe key-value persistence for the shopcart storefront.
//!
//! Provides the durable slot the cart is written to after every change:
//! a raw [`KvStore`] backend plus a [`Cache`] wrapper that handles JSON.
//!
//! # Example
//!
//! ```rust
//! use shop_cache::{Cache, MemoryStore};
//! use std::collections::BTreeMap;
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("cartItems", &BTreeMap::from([(1u64, 2i64)])).unwrap();
//!
//! let cart: Option<BTreeMap<u64, i64>> = cache.get("cartItems").unwrap();
//! assert_eq!(cart.unwrap()[&1], 2);
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
