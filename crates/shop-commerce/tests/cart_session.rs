//! Session-level cart behavior: startup, mutations, persistence.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shop_cache::{FileStore, KvStore, MemoryStore};
use shop_commerce::prelude::*;

fn product(id: i64, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        description: format!("Description of product {id}"),
        price,
        thumbnail: format!("https://cdn.example.com/{id}.png"),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![product(1, 10.0), product(2, 5.0)])
}

fn id(n: i64) -> ProductId {
    ProductId::new(n)
}

struct Offline;

#[async_trait]
impl CatalogSource for Offline {
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError> {
        Err(CommerceError::CatalogUnavailable("offline".into()))
    }
}

/// Fails the first `failures` fetches, then serves a one-product catalog.
struct Flaky {
    failures: usize,
    calls: AtomicUsize,
}

impl Flaky {
    fn failing(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogSource for Flaky {
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            return Err(CommerceError::CatalogUnavailable("timed out".into()));
        }
        Ok(Catalog::new(vec![product(1, 10.0)]))
    }
}

#[tokio::test]
async fn test_checkout_scenario() {
    let mut store = CartStore::new(catalog(), MemoryStore::new());
    store.initialize().await;
    assert_eq!(store.cart_items(), &CartMap::from([(id(1), 0), (id(2), 0)]));

    assert!(store.add_to_cart(id(1), 3));
    assert_eq!(store.cart_items(), &CartMap::from([(id(1), 3), (id(2), 0)]));
    assert_eq!(store.cart_updated(), 1);
    assert_eq!(store.total_cart_amount(), 30.0);

    assert!(!store.add_to_cart(id(1), 2));
    assert_eq!(store.cart_items(), &CartMap::from([(id(1), 5), (id(2), 0)]));
    assert_eq!(store.cart_updated(), 1);
    assert_eq!(store.total_cart_amount(), 50.0);

    assert_eq!(store.remove_from_cart(id(1)), 4);
    assert_eq!(store.total_cart_amount(), 40.0);

    assert_eq!(store.delete_from_cart(id(2)), Some(0));
    assert_eq!(store.cart_items(), &CartMap::from([(id(1), 4)]));
    assert_eq!(store.total_items(), 4);
}

#[tokio::test]
async fn test_every_mutation_is_persisted() {
    let storage = MemoryStore::new();
    let mut store = CartStore::new(catalog(), storage.clone());
    store.initialize().await;

    let saved = |storage: &MemoryStore| -> CartMap {
        serde_json::from_slice(&storage.get("cartItems").unwrap().unwrap()).unwrap()
    };

    assert_eq!(saved(&storage), CartMap::from([(id(1), 0), (id(2), 0)]));

    store.add_to_cart(id(2), 2);
    assert_eq!(saved(&storage), *store.cart_items());

    store.add_item(id(1));
    assert_eq!(saved(&storage), *store.cart_items());

    store.remove_from_cart(id(2));
    assert_eq!(saved(&storage), *store.cart_items());

    store.delete_from_cart(id(1));
    assert_eq!(saved(&storage), CartMap::from([(id(2), 1)]));

    store.set_cart_items(CartMap::new());
    assert_eq!(saved(&storage), CartMap::new());
}

#[tokio::test]
async fn test_reload_restores_cart_and_skips_seeding() {
    let storage = MemoryStore::new();

    let mut first = CartStore::new(catalog(), storage.clone());
    first.initialize().await;
    first.add_to_cart(id(1), 2);
    first.delete_from_cart(id(2));
    first.add_to_cart(id(77), 1);
    let before = first.cart_items().clone();

    let mut reloaded = CartStore::new(catalog(), storage);
    reloaded.initialize().await;

    assert_eq!(reloaded.cart_items(), &before);
    assert!(!reloaded.cart_items().contains(id(2)));
    // The counter is per session.
    assert_eq!(reloaded.cart_updated(), 0);
    // Orphan 77 counts as an item but not toward the money total.
    assert_eq!(reloaded.total_items(), 3);
    assert_eq!(reloaded.total_cart_amount(), 20.0);
}

#[tokio::test]
async fn test_corrupt_saved_cart_is_ignored() {
    let storage = MemoryStore::new();
    storage.set("cartItems", b"{not json").unwrap();

    let mut store = CartStore::new(catalog(), storage.clone());
    store.initialize().await;

    assert_eq!(store.cart_items(), &store.default_cart());
    let raw = storage.get("cartItems").unwrap().unwrap();
    assert_eq!(raw, br#"{"1":0,"2":0}"#.to_vec());
}

#[tokio::test]
async fn test_empty_saved_cart_still_seeds() {
    let storage = MemoryStore::new();
    storage.set("cartItems", b"{}").unwrap();

    let mut store = CartStore::new(catalog(), storage);
    store.initialize().await;
    assert_eq!(store.cart_items().len(), 2);
}

#[tokio::test]
async fn test_offline_session_restores_but_totals_zero() {
    let storage = MemoryStore::new();
    storage.set("cartItems", br#"{"1":4}"#).unwrap();

    let mut store = CartStore::new(Offline, storage);
    store.initialize().await;

    assert!(store.catalog().is_none());
    assert_eq!(store.quantity(id(1)), 4);
    assert_eq!(store.total_items(), 4);
    assert_eq!(store.total_cart_amount(), 0.0);
}

#[tokio::test]
async fn test_add_to_cart_zero_quantity_counts_as_new() {
    let mut store = CartStore::new(catalog(), MemoryStore::new());
    store.initialize().await;

    assert!(store.add_to_cart(id(1), 0));
    assert!(store.add_to_cart(id(1), 0));
    assert_eq!(store.cart_updated(), 2);
    assert_eq!(store.quantity(id(1)), 0);
}

#[tokio::test]
async fn test_remove_and_add_item_stay_non_negative() {
    let mut store = CartStore::new(catalog(), MemoryStore::new());
    store.initialize().await;

    for _ in 0..3 {
        assert_eq!(store.remove_from_cart(id(1)), 0);
    }
    assert_eq!(store.add_item(id(1)), 1);
    assert_eq!(store.remove_from_cart(id(1)), 0);
    assert_eq!(store.remove_from_cart(id(1)), 0);
    assert_eq!(store.cart_updated(), 0);
}

#[tokio::test]
async fn test_custom_storage_key_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let key = shop_cache::cache_key!("cart", "guest");

    {
        let storage = FileStore::open(dir.path()).unwrap();
        let mut store = CartStore::new(catalog(), storage).with_storage_key(key.clone());
        store.initialize().await;
        store.add_to_cart(id(2), 6);
        assert_eq!(store.storage_key(), "cart:guest");
    }

    let storage = FileStore::open(dir.path()).unwrap();
    assert!(storage.get("cartItems").unwrap().is_none());

    let mut store = CartStore::new(catalog(), storage).with_storage_key(key);
    store.initialize().await;
    assert_eq!(store.quantity(id(2)), 6);
    assert_eq!(store.total_cart_amount(), 30.0);
}

#[tokio::test]
async fn test_catalog_retry_seeds_default_cart() {
    let storage = MemoryStore::new();
    let mut store = CartStore::new(Flaky::failing(1), storage.clone());
    store.initialize().await;
    assert!(store.catalog().is_none());
    assert!(store.cart_items().is_empty());

    assert!(store.load_catalog().await);
    assert_eq!(store.cart_items(), &CartMap::from([(id(1), 0)]));
    let raw = storage.get("cartItems").unwrap().unwrap();
    assert_eq!(raw, br#"{"1":0}"#.to_vec());
}

#[tokio::test]
async fn test_catalog_retry_keeps_restored_cart() {
    let storage = MemoryStore::new();
    storage.set("cartItems", br#"{"2":3}"#).unwrap();

    let mut store = CartStore::new(Flaky::failing(1), storage);
    store.initialize().await;
    assert!(store.load_catalog().await);

    assert_eq!(store.cart_items(), &CartMap::from([(id(2), 3)]));
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_cart_amount(), 0.0);
}

#[tokio::test]
async fn test_saved_cart_with_negative_key_restores() {
    let storage = MemoryStore::new();
    storage.set("cartItems", br#"{"-1":2,"1":1}"#).unwrap();

    let mut store = CartStore::new(catalog(), storage);
    store.initialize().await;

    assert_eq!(store.cart_items(), &CartMap::from([(id(-1), 2), (id(1), 1)]));
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_cart_amount(), 10.0);
}
