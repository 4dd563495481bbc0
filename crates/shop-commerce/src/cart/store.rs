//! Session cart state: catalog, quantities, counters, search results.

use crate::cart::CartMap;
use crate::catalog::{Catalog, CatalogSource, Product};
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::CommerceError;
use crate::ids::ProductId;
use shop_cache::{Cache, KvStore};

/// Client-side cart store for one page session.
///
/// Owns the fetched catalog and the quantity map, and mirrors the map
/// into a durable slot after every change. Collaborators are injected:
/// `C` supplies the catalog, `S` is the durable key-value store.
///
/// No operation returns an error. Collaborator failures are logged and the
/// store keeps working with what it has: without a catalog the money total
/// is 0 and no default cart is seeded.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::new(HttpCatalogSource::from_config(&config)?, MemoryStore::new());
/// store.initialize().await;
///
/// store.add_to_cart(ProductId::new(1), 2);
/// println!("{} items, ${:.2}", store.total_items(), store.total_cart_amount());
/// ```
pub struct CartStore<C, S> {
    source: C,
    cache: Cache<S>,
    storage_key: String,
    catalog: Option<Catalog>,
    cart: CartMap,
    cart_updated: u64,
    search_results: Option<Vec<Product>>,
}

impl<C, S> CartStore<C, S>
where
    C: CatalogSource,
    S: KvStore,
{
    /// Create an uninitialized store using the default storage key.
    pub fn new(source: C, store: S) -> Self {
        Self {
            source,
            cache: Cache::new(store),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            catalog: None,
            cart: CartMap::new(),
            cart_updated: 0,
            search_results: None,
        }
    }

    /// Use a different durable slot name.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Run the startup sequence: restore the saved cart, then fetch the
    /// catalog, seeding the default cart if nothing was restored.
    ///
    /// The slot is read before any seeding can write to it.
    pub async fn initialize(&mut self) {
        self.restore_saved_cart();
        self.load_catalog().await;
    }

    /// Fetch the catalog from the source, replacing any current one, and
    /// apply the seeding rule as [`set_catalog`](Self::set_catalog) does.
    ///
    /// On failure the error is logged and the catalog stays as it was, so a
    /// later call can retry. Returns whether a catalog was installed.
    pub async fn load_catalog(&mut self) -> bool {
        match self.source.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "catalog loaded");
                self.set_catalog(catalog);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                false
            }
        }
    }

    /// Replace the cart with the contents of the durable slot.
    ///
    /// An absent, unreadable or malformed slot counts as "no saved cart"
    /// and leaves the current map alone. Returns whether a cart was restored.
    pub fn restore_saved_cart(&mut self) -> bool {
        match self.cache.get::<CartMap>(&self.storage_key) {
            Ok(Some(saved)) => {
                tracing::debug!(key = %self.storage_key, entries = saved.len(), "restored saved cart");
                self.cart = saved;
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "ignoring unreadable saved cart");
                false
            }
        }
    }

    /// Install a catalog, then apply the seeding rule.
    pub fn set_catalog(&mut self, catalog: impl Into<Catalog>) {
        self.catalog = Some(catalog.into());
        self.seed_default_cart();
    }

    /// Seed the default cart when a catalog is present and the cart is
    /// empty. Returns whether seeding happened.
    fn seed_default_cart(&mut self) -> bool {
        if !self.cart.is_empty() {
            return false;
        }
        let Some(catalog) = &self.catalog else {
            return false;
        };
        self.cart = CartMap::default_for(catalog);
        tracing::debug!(entries = self.cart.len(), "seeded default cart");
        self.persist();
        true
    }

    /// Add `quantity` of a product.
    ///
    /// A product that is absent or at 0 is set to exactly `quantity` and
    /// bumps the update counter. Otherwise the quantity is added to the
    /// existing one and the counter is left alone. The quantity is not
    /// validated. Returns whether this was counted as a new line item.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: i64) -> bool {
        let is_new = self.cart.add(id, quantity);
        if is_new {
            self.cart_updated += 1;
        }
        tracing::debug!(product = %id, quantity, is_new, "add to cart");
        self.persist();
        is_new
    }

    /// Remove one unit of a product, never going below 0. Returns the new
    /// quantity.
    pub fn remove_from_cart(&mut self, id: ProductId) -> i64 {
        let quantity = self.cart.decrement(id);
        tracing::debug!(product = %id, quantity, "remove from cart");
        self.persist();
        quantity
    }

    /// Add one unit of a product. Returns the new quantity.
    pub fn add_item(&mut self, id: ProductId) -> i64 {
        let quantity = self.cart.increment(id);
        tracing::debug!(product = %id, quantity, "add item");
        self.persist();
        quantity
    }

    /// Drop a product's entry entirely. Returns the quantity it held.
    pub fn delete_from_cart(&mut self, id: ProductId) -> Option<i64> {
        let removed = self.cart.remove(id);
        tracing::debug!(product = %id, ?removed, "delete from cart");
        self.persist();
        removed
    }

    /// Replace the whole cart map.
    pub fn set_cart_items(&mut self, cart: CartMap) {
        self.cart = cart;
        self.persist();
    }

    /// Write the cart map to the durable slot, reporting failures.
    pub fn save(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.storage_key, &self.cart)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to persist cart");
        }
    }
}

impl<C, S> CartStore<C, S> {
    /// Every catalog product at quantity 0. Empty without a catalog.
    pub fn default_cart(&self) -> CartMap {
        self.catalog
            .as_ref()
            .map(CartMap::default_for)
            .unwrap_or_default()
    }

    /// Σ `price × quantity` over catalog products; 0 without a catalog.
    pub fn total_cart_amount(&self) -> f64 {
        self.catalog
            .as_ref()
            .map_or(0.0, |catalog| self.cart.total_amount(catalog))
    }

    /// Sum of every quantity in the cart, including products missing from
    /// the catalog.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Replace the search results wholesale. `None` clears them.
    pub fn set_search_results(&mut self, results: Option<Vec<Product>>) {
        self.search_results = results;
    }

    /// Current search results, if any were set.
    pub fn search_results(&self) -> Option<&[Product]> {
        self.search_results.as_deref()
    }

    /// The catalog, once fetched.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The current cart map.
    pub fn cart_items(&self) -> &CartMap {
        &self.cart
    }

    /// Quantity of one product, 0 when absent.
    pub fn quantity(&self, id: ProductId) -> i64 {
        self.cart.quantity(id)
    }

    /// Number of new line items added this session.
    pub fn cart_updated(&self) -> u64 {
        self.cart_updated
    }

    /// Catalog product by id.
    pub fn product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.catalog
            .as_ref()
            .and_then(|c| c.get(id))
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Name of the durable slot.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}
