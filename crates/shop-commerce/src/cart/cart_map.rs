//! Sparse product → quantity map and its reducer operations.

use crate::catalog::Catalog;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Per-product quantities.
///
/// Keys need not exist in the catalog (orphan keys are kept). A present
/// key with quantity 0 is distinct from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartMap(BTreeMap<ProductId, i64>);

impl CartMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog product at quantity 0.
    pub fn default_for(catalog: &Catalog) -> Self {
        catalog.iter().map(|p| (p.id, 0)).collect()
    }

    /// Quantity stored for `id`, if the key is present.
    pub fn get(&self, id: ProductId) -> Option<i64> {
        self.0.get(&id).copied()
    }

    /// Quantity for `id`, treating a missing key as 0.
    pub fn quantity(&self, id: ProductId) -> i64 {
        self.get(id).unwrap_or(0)
    }

    /// Whether `id` has an entry (even a zero one).
    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains_key(&id)
    }

    /// Add `quantity` of `id`.
    ///
    /// An absent or zero entry is set to exactly `quantity` and `true` is
    /// returned to mark a new line item. Otherwise `quantity` is added to
    /// the existing value and `false` is returned. The quantity is not
    /// validated, so zero or negative values on a fresh key still count as
    /// new.
    pub fn add(&mut self, id: ProductId, quantity: i64) -> bool {
        match self.0.get_mut(&id) {
            Some(existing) if *existing != 0 => {
                *existing = existing.saturating_add(quantity);
                false
            }
            _ => {
                self.0.insert(id, quantity);
                true
            }
        }
    }

    /// Decrement by one, floored at 0. Returns the new quantity.
    pub fn decrement(&mut self, id: ProductId) -> i64 {
        self.step(id, -1)
    }

    /// Increment by one, floored at 0. Returns the new quantity.
    pub fn increment(&mut self, id: ProductId) -> i64 {
        self.step(id, 1)
    }

    fn step(&mut self, id: ProductId, delta: i64) -> i64 {
        let next = self.quantity(id).saturating_add(delta).max(0);
        self.0.insert(id, next);
        next
    }

    /// Remove the key entirely. Returns the quantity it held.
    pub fn remove(&mut self, id: ProductId) -> Option<i64> {
        self.0.remove(&id)
    }

    /// Sum of every quantity, orphan keys included.
    pub fn total_items(&self) -> i64 {
        self.0.values().fold(0i64, |acc, q| acc.saturating_add(*q))
    }

    /// Σ `price × quantity` over catalog products. Keys without a catalog
    /// entry contribute nothing.
    pub fn total_amount(&self, catalog: &Catalog) -> f64 {
        catalog
            .iter()
            .map(|p| p.price * self.quantity(p.id) as f64)
            .sum()
    }

    /// Keys with no matching catalog product.
    pub fn orphans<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = ProductId> + 'a {
        self.0.keys().copied().filter(|id| !catalog.contains(*id))
    }

    /// Iterate entries in id order.
    pub fn iter(&self) -> btree_map::Iter<'_, ProductId, i64> {
        self.0.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ProductId, i64)> for CartMap {
    fn from_iter<I: IntoIterator<Item = (ProductId, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(ProductId, i64); N]> for CartMap {
    fn from(entries: [(ProductId, i64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a CartMap {
    type Item = (&'a ProductId, &'a i64);
    type IntoIter = btree_map::Iter<'a, ProductId, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    fn catalog() -> Catalog {
        let product = |n: i64, price: f64| Product {
            id: id(n),
            title: format!("Product {n}"),
            description: String::new(),
            price,
            thumbnail: String::new(),
        };
        Catalog::new(vec![product(1, 10.0), product(2, 5.0)])
    }

    #[test]
    fn test_default_for_catalog() {
        let cart = CartMap::default_for(&catalog());
        assert_eq!(cart, CartMap::from([(id(1), 0), (id(2), 0)]));
    }

    #[test]
    fn test_add_new_then_existing() {
        let mut cart = CartMap::new();
        assert!(cart.add(id(1), 3));
        assert!(!cart.add(id(1), 2));
        assert_eq!(cart.quantity(id(1)), 5);
    }

    #[test]
    fn test_add_over_zero_entry_counts_as_new() {
        let mut cart = CartMap::from([(id(1), 0)]);
        assert!(cart.add(id(1), 4));
        assert_eq!(cart.quantity(id(1)), 4);
    }

    #[test]
    fn test_add_zero_or_negative_on_fresh_key() {
        let mut cart = CartMap::new();
        assert!(cart.add(id(1), 0));
        assert_eq!(cart.get(id(1)), Some(0));

        assert!(cart.add(id(2), -2));
        assert_eq!(cart.quantity(id(2)), -2);
        // Negative entries are non-zero, so they accumulate.
        assert!(!cart.add(id(2), 5));
        assert_eq!(cart.quantity(id(2)), 3);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut cart = CartMap::from([(id(1), 1)]);
        assert_eq!(cart.decrement(id(1)), 0);
        assert_eq!(cart.decrement(id(1)), 0);
        assert_eq!(cart.decrement(id(9)), 0);
        assert_eq!(cart.get(id(9)), Some(0));
    }

    #[test]
    fn test_increment_missing_key() {
        let mut cart = CartMap::new();
        assert_eq!(cart.increment(id(4)), 1);
        assert_eq!(cart.increment(id(4)), 2);
    }

    #[test]
    fn test_step_clamps_negative_start() {
        let mut cart = CartMap::from([(id(1), -5)]);
        assert_eq!(cart.increment(id(1)), 0);
    }

    #[test]
    fn test_interleaved_steps_never_negative() {
        let mut cart = CartMap::new();
        let pattern = [1, -1, -1, 1, 1, -1, -1, -1, 1, -1, 1, 1, 1, -1];
        for (i, step) in pattern.iter().cycle().take(200).enumerate() {
            let q = if (*step > 0) ^ (i % 7 == 0) {
                cart.increment(id(1))
            } else {
                cart.decrement(id(1))
            };
            assert!(q >= 0);
        }
    }

    #[test]
    fn test_remove_drops_key() {
        let mut cart = CartMap::from([(id(1), 4), (id(2), 0)]);
        assert_eq!(cart.remove(id(2)), Some(0));
        assert!(!cart.contains(id(2)));
        assert_eq!(cart.remove(id(2)), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals_treat_orphans_differently() {
        let cart = CartMap::from([(id(1), 2), (id(2), 1), (id(99), 7)]);
        let catalog = catalog();

        assert_eq!(cart.total_amount(&catalog), 25.0);
        assert_eq!(cart.total_items(), 10);
        assert_eq!(cart.orphans(&catalog).collect::<Vec<_>>(), vec![id(99)]);
    }

    #[test]
    fn test_json_uses_string_keys() {
        let cart = CartMap::from([(id(1), 3), (id(2), 0)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"{"1":3,"2":0}"#);

        let parsed: CartMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
