//! Product and catalog types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Read-only once fetched. Fields the endpoint sends beyond these are
/// ignored during decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title. Empty when the endpoint omits it.
    #[serde(default)]
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price (non-negative).
    pub price: f64,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// The product catalog, in endpoint order.
///
/// Matches the endpoint's `{"products": [...]}` envelope so it can be
/// decoded straight from the response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether `id` names a catalog product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
