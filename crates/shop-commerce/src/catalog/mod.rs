//! Product catalog module.

mod product;
mod source;

pub use product::{Catalog, Product};
pub use source::{CatalogSource, HttpCatalogSource};
