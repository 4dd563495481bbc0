//! Shopping cart module.
//!
//! Contains the quantity map and the session store built on it.

mod cart_map;
mod store;

pub use cart_map::CartMap;
pub use store::CartStore;
