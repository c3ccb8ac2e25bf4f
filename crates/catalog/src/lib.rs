//! `trolley-catalog` — the remote inventory lookup.
//!
//! Defines the [`InventoryLookup`] seam the cart engine validates against,
//! an HTTP implementation for the real catalog service, and an in-memory
//! implementation for tests.

pub mod http;
pub mod in_memory;
pub mod lookup;

pub use http::HttpCatalog;
pub use in_memory::InMemoryCatalog;
pub use lookup::{CatalogError, InventoryLookup, StockLevel};
