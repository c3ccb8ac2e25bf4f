//! `trolley-storage` — durable local persistence for the cart.
//!
//! The store only ever holds an encoded [`trolley_cart::CartSnapshot`], never a
//! live reference to the in-memory cart. Every successful mutation overwrites
//! the whole snapshot (last writer wins).

pub mod in_memory;
pub mod json_file;
pub mod store;

pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;
pub use store::{CartStorage, StorageError};
