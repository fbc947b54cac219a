//! Cache Module
//!
//! Provides an in-memory cache keyed by caller-defined equality, with a
//! single cache-wide expiration applied lazily on reads.

mod item;
mod key;
mod stats;
mod store;


// Re-export public types
pub use item::Item;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::Cache;
