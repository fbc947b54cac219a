//! Lazy Cache - An in-memory key/value cache
//!
//! Keys are compared through a caller-supplied equality capability instead of
//! hashing, and expired entries are removed lazily when they are read or when
//! the caller explicitly sweeps the store.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheKey, CacheStats, Item};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
