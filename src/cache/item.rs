//! Cache Item Module
//!
//! Defines a single stored entry: the caller's key, the value and its
//! optional expiration instant.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::CacheKey;

// == Item ==
/// A key/value pair held by the cache, with its expiration deadline.
#[derive(Debug, Clone)]
pub struct Item<V> {
    /// The caller-supplied key
    pub key: Arc<dyn CacheKey>,
    /// The stored value
    pub value: V,
    /// Deadline after which the item is expired, None = never expires
    pub(crate) expire_at: Option<Instant>,
}

impl<V> Item<V> {
    // == Constructor ==
    /// Creates an item written at `now`.
    ///
    /// A zero `expiration` leaves the item without a deadline. A deadline that
    /// cannot be represented is treated the same way.
    pub(crate) fn new(key: Arc<dyn CacheKey>, value: V, expiration: Duration, now: Instant) -> Self {
        Self {
            key,
            value,
            expire_at: deadline(expiration, now),
        }
    }

    /// Replaces the value and pushes the deadline out from `now`.
    pub(crate) fn refresh(&mut self, value: V, expiration: Duration, now: Instant) {
        self.value = value;
        self.expire_at = deadline(expiration, now);
    }

    /// Returns the expiration deadline, if any.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expire_at
    }

    // == Is Expired ==
    /// Checks whether the item is expired at `now`.
    ///
    /// An item is expired once `now` reaches its deadline.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expire_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    /// Checks whether the item is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, `Some(ZERO)` once expired, or None if
    /// the item never expires.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expire_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}

fn deadline(expiration: Duration, now: Instant) -> Option<Instant> {
    if expiration.is_zero() {
        None
    } else {
        now.checked_add(expiration)
    }
}
