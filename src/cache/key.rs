//! Cache Key Module
//!
//! Defines the equality capability keys must provide. The store never hashes
//! or inspects keys; it only asks one key whether it equals another.

use std::any::Any;
use std::fmt::Debug;

// == Cache Key ==
/// Equality capability required of every cache key.
///
/// Implementations must:
/// - return `false` when `other` is `None`
/// - be reflexive and consistent across calls
/// - return `false` (not panic) when `other` is a different concrete type
///
/// # Example
/// ```
/// use lazy_cache::CacheKey;
/// use std::any::Any;
///
/// #[derive(Debug)]
/// struct UserKey {
///     id: String,
///     revision: u32,
/// }
///
/// impl CacheKey for UserKey {
///     fn equals(&self, other: Option<&dyn CacheKey>) -> bool {
///         other
///             .and_then(|o| o.downcast_ref::<UserKey>())
///             .is_some_and(|o| o.id == self.id)
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
pub trait CacheKey: Any + Send + Sync + Debug {
    /// Returns true if `other` denotes the same cache entry as `self`.
    fn equals(&self, other: Option<&dyn CacheKey>) -> bool;

    /// Exposes the concrete key for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn CacheKey {
    // == Downcast ==
    /// Returns the concrete key if it is of type `K`.
    pub fn downcast_ref<K: CacheKey>(&self) -> Option<&K> {
        self.as_any().downcast_ref::<K>()
    }
}

/// Implements [`CacheKey`] for types whose `PartialEq` already expresses key
/// identity. Keys of any other concrete type compare unequal.
#[macro_export]
macro_rules! impl_cache_key {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::cache::CacheKey for $t {
                fn equals(&self, other: Option<&dyn $crate::cache::CacheKey>) -> bool {
                    other
                        .and_then(|o| o.downcast_ref::<$t>())
                        .is_some_and(|o| o == self)
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )+
    };
}

impl_cache_key!(
    String,
    &'static str,
    char,
    bool,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);
