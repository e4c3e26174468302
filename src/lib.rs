//! Keyed memoization with pluggable caches and key derivation.
//!
//! Wraps a deterministic computation so that a call's arguments derive a cache
//! key, a stored result is returned if the key is present, and otherwise the
//! computation runs once and its result is stored. The wrapped call keeps the
//! original argument and return types, so memoization is transparent to
//! callers, including panics, which propagate verbatim and are never cached.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let runs = AtomicUsize::new(0);
//! let square = memokit::memoize(|x: &u32| {
//!     runs.fetch_add(1, Ordering::SeqCst);
//!     x * x
//! });
//!
//! assert_eq!(square.call(4), 16);
//! assert_eq!(square.call(4), 16);
//! assert_eq!(square.call(5), 25);
//! assert_eq!(runs.load(Ordering::SeqCst), 2);
//! ```
//!
//! Each calling convention (supplier, unary and binary functions, predicates,
//! consumers, primitive-typed variants) is a thin adapter over one generic
//! engine. The cache is injected: the default [`HashCache`] is unbounded and
//! guarantees at-most-once computation per key across threads; any store
//! implementing [`Cache`] can replace it, including bounded ones, in which
//! case an evicted key is simply recomputed. Eviction, TTL and sizing belong
//! to the backend, never to this crate.

mod builder;
mod cache;
mod call;
mod key;
mod memoize;
mod primitive;

#[cfg(feature = "testing")]
pub mod testing;

pub use crate::builder::{BuildError, MemoBuilder};
pub use crate::cache::{Cache, HashCache, SlotCache};
pub use crate::call::{
    MemoBiFn, MemoConsumer, MemoFn, MemoPredicate, MemoSupplier, MemoTagConsumer, memoize,
    memoize_full, memoize_in, memoize_with,
};
pub use crate::key::{ConstKey, F64BitsKey, FnKey, IdentityKey, KeyDeriver, SipKey};
pub use crate::memoize::{Memoizer, memoized};
pub use crate::primitive::{
    DoubleBiFn, DoubleFn, IntFn, LongBiFn, LongFn, LongSupplier, memoize_double,
    memoize_double_bi,
};
