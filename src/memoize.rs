use std::fmt::{self, Debug, Formatter};

use crate::cache::Cache;
use crate::key::KeyDeriver;

/// Executes a computation, trying to use a cached result for it.
///
/// Derives the key from the arguments and delegates to the cache's atomic
/// primitive. The engine itself is stateless and takes no locks, so the
/// at-most-once guarantee is exactly as strong as the cache's.
///
/// The computation must be a function of its arguments only. If it panics, the
/// panic propagates verbatim, nothing is cached and the next call with an
/// equal key computes again.
pub fn memoized<A, K, R, D, C, F>(cache: &C, deriver: &D, args: A, func: F) -> R
where
    D: KeyDeriver<A, K>,
    C: Cache<K, R>,
    F: FnOnce(&A) -> R,
{
    let key = deriver.derive(&args);
    cache.get_or_compute(key, || func(&args))
}

/// An immutable triple of computation, key deriver and cache.
///
/// The computation and deriver never change after construction; only the
/// cache's contents mutate. Calling convention adapters such as
/// [`MemoFn`](crate::MemoFn) are usually more convenient; this type is the
/// engine they project onto and the target of [`MemoBuilder`](crate::MemoBuilder).
pub struct Memoizer<F, D, C> {
    func: F,
    deriver: D,
    cache: C,
}

impl<F, D, C> Memoizer<F, D, C> {
    /// Compose a computation, deriver and cache.
    ///
    /// All collaborators are taken by value, so none can be missing.
    pub fn new(func: F, deriver: D, cache: C) -> Self {
        Self { func, deriver, cache }
    }

    /// Invoke the memoized computation.
    pub fn invoke<A, K, R>(&self, args: A) -> R
    where
        F: Fn(&A) -> R,
        D: KeyDeriver<A, K>,
        C: Cache<K, R>,
    {
        memoized(&self.cache, &self.deriver, args, &self.func)
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }
}

impl<F, D, C> Debug for Memoizer<F, D, C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad("Memoizer(..)")
    }
}
