//! Calling-convention adapters.
//!
//! Each adapter is a thin projection of one call shape onto the engine in
//! [`memoize`](crate::memoize): it owns the (computation, deriver, cache)
//! triple, derives the key from its arguments and delegates to
//! [`memoized`]. The adapters share no logic beyond that; primitive-typed
//! variants are monomorphized instances of the same structs (see
//! [`primitive`](crate::primitive)).
//!
//! Every adapter offers the same four constructors: `new` (default deriver and
//! fresh cache), `with_deriver`, `with_cache` and `with_parts`.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::cache::{Cache, HashCache, SlotCache};
use crate::key::{ConstKey, IdentityKey, KeyDeriver};
use crate::memoize::memoized;

/// A memoized zero-argument computation.
///
/// All calls share one key, so the result is computed once and then served
/// from a single slot.
///
/// ```
/// use memokit::MemoSupplier;
///
/// let answer = MemoSupplier::new(|| 6 * 7);
/// assert_eq!(answer.get(), 42);
/// assert_eq!(answer.get(), 42);
/// ```
pub struct MemoSupplier<R, F, C = SlotCache<R>> {
    func: F,
    cache: C,
    marker: PhantomData<fn() -> R>,
}

impl<R, F> MemoSupplier<R, F>
where
    F: Fn() -> R,
{
    /// Memoize a supplier into a fresh single-slot cache.
    pub fn new(func: F) -> Self {
        Self::with_cache(func, SlotCache::new())
    }
}

impl<R, F, C> MemoSupplier<R, F, C> {
    /// Memoize a supplier into the given cache.
    pub fn with_cache(func: F, cache: C) -> Self {
        Self { func, cache, marker: PhantomData }
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Return the memoized result, computing it on the first call.
    pub fn get(&self) -> R
    where
        F: Fn() -> R,
        C: Cache<(), R>,
    {
        memoized(&self.cache, &ConstKey, (), |_: &()| (self.func)())
    }
}

/// A memoized single-argument function.
///
/// By default the argument itself is the key.
///
/// ```
/// use memokit::MemoFn;
///
/// let square = MemoFn::new(|x: &u32| x * x);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(5), 25);
/// ```
pub struct MemoFn<A, R, F, D = IdentityKey, C = HashCache<A, R>> {
    func: F,
    deriver: D,
    cache: C,
    marker: PhantomData<fn(A) -> R>,
}

impl<A, R, F> MemoFn<A, R, F>
where
    F: Fn(&A) -> R,
{
    /// Memoize with the argument as key and a fresh unbounded cache.
    pub fn new(func: F) -> Self {
        Self::with_parts(func, IdentityKey, HashCache::new())
    }
}

impl<A, K, R, F, D> MemoFn<A, R, F, D, HashCache<K, R>>
where
    F: Fn(&A) -> R,
    D: KeyDeriver<A, K>,
{
    /// Memoize with a custom key deriver and a fresh unbounded cache.
    pub fn with_deriver(func: F, deriver: D) -> Self {
        Self::with_parts(func, deriver, HashCache::new())
    }
}

impl<A, R, F, C> MemoFn<A, R, F, IdentityKey, C>
where
    F: Fn(&A) -> R,
{
    /// Memoize with the argument as key into the given cache.
    pub fn with_cache(func: F, cache: C) -> Self {
        Self::with_parts(func, IdentityKey, cache)
    }
}

impl<A, R, F, D, C> MemoFn<A, R, F, D, C> {
    /// Memoize with explicit deriver and cache.
    pub fn with_parts(func: F, deriver: D, cache: C) -> Self {
        Self { func, deriver, cache, marker: PhantomData }
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Invoke the memoized function.
    pub fn call<K>(&self, args: A) -> R
    where
        F: Fn(&A) -> R,
        D: KeyDeriver<A, K>,
        C: Cache<K, R>,
    {
        memoized(&self.cache, &self.deriver, args, &self.func)
    }
}

/// A memoized two-argument function.
///
/// By default the argument pair is the key.
pub struct MemoBiFn<A, B, R, F, D = IdentityKey, C = HashCache<(A, B), R>> {
    func: F,
    deriver: D,
    cache: C,
    marker: PhantomData<fn(A, B) -> R>,
}

impl<A, B, R, F> MemoBiFn<A, B, R, F>
where
    F: Fn(&A, &B) -> R,
{
    /// Memoize with the argument pair as key and a fresh unbounded cache.
    pub fn new(func: F) -> Self {
        Self::with_parts(func, IdentityKey, HashCache::new())
    }
}

impl<A, B, K, R, F, D> MemoBiFn<A, B, R, F, D, HashCache<K, R>>
where
    F: Fn(&A, &B) -> R,
    D: KeyDeriver<(A, B), K>,
{
    /// Memoize with a custom key deriver and a fresh unbounded cache.
    pub fn with_deriver(func: F, deriver: D) -> Self {
        Self::with_parts(func, deriver, HashCache::new())
    }
}

impl<A, B, R, F, C> MemoBiFn<A, B, R, F, IdentityKey, C>
where
    F: Fn(&A, &B) -> R,
{
    /// Memoize with the argument pair as key into the given cache.
    pub fn with_cache(func: F, cache: C) -> Self {
        Self::with_parts(func, IdentityKey, cache)
    }
}

impl<A, B, R, F, D, C> MemoBiFn<A, B, R, F, D, C> {
    /// Memoize with explicit deriver and cache.
    pub fn with_parts(func: F, deriver: D, cache: C) -> Self {
        Self { func, deriver, cache, marker: PhantomData }
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Invoke the memoized function.
    pub fn call<K>(&self, a: A, b: B) -> R
    where
        F: Fn(&A, &B) -> R,
        D: KeyDeriver<(A, B), K>,
        C: Cache<K, R>,
    {
        memoized(&self.cache, &self.deriver, (a, b), |args| {
            (self.func)(&args.0, &args.1)
        })
    }
}

/// A memoized predicate.
///
/// Identical to [`MemoFn`] with a `bool` result; kept as its own shape so the
/// memoized call site reads like the original predicate.
pub struct MemoPredicate<A, F, D = IdentityKey, C = HashCache<A, bool>> {
    func: F,
    deriver: D,
    cache: C,
    marker: PhantomData<fn(A) -> bool>,
}

impl<A, F> MemoPredicate<A, F>
where
    F: Fn(&A) -> bool,
{
    /// Memoize with the argument as key and a fresh unbounded cache.
    pub fn new(func: F) -> Self {
        Self::with_parts(func, IdentityKey, HashCache::new())
    }
}

impl<A, K, F, D> MemoPredicate<A, F, D, HashCache<K, bool>>
where
    F: Fn(&A) -> bool,
    D: KeyDeriver<A, K>,
{
    /// Memoize with a custom key deriver and a fresh unbounded cache.
    pub fn with_deriver(func: F, deriver: D) -> Self {
        Self::with_parts(func, deriver, HashCache::new())
    }
}

impl<A, F, C> MemoPredicate<A, F, IdentityKey, C>
where
    F: Fn(&A) -> bool,
{
    /// Memoize with the argument as key into the given cache.
    pub fn with_cache(func: F, cache: C) -> Self {
        Self::with_parts(func, IdentityKey, cache)
    }
}

impl<A, F, D, C> MemoPredicate<A, F, D, C> {
    /// Memoize with explicit deriver and cache.
    pub fn with_parts(func: F, deriver: D, cache: C) -> Self {
        Self { func, deriver, cache, marker: PhantomData }
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Test the memoized predicate.
    pub fn test<K>(&self, args: A) -> bool
    where
        F: Fn(&A) -> bool,
        D: KeyDeriver<A, K>,
        C: Cache<K, bool>,
    {
        memoized(&self.cache, &self.deriver, args, &self.func)
    }
}

/// A memoized side-effecting consumer.
///
/// The cached "result" is a unit marker keyed by the argument, so the side
/// effect runs at most once per key rather than a return value being reused.
pub struct MemoConsumer<A, F, D = IdentityKey, C = HashCache<A, ()>> {
    func: F,
    deriver: D,
    cache: C,
    marker: PhantomData<fn(A)>,
}

impl<A, F> MemoConsumer<A, F>
where
    F: Fn(&A),
{
    /// Deduplicate with the argument as key and a fresh unbounded cache.
    pub fn new(func: F) -> Self {
        Self::with_parts(func, IdentityKey, HashCache::new())
    }
}

impl<A, K, F, D> MemoConsumer<A, F, D, HashCache<K, ()>>
where
    F: Fn(&A),
    D: KeyDeriver<A, K>,
{
    /// Deduplicate with a custom key deriver and a fresh unbounded cache.
    pub fn with_deriver(func: F, deriver: D) -> Self {
        Self::with_parts(func, deriver, HashCache::new())
    }
}

impl<A, F, C> MemoConsumer<A, F, IdentityKey, C>
where
    F: Fn(&A),
{
    /// Deduplicate with the argument as key into the given cache.
    pub fn with_cache(func: F, cache: C) -> Self {
        Self::with_parts(func, IdentityKey, cache)
    }
}

impl<A, F, D, C> MemoConsumer<A, F, D, C> {
    /// Deduplicate with explicit deriver and cache.
    pub fn with_parts(func: F, deriver: D, cache: C) -> Self {
        Self { func, deriver, cache, marker: PhantomData }
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Run the side effect if no call with an equal key has run it before.
    pub fn accept<K>(&self, args: A)
    where
        F: Fn(&A),
        D: KeyDeriver<A, K>,
        C: Cache<K, ()>,
    {
        memoized(&self.cache, &self.deriver, args, |args| (self.func)(args))
    }
}

/// A memoized consumer of a value and an `i64` tag.
///
/// Unlike its siblings, this shape stores the input value itself as the cache
/// entry instead of a unit marker. The dedup behavior is the same either way;
/// the asymmetry is kept from the original overload set.
pub struct MemoTagConsumer<A, F, C = HashCache<(A, i64), A>> {
    func: F,
    cache: C,
    marker: PhantomData<fn(A, i64)>,
}

impl<A, F> MemoTagConsumer<A, F>
where
    F: Fn(&A, i64),
    A: Clone + Eq + Hash,
{
    /// Deduplicate with the (value, tag) pair as key.
    pub fn new(func: F) -> Self {
        Self::with_cache(func, HashCache::new())
    }
}

impl<A, F, C> MemoTagConsumer<A, F, C> {
    /// Deduplicate into the given cache.
    pub fn with_cache(func: F, cache: C) -> Self {
        Self { func, cache, marker: PhantomData }
    }

    /// Access the backing cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Run the side effect if no call with an equal (value, tag) pair has run
    /// it before.
    pub fn accept(&self, value: A, tag: i64)
    where
        F: Fn(&A, i64),
        A: Clone,
        C: Cache<(A, i64), A>,
    {
        memoized(&self.cache, &IdentityKey, (value, tag), |args| {
            (self.func)(&args.0, args.1);
            args.0.clone()
        });
    }
}

/// Memoize a single-argument function with the argument as key and a fresh
/// unbounded cache.
///
/// ```
/// let square = memokit::memoize(|x: &u32| x * x);
/// assert_eq!(square.call(4), 16);
/// ```
pub fn memoize<A, R, F>(func: F) -> MemoFn<A, R, F>
where
    F: Fn(&A) -> R,
{
    MemoFn::new(func)
}

/// Memoize with a custom key deriver.
pub fn memoize_with<A, K, R, F, D>(func: F, deriver: D) -> MemoFn<A, R, F, D, HashCache<K, R>>
where
    F: Fn(&A) -> R,
    D: KeyDeriver<A, K>,
{
    MemoFn::with_deriver(func, deriver)
}

/// Memoize into the given cache.
pub fn memoize_in<A, R, F, C>(func: F, cache: C) -> MemoFn<A, R, F, IdentityKey, C>
where
    F: Fn(&A) -> R,
{
    MemoFn::with_cache(func, cache)
}

/// Memoize with explicit deriver and cache.
pub fn memoize_full<A, R, F, D, C>(func: F, deriver: D, cache: C) -> MemoFn<A, R, F, D, C>
where
    F: Fn(&A) -> R,
{
    MemoFn::with_parts(func, deriver, cache)
}
