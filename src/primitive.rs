//! Primitive-typed shapes.
//!
//! The engine is fully generic and monomorphizes per argument and result type,
//! so primitive calls never box; these aliases only name the common numeric
//! shapes. The `f64` variants additionally need [`F64BitsKey`], since floats
//! are neither `Eq` nor `Hash`.

use crate::cache::HashCache;
use crate::call::{MemoBiFn, MemoFn, MemoSupplier};
use crate::key::F64BitsKey;

/// A memoized `i32 -> i32` function.
pub type IntFn<F> = MemoFn<i32, i32, F>;

/// A memoized `i64 -> i64` function.
pub type LongFn<F> = MemoFn<i64, i64, F>;

/// A memoized `(i64, i64) -> i64` function.
pub type LongBiFn<F> = MemoBiFn<i64, i64, i64, F>;

/// A memoized `i64` supplier.
pub type LongSupplier<F> = MemoSupplier<i64, F>;

/// A memoized `f64 -> f64` function, keyed by the argument's bit pattern.
pub type DoubleFn<F> = MemoFn<f64, f64, F, F64BitsKey, HashCache<u64, f64>>;

/// A memoized `(f64, f64) -> f64` function, keyed by the arguments' bit
/// patterns.
pub type DoubleBiFn<F> = MemoBiFn<f64, f64, f64, F, F64BitsKey, HashCache<(u64, u64), f64>>;

/// Memoize an `f64 -> f64` function.
///
/// ```
/// let half = memokit::memoize_double(|x: &f64| x / 2.0);
/// assert_eq!(half.call(3.0), 1.5);
/// assert_eq!(half.call(3.0), 1.5);
/// ```
pub fn memoize_double<F>(func: F) -> DoubleFn<F>
where
    F: Fn(&f64) -> f64,
{
    MemoFn::with_parts(func, F64BitsKey, HashCache::new())
}

/// Memoize an `(f64, f64) -> f64` function.
pub fn memoize_double_bi<F>(func: F) -> DoubleBiFn<F>
where
    F: Fn(&f64, &f64) -> f64,
{
    MemoBiFn::with_parts(func, F64BitsKey, HashCache::new())
}
