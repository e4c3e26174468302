use std::hash::Hash;

use siphasher::sip128::{Hasher128, SipHasher13};

/// Derives a cache key from a call's arguments.
///
/// A deriver must be deterministic, total and pure: equal arguments (by the
/// deriver's own notion of equality) must yield equal keys, since calls with
/// equal keys are treated as the same memoized call. If a deriver panics, the
/// panic propagates before the cache is touched, so no entry is written and
/// the call is retried the next time.
pub trait KeyDeriver<A, K> {
    /// Map the arguments to their cache key.
    fn derive(&self, args: &A) -> K;
}

/// Uses the argument itself as the key.
///
/// This is the default for single-argument calls and, because tuples are
/// hashable when their fields are, also for multi-argument calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityKey;

impl<A: Clone> KeyDeriver<A, A> for IdentityKey {
    fn derive(&self, args: &A) -> A {
        args.clone()
    }
}

/// Maps all calls to one shared key.
///
/// Used by zero-argument suppliers, where every call is the same call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstKey;

impl<A> KeyDeriver<A, ()> for ConstKey {
    fn derive(&self, _: &A) {}
}

/// Combines arbitrary hashable arguments into a 128-bit key.
///
/// For use when no natural identity or tuple key exists, for example with
/// borrowed data or mixed primitive arguments. The key is a SipHash-1-3
/// digest; at 128 bits, collisions are not a practical concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct SipKey;

impl<A: Hash> KeyDeriver<A, u128> for SipKey {
    fn derive(&self, args: &A) -> u128 {
        let mut state = SipHasher13::new();
        args.hash(&mut state);
        state.finish128().as_u128()
    }
}

/// Keys an `f64` argument by its bit pattern.
///
/// Floats are neither `Eq` nor `Hash`, so the double-specialized shapes key by
/// the raw bits instead. Note that under this deriver `0.0` and `-0.0` are
/// distinct calls and `NaN` payloads are distinguished.
#[derive(Debug, Default, Clone, Copy)]
pub struct F64BitsKey;

impl KeyDeriver<f64, u64> for F64BitsKey {
    fn derive(&self, args: &f64) -> u64 {
        args.to_bits()
    }
}

impl KeyDeriver<(f64, f64), (u64, u64)> for F64BitsKey {
    fn derive(&self, args: &(f64, f64)) -> (u64, u64) {
        (args.0.to_bits(), args.1.to_bits())
    }
}

/// Adapts a closure into a key deriver.
///
/// ```
/// use memokit::{FnKey, MemoBiFn};
///
/// // Key only by the first argument.
/// let sum = MemoBiFn::with_deriver(|a: &i32, b: &i32| a + b, FnKey(|args: &(i32, i32)| args.0));
/// assert_eq!(sum.call(1, 2), 3);
/// assert_eq!(sum.call(1, 99), 3);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FnKey<F>(pub F);

impl<A, K, F> KeyDeriver<A, K> for FnKey<F>
where
    F: Fn(&A) -> K,
{
    fn derive(&self, args: &A) -> K {
        (self.0)(args)
    }
}
