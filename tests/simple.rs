use std::sync::atomic::{AtomicUsize, Ordering};

use memokit::{FnKey, MemoBiFn, memoize, memoize_with};

#[test]
fn test_unary() {
    let runs = AtomicUsize::new(0);
    let square = memoize(|x: &u32| {
        runs.fetch_add(1, Ordering::SeqCst);
        x * x
    });

    assert_eq!(square.call(4), 16); // [Miss] The cache is empty.
    assert_eq!(square.call(4), 16); // [Hit] Same number as before.
    assert_eq!(square.call(5), 25); // [Miss] Different number.
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn test_binary() {
    let runs = AtomicUsize::new(0);
    let sum = MemoBiFn::new(|a: &u32, b: &u32| {
        runs.fetch_add(1, Ordering::SeqCst);
        a + b
    });

    assert_eq!(sum.call(2, 4), 6); // [Miss] The cache is empty.
    assert_eq!(sum.call(2, 3), 5); // [Miss] Different numbers.
    assert_eq!(sum.call(2, 3), 5); // [Hit] Same numbers.
    assert_eq!(sum.call(4, 2), 6); // [Miss] Order matters for the tuple key.
    assert_eq!(runs.load(Ordering::SeqCst), 3);
}

/// The key deriver, not the engine, controls cache granularity: a deriver
/// that ignores the second argument makes `(1, 99)` the same call as `(1, 2)`.
#[test]
fn test_binary_with_partial_key() {
    let sum = MemoBiFn::with_deriver(
        |a: &i32, b: &i32| a + b,
        FnKey(|args: &(i32, i32)| args.0),
    );

    assert_eq!(sum.call(1, 2), 3);
    assert_eq!(sum.call(1, 99), 3); // The key ignores `b`, so the first sum is reused.
    assert_eq!(sum.call(2, 99), 101);
}

/// A deliberately colliding deriver maps every call to one entry.
#[test]
fn test_colliding_deriver() {
    let runs = AtomicUsize::new(0);
    let first = memoize_with(
        |x: &u32| {
            runs.fetch_add(1, Ordering::SeqCst);
            *x
        },
        FnKey(|_: &u32| 0u8),
    );

    assert_eq!(first.call(1), 1);
    assert_eq!(first.call(2), 1);
    assert_eq!(first.call(3), 1);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

/// The cache holds one entry per distinct derived key.
#[test]
fn test_entry_count() {
    let square = memoize(|x: &u64| x * x);
    for x in [1, 2, 3, 2, 1, 3, 3] {
        square.call(x);
    }
    assert_eq!(square.cache().len(), 3);

    square.cache().clear();
    assert!(square.cache().is_empty());
    assert_eq!(square.call(2), 4); // [Miss] Cleared by the cache owner.
    assert_eq!(square.cache().len(), 1);
}

/// A caller-supplied cache outlives the memoizer and can be inspected.
#[test]
fn test_cache_outlives_memoizer() {
    use memokit::{HashCache, memoize_in};

    let cache = HashCache::new();
    {
        let triple = memoize_in(|x: &u32| x * 3, &cache);
        assert_eq!(triple.call(2), 6);
        assert_eq!(triple.call(7), 21);
    }
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&7), Some(21));
    assert_eq!(cache.get(&8), None);
}
