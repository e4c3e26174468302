//! A panicking computation or deriver must never leave a cache entry behind.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};

use memokit::{FnKey, memoize, memoize_with};

#[test]
fn test_failure_is_not_cached() {
    let runs = AtomicUsize::new(0);
    let failing = memoize(|_: &u32| -> u32 {
        runs.fetch_add(1, Ordering::SeqCst);
        panic!("boom");
    });

    assert!(catch_unwind(AssertUnwindSafe(|| failing.call(1))).is_err());
    assert!(catch_unwind(AssertUnwindSafe(|| failing.call(1))).is_err());

    // The computation ran both times and nothing was stored.
    assert_eq!(runs.load(Ordering::SeqCst), 2);
    assert_eq!(failing.cache().len(), 0);
}

#[test]
fn test_recovers_after_failure() {
    let attempts = AtomicUsize::new(0);
    let flaky = memoize(|x: &u32| {
        if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("first attempt fails");
        }
        x + 1
    });

    assert!(catch_unwind(AssertUnwindSafe(|| flaky.call(3))).is_err());
    assert_eq!(flaky.call(3), 4);
    assert_eq!(flaky.call(3), 4);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_deriver_panic_leaves_cache_untouched() {
    let runs = AtomicUsize::new(0);
    let wrapped = memoize_with(
        |x: &u32| {
            runs.fetch_add(1, Ordering::SeqCst);
            *x
        },
        FnKey(|_: &u32| -> u32 { panic!("bad deriver") }),
    );

    assert!(catch_unwind(AssertUnwindSafe(|| wrapped.call(1))).is_err());

    // The computation never ran and no entry was written.
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(wrapped.cache().len(), 0);
}

/// The original panic payload reaches the caller unwrapped.
#[test]
fn test_panic_propagates_verbatim() {
    let failing = memoize(|_: &u32| -> u32 { panic!("original message") });

    let payload = catch_unwind(AssertUnwindSafe(|| failing.call(1))).unwrap_err();
    let message = payload.downcast_ref::<&str>().copied();
    assert_eq!(message, Some("original message"));
}
