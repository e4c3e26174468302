use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use memokit::{ConstKey, memoize, memoize_with};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// The computation runs once per distinct argument, the cache holds one entry
/// per distinct argument, and every call returns the right value.
#[quickcheck]
fn dedup_matches_distinct_keys(xs: Vec<u8>) -> bool {
    let runs = AtomicUsize::new(0);
    let triple = memoize(|x: &u8| {
        runs.fetch_add(1, Ordering::SeqCst);
        u16::from(*x) * 3
    });

    for &x in &xs {
        if triple.call(x) != u16::from(x) * 3 {
            return false;
        }
    }

    let distinct = xs.iter().collect::<HashSet<_>>().len();
    runs.load(Ordering::SeqCst) == distinct && triple.cache().len() == distinct
}

/// Under a constant key every argument maps to the first call's result.
#[quickcheck]
fn constant_key_pins_first_result(xs: Vec<u16>) -> TestResult {
    let Some(&head) = xs.first() else {
        return TestResult::discard();
    };

    let identity = memoize_with(|x: &u16| *x, ConstKey);
    let first = identity.call(head);
    TestResult::from_bool(first == head && xs.iter().all(|&x| identity.call(x) == first))
}

/// Repeating a call sequence is idempotent: the second pass adds no runs.
#[quickcheck]
fn replay_adds_no_runs(xs: Vec<u8>) -> bool {
    let runs = AtomicUsize::new(0);
    let square = memoize(|x: &u8| {
        runs.fetch_add(1, Ordering::SeqCst);
        u16::from(*x) * u16::from(*x)
    });

    for &x in &xs {
        square.call(x);
    }
    let after_first = runs.load(Ordering::SeqCst);
    for &x in &xs {
        square.call(x);
    }
    runs.load(Ordering::SeqCst) == after_first
}
