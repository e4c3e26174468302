//! Run with `cargo test --features testing`.

use memokit::testing::last_was_hit;
use memokit::{MemoBiFn, MemoSupplier, memoize};

macro_rules! test {
    (miss: $call:expr, $result:expr) => {{
        assert_eq!($call, $result);
        assert!(!last_was_hit());
    }};
    (hit: $call:expr, $result:expr) => {{
        assert_eq!($call, $result);
        assert!(last_was_hit());
    }};
}

#[test]
fn test_hit_flag() {
    let double = memoize(|x: &u32| 2 * x);
    test!(miss: double.call(2), 4);
    test!(miss: double.call(4), 8);
    test!(hit: double.call(2), 4);

    let sum = MemoBiFn::new(|a: &u32, b: &u32| a + b);
    test!(miss: sum.call(2, 4), 6);
    test!(miss: sum.call(2, 3), 5);
    test!(hit: sum.call(2, 3), 5);
    test!(miss: sum.call(4, 2), 6);
}

#[test]
fn test_hit_flag_supplier() {
    let answer = MemoSupplier::new(|| format!("The answer is {}", 42));
    test!(miss: answer.get(), "The answer is 42");
    test!(hit: answer.get(), "The answer is 42");
    test!(hit: answer.get(), "The answer is 42");
}
