//! Two memoized computations pooling one cache, with key-space segregation
//! left to the derivers.

use std::sync::Arc;

use memokit::{FnKey, HashCache, memoize_full};

fn main() {
    let shared = Arc::new(HashCache::<(u8, u64), u64>::new());

    let double = memoize_full(
        |x: &u64| x * 2,
        FnKey(|x: &u64| (0u8, *x)),
        Arc::clone(&shared),
    );
    let triple = memoize_full(
        |x: &u64| x * 3,
        FnKey(|x: &u64| (1u8, *x)),
        Arc::clone(&shared),
    );

    println!("double(21) = {}", double.call(21));
    println!("triple(14) = {}", triple.call(14));
    println!("double(21) = {}", double.call(21));
    println!("shared cache holds {} entries", shared.len());
}
