use std::sync::atomic::{AtomicUsize, Ordering};

use memokit::{MemoBiFn, MemoSupplier, memoize};

fn main() {
    let runs = AtomicUsize::new(0);
    let square = memoize(|x: &u64| {
        runs.fetch_add(1, Ordering::SeqCst);
        x * x
    });

    for x in [4, 4, 5, 4] {
        println!("square({x}) = {}", square.call(x));
    }
    println!("computed {} times", runs.load(Ordering::SeqCst));

    let motd = MemoSupplier::new(|| format!("The world is {}", "big"));
    println!("{}", motd.get());
    println!("{}", motd.get());

    let concat = MemoBiFn::new(|a: &String, b: &String| format!("{a}{b}"));
    println!("{}", concat.call("foo".into(), "bar".into()));
}
