use std::hash::Hash;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// A key-value store with a single atomic operation.
///
/// `get_or_compute` must be atomic per key: concurrent callers with the same
/// key observe exactly one successful computation and all receive the same
/// value. Callers with distinct keys must not block each other. Whether an
/// implementation blocks same-key racers or lets one win and discards the
/// redundant work is up to the implementation.
///
/// An evicting implementation may drop entries, in which case a dropped key is
/// recomputed on its next use. The memoization layer never removes or updates
/// an entry itself.
pub trait Cache<K, V> {
    /// Return the value stored for `key`, or run `compute`, store its result
    /// and return it.
    fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V;
}

impl<K, V, C> Cache<K, V> for &C
where
    C: Cache<K, V>,
{
    fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        (**self).get_or_compute(key, compute)
    }
}

/// Lets several memoizers share one cache.
///
/// Keys are not namespaced, so the sharers must make sure that keys from
/// different computations cannot collide.
impl<K, V, C> Cache<K, V> for Arc<C>
where
    C: Cache<K, V>,
{
    fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        (**self).get_or_compute(key, compute)
    }
}

/// A cell that is initialized at most once, shared out of the map so that the
/// map lock is never held while computing.
type Slot<V> = Arc<OnceCell<V>>;

/// The default unbounded cache.
///
/// Every key maps to a one-shot cell. The map lock is held only while finding
/// or inserting a cell, so computations for distinct keys run in parallel,
/// while same-key racers block on the cell until the first computation
/// finishes. A computation that panics leaves its cell empty, so the key is
/// retried on the next call.
pub struct HashCache<K, V> {
    map: RwLock<FxHashMap<K, Slot<V>>>,
}

impl<K, V> HashCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { map: RwLock::new(FxHashMap::default()) }
    }

    /// The number of stored values.
    ///
    /// Slots whose computation is still in flight (or has panicked) do not
    /// count.
    pub fn len(&self) -> usize {
        self.map.read().values().filter(|slot| slot.get().is_some()).count()
    }

    /// Whether the cache holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.map.write().clear();
    }
}

impl<K, V> HashCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Return a copy of the value stored for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.map.read().get(key).and_then(|slot| slot.get()).cloned()
    }
}

impl<K, V> Default for HashCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for HashCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        // Fast path: the slot already exists. The guard must be released
        // before taking the write lock below.
        let existing = self.map.read().get(&key).cloned();
        let slot = match existing {
            Some(slot) => slot,
            None => self.map.write().entry(key).or_default().clone(),
        };
        init(&slot, compute)
    }
}

/// A single-slot cache.
///
/// Suppliers take no arguments, so all their calls share one key. This store
/// skips the map entirely and memoizes into one cell.
pub struct SlotCache<V>(OnceCell<V>);

impl<V> SlotCache<V> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Whether the slot is filled.
    pub fn is_filled(&self) -> bool {
        self.0.get().is_some()
    }
}

impl<V> Default for SlotCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Cache<(), V> for SlotCache<V> {
    fn get_or_compute<F>(&self, (): (), compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        init(&self.0, compute)
    }
}

/// Fill a cell if necessary and return its value.
///
/// If `compute` panics, the panic propagates and the cell stays empty; a
/// blocked racer then runs its own computation.
fn init<V, F>(cell: &OnceCell<V>, compute: F) -> V
where
    V: Clone,
    F: FnOnce() -> V,
{
    let mut computed = false;
    let value = cell
        .get_or_init(|| {
            computed = true;
            compute()
        })
        .clone();

    if computed {
        tracing::trace!("memoized value computed");
        #[cfg(feature = "testing")]
        crate::testing::register_miss();
    } else {
        tracing::trace!("memoized value reused");
        #[cfg(feature = "testing")]
        crate::testing::register_hit();
    }

    value
}
