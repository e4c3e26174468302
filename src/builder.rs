use thiserror::Error;

use crate::memoize::Memoizer;

/// A collaborator was missing when [`MemoBuilder::build`] ran.
///
/// Surfaced at construction time, before any call can happen. The deriver and
/// cache cannot be missing because they default via [`Default`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No computation was supplied.
    #[error("memoizer requires a computation")]
    MissingComputation,
}

/// Assembles a [`Memoizer`] from optional collaborators.
///
/// For the common case, prefer [`Memoizer::new`] or the calling-convention
/// adapters, which take their collaborators by value so nothing can be
/// missing. The builder exists for callers that assemble collaborators
/// conditionally; it validates at `build` time and fails fast.
///
/// ```
/// use memokit::{HashCache, IdentityKey, MemoBuilder, Memoizer};
///
/// let doubled: Memoizer<_, IdentityKey, HashCache<u32, u32>> =
///     MemoBuilder::new().computation(|x: &u32| 2 * x).build().unwrap();
/// assert_eq!(doubled.invoke(21), 42);
/// ```
pub struct MemoBuilder<F, D, C> {
    func: Option<F>,
    deriver: Option<D>,
    cache: Option<C>,
}

impl<F, D, C> MemoBuilder<F, D, C> {
    /// Start with no collaborators.
    pub fn new() -> Self {
        Self { func: None, deriver: None, cache: None }
    }

    /// Set the computation to memoize.
    pub fn computation(mut self, func: F) -> Self {
        self.func = Some(func);
        self
    }

    /// Set the key deriver. Defaults per the chosen deriver type's `Default`.
    pub fn deriver(mut self, deriver: D) -> Self {
        self.deriver = Some(deriver);
        self
    }

    /// Set the cache. Defaults to a fresh empty cache of the chosen type.
    pub fn cache(mut self, cache: C) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Validate the collaborators and build the memoizer.
    pub fn build(self) -> Result<Memoizer<F, D, C>, BuildError>
    where
        D: Default,
        C: Default,
    {
        let func = self.func.ok_or(BuildError::MissingComputation)?;
        let deriver = self.deriver.unwrap_or_default();
        let cache = self.cache.unwrap_or_default();
        Ok(Memoizer::new(func, deriver, cache))
    }
}

impl<F, D, C> Default for MemoBuilder<F, D, C> {
    fn default() -> Self {
        Self::new()
    }
}
