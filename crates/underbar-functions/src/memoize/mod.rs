//! Result caching by argument list
//!
//! A memoized wrapper derives a canonical key from each call's argument
//! tuple (see [`ArgList`]) and invokes the wrapped function only for keys it
//! has not seen. Presence is decided by key existence, so results such as
//! `0`, `""`, `false` or `None` are cached like any other.

mod cache;

pub use cache::{CacheStats, MemoCache};

use std::fmt;
use std::marker::PhantomData;
use tracing::trace;
use underbar_core::ArgList;

/// Wrapper that caches results per distinct argument list
pub struct Memoized<F, A, R> {
    /// Wrapped function
    func: F,
    /// Results by cache key, exposed through [`Memoized::cache`]
    cache: MemoCache<R>,
    /// Argument type, fixed when the wrapper is built
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so each distinct argument list is computed once.
///
/// ```
/// use underbar_functions::memoize;
///
/// let square = memoize(|(n,): (u64,)| n * n);
/// assert!(square.cache().is_empty());
/// assert_eq!(square.call((12,)), 144);
/// assert!(square.cache().contains_key("[12]"));
/// ```
pub fn memoize<F, A, R>(func: F) -> Memoized<F, A, R>
where
    F: Fn(A) -> R,
{
    Memoized::new(func)
}

/// Wrap a fallible `func`; only `Ok` values are cached, see [`Memoized::try_call`].
///
/// ```
/// use underbar_functions::try_memoize;
///
/// let parse = try_memoize(|(text,): (&str,)| text.parse::<u16>());
/// assert!(parse.try_call(("x",)).is_err());
/// assert_eq!(parse.try_call(("8",)), Ok(8));
/// assert_eq!(parse.cache().len(), 1);
/// ```
pub fn try_memoize<F, A, R, E>(func: F) -> Memoized<F, A, R>
where
    F: Fn(A) -> Result<R, E>,
{
    Memoized::fallible(func)
}

impl<F, A, R> Memoized<F, A, R> {
    /// Create a wrapper with an empty cache
    pub fn new(func: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self::with_func(func)
    }

    /// Create a wrapper around a fallible function, caching its `Ok` values
    pub fn fallible<E>(func: F) -> Self
    where
        F: Fn(A) -> Result<R, E>,
    {
        Self::with_func(func)
    }

    fn with_func(func: F) -> Self {
        Self {
            func,
            cache: MemoCache::new(),
            _args: PhantomData,
        }
    }

    /// The wrapper's cache; readable and writable by callers
    pub fn cache(&self) -> &MemoCache<R> {
        &self.cache
    }

    /// Call the wrapper, computing only if this argument list is uncached
    pub fn call(&self, args: A) -> R
    where
        A: ArgList,
        F: Fn(A) -> R,
        R: Clone,
    {
        let key = args.cache_key();
        if let Some(cached) = self.cache.lookup(&key) {
            trace!(%key, "memoize hit");
            return cached;
        }

        trace!(%key, "memoize miss");
        let value = (self.func)(args);
        self.cache.insert(key, value.clone());
        value
    }

    /// Call a fallible wrapped function; errors are returned and never cached
    pub fn try_call<E>(&self, args: A) -> Result<R, E>
    where
        A: ArgList,
        F: Fn(A) -> Result<R, E>,
        R: Clone,
    {
        let key = args.cache_key();
        if let Some(cached) = self.cache.lookup(&key) {
            trace!(%key, "memoize hit");
            return Ok(cached);
        }

        trace!(%key, "memoize miss");
        let value = (self.func)(args)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }
}

impl<F, A, R> fmt::Debug for Memoized<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("stats", &self.cache.stats())
            .finish_non_exhaustive()
    }
}
