//! At-most-once invocation

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Wrapper that invokes its function at most one time.
///
/// The first successful call stores the result; every call, including the
/// first, returns a clone of it. Arguments passed after that are ignored.
/// Calling the wrapper from inside its own function deadlocks.
pub struct Once<F, A, R> {
    /// Wrapped function
    func: Mutex<F>,
    /// Result of the first invocation, set exactly once
    result: OnceCell<R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so it runs at most one time.
///
/// ```
/// use underbar_functions::once;
///
/// let init = once(|name: &str| format!("hello {name}"));
/// assert!(init.get().is_none());
/// assert_eq!(init.call("a"), "hello a");
/// assert_eq!(init.call("b"), "hello a");
/// ```
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnMut(A) -> R,
{
    Once::new(func)
}

/// Wrap a fallible `func`; the wrapper fires on the first `Ok`, see [`Once::try_call`].
pub fn try_once<F, A, R, E>(func: F) -> Once<F, A, R>
where
    F: FnMut(A) -> Result<R, E>,
{
    Once::fallible(func)
}

impl<F, A, R> Once<F, A, R> {
    /// Create a new, unfired wrapper
    pub fn new(func: F) -> Self
    where
        F: FnMut(A) -> R,
    {
        Self::with_func(func)
    }

    /// Create a new, unfired wrapper around a fallible function
    pub fn fallible<E>(func: F) -> Self
    where
        F: FnMut(A) -> Result<R, E>,
    {
        Self::with_func(func)
    }

    fn with_func(func: F) -> Self {
        Self {
            func: Mutex::new(func),
            result: OnceCell::new(),
            _args: PhantomData,
        }
    }

    /// Call the wrapper; only the first call reaches the wrapped function
    pub fn call(&self, args: A) -> R
    where
        F: FnMut(A) -> R,
        R: Clone,
    {
        self.result
            .get_or_init(|| {
                debug!("invoking once-wrapped function");
                (&mut *self.func.lock())(args)
            })
            .clone()
    }

    /// Call a fallible wrapped function.
    ///
    /// An `Err` goes straight back to the caller and is not stored; the
    /// wrapper stays unfired, so the next call tries again.
    pub fn try_call<E>(&self, args: A) -> Result<R, E>
    where
        F: FnMut(A) -> Result<R, E>,
        R: Clone,
    {
        self.result
            .get_or_try_init(|| {
                debug!("invoking once-wrapped function");
                (&mut *self.func.lock())(args)
            })
            .cloned()
    }

    /// Result of the first invocation, if it has happened
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }

    /// Whether the wrapped function has already produced its result
    pub fn is_fired(&self) -> bool {
        self.result.get().is_some()
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("result", &self.result.get())
            .finish_non_exhaustive()
    }
}
