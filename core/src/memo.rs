//! Key-addressed memoization.
//!
//! [`Memo`] wraps an assumed-pure function with an unbounded cache addressed
//! by [`CacheKey`]. A hit returns the stored result with zero additional
//! invocations of the wrapped function; the counters make that observable
//! in tests and callers.
//!
//! Recursive functions need more care: wrapping only the outward-facing
//! call leaves the inner recursion unmemoized, so `fib(10)` would still
//! recurse exponentially underneath a single cached entry. [`RecursiveMemo`]
//! is the pattern for that - the function receives the cache and re-enters
//! it at every recursive call site.

use std::collections::HashMap;
use std::marker::PhantomData;

use capsule_types::{CacheKey, KeyError};
use serde::Serialize;
use tracing::trace;

/// Memoizing wrapper over a unary (or tuple-argument) function.
///
/// The cache is exclusively owned by the wrapper and lives as long as it
/// does; there is no eviction, so growth is proportional to the number of
/// distinct keys seen.
#[derive(Debug)]
pub struct Memo<A, R, F> {
    func: F,
    cache: HashMap<CacheKey, R>,
    invocations: u64,
    hits: u64,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: FnMut(&A) -> R,
{
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: HashMap::new(),
            invocations: 0,
            hits: 0,
            _args: PhantomData,
        }
    }

    /// Look up or compute the result for `args`.
    ///
    /// Fails with [`KeyError`] when no cache key can be derived; the wrapped
    /// function is not invoked in that case. Use [`Memo::call_or_bypass`] to
    /// fall back to an unmemoized invocation instead.
    pub fn call(&mut self, args: &A) -> Result<R, KeyError> {
        let key = CacheKey::derive(args)?;
        if let Some(value) = self.cache.get(&key) {
            self.hits += 1;
            trace!(%key, "memo hit");
            return Ok(value.clone());
        }
        trace!(%key, "memo miss");
        self.invocations += 1;
        let value = (self.func)(args);
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Like [`Memo::call`], but an unserializable argument falls back to a
    /// plain, uncached invocation of the wrapped function.
    pub fn call_or_bypass(&mut self, args: &A) -> R {
        match self.call(args) {
            Ok(value) => value,
            Err(err) => {
                trace!(%err, "memo bypass");
                self.invocations += 1;
                (self.func)(args)
            }
        }
    }

    /// Total invocations of the wrapped function (misses plus bypasses).
    #[must_use]
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// Calls answered from the cache without invoking the wrapped function.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Memoization cache for self-referential functions.
///
/// The function takes the cache as its first parameter and calls
/// [`RecursiveMemo::call`] at each recursive call site, so every
/// intermediate result lands in (and is served from) the cache:
///
/// ```
/// use capsule_core::RecursiveMemo;
/// use capsule_types::KeyError;
///
/// fn fib(memo: &mut RecursiveMemo<u64, u64>, n: &u64) -> Result<u64, KeyError> {
///     if *n <= 1 {
///         return Ok(*n);
///     }
///     let a = memo.call(&fib, &(*n - 1))?;
///     let b = memo.call(&fib, &(*n - 2))?;
///     Ok(a + b)
/// }
///
/// let mut memo = RecursiveMemo::new();
/// assert_eq!(memo.call(&fib, &10).unwrap(), 55);
/// assert!(memo.invocations() <= 11);
/// ```
#[derive(Debug)]
pub struct RecursiveMemo<A, R> {
    cache: HashMap<CacheKey, R>,
    invocations: u64,
    hits: u64,
    _args: PhantomData<fn(&A)>,
}

impl<A, R> Default for RecursiveMemo<A, R> {
    fn default() -> Self {
        Self {
            cache: HashMap::new(),
            invocations: 0,
            hits: 0,
            _args: PhantomData,
        }
    }
}

impl<A, R> RecursiveMemo<A, R>
where
    A: Serialize,
    R: Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `args`, or run `func` (which may re-enter this cache) and
    /// record its result.
    pub fn call<F>(&mut self, func: &F, args: &A) -> Result<R, KeyError>
    where
        F: Fn(&mut Self, &A) -> Result<R, KeyError>,
    {
        let key = CacheKey::derive(args)?;
        if let Some(value) = self.cache.get(&key) {
            self.hits += 1;
            trace!(%key, "memo hit");
            return Ok(value.clone());
        }
        trace!(%key, "memo miss");
        self.invocations += 1;
        let value = func(self, args)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Total invocations of the wrapped function.
    #[must_use]
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
