// Combinator constructors are plain data builders; dropping the result is
// the caller's business
#![allow(clippy::must_use_candidate)]

//! Matchers built from other matchers.
//!
//! Every combinator owns the matchers (and transform) it is built from and
//! holds no other state, so it is `Send`/`Sync` whenever its parts are.

use std::fmt;
use std::marker::PhantomData;

use super::{MatchResult, Matcher};

/// Negation of a matcher. See [`Matcher::invert`].
#[derive(Debug, Clone, Copy)]
pub struct Inverted<M> {
    inner: M,
}

impl<M> Inverted<M> {
    pub(crate) fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Unwrap the negated matcher.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Inverted<M> {
    fn test(&self, value: &T) -> MatchResult {
        self.inner.test(value).inverted()
    }
}

/// A matcher run on a derived value. See [`Matcher::compose`].
pub struct Composed<M, F, T> {
    inner: M,
    transform: F,
    _target: PhantomData<fn() -> T>,
}

impl<M, F, T> Composed<M, F, T> {
    pub(crate) fn new(inner: M, transform: F) -> Self {
        Self {
            inner,
            transform,
            _target: PhantomData,
        }
    }
}

impl<U, T, M, F> Matcher<U> for Composed<M, F, T>
where
    U: ?Sized,
    M: Matcher<T>,
    F: Fn(&U) -> T,
{
    fn test(&self, value: &U) -> MatchResult {
        let derived = (self.transform)(value);
        self.inner.test(&derived)
    }
}

impl<M: Clone, F: Clone, T> Clone for Composed<M, F, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.transform.clone())
    }
}

impl<M: fmt::Debug, F, T> fmt::Debug for Composed<M, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("inner", &self.inner)
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A matcher run on a value borrowed from the input. See
/// [`Matcher::compose_ref`].
pub struct Projected<M, F, T: ?Sized> {
    inner: M,
    projection: F,
    _target: PhantomData<fn(&T)>,
}

impl<M, F, T: ?Sized> Projected<M, F, T> {
    pub(crate) fn new(inner: M, projection: F) -> Self {
        Self {
            inner,
            projection,
            _target: PhantomData,
        }
    }
}

impl<U, T, M, F> Matcher<U> for Projected<M, F, T>
where
    U: ?Sized,
    T: ?Sized,
    M: Matcher<T>,
    F: for<'a> Fn(&'a U) -> &'a T,
{
    fn test(&self, value: &U) -> MatchResult {
        self.inner.test((self.projection)(value))
    }
}

impl<M: Clone, F: Clone, T: ?Sized> Clone for Projected<M, F, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.projection.clone())
    }
}

impl<M: fmt::Debug, F, T: ?Sized> fmt::Debug for Projected<M, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projected")
            .field("inner", &self.inner)
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Short-circuit conjunction of two matchers. See [`Matcher::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for And<A, B> {
    fn test(&self, value: &T) -> MatchResult {
        let first = self.first.test(value);
        if !first.passed() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                failure = first.failure_message(),
                "and: first operand failed, skipping second"
            );
            return first;
        }
        self.second.test(value)
    }
}

/// Short-circuit disjunction of two matchers. See [`Matcher::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for Or<A, B> {
    fn test(&self, value: &T) -> MatchResult {
        let first = self.first.test(value);
        if first.passed() {
            #[cfg(feature = "tracing")]
            tracing::trace!("or: first operand passed, skipping second");
            return first;
        }
        self.second.test(value)
    }
}

/// Create a negating matcher, same as [`Matcher::invert`].
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{not, satisfies, Matcher};
///
/// let is_zero = satisfies(|x: &i32| *x == 0, "expected zero", "expected non-zero");
/// let m = not(is_zero);
/// assert!(m.test(&1).passed());
/// assert_eq!(m.test(&0).failure_message(), "expected non-zero");
/// ```
pub fn not<M>(matcher: M) -> Inverted<M> {
    Inverted::new(matcher)
}

/// Free-function form of [`Matcher::compose`].
pub fn compose_with<U, T, M, F>(matcher: M, transform: F) -> Composed<M, F, T>
where
    U: ?Sized,
    M: Matcher<T>,
    F: Fn(&U) -> T,
{
    Composed::new(matcher, transform)
}

/// Free-function form of [`Matcher::and`].
pub fn both<A, B>(first: A, second: B) -> And<A, B> {
    And::new(first, second)
}

/// Free-function form of [`Matcher::or`].
pub fn either<A, B>(first: A, second: B) -> Or<A, B> {
    Or::new(first, second)
}

/// Create a matcher that requires every matcher to pass.
///
/// Evaluates left to right and stops at the first failure, whose result is
/// returned unchanged. When all pass, the last matcher's result is returned.
/// An empty list passes.
///
/// All matchers must be the same type; use [`Matcher::boxed`] to mix types.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{all_of, satisfies, Matcher};
///
/// let m = all_of(vec![
///     satisfies(|x: &i32| *x > 0, "expected > 0", "expected <= 0").boxed(),
///     satisfies(|x: &i32| *x < 100, "expected < 100", "expected >= 100").boxed(),
/// ]);
/// assert!(m.test(&50).passed());
/// assert_eq!(m.test(&150).failure_message(), "expected < 100");
/// ```
pub fn all_of<M>(matchers: Vec<M>) -> AllOf<M> {
    AllOf { matchers }
}

/// Matcher that requires all inner matchers to pass. See [`all_of`].
#[derive(Debug, Clone)]
pub struct AllOf<M> {
    matchers: Vec<M>,
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for AllOf<M> {
    fn test(&self, value: &T) -> MatchResult {
        let mut last = None;
        for matcher in &self.matchers {
            let result = matcher.test(value);
            if !result.passed() {
                return result;
            }
            last = Some(result);
        }
        last.unwrap_or_else(|| {
            MatchResult::new(
                true,
                "expected all of no matchers to match",
                "expected not all of no matchers to match",
            )
        })
    }
}

/// Create a matcher that requires at least one matcher to pass.
///
/// Evaluates left to right and stops at the first pass, whose result is
/// returned unchanged. When none pass, the last matcher's result is
/// returned. An empty list fails.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{any_of, satisfies, Matcher};
///
/// let m = any_of(vec![
///     satisfies(|x: &i32| *x == 1, "expected 1", "expected not 1").boxed(),
///     satisfies(|x: &i32| *x == 2, "expected 2", "expected not 2").boxed(),
/// ]);
/// assert!(m.test(&2).passed());
/// assert_eq!(m.test(&4).failure_message(), "expected 2");
/// ```
pub fn any_of<M>(matchers: Vec<M>) -> AnyOf<M> {
    AnyOf { matchers }
}

/// Matcher that requires at least one inner matcher to pass. See [`any_of`].
#[derive(Debug, Clone)]
pub struct AnyOf<M> {
    matchers: Vec<M>,
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for AnyOf<M> {
    fn test(&self, value: &T) -> MatchResult {
        let mut last = None;
        for matcher in &self.matchers {
            let result = matcher.test(value);
            if result.passed() {
                return result;
            }
            last = Some(result);
        }
        last.unwrap_or_else(|| {
            MatchResult::new(
                false,
                "expected any of no matchers to match",
                "expected none of no matchers to match",
            )
        })
    }
}
